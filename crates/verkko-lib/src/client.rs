//! High-level retrieval client.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use verkko_catalog::{DEFAULT_CUTOFF, DatasetCatalog, NameResolver};
use verkko_fetch::{ApiClient, ClientConfig, Fetch, SplitterConfig, collect_events, parse_events};
use verkko_types::{
    AnnotatedObservation, DatasetQuery, Observation, ResolvedDataset, Result, RetrievalFailure,
    TimeWindow, VerkkoError,
};

/// Retrieved rows for one dataset over one window.
#[derive(Debug)]
pub struct DatasetTable {
    /// Catalog name of the dataset.
    pub name: String,
    /// Variable id of the dataset.
    pub variable_id: u32,
    /// Rows, chronological across sub-windows.
    pub rows: Vec<Observation>,
    /// Sub-windows that failed terminally.
    pub failures: Vec<RetrievalFailure>,
}

impl DatasetTable {
    /// Returns true if every sub-window of this dataset succeeded.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Result of a retrieval: either per-dataset history tables or one batch
/// of latest events.
#[derive(Debug)]
pub enum Retrieval {
    /// Latest event of each requested dataset, from one batched call.
    Latest(Vec<AnnotatedObservation>),
    /// Per-dataset event tables, in request order.
    History(Vec<DatasetTable>),
}

/// High-level client: resolves dataset references against the catalog and
/// retrieves their events through a rate-limited fetcher.
///
/// Generic over [`Fetch`] so tests can substitute a scripted endpoint;
/// production code uses the default [`ApiClient`].
#[derive(Debug)]
pub struct OpenDataClient<F: Fetch = ApiClient> {
    fetcher: F,
    cutoff: f64,
    max_matches: usize,
    splitter: SplitterConfig,
}

impl OpenDataClient<ApiClient> {
    /// Creates a client with platform defaults and the given api key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(api_key))
    }

    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::from_fetcher(ApiClient::new(config)?))
    }
}

impl<F: Fetch> OpenDataClient<F> {
    /// Creates a client around an existing fetcher.
    #[must_use]
    pub fn from_fetcher(fetcher: F) -> Self {
        Self {
            fetcher,
            cutoff: DEFAULT_CUTOFF,
            max_matches: 1,
            splitter: SplitterConfig::default(),
        }
    }

    /// Overrides the fuzzy-match similarity cutoff.
    #[must_use]
    pub const fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Overrides the number of catalog matches kept per name query.
    #[must_use]
    pub const fn with_max_matches(mut self, max_matches: usize) -> Self {
        self.max_matches = max_matches;
        self
    }

    /// Overrides the window bisection tuning.
    #[must_use]
    pub fn with_splitter_config(mut self, splitter: SplitterConfig) -> Self {
        self.splitter = splitter;
        self
    }

    /// Resolves dataset references against the embedded catalog.
    #[must_use]
    pub fn resolve(&self, queries: &[DatasetQuery]) -> Vec<ResolvedDataset> {
        NameResolver::new(DatasetCatalog::global())
            .with_cutoff(self.cutoff)
            .with_max_matches(self.max_matches)
            .resolve_all(queries)
    }

    /// Retrieves data for the given dataset references.
    ///
    /// With both `start` and `end`, events over `[start, end)` are fetched
    /// per dataset, bisecting windows the platform rejects as too large.
    /// With only `start`, `end` defaults to the current time. With neither,
    /// one batched call fetches the latest event of every resolved dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if no reference resolves, if `end` is given without
    /// `start`, if the window is invalid, or if the batched latest call
    /// fails. Per-window failures during history retrieval are reported in
    /// the returned tables instead.
    pub async fn get_data(
        &self,
        queries: &[DatasetQuery],
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Retrieval> {
        let resolved = self.resolve(queries);
        if resolved.is_empty() {
            let names: Vec<&str> = DatasetCatalog::global().names().collect();
            warn!(
                queries = queries.len(),
                "no dataset matched; available datasets: {}",
                names.join(", ")
            );
            return Err(VerkkoError::NoMatches);
        }
        debug!(resolved = resolved.len(), "resolved dataset references");

        match (start, end) {
            (None, Some(_)) => Err(VerkkoError::EndWithoutStart),
            (None, None) => Ok(Retrieval::Latest(self.latest(&resolved).await?)),
            (Some(start), end) => {
                let end = end.unwrap_or_else(Utc::now);
                let window = TimeWindow::new(start, end)?;
                Ok(Retrieval::History(self.history(&resolved, window).await))
            }
        }
    }

    /// Fetches the latest event of each resolved dataset in one batched
    /// call.
    ///
    /// # Errors
    ///
    /// All-or-nothing: a transport failure or non-success status fails the
    /// whole call.
    pub async fn latest(&self, resolved: &[ResolvedDataset]) -> Result<Vec<AnnotatedObservation>> {
        let ids: Vec<u32> = resolved.iter().map(|r| r.variable_id).collect();
        let response = self.fetcher.latest(&ids).await?;
        if !response.is_success() {
            return Err(VerkkoError::Api {
                status: response.status,
                body: response.body,
            });
        }

        let rows = parse_events(&response.body)?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let name = resolved
                    .iter()
                    .find(|r| r.variable_id == row.variable_id)
                    .map_or_else(|| row.variable_id.to_string(), |r| r.name.clone());
                row.annotate(name)
            })
            .collect())
    }

    /// Fetches each resolved dataset's events over the window, one table
    /// per dataset in request order.
    pub async fn history(
        &self,
        resolved: &[ResolvedDataset],
        window: TimeWindow,
    ) -> Vec<DatasetTable> {
        let mut tables = Vec::with_capacity(resolved.len());
        for dataset in resolved {
            let outcome =
                collect_events(&self.fetcher, &self.splitter, dataset.variable_id, window).await;
            debug!(
                dataset = %dataset.name,
                rows = outcome.rows.len(),
                requests = outcome.requests,
                failures = outcome.failures.len(),
                "dataset retrieved"
            );
            tables.push(DatasetTable {
                name: dataset.name.clone(),
                variable_id: dataset.variable_id,
                rows: outcome.rows,
                failures: outcome.failures,
            });
        }
        tables
    }
}
