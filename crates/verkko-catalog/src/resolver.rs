//! Fuzzy resolution of caller-supplied dataset references.

use verkko_types::{DatasetQuery, ResolvedDataset};

use crate::DatasetCatalog;

/// Default similarity cutoff for fuzzy name matching.
pub const DEFAULT_CUTOFF: f64 = 0.5;

/// Resolves heterogeneous dataset references against a catalog.
///
/// Resolution is a pure function of catalog and query: an exact variable id
/// always wins, an approximate name is ranked by normalized edit-distance
/// similarity, and as a last resort every catalog name containing all
/// whitespace-separated keywords qualifies. "No match" is an empty result,
/// never an error.
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    catalog: &'a DatasetCatalog,
    max_matches: usize,
    cutoff: f64,
}

impl<'a> NameResolver<'a> {
    /// Creates a resolver over the given catalog with default tuning
    /// (one match, cutoff 0.5).
    #[must_use]
    pub const fn new(catalog: &'a DatasetCatalog) -> Self {
        Self {
            catalog,
            max_matches: 1,
            cutoff: DEFAULT_CUTOFF,
        }
    }

    /// Sets the maximum number of fuzzy matches returned per query.
    #[must_use]
    pub const fn with_max_matches(mut self, max_matches: usize) -> Self {
        self.max_matches = max_matches;
        self
    }

    /// Sets the similarity cutoff for fuzzy matching.
    #[must_use]
    pub const fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Resolves one query to zero, one, or many catalog entries.
    ///
    /// Archive-only datasets without a variable id cannot be retrieved
    /// through the events API and are never returned.
    #[must_use]
    pub fn resolve(&self, query: &DatasetQuery) -> Vec<ResolvedDataset> {
        match query {
            DatasetQuery::Id(id) => self.resolve_id(*id),
            DatasetQuery::Name(name) => self.resolve_name(name),
        }
    }

    /// Resolves a sequence of queries, concatenating the per-query results
    /// in input order.
    #[must_use]
    pub fn resolve_all(&self, queries: &[DatasetQuery]) -> Vec<ResolvedDataset> {
        queries.iter().flat_map(|q| self.resolve(q)).collect()
    }

    fn resolve_id(&self, id: u32) -> Vec<ResolvedDataset> {
        self.catalog
            .get_by_id(id)
            .map(|d| ResolvedDataset::new(d.name(), id))
            .into_iter()
            .collect()
    }

    fn resolve_name(&self, name: &str) -> Vec<ResolvedDataset> {
        let folded = name.to_lowercase();

        // Ranked fuzzy pass over the full catalog.
        let mut scored: Vec<(f64, ResolvedDataset)> = self
            .catalog
            .all()
            .filter_map(|d| {
                let id = d.variable_id()?;
                let score = strsim::normalized_levenshtein(&folded, &d.name().to_lowercase());
                (score >= self.cutoff).then(|| (score, ResolvedDataset::new(d.name(), id)))
            })
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(self.max_matches);

        if !scored.is_empty() {
            return scored.into_iter().map(|(_, r)| r).collect();
        }

        // Keyword containment fallback: every name containing all keywords
        // qualifies, in catalog order, unranked.
        let keywords: Vec<&str> = folded.split_whitespace().collect();
        if keywords.is_empty() {
            return Vec::new();
        }
        self.catalog
            .all()
            .filter_map(|d| {
                let id = d.variable_id()?;
                let candidate = d.name().to_lowercase();
                keywords
                    .iter()
                    .all(|kw| candidate.contains(kw))
                    .then(|| ResolvedDataset::new(d.name(), id))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> NameResolver<'static> {
        NameResolver::new(DatasetCatalog::global())
    }

    #[test]
    fn test_exact_id_bypasses_fuzzy_logic() {
        // An impossible cutoff must not affect id lookup.
        let r = resolver().with_cutoff(1.1);
        let matches = r.resolve(&DatasetQuery::Id(191));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].variable_id, 191);
    }

    #[test]
    fn test_unknown_id_is_empty() {
        assert!(resolver().resolve(&DatasetQuery::Id(999_999)).is_empty());
    }

    #[test]
    fn test_exact_name_round_trips() {
        let catalog = DatasetCatalog::global();
        let r = resolver();
        for dataset in catalog.all().filter(|d| d.is_queryable()) {
            let matches = r.resolve(&DatasetQuery::Name(dataset.name().to_uppercase()));
            assert_eq!(matches.len(), 1, "no round-trip for {:?}", dataset.name());
            assert_eq!(matches[0].name, dataset.name());
        }
    }

    #[test]
    fn test_typo_tolerated() {
        let matches = resolver().resolve(&DatasetQuery::Name(
            "Electricty consumption in Finland".into(),
        ));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Electricity consumption in Finland");
    }

    #[test]
    fn test_keyword_fallback() {
        // Far too short for the fuzzy cutoff against any full name, but the
        // keywords select the wind forecast entries.
        let matches = resolver().resolve(&DatasetQuery::Name("wind forecast".into()));
        assert!(!matches.is_empty());
        for m in &matches {
            let lowered = m.name.to_lowercase();
            assert!(lowered.contains("wind") && lowered.contains("forecast"));
        }
    }

    #[test]
    fn test_nonsense_is_empty() {
        assert!(
            resolver()
                .resolve(&DatasetQuery::Name("nonexistent-xyz-123".into()))
                .is_empty()
        );
    }

    #[test]
    fn test_resolve_all_preserves_input_order() {
        let r = resolver();
        let matches = r.resolve_all(&[DatasetQuery::Id(188), DatasetQuery::Id(191)]);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].variable_id, 188);
        assert_eq!(matches[1].variable_id, 191);
    }

    #[test]
    fn test_max_matches_limits_fuzzy_results() {
        let r = resolver().with_max_matches(3).with_cutoff(0.3);
        let matches = r.resolve(&DatasetQuery::Name(
            "Temperature in Helsinki - real time data".into(),
        ));
        assert!(!matches.is_empty());
        assert!(matches.len() <= 3);
        assert_eq!(matches[0].name, "Temperature in Helsinki - real time data");
    }
}
