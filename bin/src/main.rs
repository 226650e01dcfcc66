//! verkko CLI - Fingrid open data retrieval.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "verkko")]
#[command(about = "Fingrid open data retrieval", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Api key for the open data platform. Defaults to $VERKKO_API_KEY.
    #[arg(short = 'k', long, global = true)]
    api_key: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download dataset events over a time period
    Download {
        /// Dataset references: variable ids or (approximate) names
        #[arg(required = true)]
        datasets: Vec<String>,

        /// Start of the period: RFC 3339 or a digit string (2021, 202106,
        /// 20210601, up to 20210601123000)
        #[arg(short, long)]
        start: String,

        /// End of the period, same shapes as --start. Defaults to now.
        #[arg(short, long)]
        end: Option<String>,

        /// Output directory. Files named <dataset>_<start>_<end>.<format>
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Fuzzy-match similarity cutoff for name references (0.0 to 1.0)
        #[arg(long, default_value = "0.5")]
        cutoff: f64,
    },

    /// Fetch the latest event of each dataset in one call
    Latest {
        /// Dataset references: variable ids or (approximate) names
        #[arg(required = true)]
        datasets: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List catalog datasets
    List {
        /// Search pattern (name or description substring)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show dataset details
    Info {
        /// Dataset reference: variable id or (approximate) name
        dataset: String,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Download {
            datasets,
            start,
            end,
            output_dir,
            format,
            cutoff,
        } => {
            commands::download::download(
                &datasets,
                &start,
                end.as_deref(),
                &output_dir,
                format,
                cutoff,
                cli.api_key.as_deref(),
            )
            .await
        }
        Commands::Latest {
            datasets,
            format,
            output,
        } => {
            commands::latest::latest(&datasets, format, output.as_deref(), cli.api_key.as_deref())
                .await
        }
        Commands::List { search } => commands::list::list_datasets(search.as_deref()),
        Commands::Info { dataset } => commands::info::show_info(&dataset),
    }
}
