//! Corpus tools entry point.

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use dblp_corpus_tools::models::{IndexTarget, ReportFormat};
use dblp_corpus_tools::{Config, CorpusClient, config, formatters};

#[derive(Parser, Debug)]
#[command(name = "dblp-corpus-tools")]
#[command(about = "Operational tools for the MongoDB-hosted DBLP citation corpus")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report the total number of linked citations in the dataset collection
    TotalCitations {
        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Banner)]
        format: ReportFormat,
    },

    /// Create the corpus indexes (idempotent)
    EnsureIndexes {
        /// Collections to cover
        #[arg(long, value_enum, default_value_t = IndexTarget::All)]
        target: IndexTarget,
    },

    /// Print the cumulative ingestion statistics
    Stats {
        /// Print the summary without running consistency checks
        #[arg(long)]
        skip_validation: bool,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = Config::from_env()?;
    let client = CorpusClient::connect(&config).await?;

    match cli.command {
        Command::TotalCitations { format } => {
            let totals = client.total_linked_citations().await?;
            println!("{}", formatters::render_total(format, totals.as_ref()));
        }

        Command::EnsureIndexes { target } => {
            if target.includes_metadata() {
                let names = client.ensure_metadata_indexes().await?;
                println!(
                    "{}: {} indexes ensured",
                    config::mongo::METADATA_COLLECTION,
                    names.len()
                );
            }
            if target.includes_dataset() {
                let names = client.ensure_dataset_indexes().await?;
                println!("{}: {} indexes ensured", client.dataset_collection_name(), names.len());
            }
        }

        Command::Stats { skip_validation } => {
            let collection = config.stats_collection_name()?;
            let stats = client.dataset_statistics(&collection).await?;
            print!("{}", formatters::banner::format_statistics(&stats));

            if !skip_validation {
                let checks = stats.consistency_checks();
                print!("{}", formatters::banner::format_checks(&checks));
                if checks.iter().any(|check| !check.passed) {
                    anyhow::bail!("statistics validation failed");
                }
            }
        }
    }

    Ok(())
}
