//! DBLP corpus tools
//!
//! Operational CLI for a MongoDB-hosted DBLP citation corpus: report the
//! total number of citations carrying a DBLP key or DOI, ensure the
//! collection indexes, and summarize the ingestion statistics.
//!
//! # Example
//!
//! ```no_run
//! use dblp_corpus_tools::{Config, CorpusClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = CorpusClient::connect(&config).await?;
//!
//!     let totals = client.total_linked_citations().await?;
//!     println!("{totals:?}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod indexes;
pub mod models;

pub use client::CorpusClient;
pub use config::Config;
pub use error::{ConfigError, DbError};
