//! MongoDB client for the corpus database.
//!
//! One client handle per process: connect, run one operation, exit. The
//! driver connects lazily, so construction only validates the URI; the
//! first operation surfaces connectivity and authentication failures.

pub mod pipeline;

use futures::TryStreamExt;
use mongodb::bson::{Document, doc, from_document};
use mongodb::{Client, Collection, Database};
use tracing::{debug, info};

use crate::config::{Config, mongo};
use crate::error::{DbError, DbResult};
use crate::indexes;
use crate::models::{CitationTotals, DatasetStatistics};

/// Handle to the corpus database.
#[derive(Clone)]
pub struct CorpusClient {
    /// Underlying driver client.
    client: Client,

    /// Authentication database holding the corpus collections.
    database: String,

    /// Resolved name of the dataset collection.
    dataset_collection: String,
}

impl CorpusClient {
    /// Create a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection string does not parse.
    pub async fn connect(config: &Config) -> DbResult<Self> {
        let client = Client::with_uri_str(config.connection_uri()).await?;
        debug!(host = %config.host, database = %config.database, "MongoDB client initialized");

        Ok(Self {
            client,
            database: config.database.clone(),
            dataset_collection: config.dataset_collection(),
        })
    }

    /// Name of the dataset collection this client operates on.
    #[must_use]
    pub fn dataset_collection_name(&self) -> &str {
        &self.dataset_collection
    }

    fn database(&self) -> Database {
        self.client.database(&self.database)
    }

    fn dataset(&self) -> Collection<Document> {
        self.database().collection(&self.dataset_collection)
    }

    /// Count linked citations across the dataset collection.
    ///
    /// Returns `None` when the collection holds no documents (the
    /// aggregation produces no rows).
    ///
    /// # Errors
    ///
    /// Returns an error on driver failure or a malformed aggregate row.
    pub async fn total_linked_citations(&self) -> DbResult<Option<CitationTotals>> {
        let mut cursor = self.dataset().aggregate(pipeline::linked_citation_pipeline()).await?;

        let Some(row) = cursor.try_next().await? else {
            return Ok(None);
        };
        let totals: CitationTotals = from_document(row)?;
        debug!(collection = %self.dataset_collection, total = totals.total_count, "aggregation complete");
        Ok(Some(totals))
    }

    /// Fetch the singleton statistics document from the given collection.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::StatsNotFound`] when the document is absent.
    pub async fn dataset_statistics(&self, collection: &str) -> DbResult<DatasetStatistics> {
        let handle = self.database().collection::<DatasetStatistics>(collection);
        handle
            .find_one(doc! { "key": mongo::STATS_KEY })
            .await?
            .ok_or_else(|| DbError::stats_not_found(collection))
    }

    /// Ensure the collation-aware indexes on `manuscript_metadata`.
    ///
    /// Index creation is idempotent; re-running against an indexed
    /// collection is a no-op on the server.
    ///
    /// # Errors
    ///
    /// Returns an error on driver failure.
    pub async fn ensure_metadata_indexes(&self) -> DbResult<Vec<String>> {
        let handle = self.database().collection::<Document>(mongo::METADATA_COLLECTION);
        let created = handle.create_indexes(indexes::metadata_index_models()).await?;
        info!(
            collection = mongo::METADATA_COLLECTION,
            count = created.index_names.len(),
            "metadata indexes ensured"
        );
        Ok(created.index_names)
    }

    /// Ensure the ingestion-workflow indexes on the dataset collection.
    ///
    /// # Errors
    ///
    /// Returns an error on driver failure.
    pub async fn ensure_dataset_indexes(&self) -> DbResult<Vec<String>> {
        let created = self.dataset().create_indexes(indexes::dataset_index_models()).await?;
        info!(
            collection = %self.dataset_collection,
            count = created.index_names.len(),
            "dataset indexes ensured"
        );
        Ok(created.index_names)
    }
}

impl std::fmt::Debug for CorpusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusClient")
            .field("database", &self.database)
            .field("dataset_collection", &self.dataset_collection)
            .finish_non_exhaustive()
    }
}
