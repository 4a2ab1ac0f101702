//! Error types for the corpus tools.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations.

/// Errors from configuration loading and validation.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// One or more environment variables are unset or empty.
    #[error("missing required environment variables: {}", vars.join(", "))]
    MissingVars {
        /// Names of every variable that could not be resolved.
        vars: Vec<&'static str>,
    },
}

/// Errors from the database layer.
#[derive(thiserror::Error, Debug)]
pub enum DbError {
    /// Driver error (connection, authentication, server-side failure).
    #[error("MongoDB error: {0}")]
    Driver(#[from] mongodb::error::Error),

    /// An aggregate row did not match the expected shape.
    #[error("malformed aggregate result: {0}")]
    MalformedResult(#[from] mongodb::bson::de::Error),

    /// The singleton statistics document is absent.
    #[error("no statistics document in collection '{collection}'")]
    StatsNotFound {
        /// Collection that was queried.
        collection: String,
    },
}

impl DbError {
    /// Create a missing-statistics error.
    #[must_use]
    pub fn stats_not_found(collection: impl Into<String>) -> Self {
        Self::StatsNotFound { collection: collection.into() }
    }
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_vars_message_joins_names() {
        let err = ConfigError::MissingVars { vars: vec!["MONGO_IP", "MONGO_DB"] };
        assert_eq!(err.to_string(), "missing required environment variables: MONGO_IP, MONGO_DB");
    }

    #[test]
    fn test_stats_not_found_names_collection() {
        let err = DbError::stats_not_found("dataset_stats_FullText_2024-04-01");
        assert!(err.to_string().contains("dataset_stats_FullText_2024-04-01"));
    }
}
