//! Enumeration types for CLI parameters.

/// Output format for the citation total report.
///
/// The banner form is for humans at a terminal; the JSON form prints the
/// raw aggregate for scripting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable banner with an explicit "No data found" case.
    #[default]
    Banner,
    /// Machine-readable JSON (`null` when the collection is empty).
    Json,
}

/// Which collections `ensure-indexes` should cover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum IndexTarget {
    /// The fixed `manuscript_metadata` collection.
    Metadata,
    /// The dataset collection named by the configuration.
    Dataset,
    /// Both collections.
    #[default]
    All,
}

impl IndexTarget {
    /// Whether the metadata collection is covered.
    #[must_use]
    pub const fn includes_metadata(self) -> bool {
        matches!(self, Self::Metadata | Self::All)
    }

    /// Whether the dataset collection is covered.
    #[must_use]
    pub const fn includes_dataset(self) -> bool {
        matches!(self, Self::Dataset | Self::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_target_coverage() {
        assert!(IndexTarget::All.includes_metadata());
        assert!(IndexTarget::All.includes_dataset());
        assert!(IndexTarget::Metadata.includes_metadata());
        assert!(!IndexTarget::Metadata.includes_dataset());
        assert!(!IndexTarget::Dataset.includes_metadata());
        assert!(IndexTarget::Dataset.includes_dataset());
    }
}
