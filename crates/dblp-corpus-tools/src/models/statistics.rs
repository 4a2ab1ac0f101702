//! Cumulative ingestion statistics stored alongside the dataset.
//!
//! The ingestion workflow maintains a singleton document (key
//! `statistics`) whose `total_*` counters accumulate across runs. This
//! module only reads and checks that document.

use serde::{Deserialize, Serialize};

/// The singleton statistics document.
///
/// Counters default to 0 so documents written before a counter existed
/// still deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetStatistics {
    /// Manuscripts in the dataset.
    #[serde(default)]
    pub total_papers: i64,

    /// References examined across all runs.
    #[serde(default)]
    pub total_refs_checked: i64,

    /// References skipped (no usable identifier).
    #[serde(default)]
    pub total_refs_skipped: i64,

    /// Citations matched to a DBLP key.
    #[serde(default)]
    pub total_dblp_keys_matched: i64,

    /// Citations matched to a DOI.
    #[serde(default)]
    pub total_dois_matched: i64,

    /// Citations whose DOI came from DBLP (counted in both match totals).
    #[serde(default)]
    pub total_dois_dblp: i64,

    /// Linked citations in the dataset.
    #[serde(default)]
    pub total_citations: i64,

    /// Citation contexts attached to dataset entries.
    #[serde(default)]
    pub total_contexts_added: i64,

    /// Manuscripts with at least one citation context.
    #[serde(default)]
    pub total_papers_with_contexts: i64,

    /// Manuscripts without citation contexts.
    #[serde(default)]
    pub total_papers_without_contexts: i64,

    /// Manuscripts skipped because they carried no citations.
    #[serde(default)]
    pub total_papers_skipped_no_citations: i64,

    /// Number of ingestion runs recorded.
    #[serde(default)]
    pub total_runs: i64,

    /// Manuscripts examined in the most recent run.
    #[serde(default)]
    pub last_run_papers_checked: i64,

    /// Manuscripts inserted in the most recent run.
    #[serde(default)]
    pub last_run_papers_inserted: i64,

    /// Manuscripts skipped in the most recent run (already present).
    #[serde(default)]
    pub last_run_papers_skipped_existing: i64,

    /// Per-run history entries, oldest first.
    #[serde(default)]
    pub run_history: Vec<RunRecord>,
}

/// One entry of the run history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunRecord {
    /// ISO-8601 timestamp of the run.
    #[serde(default)]
    pub timestamp: String,

    /// Manuscripts examined during the run.
    #[serde(default)]
    pub papers_checked: i64,

    /// Manuscripts inserted during the run.
    #[serde(default)]
    pub papers_inserted: i64,

    /// Manuscripts skipped during the run (already present).
    #[serde(default)]
    pub papers_skipped_existing: i64,

    /// Citations added during the run.
    #[serde(default)]
    pub citations_added: i64,
}

/// Outcome of one consistency check.
#[derive(Debug, Clone)]
pub struct ConsistencyCheck {
    /// Short identifier of the relation being checked.
    pub name: &'static str,

    /// Whether the relation holds.
    pub passed: bool,

    /// The instantiated relation, for the report.
    pub detail: String,
}

impl DatasetStatistics {
    /// Evaluate the internal consistency relations between counters.
    ///
    /// The counters are maintained independently by the ingestion workflow,
    /// so these relations catch partial writes and drift between runs.
    #[must_use]
    pub fn consistency_checks(&self) -> Vec<ConsistencyCheck> {
        let counted = self.total_citations + self.total_refs_skipped;
        let linked =
            self.total_dblp_keys_matched + self.total_dois_matched - self.total_dois_dblp;

        vec![
            ConsistencyCheck {
                name: "refs_accounted",
                passed: counted == self.total_refs_checked,
                detail: format!(
                    "total_citations + total_refs_skipped = {} (expected {})",
                    counted, self.total_refs_checked
                ),
            },
            ConsistencyCheck {
                name: "dois_dblp_within_keys",
                passed: self.total_dois_dblp <= self.total_dblp_keys_matched,
                detail: format!(
                    "total_dois_dblp {} <= total_dblp_keys_matched {}",
                    self.total_dois_dblp, self.total_dblp_keys_matched
                ),
            },
            ConsistencyCheck {
                name: "dois_dblp_within_dois",
                passed: self.total_dois_dblp <= self.total_dois_matched,
                detail: format!(
                    "total_dois_dblp {} <= total_dois_matched {}",
                    self.total_dois_dblp, self.total_dois_matched
                ),
            },
            ConsistencyCheck {
                name: "inclusion_exclusion",
                passed: self.total_citations == linked,
                detail: format!(
                    "total_dblp_keys_matched + total_dois_matched - total_dois_dblp = {} \
                     (expected {})",
                    linked, self.total_citations
                ),
            },
            ConsistencyCheck {
                name: "skipped_non_negative",
                passed: self.total_papers_skipped_no_citations >= 0,
                detail: format!(
                    "total_papers_skipped_no_citations {} >= 0",
                    self.total_papers_skipped_no_citations
                ),
            },
        ]
    }

    /// Whether every consistency relation holds.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.consistency_checks().iter().all(|check| check.passed)
    }
}
