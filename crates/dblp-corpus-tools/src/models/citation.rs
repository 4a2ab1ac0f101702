//! Citation data model matching the corpus document schema.

use serde::{Deserialize, Serialize};

/// One entry of a manuscript's `cited_papers` array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CitedPaper {
    /// DBLP key of the cited work, when the ingestion workflow matched one.
    #[serde(default)]
    pub dblp_id: Option<String>,

    /// DOI of the cited work.
    #[serde(default)]
    pub doi: Option<String>,
}

impl CitedPaper {
    /// Whether this citation carries at least one identifier.
    ///
    /// A citation is *linked* when `dblp_id` or `doi` is present and
    /// non-null. This is the client-side mirror of the `$ifNull`/`$or`
    /// condition the aggregation evaluates server-side.
    #[must_use]
    pub const fn is_linked(&self) -> bool {
        self.dblp_id.is_some() || self.doi.is_some()
    }
}

/// One corpus document: a manuscript and the papers it cites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManuscriptRecord {
    /// Ordered citation records extracted from the manuscript.
    #[serde(default)]
    pub cited_papers: Vec<CitedPaper>,
}

impl ManuscriptRecord {
    /// Number of linked citations in this manuscript.
    #[must_use]
    pub fn linked_citations(&self) -> usize {
        self.cited_papers.iter().filter(|paper| paper.is_linked()).count()
    }
}

/// Result row of the citation-count aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationTotals {
    /// Linked citations summed across the whole collection.
    pub total_count: i64,
}

impl CitationTotals {
    /// Compute totals client-side from in-memory records.
    ///
    /// Matches what the aggregation produces for the same documents; used
    /// for verification against small samples.
    #[must_use]
    pub fn from_records(records: &[ManuscriptRecord]) -> Self {
        let total_count = records.iter().map(|record| record.linked_citations() as i64).sum();
        Self { total_count }
    }
}
