//! Data models for corpus documents and reports.
//!
//! All models use `#[serde(default)]` for optional fields so partially
//! populated documents written by older ingestion runs still deserialize.

mod citation;
mod enums;
mod statistics;

pub use citation::{CitationTotals, CitedPaper, ManuscriptRecord};
pub use enums::{IndexTarget, ReportFormat};
pub use statistics::{ConsistencyCheck, DatasetStatistics, RunRecord};
