//! Machine-readable JSON output.

use crate::models::CitationTotals;

/// Serialize the aggregate result as JSON.
///
/// An empty aggregate prints as `null`, leaving the empty-collection check
/// to the consumer.
#[must_use]
pub fn format_total(totals: Option<&CitationTotals>) -> String {
    serde_json::to_string_pretty(&totals).unwrap_or_else(|_| "null".to_string())
}
