//! Output formatting for reports.
//!
//! One rendering module per format; the query code never prints. The
//! banner form reproduces the report the operators are used to reading,
//! the JSON form is for scripting.

pub mod banner;
pub mod json;

use crate::models::{CitationTotals, ReportFormat};

/// Render the citation total in the requested format.
#[must_use]
pub fn render_total(format: ReportFormat, totals: Option<&CitationTotals>) -> String {
    match format {
        ReportFormat::Banner => banner::format_total(totals),
        ReportFormat::Json => json::format_total(totals),
    }
}
