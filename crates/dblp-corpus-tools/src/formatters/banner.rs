//! Human-readable terminal output.

use crate::models::{CitationTotals, ConsistencyCheck, DatasetStatistics};

const RULE: &str = "-----------------------------";
const WIDE_RULE: &str =
    "================================================================================";

/// Format the citation total as a banner.
///
/// An empty aggregate (no documents in the collection) is reported
/// explicitly rather than printed as an empty structure.
#[must_use]
pub fn format_total(totals: Option<&CitationTotals>) -> String {
    match totals {
        Some(totals) => {
            format!("\n{RULE}\nTotal citation count: {}\n{RULE}\n", totals.total_count)
        }
        None => "No data found".to_string(),
    }
}

/// Format the cumulative statistics summary.
#[must_use]
pub fn format_statistics(stats: &DatasetStatistics) -> String {
    let mut output = String::new();

    output.push_str(&format!("{WIDE_RULE}\nDATASET STATISTICS\n{WIDE_RULE}\n"));
    output.push_str(&format!("Total runs: {}\n\n", stats.total_runs));

    output.push_str("Cumulative dataset counters:\n");
    output.push_str(&format!("  Papers in dataset: {}\n", stats.total_papers));
    output.push_str(&format!("  Citations: {}\n", stats.total_citations));
    output.push_str(&format!("  References checked: {}\n", stats.total_refs_checked));
    output.push_str(&format!("  References skipped: {}\n", stats.total_refs_skipped));
    output.push_str(&format!(
        "  Papers skipped (no citations): {}\n\n",
        stats.total_papers_skipped_no_citations
    ));

    output.push_str("Cumulative matching counters:\n");
    output.push_str(&format!("  DBLP keys matched: {}\n", stats.total_dblp_keys_matched));
    output.push_str(&format!("  DOIs matched: {}\n", stats.total_dois_matched));
    output.push_str(&format!("  DOIs from DBLP: {}\n\n", stats.total_dois_dblp));

    if stats.total_papers_with_contexts > 0 || stats.total_contexts_added > 0 {
        output.push_str("Cumulative context counters:\n");
        output.push_str(&format!(
            "  Papers with contexts: {}\n",
            stats.total_papers_with_contexts
        ));
        output.push_str(&format!(
            "  Papers without contexts: {}\n",
            stats.total_papers_without_contexts
        ));
        output.push_str(&format!("  Contexts added: {}\n\n", stats.total_contexts_added));
    }

    output.push_str("Last run:\n");
    output.push_str(&format!("  Papers checked: {}\n", stats.last_run_papers_checked));
    output.push_str(&format!("  Papers inserted: {}\n", stats.last_run_papers_inserted));
    output.push_str(&format!(
        "  Papers skipped (existing): {}\n",
        stats.last_run_papers_skipped_existing
    ));

    // Recent history only; full history grows unbounded across runs.
    let start = stats.run_history.len().saturating_sub(5);
    let recent = &stats.run_history[start..];
    if !recent.is_empty() {
        output.push_str(&format!("\nRun history (last {}):\n", recent.len()));
        for run in recent {
            output.push_str(&format!(
                "  {}: {} checked, {} inserted, {} skipped, {} citations added\n",
                run.timestamp,
                run.papers_checked,
                run.papers_inserted,
                run.papers_skipped_existing,
                run.citations_added,
            ));
        }
    }

    output.push_str(&format!("{WIDE_RULE}\n"));
    output
}

/// Format consistency check outcomes, one line per check.
#[must_use]
pub fn format_checks(checks: &[ConsistencyCheck]) -> String {
    let mut output = String::from("Consistency checks:\n");

    for check in checks {
        let status = if check.passed { "PASS" } else { "FAIL" };
        output.push_str(&format!("  {status} {}: {}\n", check.name, check.detail));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RunRecord;

    #[test]
    fn test_total_banner_exact_shape() {
        let rendered = format_total(Some(&CitationTotals { total_count: 1234 }));
        assert_eq!(
            rendered,
            "\n-----------------------------\n\
             Total citation count: 1234\n\
             -----------------------------\n"
        );
    }

    #[test]
    fn test_empty_aggregate_reports_no_data() {
        assert_eq!(format_total(None), "No data found");
    }

    #[test]
    fn test_statistics_summary_sections() {
        let stats = DatasetStatistics {
            total_papers: 10,
            total_citations: 40,
            total_runs: 2,
            ..DatasetStatistics::default()
        };
        let rendered = format_statistics(&stats);
        assert!(rendered.contains("DATASET STATISTICS"));
        assert!(rendered.contains("Papers in dataset: 10"));
        assert!(rendered.contains("Citations: 40"));
        assert!(rendered.contains("Total runs: 2"));
        // No contexts recorded, so the context block is omitted.
        assert!(!rendered.contains("Papers with contexts"));
    }

    #[test]
    fn test_statistics_summary_truncates_history() {
        let stats = DatasetStatistics {
            run_history: (0..8)
                .map(|i| RunRecord { timestamp: format!("2024-04-0{}T00:00:00", i + 1), ..RunRecord::default() })
                .collect(),
            ..DatasetStatistics::default()
        };
        let rendered = format_statistics(&stats);
        assert!(rendered.contains("Run history (last 5):"));
        assert!(!rendered.contains("2024-04-03"));
        assert!(rendered.contains("2024-04-08"));
    }

    #[test]
    fn test_checks_report_marks_failures() {
        let checks = vec![
            ConsistencyCheck { name: "refs_accounted", passed: true, detail: "500 = 500".into() },
            ConsistencyCheck { name: "inclusion_exclusion", passed: false, detail: "380 != 390".into() },
        ];
        let rendered = format_checks(&checks);
        assert!(rendered.contains("PASS refs_accounted"));
        assert!(rendered.contains("FAIL inclusion_exclusion"));
    }
}
