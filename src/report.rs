// src/report.rs
// =============================================================================
// This module renders the final report.
//
// Two formats:
// - The default CSV-style text report with a fixed header row:
//     Application,Accessible,HTTP Status,Notes
//   One row per result, fields comma-joined in declaration order. The
//   notes field is NOT escaped or quoted, even if it contains commas -
//   that matches the original tool's output byte-for-byte, at the cost of
//   not being strictly CSV-safe. Consumers that need real CSV should use
//   --json instead.
// - JSON (--json): a pretty-printed array of result objects via serde.
//
// Rows appear in the order the collector drained them (completion order).
// Rendering never reorders or drops anything.
// =============================================================================

use anyhow::Result;

use crate::probe::ProbeResult;

// The fixed header row of the text report
const CSV_HEADER: &str = "Application,Accessible,HTTP Status,Notes";

// Renders the CSV-style text report
//
// Parameters:
//   results: the collected probe results, in drain order
//
// Returns: the full report as one String, one line per result plus the
// header, each line newline-terminated
pub fn render_csv(results: &[ProbeResult]) -> String {
    let mut out = String::with_capacity(64 * (results.len() + 1));

    out.push_str(CSV_HEADER);
    out.push('\n');

    for result in results {
        // Notes deliberately unescaped - see the module header
        out.push_str(&format!(
            "{},{},{},{}\n",
            result.app, result.accessible, result.status, result.notes
        ));
    }

    out
}

// Renders the results as pretty-printed JSON
pub fn render_json(results: &[ProbeResult]) -> Result<String> {
    let json = serde_json::to_string_pretty(results)?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::STATUS_UNAVAILABLE;

    fn sample(app: &str, accessible: bool, status: u16, notes: &str) -> ProbeResult {
        ProbeResult {
            app: app.to_string(),
            accessible,
            status,
            notes: notes.to_string(),
        }
    }

    #[test]
    fn test_empty_report_is_just_the_header() {
        let report = render_csv(&[]);
        assert_eq!(report, "Application,Accessible,HTTP Status,Notes\n");
    }

    #[test]
    fn test_one_row_per_result() {
        let results = vec![
            sample("alpha", true, 200, "HTML page"),
            sample("beta", false, STATUS_UNAVAILABLE, "no site name was provided"),
        ];
        let report = render_csv(&results);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Application,Accessible,HTTP Status,Notes");
        assert_eq!(lines[1], "alpha,true,200,HTML page");
        assert_eq!(lines[2], "beta,false,999,no site name was provided");
    }

    #[test]
    fn test_notes_with_commas_are_not_escaped() {
        // Fidelity to the original output: the notes column is raw text
        let results = vec![sample(
            "gamma",
            true,
            200,
            "found this (first 3 bytes): a,b...",
        )];
        let report = render_csv(&results);
        assert!(report.contains("gamma,true,200,found this (first 3 bytes): a,b...\n"));
    }

    #[test]
    fn test_json_round_trips() {
        let results = vec![sample("alpha", true, 200, "HTML page")];
        let json = render_json(&results).unwrap();
        let parsed: Vec<ProbeResult> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].app, "alpha");
        assert!(parsed[0].accessible);
        assert_eq!(parsed[0].status, 200);
    }
}
