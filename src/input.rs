// src/input.rs
// =============================================================================
// This module reads the target list: a plain text file with one app name
// per line.
//
// Two rules matter here:
// - Blank lines are NOT skipped. An empty line becomes an empty-string
//   target, which the probe worker later reports as "no site name was
//   provided". The report must always have one row per input line.
// - Input order is preserved. The prober makes no ordering promises on
//   output, but the list itself stays in file order.
//
// An unreadable file is a fatal error: without a target list there is no
// work to do, so we propagate the error up to main (which exits with
// code 2).
//
// Rust concepts:
// - anyhow::Context: Attach a human-readable message to an error
// - Splitting pure logic from I/O so the logic is unit-testable
// =============================================================================

use anyhow::{Context, Result};

// Reads the target list from a file
//
// Parameters:
//   path: path to the input file
//
// Returns: Result<Vec<String>>
//   Success: one entry per line, in file order, blank lines included
//   Error: if the file cannot be read
pub fn read_targets(path: &str) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("could not read input file '{}'", path))?;

    Ok(split_targets(&contents))
}

// Splits file contents into one target per line
//
// This is the pure core of read_targets, separated out so tests don't
// need a real file on disk.
//
// str::lines() treats both "\n" and "\r\n" as terminators and does not
// produce a trailing empty entry for a file that ends in a newline -
// the same behavior as the line scanner in the original tool.
fn split_targets(contents: &str) -> Vec<String> {
    contents.lines().map(|line| line.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_target_per_line() {
        let targets = split_targets("alpha\nbeta\ngamma\n");
        assert_eq!(targets, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let targets = split_targets("alpha\n\nbeta\n");
        assert_eq!(targets, vec!["alpha", "", "beta"]);
    }

    #[test]
    fn test_no_trailing_newline() {
        let targets = split_targets("alpha\nbeta");
        assert_eq!(targets, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let targets = split_targets("alpha\r\nbeta\r\n");
        assert_eq!(targets, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_empty_input() {
        let targets = split_targets("");
        assert!(targets.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = read_targets("/definitely/not/a/real/path.txt");
        assert!(result.is_err());
    }
}
