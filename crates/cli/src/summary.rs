//! User-facing summary of a clone batch.

use pc_load_letter_core::cloning::CloneReport;

/// Formats one line per cloned repository followed by a totals line.
#[must_use]
pub fn summary_lines(report: &CloneReport, dry_run: bool) -> Vec<String> {
    let mut lines: Vec<String> = report
        .outcomes
        .iter()
        .map(|outcome| match (&outcome.result, dry_run) {
            (Ok(()), true) => format!(
                "Would clone {} from {} into {}",
                outcome.name,
                outcome.url,
                outcome.destination.display()
            ),
            (Ok(()), false) => format!(
                "Cloned {} into {}",
                outcome.name,
                outcome.destination.display()
            ),
            (Err(e), _) => format!("Error cloning {}: {e}", outcome.name),
        })
        .collect();

    lines.push(if report.outcomes.is_empty() {
        "No repositories selected, nothing to clone.".to_string()
    } else {
        format!(
            "{} succeeded, {} failed.",
            report.succeeded(),
            report.failed()
        )
    });

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc_load_letter_core::cloning::CloneOutcome;
    use pc_load_letter_core::error::Error;
    use std::path::PathBuf;

    fn outcome(name: &str, ok: bool) -> CloneOutcome {
        let destination = PathBuf::from(format!("/clones/{name}"));
        let url = format!("https://example.com/{name}");
        let result = if ok {
            Ok(())
        } else {
            Err(Error::DestinationNotEmpty(destination.clone()))
        };
        CloneOutcome {
            name: name.to_string(),
            url,
            destination,
            result,
        }
    }

    #[test]
    fn test_summary_for_empty_report() {
        let lines = summary_lines(&CloneReport::default(), false);
        assert_eq!(lines, vec!["No repositories selected, nothing to clone."]);
    }

    #[test]
    fn test_summary_mixed_results() {
        let report = CloneReport {
            outcomes: vec![outcome("a", true), outcome("b", false)],
        };
        let lines = summary_lines(&report, false);

        assert_eq!(lines[0], "Cloned a into /clones/a");
        assert!(lines[1].starts_with("Error cloning b: Destination `/clones/b`"));
        assert_eq!(lines[2], "1 succeeded, 1 failed.");
    }

    #[test]
    fn test_summary_dry_run() {
        let report = CloneReport {
            outcomes: vec![outcome("a", true)],
        };
        let lines = summary_lines(&report, true);
        assert_eq!(
            lines[0],
            "Would clone a from https://example.com/a into /clones/a"
        );
    }
}
