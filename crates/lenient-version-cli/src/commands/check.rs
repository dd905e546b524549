use std::fmt::Write;

use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use crate::commands::{ExitStatus, parse_version};
use crate::printer::Printer;

/// Pairs of versions where the first must sort strictly before the second.
const ORDERED_PAIRS: &[(&str, &str)] = &[
    ("1.0.0", "2.0.0"),
    ("1.0.0", "1.42.0"),
    ("1.2.0", "1.2.42"),
    ("1.1.0-alpha", "1.2.0-alpha.1"),
    ("1.0.1b", "1.0.10-alpha.beta"),
    ("1.0.0-rc.1", "1.0.0"),
];

/// Check `<`, `>` and `!=` for every pair in [`ORDERED_PAIRS`].
#[instrument(skip_all)]
pub(crate) fn check(printer: Printer) -> Result<ExitStatus> {
    let mut failures = 0usize;

    for (left, right) in ORDERED_PAIRS {
        let lower = parse_version(left)?;
        let higher = parse_version(right)?;

        let checks = [
            (lower < higher, format!("{left} < {right}")),
            (higher > lower, format!("{right} > {left}")),
            (higher != lower, format!("{right} != {left}")),
        ];
        for (passed, expectation) in checks {
            if passed {
                debug!("Passed: {expectation}");
            } else {
                failures += 1;
                writeln!(
                    printer.stderr(),
                    "{}: expected {expectation}",
                    "check failed".red().bold()
                )?;
            }
        }
    }

    if failures > 0 {
        writeln!(
            printer.stderr(),
            "{failures} of {} checks failed",
            ORDERED_PAIRS.len() * 3
        )?;
        return Ok(ExitStatus::Failure);
    }

    writeln!(printer.stdout(), "All checks passed")?;
    Ok(ExitStatus::Success)
}
