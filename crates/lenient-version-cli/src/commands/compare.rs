use std::cmp::Ordering;
use std::fmt::Write;

use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use crate::commands::{ExitStatus, parse_version};
use crate::printer::Printer;

/// Print how two versions relate, e.g. `1.0.0-rc.1 < 1.0.0`.
#[instrument(skip(printer))]
pub(crate) fn compare(left: &str, right: &str, printer: Printer) -> Result<ExitStatus> {
    let left = parse_version(left)?;
    let right = parse_version(right)?;

    let ordering = left.cmp(&right);
    debug!("Compared {left:?} with {right:?}: {ordering:?}");

    let operator = match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    };
    writeln!(
        printer.stdout(),
        "{} {} {}",
        left.bold(),
        operator,
        right.bold()
    )?;

    Ok(ExitStatus::Success)
}
