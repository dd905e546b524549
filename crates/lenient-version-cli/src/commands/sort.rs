use std::fmt::Write;

use anyhow::Result;
use tracing::{debug, instrument};

use lenient_version::Version;

use crate::commands::{ExitStatus, parse_version};
use crate::printer::Printer;

/// Print the versions in ascending order, or descending with `reverse`.
///
/// Versions that compare equal, such as `1.0.0+a` and `1.0.0+b`, keep the order in which they
/// were given.
#[instrument(skip(printer))]
pub(crate) fn sort(versions: &[String], reverse: bool, printer: Printer) -> Result<ExitStatus> {
    let mut versions = versions
        .iter()
        .map(|version| parse_version(version))
        .collect::<Result<Vec<Version>>>()?;

    if reverse {
        versions.sort_by(|a, b| b.cmp(a));
    } else {
        versions.sort();
    }
    debug!("Sorted {} versions", versions.len());

    let mut stdout = printer.stdout();
    for version in &versions {
        writeln!(stdout, "{version}")?;
    }

    Ok(ExitStatus::Success)
}

/// Print the highest of the given versions.
///
/// Among versions that compare equal, the last one given wins.
#[instrument(skip(printer))]
pub(crate) fn max(versions: &[String], printer: Printer) -> Result<ExitStatus> {
    let versions = versions
        .iter()
        .map(|version| parse_version(version))
        .collect::<Result<Vec<Version>>>()?;

    let Some(max) = versions.iter().max() else {
        anyhow::bail!("At least one version is required");
    };
    writeln!(printer.stdout(), "{max}")?;

    Ok(ExitStatus::Success)
}
