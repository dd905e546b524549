use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;

use lenient_version::Version;

pub(crate) use check::check;
pub(crate) use compare::compare;
pub(crate) use parse::parse;
pub(crate) use sort::{max, sort};

mod check;
mod compare;
mod parse;
mod sort;

#[derive(Copy, Clone)]
pub(crate) enum ExitStatus {
    /// The command succeeded.
    Success,

    /// The command ran, but the versions didn't satisfy the expected ordering.
    Failure,

    /// The command failed with an error, e.g. an invalid version.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => Self::from(0),
            ExitStatus::Failure => Self::from(1),
            ExitStatus::Error => Self::from(2),
        }
    }
}

/// Parse a version given on the command line.
pub(crate) fn parse_version(version: &str) -> anyhow::Result<Version> {
    Version::from_str(version).with_context(|| format!("Failed to parse version `{version}`"))
}
