use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;
use tracing::instrument;

use lenient_version::{Number, PrereleaseSegment, Version};

use crate::cli::OutputFormat;
use crate::commands::{ExitStatus, parse_version};
use crate::printer::Printer;

/// The parsed components of a version, as shown by `parse --output-format json`.
#[derive(Serialize)]
struct VersionReport<'a> {
    version: &'a Version,
    major: NumberReport<'a>,
    minor: NumberReport<'a>,
    patch: NumberReport<'a>,
    prerelease: Vec<SegmentReport<'a>>,
    build: Option<&'a str>,
}

/// A JSON number when it fits in a `u64`, the digits as a string otherwise.
#[derive(Serialize)]
#[serde(untagged)]
enum NumberReport<'a> {
    Fits(u64),
    Digits(&'a str),
}

impl<'a> From<&'a Number> for NumberReport<'a> {
    fn from(number: &'a Number) -> Self {
        match number.to_u64() {
            Some(value) => Self::Fits(value),
            None => Self::Digits(number.as_str()),
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum SegmentReport<'a> {
    Numeric(NumberReport<'a>),
    Alphanumeric(&'a str),
}

impl<'a> From<&'a PrereleaseSegment> for SegmentReport<'a> {
    fn from(segment: &'a PrereleaseSegment) -> Self {
        match segment {
            PrereleaseSegment::Numeric(number) => Self::Numeric(NumberReport::from(number)),
            PrereleaseSegment::Alphanumeric(text) => Self::Alphanumeric(text),
        }
    }
}

impl<'a> From<&'a Version> for VersionReport<'a> {
    fn from(version: &'a Version) -> Self {
        Self {
            version,
            major: NumberReport::from(version.major()),
            minor: NumberReport::from(version.minor()),
            patch: NumberReport::from(version.patch()),
            prerelease: version.prerelease().iter().map(SegmentReport::from).collect(),
            build: version.build(),
        }
    }
}

/// Print the components of a version.
#[instrument(skip(printer))]
pub(crate) fn parse(
    version: &str,
    output_format: OutputFormat,
    printer: Printer,
) -> Result<ExitStatus> {
    let version = parse_version(version)?;

    let mut stdout = printer.stdout();
    match output_format {
        OutputFormat::Text => {
            writeln!(stdout, "version: {version}")?;
            writeln!(stdout, "major: {}", version.major())?;
            writeln!(stdout, "minor: {}", version.minor())?;
            writeln!(stdout, "patch: {}", version.patch())?;
            if version.is_prerelease() {
                let prerelease = version
                    .prerelease()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<String>>()
                    .join(".");
                writeln!(stdout, "prerelease: {prerelease}")?;
            }
            if let Some(build) = version.build() {
                writeln!(stdout, "build: {build}")?;
            }
        }
        OutputFormat::Json => {
            let report = VersionReport::from(&version);
            writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }

    Ok(ExitStatus::Success)
}
