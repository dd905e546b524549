use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use crate::number::Number;

/// A single segment of a prerelease, such as `alpha` or `1` in `1.2.3-alpha.1`.
///
/// Segments that consist entirely of ASCII digits are numbers, everything else (including the
/// empty segment produced by consecutive separators) is opaque text. Numeric segments always
/// compare lower than textual segments, numbers compare by value and text compares byte-wise.
///
/// The derived `Ord` implementation for `[PrereleaseSegment]` then gives the ordering of
/// whole prereleases: segment by segment, with a shorter prerelease sorting first when it is a
/// prefix of the longer one.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum PrereleaseSegment {
    /// A segment made only of ASCII digits, such as the `1` in `rc.1`
    Numeric(Number),
    /// Any other segment, such as `rc` in `rc.1`
    Alphanumeric(String),
}

impl PrereleaseSegment {
    /// Classify a single segment.
    pub(crate) fn from_segment(segment: &str) -> Self {
        if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
            Self::Numeric(Number::from_digits(segment))
        } else {
            Self::Alphanumeric(segment.to_string())
        }
    }

    /// The primary sort key: numbers before text.
    fn rank(&self) -> u8 {
        match self {
            Self::Numeric(_) => 0,
            Self::Alphanumeric(_) => 1,
        }
    }

    /// Returns `true` if this segment is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

impl Display for PrereleaseSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(number) => write!(f, "{number}"),
            Self::Alphanumeric(string) => write!(f, "{string}"),
        }
    }
}

impl PartialOrd for PrereleaseSegment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PrereleaseSegment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Numeric(n1), Self::Numeric(n2)) => n1.cmp(n2),
            (Self::Alphanumeric(s1), Self::Alphanumeric(s2)) => s1.cmp(s2),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Split a prerelease such as `alpha.1` or `beta-2` into its segments.
///
/// `-` inside the prerelease acts as an additional separator.
pub(crate) fn parse_prerelease(prerelease: &str) -> Vec<PrereleaseSegment> {
    prerelease
        .split(&['.', '-'][..])
        .map(PrereleaseSegment::from_segment)
        .collect()
}
