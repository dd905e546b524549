use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::number::Number;
use crate::prerelease::{parse_prerelease, PrereleaseSegment};

/// An error that occurs when parsing a [`Version`] string fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InvalidVersion {
    /// The numeric core didn't have exactly three dot-separated components.
    #[error("{main}. Must be X.Y.Z")]
    WrongSegmentCount {
        /// The numeric core, without prerelease and build metadata.
        main: String,
    },
    /// A component of the numeric core didn't start with an ASCII digit.
    #[error("No numeric prefix in '{part}'")]
    NoNumericPrefix {
        /// The offending component.
        part: String,
    },
}

/// A version such as `1.2.3`, `1.0.0-rc.1` or `2.0.0-beta.2+build.5`.
///
/// Only the numeric core and the prerelease take part in equality, ordering and hashing. The
/// build metadata and the original string are kept for display, so `1.0.0+a` and `1.0.0+b` are
/// equal but still render differently.
///
/// Parse with [`Version::from_str`]:
///
/// ```rust
/// use std::str::FromStr;
/// use lenient_version::Version;
///
/// let version = Version::from_str("1.2.3-alpha.1").unwrap();
/// assert_eq!(version.minor().to_u64(), Some(2));
/// ```
#[derive(Clone)]
pub struct Version {
    /// The input with surrounding whitespace removed.
    original: Box<str>,
    major: Number,
    minor: Number,
    patch: Number,
    /// Empty if the input had no `-` before the build metadata.
    prerelease: Vec<PrereleaseSegment>,
    /// Never empty.
    build: Option<Box<str>>,
}

impl Version {
    /// Parse a version string, see [`Version::from_str`].
    pub fn parse(version: &str) -> Result<Self, InvalidVersion> {
        Self::from_str(version)
    }

    /// The first component of the numeric core.
    pub fn major(&self) -> &Number {
        &self.major
    }

    /// The second component of the numeric core.
    pub fn minor(&self) -> &Number {
        &self.minor
    }

    /// The third component of the numeric core.
    pub fn patch(&self) -> &Number {
        &self.patch
    }

    /// The prerelease segments, e.g. `[rc, 1]` for `1.0.0-rc.1`. Empty for a release.
    pub fn prerelease(&self) -> &[PrereleaseSegment] {
        &self.prerelease
    }

    /// The build metadata after the first `+`, if any.
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// The version string as it was parsed, minus surrounding whitespace.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Whether this version has a prerelease, such as `1.0.0-rc.1`.
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// The same version with the build metadata removed, e.g. `1.0.0-rc.1` for
    /// `1.0.0-rc.1+abc`.
    #[must_use]
    pub fn without_build(&self) -> Self {
        let original = match self.original.split_once('+') {
            Some((head, _)) => head,
            None => &self.original,
        };
        Self {
            original: original.into(),
            build: None,
            ..self.clone()
        }
    }

    /// Parse `other` and compare this version against it.
    ///
    /// Unlike the `PartialOrd<str>` implementation, this surfaces the parse error instead of
    /// treating an invalid version as incomparable.
    pub fn compare_str(&self, other: &str) -> Result<Ordering, InvalidVersion> {
        let other = Self::from_str(other)?;
        Ok(self.cmp(&other))
    }
}

/// Extract the leading run of ASCII digits from a component of the numeric core, e.g. `1` from
/// `1b`. Anything after the digits is dropped.
fn extract_number(part: &str) -> Result<Number, InvalidVersion> {
    let end = part
        .bytes()
        .position(|byte| !byte.is_ascii_digit())
        .unwrap_or(part.len());
    let digits = &part[..end];
    if digits.is_empty() {
        return Err(InvalidVersion::NoNumericPrefix {
            part: part.to_string(),
        });
    }
    #[cfg(feature = "tracing")]
    if end < part.len() {
        debug!(
            "Ignoring trailing `{}` in version component `{part}`",
            &part[end..]
        );
    }
    Ok(Number::from_digits(digits))
}

impl FromStr for Version {
    type Err = InvalidVersion;

    /// Parses a version such as `1.2.3`, `1.0.0-rc.1`, `1.0.0+build1` or `1.0.1b`.
    fn from_str(version: &str) -> Result<Self, Self::Err> {
        let original = version.trim();

        let (main_and_pre, build) = match original.split_once('+') {
            Some((main_and_pre, build)) => {
                (main_and_pre, Some(build).filter(|build| !build.is_empty()))
            }
            None => (original, None),
        };

        let (main, prerelease) = match main_and_pre.split_once('-') {
            Some((main, prerelease)) => (main, parse_prerelease(prerelease)),
            None => (main_and_pre, Vec::new()),
        };

        let mut parts = main.split('.');
        let (Some(major), Some(minor), Some(patch), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(InvalidVersion::WrongSegmentCount {
                main: main.to_string(),
            });
        };

        Ok(Self {
            original: original.into(),
            major: extract_number(major)?,
            minor: extract_number(minor)?,
            patch: extract_number(patch)?,
            prerelease,
            build: build.map(Into::into),
        })
    }
}

/// The prerelease part of the comparison key.
///
/// A version without a prerelease sorts after every prerelease of the same numeric core, which
/// the variant order of this enum encodes.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum PrereleaseKey<'a> {
    Prerelease(&'a [PrereleaseSegment]),
    Release,
}

impl Version {
    /// The tuple that defines equality, ordering and hashing.
    fn sortable_tuple(&self) -> (&Number, &Number, &Number, PrereleaseKey<'_>) {
        let prerelease = if self.prerelease.is_empty() {
            PrereleaseKey::Release
        } else {
            PrereleaseKey::Prerelease(&self.prerelease)
        };
        (&self.major, &self.minor, &self.patch, prerelease)
    }
}

impl PartialEq<Self> for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    /// Ignores the original string and the build metadata, like `PartialEq`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.hash(state);
    }
}

impl PartialOrd<Self> for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// 1.0.0-2 < 1.0.0-10 < 1.0.0-alpha < 1.0.0-alpha.1 < 1.0.0-alpha.beta < 1.0.0-beta
    /// < 1.0.0-rc.1 < 1.0.0 = 1.0.0+build < 1.0.1
    fn cmp(&self, other: &Self) -> Ordering {
        self.sortable_tuple().cmp(&other.sortable_tuple())
    }
}

// Comparisons against raw strings. A string that doesn't parse is never equal to a version and
// is incomparable with it.

impl PartialEq<str> for Version {
    fn eq(&self, other: &str) -> bool {
        self.compare_str(other) == Ok(Ordering::Equal)
    }
}

impl PartialEq<&str> for Version {
    fn eq(&self, other: &&str) -> bool {
        <Self as PartialEq<str>>::eq(self, other)
    }
}

impl PartialEq<Version> for str {
    fn eq(&self, other: &Version) -> bool {
        <Version as PartialEq<str>>::eq(other, self)
    }
}

impl PartialEq<Version> for &str {
    fn eq(&self, other: &Version) -> bool {
        <Version as PartialEq<str>>::eq(other, self)
    }
}

impl PartialOrd<str> for Version {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        self.compare_str(other).ok()
    }
}

impl PartialOrd<&str> for Version {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        self.compare_str(other).ok()
    }
}

impl PartialOrd<Version> for str {
    fn partial_cmp(&self, other: &Version) -> Option<Ordering> {
        other.compare_str(self).ok().map(Ordering::reverse)
    }
}

impl PartialOrd<Version> for &str {
    fn partial_cmp(&self, other: &Version) -> Option<Ordering> {
        other.compare_str(self).ok().map(Ordering::reverse)
    }
}

/// Shows the version as it was written
impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original)
    }
}

impl Debug for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Version('{}')", self.original)
    }
}

/// <https://github.com/serde-rs/serde/issues/1316#issue-332908452>
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

/// <https://github.com/serde-rs/serde/issues/1316#issue-332908452>
#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
