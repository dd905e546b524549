//! Lenient parsing and ordering of semver-like version identifiers.
//!
//! ```rust
//! use std::str::FromStr;
//! use lenient_version::Version;
//!
//! let version = Version::from_str("1.0.0-rc.1").unwrap();
//! assert!(version < Version::from_str("1.0.0").unwrap());
//! assert!(version < "1.0.0");
//! ```
//!
//! The parser is deliberately forgiving, with a few rules that differ from strict semver:
//!
//! * Exactly three dot-separated components are required in the numeric core (`1.2` is an error),
//!   but each component only needs a leading run of ASCII digits. Anything after the digits is
//!   dropped, so `1.0.1b` parses as `1.0.1`. Numbers have no upper bound.
//! * Everything after the first `-` (and before the first `+`) is the prerelease. Both `.` and `-`
//!   separate prerelease segments, and empty segments are kept as empty text.
//! * Prerelease segments made of digits compare numerically and always sort before textual
//!   segments, so `1.0.0-2 < 1.0.0-alpha`. A version without a prerelease sorts after every
//!   prerelease of the same core.
//! * Build metadata after the first `+` is kept for display, but never takes part in equality,
//!   ordering or hashing: `1.0.0+a == 1.0.0+b`.
#![deny(missing_docs)]

pub use crate::number::Number;
pub use crate::prerelease::PrereleaseSegment;
pub use crate::version::{InvalidVersion, Version};

mod number;
mod prerelease;
mod version;

#[cfg(test)]
mod tests;
