use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

use insta::{assert_debug_snapshot, assert_snapshot};
use test_case::test_case;

use crate::{InvalidVersion, Number, PrereleaseSegment, Version};

/// Versions in strictly ascending order.
const VERSIONS_ALL: &[&str] = &[
    "0.0.1",
    "0.1.0-2",
    "0.1.0-10",
    "0.1.0-alpha",
    "0.1.0-alpha.1",
    "0.1.0-alpha.beta",
    "0.1.0-beta",
    "0.1.0-beta.2",
    "0.1.0-beta.11",
    "0.1.0-rc.1",
    "0.1.0",
    "1.0.0-rc.1",
    "1.0.0",
    "1.0.1b",
    "1.0.10-alpha.beta",
    "1.1.0-alpha",
    "1.2.0-alpha.1",
    "1.2.0",
    "1.2.42",
    "1.42.0",
    "2.0.0",
];

fn version(version: &str) -> Version {
    Version::from_str(version).unwrap()
}

fn numeric(value: u64) -> PrereleaseSegment {
    PrereleaseSegment::Numeric(Number::from(value))
}

fn core(version: &Version) -> [&str; 3] {
    [version.major(), version.minor(), version.patch()].map(Number::as_str)
}

#[test]
fn parse_numeric_core() {
    let version = version("1.2.3");
    assert_eq!(core(&version), ["1", "2", "3"]);
    assert!(version.prerelease().is_empty());
    assert_eq!(version.build(), None);
    assert!(!version.is_prerelease());
}

#[test]
fn parse_prerelease() {
    let version = version("1.2.3-alpha.1");
    assert_eq!(
        version.prerelease(),
        [
            PrereleaseSegment::Alphanumeric("alpha".to_string()),
            numeric(1)
        ]
    );
    assert!(version.is_prerelease());
}

#[test]
fn parse_prerelease_hyphens_are_separators() {
    let version = version("1.0.0-beta-2.x");
    assert_eq!(
        version.prerelease(),
        [
            PrereleaseSegment::Alphanumeric("beta".to_string()),
            numeric(2),
            PrereleaseSegment::Alphanumeric("x".to_string()),
        ]
    );
}

#[test]
fn parse_prerelease_empty_segments() {
    let version = version("1.0.0--x");
    assert_eq!(
        version.prerelease(),
        [
            PrereleaseSegment::Alphanumeric(String::new()),
            PrereleaseSegment::Alphanumeric("x".to_string()),
        ]
    );

    // A trailing `-` still makes a prerelease, with a single empty segment.
    let version = Version::from_str("1.0.0-").unwrap();
    assert_eq!(
        version.prerelease(),
        [PrereleaseSegment::Alphanumeric(String::new())]
    );
    assert!(version < Version::from_str("1.0.0").unwrap());
}

#[test]
fn parse_numbers_beyond_u64() {
    let version = version("18446744073709551616.0.0-99999999999999999999999");
    assert_eq!(core(&version), ["18446744073709551616", "0", "0"]);
    assert_eq!(version.major().to_u64(), None);
    assert_eq!(
        version.prerelease(),
        [PrereleaseSegment::Numeric(Number::from_digits(
            "99999999999999999999999"
        ))]
    );
}

#[test]
fn large_numbers_order_by_value() {
    assert!(version("18446744073709551615.0.0") < version("18446744073709551616.0.0"));
    assert!(version("99999999999999999999.0.0") < version("100000000000000000000.0.0"));
    assert_eq!(
        version("00018446744073709551616.0.0"),
        version("18446744073709551616.0.0")
    );

    // Prerelease numbers stay numeric however long they get.
    assert!(version("1.0.0-99999999999999999999") < version("1.0.0-100000000000000000000"));
    assert!(version("1.0.0-99999999999999999999") < version("1.0.0-"));
    assert!(version("1.0.0-99999999999999999999") < version("1.0.0-alpha"));
    assert_eq!(
        version("1.0.0-0099999999999999999999"),
        version("1.0.0-99999999999999999999")
    );
}

#[test]
fn parse_build() {
    let version = version("1.0.0+build1");
    assert_eq!(version.build(), Some("build1"));
    assert!(version.prerelease().is_empty());

    // Only the first `+` separates the build metadata.
    let version = Version::from_str("1.0.0-rc.1+a+b").unwrap();
    assert_eq!(version.build(), Some("a+b"));
    assert_eq!(version.prerelease().len(), 2);

    // A `-` after the `+` belongs to the build metadata.
    let version = Version::from_str("1.0.0+build-5").unwrap();
    assert_eq!(version.build(), Some("build-5"));
    assert!(version.prerelease().is_empty());
}

#[test]
fn parse_empty_build() {
    let version = version("1.0.0+");
    assert_eq!(version.build(), None);
    assert_eq!(version.to_string(), "1.0.0+");
}

#[test]
fn parse_lenient_numeric_extraction() {
    let version = version("1.0.1b");
    assert_eq!(version.patch().to_u64(), Some(1));
    assert_eq!(version, Version::from_str("1.0.1").unwrap());

    let version = Version::from_str("007.0rc.12abc").unwrap();
    assert_eq!(core(&version), ["7", "0", "12"]);
}

#[test]
fn parse_trims_whitespace() {
    let version = version("  \t1.2.3-rc.1\n");
    assert_eq!(version.as_str(), "1.2.3-rc.1");
    assert_eq!(version.to_string(), "1.2.3-rc.1");
}

#[test_case("1.2", "1.2. Must be X.Y.Z"; "too few components")]
#[test_case("1.2.3.4", "1.2.3.4. Must be X.Y.Z"; "too many components")]
#[test_case("", ". Must be X.Y.Z"; "empty")]
#[test_case("1.2-rc.1", "1.2. Must be X.Y.Z"; "too few components with prerelease")]
#[test_case("a.b.c", "No numeric prefix in 'a'"; "letters")]
#[test_case("1.2.x", "No numeric prefix in 'x'"; "wildcard patch")]
#[test_case("..", "No numeric prefix in ''"; "only dots")]
#[test_case("1.b2.3", "No numeric prefix in 'b2'"; "letter before digits")]
fn parse_failures(version: &str, message: &str) {
    let err = Version::from_str(version).unwrap_err();
    assert_eq!(err.to_string(), message);
}

#[test]
fn parse_failure_variants() {
    assert_eq!(
        Version::from_str("1.2").unwrap_err(),
        InvalidVersion::WrongSegmentCount {
            main: "1.2".to_string()
        }
    );
    assert_eq!(
        Version::parse("..").unwrap_err(),
        InvalidVersion::NoNumericPrefix {
            part: String::new()
        }
    );
}

#[test]
fn error_messages() {
    assert_snapshot!(
        Version::from_str("1.0.0.0-alpha+build").unwrap_err(),
        @"1.0.0.0. Must be X.Y.Z"
    );
    assert_snapshot!(
        Version::from_str("v1.0.0").unwrap_err(),
        @"No numeric prefix in 'v1'"
    );
}

#[test]
fn debug_and_display() {
    let version = version("1.2.3-rc.1");
    assert_debug_snapshot!(version, @"Version('1.2.3-rc.1')");
    assert_snapshot!(version, @"1.2.3-rc.1");

    let version = Version::from_str("1.0.1b+meta").unwrap();
    assert_snapshot!(version, @"1.0.1b+meta");
}

#[test_case("1.0.0", "2.0.0")]
#[test_case("1.0.0", "1.42.0")]
#[test_case("1.2.0", "1.2.42")]
#[test_case("1.1.0-alpha", "1.2.0-alpha.1")]
#[test_case("1.0.1b", "1.0.10-alpha.beta")]
#[test_case("1.0.0-rc.1", "1.0.0")]
#[test_case("1.0.0-2", "1.0.0-alpha")]
#[test_case("1.0.0-alpha", "1.0.0-alpha.0")]
fn less_than(left: &str, right: &str) {
    let (left, right) = (version(left), version(right));
    assert!(left < right, "{left} < {right}");
    assert!(right > left, "{right} > {left}");
    assert_ne!(right, left);
}

#[test]
fn equality() {
    assert_eq!(version("1.2.3"), version("1.2.3"));
    assert_ne!(version("1.2.3"), version("1.2.4"));
    assert_eq!(version("1.02.3"), version("1.2.3"));
    assert_eq!(version("1.2.3-rc.01"), version("1.2.3-rc.1"));
}

#[test]
fn build_metadata_is_ignored() {
    let left = version("1.0.0+x");
    let right = version("1.0.0+y");
    assert_eq!(left, right);
    assert_eq!(left.cmp(&right), Ordering::Equal);
    assert!(!(left < right));
    assert!(!(right < left));
    // The original strings are still kept apart.
    assert_ne!(left.to_string(), right.to_string());

    let versions: HashSet<Version> = ["1.0.0+x", "1.0.0+y", "1.0.0"]
        .into_iter()
        .map(version)
        .collect();
    assert_eq!(versions.len(), 1);
}

#[test]
fn without_build() {
    let version = version("1.0.0-rc.1+abc");
    let stripped = version.without_build();
    assert_eq!(stripped.as_str(), "1.0.0-rc.1");
    assert_eq!(stripped.build(), None);
    assert_eq!(stripped, version);
}

/// Every pair of [`VERSIONS_ALL`] must compare the same way as their indices.
#[test]
fn test_operators_true() {
    let versions: Vec<Version> = VERSIONS_ALL.iter().copied().map(version).collect();
    for (i, left) in versions.iter().enumerate() {
        for (j, right) in versions.iter().enumerate() {
            assert_eq!(
                left.cmp(right),
                i.cmp(&j),
                "{left} {:?} {right}",
                i.cmp(&j)
            );
            // Exactly one of `<`, `==` and `>` holds.
            let holds = [left < right, left == right, left > right];
            assert_eq!(holds.iter().filter(|holds| **holds).count(), 1);
        }
    }
}

#[test]
fn transitivity() {
    let versions: Vec<Version> = VERSIONS_ALL.iter().copied().map(version).collect();
    for a in &versions {
        for b in &versions {
            for c in &versions {
                if a < b && b < c {
                    assert!(a < c, "{a} < {b} < {c}");
                }
            }
        }
    }
}

#[test]
fn sort_shuffled() {
    let mut versions: Vec<Version> = VERSIONS_ALL.iter().rev().copied().map(version).collect();
    versions.sort();
    let sorted: Vec<&str> = versions.iter().map(Version::as_str).collect();
    assert_eq!(sorted, VERSIONS_ALL);
}

#[test]
fn prerelease_segment_ordering() {
    let text = PrereleaseSegment::Alphanumeric(String::new());
    assert!(numeric(u64::MAX) < text);
    assert!(PrereleaseSegment::Numeric(Number::from_digits(&"9".repeat(40))) < text);
    assert!(numeric(2) < numeric(10));
    assert!(
        PrereleaseSegment::Alphanumeric("10".repeat(20))
            > PrereleaseSegment::Alphanumeric("1".to_string())
    );
    assert!(
        PrereleaseSegment::Alphanumeric("Beta".to_string())
            < PrereleaseSegment::Alphanumeric("alpha".to_string())
    );
}

#[test]
fn number_ordering() {
    let zero = Number::from_digits("000");
    assert_eq!(zero, Number::from(0_u64));
    assert_eq!(zero.as_str(), "0");
    assert!(Number::from(9_u64) < Number::from(10_u64));
    assert!(Number::from(u64::MAX) < Number::from_digits("18446744073709551616"));
    assert_eq!(Number::from_digits("0042").to_u64(), Some(42));
    assert_debug_snapshot!(Number::from_digits("0100000000000000000000"), @"100000000000000000000");
}

#[test]
fn compare_with_strings() {
    let version = version("1.0.0-rc.1");
    assert!(version < "1.0.0");
    assert!("1.0.0" > version);
    assert!(version == "1.0.0-rc.1+build");
    assert!("1.0.0-rc.1" == version);
    assert!(version != "1.0.0");

    // Invalid operands are incomparable.
    assert!(version != "1.2");
    assert!(!(version < "1.2"));
    assert!(!(version > "1.2"));
    assert!(!("1.2" >= version));
    assert_eq!(<Version as PartialOrd<str>>::partial_cmp(&version, "1.2"), None);
}

#[test]
fn compare_str() {
    let version = version("1.2.3");
    assert_eq!(version.compare_str("1.2.4"), Ok(Ordering::Less));
    assert_eq!(version.compare_str(" 1.2.3+build "), Ok(Ordering::Equal));
    assert_eq!(version.compare_str("1.2.3-rc.1"), Ok(Ordering::Greater));
    assert_snapshot!(version.compare_str("1.2.x").unwrap_err(), @"No numeric prefix in 'x'");
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let version = version("1.0.0-rc.1+build");
    let json = serde_json::to_string(&version).unwrap();
    assert_eq!(json, r#""1.0.0-rc.1+build""#);
    let parsed: Version = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_str(), "1.0.0-rc.1+build");

    let err = serde_json::from_str::<Version>(r#""1.2""#).unwrap_err();
    assert!(err.to_string().contains("1.2. Must be X.Y.Z"), "{err}");
}
