//! Four-component version value
//!
//! A [`Version`] is `major.minor.bugfix.build`, every component a non-negative
//! integer. Missing trailing components are zero, so `1.0` and `1.0.0.0` are
//! the same version.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::version::error::VersionError;

/// Maximum number of dot-separated components a version may carry
pub const MAX_COMPONENTS: usize = 4;

const COMPONENT_NAMES: [&str; MAX_COMPONENTS] = ["Major", "Minor", "Bugfix", "Build"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    bugfix: u32,
    build: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, bugfix: u32, build: u32) -> Self {
        Self {
            major,
            minor,
            bugfix,
            build,
        }
    }

    /// Build a version from one to four integers, filling missing trailing
    /// components with zero.
    ///
    /// Fails with [`VersionError::Invalid`] for an empty slice, more than four
    /// parts, or a part outside `0..=u32::MAX`.
    pub fn from_parts(parts: &[i64]) -> Result<Self, VersionError> {
        if parts.is_empty() || parts.len() > MAX_COMPONENTS {
            return Err(VersionError::Invalid(format!(
                "expected 1 to {} components, got {}",
                MAX_COMPONENTS,
                parts.len()
            )));
        }

        let mut components = [0u32; MAX_COMPONENTS];
        for (slot, (&part, name)) in components
            .iter_mut()
            .zip(parts.iter().zip(COMPONENT_NAMES))
        {
            *slot = u32::try_from(part).map_err(|_| {
                if part < 0 {
                    VersionError::Invalid(format!("{name} version must be greater or equal zero!"))
                } else {
                    VersionError::Invalid(format!("{name} version must not exceed {}!", u32::MAX))
                }
            })?;
        }

        let [major, minor, bugfix, build] = components;
        Ok(Self::new(major, minor, bugfix, build))
    }

    /// Parse a dotted version string.
    ///
    /// Examples:
    /// - "1.2.3" -> Version(1, 2, 3, 0)
    /// - "2.0.0.RELEASE" -> Version(2, 0, 0, 0)
    /// - "1.2.3-SNAPSHOT" -> Version(1, 2, 3, 0)
    /// - "1..2" -> Version(1, 0, 2, 0)
    ///
    /// Only the last segment may carry a qualifier; everything from its first
    /// non-digit character on is discarded. A last segment made of a single
    /// non-digit character (`1.x`, `1.*`) is a placeholder, not a qualifier,
    /// and is rejected.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(malformed("", text));
        }

        let mut segments: Vec<&str> = trimmed.split('.').collect();
        // "1.2." is "1.2"; "." has no components at all
        while segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }

        let last = segments.len().saturating_sub(1);
        let parts = segments
            .into_iter()
            .enumerate()
            .map(|(index, segment)| {
                let segment = if index == last {
                    strip_qualifier(segment).ok_or_else(|| malformed(segment, text))?
                } else {
                    segment
                };
                parse_segment(segment, text)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let version = Self::from_parts(&parts)?;
        debug!("Parsed version {:?} as {}", text, version);
        Ok(version)
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn bugfix(&self) -> u32 {
        self.bugfix
    }

    pub fn build(&self) -> u32 {
        self.build
    }

    /// Compare against a version that may be absent.
    ///
    /// Any version is greater than an absent one.
    pub fn compare_to(&self, other: Option<&Version>) -> Ordering {
        other.map_or(Ordering::Greater, |other| self.cmp(other))
    }

    /// Whether this version is newer than `other`
    pub fn is_greater_than(&self, other: &Version) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// Whether this version is newer than or the same as `other`
    pub fn is_greater_than_or_equal_to(&self, other: &Version) -> bool {
        self.cmp(other) != Ordering::Less
    }

    /// Whether this version is older than `other`
    pub fn is_less_than(&self, other: &Version) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// Whether this version is older than or the same as `other`
    pub fn is_less_than_or_equal_to(&self, other: &Version) -> bool {
        self.cmp(other) != Ordering::Greater
    }

    /// Whether this version is the same as `other`
    pub fn is(&self, other: &Version) -> bool {
        self == other
    }
}

/// Cut the last segment at its first non-digit character.
///
/// Returns `None` when the segment is a lone non-digit character.
fn strip_qualifier(segment: &str) -> Option<&str> {
    match segment.find(|c: char| !c.is_ascii_digit()) {
        Some(0) if segment.chars().count() == 1 => None,
        Some(end) => Some(&segment[..end]),
        None => Some(segment),
    }
}

fn parse_segment(segment: &str, input: &str) -> Result<i64, VersionError> {
    if segment.trim().is_empty() {
        return Ok(0);
    }

    segment
        .parse::<i64>()
        .ok()
        .filter(|value| *value <= i64::from(u32::MAX))
        .ok_or_else(|| malformed(segment, input))
}

fn malformed(segment: &str, input: &str) -> VersionError {
    VersionError::Malformed {
        segment: segment.to_string(),
        input: input.to_string(),
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.bugfix.cmp(&other.bugfix))
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;

        if self.bugfix != 0 || self.build != 0 {
            write!(f, ".{}", self.bugfix)?;
        }

        if self.build != 0 {
            write!(f, ".{}", self.build)?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case("1", Version::new(1, 0, 0, 0))]
    #[case("1.2", Version::new(1, 2, 0, 0))]
    #[case("1.2.3", Version::new(1, 2, 3, 0))]
    #[case("1.2.3.4", Version::new(1, 2, 3, 4))]
    #[case("  1.2.3\n", Version::new(1, 2, 3, 0))]
    #[case("2.0.0.RELEASE", Version::new(2, 0, 0, 0))]
    #[case("1.2.3-SNAPSHOT", Version::new(1, 2, 3, 0))]
    #[case("5.3.M1", Version::new(5, 3, 0, 0))]
    #[case("1.0.0.BUILD-SNAPSHOT", Version::new(1, 0, 0, 0))]
    #[case("1.4.2+ent", Version::new(1, 4, 2, 0))]
    #[case("1..2", Version::new(1, 0, 2, 0))]
    #[case("1.2.", Version::new(1, 2, 0, 0))]
    #[case("0.10.0", Version::new(0, 10, 0, 0))]
    fn parse_accepts_dotted_versions(#[case] input: &str, #[case] expected: Version) {
        assert_eq!(Version::parse(input).unwrap(), expected);
    }

    #[rstest]
    #[case("", "")]
    #[case("   ", "")]
    #[case("1.x", "x")]
    #[case("1.*", "*")]
    #[case("a.2", "a")]
    #[case("1. 2.3", " 2")]
    #[case("4294967296.0", "4294967296")]
    fn parse_rejects_malformed_segments(#[case] input: &str, #[case] segment: &str) {
        assert_eq!(
            Version::parse(input),
            Err(VersionError::Malformed {
                segment: segment.to_string(),
                input: input.to_string(),
            })
        );
    }

    #[rstest]
    #[case("1.2.3.4.5")]
    #[case("-1.2")]
    #[case("1.-2.3")]
    #[case(".")]
    fn parse_rejects_out_of_range_versions(#[case] input: &str) {
        assert!(matches!(
            Version::parse(input),
            Err(VersionError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_error_names_segment_and_input() {
        let err = Version::parse("1.x").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Invalid version string! Could not parse segment "x" within "1.x""#
        );
    }

    #[rstest]
    #[case(&[1], Version::new(1, 0, 0, 0))]
    #[case(&[1, 2], Version::new(1, 2, 0, 0))]
    #[case(&[1, 2, 3, 4], Version::new(1, 2, 3, 4))]
    fn from_parts_fills_missing_components(#[case] parts: &[i64], #[case] expected: Version) {
        assert_eq!(Version::from_parts(parts).unwrap(), expected);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[1, 2, 3, 4, 5])]
    #[case(&[1, -1])]
    #[case(&[1, 0, 0, 4_294_967_296])]
    fn from_parts_rejects_invalid_parts(#[case] parts: &[i64]) {
        assert!(matches!(
            Version::from_parts(parts),
            Err(VersionError::Invalid(_))
        ));
    }

    #[test]
    fn from_parts_reports_negative_component_by_name() {
        assert_eq!(
            Version::from_parts(&[1, 2, -3]),
            Err(VersionError::Invalid(
                "Bugfix version must be greater or equal zero!".to_string()
            ))
        );
    }

    #[rstest]
    #[case(Version::new(1, 2, 0, 0), "1.2")]
    #[case(Version::new(1, 2, 3, 0), "1.2.3")]
    #[case(Version::new(1, 2, 0, 3), "1.2.0.3")]
    #[case(Version::new(1, 2, 3, 4), "1.2.3.4")]
    #[case(Version::new(0, 0, 0, 0), "0.0")]
    fn display_renders_shortest_canonical_form(#[case] version: Version, #[case] expected: &str) {
        assert_eq!(version.to_string(), expected);
    }

    #[rstest]
    #[case("1.0", "1.0.1", Ordering::Less)]
    #[case("1.0.0", "1.0", Ordering::Equal)]
    #[case("2.0", "1.99.99.99", Ordering::Greater)]
    #[case("1.2.3.4", "1.2.3.5", Ordering::Less)]
    #[case("1.10", "1.9", Ordering::Greater)]
    fn cmp_is_lexicographic_over_components(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        let a = Version::parse(a).unwrap();
        let b = Version::parse(b).unwrap();
        assert_eq!(a.cmp(&b), expected);
        assert_eq!(b.cmp(&a), expected.reverse());
    }

    #[test]
    fn cmp_handles_extreme_components_without_overflow() {
        let high = Version::new(u32::MAX, 0, 0, 0);
        let low = Version::new(0, 0, 0, 0);
        assert!(high.is_greater_than(&low));
        assert!(low.is_less_than(&high));
    }

    #[test]
    fn compare_to_absent_version_is_greater() {
        let version = Version::new(0, 0, 0, 0);
        assert_eq!(version.compare_to(None), Ordering::Greater);
        assert_eq!(
            version.compare_to(Some(&Version::new(0, 0, 0, 1))),
            Ordering::Less
        );
    }

    #[test]
    fn predicates_follow_ordering() {
        let older = Version::parse("1.0").unwrap();
        let newer = Version::parse("1.0.1").unwrap();

        assert!(older.is_less_than(&newer));
        assert!(older.is_less_than_or_equal_to(&newer));
        assert!(older.is_less_than_or_equal_to(&older));
        assert!(newer.is_greater_than(&older));
        assert!(newer.is_greater_than_or_equal_to(&older));
        assert!(newer.is_greater_than_or_equal_to(&newer));
        assert!(!older.is(&newer));
        assert!(Version::parse("1.0.0").unwrap().is(&older));
    }

    #[test]
    fn zero_padded_versions_share_a_hash_slot() {
        let set: HashSet<Version> = ["1.0", "1.0.0", "1.0.0.0", "1"]
            .iter()
            .map(|v| Version::parse(v).unwrap())
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn serde_uses_canonical_string_form() {
        let version: Version = serde_json::from_str(r#""0.10.0""#).unwrap();
        assert_eq!(version, Version::new(0, 10, 0, 0));
        assert_eq!(serde_json::to_string(&version).unwrap(), r#""0.10""#);
        assert!(serde_json::from_str::<Version>(r#""1.x""#).is_err());
    }
}
