//! Conversions between [`Version`] and `semver::Version`

use crate::version::error::VersionError;
use crate::version::value::Version;

impl TryFrom<&semver::Version> for Version {
    type Error = VersionError;

    /// Pre-release and build metadata are ignored.
    ///
    /// Examples:
    /// - "1.2.3" -> Version(1, 2, 3, 0)
    /// - "1.2.3-rc.1+ent" -> Version(1, 2, 3, 0)
    fn try_from(version: &semver::Version) -> Result<Self, Self::Error> {
        let component = |value: u64, name: &str| {
            u32::try_from(value).map_err(|_| {
                VersionError::Invalid(format!("{name} version must not exceed {}!", u32::MAX))
            })
        };

        Ok(Version::new(
            component(version.major, "Major")?,
            component(version.minor, "Minor")?,
            component(version.patch, "Bugfix")?,
            0,
        ))
    }
}

impl Version {
    /// Convert to a `semver::Version`, dropping the build component
    pub fn to_semver(&self) -> semver::Version {
        semver::Version::new(
            u64::from(self.major()),
            u64::from(self.minor()),
            u64::from(self.bugfix()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", Version::new(1, 2, 3, 0))]
    #[case("1.2.3-rc.1", Version::new(1, 2, 3, 0))]
    #[case("0.10.0+ent", Version::new(0, 10, 0, 0))]
    fn try_from_semver_ignores_prerelease_and_metadata(
        #[case] input: &str,
        #[case] expected: Version,
    ) {
        let semver = semver::Version::parse(input).unwrap();
        assert_eq!(Version::try_from(&semver).unwrap(), expected);
    }

    #[test]
    fn try_from_semver_rejects_oversized_component() {
        let semver = semver::Version::new(1, u64::from(u32::MAX) + 1, 0);
        assert!(matches!(
            Version::try_from(&semver),
            Err(VersionError::Invalid(_))
        ));
    }

    #[test]
    fn to_semver_drops_build_component() {
        let version = Version::new(1, 2, 3, 4);
        assert_eq!(version.to_semver(), semver::Version::new(1, 2, 3));
    }
}
