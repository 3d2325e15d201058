use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Invalid version: {0}")]
    Invalid(String),

    #[error("Invalid version string! Could not parse segment {segment:?} within {input:?}")]
    Malformed { segment: String, input: String },
}
