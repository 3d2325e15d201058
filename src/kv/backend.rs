//! Key/value backend variants and their request paths

use std::fmt;

use serde::Deserialize;

use crate::version::Version;

/// Versioned key/value mounts first shipped with server 0.10
const VERSIONED_SINCE: Version = Version::new(0, 10, 0, 0);

/// Protocol variant of a key/value mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyValueBackend {
    /// Key/value version 1: secrets live directly under the mount
    #[serde(alias = "v1")]
    Unversioned,
    /// Key/value version 2: secrets live under `data/`, listings under `metadata/`
    #[default]
    #[serde(alias = "v2")]
    Versioned,
}

impl KeyValueBackend {
    /// Oldest server version that serves this backend
    pub fn minimum_server_version(&self) -> Option<Version> {
        match self {
            KeyValueBackend::Unversioned => None,
            KeyValueBackend::Versioned => Some(VERSIONED_SINCE),
        }
    }

    pub fn is_supported_by(&self, server_version: &Version) -> bool {
        self.minimum_server_version()
            .is_none_or(|minimum| server_version.is_greater_than_or_equal_to(&minimum))
    }

    /// Path used to read and delete the secret at `path`
    pub fn data_path(&self, mount: &str, path: &str) -> String {
        match self {
            KeyValueBackend::Unversioned => join(&[mount, path]),
            KeyValueBackend::Versioned => join(&[mount, "data", path]),
        }
    }

    /// Path used to list keys below `path`
    pub fn list_path(&self, mount: &str, path: &str) -> String {
        match self {
            KeyValueBackend::Unversioned => join(&[mount, path]),
            KeyValueBackend::Versioned => join(&[mount, "metadata", path]),
        }
    }
}

impl fmt::Display for KeyValueBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyValueBackend::Unversioned => f.write_str("Unversioned key/value backend"),
            KeyValueBackend::Versioned => f.write_str("Versioned key/value backend"),
        }
    }
}

/// Join path pieces with `/`, dropping empty pieces and stray slashes
fn join(pieces: &[&str]) -> String {
    pieces
        .iter()
        .map(|piece| piece.trim_matches('/'))
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
