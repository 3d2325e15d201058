//! Payload types returned by key/value operations

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A secret read from a key/value mount
///
/// `data` keeps the key order of the server response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Secret {
    pub data: IndexMap<String, serde_json::Value>,
    /// Version metadata, only present on versioned mounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<IndexMap<String, serde_json::Value>>,
}

impl Secret {
    pub fn new(data: IndexMap<String, serde_json::Value>) -> Self {
        Self {
            data,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: IndexMap<String, serde_json::Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Response envelope shared by all endpoints: `{"data": ...}`
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// `data` of a list response
#[derive(Debug, Deserialize)]
pub(crate) struct KeyList {
    pub keys: Vec<String>,
}

/// `data` of a versioned read: the secret is nested one level deeper
#[derive(Debug, Deserialize)]
pub(crate) struct VersionedSecret {
    pub data: Option<IndexMap<String, serde_json::Value>>,
    #[serde(default)]
    pub metadata: Option<IndexMap<String, serde_json::Value>>,
}
