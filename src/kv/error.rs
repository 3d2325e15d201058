use thiserror::Error;

use crate::kv::backend::KeyValueBackend;
use crate::version::Version;

#[derive(Debug, Error)]
pub enum KvError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{backend} is not supported by server version {server_version}")]
    UnsupportedBackend {
        backend: KeyValueBackend,
        server_version: Version,
    },
}
