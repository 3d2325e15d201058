//! Key/value operations against a secret mount

#[cfg(test)]
use mockall::automock;

use crate::kv::error::KvError;
use crate::kv::types::Secret;

/// Basic operations on a key/value secret mount
///
/// Paths are relative to the mount; implementations prepend the
/// operation-specific prefix.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait KeyValueOperations: Send + Sync {
    /// Enumerate keys below `path`
    ///
    /// # Returns
    /// * `Ok(Some(keys))` - Key names; folders end with `/`
    /// * `Ok(None)` - If the path does not exist
    async fn list(&self, path: &str) -> Result<Option<Vec<String>>, KvError>;

    /// Read the secret at `path`
    ///
    /// # Returns
    /// * `Ok(Some(secret))` - The secret payload
    /// * `Ok(None)` - If the path does not exist
    async fn get(&self, path: &str) -> Result<Option<Secret>, KvError>;

    /// Delete the secret at `path`. Deleting a missing secret succeeds.
    async fn delete(&self, path: &str) -> Result<(), KvError>;
}
