//! Key/value secret operations
//!
//! Thin request wrappers around a key/value secret mount. The only decision
//! made here is which protocol variant ([`KeyValueBackend`]) a mount speaks,
//! which in turn depends on the server [`Version`](crate::version::Version).
//!
//! # Modules
//!
//! - [`operations`]: The `KeyValueOperations` trait (list, get, delete)
//! - [`backend`]: Backend variants and their request paths
//! - [`client`]: HTTP implementation backed by `reqwest`
//! - [`types`]: Secret payloads
//! - [`error`]: Error type for key/value operations

pub mod backend;
pub mod client;
pub mod error;
pub mod operations;
pub mod types;

pub use backend::KeyValueBackend;
pub use client::HttpKeyValueClient;
pub use error::KvError;
pub use operations::KeyValueOperations;
pub use types::Secret;
