//! Structured version values
//!
//! This module parses free-form dotted version strings such as `1.4.2`,
//! `2.0.0.RELEASE` or `1.2.3-SNAPSHOT` into a four-component [`Version`]
//! and orders them.
//!
//! # Modules
//!
//! - [`value`]: The `Version` type, its parser, ordering and canonical rendering
//! - [`error`]: Error types for construction and parsing
//! - [`semver`]: Conversions to and from `semver::Version`

pub mod error;
pub mod semver;
pub mod value;

pub use error::VersionError;
pub use value::Version;
