//! Command bodies for the CLI
//!
//! Each command returns the text to print so it can be tested without a
//! terminal.

use std::cmp::Ordering;

use anyhow::Context;
use futures::future::join_all;
use tracing::info;

use crate::kv::KeyValueOperations;
use crate::version::{Version, VersionError};

/// Canonical form and components of `text`
pub fn parse(text: &str) -> Result<String, VersionError> {
    let version = Version::parse(text)?;

    Ok(format!(
        "{}\nmajor: {}\nminor: {}\nbugfix: {}\nbuild: {}",
        version,
        version.major(),
        version.minor(),
        version.bugfix(),
        version.build()
    ))
}

/// `a < b`, `a = b` or `a > b`, rendered in canonical form
pub fn compare(a: &str, b: &str) -> Result<String, VersionError> {
    let a = Version::parse(a)?;
    let b = Version::parse(b)?;

    let symbol = match a.cmp(&b) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };

    Ok(format!("{} {} {}", a, symbol, b))
}

/// Versions in ascending order, one per line
pub fn sort(inputs: &[String]) -> Result<String, VersionError> {
    let mut versions = inputs
        .iter()
        .map(|input| Version::parse(input))
        .collect::<Result<Vec<_>, _>>()?;

    versions.sort();

    Ok(versions
        .iter()
        .map(Version::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

pub async fn list(operations: &dyn KeyValueOperations, path: &str) -> anyhow::Result<String> {
    let keys = operations
        .list(path)
        .await
        .with_context(|| format!("Failed to list {:?}", path))?;

    Ok(match keys {
        Some(keys) => keys.join("\n"),
        None => format!("No keys at {:?}", path),
    })
}

pub async fn get(operations: &dyn KeyValueOperations, path: &str) -> anyhow::Result<String> {
    let secret = operations
        .get(path)
        .await
        .with_context(|| format!("Failed to read {:?}", path))?;

    match secret {
        Some(secret) => Ok(serde_json::to_string_pretty(&secret)?),
        None => Ok(format!("No secret at {:?}", path)),
    }
}

/// Delete all `paths` concurrently; fails with the first error after every
/// deletion has been attempted.
pub async fn delete(operations: &dyn KeyValueOperations, paths: &[String]) -> anyhow::Result<String> {
    let results = join_all(paths.iter().map(|path| async move {
        let result = operations.delete(path).await;
        (path, result)
    }))
    .await;

    let mut deleted = Vec::with_capacity(results.len());
    for (path, result) in results {
        result.with_context(|| format!("Failed to delete {:?}", path))?;
        info!("Deleted {}", path);
        deleted.push(format!("Deleted {}", path));
    }

    Ok(deleted.join("\n"))
}
