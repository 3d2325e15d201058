//! HTTP implementation of key/value operations

use std::time::Duration;

use indexmap::IndexMap;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::kv::backend::KeyValueBackend;
use crate::kv::error::KvError;
use crate::kv::operations::KeyValueOperations;
use crate::kv::types::{Envelope, KeyList, Secret, VersionedSecret};

const TOKEN_HEADER: &str = "X-Vault-Token";

/// Key/value client speaking the HTTP API of a secret server
pub struct HttpKeyValueClient {
    client: reqwest::Client,
    address: String,
    token: Option<String>,
    mount: String,
    backend: KeyValueBackend,
}

impl HttpKeyValueClient {
    /// Creates a client for the mount described by `config`
    ///
    /// Fails with [`KvError::UnsupportedBackend`] when the configured server
    /// version is too old for the configured backend.
    pub fn new(config: &ClientConfig) -> Result<Self, KvError> {
        if let Some(server_version) = config
            .server_version
            .filter(|version| !config.backend.is_supported_by(version))
        {
            return Err(KvError::UnsupportedBackend {
                backend: config.backend,
                server_version,
            });
        }

        let client = reqwest::Client::builder()
            .user_agent("vault-version")
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            address: config.address.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            mount: config.mount.clone(),
            backend: config.backend,
        })
    }

    pub fn backend(&self) -> KeyValueBackend {
        self.backend
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request = self.client.request(method, url);
        match &self.token {
            Some(token) => request.header(TOKEN_HEADER, token),
            None => request,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.address, path)
    }

    /// Send a GET and decode the body, mapping 404 to `None`
    async fn read<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>, KvError> {
        let response = self.request(Method::GET, url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Nothing found at {}", url);
            return Ok(None);
        }

        let response = check_status(response, url)?;

        let body = response.json::<T>().await.map_err(|e| {
            warn!("Failed to parse response from {}: {}", url, e);
            KvError::InvalidResponse(e.to_string())
        })?;

        Ok(Some(body))
    }
}

fn check_status(response: Response, url: &str) -> Result<Response, KvError> {
    let status = response.status();

    if status == StatusCode::FORBIDDEN {
        return Err(KvError::PermissionDenied(url.to_string()));
    }

    if !status.is_success() {
        warn!("Server returned status {}: {}", status, url);
        return Err(KvError::InvalidResponse(format!(
            "Unexpected status: {}",
            status
        )));
    }

    Ok(response)
}

#[async_trait::async_trait]
impl KeyValueOperations for HttpKeyValueClient {
    async fn list(&self, path: &str) -> Result<Option<Vec<String>>, KvError> {
        let url = format!(
            "{}?list=true",
            self.url(&self.backend.list_path(&self.mount, path))
        );

        let listing: Option<Envelope<KeyList>> = self.read(&url).await?;

        Ok(listing.map(|envelope| envelope.data.keys))
    }

    async fn get(&self, path: &str) -> Result<Option<Secret>, KvError> {
        let url = self.url(&self.backend.data_path(&self.mount, path));

        match self.backend {
            KeyValueBackend::Unversioned => {
                let secret: Option<Envelope<IndexMap<String, serde_json::Value>>> =
                    self.read(&url).await?;
                Ok(secret.map(|envelope| Secret::new(envelope.data)))
            }
            KeyValueBackend::Versioned => {
                let secret: Option<Envelope<VersionedSecret>> = self.read(&url).await?;
                // A deleted version answers with `"data": null`
                Ok(secret.and_then(|envelope| {
                    let VersionedSecret { data, metadata } = envelope.data;
                    data.map(|data| Secret { data, metadata })
                }))
            }
        }
    }

    async fn delete(&self, path: &str) -> Result<(), KvError> {
        let url = self.url(&self.backend.data_path(&self.mount, path));

        let response = self.request(Method::DELETE, &url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Nothing to delete at {}", url);
            return Ok(());
        }

        check_status(response, &url)?;
        debug!("Deleted {}", url);

        Ok(())
    }
}
