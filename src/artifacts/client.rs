//! HTTP client for resolving, downloading and publishing versioned artifacts

use anyhow::Context;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::errors::{CleanerError, CleanerResult};
use crate::network::{retry_with_backoff, RetryPolicy};
use crate::types::{ArtifactEntry, ArtifactSpec};

pub struct ArtifactClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    retry: RetryPolicy,
}

impl ArtifactClient {
    pub fn new(config: &Config) -> CleanerResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| CleanerError::Network {
                message: "Failed to build HTTP client".to_string(),
                source: Some(e.into()),
                retry_count: 0,
            })?;

        Ok(Self {
            http,
            base_url: config.tracker_base_url.trim_end_matches('/').to_string(),
            api_key: config.tracker_api_key.clone(),
            retry: RetryPolicy::default(),
        })
    }

    /// Resolve a fully qualified reference ("name:version" or "name:latest")
    /// to a concrete artifact version.
    pub async fn resolve(&self, artifact_ref: &str) -> CleanerResult<ArtifactEntry> {
        let url = format!("{}/artifacts/resolve", self.base_url);
        self.request_json(
            || self.with_auth(self.http.get(&url).query(&[("name", artifact_ref)])),
            &format!("resolve artifact {artifact_ref}"),
        )
        .await
    }

    /// Resolve `artifact_ref` and materialize its payload under `dest_dir`.
    /// Returns the path of the downloaded file.
    pub async fn download(&self, artifact_ref: &str, dest_dir: &Path) -> CleanerResult<PathBuf> {
        let entry = self.resolve(artifact_ref).await?;
        let download_url = entry.download_url.as_deref().ok_or_else(|| {
            CleanerError::ArtifactStore {
                status: 0,
                message: format!("No download URL for artifact {}", entry.qualified_name()),
            }
        })?;

        let bytes = self
            .request_bytes(
                || self.with_auth(self.http.get(download_url)),
                &format!("download artifact {artifact_ref}"),
            )
            .await?;

        let file_name = Path::new(&entry.name)
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or("artifact.csv");
        let dest = dest_dir.join(file_name);

        tokio::fs::write(&dest, &bytes)
            .await
            .map_err(|e| CleanerError::DataParsing {
                context: format!("Failed to write downloaded artifact to {}", dest.display()),
                source: e.into(),
            })?;

        info!(
            artifact = %entry.qualified_name(),
            bytes = bytes.len(),
            path = %dest.display(),
            "Downloaded artifact"
        );

        Ok(dest)
    }

    /// Register a new artifact version and upload `file_path` as its payload.
    pub async fn publish(&self, file_path: &Path, spec: &ArtifactSpec) -> CleanerResult<ArtifactEntry> {
        let url = format!("{}/artifacts", self.base_url);
        let entry: ArtifactEntry = self
            .request_json(
                || self.with_auth(self.http.post(&url).json(spec)),
                &format!("register artifact {}", spec.name),
            )
            .await?;

        let upload_url = entry.upload_url.as_deref().ok_or_else(|| {
            CleanerError::ArtifactStore {
                status: 0,
                message: format!("No upload URL for artifact {}", entry.qualified_name()),
            }
        })?;

        let body = tokio::fs::read(file_path)
            .await
            .map_err(|e| CleanerError::DataParsing {
                context: format!("Failed to read {} for upload", file_path.display()),
                source: e.into(),
            })?;
        let size = body.len();

        self.request_ok(
            || {
                self.with_auth(
                    self.http
                        .put(upload_url)
                        .header("content-type", "text/csv")
                        .body(body.clone()),
                )
            },
            &format!("upload artifact {}", entry.qualified_name()),
        )
        .await?;

        info!(
            artifact = %entry.qualified_name(),
            bytes = size,
            "Published artifact"
        );

        Ok(entry)
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    /// Send a request with retries, turning transport failures and 5xx into
    /// retried attempts and any final non-success status into an error.
    async fn send_checked<F>(&self, build: F, context: &str) -> CleanerResult<reqwest::Response>
    where
        F: Fn() -> RequestBuilder,
    {
        let response = retry_with_backoff(
            || async {
                let resp = build().send().await.context("HTTP request failed")?;
                if resp.status().is_server_error() {
                    anyhow::bail!("artifact store returned {}", resp.status());
                }
                Ok(resp)
            },
            &self.retry,
            context,
        )
        .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CleanerError::ArtifactStore {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn request_json<T, F>(&self, build: F, context: &str) -> CleanerResult<T>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder,
    {
        let response = self.send_checked(build, context).await?;
        response.json::<T>().await.map_err(|e| CleanerError::DataParsing {
            context: format!("{context}: invalid JSON from artifact store"),
            source: e.into(),
        })
    }

    async fn request_bytes<F>(&self, build: F, context: &str) -> CleanerResult<Vec<u8>>
    where
        F: Fn() -> RequestBuilder,
    {
        let response = self.send_checked(build, context).await?;
        let bytes = response.bytes().await.map_err(|e| CleanerError::Network {
            message: format!("{context}: failed to read response body"),
            source: Some(e.into()),
            retry_count: 0,
        })?;
        Ok(bytes.to_vec())
    }

    async fn request_ok<F>(&self, build: F, context: &str) -> CleanerResult<StatusCode>
    where
        F: Fn() -> RequestBuilder,
    {
        let response = self.send_checked(build, context).await?;
        Ok(response.status())
    }
}
