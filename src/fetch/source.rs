//! Content source abstraction.
//!
//! CMS documents either sit behind an HTTP endpoint (the deployed CMS) or
//! in a local fixture directory (development, tests). Both sides expose the
//! same operation: resolve a manifest-relative path and decode the JSON
//! body. No retries, no timeout beyond the platform default.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a single resource could not be loaded.
///
/// Always localized to one resource; the loader recovers by omission.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for `{resource}`")]
    Status { resource: String, status: u16 },

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid JSON in `{resource}`")]
    Json {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where CMS documents are fetched from.
#[derive(Debug)]
pub enum ContentSource {
    /// Remote CMS endpoint; manifest paths are joined onto the base URL.
    Remote {
        base: String,
        client: reqwest::Client,
    },
    /// Local fixture directory; manifest paths are joined onto the root.
    Local { root: PathBuf },
}

impl ContentSource {
    /// Build a source from the `[content] source` config value.
    ///
    /// `http(s)://` values are remote; anything else is a directory
    /// resolved against the site root.
    pub fn from_config(source: &str, site_root: &Path) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::Remote {
                base: source.trim_end_matches('/').to_owned(),
                client: reqwest::Client::new(),
            }
        } else {
            let path = Path::new(source);
            let root = if path.is_absolute() {
                path.to_path_buf()
            } else {
                site_root.join(path)
            };
            Self::Local { root }
        }
    }

    /// Fetch one JSON document by manifest-relative path.
    pub async fn fetch_json<T: DeserializeOwned>(&self, rel: &str) -> Result<T, FetchError> {
        match self {
            Self::Remote { base, client } => {
                let url = format!("{base}/{rel}");
                let response = client.get(&url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        resource: rel.to_owned(),
                        status: status.as_u16(),
                    });
                }
                let body = response.bytes().await?;
                serde_json::from_slice(&body).map_err(|source| FetchError::Json {
                    resource: rel.to_owned(),
                    source,
                })
            }
            Self::Local { root } => {
                let path = root.join(rel);
                let body = std::fs::read(&path).map_err(|err| FetchError::Io(path.clone(), err))?;
                serde_json::from_slice(&body).map_err(|source| FetchError::Json {
                    resource: rel.to_owned(),
                    source,
                })
            }
        }
    }
}
