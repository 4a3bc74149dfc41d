use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::domain::MarsPhoto;
use tracing::debug;
use url::Url;

use crate::error::RepositoryError;

pub const DEFAULT_BASE_URL: &str = "https://android-kotlin-fun-mars-server.appspot.com";
const PHOTOS_ENDPOINT: &str = "photos";

/// Source of the Mars photo list.
#[async_trait]
pub trait MarsPhotosRepository: Send + Sync {
    async fn get_mars_photos(&self) -> Result<Vec<MarsPhoto>, RepositoryError>;
}

/// Fetches the photo list over HTTP from `{base_url}/photos`.
pub struct NetworkMarsPhotosRepository {
    http: Client,
    photos_url: Url,
}

impl NetworkMarsPhotosRepository {
    pub fn new(base_url: &str) -> Result<Self, RepositoryError> {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, RepositoryError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| RepositoryError::Other(anyhow::Error::new(err)))?;
        Self::with_client(base_url, http)
    }

    pub fn with_client(base_url: &str, http: Client) -> Result<Self, RepositoryError> {
        Ok(Self {
            http,
            photos_url: photos_url(base_url)?,
        })
    }

    pub fn photos_url(&self) -> &Url {
        &self.photos_url
    }
}

#[async_trait]
impl MarsPhotosRepository for NetworkMarsPhotosRepository {
    async fn get_mars_photos(&self) -> Result<Vec<MarsPhoto>, RepositoryError> {
        debug!(url = %self.photos_url, "requesting mars photos");
        let res = self
            .http
            .get(self.photos_url.clone())
            .send()
            .await
            .map_err(RepositoryError::Network)?;

        let status = res.status();
        if !status.is_success() {
            return Err(RepositoryError::Http {
                status: status.as_u16(),
            });
        }

        let photos: Vec<MarsPhoto> = res.json().await.map_err(RepositoryError::Decode)?;
        debug!(count = photos.len(), "received mars photos");
        Ok(photos)
    }
}

fn photos_url(base_url: &str) -> Result<Url, RepositoryError> {
    let trimmed = base_url.trim();
    // Url::join drops the last path segment unless the base ends with '/'.
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    Url::parse(&normalized)
        .and_then(|base| base.join(PHOTOS_ENDPOINT))
        .map_err(|source| RepositoryError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })
}

#[cfg(test)]
#[path = "tests/repository_tests.rs"]
mod tests;
