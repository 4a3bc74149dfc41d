//! Application-wide dependency container.

use std::{sync::Arc, time::Duration};

use crate::{
    error::RepositoryError,
    repository::{MarsPhotosRepository, NetworkMarsPhotosRepository, DEFAULT_BASE_URL},
};

/// Hands out the shared dependencies a screen needs.
pub trait AppContainer: Send + Sync {
    fn mars_photos_repository(&self) -> Arc<dyn MarsPhotosRepository>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerConfig {
    pub base_url: String,
    pub request_timeout: Option<Duration>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            request_timeout: None,
        }
    }
}

pub struct DefaultAppContainer {
    mars_photos_repository: Arc<dyn MarsPhotosRepository>,
}

impl DefaultAppContainer {
    pub fn new(config: ContainerConfig) -> Result<Self, RepositoryError> {
        let repository = match config.request_timeout {
            Some(timeout) => NetworkMarsPhotosRepository::with_timeout(&config.base_url, timeout)?,
            None => NetworkMarsPhotosRepository::new(&config.base_url)?,
        };
        Ok(Self::from_repository(Arc::new(repository)))
    }

    pub fn from_repository(mars_photos_repository: Arc<dyn MarsPhotosRepository>) -> Self {
        Self {
            mars_photos_repository,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn mars_photos_repository(&self) -> Arc<dyn MarsPhotosRepository> {
        Arc::clone(&self.mars_photos_repository)
    }
}
