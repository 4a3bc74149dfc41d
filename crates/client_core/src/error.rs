use thiserror::Error;

/// Failures raised by a [`crate::MarsPhotosRepository`].
///
/// The view model folds every variant into `MarsUiState::Error`; the detail
/// only exists for callers that talk to a repository directly.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("invalid photos endpoint '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("network failure while fetching photos: {0}")]
    Network(#[source] reqwest::Error),
    #[error("photos endpoint responded with HTTP {status}")]
    Http { status: u16 },
    #[error("failed to decode photo list: {0}")]
    Decode(#[source] reqwest::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RepositoryError {
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Http { .. })
    }
}

#[derive(Debug, Error)]
pub enum ViewModelError {
    #[error("MarsViewModel must be created from within a tokio runtime")]
    NoRuntime(#[source] tokio::runtime::TryCurrentError),
}
