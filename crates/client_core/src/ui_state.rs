use shared::domain::MarsPhoto;

/// What the home screen should currently show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarsUiState {
    /// A fetch is in flight or has not resolved yet.
    Loading,
    /// The last resolved fetch returned these photos, in repository order.
    Success(Vec<MarsPhoto>),
    /// The last resolved fetch failed. No failure detail is kept.
    Error,
}

impl MarsUiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn photos(&self) -> Option<&[MarsPhoto]> {
        match self {
            Self::Success(photos) => Some(photos.as_slice()),
            Self::Loading | Self::Error => None,
        }
    }
}
