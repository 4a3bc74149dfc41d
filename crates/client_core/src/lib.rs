pub mod container;
pub mod error;
pub mod repository;
pub mod ui_state;
pub mod view_model;

pub use container::{AppContainer, ContainerConfig, DefaultAppContainer};
pub use error::{RepositoryError, ViewModelError};
pub use repository::{MarsPhotosRepository, NetworkMarsPhotosRepository, DEFAULT_BASE_URL};
pub use ui_state::MarsUiState;
pub use view_model::{MarsViewModel, MarsViewModelFactory};
