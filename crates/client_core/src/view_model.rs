//! Home screen state holder: owns the [`MarsUiState`] and drives photo fetches.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, MutexGuard,
};

use tokio::{runtime::Handle, sync::watch, task::JoinHandle};
use tokio_stream::wrappers::WatchStream;
use tracing::debug;

use crate::{
    container::AppContainer,
    error::ViewModelError,
    repository::MarsPhotosRepository,
    ui_state::MarsUiState,
};

/// Holds the home screen's [`MarsUiState`] and refreshes it from a
/// [`MarsPhotosRepository`].
///
/// One fetch starts as soon as the view model is built. Every later
/// [`fetch_mars_photos`](Self::fetch_mars_photos) call starts another; calls
/// that overlap are neither merged nor cancelled, so whichever fetch resolves
/// last decides the final state.
///
/// Fetch tasks belong to the view model's scope. Dropping the view model, or
/// calling [`clear`](Self::clear), aborts them and no further state is
/// committed.
pub struct MarsViewModel {
    repository: Arc<dyn MarsPhotosRepository>,
    runtime: Handle,
    scope: Arc<ViewModelScope>,
    next_fetch_id: AtomicU64,
}

struct ViewModelScope {
    ui_state: watch::Sender<MarsUiState>,
    inner: Mutex<ScopeState>,
}

#[derive(Default)]
struct ScopeState {
    cleared: bool,
    tasks: Vec<JoinHandle<()>>,
}

impl ViewModelScope {
    fn lock(&self) -> MutexGuard<'_, ScopeState> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Publishes `next` unless the scope has ended. The check and the write
    /// happen under the same lock as `clear`.
    fn commit(&self, next: MarsUiState) -> bool {
        let guard = self.lock();
        if guard.cleared {
            return false;
        }
        self.ui_state.send_replace(next);
        true
    }

    fn clear(&self) {
        let tasks = {
            let mut guard = self.lock();
            guard.cleared = true;
            std::mem::take(&mut guard.tasks)
        };
        for task in tasks {
            task.abort();
        }
    }
}

impl MarsViewModel {
    /// Builds the view model on the current tokio runtime and starts the first
    /// fetch.
    pub fn new(repository: Arc<dyn MarsPhotosRepository>) -> Result<Self, ViewModelError> {
        let runtime = Handle::try_current().map_err(ViewModelError::NoRuntime)?;
        Ok(Self::with_runtime(repository, runtime))
    }

    /// Like [`new`](Self::new) but schedules fetches on `runtime`, so it can be
    /// called from outside a runtime context.
    pub fn with_runtime(repository: Arc<dyn MarsPhotosRepository>, runtime: Handle) -> Self {
        let (ui_state, _) = watch::channel(MarsUiState::Loading);
        let view_model = Self {
            repository,
            runtime,
            scope: Arc::new(ViewModelScope {
                ui_state,
                inner: Mutex::new(ScopeState::default()),
            }),
            next_fetch_id: AtomicU64::new(1),
        };
        view_model.fetch_mars_photos();
        view_model
    }

    /// Factory that resolves the repository from `container`.
    pub fn factory(container: Arc<dyn AppContainer>) -> MarsViewModelFactory {
        MarsViewModelFactory { container }
    }

    /// Current state snapshot.
    pub fn ui_state(&self) -> MarsUiState {
        self.scope.ui_state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<MarsUiState> {
        self.scope.ui_state.subscribe()
    }

    /// Stream that yields the current state and then every change.
    pub fn updates(&self) -> WatchStream<MarsUiState> {
        WatchStream::new(self.subscribe())
    }

    /// Sets the state to `Loading` right away, then fetches the photo list in
    /// the background and publishes `Success` or `Error`.
    ///
    /// Does nothing once the view model has been cleared.
    pub fn fetch_mars_photos(&self) {
        let fetch_id = self.next_fetch_id.fetch_add(1, Ordering::Relaxed);
        let mut guard = self.scope.lock();
        if guard.cleared {
            debug!(fetch_id, "view model cleared; ignoring fetch request");
            return;
        }
        guard.tasks.retain(|task| !task.is_finished());

        self.scope.ui_state.send_replace(MarsUiState::Loading);
        debug!(fetch_id, "fetching mars photos");

        let repository = Arc::clone(&self.repository);
        let scope = Arc::clone(&self.scope);
        let task = self.runtime.spawn(async move {
            let next = load_photos(repository.as_ref(), fetch_id).await;
            if !scope.commit(next) {
                debug!(fetch_id, "view model cleared before fetch resolved");
            }
        });
        guard.tasks.push(task);
    }

    /// Number of fetches that have not resolved yet.
    pub fn in_flight(&self) -> usize {
        let mut guard = self.scope.lock();
        guard.tasks.retain(|task| !task.is_finished());
        guard.tasks.len()
    }

    /// Ends the view model's scope: in-flight fetches are aborted and the
    /// state is frozen. Called automatically on drop.
    pub fn clear(&self) {
        self.scope.clear();
    }

    pub fn is_cleared(&self) -> bool {
        self.scope.lock().cleared
    }
}

impl Drop for MarsViewModel {
    fn drop(&mut self) {
        self.scope.clear();
    }
}

async fn load_photos(repository: &dyn MarsPhotosRepository, fetch_id: u64) -> MarsUiState {
    match repository.get_mars_photos().await {
        Ok(photos) => {
            debug!(fetch_id, count = photos.len(), "mars photos loaded");
            MarsUiState::Success(photos)
        }
        Err(err) => {
            debug!(fetch_id, error = %err, "mars photos fetch failed");
            MarsUiState::Error
        }
    }
}

/// Builds [`MarsViewModel`]s with the repository held by an [`AppContainer`].
#[derive(Clone)]
pub struct MarsViewModelFactory {
    container: Arc<dyn AppContainer>,
}

impl MarsViewModelFactory {
    pub fn create(&self) -> Result<MarsViewModel, ViewModelError> {
        MarsViewModel::new(self.container.mars_photos_repository())
    }

    pub fn create_with_runtime(&self, runtime: Handle) -> MarsViewModel {
        MarsViewModel::with_runtime(self.container.mars_photos_repository(), runtime)
    }
}

#[cfg(test)]
#[path = "tests/view_model_tests.rs"]
mod tests;
