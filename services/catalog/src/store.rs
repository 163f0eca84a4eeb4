//! Store handle shared by views and operations

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::trace;

use crate::{
    api::CatalogApi,
    state::{Action, AppState},
};

/// Outcome of a successful operation: the value plus a message meant for
/// the user (toast, banner)
#[derive(Debug, Clone, PartialEq)]
pub struct Completed<T> {
    pub value: T,
    pub message: String,
}

/// Application state plus the service it mirrors
///
/// Cloning is cheap; every clone sees the same state.
#[derive(Clone)]
pub struct Store {
    state: Arc<RwLock<AppState>>,
    pub(crate) api: Arc<dyn CatalogApi>,
}

impl Store {
    /// Create a new store with empty state
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            api,
        }
    }

    /// Reduce one action under the write lock
    pub async fn dispatch(&self, action: Action) {
        trace!("dispatch {:?}", action);
        self.state.write().await.reduce(action);
    }

    /// Read from the current state
    pub async fn select<R>(&self, selector: impl FnOnce(&AppState) -> R) -> R {
        let state = self.state.read().await;
        selector(&state)
    }

    /// Clone of the whole current state
    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }
}
