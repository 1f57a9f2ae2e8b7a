use crate::store::FileStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: FileStore,
}
