use tokio::sync::RwLock;

use crate::db::{seed, Directory};

/// Shared application state.
///
/// Reads take the read guard; creates and deletes hold the write guard
/// across lookup and mutation so concurrent requests cannot lose updates.
pub struct AppState {
    pub directory: RwLock<Directory>,
}

impl AppState {
    pub fn new(directory: Directory) -> Self {
        Self {
            directory: RwLock::new(directory),
        }
    }

    /// State holding the standard seed contacts.
    pub fn seeded() -> Self {
        Self::new(seed::initialize())
    }
}
