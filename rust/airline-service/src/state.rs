use std::sync::{Arc, Mutex};

use airline_core::{Database, StoreError};

use crate::errors::AppError;

/// Shared handle on the store. The connection is not `Sync`, so every
/// request takes the lock for the length of one store call.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Database>>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db: Arc::new(Mutex::new(db)) }
    }

    pub fn with_db<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Database) -> Result<T, StoreError>,
    {
        let mut guard = self
            .db
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("store lock poisoned")))?;
        Ok(f(&mut guard)?)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("poisoned", &self.db.is_poisoned())
            .finish()
    }
}
