pub mod employee;
pub mod error;
pub mod health;
pub mod leave_request;

use crate::db::{SharedStore, Store};
use error::ApiError;
use std::sync::MutexGuard;

/// Holds the store lock for the duration of one request.
fn lock(store: &SharedStore) -> Result<MutexGuard<'_, Store>, ApiError> {
    store.lock().map_err(|_| ApiError::LockPoisoned)
}
