//! Shared HTTP adapter state.
//!
//! The record store is constructed once at startup and owned here;
//! handlers receive the state via `actix_web::web::Data`. Mutation is
//! serialised behind a mutex so concurrent workers cannot corrupt the
//! list or duplicate ids.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{Error, ItemStore};

/// Dependency bundle for HTTP handlers.
#[derive(Debug, Clone, Default)]
pub struct HttpState {
    store: Arc<Mutex<ItemStore>>,
}

impl HttpState {
    /// Construct state around an empty record store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire exclusive access to the record store.
    ///
    /// A poisoned lock (a panic while holding the guard) surfaces as an
    /// internal error response instead of propagating the panic.
    pub fn store(&self) -> Result<MutexGuard<'_, ItemStore>, Error> {
        self.store
            .lock()
            .map_err(|_| Error::internal("item store lock poisoned"))
    }
}
