//! Lock-guarded handle for hosts that share one manager between threads
//!
//! The manager itself is single-owner. Hosts that need to reach it from
//! several threads go through this handle, which serializes every call so no
//! caller ever sees an operation half-applied.

use crate::manager::OrderBookManager;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Cloneable, mutex-guarded [`OrderBookManager`]
#[derive(Debug, Clone, Default)]
pub struct SharedOrderBookManager {
    inner: Arc<Mutex<OrderBookManager>>,
}

impl SharedOrderBookManager {
    /// Wrap an existing manager
    pub fn new(manager: OrderBookManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// Take the lock for a sequence of calls
    pub fn lock(&self) -> MutexGuard<'_, OrderBookManager> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access to the manager
    pub fn with<R>(&self, f: impl FnOnce(&mut OrderBookManager) -> R) -> R {
        let mut manager = self.inner.lock();
        f(&mut manager)
    }

    /// Number of handles sharing this manager
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}
