//! Ordered observer list with snapshot-on-notify delivery.
//!
//! The list is guarded by a `parking_lot::RwLock`. `notify_all` copies the
//! current handles out under the read lock and releases it before calling
//! any observer, so an observer may register or deregister (itself included)
//! from inside its own `update` without deadlocking. Such changes apply from
//! the next notification cycle.

use super::traits::{Observer, Subject};
use crate::error::{Result, StationError};
use crate::reading::Reading;
use log::debug;
use parking_lot::RwLock;
use std::sync::Arc;

/// Ordered collection of observer handles.
///
/// Identity is the `Arc` allocation: two handles are the same observer if
/// they point at the same value, regardless of the concrete type they were
/// coerced from.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: RwLock<Vec<Arc<dyn Observer>>>,
}

impl ObserverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `observer` has at least one registration.
    pub fn contains(&self, observer: &Arc<dyn Observer>) -> bool {
        self.observers.read().iter().any(|o| same_observer(o, observer))
    }

    /// Copy of the current handles, in notification order.
    pub fn snapshot(&self) -> Vec<Arc<dyn Observer>> {
        self.observers.read().clone()
    }
}

impl Subject for ObserverRegistry {
    fn register(&self, observer: Arc<dyn Observer>) {
        debug!("Registering observer '{}'", observer.name());
        self.observers.write().push(observer);
    }

    fn deregister(&self, observer: &Arc<dyn Observer>) -> Result<()> {
        let mut observers = self.observers.write();
        match observers.iter().position(|o| same_observer(o, observer)) {
            Some(index) => {
                observers.remove(index);
                debug!("Deregistered observer '{}'", observer.name());
                Ok(())
            }
            None => Err(StationError::ObserverNotRegistered(
                observer.name().to_string(),
            )),
        }
    }

    fn notify_all(&self, reading: &Reading) {
        let observers = self.snapshot();
        debug!("Notifying {} observer(s) of {:?}", observers.len(), reading);
        for observer in &observers {
            observer.update(reading);
        }
    }

    fn observer_count(&self) -> usize {
        self.observers.read().len()
    }
}

/// Pointer identity, ignoring vtable metadata.
fn same_observer(a: &Arc<dyn Observer>, b: &Arc<dyn Observer>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
