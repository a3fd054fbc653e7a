//! Shared traits for subjects and observers.

use crate::error::Result;
use crate::reading::Reading;
use std::sync::Arc;

/// Anything that can receive a [`Reading`] and react to it.
///
/// Observers are shared as `Arc<dyn Observer>` between the subject that
/// notifies them and the code that built them, so `update` takes `&self`
/// and implementors keep their derived state behind interior mutability.
pub trait Observer: Send + Sync {
    /// Receive the latest reading.
    ///
    /// Called synchronously from [`Subject::notify_all`], once per
    /// registration.
    fn update(&self, reading: &Reading);

    /// Short name used in log lines and error messages.
    fn name(&self) -> &str {
        "observer"
    }
}

/// Registry + broadcaster for observers.
pub trait Subject {
    /// Append an observer to the notification list.
    ///
    /// No deduplication: registering the same observer twice makes it
    /// receive two updates per notification cycle.
    fn register(&self, observer: Arc<dyn Observer>);

    /// Remove the first registration of `observer`.
    ///
    /// Returns [`StationError::ObserverNotRegistered`](crate::error::StationError::ObserverNotRegistered)
    /// if the observer is not currently registered.
    fn deregister(&self, observer: &Arc<dyn Observer>) -> Result<()>;

    /// Deliver `reading` to every registered observer in registration order.
    fn notify_all(&self, reading: &Reading);

    /// Number of registrations (duplicates counted).
    fn observer_count(&self) -> usize;
}
