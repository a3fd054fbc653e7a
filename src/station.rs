//! Weather station subject.
//!
//! Holds the current [`Reading`] and pushes every new one to its registered
//! observers. `set_measurements` is the only way to change the reading, and
//! each call runs exactly one notification cycle.

use crate::error::Result;
use crate::reading::Reading;
use crate::subject::{Observer, ObserverRegistry, Subject};
use log::debug;
use parking_lot::RwLock;
use std::sync::Arc;

/// The data source of the pipeline.
///
/// # Example
/// ```ignore
/// let station = WeatherStation::new();
/// let display = Arc::new(CurrentConditionsDisplay::new(Arc::new(StdoutSink)));
/// station.register(display.clone());
/// station.set_measurements(80.0, 65.0, 30.4);
/// ```
pub struct WeatherStation {
    current: RwLock<Reading>,
    observers: ObserverRegistry,
}

impl WeatherStation {
    /// Create a station holding the all-zero reading and no observers.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Reading::zero()),
            observers: ObserverRegistry::new(),
        }
    }

    /// Get the current reading.
    pub fn current(&self) -> Reading {
        *self.current.read()
    }

    /// Store a new reading built from the three measurements and notify
    /// every registered observer.
    pub fn set_measurements(&self, temperature: f64, humidity: f64, pressure: f64) {
        self.set_reading(Reading::new(temperature, humidity, pressure));
    }

    /// Store `reading` as current and notify every registered observer.
    pub fn set_reading(&self, reading: Reading) {
        debug!("New measurements: {:?}", reading);
        // Lock released before observers run so they may call back into the station
        *self.current.write() = reading;
        self.notify_all(&reading);
    }
}

impl Default for WeatherStation {
    fn default() -> Self {
        Self::new()
    }
}

impl Subject for WeatherStation {
    fn register(&self, observer: Arc<dyn Observer>) {
        self.observers.register(observer);
    }

    fn deregister(&self, observer: &Arc<dyn Observer>) -> Result<()> {
        self.observers.deregister(observer)
    }

    fn notify_all(&self, reading: &Reading) {
        self.observers.notify_all(reading);
    }

    fn observer_count(&self) -> usize {
        self.observers.observer_count()
    }
}
