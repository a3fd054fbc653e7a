//! Feeds a sequence of readings into a station.
//!
//! The reading sequence is injected as any `IntoIterator<Item = Reading>`,
//! either the built-in script or one loaded from a JSON file.

use crate::displays::{CurrentConditionsDisplay, ForecastDisplay, ReportSink, StatisticsDisplay};
use crate::error::{Result, StationError};
use crate::reading::Reading;
use crate::station::WeatherStation;
use crate::subject::{Observer, Subject};
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;

/// The default three-reading script.
pub fn scripted_readings() -> Vec<Reading> {
    vec![
        Reading::new(80.0, 65.0, 30.4),
        Reading::new(82.0, 70.0, 29.2),
        Reading::new(78.0, 90.0, 29.2),
    ]
}

/// Load a reading sequence from a JSON array of
/// `{"temperature", "humidity", "pressure"}` objects.
pub fn load_readings(path: &Path) -> Result<Vec<Reading>> {
    let content = std::fs::read_to_string(path).map_err(|source| StationError::ReadingsFile {
        path: path.to_path_buf(),
        source,
    })?;
    let readings: Vec<Reading> = serde_json::from_str(&content)?;
    info!("Loaded {} reading(s) from {}", readings.len(), path.display());
    Ok(readings)
}

/// The three standard displays, built and registered in report order.
pub struct StandardDisplays {
    pub current: Arc<CurrentConditionsDisplay>,
    pub statistics: Arc<StatisticsDisplay>,
    pub forecast: Arc<ForecastDisplay>,
}

impl StandardDisplays {
    /// Build the displays writing to `sink` and register them with `station`:
    /// current conditions, statistics, then forecast.
    pub fn attach(station: &WeatherStation, sink: Arc<dyn ReportSink>) -> Self {
        let displays = Self {
            current: Arc::new(CurrentConditionsDisplay::new(sink.clone())),
            statistics: Arc::new(StatisticsDisplay::new(sink.clone())),
            forecast: Arc::new(ForecastDisplay::new(sink)),
        };
        station.register(displays.current.clone());
        station.register(displays.statistics.clone());
        station.register(displays.forecast.clone());
        displays
    }
}

/// Pushes readings into a station, optionally detaching one observer
/// part-way through.
pub struct Driver<'a> {
    station: &'a WeatherStation,
    detach: Option<(usize, Arc<dyn Observer>)>,
}

impl<'a> Driver<'a> {
    pub fn new(station: &'a WeatherStation) -> Self {
        Self {
            station,
            detach: None,
        }
    }

    /// Deregister `observer` once `count` readings have been delivered.
    ///
    /// A count of zero detaches before the first reading.
    pub fn detach_after(mut self, count: usize, observer: Arc<dyn Observer>) -> Self {
        self.detach = Some((count, observer));
        self
    }

    /// Feed every reading to the station. Returns how many were delivered.
    ///
    /// Fails only if the observer to detach is not registered at the moment
    /// it is due to be removed.
    pub fn run(self, readings: impl IntoIterator<Item = Reading>) -> Result<usize> {
        let mut delivered = 0;
        for reading in readings {
            self.detach_if_due(delivered)?;
            self.station.set_reading(reading);
            delivered += 1;
            info!("Delivered reading {}: {:?}", delivered, reading);
        }
        self.detach_if_due(delivered)?;
        Ok(delivered)
    }

    fn detach_if_due(&self, delivered: usize) -> Result<()> {
        match &self.detach {
            Some((count, observer)) if *count == delivered => {
                info!(
                    "Detaching '{}' after {} reading(s)",
                    observer.name(),
                    delivered
                );
                self.station.deregister(observer).inspect_err(|e| {
                    warn!("Could not detach '{}': {}", observer.name(), e);
                })
            }
            _ => Ok(()),
        }
    }
}
