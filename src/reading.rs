//! Weather reading record.
//!
//! A [`Reading`] is one immutable snapshot of the three measurements the
//! station collects. Observers always receive a whole reading, never a
//! partially-updated one.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// One snapshot of temperature, humidity and pressure.
///
/// No range checks are applied: negative humidity or absurd pressure values
/// are passed through as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Temperature (°F)
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Barometric pressure (inHg)
    pub pressure: f64,
}

impl Reading {
    /// Create a new reading from the three measurements.
    pub const fn new(temperature: f64, humidity: f64, pressure: f64) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }

    /// The all-zero reading a station holds before its first measurement.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Get the value of a single field.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Temperature => self.temperature,
            Field::Humidity => self.humidity,
            Field::Pressure => self.pressure,
        }
    }
}

impl From<(f64, f64, f64)> for Reading {
    fn from((temperature, humidity, pressure): (f64, f64, f64)) -> Self {
        Self::new(temperature, humidity, pressure)
    }
}

/// The measured quantities, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Temperature,
    Humidity,
    Pressure,
}
