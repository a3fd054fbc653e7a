//! Current conditions display.
//!
//! Shows the latest reading exactly as received.

use super::sink::ReportSink;
use super::{WeatherDisplay, fmt_value};
use crate::reading::Reading;
use crate::subject::Observer;
use parking_lot::RwLock;
use std::sync::Arc;

/// Pass-through snapshot of the most recent reading.
pub struct CurrentConditionsDisplay {
    latest: RwLock<Reading>,
    sink: Arc<dyn ReportSink>,
}

impl CurrentConditionsDisplay {
    /// Create a display that has not been notified yet (all-zero reading).
    ///
    /// The display is not registered anywhere; pass it to
    /// [`Subject::register`](crate::subject::Subject::register) to receive updates.
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self {
            latest: RwLock::new(Reading::zero()),
            sink,
        }
    }

    /// The reading currently shown.
    pub fn latest(&self) -> Reading {
        *self.latest.read()
    }
}

impl Observer for CurrentConditionsDisplay {
    fn update(&self, reading: &Reading) {
        *self.latest.write() = *reading;
        self.display();
    }

    fn name(&self) -> &str {
        "current-conditions"
    }
}

impl WeatherDisplay for CurrentConditionsDisplay {
    fn render(&self) -> String {
        let latest = self.latest();
        format!(
            "Current conditions: {} F degrees and {} [%] humidity and pressure {}",
            fmt_value(latest.temperature),
            fmt_value(latest.humidity),
            fmt_value(latest.pressure)
        )
    }

    fn display(&self) {
        self.sink.emit(&self.render());
    }
}
