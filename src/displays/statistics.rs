//! Statistics display.
//!
//! Tracks the smallest and largest value seen for each field, plus the
//! midpoint between them. The midpoint is reported under the "Average"
//! label but is `(min + max) / 2`, not a mean over all samples.

use super::sink::ReportSink;
use super::{WeatherDisplay, fmt_value, round2};
use crate::reading::{Field, Reading};
use crate::subject::Observer;
use parking_lot::Mutex;
use std::fmt::Write as _;
use std::sync::Arc;
use strum::IntoEnumIterator;

/// Running min/max/midpoint for a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    pub min: f64,
    pub max: f64,
    pub midpoint: f64,
}

impl FieldStats {
    /// Accumulators before any value has been seen.
    pub const fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            midpoint: 0.0,
        }
    }

    /// Fold one value in. Folding the same value again changes nothing.
    pub fn fold(&mut self, value: f64) {
        self.min = round2(self.min.min(value));
        self.max = round2(self.max.max(value));
        self.midpoint = round2((self.min + self.max) / 2.0);
    }
}

impl Default for FieldStats {
    fn default() -> Self {
        Self::empty()
    }
}

/// Accumulators for all three fields at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticsSnapshot {
    pub temperature: FieldStats,
    pub humidity: FieldStats,
    pub pressure: FieldStats,
}

struct StatsState {
    /// Latest reading, `None` until the first update.
    latest: Option<Reading>,
    temperature: FieldStats,
    humidity: FieldStats,
    pressure: FieldStats,
}

impl StatsState {
    fn field_mut(&mut self, field: Field) -> &mut FieldStats {
        match field {
            Field::Temperature => &mut self.temperature,
            Field::Humidity => &mut self.humidity,
            Field::Pressure => &mut self.pressure,
        }
    }

    fn field(&self, field: Field) -> FieldStats {
        match field {
            Field::Temperature => self.temperature,
            Field::Humidity => self.humidity,
            Field::Pressure => self.pressure,
        }
    }

    /// Bring the accumulators up to date with `latest`.
    fn recompute(&mut self) {
        if let Some(latest) = self.latest {
            for field in Field::iter() {
                self.field_mut(field).fold(latest.get(field));
            }
        }
    }
}

/// Running statistics over every reading received.
pub struct StatisticsDisplay {
    state: Mutex<StatsState>,
    sink: Arc<dyn ReportSink>,
}

impl StatisticsDisplay {
    /// Create a display with empty accumulators. Not registered anywhere.
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self {
            state: Mutex::new(StatsState {
                latest: None,
                temperature: FieldStats::empty(),
                humidity: FieldStats::empty(),
                pressure: FieldStats::empty(),
            }),
            sink,
        }
    }

    /// Current accumulators for one field.
    pub fn stats(&self, field: Field) -> FieldStats {
        self.state.lock().field(field)
    }

    /// Current accumulators for every field.
    pub fn snapshot(&self) -> StatisticsSnapshot {
        let state = self.state.lock();
        StatisticsSnapshot {
            temperature: state.temperature,
            humidity: state.humidity,
            pressure: state.pressure,
        }
    }
}

impl Observer for StatisticsDisplay {
    fn update(&self, reading: &Reading) {
        self.state.lock().latest = Some(*reading);
        self.display();
    }

    fn name(&self) -> &str {
        "statistics"
    }
}

impl WeatherDisplay for StatisticsDisplay {
    fn render(&self) -> String {
        let mut state = self.state.lock();
        state.recompute();

        let mut report = String::from("--- Statistics ---\n");
        for field in Field::iter() {
            let stats = state.field(field);
            let _ = writeln!(report, "Min {field}: {}", fmt_value(stats.min));
            let _ = writeln!(report, "Max {field}: {}", fmt_value(stats.max));
            let _ = writeln!(report, "Average {field}: {}", fmt_value(stats.midpoint));
        }
        report.push_str("------------------");
        report
    }

    fn display(&self) {
        let report = self.render();
        self.sink.emit(&report);
    }
}
