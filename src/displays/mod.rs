//! Display observers.
//!
//! Each display derives its own view from the readings it is notified of and
//! writes a textual report to a [`ReportSink`]:
//! - `current_conditions`: pass-through snapshot
//! - `statistics`: running min/max/midpoint per field
//! - `forecast`: fixed linear forecast from the latest reading
//! - `sink`: where rendered reports go (stdout, memory)

pub mod current_conditions;
pub mod forecast;
pub mod sink;
pub mod statistics;

pub use current_conditions::CurrentConditionsDisplay;
pub use forecast::{Forecast, ForecastDisplay};
pub use sink::{MemorySink, ReportSink, StdoutSink};
pub use statistics::{FieldStats, StatisticsDisplay, StatisticsSnapshot};

use crate::subject::Observer;

/// Observer that renders a textual report.
///
/// Concrete displays call [`display`](WeatherDisplay::display) at the end of
/// their own `update`, after their derived state has been refreshed.
pub trait WeatherDisplay: Observer {
    /// Render the current derived state as report text.
    ///
    /// Calling this repeatedly without an intervening update yields the same
    /// text each time.
    fn render(&self) -> String;

    /// Render and hand the report to this display's sink.
    fn display(&self);
}

/// Magnitude from which every `f64` is already a whole number of cents.
const NO_CENTS_ABOVE: f64 = (1u64 << 52) as f64 / 100.0;

/// Round to 2 decimal places, halves away from zero.
///
/// Values too large to carry a fractional cent are returned unchanged, so
/// scaling by 100 never overflows to infinity.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= NO_CENTS_ABOVE {
        return value;
    }
    (value * 100.0).round() / 100.0
}

/// Report formatting for a numeric value. Always shows a decimal point.
pub(crate) fn fmt_value(value: f64) -> String {
    format!("{value:?}")
}
