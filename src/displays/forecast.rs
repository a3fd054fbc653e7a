//! Forecast display.
//!
//! Derives a forecast from the latest reading alone using fixed linear
//! formulas. No history is kept.

use super::sink::ReportSink;
use super::{WeatherDisplay, fmt_value, round2};
use crate::reading::Reading;
use crate::subject::Observer;
use parking_lot::RwLock;
use std::sync::Arc;

/// Forecast values, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Forecast {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

impl Forecast {
    /// Compute the forecast for a reading.
    pub fn from_reading(reading: &Reading) -> Self {
        let Reading {
            temperature,
            humidity,
            pressure,
        } = *reading;
        Self {
            temperature: round2(temperature + 0.11 * humidity + 0.22 * pressure),
            humidity: round2(humidity - 0.9 * humidity),
            pressure: round2(pressure + 0.1 * temperature - 0.21 * pressure),
        }
    }
}

struct ForecastState {
    latest: Reading,
    forecast: Forecast,
}

/// Forecast derived from the most recent reading.
pub struct ForecastDisplay {
    state: RwLock<ForecastState>,
    sink: Arc<dyn ReportSink>,
}

impl ForecastDisplay {
    /// Create a display with an all-zero forecast. Not registered anywhere.
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self {
            state: RwLock::new(ForecastState {
                latest: Reading::zero(),
                forecast: Forecast::default(),
            }),
            sink,
        }
    }

    /// The last computed forecast.
    pub fn forecast(&self) -> Forecast {
        self.state.read().forecast
    }
}

impl Observer for ForecastDisplay {
    fn update(&self, reading: &Reading) {
        self.state.write().latest = *reading;
        self.display();
    }

    fn name(&self) -> &str {
        "forecast"
    }
}

impl WeatherDisplay for ForecastDisplay {
    fn render(&self) -> String {
        let mut state = self.state.write();
        let forecast = Forecast::from_reading(&state.latest);
        state.forecast = forecast;
        format!(
            "--- Forecast ---\n\
             Temperature: {}\n\
             Humidity: {}\n\
             Pressure: {}\n\
             ------------------END OF REPORT------------------",
            fmt_value(forecast.temperature),
            fmt_value(forecast.humidity),
            fmt_value(forecast.pressure)
        )
    }

    fn display(&self) {
        let report = self.render();
        self.sink.emit(&report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::displays::MemorySink;

    #[test]
    fn test_forecast_formulas() {
        let forecast = Forecast::from_reading(&Reading::new(78.0, 90.0, 29.2));
        assert_eq!(
            forecast,
            Forecast {
                temperature: 94.32,
                humidity: 9.0,
                pressure: 30.87
            }
        );
    }

    #[test]
    fn test_forecast_for_very_large_pressure() {
        let forecast = Forecast::from_reading(&Reading::new(0.0, 0.0, 1e307));
        assert!(forecast.pressure.is_finite());
        assert_eq!(forecast.pressure, 1e307 - 0.21 * 1e307);
        assert_eq!(forecast.temperature, 0.22 * 1e307);
    }

    #[test]
    fn test_forecast_uses_latest_reading_only() {
        let sink = Arc::new(MemorySink::new());
        let display = ForecastDisplay::new(sink.clone());

        display.update(&Reading::new(80.0, 65.0, 30.4));
        assert_eq!(
            display.forecast(),
            Forecast {
                temperature: 93.84,
                humidity: 6.5,
                pressure: 32.02
            }
        );

        display.update(&Reading::new(78.0, 90.0, 29.2));
        assert_eq!(
            display.forecast(),
            Forecast::from_reading(&Reading::new(78.0, 90.0, 29.2))
        );
    }

    #[test]
    fn test_initial_forecast_is_zero() {
        let display = ForecastDisplay::new(Arc::new(MemorySink::new()));
        assert_eq!(display.forecast(), Forecast::default());
        assert!(display.render().contains("Temperature: 0.0\n"));
    }

    #[test]
    fn test_report_layout() {
        let sink = Arc::new(MemorySink::new());
        let display = ForecastDisplay::new(sink.clone());
        display.update(&Reading::new(78.0, 90.0, 29.2));

        assert_eq!(
            sink.last().unwrap(),
            "--- Forecast ---\n\
             Temperature: 94.32\n\
             Humidity: 9.0\n\
             Pressure: 30.87\n\
             ------------------END OF REPORT------------------"
        );
    }

    #[test]
    fn test_display_is_idempotent() {
        let sink = Arc::new(MemorySink::new());
        let display = ForecastDisplay::new(sink.clone());
        display.update(&Reading::new(82.0, 70.0, 29.2));
        display.display();
        display.display();

        let reports = sink.reports();
        assert_eq!(reports.len(), 3);
        assert!(reports.iter().all(|r| r == &reports[0]));
    }
}
