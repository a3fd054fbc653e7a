//! Three-reading scenario through the full station/display pipeline.

use std::sync::Arc;
use weather_station::displays::{FieldStats, Forecast, MemorySink};
use weather_station::driver::{Driver, StandardDisplays, scripted_readings};
use weather_station::reading::Field;
use weather_station::{Observer, Reading, Subject, WeatherDisplay, WeatherStation};

fn current_report(t: &str, h: &str, p: &str) -> String {
    format!("Current conditions: {t} F degrees and {h} [%] humidity and pressure {p}")
}

fn statistics_report(rows: [(&str, &str, &str); 3]) -> String {
    let mut report = String::from("--- Statistics ---\n");
    for (field, (min, max, avg)) in ["temperature", "humidity", "pressure"].iter().zip(rows) {
        report.push_str(&format!("Min {field}: {min}\n"));
        report.push_str(&format!("Max {field}: {max}\n"));
        report.push_str(&format!("Average {field}: {avg}\n"));
    }
    report.push_str("------------------");
    report
}

fn forecast_report(t: &str, h: &str, p: &str) -> String {
    format!(
        "--- Forecast ---\nTemperature: {t}\nHumidity: {h}\nPressure: {p}\n\
         ------------------END OF REPORT------------------"
    )
}

#[test]
fn test_scripted_scenario_reports() {
    let station = WeatherStation::new();
    let sink = Arc::new(MemorySink::new());
    let _displays = StandardDisplays::attach(&station, sink.clone());

    let mut readings = scripted_readings().into_iter();

    station.set_reading(readings.next().unwrap());
    assert_eq!(
        sink.reports(),
        vec![
            current_report("80.0", "65.0", "30.4"),
            statistics_report([
                ("80.0", "80.0", "80.0"),
                ("65.0", "65.0", "65.0"),
                ("30.4", "30.4", "30.4"),
            ]),
            forecast_report("93.84", "6.5", "32.02"),
        ]
    );

    station.set_reading(readings.next().unwrap());
    assert_eq!(
        sink.reports()[3..],
        [
            current_report("82.0", "70.0", "29.2"),
            statistics_report([
                ("80.0", "82.0", "81.0"),
                ("65.0", "70.0", "67.5"),
                ("29.2", "30.4", "29.8"),
            ]),
            forecast_report("96.12", "7.0", "31.27"),
        ]
    );

    station.set_reading(readings.next().unwrap());
    assert_eq!(
        sink.reports()[6..],
        [
            current_report("78.0", "90.0", "29.2"),
            statistics_report([
                ("78.0", "82.0", "80.0"),
                ("65.0", "90.0", "77.5"),
                ("29.2", "30.4", "29.8"),
            ]),
            forecast_report("94.32", "9.0", "30.87"),
        ]
    );
}

#[test]
fn test_derived_state_after_scenario() {
    let station = WeatherStation::new();
    let displays = StandardDisplays::attach(&station, Arc::new(MemorySink::new()));

    Driver::new(&station).run(scripted_readings()).unwrap();

    assert_eq!(displays.current.latest(), Reading::new(78.0, 90.0, 29.2));
    assert_eq!(
        displays.statistics.stats(Field::Temperature),
        FieldStats {
            min: 78.0,
            max: 82.0,
            midpoint: 80.0
        }
    );
    assert_eq!(
        displays.forecast.forecast(),
        Forecast {
            temperature: 94.32,
            humidity: 9.0,
            pressure: 30.87
        }
    );
}

#[test]
fn test_detached_display_keeps_its_state() {
    let station = WeatherStation::new();
    let sink = Arc::new(MemorySink::new());
    let displays = StandardDisplays::attach(&station, sink.clone());

    Driver::new(&station).run(scripted_readings()).unwrap();

    let statistics: Arc<dyn Observer> = displays.statistics.clone();
    station.deregister(&statistics).unwrap();
    let frozen = displays.statistics.render();

    station.set_measurements(120.0, 100.0, 1000.0);

    assert_eq!(displays.statistics.render(), frozen);
    assert_eq!(
        displays.statistics.stats(Field::Humidity),
        FieldStats {
            min: 65.0,
            max: 90.0,
            midpoint: 77.5
        }
    );
    // Current conditions and forecast still follow along
    assert_eq!(
        sink.last().unwrap(),
        forecast_report("351.0", "10.0", "802.0")
    );
    assert_eq!(displays.current.latest(), Reading::new(120.0, 100.0, 1000.0));
    assert!(station.deregister(&statistics).is_err());
}

#[test]
fn test_register_same_display_twice() {
    let station = WeatherStation::new();
    let sink = Arc::new(MemorySink::new());
    let forecast = Arc::new(weather_station::displays::ForecastDisplay::new(sink.clone()));
    station.register(forecast.clone());
    station.register(forecast.clone());

    station.set_measurements(78.0, 90.0, 29.2);
    assert_eq!(sink.len(), 2);
    assert_eq!(sink.reports()[0], sink.reports()[1]);
}
