use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use weather_station::config::Config;
use weather_station::displays::StdoutSink;
use weather_station::driver::{Driver, StandardDisplays, load_readings, scripted_readings};
use weather_station::{Result, WeatherStation};

#[derive(Parser)]
#[command(name = "weather-station")]
#[command(about = "Feed weather readings to the current, statistics and forecast displays")]
struct Cli {
    /// JSON file with an array of {temperature, humidity, pressure} readings
    /// [env: WEATHER_READINGS]
    #[arg(long)]
    readings: Option<PathBuf>,

    /// Detach the current conditions display after this many readings
    /// [env: WEATHER_DETACH_CURRENT_AFTER, ignored if not a number]
    #[arg(long)]
    detach_current_after: Option<usize>,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn run(config: &Config) -> Result<()> {
    let readings = match &config.readings_path {
        Some(path) => load_readings(path)?,
        None => scripted_readings(),
    };

    let station = WeatherStation::new();
    let displays = StandardDisplays::attach(&station, Arc::new(StdoutSink));

    let mut driver = Driver::new(&station);
    if let Some(after) = config.detach_current_after {
        driver = driver.detach_after(after, displays.current.clone());
    }
    let delivered = driver.run(readings)?;
    info!("Delivered {} reading(s)", delivered);
    Ok(())
}

fn main() -> ExitCode {
    init_logger();
    let cli = Cli::parse();

    let config = Config::from_env().with_overrides(cli.readings, cli.detach_current_after);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
