//! Weather station library.
//!
//! A single [`WeatherStation`](station::WeatherStation) collects readings and
//! fans each one out to independently maintained display observers.

pub mod config;
pub mod displays;
pub mod driver;
pub mod error;
pub mod reading;
pub mod station;
pub mod subject;

pub use displays::WeatherDisplay;
pub use error::{Result, StationError};
pub use reading::Reading;
pub use station::WeatherStation;
pub use subject::{Observer, ObserverRegistry, Subject};
