use std::path::PathBuf;

/// Driver settings. The station and displays never read these.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// JSON file holding the reading sequence. `None` uses the built-in script.
    pub readings_path: Option<PathBuf>,
    /// Detach the current conditions display after this many readings.
    pub detach_current_after: Option<usize>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Unparsable numbers are ignored and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("WEATHER_READINGS") {
            config.readings_path = Some(PathBuf::from(path));
        }
        if let Some(after) = lookup("WEATHER_DETACH_CURRENT_AFTER")
            && let Ok(n) = after.parse()
        {
            config.detach_current_after = Some(n);
        }

        config
    }

    /// Apply command line values on top of this config. `None` keeps the
    /// current setting.
    pub fn with_overrides(
        mut self,
        readings_path: Option<PathBuf>,
        detach_current_after: Option<usize>,
    ) -> Self {
        if readings_path.is_some() {
            self.readings_path = readings_path;
        }
        if detach_current_after.is_some() {
            self.detach_current_after = detach_current_after;
        }
        self
    }
}
