//! Client runtime configuration loaded from the process environment.

use std::env;
use std::str::FromStr;

/// Configuration for a demo client run.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub force_refresh: bool,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `POGO_LAT` / `POGO_LON` / `POGO_ALT` - Ambient position (default: 0)
    /// - `POGO_FORCE_REFRESH` - Bypass the profile cache (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(latitude) = read_env::<f64>("POGO_LAT") {
            config.latitude = latitude;
        }
        if let Some(longitude) = read_env::<f64>("POGO_LON") {
            config.longitude = longitude;
        }
        if let Some(altitude) = read_env::<f64>("POGO_ALT") {
            config.altitude = altitude;
        }

        if let Some(force) = read_env::<bool>("POGO_FORCE_REFRESH") {
            config.force_refresh = force;
        } else if env::var("POGO_FORCE_REFRESH").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.force_refresh = true;
        }

        config
    }
}

fn read_env<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|value| value.parse().ok())
}
