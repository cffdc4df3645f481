use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{GeoCoordinate, Strategy};

pub const DEFAULT_LOCATION_REFRESH_SECS: u64 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

/// Engine settings, usually read from a TOML table such as
///
/// ```toml
/// strategy = "equation_of_time"
/// location_refresh_secs = 300
///
/// [location]
/// latitude = 57.7
/// longitude = 11.9
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub strategy: Strategy,
    pub location: Option<LocationConfig>,
    /// How often a location provider should poll, in seconds.
    pub location_refresh_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            location: None,
            location_refresh_secs: DEFAULT_LOCATION_REFRESH_SECS,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: EngineConfig =
            toml::from_str(raw).map_err(|e| Error::Config(e.to_string()))?;
        log::debug!("loaded engine config: {config:?}");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// The configured starting location, validated.
    pub fn location(&self) -> Result<Option<GeoCoordinate>> {
        self.location
            .map(|loc| GeoCoordinate::new(loc.longitude, loc.latitude))
            .transpose()
    }
}
