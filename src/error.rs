//! Error types for the sun position engine.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid coordinate (longitude {longitude}°, latitude {latitude}°): longitude must be within ±180° and latitude within ±90°")]
    InvalidCoordinate { longitude: f64, latitude: f64 },

    #[error("invalid date/time: {0}")]
    InvalidDateTime(String),

    #[error("time fraction {0} outside [0, 1)")]
    InvalidTimeFraction(f64),

    #[error("computation error: {0}")]
    Computation(&'static str),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub const fn invalid_coordinate(longitude: f64, latitude: f64) -> Self {
        Self::InvalidCoordinate {
            longitude,
            latitude,
        }
    }
}

pub fn check_latitude(latitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude)
}

pub fn check_longitude(longitude: f64) -> bool {
    (-180.0..=180.0).contains(&longitude)
}

/// Validates both fields, reporting the pair on failure.
///
/// NaN and infinities fail the range checks.
pub fn check_coordinates(longitude: f64, latitude: f64) -> Result<()> {
    if check_longitude(longitude) && check_latitude(latitude) {
        Ok(())
    } else {
        Err(Error::invalid_coordinate(longitude, latitude))
    }
}
