use std::fmt;

use serde::{Deserialize, Serialize};

use crate::angles::{deg_to_rad, normalize_degrees};
use crate::ephemeris::ephemeris_position;
use crate::equation_of_time::equation_of_time_position;
use crate::error::{check_coordinates, Error, Result};
use crate::time::Instant;
use crate::time_fraction::time_fraction_position;

/// A point on the globe in decimal degrees.
///
/// Fields are private so every value in circulation has passed range
/// validation. Equality is structural on both fields.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoCoordinate {
    longitude: f64,
    latitude: f64,
}

impl GeoCoordinate {
    pub const ORIGIN: Self = Self {
        longitude: 0.0,
        latitude: 0.0,
    };

    /// Rejects longitude outside `[-180, 180]`, latitude outside `[-90, 90]`
    /// and non-finite values with [`Error::InvalidCoordinate`].
    pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
        check_coordinates(longitude, latitude)?;
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Clamps finite inputs into range instead of rejecting them. Intended
    /// for location providers whose readings may overshoot slightly.
    pub fn clamped(longitude: f64, latitude: f64) -> Result<Self> {
        if !longitude.is_finite() || !latitude.is_finite() {
            return Err(Error::invalid_coordinate(longitude, latitude));
        }
        Ok(Self {
            longitude: longitude.clamp(-180.0, 180.0),
            latitude: latitude.clamp(-90.0, 90.0),
        })
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn latitude_rad(&self) -> f64 {
        deg_to_rad(self.latitude)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.4}°{}, {:.4}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}

/// Apparent sun position in degrees.
///
/// `elevation` is signed, negative below the horizon. `azimuth` is a
/// bearing clockwise from north in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolarAngles {
    pub elevation: f64,
    pub azimuth: f64,
}

impl SolarAngles {
    /// Normalizes the azimuth and rejects non-finite components.
    pub fn checked(elevation: f64, azimuth: f64) -> Result<Self> {
        if !elevation.is_finite() {
            return Err(Error::Computation("elevation is not finite"));
        }
        if !azimuth.is_finite() {
            return Err(Error::Computation("azimuth is not finite"));
        }
        Ok(Self {
            elevation,
            azimuth: normalize_degrees(azimuth),
        })
    }

    pub fn zenith(&self) -> f64 {
        90.0 - self.elevation
    }

    pub fn is_above_horizon(&self) -> bool {
        self.elevation > 0.0
    }

    /// Unit vector pointing at the sun in an east-north-up frame.
    pub fn direction(&self) -> [f64; 3] {
        let (sin_el, cos_el) = deg_to_rad(self.elevation).sin_cos();
        let (sin_az, cos_az) = deg_to_rad(self.azimuth).sin_cos();
        [cos_el * sin_az, cos_el * cos_az, sin_el]
    }

    /// `[pitch, yaw, roll]` in degrees for orienting a directional light.
    pub fn light_euler(&self) -> [f64; 3] {
        [self.elevation, self.azimuth, 0.0]
    }
}

/// The interchangeable sun position algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Uniform sweep over the local day, no astronomy.
    TimeFraction,
    /// Fourier-series declination and equation of time on wall-clock fields.
    EquationOfTime,
    /// Julian-date mean-sun ephemeris.
    #[default]
    Ephemeris,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::TimeFraction,
        Strategy::EquationOfTime,
        Strategy::Ephemeris,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::TimeFraction => "time_fraction",
            Strategy::EquationOfTime => "equation_of_time",
            Strategy::Ephemeris => "ephemeris",
        }
    }

    pub fn uses_location(&self) -> bool {
        !matches!(self, Strategy::TimeFraction)
    }

    pub fn compute(&self, instant: &Instant, location: &GeoCoordinate) -> Result<SolarAngles> {
        let angles = match self {
            Strategy::TimeFraction => time_fraction_position(instant).angles(),
            Strategy::EquationOfTime => equation_of_time_position(instant, location).angles(),
            Strategy::Ephemeris => ephemeris_position(instant, location).angles(),
        };
        SolarAngles::checked(angles.elevation, angles.azimuth)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
