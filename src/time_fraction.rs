//! Degenerate baseline: the light sweeps uniformly through the local day.

use crate::error::{Error, Result};
use crate::time::{Instant, MILLIS_PER_DAY};
use crate::types::SolarAngles;

pub const FIXED_AZIMUTH: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeFractionPosition {
    /// Elapsed part of the local day, in `[0, 1)`.
    pub fraction: f64,
    pub elevation: f64,
    pub azimuth: f64,
}

impl TimeFractionPosition {
    pub fn angles(&self) -> SolarAngles {
        SolarAngles {
            elevation: self.elevation,
            azimuth: self.azimuth,
        }
    }
}

/// Fraction of the local day elapsed at `instant`. Never reaches 1.
pub fn day_fraction(instant: &Instant) -> f64 {
    instant.millis_since_midnight() as f64 / MILLIS_PER_DAY as f64
}

pub fn sweep_elevation(fraction: f64) -> f64 {
    fraction * 360.0 - 90.0
}

pub fn time_fraction_position(instant: &Instant) -> TimeFractionPosition {
    let fraction = day_fraction(instant);
    TimeFractionPosition {
        fraction,
        elevation: sweep_elevation(fraction),
        azimuth: FIXED_AZIMUTH,
    }
}

/// Sweep angles for a caller-supplied fraction, rejecting anything outside `[0, 1)`.
pub fn time_fraction_angles(fraction: f64) -> Result<SolarAngles> {
    if !(0.0..1.0).contains(&fraction) {
        return Err(Error::InvalidTimeFraction(fraction));
    }
    Ok(SolarAngles {
        elevation: sweep_elevation(fraction),
        azimuth: FIXED_AZIMUTH,
    })
}
