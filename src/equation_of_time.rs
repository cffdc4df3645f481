//! NOAA general solar position approximation.
//!
//! Declination and the equation of time come from Fourier series in the
//! fractional year; the hour angle is derived from the local wall clock,
//! the UTC offset and the longitude. Latitude always enters trig in radians.

use std::f64::consts::TAU;

use crate::angles::{deg_to_rad, normalize_angle, rad_to_deg, safe_acos, wrap_pi};
use crate::time::Instant;
use crate::types::{GeoCoordinate, SolarAngles};

/// Below this, `cos(lat)·sin(zenith)` is treated as zero and the azimuth
/// is reported as 0.
pub const AZIMUTH_SINGULARITY_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquationOfTimePosition {
    pub day_of_year: u32,
    /// Radians.
    pub fractional_year: f64,
    /// Minutes.
    pub equation_of_time: f64,
    /// Radians.
    pub declination: f64,
    /// Minutes.
    pub true_solar_time: f64,
    /// Degrees.
    pub hour_angle: f64,
    /// Degrees.
    pub zenith: f64,
    pub elevation: f64,
    pub azimuth: f64,
}

impl EquationOfTimePosition {
    pub fn angles(&self) -> SolarAngles {
        SolarAngles {
            elevation: self.elevation,
            azimuth: self.azimuth,
        }
    }
}

pub fn fractional_year(day_of_year: u32, hour: u32, days_in_year: u32) -> f64 {
    (TAU / days_in_year as f64) * (day_of_year as f64 - 1.0 + (hour as f64 - 12.0) / 24.0)
}

/// Equation of time in minutes.
pub fn equation_of_time(fy: f64) -> f64 {
    229.18
        * (0.000075
            + 0.001868 * fy.cos()
            - 0.032077 * fy.sin()
            - 0.014615 * (2.0 * fy).cos()
            - 0.040849 * (2.0 * fy).sin())
}

/// Solar declination in radians.
pub fn solar_declination(fy: f64) -> f64 {
    0.006918 - 0.399912 * fy.cos() + 0.070257 * fy.sin() - 0.006758 * (2.0 * fy).cos()
        + 0.000907 * (2.0 * fy).sin()
        - 0.002697 * (3.0 * fy).cos()
        + 0.00148 * (3.0 * fy).sin()
}

/// Minutes to add to the wall clock to reach true solar time.
pub fn time_offset(eot: f64, longitude: f64, utc_offset_hours: f64) -> f64 {
    eot + 4.0 * longitude - 60.0 * utc_offset_hours
}

pub fn true_solar_time(hour: u32, minute: u32, second: f64, offset_minutes: f64) -> f64 {
    hour as f64 * 60.0 + minute as f64 + second / 60.0 + offset_minutes
}

/// Hour angle in degrees, negative before solar noon.
pub fn hour_angle(true_solar_time: f64) -> f64 {
    true_solar_time / 4.0 - 180.0
}

/// Zenith angle in radians. All inputs in radians.
pub fn solar_zenith_angle(lat_rad: f64, declination: f64, hour_angle_rad: f64) -> f64 {
    safe_acos(
        lat_rad.sin() * declination.sin()
            + lat_rad.cos() * declination.cos() * hour_angle_rad.cos(),
    )
}

/// Azimuth in degrees clockwise from north. All inputs in radians.
///
/// The inverse cosine yields the bearing's distance from north in
/// `[0°, 180°]`; afternoon positions (positive hour angle) are mirrored
/// into the western half. Returns 0 when the denominator vanishes (sun at
/// zenith or nadir, or observer at a pole).
pub fn solar_azimuth(lat_rad: f64, declination: f64, zenith: f64, hour_angle_rad: f64) -> f64 {
    let denominator = lat_rad.cos() * zenith.sin();
    if denominator.abs() < AZIMUTH_SINGULARITY_EPSILON {
        return 0.0;
    }
    let from_north =
        rad_to_deg(safe_acos(-(lat_rad.sin() * zenith.cos() - declination.sin()) / denominator));
    if wrap_pi(normalize_angle(hour_angle_rad)) > 0.0 {
        360.0 - from_north
    } else {
        from_north
    }
}

pub fn equation_of_time_position(
    instant: &Instant,
    location: &GeoCoordinate,
) -> EquationOfTimePosition {
    let day_of_year = instant.day_of_year();
    let fy = fractional_year(day_of_year, instant.hour(), instant.days_in_year());
    let eot = equation_of_time(fy);
    let decl = solar_declination(fy);

    let offset = time_offset(eot, location.longitude(), instant.utc_offset_hours());
    let tst = true_solar_time(
        instant.hour(),
        instant.minute(),
        instant.second() as f64,
        offset,
    );
    let ha = hour_angle(tst);
    let ha_rad = deg_to_rad(ha);

    let lat_rad = location.latitude_rad();
    let zenith = solar_zenith_angle(lat_rad, decl, ha_rad);
    let azimuth = solar_azimuth(lat_rad, decl, zenith, ha_rad);
    let zenith_deg = rad_to_deg(zenith);

    EquationOfTimePosition {
        day_of_year,
        fractional_year: fy,
        equation_of_time: eot,
        declination: decl,
        true_solar_time: tst,
        hour_angle: ha,
        zenith: zenith_deg,
        elevation: 90.0 - zenith_deg,
        azimuth,
    }
}
