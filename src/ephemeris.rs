//! Low-precision solar ephemeris driven by the Julian date.
//!
//! Mean longitude and mean anomaly of the sun are advanced from J2000.0,
//! corrected by the equation of center, and rotated from ecliptic to
//! equatorial coordinates. Local sidereal time then gives the hour angle.

use std::f64::consts::{PI, TAU};

use chrono::Datelike;

use crate::angles::{
    deg_to_rad, normalize_angle, rad_to_deg, safe_asin, wrap_pi, DEGREES_PER_HOUR,
};
use crate::time::Instant;
use crate::types::{GeoCoordinate, SolarAngles};

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;
pub const SIDEREAL_DRIFT: f64 = 366.2422 / 365.2422;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisPosition {
    /// Days since J2000.0, including the fraction of the UTC day.
    pub julian_day: f64,
    pub julian_centuries: f64,
    /// Radians, `[0, 2π)`.
    pub local_sidereal_angle: f64,
    /// Radians, `[0, 2π)`.
    pub ecliptic_longitude: f64,
    /// Radians.
    pub right_ascension: f64,
    /// Radians.
    pub declination: f64,
    /// Radians, `(-π, π]`.
    pub hour_angle: f64,
    pub elevation: f64,
    pub azimuth: f64,
}

impl EphemerisPosition {
    pub fn angles(&self) -> SolarAngles {
        SolarAngles {
            elevation: self.elevation,
            azimuth: self.azimuth,
        }
    }
}

/// Days from J2000.0 to 0h UTC of the given civil date.
pub fn julian_day_j2000(year: i32, month: u32, day: u32) -> f64 {
    let y = year as f64;
    let m = month as f64;
    367.0 * y - (7.0 / 4.0 * (y + ((m + 9.0) / 12.0).floor())).floor()
        + (275.0 * m / 9.0).floor()
        + day as f64
        - 730531.5
}

/// Local sidereal angle in degrees (not yet normalized).
pub fn local_sidereal_degrees(julian_centuries: f64, utc_hours: f64, longitude: f64) -> f64 {
    let sidereal_hours = 6.6974 + 2400.0513 * julian_centuries + SIDEREAL_DRIFT * utc_hours;
    sidereal_hours * DEGREES_PER_HOUR + longitude
}

/// Equation of center in radians.
pub fn equation_of_center(julian_centuries: f64, mean_anomaly: f64) -> f64 {
    deg_to_rad(
        (1.195 - 0.005 * julian_centuries) * mean_anomaly.sin()
            + 0.02 * (2.0 * mean_anomaly).sin(),
    )
}

pub fn obliquity(julian_centuries: f64) -> f64 {
    deg_to_rad(23.439 - 0.013 * julian_centuries)
}

/// Azimuth in radians clockwise from north, from the tangent form with
/// quadrant correction.
pub fn azimuth_from_hour_angle(hour_angle: f64, declination: f64, lat_rad: f64) -> f64 {
    let numerator = -hour_angle.sin();
    let denominator = declination.tan() * lat_rad.cos() - lat_rad.sin() * hour_angle.cos();
    if numerator == 0.0 && denominator == 0.0 {
        return 0.0;
    }
    let mut azimuth = (numerator / denominator).atan();
    if denominator < 0.0 {
        azimuth += PI;
    } else if numerator < 0.0 {
        azimuth += TAU;
    }
    azimuth
}

pub fn ephemeris_position(instant: &Instant, location: &GeoCoordinate) -> EphemerisPosition {
    let utc = instant.utc();
    let utc_hours = instant.utc_hours_of_day();

    // Sidereal time is taken from the 0h date before refining to the time of day.
    let date_day = julian_day_j2000(utc.year(), utc.month(), utc.day());
    let date_centuries = date_day / DAYS_PER_JULIAN_CENTURY;
    let sidereal = normalize_angle(deg_to_rad(local_sidereal_degrees(
        date_centuries,
        utc_hours,
        location.longitude(),
    )));

    let julian_day = date_day + utc_hours / 24.0;
    let t = julian_day / DAYS_PER_JULIAN_CENTURY;

    let mean_longitude = normalize_angle(deg_to_rad(280.466 + 36000.77 * t));
    let mean_anomaly = normalize_angle(deg_to_rad(357.529 + 35999.05 * t));
    let ecliptic_longitude =
        normalize_angle(mean_longitude + equation_of_center(t, mean_anomaly));
    let epsilon = obliquity(t);

    let right_ascension = (epsilon.cos() * ecliptic_longitude.sin()).atan2(ecliptic_longitude.cos());
    let declination = safe_asin(ecliptic_longitude.sin() * epsilon.sin());

    let hour_angle = wrap_pi(sidereal - right_ascension);

    let lat_rad = location.latitude_rad();
    let altitude = safe_asin(
        lat_rad.sin() * declination.sin() + lat_rad.cos() * declination.cos() * hour_angle.cos(),
    );
    let azimuth = azimuth_from_hour_angle(hour_angle, declination, lat_rad);

    EphemerisPosition {
        julian_day,
        julian_centuries: t,
        local_sidereal_angle: sidereal,
        ecliptic_longitude,
        right_ascension,
        declination,
        hour_angle,
        elevation: rad_to_deg(altitude),
        azimuth: rad_to_deg(azimuth),
    }
}
