use std::f64::consts::{PI, TAU};

pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Reduces an angle in radians to `[0, 2π)`.
///
/// Negative inputs are reflected as `2π - (|x| mod 2π)`, so an exact
/// multiple of `-2π` lands on `0` rather than `2π`. Inputs of `2π` or more
/// are reduced with a plain remainder; anything already in range is
/// returned as is.
pub fn normalize_angle(radians: f64) -> f64 {
    if radians < 0.0 {
        let reduced = radians.abs() % TAU;
        if reduced == 0.0 {
            return 0.0;
        }
        let wrapped = TAU - reduced;
        // tiny negatives round up to exactly 2π
        if wrapped >= TAU {
            0.0
        } else {
            wrapped
        }
    } else if radians >= TAU {
        radians % TAU
    } else {
        radians
    }
}

/// Reduces an angle in degrees to `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Maps an angle in `[0, 2π)` onto `(-π, π]`.
pub fn wrap_pi(radians: f64) -> f64 {
    if radians > PI {
        radians - TAU
    } else {
        radians
    }
}

pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/// `asin` with its argument clamped to `[-1, 1]` so rounding drift never yields NaN.
pub fn safe_asin(x: f64) -> f64 {
    clamp_unit(x).asin()
}

/// `acos` with its argument clamped to `[-1, 1]`.
pub fn safe_acos(x: f64) -> f64 {
    clamp_unit(x).acos()
}

/// Interpolates between two bearings in degrees along the shorter arc.
pub fn interpolate_angle(a1: f64, a2: f64, fraction: f64) -> f64 {
    let diff = a2 - a1;
    let adjusted_diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    normalize_degrees(a1 + adjusted_diff * fraction)
}
