use std::f64::consts::{FRAC_PI_2, PI, TAU};

use solar_lighting::angles::*;
use solar_lighting::time::{day_of_year, days_in_year, leap_year, Instant};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── NormalizeAngle (radians) ──

#[test]
fn test_normalize_angle_in_range_unchanged() {
    for &x in &[0.0, 0.5, PI, TAU - 1e-9] {
        assert_eq!(normalize_angle(x), x);
    }
}

#[test]
fn test_normalize_angle_positive_overflow() {
    assert_eq!(normalize_angle(TAU), 0.0);
    assert_approx!(normalize_angle(TAU + 1.0), 1.0, 1e-12);
    assert_approx!(normalize_angle(5.0 * PI), PI, 1e-12);
}

#[test]
fn test_normalize_angle_negative_branch() {
    assert_approx!(normalize_angle(-FRAC_PI_2), 1.5 * PI, 1e-12);
    assert_approx!(normalize_angle(-PI), PI, 1e-12);
    assert_approx!(normalize_angle(-TAU - 1.0), TAU - 1.0, 1e-12);
}

#[test]
fn test_normalize_angle_negative_full_turns_map_to_zero() {
    assert_eq!(normalize_angle(-TAU), 0.0);
    assert_eq!(normalize_angle(-2.0 * TAU), 0.0);
}

#[test]
fn test_normalize_angle_tiny_negative_stays_below_tau() {
    let n = normalize_angle(-1e-18);
    assert!((0.0..TAU).contains(&n), "n={}", n);
}

#[test]
fn test_normalize_angle_idempotent_and_bounded() {
    let mut x = -50.0;
    while x < 50.0 {
        let once = normalize_angle(x);
        assert!((0.0..TAU).contains(&once), "x={} once={}", x, once);
        assert_eq!(normalize_angle(once), once, "x={}", x);
        x += 0.37;
    }
    for &x in &[-1e6, 1e6, -123.456, 987.654, -1e-300, 1e-300] {
        let once = normalize_angle(x);
        assert!((0.0..TAU).contains(&once), "x={} once={}", x, once);
        assert_eq!(normalize_angle(once), once);
    }
}

// ── NormalizeDegrees ──

#[test]
fn test_normalize_degrees_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (45.0, 45.0),
        (360.0, 0.0),
        (361.0, 1.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (405.0, 45.0),
        (-180.0, 180.0),
        (-720.0, 0.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_degrees(input), expected, 1e-9);
    }
}

#[test]
fn test_normalize_degrees_never_returns_360() {
    let n = normalize_degrees(-1e-15);
    assert!((0.0..360.0).contains(&n), "n={}", n);
}

// ── WrapPi ──

#[test]
fn test_wrap_pi() {
    assert_eq!(wrap_pi(0.0), 0.0);
    assert_eq!(wrap_pi(PI), PI);
    assert_approx!(wrap_pi(1.5 * PI), -FRAC_PI_2, 1e-12);
    assert_approx!(wrap_pi(TAU - 0.1), -0.1, 1e-12);
}

// ── Clamped inverse trig ──

#[test]
fn test_safe_inverse_trig_clamps_drift() {
    assert_eq!(safe_asin(1.0 + 1e-12), FRAC_PI_2);
    assert_eq!(safe_asin(-1.0 - 1e-12), -FRAC_PI_2);
    assert_eq!(safe_acos(1.0 + 1e-12), 0.0);
    assert_eq!(safe_acos(-1.0 - 1e-12), PI);
    assert!(!safe_acos(1.0000001).is_nan());
}

// ── DegRad ──

#[test]
fn test_deg_rad_roundtrip() {
    for &deg in &[0.0, 45.0, 90.0, 180.0, 270.0, 360.0, -45.0, -180.0, 123.456] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-10);
    }
}

#[test]
fn test_known_conversions() {
    assert_approx!(deg_to_rad(180.0), PI, 1e-15);
    assert_approx!(deg_to_rad(90.0), FRAC_PI_2, 1e-15);
    assert_approx!(rad_to_deg(PI), 180.0, 1e-12);
}

// ── InterpolateAngle ──

#[test]
fn test_interpolate_angle_short_arc_across_north() {
    assert_approx!(interpolate_angle(350.0, 10.0, 0.5), 0.0, 1e-9);
    assert_approx!(interpolate_angle(10.0, 350.0, 0.25), 5.0, 1e-9);
    assert_approx!(interpolate_angle(90.0, 180.0, 0.5), 135.0, 1e-9);
}

// ── Calendar ──

#[test]
fn test_day_of_year_known_dates() {
    assert_eq!(day_of_year(2026, 1, 1), 1);
    assert_eq!(day_of_year(2026, 3, 21), 80);
    assert_eq!(day_of_year(2026, 12, 31), 365);
    assert_eq!(day_of_year(2024, 2, 29), 60);
    assert_eq!(day_of_year(2024, 12, 31), 366);
}

#[test]
fn test_leap_year_century_rules() {
    assert!(leap_year(2000));
    assert!(leap_year(2024));
    assert!(!leap_year(1900));
    assert!(!leap_year(2026));
    assert_eq!(days_in_year(2024), 366);
    assert_eq!(days_in_year(2100), 365);
}

// ── Instant ──

#[test]
fn test_instant_fields_and_offset() {
    let instant = Instant::from_local(2024, 6, 21, 12, 30, 15, 2.0).unwrap();
    assert_eq!(instant.day_of_year(), 173);
    assert!(instant.is_leap_year());
    assert_eq!(instant.days_in_year(), 366);
    assert_eq!(instant.utc_offset_hours(), 2.0);
    assert_eq!(instant.seconds_since_midnight(), 45015.0);
    assert_eq!(instant.millis_since_midnight(), 45_015_000);
    assert_approx!(instant.utc_hours_of_day(), 10.0 + 30.25 / 60.0, 1e-12);
}

#[test]
fn test_instant_utc_crosses_date_line() {
    let instant = Instant::from_local(2024, 1, 1, 1, 0, 0, 3.0).unwrap();
    let utc = instant.utc();
    assert_eq!(utc.to_rfc3339(), "2023-12-31T22:00:00+00:00");
    assert_eq!(instant.day_of_year(), 1);
}

#[test]
fn test_instant_fractional_offset() {
    let instant = Instant::from_local(2024, 3, 20, 12, 0, 0, 5.5).unwrap();
    assert_eq!(instant.utc_offset_hours(), 5.5);
    assert_approx!(instant.utc_hours_of_day(), 6.5, 1e-12);
}

#[test]
fn test_instant_rejects_bad_fields() {
    assert!(Instant::from_local(2026, 2, 29, 12, 0, 0, 0.0).is_err());
    assert!(Instant::from_local(2026, 13, 1, 12, 0, 0, 0.0).is_err());
    assert!(Instant::from_local(2026, 1, 1, 24, 0, 0, 0.0).is_err());
    assert!(Instant::from_local(2026, 1, 1, 12, 0, 0, 25.0).is_err());
    assert!(Instant::from_local(2026, 1, 1, 12, 0, 0, f64::NAN).is_err());
}

#[test]
fn test_instant_from_zoned_datetime() {
    use chrono::TimeZone;
    use chrono_tz::Europe::Stockholm;

    let summer = Instant::from_datetime(&Stockholm.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap());
    let winter = Instant::from_datetime(&Stockholm.with_ymd_and_hms(2024, 12, 21, 12, 0, 0).unwrap());
    assert_eq!(summer.utc_offset_hours(), 2.0);
    assert_eq!(winter.utc_offset_hours(), 1.0);
    assert_eq!(summer.hour(), 12);
}
