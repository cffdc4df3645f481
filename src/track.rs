//! Sampled sun path over one local day.
//!
//! A [`DailyTrack`] holds a strategy's output at a fixed minute interval
//! from local midnight. Lookups between samples interpolate, which lets a
//! presentation layer evaluate any time of day without recomputing the
//! ephemeris every frame.

use chrono::{Datelike, NaiveDate};

use crate::angles::interpolate_angle;
use crate::error::{Error, Result};
use crate::time::Instant;
use crate::types::{GeoCoordinate, SolarAngles, Strategy};

pub const MINUTES_PER_DAY: i32 = 1440;

pub fn minutes_to_time(total_minutes: i32) -> (i32, i32) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn time_to_minutes(time: (i32, i32)) -> i32 {
    time.0 * 60 + time.1
}

pub fn intervals_per_day(interval_minutes: i32) -> i32 {
    MINUTES_PER_DAY / interval_minutes
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSample {
    pub minutes: i32,
    pub angles: SolarAngles,
}

/// Horizon crossings in minutes after local midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunriseSunset {
    RegularDay { sunrise: f64, sunset: f64 },
    AllDay,
    AllNight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyTrack {
    pub date: NaiveDate,
    pub utc_offset_hours: f64,
    pub location: GeoCoordinate,
    pub strategy: Strategy,
    pub interval_minutes: i32,
    pub samples: Vec<TrackSample>,
}

/// Samples `strategy` every `interval_minutes` across the local day.
///
/// `interval_minutes` must divide the day evenly.
pub fn generate_daily_track(
    strategy: Strategy,
    date: NaiveDate,
    utc_offset_hours: f64,
    location: &GeoCoordinate,
    interval_minutes: i32,
) -> Result<DailyTrack> {
    if interval_minutes <= 0 || MINUTES_PER_DAY % interval_minutes != 0 {
        return Err(Error::InvalidDateTime(format!(
            "interval of {interval_minutes} min does not divide the day"
        )));
    }
    let n_intervals = intervals_per_day(interval_minutes);
    let mut samples = Vec::with_capacity(n_intervals as usize);
    for interval in 0..n_intervals {
        let minutes = interval * interval_minutes;
        let (hour, minute) = minutes_to_time(minutes);
        let instant = Instant::from_local(
            date.year(),
            date.month(),
            date.day(),
            hour as u32,
            minute as u32,
            0,
            utc_offset_hours,
        )?;
        let angles = strategy.compute(&instant, location)?;
        samples.push(TrackSample { minutes, angles });
    }
    log::debug!(
        "sampled {} points for {date} at {location} with {strategy}",
        samples.len()
    );
    Ok(DailyTrack {
        date,
        utc_offset_hours,
        location: *location,
        strategy,
        interval_minutes,
        samples,
    })
}

impl DailyTrack {
    /// Interpolated angles at `minutes` after local midnight.
    ///
    /// Elevation is linear between samples and azimuth follows the shorter
    /// arc. Past the last sample the track holds the final value. Returns
    /// `None` outside `[0, 1440)` or for an empty track.
    pub fn lookup(&self, minutes: f64) -> Option<SolarAngles> {
        if !(0.0..MINUTES_PER_DAY as f64).contains(&minutes) {
            return None;
        }
        let last = self.samples.len().checked_sub(1)?;
        let idx_before = ((minutes / self.interval_minutes as f64) as usize).min(last);
        let before = &self.samples[idx_before];
        let Some(after) = self.samples.get(idx_before + 1) else {
            return Some(before.angles);
        };
        let fraction =
            (minutes - before.minutes as f64) / (after.minutes - before.minutes) as f64;
        Some(SolarAngles {
            elevation: before.angles.elevation
                + fraction * (after.angles.elevation - before.angles.elevation),
            azimuth: interpolate_angle(before.angles.azimuth, after.angles.azimuth, fraction),
        })
    }

    pub fn max_elevation(&self) -> Option<TrackSample> {
        self.samples
            .iter()
            .copied()
            .max_by(|a, b| a.angles.elevation.total_cmp(&b.angles.elevation))
    }

    /// First upward and last downward horizon crossing, located by linear
    /// interpolation between samples.
    pub fn sunrise_sunset(&self) -> SunriseSunset {
        let mut sunrise = None;
        let mut sunset = None;
        for pair in self.samples.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (ea, eb) = (a.angles.elevation, b.angles.elevation);
            if (ea <= 0.0) == (eb <= 0.0) {
                continue;
            }
            let crossing = a.minutes as f64 + (b.minutes - a.minutes) as f64 * (ea / (ea - eb));
            if eb > ea {
                if sunrise.is_none() {
                    sunrise = Some(crossing);
                }
            } else {
                sunset = Some(crossing);
            }
        }
        match (sunrise, sunset) {
            (Some(sunrise), Some(sunset)) => SunriseSunset::RegularDay { sunrise, sunset },
            (Some(sunrise), None) => SunriseSunset::RegularDay {
                sunrise,
                sunset: MINUTES_PER_DAY as f64,
            },
            (None, Some(sunset)) => SunriseSunset::RegularDay {
                sunrise: 0.0,
                sunset,
            },
            (None, None) => {
                if self.samples.iter().all(|s| s.angles.is_above_horizon()) {
                    SunriseSunset::AllDay
                } else {
                    SunriseSunset::AllNight
                }
            }
        }
    }
}
