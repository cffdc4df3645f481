//! Sun position engine for real-time scene lighting.
//!
//! Given a local date-time and a coordinate, computes the sun's elevation
//! and azimuth with one of three interchangeable strategies. Azimuth is
//! measured clockwise from north; the consumer decides how that maps onto
//! its renderer's axes.

pub mod angles;
pub mod config;
pub mod engine;
pub mod ephemeris;
pub mod equation_of_time;
pub mod error;
pub mod time;
pub mod time_fraction;
pub mod track;
pub mod types;

pub use angles::{
    deg_to_rad, interpolate_angle, normalize_angle, normalize_degrees, rad_to_deg, safe_acos,
    safe_asin, wrap_pi, DEGREES_PER_HOUR,
};

pub use config::{EngineConfig, LocationConfig, DEFAULT_LOCATION_REFRESH_SECS};

pub use engine::{LocationSlot, SolarPositionEngine};

pub use ephemeris::{ephemeris_position, julian_day_j2000, EphemerisPosition};

pub use equation_of_time::{equation_of_time_position, EquationOfTimePosition};

pub use error::{Error, Result};

pub use time::Instant;

pub use time_fraction::{day_fraction, time_fraction_angles, time_fraction_position};

pub use track::{generate_daily_track, DailyTrack, SunriseSunset, TrackSample};

pub use types::{GeoCoordinate, SolarAngles, Strategy};
