//! Strategy selection plus the shared location cache.
//!
//! A location provider publishes coordinates into a [`LocationSlot`] at its
//! own cadence; the per-tick path calls [`SolarPositionEngine::compute`],
//! which snapshots the slot once at entry.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::time::Instant;
use crate::types::{GeoCoordinate, SolarAngles, Strategy};

/// Single-slot cache for the most recently reported coordinate.
///
/// Clones share the same slot, so a provider task can hold one while the
/// engine keeps another. Writes replace the whole value.
#[derive(Debug, Clone, Default)]
pub struct LocationSlot {
    inner: Arc<RwLock<Option<GeoCoordinate>>>,
}

impl LocationSlot {
    pub fn new(initial: Option<GeoCoordinate>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Stores `location` if it differs by value from the cached one.
    /// Returns whether the slot changed.
    pub fn publish(&self, location: GeoCoordinate) -> bool {
        let mut slot = self.inner.write();
        if *slot == Some(location) {
            log::trace!("location {location} unchanged");
            return false;
        }
        log::debug!("adopting location {location}");
        *slot = Some(location);
        true
    }

    pub fn current(&self) -> Option<GeoCoordinate> {
        *self.inner.read()
    }

    pub fn clear(&self) {
        *self.inner.write() = None;
    }
}

#[derive(Debug, Clone)]
pub struct SolarPositionEngine {
    strategy: Strategy,
    location: LocationSlot,
}

impl SolarPositionEngine {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            location: LocationSlot::default(),
        }
    }

    pub fn with_location(strategy: Strategy, location: GeoCoordinate) -> Self {
        Self {
            strategy,
            location: LocationSlot::new(Some(location)),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let location = config.location()?;
        log::debug!(
            "engine configured with strategy {} and location {:?}",
            config.strategy,
            location
        );
        Ok(Self {
            strategy: config.strategy,
            location: LocationSlot::new(location),
        })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn location(&self) -> Option<GeoCoordinate> {
        self.location.current()
    }

    /// Handle for the location provider's publishing path.
    pub fn location_slot(&self) -> LocationSlot {
        self.location.clone()
    }

    pub fn update_location(&self, location: GeoCoordinate) -> bool {
        self.location.publish(location)
    }

    /// The strategy that will run given the current slot contents: the
    /// configured one, or the time-of-day sweep while no location is known.
    pub fn effective_strategy(&self, location: Option<GeoCoordinate>) -> Strategy {
        match location {
            None if self.strategy.uses_location() => Strategy::TimeFraction,
            _ => self.strategy,
        }
    }

    pub fn compute(&self, instant: &Instant) -> Result<SolarAngles> {
        let location = self.location.current();
        let strategy = self.effective_strategy(location);
        if strategy != self.strategy {
            log::debug!("no location yet, falling back to {strategy}");
        }
        let angles = strategy.compute(instant, &location.unwrap_or_default())?;
        log::trace!(
            "{strategy} at {}: elevation {:.3}°, azimuth {:.3}°",
            instant.local(),
            angles.elevation,
            angles.azimuth
        );
        Ok(angles)
    }

    /// Computes for the local system clock.
    pub fn compute_now(&self) -> Result<SolarAngles> {
        self.compute(&Instant::now())
    }
}
