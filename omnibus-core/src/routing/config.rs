//! Routing parameters shared by every query of a router.

use serde::Deserialize;

use crate::{Error, Minutes};

const METERS_PER_KILOMETER: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Wait time at each boarding and bus speed.
///
/// Speed is stored in meters per minute so that road distances divide into
/// minutes directly. Deserializes from the input shape
/// `{"bus_wait_time": <minutes>, "bus_velocity": <km/h>}`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawRoutingSettings")]
pub struct RoutingSettings {
    bus_wait_time: u32,
    bus_velocity: f64,
}

#[derive(Debug, Deserialize)]
struct RawRoutingSettings {
    bus_wait_time: u32,
    bus_velocity: f64,
}

impl TryFrom<RawRoutingSettings> for RoutingSettings {
    type Error = Error;

    fn try_from(raw: RawRoutingSettings) -> Result<Self, Self::Error> {
        Self::from_kmh(raw.bus_wait_time, raw.bus_velocity)
    }
}

impl RoutingSettings {
    /// Create settings with the speed already expressed in meters per minute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSettings`] if the speed is not a positive
    /// finite number.
    pub fn new(bus_wait_time: u32, meters_per_minute: f64) -> Result<Self, Error> {
        if !meters_per_minute.is_finite() || meters_per_minute <= 0.0 {
            return Err(Error::InvalidSettings(format!(
                "bus velocity must be positive, got {meters_per_minute}"
            )));
        }
        Ok(Self {
            bus_wait_time,
            bus_velocity: meters_per_minute,
        })
    }

    /// Create settings from a speed in kilometers per hour.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSettings`] if the speed is not a positive
    /// finite number.
    pub fn from_kmh(bus_wait_time: u32, kmh: f64) -> Result<Self, Error> {
        Self::new(bus_wait_time, kmh * METERS_PER_KILOMETER / MINUTES_PER_HOUR)
    }

    /// Wait time at each boarding in whole minutes
    pub fn bus_wait_time(&self) -> u32 {
        self.bus_wait_time
    }

    pub fn wait_time(&self) -> Minutes {
        f64::from(self.bus_wait_time)
    }

    /// Speed in meters per minute
    pub fn bus_velocity(&self) -> f64 {
        self.bus_velocity
    }

    /// Minutes needed to ride `meters`
    pub fn travel_time(&self, meters: f64) -> Minutes {
        meters / self.bus_velocity
    }
}
