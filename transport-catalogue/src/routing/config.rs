//! Routing configuration.

use serde::Deserialize;

use super::RoutingError;

const METERS_PER_KM: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Parameters that turn road distance into travel time.
///
/// Read once when the graph is built and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RoutingSettings {
    /// Time spent waiting at a stop before every ride (minutes).
    pub bus_wait_time: u32,

    /// Bus cruising speed (km/h).
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create settings from a wait time in minutes and a speed in km/h.
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Check that travel times derived from these settings are finite.
    pub fn validate(&self) -> Result<(), RoutingError> {
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(RoutingError::InvalidSettings(
                "bus velocity must be a positive finite number",
            ));
        }
        Ok(())
    }

    /// Returns the wait time in minutes as a float.
    pub fn wait_minutes(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Returns the bus speed in meters per minute.
    pub fn meters_per_minute(&self) -> f64 {
        self.bus_velocity * METERS_PER_KM / MINUTES_PER_HOUR
    }

    /// Minutes needed to ride `meters` at cruising speed.
    pub fn ride_minutes(&self, meters: f64) -> f64 {
        meters / self.meters_per_minute()
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6,
            bus_velocity: 40.0,
        }
    }
}
