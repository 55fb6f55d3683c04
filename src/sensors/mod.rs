//! Sensor trait and the four mock sensors
//!
//! Each sensor produces a fresh [`SensorReading`] per call from an explicit
//! random source. Failures never escape a sensor: [`Sensor::read`] logs them
//! and returns the empty reading.
//!
//! ## Sensors
//!
//! 1. **Lane** - lane status, width and road condition (random)
//! 2. **Obstacle** - obstacle class (random), fixed distance and closing speed
//! 3. **TrafficSignal** - light state (random), fixed time-to-change and weather
//! 4. **TrafficCamera** - light color classified from an image file

pub mod lane;
pub mod obstacle;
pub mod traffic_signal;
pub mod camera;

pub use camera::TrafficCameraSensor;
pub use lane::LaneDetectionSensor;
pub use obstacle::ObstacleAvoidanceSensor;
pub use traffic_signal::TrafficSignalSensor;

use crate::config::SensorsConfig;
use crate::types::{SensorKind, SensorReading};
use rand::seq::SliceRandom;
use rand::RngCore;
use std::path::PathBuf;
use thiserror::Error;
use tracing::error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum SensorError {
    #[error("{0}")]
    InvalidData(String),

    #[error("Failed to load image {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

// ============================================================================
// Sensor Trait
// ============================================================================

/// A producer of fixed-shape readings for one simulated subsystem.
pub trait Sensor: Send + Sync {
    /// Sensor name for logs (e.g. "LaneDetectionSensor")
    fn name(&self) -> &str;

    fn kind(&self) -> SensorKind;

    /// Produce a reading or the reason none could be produced.
    fn try_read(&self, rng: &mut dyn RngCore) -> Result<SensorReading, SensorError>;

    /// Produce a reading, converting every failure into the empty reading.
    fn read(&self, rng: &mut dyn RngCore) -> SensorReading {
        match self.try_read(rng) {
            Ok(reading) if !reading.is_empty() => reading,
            Ok(_) => {
                error!(sensor = self.name(), "{} data is empty or invalid.", self.kind());
                SensorReading::empty()
            }
            Err(e) => {
                error!(sensor = self.name(), error = %e, "Error processing sensor data");
                SensorReading::empty()
            }
        }
    }
}

/// Create the default set of four sensors, in menu order.
pub fn default_sensors(cfg: &SensorsConfig) -> Vec<Box<dyn Sensor>> {
    vec![
        Box::new(LaneDetectionSensor::new(cfg.lane.clone())),
        Box::new(ObstacleAvoidanceSensor::new(cfg.obstacle.clone())),
        Box::new(TrafficSignalSensor::new(cfg.traffic.clone())),
        Box::new(TrafficCameraSensor::new(cfg.camera.clone())),
    ]
}

/// Uniform pick from a fixed choice list.
pub(crate) fn pick<T: Copy>(
    choices: &[T],
    rng: &mut dyn RngCore,
    what: &str,
) -> Result<T, SensorError> {
    choices
        .choose(rng)
        .copied()
        .ok_or_else(|| SensorError::InvalidData(format!("No {what} choices configured")))
}
