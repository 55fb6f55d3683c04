//! Driverless Car: sensor → decision → control loop
//!
//! A simulated vehicle decision loop with four mock sensors.
//!
//! ## Architecture
//!
//! - **Sensors**: lane, obstacle, traffic signal, and camera-based traffic
//!   signal; each produces a flat [`SensorReading`]
//! - **Decisions**: one fixed table per sensor mapping a reading to a
//!   [`Decision`] string, with a fallback for unusable readings
//! - **Control**: records each decision once and announces it
//! - **Pipeline**: pairs sensors with decisions and drives the interactive menu
//! - **Vision**: HSV masks and region analysis behind the camera sensor

pub mod config;
pub mod types;
pub mod sensors;
pub mod decisions;
pub mod control;
pub mod pipeline;
pub mod vision;

// Re-export configuration
pub use config::SimConfig;

// Re-export commonly used types
pub use types::{
    Decision, LaneStatus, LightState, ObstacleType, RoadCondition, SensorKind, SensorReading,
    SignalColor,
};

// Re-export stage traits
pub use decisions::{DecisionError, DecisionMaker};
pub use sensors::{Sensor, SensorError};

// Re-export control and pipeline
pub use control::Control;
pub use pipeline::{Channel, Menu, Pipeline, RunOutcome, SessionSummary};
