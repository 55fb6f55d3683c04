//! Pipeline Coordinator - pairs each sensor with its decision maker
//!
//! ```text
//! STAGE 1: Sensor::read        (errors → empty reading)
//! STAGE 2: DecisionMaker::decide (errors → fallback message)
//! ```
//!
//! Control (stage 3) stays with the caller so the same pipeline can serve the
//! interactive loop and one-shot runs.

use crate::config::SensorsConfig;
use crate::decisions::{default_decisions, DecisionMaker};
use crate::sensors::{default_sensors, Sensor};
use crate::types::{Decision, SensorKind, SensorReading};
use rand::RngCore;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("No sensor/decision channel registered for {0}")]
    NoChannel(SensorKind),

    #[error("Sensor {sensor} is paired with decision {decision} for a different kind")]
    Mismatched { sensor: String, decision: String },
}

/// One sensor paired with the decision maker that understands its readings.
pub struct Channel {
    pub sensor: Box<dyn Sensor>,
    pub decision: Box<dyn DecisionMaker>,
}

impl Channel {
    pub fn new(
        sensor: Box<dyn Sensor>,
        decision: Box<dyn DecisionMaker>,
    ) -> Result<Self, PipelineError> {
        if sensor.kind() != decision.kind() {
            return Err(PipelineError::Mismatched {
                sensor: sensor.name().to_string(),
                decision: decision.name().to_string(),
            });
        }
        Ok(Self { sensor, decision })
    }

    pub fn kind(&self) -> SensorKind {
        self.sensor.kind()
    }
}

/// Result of one sensor → decision pass.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub kind: SensorKind,
    pub sensor: String,
    pub decision_maker: String,
    pub reading: SensorReading,
    pub decision: Decision,
    /// The decision is the maker's fallback message.
    pub fell_back: bool,
}

/// Counters over the life of one pipeline.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineStats {
    pub runs: u64,
    pub empty_readings: u64,
    pub fallbacks: u64,
    pub runs_by_kind: HashMap<SensorKind, u64>,
}

pub struct Pipeline {
    channels: Vec<Channel>,
    stats: PipelineStats,
}

impl Pipeline {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self {
            channels,
            stats: PipelineStats::default(),
        }
    }

    /// The four default channels, in menu order.
    pub fn from_config(cfg: &SensorsConfig) -> Self {
        let channels = default_sensors(cfg)
            .into_iter()
            .zip(default_decisions())
            .map(|(sensor, decision)| Channel { sensor, decision })
            .collect();
        Self::new(channels)
    }

    pub fn channel(&self, kind: SensorKind) -> Option<&Channel> {
        self.channels.iter().find(|c| c.kind() == kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = SensorKind> + '_ {
        self.channels.iter().map(Channel::kind)
    }

    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }

    /// Run the sensor and decision registered for `kind`.
    pub fn run(
        &mut self,
        kind: SensorKind,
        rng: &mut dyn RngCore,
    ) -> Result<RunOutcome, PipelineError> {
        let channel = self
            .channels
            .iter()
            .find(|c| c.kind() == kind)
            .ok_or(PipelineError::NoChannel(kind))?;

        let reading = channel.sensor.read(rng);
        let decision = channel.decision.decide(&reading);
        let fell_back = decision.as_str() == channel.decision.fallback();

        info!(
            "Sensor: {}, Decision: {}",
            channel.sensor.name(),
            channel.decision.name()
        );
        info!("Raw data: {}", reading);
        info!("Analysis result: {}", decision);
        if fell_back {
            warn!(kind = ?kind, "Decision fell back to default message");
        }

        let outcome = RunOutcome {
            kind,
            sensor: channel.sensor.name().to_string(),
            decision_maker: channel.decision.name().to_string(),
            reading,
            decision,
            fell_back,
        };

        self.stats.runs += 1;
        if outcome.reading.is_empty() {
            self.stats.empty_readings += 1;
        }
        if fell_back {
            self.stats.fallbacks += 1;
        }
        *self.stats.runs_by_kind.entry(kind).or_insert(0) += 1;

        Ok(outcome)
    }
}
