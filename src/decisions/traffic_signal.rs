//! Traffic Signal Recognition Decision (text reading)

use super::{require_display, require_text, DecisionError, DecisionMaker};
use crate::types::{fields, Decision, LightState, SensorKind, SensorReading};

pub const TRAFFIC_FALLBACK: &str = "Unable to determine traffic light state.";

pub struct TrafficSignalDecision;

impl DecisionMaker for TrafficSignalDecision {
    fn name(&self) -> &str {
        "TrafficSignalRecognitionDecision"
    }

    fn kind(&self) -> SensorKind {
        SensorKind::TrafficSignal
    }

    fn fallback(&self) -> &'static str {
        TRAFFIC_FALLBACK
    }

    fn try_decide(&self, reading: &SensorReading) -> Result<Decision, DecisionError> {
        if reading.is_empty() {
            return Err(DecisionError::EmptyReading("traffic signal recognition"));
        }

        let state = require_text(reading, fields::TRAFFIC_LIGHT_STATE)?;
        let action = match LightState::parse(state) {
            Some(LightState::Red) => "Stop",
            Some(LightState::Yellow) => "Slow Down",
            Some(LightState::Green) => "Go",
            None => {
                return Err(DecisionError::Unrecognized {
                    field: fields::TRAFFIC_LIGHT_STATE,
                    value: state.to_string(),
                    message: TRAFFIC_FALLBACK,
                })
            }
        };

        Ok(Decision::from(format!(
            "{action} (Time to Change: {}s, Weather: {})",
            require_display(reading, fields::TIME_TO_CHANGE)?,
            require_display(reading, fields::WEATHER)?,
        )))
    }
}
