//! Traffic Signal Recognition Decision (camera color)

use super::traffic_signal::TRAFFIC_FALLBACK;
use super::{require_text, DecisionError, DecisionMaker};
use crate::types::{fields, Decision, SensorKind, SensorReading, SignalColor};

pub struct TrafficCameraDecision;

impl DecisionMaker for TrafficCameraDecision {
    fn name(&self) -> &str {
        "TrafficSignalRecognitionDecisionCamera"
    }

    fn kind(&self) -> SensorKind {
        SensorKind::TrafficCamera
    }

    fn fallback(&self) -> &'static str {
        TRAFFIC_FALLBACK
    }

    fn try_decide(&self, reading: &SensorReading) -> Result<Decision, DecisionError> {
        if reading.is_empty() {
            return Err(DecisionError::EmptyReading("traffic signal recognition"));
        }

        let color = require_text(reading, fields::TRAFFIC_SIGNAL)?;
        let action = match SignalColor::parse(color) {
            Some(SignalColor::Red) => "Stop",
            Some(SignalColor::Yellow) => "Slow Down",
            Some(SignalColor::Green) => "Go",
            None => {
                return Err(DecisionError::Unrecognized {
                    field: fields::TRAFFIC_SIGNAL,
                    value: color.to_string(),
                    message: TRAFFIC_FALLBACK,
                })
            }
        };
        Ok(Decision::from(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decide(color: &str) -> String {
        TrafficCameraDecision
            .decide(&SensorReading::from(json!({ "traffic_signal": color })))
            .into_string()
    }

    #[test]
    fn test_colors_map_to_bare_actions() {
        assert_eq!(decide("red"), "Stop");
        assert_eq!(decide("yellow"), "Slow Down");
        assert_eq!(decide("green"), "Go");
    }

    #[test]
    fn test_empty_and_none_colors_fall_back() {
        assert_eq!(decide(""), TRAFFIC_FALLBACK);
        assert_eq!(decide("none"), TRAFFIC_FALLBACK);
        assert_eq!(decide("Red"), TRAFFIC_FALLBACK);
    }
}
