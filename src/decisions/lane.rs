//! Lane Detection Decision

use super::{require_display, require_text, DecisionError, DecisionMaker};
use crate::types::{fields, Decision, LaneStatus, SensorKind, SensorReading};

pub const LANE_FALLBACK: &str = "Unable to determine lane status.";

pub struct LaneDetectionDecision;

impl DecisionMaker for LaneDetectionDecision {
    fn name(&self) -> &str {
        "LaneDetectionDecision"
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Lane
    }

    fn fallback(&self) -> &'static str {
        LANE_FALLBACK
    }

    fn try_decide(&self, reading: &SensorReading) -> Result<Decision, DecisionError> {
        if reading.is_empty() {
            return Err(DecisionError::EmptyReading("lane detection"));
        }

        let status = require_text(reading, fields::LANE_STATUS)?;
        let decision = match LaneStatus::parse(status) {
            Some(LaneStatus::Detected) => format!(
                "Stay in Lane (Width: {}m, Road Condition: {})",
                require_display(reading, fields::LANE_WIDTH)?,
                require_display(reading, fields::ROAD_CONDITION)?,
            ),
            Some(LaneStatus::NotDetected) => "Drive Cautiously, Lane Not Defined".to_string(),
            Some(LaneStatus::NotDefined) => "Slow Down, Lane Not Detected".to_string(),
            None => {
                return Err(DecisionError::Unrecognized {
                    field: fields::LANE_STATUS,
                    value: status.to_string(),
                    message: LANE_FALLBACK,
                })
            }
        };
        Ok(Decision::from(decision))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decide(value: serde_json::Value) -> String {
        LaneDetectionDecision
            .decide(&SensorReading::from(value))
            .into_string()
    }

    #[test]
    fn test_detected_interpolates_width_and_condition() {
        let d = decide(json!({"lane_status": "Detected", "lane_width": 3.5, "road_condition": "Dry"}));
        assert!(d.contains("Stay in Lane"));
        assert!(d.contains("3.5"));
        assert!(d.contains("Dry"));
        assert_eq!(d, "Stay in Lane (Width: 3.5m, Road Condition: Dry)");
    }

    #[test]
    fn test_not_detected_and_not_defined() {
        assert_eq!(
            decide(json!({"lane_status": "Not Detected", "lane_width": 2, "road_condition": "Wet"})),
            "Drive Cautiously, Lane Not Defined"
        );
        assert_eq!(
            decide(json!({"lane_status": "Not Defined"})),
            "Slow Down, Lane Not Detected"
        );
    }

    #[test]
    fn test_unknown_or_incomplete_falls_back() {
        assert_eq!(decide(json!({"lane_status": "Blurry"})), LANE_FALLBACK);
        assert_eq!(decide(json!({"lane_status": "Detected"})), LANE_FALLBACK);
        assert_eq!(decide(json!({"lane_status": 4})), LANE_FALLBACK);
        assert_eq!(decide(json!({})), LANE_FALLBACK);
    }

    #[test]
    fn test_missing_field_error_names_the_field() {
        let err = LaneDetectionDecision
            .try_decide(&SensorReading::from(json!({"lane_status": "Detected", "lane_width": 3})))
            .expect_err("missing road condition");
        assert_eq!(err, DecisionError::MissingField("road_condition"));
    }
}
