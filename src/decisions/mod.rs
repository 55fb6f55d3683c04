//! Decision trait and the four decision tables
//!
//! Each decision maker consumes exactly one sensor's reading shape and maps it
//! to a recommendation through a fixed table. An empty reading, a missing
//! field and an unrecognized value all route to the maker's fallback message.
//!
//! ## Decision makers
//!
//! 1. **Lane** - stay in lane / drive cautiously / slow down
//! 2. **Obstacle** - wait for pedestrian / change lane; brakes on malfunction
//! 3. **TrafficSignal** - stop / slow down / go, with timing and weather
//! 4. **TrafficCamera** - stop / slow down / go from the classified color

pub mod lane;
pub mod obstacle;
pub mod traffic_signal;
pub mod camera;

pub use camera::TrafficCameraDecision;
pub use lane::LaneDetectionDecision;
pub use obstacle::ObstacleAvoidanceDecision;
pub use traffic_signal::TrafficSignalDecision;

use crate::types::{Decision, SensorKind, SensorReading};
use thiserror::Error;
use tracing::error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecisionError {
    #[error("Invalid data for {0} decision.")]
    EmptyReading(&'static str),

    #[error("Reading is missing field '{0}'")]
    MissingField(&'static str),

    #[error("{message} (field '{field}' = '{value}')")]
    Unrecognized {
        field: &'static str,
        value: String,
        message: &'static str,
    },
}

// ============================================================================
// Decision Trait
// ============================================================================

/// Maps one reading shape to a recommendation.
pub trait DecisionMaker: Send + Sync {
    /// Decision maker name for logs (e.g. "LaneDetectionDecision")
    fn name(&self) -> &str;

    fn kind(&self) -> SensorKind;

    /// Message returned whenever the reading cannot be interpreted.
    fn fallback(&self) -> &'static str;

    fn try_decide(&self, reading: &SensorReading) -> Result<Decision, DecisionError>;

    /// Decide, logging any failure and returning the fallback message.
    fn decide(&self, reading: &SensorReading) -> Decision {
        self.try_decide(reading).unwrap_or_else(|e| {
            error!(decision = self.name(), "{}", e);
            Decision::from(self.fallback())
        })
    }
}

/// Create the default set of four decision makers, in menu order.
pub fn default_decisions() -> Vec<Box<dyn DecisionMaker>> {
    vec![
        Box::new(LaneDetectionDecision),
        Box::new(ObstacleAvoidanceDecision),
        Box::new(TrafficSignalDecision),
        Box::new(TrafficCameraDecision),
    ]
}

// ============================================================================
// Field Access
// ============================================================================

/// String field that must be present.
pub(crate) fn require_text<'a>(
    reading: &'a SensorReading,
    field: &'static str,
) -> Result<&'a str, DecisionError> {
    match reading.get(field) {
        None => Err(DecisionError::MissingField(field)),
        Some(value) => value.as_str().ok_or_else(|| DecisionError::Unrecognized {
            field,
            value: value.to_string(),
            message: "Expected a text value",
        }),
    }
}

/// Any scalar field rendered for interpolation.
pub(crate) fn require_display(
    reading: &SensorReading,
    field: &'static str,
) -> Result<String, DecisionError> {
    match reading.get(field) {
        None => Err(DecisionError::MissingField(field)),
        Some(value) => reading.display(field).ok_or_else(|| DecisionError::Unrecognized {
            field,
            value: value.to_string(),
            message: "Expected a scalar value",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fields;

    #[test]
    fn test_empty_reading_always_falls_back() {
        let empty = SensorReading::empty();
        for maker in default_decisions() {
            assert_eq!(maker.decide(&empty).as_str(), maker.fallback(), "{}", maker.name());
            assert!(matches!(
                maker.try_decide(&empty),
                Err(DecisionError::EmptyReading(_))
            ));
        }
    }

    #[test]
    fn test_wrong_type_is_unrecognized_not_missing() {
        let reading = SensorReading::from(serde_json::json!({
            "lane_status": 4,
            "lane_width": [1, 2],
        }));
        assert_eq!(
            require_text(&reading, fields::LANE_STATUS),
            Err(DecisionError::Unrecognized {
                field: fields::LANE_STATUS,
                value: "4".to_string(),
                message: "Expected a text value",
            })
        );
        assert!(matches!(
            require_display(&reading, fields::LANE_WIDTH),
            Err(DecisionError::Unrecognized { field: "lane_width", .. })
        ));
        assert_eq!(
            require_text(&reading, fields::ROAD_CONDITION),
            Err(DecisionError::MissingField("road_condition"))
        );
    }

    #[test]
    fn test_default_decisions_follow_menu_order() {
        let kinds: Vec<SensorKind> = default_decisions().iter().map(|d| d.kind()).collect();
        assert_eq!(kinds, SensorKind::ALL.to_vec());
    }
}
