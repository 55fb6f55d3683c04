//! Obstacle Avoidance Decision

use super::{require_display, require_text, DecisionError, DecisionMaker};
use crate::types::{fields, Decision, ObstacleType, SensorKind, SensorReading};

pub const OBSTACLE_FALLBACK: &str = "Error: The obstacle avoidance sensor is not working properly. \
Applying brakes, The vehicle will slow down and wait for recalibration.";

pub struct ObstacleAvoidanceDecision;

impl DecisionMaker for ObstacleAvoidanceDecision {
    fn name(&self) -> &str {
        "ObstacleAvoidanceDecision"
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Obstacle
    }

    fn fallback(&self) -> &'static str {
        OBSTACLE_FALLBACK
    }

    fn try_decide(&self, reading: &SensorReading) -> Result<Decision, DecisionError> {
        if reading.is_empty() {
            return Err(DecisionError::EmptyReading("obstacle avoidance"));
        }

        let obstacle = require_text(reading, fields::OBSTACLE_TYPE)?;
        let action = match ObstacleType::parse(obstacle) {
            Some(ObstacleType::Pedestrian) => "Slow Down and Wait for Pedestrian",
            Some(ObstacleType::Car) => "Change Lane or Slow Down",
            None => {
                return Err(DecisionError::Unrecognized {
                    field: fields::OBSTACLE_TYPE,
                    value: obstacle.to_string(),
                    message: "No obstacle detected.",
                })
            }
        };

        Ok(Decision::from(format!(
            "{action} (Distance: {}m, Relative Speed: {}km/h)",
            require_display(reading, fields::DISTANCE_TO_OBSTACLE)?,
            require_display(reading, fields::RELATIVE_SPEED)?,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decide(value: serde_json::Value) -> String {
        ObstacleAvoidanceDecision
            .decide(&SensorReading::from(value))
            .into_string()
    }

    #[test]
    fn test_car_changes_lane() {
        let d = decide(json!({"obstacle_type": "Car", "distance_to_obstacle": 15, "relative_speed": -5}));
        assert!(d.contains("Change Lane or Slow Down"));
        assert!(d.contains("15"));
        assert!(d.contains("-5"));
        assert_eq!(d, "Change Lane or Slow Down (Distance: 15m, Relative Speed: -5km/h)");
    }

    #[test]
    fn test_pedestrian_waits() {
        let d = decide(json!({"obstacle_type": "Pedestrian", "distance_to_obstacle": 8, "relative_speed": 0}));
        assert!(d.starts_with("Slow Down and Wait"));
        assert!(d.contains("Distance: 8m"));
    }

    #[test]
    fn test_empty_reading_is_exact_malfunction_message() {
        assert_eq!(decide(json!({})), OBSTACLE_FALLBACK);
        assert!(OBSTACLE_FALLBACK.starts_with("Error: The obstacle avoidance sensor"));
        assert!(OBSTACLE_FALLBACK.ends_with("wait for recalibration."));
    }

    #[test]
    fn test_unknown_obstacle_applies_brakes() {
        assert_eq!(
            decide(json!({"obstacle_type": "Deer", "distance_to_obstacle": 15, "relative_speed": -5})),
            OBSTACLE_FALLBACK
        );
    }
}
