//! Core data types shared by sensors, decisions and control.
//!
//! - [`SensorReading`]: flat mapping of named fields produced by one sensor call
//! - [`Decision`]: the recommendation string a decision maker derives from a reading
//! - [`SensorKind`]: the four sensor/decision pairs selectable from the menu
//! - Value enums ([`LaneStatus`], [`RoadCondition`], ...) whose string forms are
//!   the exact literals the decision tables match on

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ============================================================================
// Sensor Reading
// ============================================================================

/// A flat mapping of named readings returned by a sensor.
///
/// The empty mapping is the sentinel for "no usable reading". Values are JSON
/// scalars so literal readings can be written with `serde_json::json!` and
/// logged verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorReading(Map<String, Value>);

impl SensorReading {
    /// The "no usable reading" sentinel.
    pub fn empty() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// String value of a field, if present and a string.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Render a field for interpolation into a decision message.
    ///
    /// Strings render without quotes, numbers in their shortest form
    /// (`3.5`, `15`, `-5`). Arrays, objects and null are not renderable.
    pub fn display(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Field names present in the reading.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Compact JSON form, used for the raw-data log line.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }
}

impl From<Map<String, Value>> for SensorReading {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Non-object JSON converts to the empty reading.
impl From<Value> for SensorReading {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::empty(),
        }
    }
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

// ============================================================================
// Decision
// ============================================================================

/// Human-readable recommendation produced by a decision maker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decision(String);

impl Decision {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Decision {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Decision {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Decision {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Sensor Kind
// ============================================================================

/// The sensor/decision pairs offered by the menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    Lane,
    Obstacle,
    TrafficSignal,
    TrafficCamera,
}

impl SensorKind {
    pub const ALL: [Self; 4] = [
        Self::Lane,
        Self::Obstacle,
        Self::TrafficSignal,
        Self::TrafficCamera,
    ];

    /// 1-based menu position.
    pub const fn menu_index(self) -> u32 {
        match self {
            Self::Lane => 1,
            Self::Obstacle => 2,
            Self::TrafficSignal => 3,
            Self::TrafficCamera => 4,
        }
    }

    pub fn from_menu_index(index: i64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| i64::from(k.menu_index()) == index)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Lane => "Lane Detection Sensor",
            Self::Obstacle => "Obstacle Avoidance Sensor",
            Self::TrafficSignal => "Traffic Signal Recognition Sensor",
            Self::TrafficCamera => "Traffic Signal Recognition Sensor using Camera Image",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Reading Values
// ============================================================================

/// Lane marker status reported by the lane sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneStatus {
    Detected,
    NotDetected,
    NotDefined,
}

impl LaneStatus {
    pub const ALL: [Self; 3] = [Self::Detected, Self::NotDetected, Self::NotDefined];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Detected => "Detected",
            Self::NotDetected => "Not Detected",
            Self::NotDefined => "Not Defined",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Road surface condition reported by the lane sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadCondition {
    Dry,
    Wet,
    Snowy,
    Icy,
}

impl RoadCondition {
    pub const ALL: [Self; 4] = [Self::Dry, Self::Wet, Self::Snowy, Self::Icy];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dry => "Dry",
            Self::Wet => "Wet",
            Self::Snowy => "Snowy",
            Self::Icy => "Icy",
        }
    }
}

/// Obstacle class reported by the obstacle sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleType {
    Pedestrian,
    Car,
}

impl ObstacleType {
    pub const ALL: [Self; 2] = [Self::Pedestrian, Self::Car];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pedestrian => "Pedestrian",
            Self::Car => "Car",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Traffic light state reported by the text traffic sensor (capitalized).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    Red,
    Green,
    Yellow,
}

impl LightState {
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Yellow];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Signal color classified from a camera image (lowercase on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalColor {
    Red,
    Green,
    Yellow,
}

impl SignalColor {
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Yellow];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Field names used in readings.
pub mod fields {
    pub const LANE_STATUS: &str = "lane_status";
    pub const LANE_WIDTH: &str = "lane_width";
    pub const ROAD_CONDITION: &str = "road_condition";

    pub const OBSTACLE_TYPE: &str = "obstacle_type";
    pub const DISTANCE_TO_OBSTACLE: &str = "distance_to_obstacle";
    pub const RELATIVE_SPEED: &str = "relative_speed";

    pub const TRAFFIC_LIGHT_STATE: &str = "traffic_light_state";
    pub const TIME_TO_CHANGE: &str = "time_to_change";
    pub const WEATHER: &str = "weather";

    pub const TRAFFIC_SIGNAL: &str = "traffic_signal";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_renders_scalars_without_quotes() {
        let reading = SensorReading::from(json!({
            "lane_status": "Detected",
            "lane_width": 3.5,
            "distance": 15,
            "speed": -5,
        }));
        assert_eq!(reading.display("lane_status").as_deref(), Some("Detected"));
        assert_eq!(reading.display("lane_width").as_deref(), Some("3.5"));
        assert_eq!(reading.display("distance").as_deref(), Some("15"));
        assert_eq!(reading.display("speed").as_deref(), Some("-5"));
        assert_eq!(reading.display("missing"), None);
    }

    #[test]
    fn test_non_object_json_is_empty_reading() {
        assert!(SensorReading::from(json!([1, 2, 3])).is_empty());
        assert!(SensorReading::from(json!(null)).is_empty());
    }

    #[test]
    fn test_menu_index_roundtrip() {
        for kind in SensorKind::ALL {
            assert_eq!(
                SensorKind::from_menu_index(i64::from(kind.menu_index())),
                Some(kind)
            );
        }
        assert_eq!(SensorKind::from_menu_index(0), None);
        assert_eq!(SensorKind::from_menu_index(5), None);
    }

    #[test]
    fn test_value_literals_match_decision_tables() {
        assert_eq!(LaneStatus::parse("Not Detected"), Some(LaneStatus::NotDetected));
        assert_eq!(LightState::parse("green"), None);
        assert_eq!(SignalColor::parse("green"), Some(SignalColor::Green));
        assert_eq!(ObstacleType::parse("Truck"), None);
    }
}
