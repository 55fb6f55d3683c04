//! Lane Detection Sensor - lane status, width and road surface

use super::{pick, Sensor, SensorError};
use crate::config::LaneSensorConfig;
use crate::types::{fields, LaneStatus, RoadCondition, SensorKind, SensorReading};
use rand::{Rng, RngCore};

/// Reports a random lane status, an integer lane width (metres) and a road condition.
pub struct LaneDetectionSensor {
    cfg: LaneSensorConfig,
}

impl LaneDetectionSensor {
    pub const fn new(cfg: LaneSensorConfig) -> Self {
        Self { cfg }
    }
}

impl Default for LaneDetectionSensor {
    fn default() -> Self {
        Self::new(LaneSensorConfig::default())
    }
}

impl Sensor for LaneDetectionSensor {
    fn name(&self) -> &str {
        "LaneDetectionSensor"
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Lane
    }

    fn try_read(&self, rng: &mut dyn RngCore) -> Result<SensorReading, SensorError> {
        if self.cfg.width_min > self.cfg.width_max {
            return Err(SensorError::InvalidData(format!(
                "Lane width range {}..={} is empty",
                self.cfg.width_min, self.cfg.width_max
            )));
        }

        let status = pick(&LaneStatus::ALL, rng, "lane status")?;
        let width = rng.gen_range(self.cfg.width_min..=self.cfg.width_max);
        let condition = pick(&RoadCondition::ALL, rng, "road condition")?;

        Ok(SensorReading::empty()
            .with(fields::LANE_STATUS, status.as_str())
            .with(fields::LANE_WIDTH, width)
            .with(fields::ROAD_CONDITION, condition.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reading_shape_and_ranges() {
        let sensor = LaneDetectionSensor::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let r = sensor.read(&mut rng);
            assert_eq!(r.len(), 3);
            let status = r.text(fields::LANE_STATUS).expect("status");
            assert!(LaneStatus::parse(status).is_some(), "status {status}");
            let width = r
                .get(fields::LANE_WIDTH)
                .and_then(serde_json::Value::as_i64)
                .expect("integer width");
            assert!((1..=10).contains(&width));
            let cond = r.text(fields::ROAD_CONDITION).expect("condition");
            assert!(RoadCondition::ALL.iter().any(|c| c.as_str() == cond));
        }
    }

    #[test]
    fn test_every_status_eventually_appears() {
        let sensor = LaneDetectionSensor::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            let r = sensor.read(&mut rng);
            seen.insert(r.text(fields::LANE_STATUS).map(str::to_string));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_fixed_width_range() {
        let sensor = LaneDetectionSensor::new(LaneSensorConfig {
            width_min: 4,
            width_max: 4,
        });
        let mut rng = StdRng::seed_from_u64(3);
        let r = sensor.read(&mut rng);
        assert_eq!(r.display(fields::LANE_WIDTH).as_deref(), Some("4"));
    }

    #[test]
    fn test_inverted_range_yields_empty_reading() {
        let sensor = LaneDetectionSensor::new(LaneSensorConfig {
            width_min: 9,
            width_max: 2,
        });
        let mut rng = StdRng::seed_from_u64(3);
        assert!(sensor.read(&mut rng).is_empty());
    }
}
