//! Obstacle Avoidance Sensor - obstacle class with fixed distance and closing speed

use super::{pick, Sensor, SensorError};
use crate::config::ObstacleSensorConfig;
use crate::types::{fields, ObstacleType, SensorKind, SensorReading};
use rand::RngCore;

pub struct ObstacleAvoidanceSensor {
    cfg: ObstacleSensorConfig,
}

impl ObstacleAvoidanceSensor {
    pub const fn new(cfg: ObstacleSensorConfig) -> Self {
        Self { cfg }
    }
}

impl Default for ObstacleAvoidanceSensor {
    fn default() -> Self {
        Self::new(ObstacleSensorConfig::default())
    }
}

impl Sensor for ObstacleAvoidanceSensor {
    fn name(&self) -> &str {
        "ObstacleAvoidanceSensor"
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Obstacle
    }

    fn try_read(&self, rng: &mut dyn RngCore) -> Result<SensorReading, SensorError> {
        let obstacle = pick(&ObstacleType::ALL, rng, "obstacle type")?;

        Ok(SensorReading::empty()
            .with(fields::OBSTACLE_TYPE, obstacle.as_str())
            .with(fields::DISTANCE_TO_OBSTACLE, self.cfg.distance_m)
            .with(fields::RELATIVE_SPEED, self.cfg.relative_speed_kmh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fixed_distance_and_speed() {
        let sensor = ObstacleAvoidanceSensor::default();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let r = sensor.read(&mut rng);
            let kind = r.text(fields::OBSTACLE_TYPE).expect("type");
            assert!(ObstacleType::parse(kind).is_some());
            assert_eq!(r.display(fields::DISTANCE_TO_OBSTACLE).as_deref(), Some("15"));
            assert_eq!(r.display(fields::RELATIVE_SPEED).as_deref(), Some("-5"));
        }
    }

    #[test]
    fn test_configured_constants() {
        let sensor = ObstacleAvoidanceSensor::new(ObstacleSensorConfig {
            distance_m: 40,
            relative_speed_kmh: 12,
        });
        let mut rng = StdRng::seed_from_u64(5);
        let r = sensor.read(&mut rng);
        assert_eq!(r.display(fields::DISTANCE_TO_OBSTACLE).as_deref(), Some("40"));
        assert_eq!(r.display(fields::RELATIVE_SPEED).as_deref(), Some("12"));
    }
}
