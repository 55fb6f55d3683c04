//! Traffic Signal Recognition Sensor - light state with fixed timing and weather

use super::{pick, Sensor, SensorError};
use crate::config::TrafficSensorConfig;
use crate::types::{fields, LightState, SensorKind, SensorReading};
use rand::RngCore;

pub struct TrafficSignalSensor {
    cfg: TrafficSensorConfig,
}

impl TrafficSignalSensor {
    pub const fn new(cfg: TrafficSensorConfig) -> Self {
        Self { cfg }
    }
}

impl Default for TrafficSignalSensor {
    fn default() -> Self {
        Self::new(TrafficSensorConfig::default())
    }
}

impl Sensor for TrafficSignalSensor {
    fn name(&self) -> &str {
        "TrafficSignalRecognitionSensor"
    }

    fn kind(&self) -> SensorKind {
        SensorKind::TrafficSignal
    }

    fn try_read(&self, rng: &mut dyn RngCore) -> Result<SensorReading, SensorError> {
        let state = pick(&LightState::ALL, rng, "traffic light state")?;

        Ok(SensorReading::empty()
            .with(fields::TRAFFIC_LIGHT_STATE, state.as_str())
            .with(fields::TIME_TO_CHANGE, self.cfg.time_to_change_s)
            .with(fields::WEATHER, self.cfg.weather.as_str()))
    }
}
