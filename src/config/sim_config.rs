//! Simulation Configuration - sensor constants, camera bands and logging as TOML values
//!
//! Each struct implements `Default` with the values the simulator ships with,
//! so an empty or missing config file behaves exactly like no config at all.

use super::defaults;
use crate::vision::HsvRange;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for one simulator run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimConfig {
    /// Vehicle identification (appears in logs only)
    #[serde(default)]
    pub vehicle: VehicleInfo,

    /// Random source settings
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Log file target
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Per-sensor settings
    #[serde(default)]
    pub sensors: SensorsConfig,
}

impl SimConfig {
    /// Load configuration using the standard search order:
    /// 1. `explicit` path, if given (errors propagate)
    /// 2. `$DRIVERLESS_CAR_CONFIG` (errors fall back with a warning)
    /// 3. `./driverless_car.toml` (errors fall back with a warning)
    /// 4. Built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let config = Self::load_from_file(path)?;
            info!(path = %path.display(), vehicle = %config.vehicle.name, "Loaded config from --config");
            return Ok(config);
        }

        if let Ok(path) = std::env::var(defaults::CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), vehicle = %config.vehicle.name, "Loaded config from {}", defaults::CONFIG_ENV_VAR);
                        return Ok(config);
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", defaults::CONFIG_ENV_VAR);
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", defaults::CONFIG_ENV_VAR);
            }
        }

        let local = PathBuf::from(defaults::LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(vehicle = %config.vehicle.name, "Loaded config from ./{}", defaults::LOCAL_CONFIG_FILE);
                    return Ok(config);
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", defaults::LOCAL_CONFIG_FILE);
                }
            }
        }

        info!("No config file found, using built-in defaults");
        Ok(Self::default())
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys are reported as warnings and never fail the parse.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the sensors cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let errors = super::validation::validate_ranges(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Serialize back to TOML (used for `--print-config`).
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

// ============================================================================
// Vehicle / Simulation / Logging
// ============================================================================

/// Identification metadata, not used for logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleInfo {
    #[serde(default = "default_vehicle_name")]
    pub name: String,
}

impl Default for VehicleInfo {
    fn default() -> Self {
        Self {
            name: default_vehicle_name(),
        }
    }
}

fn default_vehicle_name() -> String {
    "Tesla Home Edition".to_string()
}

/// Random source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed seed for reproducible runs; entropy when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Log file target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// File receiving log records at or above `file_level`.
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// One of trace, debug, info, warn, error.
    #[serde(default = "default_log_file_level")]
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            file_level: default_log_file_level(),
        }
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from(defaults::LOG_FILE)
}

fn default_log_file_level() -> String {
    defaults::LOG_FILE_LEVEL.to_string()
}

// ============================================================================
// Sensors
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensorsConfig {
    #[serde(default)]
    pub lane: LaneSensorConfig,

    #[serde(default)]
    pub obstacle: ObstacleSensorConfig,

    #[serde(default)]
    pub traffic: TrafficSensorConfig,

    #[serde(default)]
    pub camera: CameraSensorConfig,
}

/// Lane width is drawn uniformly from `width_min..=width_max`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaneSensorConfig {
    #[serde(default = "default_width_min")]
    pub width_min: i64,

    #[serde(default = "default_width_max")]
    pub width_max: i64,
}

impl Default for LaneSensorConfig {
    fn default() -> Self {
        Self {
            width_min: default_width_min(),
            width_max: default_width_max(),
        }
    }
}

const fn default_width_min() -> i64 {
    defaults::LANE_WIDTH_MIN_M
}

const fn default_width_max() -> i64 {
    defaults::LANE_WIDTH_MAX_M
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleSensorConfig {
    #[serde(default = "default_distance_m")]
    pub distance_m: i64,

    #[serde(default = "default_relative_speed_kmh")]
    pub relative_speed_kmh: i64,
}

impl Default for ObstacleSensorConfig {
    fn default() -> Self {
        Self {
            distance_m: default_distance_m(),
            relative_speed_kmh: default_relative_speed_kmh(),
        }
    }
}

const fn default_distance_m() -> i64 {
    defaults::OBSTACLE_DISTANCE_M
}

const fn default_relative_speed_kmh() -> i64 {
    defaults::OBSTACLE_RELATIVE_SPEED_KMH
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficSensorConfig {
    #[serde(default = "default_time_to_change_s")]
    pub time_to_change_s: i64,

    #[serde(default = "default_weather")]
    pub weather: String,
}

impl Default for TrafficSensorConfig {
    fn default() -> Self {
        Self {
            time_to_change_s: default_time_to_change_s(),
            weather: default_weather(),
        }
    }
}

const fn default_time_to_change_s() -> i64 {
    defaults::TRAFFIC_TIME_TO_CHANGE_S
}

fn default_weather() -> String {
    defaults::TRAFFIC_WEATHER.to_string()
}

/// Camera traffic-signal classifier settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSensorConfig {
    /// Image read on every camera sensor call.
    #[serde(default = "default_image_path")]
    pub image_path: PathBuf,

    /// Largest color region must exceed this area (px²).
    #[serde(default = "default_min_region_area")]
    pub min_region_area: f64,

    #[serde(default = "default_red_low")]
    pub red_low: HsvRange,

    #[serde(default = "default_red_high")]
    pub red_high: HsvRange,

    #[serde(default = "default_green")]
    pub green: HsvRange,

    #[serde(default = "default_yellow")]
    pub yellow: HsvRange,
}

impl Default for CameraSensorConfig {
    fn default() -> Self {
        Self {
            image_path: default_image_path(),
            min_region_area: default_min_region_area(),
            red_low: default_red_low(),
            red_high: default_red_high(),
            green: default_green(),
            yellow: default_yellow(),
        }
    }
}

fn default_image_path() -> PathBuf {
    PathBuf::from(defaults::CAMERA_IMAGE_PATH)
}

const fn default_min_region_area() -> f64 {
    defaults::MIN_REGION_AREA_PX
}

const fn default_red_low() -> HsvRange {
    HsvRange::from_bounds(defaults::RED_LOW_BAND)
}

const fn default_red_high() -> HsvRange {
    HsvRange::from_bounds(defaults::RED_HIGH_BAND)
}

const fn default_green() -> HsvRange {
    HsvRange::from_bounds(defaults::GREEN_BAND)
}

const fn default_yellow() -> HsvRange {
    HsvRange::from_bounds(defaults::YELLOW_BAND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_validates() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok(), "Default config must always validate");
    }

    #[test]
    fn test_empty_toml_produces_defaults() {
        let config = SimConfig::from_toml_str("").expect("empty TOML should parse");
        assert_eq!(config.sensors.lane.width_min, 1);
        assert_eq!(config.sensors.lane.width_max, 10);
        assert_eq!(config.sensors.obstacle.distance_m, 15);
        assert_eq!(config.sensors.obstacle.relative_speed_kmh, -5);
        assert_eq!(config.sensors.traffic.time_to_change_s, 5);
        assert_eq!(config.sensors.traffic.weather, "Sunny");
        assert_eq!(config.sensors.camera.min_region_area, 1000.0);
        assert_eq!(config.sensors.camera.red_high.lower, [175, 70, 50]);
        assert_eq!(config.logging.file, PathBuf::from("driverless_car.log"));
        assert_eq!(config.simulation.seed, None);
    }

    #[test]
    fn test_partial_toml_override() {
        let toml_str = r#"
[vehicle]
name = "Test-Car-1"

[simulation]
seed = 42

[sensors.traffic]
weather = "Foggy"

[sensors.camera.green]
lower = [40, 60, 60]
upper = [75, 255, 255]
"#;
        let config = SimConfig::from_toml_str(toml_str).expect("partial TOML should parse");
        assert_eq!(config.vehicle.name, "Test-Car-1");
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.sensors.traffic.weather, "Foggy");
        assert_eq!(config.sensors.camera.green.lower, [40, 60, 60]);
        // Non-overridden values retain defaults
        assert_eq!(config.sensors.traffic.time_to_change_s, 5);
        assert_eq!(config.sensors.camera.yellow.lower, [15, 100, 100]);
    }

    #[test]
    fn test_inverted_lane_width_rejected() {
        let toml_str = r#"
[sensors.lane]
width_min = 8
width_max = 3
"#;
        match SimConfig::from_toml_str(toml_str) {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("sensors.lane.width_min")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file_reports_path_on_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[sensors.lane\nwidth_min = 1").expect("write");
        let err = SimConfig::load_from_file(file.path()).expect_err("broken TOML must fail");
        let msg = err.to_string();
        assert!(msg.contains("Config parse error"));
        assert!(msg.contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let err = SimConfig::load(Some(Path::new("/definitely/not/here.toml")))
            .expect_err("explicit path must exist");
        assert!(matches!(err, ConfigError::Io(_, _)));
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let config = SimConfig::default();
        let text = config.to_toml_string().expect("serialize");
        let back = SimConfig::from_toml_str(&text).expect("reparse");
        assert_eq!(back.sensors.camera.image_path, config.sensors.camera.image_path);
        assert_eq!(back.sensors.lane.width_max, config.sensors.lane.width_max);
    }
}
