//! System-wide default constants.
//!
//! Centralises the values the sensors and the camera classifier use when no
//! config file overrides them. Grouped by subsystem for easy discovery.

// ============================================================================
// Config Discovery
// ============================================================================

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "DRIVERLESS_CAR_CONFIG";

/// Config file looked up in the current working directory.
pub const LOCAL_CONFIG_FILE: &str = "driverless_car.toml";

// ============================================================================
// Logging
// ============================================================================

/// File that receives error-level log records.
pub const LOG_FILE: &str = "driverless_car.log";

/// Minimum level written to the log file.
pub const LOG_FILE_LEVEL: &str = "error";

// ============================================================================
// Simulation
// ============================================================================

/// Largest seed a config file can hold (TOML integers are signed 64-bit).
pub const MAX_SEED: u64 = i64::MAX.unsigned_abs();

// ============================================================================
// Lane Sensor
// ============================================================================

/// Narrowest simulated lane (metres).
pub const LANE_WIDTH_MIN_M: i64 = 1;

/// Widest simulated lane (metres).
pub const LANE_WIDTH_MAX_M: i64 = 10;

// ============================================================================
// Obstacle Sensor
// ============================================================================

/// Fixed distance to the detected obstacle (metres).
pub const OBSTACLE_DISTANCE_M: i64 = 15;

/// Fixed speed relative to the obstacle (km/h). Negative means closing.
pub const OBSTACLE_RELATIVE_SPEED_KMH: i64 = -5;

// ============================================================================
// Traffic Signal Sensor
// ============================================================================

/// Fixed time until the light changes (seconds).
pub const TRAFFIC_TIME_TO_CHANGE_S: i64 = 5;

/// Fixed weather report.
pub const TRAFFIC_WEATHER: &str = "Sunny";

// ============================================================================
// Camera Sensor
// ============================================================================

/// Demo traffic light image.
pub const CAMERA_IMAGE_PATH: &str = "assets/traffic_go.png";

/// Area enclosed by the largest color region must exceed this (px²) to count as a signal.
pub const MIN_REGION_AREA_PX: f64 = 1000.0;

/// Maximum hue on the 8-bit HSV scale.
pub const HUE_MAX: u8 = 180;

/// Low red hue band, `[h, s, v]` lower and upper bounds.
pub const RED_LOW_BAND: ([u8; 3], [u8; 3]) = ([0, 70, 50], [5, 255, 255]);

/// High red hue band (red wraps around the hue circle).
pub const RED_HIGH_BAND: ([u8; 3], [u8; 3]) = ([175, 70, 50], [180, 255, 255]);

pub const GREEN_BAND: ([u8; 3], [u8; 3]) = ([35, 50, 50], [80, 255, 255]);

pub const YELLOW_BAND: ([u8; 3], [u8; 3]) = ([15, 100, 100], [40, 255, 255]);
