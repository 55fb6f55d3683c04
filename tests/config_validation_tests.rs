//! Config validation integration tests
//!
//! Loads TOML files from disk the way the binary does and checks that
//! overrides reach the sensors, typos only warn, and impossible values fail.

use driverless_car::config::validation::validate_unknown_keys;
use driverless_car::config::{ConfigError, SimConfig};
use driverless_car::sensors::{LaneDetectionSensor, Sensor, TrafficSignalSensor};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("driverless_car.toml");
    fs::write(&path, contents).expect("write config");
    (dir, path)
}

#[test]
fn test_file_overrides_reach_sensors() {
    let (_dir, path) = write_config(
        r#"
[sensors.lane]
width_min = 6
width_max = 6

[sensors.traffic]
time_to_change_s = 12
weather = "Rain"
"#,
    );
    let config = SimConfig::load(Some(&path)).expect("valid config");
    let mut rng = StdRng::seed_from_u64(1);

    let lane = LaneDetectionSensor::new(config.sensors.lane.clone()).read(&mut rng);
    assert_eq!(lane.display("lane_width").as_deref(), Some("6"));

    let traffic = TrafficSignalSensor::new(config.sensors.traffic.clone()).read(&mut rng);
    assert_eq!(traffic.display("time_to_change").as_deref(), Some("12"));
    assert_eq!(traffic.text("weather"), Some("Rain"));
}

#[test]
fn test_typo_keys_warn_but_load() {
    let toml_str = r#"
[sensors.camera]
min_region_aera = 500.0
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("sensors.camera.min_region_area")
    );
    assert!(warnings[0].to_string().contains("did you mean"));

    let config = SimConfig::from_toml_str(toml_str).expect("typos never fail the load");
    assert_eq!(config.sensors.camera.min_region_area, 1000.0);
}

#[test]
fn test_impossible_values_fail_validation() {
    let (_dir, path) = write_config(
        r#"
[sensors.lane]
width_min = 0

[sensors.camera]
min_region_area = -1.0

[sensors.camera.red_high]
lower = [175, 70, 50]
upper = [190, 255, 255]

[logging]
file_level = "verbose"
"#,
    );
    match SimConfig::load(Some(&path)) {
        Err(ConfigError::Validation(errors)) => {
            assert_eq!(errors.len(), 4, "{errors:#?}");
            let joined = errors.join("\n");
            assert!(joined.contains("sensors.lane.width_min"));
            assert!(joined.contains("sensors.camera.min_region_area"));
            assert!(joined.contains("sensors.camera.red_high"));
            assert!(joined.contains("logging.file_level"));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_wrong_type_is_parse_error_with_path() {
    let (_dir, path) = write_config(
        r#"
[simulation]
seed = "forty-two"
"#,
    );
    let err = SimConfig::load(Some(&path)).expect_err("string seed");
    assert!(matches!(err, ConfigError::Parse(ref p, _) if p == &path));
}
