//! Interactive session tests
//!
//! Drives `run_interactive` with scripted stdin and checks what the user sees.

use driverless_car::config::SimConfig;
use driverless_car::pipeline::{run_interactive, ExitReason, Menu};
use driverless_car::{Control, Pipeline};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Cursor;

fn run_script(script: &str, config: &SimConfig) -> (driverless_car::SessionSummary, Control, String) {
    let mut pipeline = Pipeline::from_config(&config.sensors);
    let mut control = Control::new();
    let mut rng = StdRng::seed_from_u64(5);
    let mut out = Vec::new();
    let summary = run_interactive(
        Cursor::new(script.to_string()),
        &mut out,
        &Menu::new(config.vehicle.name.clone()),
        &mut pipeline,
        &mut control,
        &mut rng,
    )
    .expect("in-memory session");
    (summary, control, String::from_utf8(out).expect("utf8"))
}

#[test]
fn test_full_session_mixed_input() {
    let config = SimConfig::default();
    let (summary, control, out) = run_script("1\nfoo\n7\n2\n3\n5\n1\n", &config);

    assert_eq!(summary.exit, ExitReason::ExitSelected);
    assert_eq!(summary.runs, 3);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.invalid_inputs, 1);
    assert_eq!(out.matches("Executing decision: ").count(), 3);
    assert!(!control.is_empty());
    assert!(out.contains("Welcome to the Driverless Car Program (Tesla Home Edition)"));
}

#[test]
fn test_camera_selection_with_missing_image_prints_fallback() {
    let mut config = SimConfig::default();
    config.sensors.camera.image_path = "missing/trafficstop.jpg".into();
    let (summary, control, out) = run_script("4\n5\n", &config);

    assert_eq!(summary.runs, 1);
    assert!(out.contains("Executing decision: Unable to determine traffic light state."));
    assert!(control.contains("Unable to determine traffic light state."));
}

#[test]
fn test_only_out_of_range_input_never_executes() {
    let config = SimConfig::default();
    let (summary, control, out) = run_script("0\n6\n-1\n", &config);

    assert_eq!(summary.exit, ExitReason::EndOfInput);
    assert_eq!(summary.rejected, 3);
    assert_eq!(summary.runs, 0);
    assert!(control.is_empty());
    assert!(!out.contains("Executing decision"));
}
