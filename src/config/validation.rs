//! Config validation: unknown-key detection with Levenshtein suggestions
//! and range checks on sensor and camera settings.
//!
//! Two-pass parse approach: first parse raw TOML into `toml::Value`, walk the
//! key tree, compare against known field names, and emit warnings with
//! "did you mean?" suggestions. Serde deserialization follows. Warnings never
//! break a config.

use super::defaults::MAX_SEED;
use super::SimConfig;
use crate::vision::HsvRange;
use std::collections::HashSet;

/// A non-fatal config warning (typo, unknown section).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

const BANDS: [&str; 4] = ["red_low", "red_high", "green", "yellow"];

/// Returns the complete set of valid dotted key paths for `SimConfig`.
///
/// Any new field added to `SimConfig` must be added here too.
pub fn known_config_keys() -> HashSet<String> {
    let mut keys: HashSet<String> = [
        "vehicle",
        "vehicle.name",
        "simulation",
        "simulation.seed",
        "logging",
        "logging.file",
        "logging.file_level",
        "sensors",
        "sensors.lane",
        "sensors.lane.width_min",
        "sensors.lane.width_max",
        "sensors.obstacle",
        "sensors.obstacle.distance_m",
        "sensors.obstacle.relative_speed_kmh",
        "sensors.traffic",
        "sensors.traffic.time_to_change_s",
        "sensors.traffic.weather",
        "sensors.camera",
        "sensors.camera.image_path",
        "sensors.camera.min_region_area",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    for band in BANDS {
        let base = format!("sensors.camera.{band}");
        keys.insert(format!("{base}.lower"));
        keys.insert(format!("{base}.upper"));
        keys.insert(base);
    }
    keys
}

/// Walk a TOML value tree and collect all dotted key paths.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
///
/// Ties resolve to the lexicographically smallest key so output is stable.
pub fn suggest_correction(unknown: &str, known: &HashSet<String>) -> Option<String> {
    known
        .iter()
        .map(|k| (levenshtein(unknown, k), k))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, k)| k.clone())
}

// ============================================================================
// Unknown Key Validation
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are reported by serde
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key))
        .map(|key| ValidationWarning {
            message: format!("Unknown config key '{key}'"),
            suggestion: suggest_correction(&key, &known),
            field: key,
        })
        .collect()
}

// ============================================================================
// Range Validation
// ============================================================================

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate value ranges on a parsed `SimConfig`. Returns error messages.
pub fn validate_ranges(config: &SimConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(seed) = config.simulation.seed {
        if seed > MAX_SEED {
            errors.push(format!("simulation.seed = {seed} must not exceed {MAX_SEED}"));
        }
    }

    let lane = &config.sensors.lane;
    if lane.width_min < 1 {
        errors.push(format!(
            "sensors.lane.width_min = {} must be at least 1",
            lane.width_min
        ));
    }
    if lane.width_min > lane.width_max {
        errors.push(format!(
            "sensors.lane.width_min ({}) must not exceed width_max ({})",
            lane.width_min, lane.width_max
        ));
    }

    let camera = &config.sensors.camera;
    if !camera.min_region_area.is_finite() || camera.min_region_area < 0.0 {
        errors.push(format!(
            "sensors.camera.min_region_area = {} must be a non-negative number",
            camera.min_region_area
        ));
    }
    let bands: [(&str, &HsvRange); 4] = [
        ("red_low", &camera.red_low),
        ("red_high", &camera.red_high),
        ("green", &camera.green),
        ("yellow", &camera.yellow),
    ];
    for (name, band) in bands {
        if let Err(reason) = band.check() {
            errors.push(format!("sensors.camera.{name}: {reason}"));
        }
    }

    let level = config.logging.file_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.file_level = '{}' is not one of {}",
            config.logging.file_level,
            LOG_LEVELS.join(", ")
        ));
    }

    errors
}
