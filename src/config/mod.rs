//! Simulation Configuration Module
//!
//! Provides the simulation configuration loaded from TOML files, replacing
//! hardcoded sensor constants, camera color bands and logging targets with
//! operator-tunable values.
//!
//! ## Loading Order
//!
//! 1. Explicit path (`--config` flag or `DRIVERLESS_CAR_CONFIG` env var)
//! 2. `driverless_car.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! ```ignore
//! // In main():
//! config::init(SimConfig::load(None)?);
//!
//! // Anywhere in the binary:
//! let path = &config::get().sensors.camera.image_path;
//! ```
//!
//! Library code takes the relevant section explicitly instead of calling
//! `get()`, so sensors stay constructible in tests without global state.

mod sim_config;
pub mod defaults;
pub mod validation;

pub use sim_config::*;

use std::sync::OnceLock;

/// Global simulation configuration, initialized once at startup.
static SIM_CONFIG: OnceLock<SimConfig> = OnceLock::new();

/// Initialize the global simulation configuration.
///
/// Later calls are ignored with a warning.
pub fn init(config: SimConfig) {
    if SIM_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once, ignoring");
    }
}

/// Get a reference to the global simulation configuration.
///
/// Falls back to the built-in defaults when `init()` was never called.
pub fn get() -> &'static SimConfig {
    SIM_CONFIG.get_or_init(SimConfig::default)
}

/// Check whether the config has been initialized.
pub fn is_initialized() -> bool {
    SIM_CONFIG.get().is_some()
}
