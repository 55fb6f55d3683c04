//! Processing Pipeline Module
//!
//! ## Three-Stage Pipeline
//!
//! ```text
//! STAGE 1: Sensor    - fresh reading from the selected sensor
//! STAGE 2: Decision  - fixed table maps the reading to a recommendation
//! STAGE 3: Control   - decision recorded once and announced
//! ```
//!
//! Exactly one sensor/decision pair runs per menu selection. There is no
//! state carried between selections except the control log.

mod coordinator;
pub mod menu;

pub use coordinator::{Channel, Pipeline, PipelineError, PipelineStats, RunOutcome};
pub use menu::{parse_choice, run_interactive, ExitReason, Menu, MenuChoice, MenuInput, SessionSummary};
