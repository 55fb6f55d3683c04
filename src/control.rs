//! Control stage - records each decision once and surfaces it to the user.

use crate::types::Decision;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use tracing::debug;

/// One recorded decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlEntry {
    pub decision: Decision,
    /// When the decision was first executed; later repeats keep this value.
    pub first_executed: DateTime<Utc>,
}

/// Set of decisions executed during one run, keyed by the decision text.
#[derive(Debug, Default)]
pub struct Control {
    log: BTreeMap<String, ControlEntry>,
}

impl Control {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `decision` (idempotent) and announce it on `out`.
    pub fn execute<W: Write>(&mut self, decision: &Decision, out: &mut W) -> io::Result<()> {
        let newly_seen = self.record(decision);
        debug!(decision = %decision, newly_seen, recorded = self.log.len(), "Decision recorded");
        writeln!(out, "\nExecuting decision: {decision}")?;
        out.flush()
    }

    /// Record without emitting. Returns `true` the first time a decision is seen.
    pub fn record(&mut self, decision: &Decision) -> bool {
        if self.log.contains_key(decision.as_str()) {
            return false;
        }
        self.log.insert(
            decision.as_str().to_string(),
            ControlEntry {
                decision: decision.clone(),
                first_executed: Utc::now(),
            },
        );
        true
    }

    pub fn contains(&self, decision: &str) -> bool {
        self.log.contains_key(decision)
    }

    pub fn get(&self, decision: &str) -> Option<&ControlEntry> {
        self.log.get(decision)
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Recorded decisions in text order.
    pub fn decisions(&self) -> impl Iterator<Item = &Decision> {
        self.log.values().map(|e| &e.decision)
    }
}
