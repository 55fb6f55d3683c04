//! Interactive menu loop
//!
//! Renders the numbered sensor menu, reads one line per prompt and dispatches
//! valid selections through the [`Pipeline`] into [`Control`]. Input and
//! output are generic so the loop runs the same against a terminal or an
//! in-memory buffer.

use super::coordinator::Pipeline;
use crate::control::Control;
use crate::types::SensorKind;
use rand::RngCore;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

/// Menu number that ends the session.
pub const EXIT_OPTION: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(SensorKind),
    Exit,
}

/// Classification of one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuInput {
    Choice(MenuChoice),
    OutOfRange(i64),
    NotANumber(String),
}

/// Parse one input line. Surrounding whitespace is ignored.
pub fn parse_choice(line: &str) -> MenuInput {
    let trimmed = line.trim();
    match trimmed.parse::<i64>() {
        Ok(EXIT_OPTION) => MenuInput::Choice(MenuChoice::Exit),
        Ok(n) => SensorKind::from_menu_index(n)
            .map_or(MenuInput::OutOfRange(n), |k| MenuInput::Choice(MenuChoice::Run(k))),
        Err(_) => MenuInput::NotANumber(trimmed.to_string()),
    }
}

/// The numbered option list.
#[derive(Debug, Clone)]
pub struct Menu {
    pub vehicle: String,
}

impl Menu {
    pub fn new(vehicle: impl Into<String>) -> Self {
        Self {
            vehicle: vehicle.into(),
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\nWelcome to the Driverless Car Program ({})\n", self.vehicle)?;
        writeln!(out, "Please select a sensor to test:")?;
        for kind in SensorKind::ALL {
            writeln!(out, "{}. {}", kind.menu_index(), kind.label())?;
        }
        writeln!(out, "{EXIT_OPTION}. Exit\n")?;
        write!(out, "Enter your choice: ")?;
        out.flush()
    }
}

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitReason {
    ExitSelected,
    EndOfInput,
}

/// Counters for one interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub runs: u64,
    /// Numeric selections outside the menu range.
    pub rejected: u64,
    /// Lines that were not numbers at all.
    pub invalid_inputs: u64,
    pub exit: ExitReason,
}

/// Run the menu until the exit option or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    menu: &Menu,
    pipeline: &mut Pipeline,
    control: &mut Control,
    rng: &mut dyn RngCore,
) -> io::Result<SessionSummary> {
    let mut runs: u64 = 0;
    let mut rejected: u64 = 0;
    let mut invalid_inputs: u64 = 0;
    let mut line = String::new();

    let exit = loop {
        menu.render(out)?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break ExitReason::EndOfInput;
        }

        match parse_choice(&line) {
            MenuInput::Choice(MenuChoice::Exit) => break ExitReason::ExitSelected,
            MenuInput::Choice(MenuChoice::Run(kind)) => match pipeline.run(kind, rng) {
                Ok(outcome) => {
                    control.execute(&outcome.decision, out)?;
                    runs += 1;
                }
                Err(e) => error!("{}", e),
            },
            MenuInput::OutOfRange(n) => {
                error!(choice = n, "Invalid choice.");
                rejected += 1;
            }
            MenuInput::NotANumber(text) => {
                error!(input = %text, "Invalid choice. Please enter a number between 1 and {}.", EXIT_OPTION);
                invalid_inputs += 1;
            }
        }
    };

    info!(runs, rejected, invalid_inputs, exit = ?exit, "Session ended");
    Ok(SessionSummary {
        runs,
        rejected,
        invalid_inputs,
        exit,
    })
}
