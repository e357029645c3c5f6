//! Script - CSV command scripts and caller input parsing.
//!
//! A script is a CSV file with an `op,id` header. Each row is one step:
//!
//! ```text
//! op,id
//! add,0
//! add,1
//! bottom_to_top,
//! print,
//! remove,
//! ```

use std::io::{Read, Write};

use serde::Deserialize;

use crate::arena::{CardId, MAX_RESERVE};
use crate::command::{Command, Direction, OutputEvent};
use crate::engine::Engine;
use crate::error::DeckError;

/// One raw CSV row
#[derive(Debug, Deserialize)]
pub struct ScriptRow {
    pub op: String,
    pub id: Option<CardId>,
}

/// One parsed script step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Mutate the deck
    Apply(Command),
    /// Write the deck top to bottom
    PrintTopToBottom,
    /// Write the deck bottom to top
    PrintBottomToTop,
}

impl ScriptRow {
    /// Convert to a step; `row` is the 1-based data row used in errors.
    pub fn to_step(&self, row: usize) -> Result<Step, DeckError> {
        let step = match self.op.as_str() {
            "add" => match self.id {
                Some(id) => Step::Apply(Command::Add(id)),
                None => {
                    return Err(DeckError::MissingId {
                        row,
                        op: self.op.clone(),
                    })
                }
            },
            "remove" => Step::Apply(Command::Remove),
            "bottom_to_top" => Step::Apply(Command::Rotate(Direction::BottomToTop)),
            "top_to_bottom" => Step::Apply(Command::Rotate(Direction::TopToBottom)),
            "print" => Step::PrintTopToBottom,
            "print_reverse" => Step::PrintBottomToTop,
            _ => {
                return Err(DeckError::UnknownOp {
                    row,
                    op: self.op.clone(),
                })
            }
        };
        Ok(step)
    }
}

/// Parse a whole script. Stops at the first bad row.
pub fn read_script<R: Read>(reader: R) -> Result<Vec<Step>, DeckError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut steps = Vec::new();
    for (i, record) in rdr.deserialize::<ScriptRow>().enumerate() {
        let row = record?;
        steps.push(row.to_step(i + 1)?);
    }
    Ok(steps)
}

/// Apply `steps` in order, writing listings and removals to `out`.
pub fn run_script<W: Write>(
    engine: &mut Engine,
    steps: &[Step],
    out: &mut W,
) -> Result<(), DeckError> {
    for step in steps {
        match *step {
            Step::Apply(cmd) => match engine.process_command(cmd) {
                OutputEvent::Removed { id } => writeln!(out, "remove {}", id)?,
                OutputEvent::Rejected { command, .. } => {
                    writeln!(out, "{}: deck is empty", op_name(command))?
                }
                OutputEvent::Added { .. } | OutputEvent::Rotated { .. } => {}
            },
            Step::PrintTopToBottom => engine.deck.print_top_to_bottom(out)?,
            Step::PrintBottomToTop => engine.deck.print_bottom_to_top(out)?,
        }
    }
    Ok(())
}

fn op_name(command: Command) -> &'static str {
    match command {
        Command::Add(_) => "add",
        Command::Remove => "remove",
        Command::Rotate(Direction::BottomToTop) => "bottom_to_top",
        Command::Rotate(Direction::TopToBottom) => "top_to_bottom",
    }
}

// ============================================================================
// Input parsing
// ============================================================================

/// Parse a user-supplied card count. Surrounding whitespace is ignored.
///
/// Cards are numbered `0..count` as `CardId`s, so the count is capped at
/// `CardId::MAX`.
pub fn parse_count(input: &str) -> Result<u32, DeckError> {
    let trimmed = input.trim();
    trimmed
        .parse::<u32>()
        .ok()
        .filter(|&count| CardId::try_from(count).is_ok())
        .ok_or_else(|| DeckError::InvalidCount(trimmed.to_string()))
}

/// Parse a reservation size for a fresh deck, capped at `MAX_RESERVE`.
pub fn parse_capacity(input: &str) -> Result<u32, DeckError> {
    let trimmed = input.trim();
    trimmed
        .parse::<u32>()
        .ok()
        .filter(|&capacity| capacity <= MAX_RESERVE)
        .ok_or_else(|| DeckError::InvalidCapacity {
            input: trimmed.to_string(),
            max: MAX_RESERVE,
        })
}
