//! Per-step observation of a running machine.
//!
//! Observers see each instruction after its effect has been applied. They
//! cannot change what the machine does next.

use std::fmt;
use std::io::Write;

use crate::program::Instruction;

/// What an executed instruction did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Moved { to: usize },
    Changed { from: u8, to: u8 },
    Emitted(u8),
    /// `None` means input was exhausted (or the line was empty) and the cell was zeroed.
    Read(Option<char>),
    JumpedForward { to: usize },
    JumpedBack { to: usize },
    EnteredLoop,
    ExitedLoop,
    Skipped,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Moved { to } => write!(f, "Moved pointer head to index {to}"),
            Action::Changed { from, to } => write!(f, "Cell changed from {from} to {to}"),
            Action::Emitted(b) => write!(f, "Output byte {b} ({:?})", *b as char),
            Action::Read(Some(c)) => write!(f, "Read {c:?} -> {}", *c as u32),
            Action::Read(None) => write!(f, "Read nothing; cell set to 0"),
            Action::JumpedForward { to } => {
                write!(f, "Cell is 0; jump forward to matching ']' at IP {to}")
            }
            Action::JumpedBack { to } => {
                write!(f, "Cell != 0; jump back to matching '[' at IP {to}")
            }
            Action::EnteredLoop => write!(f, "Enter loop (cell != 0)"),
            Action::ExitedLoop => write!(f, "Exit loop (cell is 0)"),
            Action::Skipped => write!(f, "No-op"),
        }
    }
}

/// One executed instruction, as seen from outside the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Zero-based count of instructions executed before this one.
    pub number: u64,
    /// Program counter of the instruction, before any jump.
    pub ip: usize,
    /// Data pointer before the instruction ran.
    pub ptr: usize,
    /// Value of the cell under `ptr` before the instruction ran.
    pub cell: u8,
    pub instruction: Instruction,
    pub action: Action,
}

/// Receives every executed instruction of a run.
///
/// Any `FnMut(&Step)` closure is an observer.
pub trait StepObserver {
    /// Called once per instruction, after its effect is applied.
    fn on_step(&mut self, step: &Step);
}

impl<F: FnMut(&Step)> StepObserver for F {
    fn on_step(&mut self, step: &Step) {
        self(step)
    }
}

/// Prints a step-by-step table of the run.
pub struct TraceTable<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> TraceTable<W> {
    /// Write rows to `out`; the header goes out with the first row.
    pub fn new(out: W) -> Self {
        Self { out, header_written: false }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_row(&mut self, step: &Step) -> std::io::Result<()> {
        if !self.header_written {
            writeln!(self.out, "STEP | IP  | PTR | CELL | INSTR | ACTION")?;
            writeln!(self.out, "-----+-----+-----+------+-------+{}", "-".repeat(48))?;
            self.header_written = true;
        }
        let instr = match step.instruction {
            Instruction::NoOp(c) if c.is_control() => ' ',
            other => other.as_char(),
        };
        writeln!(
            self.out,
            "{:<4} | {:<3} | {:<3} | {:<4} |  {}    | {}",
            step.number, step.ip, step.ptr, step.cell, instr, step.action
        )
    }
}

impl<W: Write> StepObserver for TraceTable<W> {
    fn on_step(&mut self, step: &Step) {
        // A failed write does not abort the run.
        if let Err(e) = self.write_row(step) {
            tracing::warn!(error = %e, "failed to write trace row");
        }
    }
}
