//! The tape machine.
//!
//! A run walks the program one character at a time. Loop branches go through
//! the precomputed [`JumpTable`]: `[` on a zero cell lands on its `]`, `]` on
//! a non-zero cell lands on its `[`, and the usual +1 advance after every
//! instruction does the rest.

use crate::error::RuntimeError;
use crate::io::{InputSource, OutputSink};
use crate::jump_table::JumpTable;
use crate::program::{Instruction, Program};
use crate::tape::Tape;
use crate::trace::{Action, Step, StepObserver};

/// Program counter, data pointer and tape of one run.
///
/// Fields are public so a host can resume or inspect a run; a data pointer
/// outside the tape is rejected when the run starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionState {
    /// Index of the next instruction to execute.
    pub pc: usize,
    /// Index of the current cell.
    pub dp: usize,
    /// Memory, at least `dp + 1` cells long.
    pub tape: Tape,
}

impl ExecutionState {
    /// Program counter and data pointer at 0, tape holding one zero cell.
    pub fn new() -> Self {
        Self::default()
    }

    fn current(&self) -> u8 {
        self.tape.cell(self.dp)
    }
}

/// Run `program` to completion.
///
/// `jump_table` must be the table built from this same program; a loop
/// marker missing from it stops the run with [`RuntimeError::MissingPartner`].
pub fn execute<I, O>(
    program: &Program,
    jump_table: &JumpTable,
    input: I,
    output: O,
) -> Result<(), RuntimeError>
where
    I: InputSource,
    O: OutputSink,
{
    Machine::new(program, jump_table, input, output).run().map(|_| ())
}

/// A single run of a program, with its I/O and an optional step observer.
pub struct Machine<'a, I, O> {
    program: &'a Program,
    jumps: &'a JumpTable,
    input: I,
    output: O,
    observer: Option<Box<dyn StepObserver + 'a>>,
}

impl<'a, I, O> Machine<'a, I, O>
where
    I: InputSource,
    O: OutputSink,
{
    /// Prepare a run of `program`; nothing executes until [`Machine::run`].
    pub fn new(program: &'a Program, jumps: &'a JumpTable, input: I, output: O) -> Self {
        Self {
            program,
            jumps,
            input,
            output,
            observer: None,
        }
    }

    /// Report every executed instruction to `observer`.
    pub fn with_observer<S: StepObserver + 'a>(mut self, observer: S) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Execute until the program counter runs off the end and return the final tape.
    pub fn run(mut self) -> Result<Tape, RuntimeError> {
        let mut state = ExecutionState::new();
        let steps = self.run_with_state(&mut state)?;
        tracing::debug!(steps, tape_len = state.tape.len(), "run halted");
        Ok(state.tape)
    }

    /// Execute against caller-owned state, returning the number of steps taken.
    pub fn run_with_state(&mut self, state: &mut ExecutionState) -> Result<u64, RuntimeError> {
        tracing::debug!(len = self.program.len(), pc = state.pc, dp = state.dp, "run started");
        if state.dp >= state.tape.len() {
            return Err(RuntimeError::PointerOutsideTape {
                ip: state.pc,
                ptr: state.dp,
                len: state.tape.len(),
            });
        }
        let mut steps: u64 = 0;

        while let Some(instruction) = self.program.instruction(state.pc) {
            let ip = state.pc;
            let (ptr, cell) = (state.dp, state.current());
            let action = self.step(state, instruction)?;

            tracing::trace!(step = steps, ip, ptr, cell, %instruction, "step");
            if let Some(observer) = self.observer.as_mut() {
                observer.on_step(&Step {
                    number: steps,
                    ip,
                    ptr,
                    cell,
                    instruction,
                    action,
                });
            }

            steps += 1;
            state.pc += 1;
        }

        Ok(steps)
    }

    fn step(
        &mut self,
        state: &mut ExecutionState,
        instruction: Instruction,
    ) -> Result<Action, RuntimeError> {
        let ip = state.pc;
        let action = match instruction {
            Instruction::MoveRight => {
                let next = state.dp + 1;
                // The pointer never outruns the tape by more than one cell.
                let grown = state.tape.ensure(next);
                debug_assert!(grown, "pointer skipped past the tape end");
                state.dp = next;
                Action::Moved { to: next }
            }
            Instruction::MoveLeft => {
                let Some(prev) = state.dp.checked_sub(1) else {
                    return Err(RuntimeError::PointerUnderflow { ip });
                };
                state.dp = prev;
                Action::Moved { to: prev }
            }
            Instruction::Increment => {
                let from = state.current();
                let to = state.tape.increment(state.dp);
                Action::Changed { from, to }
            }
            Instruction::Decrement => {
                let from = state.current();
                let to = state.tape.decrement(state.dp);
                Action::Changed { from, to }
            }
            Instruction::Output => {
                let byte = state.current();
                self.output
                    .emit(byte as char)
                    .map_err(|source| RuntimeError::Output { ip, source })?;
                Action::Emitted(byte)
            }
            Instruction::Input => {
                let line = self
                    .input
                    .next_line()
                    .map_err(|source| RuntimeError::Input { ip, source })?;
                let first = line.and_then(|l| l.chars().next());
                let value = match first {
                    Some(ch) => {
                        u8::try_from(ch).map_err(|_| RuntimeError::InputNotByte { ip, ch })?
                    }
                    None => 0,
                };
                state.tape.set(state.dp, value);
                Action::Read(first)
            }
            Instruction::LoopStart => {
                if state.current() == 0 {
                    let to = self.partner(ip)?;
                    state.pc = to;
                    Action::JumpedForward { to }
                } else {
                    Action::EnteredLoop
                }
            }
            Instruction::LoopEnd => {
                if state.current() != 0 {
                    let to = self.partner(ip)?;
                    state.pc = to;
                    Action::JumpedBack { to }
                } else {
                    Action::ExitedLoop
                }
            }
            Instruction::NoOp(_) => Action::Skipped,
        };
        Ok(action)
    }

    fn partner(&self, ip: usize) -> Result<usize, RuntimeError> {
        self.jumps
            .partner(ip)
            .ok_or(RuntimeError::MissingPartner { ip })
    }
}
