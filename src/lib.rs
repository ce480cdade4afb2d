//! A small Brainfuck virtual machine.
//!
//! Running a program happens in two phases:
//! - the loop matcher ([`build_jump_table`]) pairs every `[` with its `]`
//!   before anything executes, rejecting unbalanced programs;
//! - the tape machine ([`execute`] / [`Machine`]) then steps through the
//!   program using that table for O(1) loop branches.
//!
//! Behaviors:
//! - The tape starts as a single zero cell and grows one cell at a time as
//!   the pointer moves right past its end.
//! - Cells are bytes; `+` and `-` wrap modulo 256.
//! - Moving left of cell 0 is a runtime error.
//! - `,` reads a whole line and keeps only its first character; end of input
//!   or an empty line stores 0.
//! - `.` writes the cell as a character and flushes immediately.
//! - Characters other than `><+-.,[]` are ignored.
//!
//! Quick start:
//!
//! ```
//! use std::io::empty;
//!
//! let mut out = Vec::new();
//! let tape = bf_tape::run_source("++++++++[>++++++++<-]>+.", empty(), &mut out).unwrap();
//! assert_eq!(out, b"A");
//! assert_eq!(tape.cells(), &[0, 65]);
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod jump_table;
pub mod machine;
pub mod program;
pub mod tape;
pub mod trace;

pub use error::{BracketKind, Error, RuntimeError, StructuralError};
pub use io::{InputSource, OutputSink};
pub use jump_table::{build_jump_table, JumpTable};
pub use machine::{execute, ExecutionState, Machine};
pub use program::{Instruction, Program};
pub use tape::Tape;
pub use trace::{Action, Step, StepObserver, TraceTable};

/// Trim, validate and run `source`, returning the final tape.
pub fn run_source<I, O>(source: &str, input: I, output: O) -> Result<Tape, Error>
where
    I: InputSource,
    O: OutputSink,
{
    let program = Program::new(source);
    let jumps = build_jump_table(program.chars())?;
    let tape = Machine::new(&program, &jumps, input, output).run()?;
    Ok(tape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{empty, Cursor};

    #[test]
    fn unbalanced_program_fails_before_any_output() {
        let mut out = Vec::new();
        let err = run_source(".[", empty(), &mut out).unwrap_err();
        assert!(matches!(
            err,
            Error::Structural(StructuralError::UnmatchedBracket { kind: BracketKind::Open, .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn stray_close_bracket_fails_before_any_output() {
        let mut out = Vec::new();
        let err = run_source("+.]", empty(), &mut out).unwrap_err();
        assert_eq!(err.position(), 2);
        assert!(out.is_empty());
    }

    #[test]
    fn runtime_errors_pass_through() {
        let err = run_source("<", empty(), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Runtime(RuntimeError::PointerUnderflow { ip: 0 })));
    }

    #[test]
    fn surrounding_whitespace_is_not_part_of_the_program() {
        let mut out = Vec::new();
        run_source("\n\t,.\n\n", Cursor::new("Z\n"), &mut out).unwrap();
        assert_eq!(out, b"Z");
    }

    #[test]
    fn machines_do_not_share_state() {
        let a = run_source("+++>+", empty(), Vec::new()).unwrap();
        let b = run_source("+", empty(), Vec::new()).unwrap();
        assert_eq!(a.cells(), &[3, 1]);
        assert_eq!(b.cells(), &[1]);
    }
}
