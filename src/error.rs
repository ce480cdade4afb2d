use std::fmt;
use std::io;

/// Which side of a loop was left without a partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Open,
    Close,
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketKind::Open => write!(f, "'['"),
            BracketKind::Close => write!(f, "']'"),
        }
    }
}

/// The program's loop markers do not pair up.
///
/// Both an unmatched `[` and an unmatched `]` surface as this one error;
/// `kind` tells them apart for reporting only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("Unmatched bracket {kind} at instruction {index}")]
    UnmatchedBracket { index: usize, kind: BracketKind },
}

impl StructuralError {
    /// Position of the offending marker in the program.
    pub fn index(&self) -> usize {
        match self {
            StructuralError::UnmatchedBracket { index, .. } => *index,
        }
    }
}

/// Errors raised while the tape machine is running.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// `<` was executed with the data pointer already at cell 0.
    #[error("Pointer moved below cell 0 at instruction {ip}")]
    PointerUnderflow { ip: usize },

    /// `,` read a character that does not fit in a cell.
    #[error("Input character {ch:?} does not fit in a cell at instruction {ip}")]
    InputNotByte { ip: usize, ch: char },

    /// A loop marker has no entry in the jump table, so the table was not
    /// built from the program being run.
    #[error("No matching bracket recorded for instruction {ip}")]
    MissingPartner { ip: usize },

    /// The caller-supplied state points at a cell the tape does not have.
    #[error("Data pointer {ptr} is outside the tape of {len} cells at instruction {ip}")]
    PointerOutsideTape { ip: usize, ptr: usize, len: usize },

    #[error("I/O error reading input at instruction {ip}: {source}")]
    Input {
        ip: usize,
        #[source]
        source: io::Error,
    },

    #[error("I/O error writing output at instruction {ip}: {source}")]
    Output {
        ip: usize,
        #[source]
        source: io::Error,
    },
}

impl RuntimeError {
    /// Instruction index at which the run stopped.
    pub fn ip(&self) -> usize {
        match self {
            RuntimeError::PointerUnderflow { ip }
            | RuntimeError::InputNotByte { ip, .. }
            | RuntimeError::MissingPartner { ip }
            | RuntimeError::PointerOutsideTape { ip, .. }
            | RuntimeError::Input { ip, .. }
            | RuntimeError::Output { ip, .. } => *ip,
        }
    }
}

/// Anything that can stop a program from loading or running.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Program position the error points at.
    pub fn position(&self) -> usize {
        match self {
            Error::Structural(e) => e.index(),
            Error::Runtime(e) => e.ip(),
        }
    }
}
