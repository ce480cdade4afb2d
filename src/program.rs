use std::fmt;

/// One decoded program position.
///
/// Only eight characters mean anything; every other character decodes to
/// [`Instruction::NoOp`] and is stepped over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    MoveRight,
    MoveLeft,
    Increment,
    Decrement,
    Output,
    Input,
    LoopStart,
    LoopEnd,
    NoOp(char),
}

impl Instruction {
    /// Map a source character to its instruction; anything unknown is a no-op.
    pub fn decode(c: char) -> Self {
        match c {
            '>' => Instruction::MoveRight,
            '<' => Instruction::MoveLeft,
            '+' => Instruction::Increment,
            '-' => Instruction::Decrement,
            '.' => Instruction::Output,
            ',' => Instruction::Input,
            '[' => Instruction::LoopStart,
            ']' => Instruction::LoopEnd,
            other => Instruction::NoOp(other),
        }
    }

    /// The source character this instruction was decoded from.
    pub fn as_char(self) -> char {
        match self {
            Instruction::MoveRight => '>',
            Instruction::MoveLeft => '<',
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::Output => '.',
            Instruction::Input => ',',
            Instruction::LoopStart => '[',
            Instruction::LoopEnd => ']',
            Instruction::NoOp(c) => c,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Program text, trimmed and split into characters.
///
/// Positions are character indices, which is what the jump table and the
/// program counter refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    chars: Vec<char>,
}

impl Program {
    /// Build a program from raw source, stripping leading and trailing whitespace.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.trim().chars().collect(),
        }
    }

    /// The program as characters, indexed by program counter.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters; the run halts when the program counter reaches it.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when the source was blank after trimming.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Decoded instruction at `pc`, or `None` once the program has halted.
    pub fn instruction(&self, pc: usize) -> Option<Instruction> {
        self.chars.get(pc).copied().map(Instruction::decode)
    }
}

impl From<&str> for Program {
    fn from(source: &str) -> Self {
        Program::new(source)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
