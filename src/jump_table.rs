//! Bracket matching.
//!
//! The whole program is scanned once before execution. Every `[` is paired
//! with its `]` and both directions are recorded, so the machine can take a
//! loop branch in O(1) instead of rescanning the loop body.

use std::collections::HashMap;

use crate::error::{BracketKind, StructuralError};

/// Bidirectional map between matching loop markers.
///
/// For every key `i`, `partner(partner(i)) == Some(i)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpTable {
    partners: HashMap<usize, usize>,
}

impl JumpTable {
    /// Position of the marker paired with the one at `index`.
    pub fn partner(&self, index: usize) -> Option<usize> {
        self.partners.get(&index).copied()
    }

    /// Number of loop markers in the program (always even).
    pub fn len(&self) -> usize {
        self.partners.len()
    }

    /// `true` when the program has no loops.
    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    /// `(marker, partner)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.partners.iter().map(|(&from, &to)| (from, to))
    }

    fn link(&mut self, open: usize, close: usize) {
        self.partners.insert(open, close);
        self.partners.insert(close, open);
    }
}

/// Pair every `[` with its `]`.
///
/// An unmatched `]` is reported at the moment it is seen. An unmatched `[`
/// can only be known after the full scan; the innermost one still open is
/// reported. Characters other than the two markers are ignored.
pub fn build_jump_table(program: &[char]) -> Result<JumpTable, StructuralError> {
    let mut table = JumpTable::default();
    let mut open: Vec<usize> = Vec::new();

    for (i, &c) in program.iter().enumerate() {
        match c {
            '[' => open.push(i),
            ']' => {
                let Some(start) = open.pop() else {
                    return Err(StructuralError::UnmatchedBracket {
                        index: i,
                        kind: BracketKind::Close,
                    });
                };
                table.link(start, i);
            }
            _ => {}
        }
    }

    if let Some(&unmatched) = open.last() {
        return Err(StructuralError::UnmatchedBracket {
            index: unmatched,
            kind: BracketKind::Open,
        });
    }

    tracing::debug!(markers = table.len(), "jump table built");
    Ok(table)
}
