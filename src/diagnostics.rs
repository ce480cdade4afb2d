use std::io::{self, IsTerminal, Write};

use nu_ansi_term::{Color, Style};

use crate::error::{Error, RuntimeError, StructuralError};

/// Characters of source shown on each side of the error position.
const WINDOW_CHARS: usize = 32;

/// One-line summary of `err`, prefixed with `program` when given.
pub fn headline(program: Option<&str>, err: &Error) -> String {
    let msg = match err {
        Error::Structural(StructuralError::UnmatchedBracket { kind, .. }) => {
            format!("Parse error: unmatched bracket {kind}")
        }
        Error::Runtime(RuntimeError::PointerUnderflow { .. }) => {
            "Runtime error: pointer moved left of cell 0".to_string()
        }
        Error::Runtime(RuntimeError::InputNotByte { ch, .. }) => {
            format!("Runtime error: input character {ch:?} does not fit in a cell")
        }
        Error::Runtime(RuntimeError::MissingPartner { .. }) => {
            "Runtime error: no matching bracket in the jump table".to_string()
        }
        Error::Runtime(RuntimeError::PointerOutsideTape { ptr, len, .. }) => {
            format!("Runtime error: pointer {ptr} is outside the tape of {len} cells")
        }
        Error::Runtime(RuntimeError::Input { source, .. }) => {
            format!("I/O error reading input: {source}")
        }
        Error::Runtime(RuntimeError::Output { source, .. }) => {
            format!("I/O error writing output: {source}")
        }
    };
    match program {
        Some(p) => format!("{p}: {msg} at instruction {}", err.position()),
        None => format!("{msg} at instruction {}", err.position()),
    }
}

/// Render `err` with a window of `code` and a caret under the offending position.
pub fn render(program: Option<&str>, code: &str, err: &Error, color: bool) -> String {
    let pos = err.position();
    let total_chars = code.chars().count();
    let start_char = pos.saturating_sub(WINDOW_CHARS);
    let end_char = (pos + WINDOW_CHARS + 1).min(total_chars);

    let window: String = code
        .chars()
        .skip(start_char)
        .take(end_char.saturating_sub(start_char))
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let caret = format!("{}^", " ".repeat(pos.saturating_sub(start_char)));

    let (head_style, caret_style) = if color {
        (Style::new().fg(Color::Red).bold(), Style::new().fg(Color::Yellow).bold())
    } else {
        (Style::new(), Style::new())
    };

    format!(
        "{}\n  {}\n  {}\n",
        head_style.paint(headline(program, err)),
        window,
        caret_style.paint(caret)
    )
}

/// Print `err` to stderr, colored when stderr is a terminal.
pub fn print_error(program: Option<&str>, code: &str, err: &Error) {
    let stderr = io::stderr();
    let color = stderr.is_terminal();
    let mut handle = stderr.lock();
    let _ = handle.write_all(render(program, code, err, color).as_bytes());
    let _ = handle.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BracketKind;

    fn unmatched(index: usize, kind: BracketKind) -> Error {
        StructuralError::UnmatchedBracket { index, kind }.into()
    }

    #[test]
    fn headline_names_program_and_position() {
        let err = unmatched(3, BracketKind::Close);
        assert_eq!(
            headline(Some("bf-tape"), &err),
            "bf-tape: Parse error: unmatched bracket ']' at instruction 3"
        );
    }

    #[test]
    fn caret_sits_under_the_offending_character() {
        let err = unmatched(2, BracketKind::Open);
        let text = render(None, "++[+", &err, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "  ++[+");
        assert_eq!(lines[2], "    ^");
    }

    #[test]
    fn long_programs_are_windowed() {
        let code = format!("{}<{}", "+".repeat(100), "+".repeat(100));
        let err: Error = RuntimeError::PointerUnderflow { ip: 100 }.into();
        let text = render(None, &code, &err, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1].trim().chars().count(), 2 * WINDOW_CHARS + 1);
        assert_eq!(lines[2].trim_start().len(), 1);
        assert_eq!(lines[2].len(), 2 + WINDOW_CHARS + 1);
    }

    #[test]
    fn missing_partner_is_rendered_as_a_runtime_error() {
        let err: Error = RuntimeError::MissingPartner { ip: 1 }.into();
        assert_eq!(
            headline(None, &err),
            "Runtime error: no matching bracket in the jump table at instruction 1"
        );
    }

    #[test]
    fn pointer_outside_the_tape_names_pointer_and_length() {
        let err: Error = RuntimeError::PointerOutsideTape { ip: 0, ptr: 5, len: 1 }.into();
        assert_eq!(
            headline(Some("bf-tape"), &err),
            "bf-tape: Runtime error: pointer 5 is outside the tape of 1 cells at instruction 0"
        );
    }

    #[test]
    fn plain_rendering_has_no_escape_codes() {
        let err = unmatched(0, BracketKind::Open);
        assert!(!render(None, "[", &err, false).contains('\u{1b}'));
        assert!(render(None, "[", &err, true).contains('\u{1b}'));
    }
}
