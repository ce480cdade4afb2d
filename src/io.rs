//! The machine's two doors to the outside world.
//!
//! `,` pulls a line from an [`InputSource`] and `.` pushes a character into
//! an [`OutputSink`]. Both are implemented for the std I/O traits, so stdin,
//! stdout, `Cursor`s and `Vec<u8>` all plug in directly.

use std::io::{self, BufRead, Write};

/// Line-oriented input consulted once per `,`.
pub trait InputSource {
    /// The next line with its terminator removed, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> InputSource for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Character sink fed by `.`.
pub trait OutputSink {
    /// Write one character; it must be visible before this returns.
    fn emit(&mut self, c: char) -> io::Result<()>;
}

impl<W: Write> OutputSink for W {
    fn emit(&mut self, c: char) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.write_all(c.encode_utf8(&mut buf).as_bytes())?;
        self.flush()
    }
}
