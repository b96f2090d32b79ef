//! Line-oriented console I/O seam.
//!
//! The display loop never touches `stdin`/`stdout` directly; everything goes
//! through the [`Console`] trait so tests can drive a menu with scripted
//! input and capture its output.

use std::io::{self, BufRead, Write};

/// Blocking, line-oriented console.
pub trait Console {
    /// Reads one line of input with the trailing newline stripped.
    ///
    /// Returns an error of kind [`io::ErrorKind::UnexpectedEof`] when the
    /// input source is exhausted, so a closed pipe terminates the loop
    /// instead of spinning on empty reads.
    fn read_line(&mut self) -> io::Result<String>;

    /// Writes text without a trailing newline and flushes (used for the
    /// selection prompt).
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Writes one line of text.
    fn print_line(&mut self, text: &str) -> io::Result<()>;
}

/// [`Console`] backed by the process's stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed while awaiting menu selection",
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    fn print_line(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()
    }
}
