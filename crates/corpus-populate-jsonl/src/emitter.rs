//! Line emitter: writes generated lines with their terminators.

use corpus_generator::GeneratedLine;
use std::io::{self, Write};

/// Writes lines in order, each followed by its chosen terminator.
///
/// When `final_newline` is false the last line is written without any
/// terminator bytes.
pub struct LineEmitter<W: Write> {
    writer: W,
    final_newline: bool,
    bytes_written: u64,
    lines_written: u64,
}

impl<W: Write> LineEmitter<W> {
    pub fn new(writer: W, final_newline: bool) -> Self {
        Self {
            writer,
            final_newline,
            bytes_written: 0,
            lines_written: 0,
        }
    }

    /// Write one line and, unless suppressed, its terminator.
    pub fn emit(&mut self, line: &GeneratedLine) -> io::Result<()> {
        line.content.write_to(&mut self.writer)?;
        self.bytes_written += line.content.byte_len();

        if !line.is_last || self.final_newline {
            let terminator = line.terminator.as_bytes();
            self.writer.write_all(terminator)?;
            self.bytes_written += terminator.len() as u64;
        }
        self.lines_written += 1;
        Ok(())
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
