//! Output Emitter
//!
//! Abstraction for output production during rendering.
//! Supports string building for in-memory rendering and streaming to any
//! `io::Write` sink.

use std::io::{self, Write};

/// Trait for emitting rendered output.
///
/// The renderer writes to an emitter line by line. Different implementations
/// support in-memory strings, streams, or other destinations.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a single character.
    fn emit_char(&mut self, c: char);

    /// Emit `count` copies of `fill`.
    fn emit_fill(&mut self, fill: char, count: usize) {
        for _ in 0..count {
            self.emit_char(fill);
        }
    }

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self) {
        self.emit_char('\n');
    }
}

/// String-based emitter for in-memory rendering.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_char(&mut self, c: char) {
        self.buffer.push(c);
    }

    fn emit_fill(&mut self, fill: char, count: usize) {
        self.buffer.extend(std::iter::repeat(fill).take(count));
    }
}

/// Streaming emitter over any writer.
///
/// Writes go straight to the underlying writer. The first I/O error is kept
/// and every later write is skipped; `finish` reports it.
pub struct WriterEmitter<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> WriterEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write_all(bytes) {
            self.error = Some(err);
        }
    }

    /// Flush the writer and return the first error that occurred.
    ///
    /// # Errors
    ///
    /// Returns the first write error, or the flush error if writes succeeded.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Emitter for WriterEmitter<W> {
    fn emit(&mut self, text: &str) {
        self.write(text.as_bytes());
    }

    fn emit_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        let encoded = c.encode_utf8(&mut buf);
        self.write(encoded.as_bytes());
    }
}

#[cfg(test)]
mod tests;
