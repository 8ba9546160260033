#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

#[test]
fn string_emitter_basic() {
    let mut emitter = StringEmitter::new();
    emitter.emit("+");
    emitter.emit_fill('-', 3);
    emitter.emit_char('+');
    emitter.emit_newline();
    assert_eq!(emitter.output(), "+---+\n");
}

#[test]
fn string_emitter_zero_fill() {
    let mut emitter = StringEmitter::new();
    emitter.emit_fill('=', 0);
    assert_eq!(emitter.output(), "");
}

#[test]
fn string_emitter_with_capacity() {
    let mut emitter = StringEmitter::with_capacity(1024);
    emitter.emit("+-+");
    assert_eq!(emitter.output(), "+-+");
}

#[test]
fn writer_emitter_streams_bytes() {
    let mut emitter = WriterEmitter::new(Vec::new());
    emitter.emit("|");
    emitter.emit_fill(' ', 2);
    emitter.emit_char('x');
    emitter.emit_newline();
    let bytes = emitter.finish().unwrap();
    assert_eq!(bytes, b"|  x\n");
}

struct FailingWriter {
    attempts: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        self.attempts += 1;
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn writer_emitter_keeps_first_error() {
    let mut emitter = WriterEmitter::new(FailingWriter { attempts: 0 });
    emitter.emit("a");
    emitter.emit("b");
    emitter.emit_newline();

    assert_eq!(emitter.writer.attempts, 1);
    let err = emitter.finish().err().unwrap();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}
