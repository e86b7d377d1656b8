#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;

#[test]
fn string_emitter_basic() {
    let mut emitter = StringEmitter::new();
    emitter.emit("hello").unwrap();
    emitter.emit(" ").unwrap();
    emitter.emit("world").unwrap();
    assert_eq!(emitter.output(), "hello world");
}

#[test]
fn string_emitter_with_capacity() {
    let emitter = StringEmitter::with_capacity(1024);
    assert!(emitter.is_empty());
    assert_eq!(emitter.len(), 0);
}

#[test]
fn string_emitter_as_str() {
    let mut emitter = StringEmitter::new();
    emitter.emit("abc").unwrap();
    assert_eq!(emitter.as_str(), "abc");
    assert_eq!(emitter.len(), 3);
}

#[test]
fn io_emitter_writes_bytes() {
    let mut emitter = IoEmitter::new(Vec::new());
    emitter.emit("line1\n").unwrap();
    emitter.emit("line2").unwrap();
    let bytes = emitter.finish().unwrap();
    assert_eq!(bytes, b"line1\nline2");
}

#[test]
fn fmt_emitter_appends_to_existing_text() {
    let mut out = String::from("// header\n");
    {
        let mut emitter = FmtEmitter::new(&mut out);
        emitter.emit("body").unwrap();
        emitter.flush().unwrap();
    }
    assert_eq!(out, "// header\nbody");
}

struct FailingSink;

impl io::Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

#[test]
fn io_emitter_surfaces_errors_on_flush() {
    let mut emitter = IoEmitter::new(FailingSink);
    // Small writes stay in the buffer.
    emitter.emit("x").unwrap();
    assert!(matches!(emitter.flush(), Err(crate::RenderError::Io(_))));
}
