//! `tracing` output routed to the browser console.
//!
//! The subscriber is the ordinary `tracing_subscriber::fmt` one; only the
//! writer differs. Each event is buffered and handed to the console method
//! matching its level once the formatter drops the writer.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Console method an event is emitted through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl ConsoleMethod {
    pub fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            _ => ConsoleMethod::Debug,
        }
    }

    fn emit(self, line: &str) {
        let value = wasm_bindgen::JsValue::from_str(line);
        match self {
            ConsoleMethod::Error => web_sys::console::error_1(&value),
            ConsoleMethod::Warn => web_sys::console::warn_1(&value),
            ConsoleMethod::Info => web_sys::console::info_1(&value),
            ConsoleMethod::Debug => web_sys::console::debug_1(&value),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(meta.level()))
    }
}

/// Collects one formatted event; flushed to the console on drop.
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buf: Vec::new(),
        }
    }

    /// Buffered text without the formatter's trailing newline.
    fn pending_line(&self) -> String {
        String::from_utf8_lossy(&self.buf)
            .trim_end_matches('\n')
            .to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = self.pending_line();
        self.method.emit(&line);
    }
}

/// Install the console subscriber. Later calls are no-ops.
pub fn init(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_level_to_console_method() {
        assert_eq!(ConsoleMethod::for_level(&Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(&Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(&Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::for_level(&Level::DEBUG), ConsoleMethod::Debug);
        assert_eq!(ConsoleMethod::for_level(&Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn test_writer_buffers_whole_event() {
        let mut writer = ConsoleWriter::new(ConsoleMethod::Info);
        writer.write_all(b" INFO gematria_ui: ").unwrap();
        writer.write_all(b"history loaded\n").unwrap();
        assert_eq!(writer.pending_line(), " INFO gematria_ui: history loaded");
        // Dropping a non-empty writer would call into the browser console.
        writer.buf.clear();
    }
}
