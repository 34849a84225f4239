//! Console Logger
//!
//! `log` backend for WASM frontends. Records go to the browser console and the
//! most recent ones are kept in a bounded buffer so they can be dumped later.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

/// Circular buffer of formatted log lines
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a line, evicting the oldest once full
    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Logger writing to `console.*` and remembering recent lines
pub struct ConsoleLogger {
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    /// Recent formatted records, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|buffer| buffer.snapshot())
            .unwrap_or_default()
    }
}

/// `[LEVEL target] message`
pub fn format_record(record: &Record) -> String {
    format!("[{} {}] {}", record.level(), record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        write_console(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

// Native builds (unit tests) have no console to write to.
#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, _line: &str) {}

static LOGGER: std::sync::OnceLock<ConsoleLogger> = std::sync::OnceLock::new();

/// Install the global logger. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    // Filtering is left to `log::max_level` so `set_level` can change it later
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(LevelFilter::Trace, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Change the level of the global logger
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Records captured by the global logger; empty before `init`
pub fn recent() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}
