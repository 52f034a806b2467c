//! Output channel for program output, trace lines and fatal reports.
//!
//! Every line the interpreter emits goes through [`PrintHandlerImpl::println`]:
//! `=` values, `stack` dumps, `-x` trace lines and the fatal report. The
//! `ssps` binary prints to stdout; tests capture into a buffer and compare
//! the text.

use std::sync::Arc;

use parking_lot::Mutex;

/// Line buffer shared between the interpreter and a reader.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, line: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(line);
        buf.push('\n');
    }

    /// Everything printed so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }
}

/// Where output lines go. Enum dispatch: one match per line.
pub enum PrintHandlerImpl {
    Stdout,
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Buffer(h) => h.println(line),
        }
    }

    /// Captured output; stdout captures nothing.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout => String::new(),
            Self::Buffer(h) => h.get_output(),
        }
    }
}

/// Handle shared between the interpreter and whoever reads its output.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}
