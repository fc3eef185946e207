//! Script-facing logging forwarded to the host

use crate::port::{EnginePort, LogLevel};
use std::sync::Arc;

/// Sends script log lines across the boundary.
///
/// Transport and formatting are the host's concern; this facade only
/// carries the text and its severity.
pub struct Log {
    port: Arc<dyn EnginePort>,
}

impl Log {
    pub fn new(port: Arc<dyn EnginePort>) -> Self {
        Self { port }
    }

    pub fn info(&self, message: &str) {
        self.port.log(LogLevel::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.port.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.port.log(LogLevel::Error, message);
    }
}
