use log::{info, warn};

const TARGET: &str = "outbreakcore";

/// Thin wrapper so every assembler logs under the same target.
#[derive(Debug, Default)]
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }

    pub fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
}
