use std::sync::{Mutex, PoisonError};

/// Point-in-time copy of the assembler counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub generated: usize,
    pub rejected: usize,
}

impl MetricsSnapshot {
    pub fn attempted(&self) -> usize {
        self.generated + self.rejected
    }

    /// Share of attempted records that failed validation; 0.0 before any
    /// attempt.
    pub fn rejection_rate(&self) -> f64 {
        match self.attempted() {
            0 => 0.0,
            attempted => self.rejected as f64 / attempted as f64,
        }
    }
}

/// Counts reports produced and records turned away.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_generated(&self) {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).generated += 1;
    }

    pub fn record_rejected(&self) {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).rejected += 1;
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
