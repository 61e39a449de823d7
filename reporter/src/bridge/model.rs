use outbreakcore::{GeneratedReport, OutbreakRecord};
use serde::{Deserialize, Serialize};

/// State shared between the HTTP handlers.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BridgeState {
    pub outbreaks: Vec<OutbreakRecord>,
    pub latest: Option<GeneratedReport>,
    pub reports_served: usize,
}

impl BridgeState {
    pub fn new(outbreaks: Vec<OutbreakRecord>) -> Self {
        Self {
            outbreaks,
            latest: None,
            reports_served: 0,
        }
    }

    pub fn outbreak(&self, id: &str) -> Option<&OutbreakRecord> {
        self.outbreaks.iter().find(|record| record.id == id)
    }

    pub fn record_report(&mut self, report: GeneratedReport) {
        self.reports_served += 1;
        self.latest = Some(report);
    }
}
