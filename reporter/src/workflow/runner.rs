use crate::generator::catalog::{filter_records, load_records, sample_outbreaks};
use crate::generator::profile::build_records;
use crate::workflow::config::{RecordSource, WorkflowConfig};
use anyhow::Context;
use log::{info, warn};
use outbreakcore::{GeneratedReport, OutbreakRecord, ReportAssembler, ReportResult};

/// A record the runner refused to report on.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub outbreak_id: String,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct WorkflowResult {
    pub considered: usize,
    pub reports: Vec<GeneratedReport>,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    fn assembler(&self) -> ReportAssembler {
        match self.config.seed {
            Some(seed) => ReportAssembler::seeded(seed),
            None => ReportAssembler::from_entropy(),
        }
    }

    /// Resolves the configured record source.
    pub fn load_records(&self) -> anyhow::Result<Vec<OutbreakRecord>> {
        match self.config.source() {
            RecordSource::Catalog => Ok(sample_outbreaks()),
            RecordSource::File(path) => load_records(path),
            RecordSource::Synthetic(generator) => {
                build_records(generator).context("generating synthetic outbreak records")
            }
        }
    }

    /// Filters, validates and assembles. Invalid records are skipped and
    /// reported back rather than failing the whole run.
    pub fn execute(&self, records: &[OutbreakRecord]) -> anyhow::Result<WorkflowResult> {
        let selected = filter_records(records, &self.config.filter);
        let mut assembler = self.assembler();
        let mut result = WorkflowResult {
            considered: selected.len(),
            ..Default::default()
        };

        for record in &selected {
            match assembler.generate_checked(record) {
                Ok(report) => result.reports.push(report),
                Err(err) => {
                    warn!("skipping outbreak {}: {}", record.id, err);
                    result.skipped.push(SkippedRecord {
                        outbreak_id: record.id.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        let metrics = assembler.metrics().snapshot();
        info!(
            "workflow finished: {} of {} records selected, {} reports, {} rejected ({:.0}%)",
            selected.len(),
            records.len(),
            metrics.generated,
            metrics.rejected,
            metrics.rejection_rate() * 100.0
        );
        Ok(result)
    }

    /// Single-record path used by the HTTP bridge.
    pub fn generate_one(&self, record: &OutbreakRecord) -> ReportResult<GeneratedReport> {
        self.assembler().generate_checked(record)
    }
}
