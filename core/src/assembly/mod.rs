//! Report assembly: one builder per report section, driven by
//! [`ReportAssembler`].

pub mod epidemiology;
pub mod projections;
pub mod response;
pub mod situation;

pub use epidemiology::{EpidemiologyBuilder, SamplingRanges};
pub use projections::ProjectionBuilder;
pub use response::ResponseBuilder;
pub use situation::SituationBuilder;

use crate::math::confidence;
use crate::model::{GeneratedReport, OutbreakRecord, OutbreakStatus, ReportBody};
use crate::prelude::{ReportResult, SectionBuilder};
use crate::telemetry::{LogManager, MetricsRecorder};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

pub fn report_id(outbreak_id: &str, generated_at: DateTime<Utc>) -> String {
    format!("RPT-{}-{}", outbreak_id, generated_at.timestamp_millis())
}

pub fn data_quality(status: OutbreakStatus) -> &'static str {
    match status {
        OutbreakStatus::Active => "High",
        OutbreakStatus::Contained | OutbreakStatus::Resolved => "Medium",
    }
}

/// Turns outbreak records into generated reports.
///
/// The assembler owns its random source. Seed it with [`ReportAssembler::seeded`]
/// when the sampled epidemiology fields have to be reproducible.
pub struct ReportAssembler<R: RngCore = StdRng> {
    rng: R,
    situation: SituationBuilder,
    epidemiology: EpidemiologyBuilder,
    response: ResponseBuilder,
    projections: ProjectionBuilder,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl ReportAssembler<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: RngCore> ReportAssembler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            situation: SituationBuilder,
            epidemiology: EpidemiologyBuilder::default(),
            response: ResponseBuilder,
            projections: ProjectionBuilder,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn with_sampling(mut self, ranges: SamplingRanges) -> Self {
        self.epidemiology = EpidemiologyBuilder::new(ranges);
        self
    }

    pub fn generate(&mut self, record: &OutbreakRecord) -> GeneratedReport {
        self.generate_at(record, Utc::now())
    }

    pub fn generate_at(
        &mut self,
        record: &OutbreakRecord,
        generated_at: DateTime<Utc>,
    ) -> GeneratedReport {
        let rng: &mut dyn RngCore = &mut self.rng;
        let body = ReportBody {
            situation_assessment: self.situation.build(record, rng),
            epidemiological_analysis: self.epidemiology.build(record, rng),
            response_recommendations: self.response.build(record, rng),
            risk_projections: self.projections.build(record, rng),
            confidence: confidence(record.risk_score),
            data_quality: data_quality(record.status).to_string(),
        };

        let report = GeneratedReport {
            id: report_id(&record.id, generated_at),
            outbreak_id: record.id.clone(),
            generated_at,
            report: body,
        };

        self.metrics.record_generated();
        self.logger.record(&format!(
            "generated {} for {} ({}, confidence {})",
            report.id, record.virus_name, record.status, report.report.confidence
        ));
        report
    }

    /// Validates the record before assembling; malformed records are
    /// rejected with [`crate::prelude::ReportError::InvalidInput`].
    pub fn generate_checked(&mut self, record: &OutbreakRecord) -> ReportResult<GeneratedReport> {
        self.generate_checked_at(record, Utc::now())
    }

    pub fn generate_checked_at(
        &mut self,
        record: &OutbreakRecord,
        generated_at: DateTime<Utc>,
    ) -> ReportResult<GeneratedReport> {
        if let Err(err) = record.validate() {
            self.metrics.record_rejected();
            self.logger.warn(&format!("rejected outbreak record: {}", err));
            return Err(err);
        }
        Ok(self.generate_at(record, generated_at))
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }
}

impl Default for ReportAssembler<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::Location;
    use crate::prelude::ReportError;
    use chrono::TimeZone;

    pub(crate) fn sample_record() -> OutbreakRecord {
        OutbreakRecord {
            id: "ob-001".into(),
            virus_name: "SARS-CoV-2".into(),
            location: Location::new(40.7128, -74.006, "USA", Some("New York")),
            severity: 0.8,
            affected_population: 5000,
            status: OutbreakStatus::Active,
            risk_score: 0.85,
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn report_id_combines_outbreak_and_timestamp() {
        let mut assembler = ReportAssembler::seeded(1);
        let report = assembler.generate_at(&sample_record(), fixed_time());
        assert_eq!(report.id, "RPT-ob-001-1709294400000");
        assert_eq!(report.outbreak_id, "ob-001");
        assert_eq!(report.generated_at, fixed_time());
    }

    #[test]
    fn data_quality_depends_on_status() {
        let mut assembler = ReportAssembler::seeded(1);
        let mut record = sample_record();
        assert_eq!(assembler.generate(&record).report.data_quality, "High");
        record.status = OutbreakStatus::Resolved;
        assert_eq!(assembler.generate(&record).report.data_quality, "Medium");
        record.status = OutbreakStatus::Contained;
        assert_eq!(assembler.generate(&record).report.data_quality, "Medium");
    }

    #[test]
    fn seeded_assemblers_agree() {
        let first = ReportAssembler::seeded(42).generate_at(&sample_record(), fixed_time());
        let second = ReportAssembler::seeded(42).generate_at(&sample_record(), fixed_time());
        assert_eq!(first, second);
    }

    #[test]
    fn checked_generation_rejects_bad_records() {
        let mut assembler = ReportAssembler::seeded(1);
        let mut record = sample_record();
        record.severity = -0.1;
        let err = assembler.generate_checked(&record).unwrap_err();
        assert!(matches!(err, ReportError::InvalidInput(_)));
        assert!(assembler.generate_checked(&sample_record()).is_ok());
        let metrics = assembler.metrics().snapshot();
        assert_eq!((metrics.generated, metrics.rejected), (1, 1));
        assert_eq!(metrics.rejection_rate(), 0.5);
    }

    #[test]
    fn unchecked_generation_is_total() {
        let mut assembler = ReportAssembler::seeded(1);
        let mut record = sample_record();
        record.virus_name.clear();
        record.affected_population = 0;
        let report = assembler.generate(&record);
        assert_eq!(report.report.response_recommendations.resource_requirements.personnel, 0);
        assert_eq!(report.report.risk_projections.worst_case.cases, 0);
    }
}
