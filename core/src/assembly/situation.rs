use crate::lookup::geographic_scope;
use crate::math::{estimated_duration, transmission_rate};
use crate::model::{OutbreakRecord, OutbreakStatus, SituationAssessment};
use crate::prelude::SectionBuilder;
use rand::RngCore;

/// Builds the situation assessment: where the outbreak stands right now.
#[derive(Debug, Default, Clone, Copy)]
pub struct SituationBuilder;

impl SituationBuilder {
    fn current_status(record: &OutbreakRecord) -> String {
        let phase = match record.status {
            OutbreakStatus::Active => "Active",
            OutbreakStatus::Contained => "Contained",
            OutbreakStatus::Resolved => "Resolved",
        };
        format!(
            "{} {} outbreak in {} affecting {} people",
            phase,
            record.virus_name,
            record.location.label(),
            record.affected_population
        )
    }
}

impl SectionBuilder for SituationBuilder {
    type Section = SituationAssessment;

    fn build(&self, record: &OutbreakRecord, _rng: &mut dyn RngCore) -> SituationAssessment {
        SituationAssessment {
            current_status: Self::current_status(record),
            transmission_rate: transmission_rate(record.risk_score),
            estimated_duration: estimated_duration(record.severity).to_string(),
            geographic_scope: geographic_scope(&record.location.country).to_string(),
        }
    }
}
