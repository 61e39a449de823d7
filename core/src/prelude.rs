use crate::model::OutbreakRecord;
use rand::RngCore;

/// Common error type for report assembly.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type ReportResult<T> = Result<T, ReportError>;

/// One section of a generated report.
///
/// Builders are stateless; any randomness is drawn from the generator the
/// assembler hands in so a seeded source gives repeatable output.
pub trait SectionBuilder {
    type Section;

    fn build(&self, record: &OutbreakRecord, rng: &mut dyn RngCore) -> Self::Section;
}
