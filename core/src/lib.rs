//! Report assembly core for outbreak records.
//!
//! An [`OutbreakRecord`] goes in, a [`GeneratedReport`] comes out. The
//! transform is synchronous and side-effect free apart from logging; the
//! only non-derived fields (incidence rate and age split) come from the
//! assembler's injectable random source.

pub mod assembly;
pub mod lookup;
pub mod math;
pub mod model;
pub mod prelude;
pub mod render;
pub mod telemetry;

pub use assembly::ReportAssembler;
pub use model::{GeneratedReport, Location, OutbreakRecord, OutbreakStatus};
pub use prelude::{ReportError, ReportResult, SectionBuilder};
