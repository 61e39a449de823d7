pub mod outbreak;
pub mod report;

pub use outbreak::{Location, OutbreakRecord, OutbreakStatus};
pub use report::{
    AgeGroups, EpidemiologicalAnalysis, GeneratedReport, ReportBody, ResourceRequirements,
    ResponseRecommendations, RiskProjections, Scenario, SituationAssessment,
};
