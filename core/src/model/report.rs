use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Report produced for a single outbreak. Never mutated after assembly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedReport {
    pub id: String,
    pub outbreak_id: String,
    pub generated_at: DateTime<Utc>,
    pub report: ReportBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportBody {
    pub situation_assessment: SituationAssessment,
    pub epidemiological_analysis: EpidemiologicalAnalysis,
    pub response_recommendations: ResponseRecommendations,
    pub risk_projections: RiskProjections,
    /// Percentage in 0..=100.
    pub confidence: u32,
    pub data_quality: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SituationAssessment {
    pub current_status: String,
    pub transmission_rate: String,
    pub estimated_duration: String,
    pub geographic_scope: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EpidemiologicalAnalysis {
    /// Cases per 100,000, two decimals.
    pub incidence_rate: String,
    pub mortality_rate: String,
    pub hospitalization_rate: String,
    pub age_groups: AgeGroups,
    pub comorbidity_factors: Vec<String>,
    pub seasonal_pattern: String,
}

/// Share of cases per age bracket, in whole percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgeGroups {
    #[serde(rename = "0-17")]
    pub minors: u32,
    #[serde(rename = "18-64")]
    pub adults: u32,
    #[serde(rename = "65+")]
    pub seniors: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseRecommendations {
    pub immediate_actions: Vec<String>,
    pub medium_term_actions: Vec<String>,
    pub long_term_actions: Vec<String>,
    pub resource_requirements: ResourceRequirements,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceRequirements {
    pub personnel: u64,
    /// Whole supply units.
    pub medical_supplies: u64,
    pub testing_kits: u64,
    pub isolation_beds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskProjections {
    pub worst_case: Scenario,
    pub most_likely: Scenario,
    pub best_case: Scenario,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub cases: u64,
    pub timeframe: String,
    pub probability: String,
}
