use crate::math::resource_requirements;
use crate::model::{OutbreakRecord, ResponseRecommendations};
use crate::prelude::SectionBuilder;
use rand::RngCore;

/// Risk score above which the escalated immediate actions are added.
pub const ESCALATION_THRESHOLD: f64 = 0.7;

pub const BASE_IMMEDIATE_ACTIONS: &[&str] = &[
    "Enhance surveillance in affected areas",
    "Implement contact tracing protocols",
    "Increase testing capacity",
    "Issue public health advisories",
];

pub const ESCALATED_IMMEDIATE_ACTIONS: &[&str] = &[
    "Consider travel restrictions",
    "Activate emergency response teams",
    "Prepare healthcare surge capacity",
    "Coordinate with international health agencies",
];

pub const MEDIUM_TERM_ACTIONS: &[&str] = &[
    "Strengthen healthcare system capacity",
    "Develop targeted vaccination strategies",
    "Establish community health programs",
    "Monitor for viral mutations",
];

pub const LONG_TERM_ACTIONS: &[&str] = &[
    "Invest in pandemic preparedness infrastructure",
    "Build genomic surveillance networks",
    "Strengthen international cooperation frameworks",
    "Develop rapid response protocols",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseBuilder;

fn owned(actions: &[&str]) -> Vec<String> {
    actions.iter().map(|action| action.to_string()).collect()
}

impl SectionBuilder for ResponseBuilder {
    type Section = ResponseRecommendations;

    fn build(&self, record: &OutbreakRecord, _rng: &mut dyn RngCore) -> ResponseRecommendations {
        let mut immediate_actions = owned(BASE_IMMEDIATE_ACTIONS);
        if record.risk_score > ESCALATION_THRESHOLD {
            immediate_actions.extend(owned(ESCALATED_IMMEDIATE_ACTIONS));
        }

        ResponseRecommendations {
            immediate_actions,
            medium_term_actions: owned(MEDIUM_TERM_ACTIONS),
            long_term_actions: owned(LONG_TERM_ACTIONS),
            resource_requirements: resource_requirements(record.affected_population),
        }
    }
}
