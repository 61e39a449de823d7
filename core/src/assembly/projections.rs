use crate::math::{scale_population, ScaleFactor};
use crate::model::{OutbreakRecord, RiskProjections, Scenario};
use crate::prelude::SectionBuilder;
use rand::RngCore;

/// Fixed parameters of one projection scenario.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioProfile {
    pub factor: ScaleFactor,
    pub timeframe: &'static str,
    pub probability: &'static str,
}

impl ScenarioProfile {
    fn project(&self, affected_population: u64) -> Scenario {
        Scenario {
            cases: scale_population(affected_population, self.factor),
            timeframe: self.timeframe.to_string(),
            probability: self.probability.to_string(),
        }
    }
}

pub const WORST_CASE: ScenarioProfile = ScenarioProfile {
    factor: ScaleFactor::new(5, 2),
    timeframe: "3 months",
    probability: "15%",
};

pub const MOST_LIKELY: ScenarioProfile = ScenarioProfile {
    factor: ScaleFactor::new(3, 2),
    timeframe: "2 months",
    probability: "60%",
};

pub const BEST_CASE: ScenarioProfile = ScenarioProfile {
    factor: ScaleFactor::new(4, 5),
    timeframe: "6 weeks",
    probability: "25%",
};

#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectionBuilder;

impl SectionBuilder for ProjectionBuilder {
    type Section = RiskProjections;

    fn build(&self, record: &OutbreakRecord, _rng: &mut dyn RngCore) -> RiskProjections {
        let population = record.affected_population;
        RiskProjections {
            worst_case: WORST_CASE.project(population),
            most_likely: MOST_LIKELY.project(population),
            best_case: BEST_CASE.project(population),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::tests::sample_record;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn scenarios_scale_affected_population() {
        let section = ProjectionBuilder.build(&sample_record(), &mut StdRng::seed_from_u64(0));
        assert_eq!(section.worst_case.cases, 12_500);
        assert_eq!(section.most_likely.cases, 7_500);
        assert_eq!(section.best_case.cases, 4_000);
        assert_eq!(section.most_likely.probability, "60%");
    }

    #[test]
    fn scenarios_are_ordered() {
        let mut record = sample_record();
        record.affected_population = 1_234;
        let section = ProjectionBuilder.build(&record, &mut StdRng::seed_from_u64(0));
        assert!(section.worst_case.cases >= section.most_likely.cases);
        assert!(section.most_likely.cases >= section.best_case.cases);
    }
}
