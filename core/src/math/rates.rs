use crate::math::format::fixed;
use crate::model::ResourceRequirements;

const BASE_TRANSMISSION: f64 = 1.2;
const TRANSMISSION_PER_RISK: f64 = 2.0;

pub fn transmission_rate_value(risk_score: f64) -> f64 {
    BASE_TRANSMISSION + risk_score * TRANSMISSION_PER_RISK
}

/// Reproduction-style transmission figure, two decimals.
pub fn transmission_rate(risk_score: f64) -> String {
    fixed(transmission_rate_value(risk_score), 2)
}

pub fn estimated_duration(severity: f64) -> &'static str {
    if severity > 0.7 {
        "8-12 weeks"
    } else if severity > 0.5 {
        "6-10 weeks"
    } else {
        "4-8 weeks"
    }
}

pub fn mortality_rate(severity: f64) -> String {
    fixed(severity * 0.1, 2)
}

pub fn hospitalization_rate(severity: f64) -> String {
    fixed(severity * 0.3 * 100.0, 1)
}

pub fn confidence(risk_score: f64) -> u32 {
    // `as` saturates, so out-of-contract scores land on 0 or u32::MAX
    (risk_score * 100.0).round() as u32
}

/// Integer ratio applied to a population count, floored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleFactor {
    pub numerator: u64,
    pub denominator: u64,
}

impl ScaleFactor {
    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

pub fn scale_population(population: u64, factor: ScaleFactor) -> u64 {
    if factor.denominator == 0 {
        return 0;
    }
    let scaled =
        u128::from(population) * u128::from(factor.numerator) / u128::from(factor.denominator);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

const PERSONNEL: ScaleFactor = ScaleFactor::new(1, 100);
const MEDICAL_SUPPLIES: ScaleFactor = ScaleFactor::new(1, 10);
const TESTING_KITS: ScaleFactor = ScaleFactor::new(1, 2);
const ISOLATION_BEDS: ScaleFactor = ScaleFactor::new(1, 20);

pub fn resource_requirements(affected_population: u64) -> ResourceRequirements {
    ResourceRequirements {
        personnel: scale_population(affected_population, PERSONNEL),
        medical_supplies: scale_population(affected_population, MEDICAL_SUPPLIES),
        testing_kits: scale_population(affected_population, TESTING_KITS),
        isolation_beds: scale_population(affected_population, ISOLATION_BEDS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transmission_rate_strictly_increases_with_risk() {
        let mut previous = f64::MIN;
        for step in 0..=100 {
            let risk = step as f64 / 100.0;
            let rendered: f64 = transmission_rate(risk).parse().unwrap();
            assert!(rendered > previous, "not increasing at risk {}", risk);
            previous = rendered;
        }
    }

    #[test]
    fn duration_thresholds_are_strict() {
        assert_eq!(estimated_duration(0.71), "8-12 weeks");
        assert_eq!(estimated_duration(0.7), "6-10 weeks");
        assert_eq!(estimated_duration(0.5), "4-8 weeks");
        assert_eq!(estimated_duration(0.0), "4-8 weeks");
    }

    #[test]
    fn severity_drives_clinical_rates() {
        assert_eq!(mortality_rate(0.8), "0.08");
        assert_eq!(hospitalization_rate(0.8), "24.0");
        assert_eq!(mortality_rate(0.0), "0.00");
    }

    #[test]
    fn confidence_rounds_half_up() {
        assert_eq!(confidence(0.85), 85);
        assert_eq!(confidence(0.005), 1);
        assert_eq!(confidence(1.0), 100);
        for step in 0..=1000 {
            let risk = step as f64 / 1000.0;
            assert_eq!(confidence(risk), (risk * 100.0).round() as u32);
        }
    }

    #[test]
    fn resources_floor_and_scale_linearly() {
        let base = resource_requirements(5000);
        assert_eq!(base.personnel, 50);
        assert_eq!(base.medical_supplies, 500);
        assert_eq!(base.testing_kits, 2500);
        assert_eq!(base.isolation_beds, 250);

        let doubled = resource_requirements(10_000);
        assert_eq!(doubled.personnel, base.personnel * 2);
        assert_eq!(doubled.isolation_beds, base.isolation_beds * 2);

        let small = resource_requirements(99);
        assert_eq!(small.personnel, 0);
        assert_eq!(small.testing_kits, 49);
    }

    #[test]
    fn scaling_saturates_instead_of_overflowing() {
        assert_eq!(
            scale_population(u64::MAX, ScaleFactor::new(5, 2)),
            u64::MAX
        );
        assert_eq!(scale_population(10, ScaleFactor::new(1, 0)), 0);
    }
}
