use crate::lookup::{comorbidity_factors, seasonal_pattern};
use crate::math::{fixed, hospitalization_rate, mortality_rate};
use crate::model::{AgeGroups, EpidemiologicalAnalysis, OutbreakRecord};
use crate::prelude::SectionBuilder;
use rand::{Rng, RngCore};
use std::ops::Range;

/// Sampling ranges for the fields not derived from the record.
#[derive(Debug, Clone)]
pub struct SamplingRanges {
    /// Cases per 100,000.
    pub incidence_rate: Range<f64>,
    pub minors: Range<u32>,
    pub adults: Range<u32>,
    pub seniors: Range<u32>,
}

impl Default for SamplingRanges {
    fn default() -> Self {
        Self {
            incidence_rate: 1.0..11.0,
            minors: 5..25,
            adults: 40..80,
            seniors: 15..45,
        }
    }
}

/// Builds the epidemiological analysis. Incidence rate and age split are
/// drawn from the supplied generator; everything else follows severity and
/// the virus lookup tables.
#[derive(Debug, Default, Clone)]
pub struct EpidemiologyBuilder {
    ranges: SamplingRanges,
}

impl EpidemiologyBuilder {
    pub fn new(ranges: SamplingRanges) -> Self {
        Self { ranges }
    }

    fn sample_age_groups(&self, rng: &mut dyn RngCore) -> AgeGroups {
        AgeGroups {
            minors: sample_u32(rng, &self.ranges.minors),
            adults: sample_u32(rng, &self.ranges.adults),
            seniors: sample_u32(rng, &self.ranges.seniors),
        }
    }
}

fn sample_u32(rng: &mut dyn RngCore, range: &Range<u32>) -> u32 {
    if range.is_empty() {
        range.start
    } else {
        rng.gen_range(range.clone())
    }
}

fn sample_f64(rng: &mut dyn RngCore, range: &Range<f64>) -> f64 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}

impl SectionBuilder for EpidemiologyBuilder {
    type Section = EpidemiologicalAnalysis;

    fn build(&self, record: &OutbreakRecord, rng: &mut dyn RngCore) -> EpidemiologicalAnalysis {
        let incidence = sample_f64(rng, &self.ranges.incidence_rate);
        EpidemiologicalAnalysis {
            incidence_rate: fixed(incidence, 2),
            mortality_rate: mortality_rate(record.severity),
            hospitalization_rate: hospitalization_rate(record.severity),
            age_groups: self.sample_age_groups(rng),
            comorbidity_factors: comorbidity_factors(&record.virus_name),
            seasonal_pattern: seasonal_pattern(&record.virus_name).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::tests::sample_record;
    use crate::lookup::{GENERIC_COMORBIDITIES, GENERIC_SEASONAL_PATTERN};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn clinical_rates_follow_severity() {
        let mut rng = StdRng::seed_from_u64(7);
        let section = EpidemiologyBuilder::default().build(&sample_record(), &mut rng);
        assert_eq!(section.mortality_rate, "0.08");
        assert_eq!(section.hospitalization_rate, "24.0");
        assert_eq!(section.comorbidity_factors.len(), 4);
    }

    #[test]
    fn sampled_fields_stay_in_range() {
        let builder = EpidemiologyBuilder::default();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let section = builder.build(&sample_record(), &mut rng);
            let ages = section.age_groups;
            assert!((5..25).contains(&ages.minors));
            assert!((40..80).contains(&ages.adults));
            assert!((15..45).contains(&ages.seniors));
            let incidence: f64 = section.incidence_rate.parse().unwrap();
            assert!((1.0..=11.0).contains(&incidence));
        }
    }

    #[test]
    fn same_seed_same_sample() {
        let builder = EpidemiologyBuilder::default();
        let first = builder.build(&sample_record(), &mut StdRng::seed_from_u64(3));
        let second = builder.build(&sample_record(), &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }

    #[test]
    fn degenerate_ranges_pin_values() {
        let builder = EpidemiologyBuilder::new(SamplingRanges {
            incidence_rate: 4.0..4.0,
            minors: 10..10,
            adults: 60..60,
            seniors: 30..30,
        });
        let mut rng = StdRng::seed_from_u64(0);
        let section = builder.build(&sample_record(), &mut rng);
        assert_eq!(section.incidence_rate, "4.00");
        assert_eq!(
            section.age_groups,
            AgeGroups {
                minors: 10,
                adults: 60,
                seniors: 30
            }
        );
    }

    #[test]
    fn unmapped_virus_falls_back() {
        let mut record = sample_record();
        record.virus_name = "Novel-X".into();
        let mut rng = StdRng::seed_from_u64(5);
        let section = EpidemiologyBuilder::default().build(&record, &mut rng);
        assert_eq!(section.comorbidity_factors, GENERIC_COMORBIDITIES);
        assert_eq!(section.seasonal_pattern, GENERIC_SEASONAL_PATTERN);
    }
}
