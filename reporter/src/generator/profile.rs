use crate::generator::catalog::KNOWN_SITES;
use anyhow::ensure;
use outbreakcore::{Location, OutbreakRecord, OutbreakStatus};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const VIRUSES: &[&str] = &["SARS-CoV-2", "H1N1", "H5N1", "MERS-CoV", "Ebola", "Zika"];
/// Widest coordinate jitter accepted, in degrees.
pub const MAX_JITTER_DEG: f64 = 90.0;

const STATUSES: &[OutbreakStatus] = &[
    OutbreakStatus::Active,
    OutbreakStatus::Contained,
    OutbreakStatus::Resolved,
];

/// Configuration for generating synthetic outbreak records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: u64,
    pub max_population: u64,
    /// Degrees of jitter applied to each site's coordinates.
    pub jitter: f64,
    pub id_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 8,
            seed: 0,
            max_population: 20_000,
            jitter: 0.25,
            id_prefix: "syn".into(),
        }
    }
}

fn jittered(rng: &mut StdRng, value: f64, jitter: f64, limit: f64) -> f64 {
    let offset = if jitter > 0.0 {
        rng.gen_range(-jitter..jitter)
    } else {
        0.0
    };
    (value + offset).clamp(-limit, limit)
}

pub fn build_records(config: &GeneratorConfig) -> anyhow::Result<Vec<OutbreakRecord>> {
    ensure!(
        config.jitter.is_finite() && (0.0..=MAX_JITTER_DEG).contains(&config.jitter),
        "generator jitter must be between 0 and {} degrees, got {}",
        MAX_JITTER_DEG,
        config.jitter
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut records = Vec::with_capacity(config.count);

    for index in 0..config.count {
        let site = KNOWN_SITES
            .choose(&mut rng)
            .copied()
            .unwrap_or(KNOWN_SITES[0]);
        let virus = VIRUSES.choose(&mut rng).copied().unwrap_or(VIRUSES[0]);
        let status = STATUSES.choose(&mut rng).copied().unwrap_or(OutbreakStatus::Active);

        let location = Location::new(
            jittered(&mut rng, site.lat, config.jitter, 90.0),
            jittered(&mut rng, site.lng, config.jitter, 180.0),
            site.country,
            Some(site.city),
        );

        records.push(OutbreakRecord {
            id: format!("{}-{:03}", config.id_prefix, index + 1),
            virus_name: virus.to_string(),
            location,
            severity: rng.gen_range(0.0..=1.0),
            affected_population: rng.gen_range(0..=config.max_population),
            status,
            risk_score: rng.gen_range(0.0..=1.0),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_builds_requested_count() {
        let records = build_records(&GeneratorConfig {
            count: 12,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(records.len(), 12);
        assert_eq!(records[0].id, "syn-001");
        assert!(records.iter().all(|record| record.validate().is_ok()));
    }

    #[test]
    fn generator_is_reproducible_per_seed() {
        let config = GeneratorConfig {
            count: 5,
            seed: 13,
            ..Default::default()
        };
        assert_eq!(build_records(&config).unwrap(), build_records(&config).unwrap());

        let other = GeneratorConfig {
            seed: 14,
            ..config.clone()
        };
        assert_ne!(build_records(&config).unwrap(), build_records(&other).unwrap());
    }

    #[test]
    fn generator_rejects_negative_jitter() {
        let config = GeneratorConfig {
            jitter: -1.0,
            ..Default::default()
        };
        assert!(build_records(&config).is_err());
    }

    #[test]
    fn generator_rejects_oversized_jitter() {
        for jitter in [MAX_JITTER_DEG + 0.5, 1e308, f64::INFINITY] {
            let config = GeneratorConfig {
                jitter,
                ..Default::default()
            };
            let err = build_records(&config).unwrap_err();
            assert!(err.to_string().contains("jitter"));
        }
    }

    #[test]
    fn generator_accepts_widest_jitter() {
        let config = GeneratorConfig {
            count: 20,
            jitter: MAX_JITTER_DEG,
            ..Default::default()
        };
        let records = build_records(&config).unwrap();
        assert!(records.iter().all(|record| record.validate().is_ok()));
    }
}
