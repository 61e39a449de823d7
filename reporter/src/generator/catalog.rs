use anyhow::{bail, Context};
use outbreakcore::{Location, OutbreakRecord, OutbreakStatus};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A monitored city used to seed built-in and synthetic records.
#[derive(Debug, Clone, Copy)]
pub struct Site {
    pub city: &'static str,
    pub country: &'static str,
    pub lat: f64,
    pub lng: f64,
}

pub const KNOWN_SITES: &[Site] = &[
    Site {
        city: "New York",
        country: "USA",
        lat: 40.7128,
        lng: -74.0060,
    },
    Site {
        city: "Tokyo",
        country: "Japan",
        lat: 35.6762,
        lng: 139.6503,
    },
    Site {
        city: "Wuhan",
        country: "China",
        lat: 30.5928,
        lng: 114.3055,
    },
    Site {
        city: "Mumbai",
        country: "India",
        lat: 19.0760,
        lng: 72.8777,
    },
    Site {
        city: "São Paulo",
        country: "Brazil",
        lat: -23.5505,
        lng: -46.6333,
    },
    Site {
        city: "London",
        country: "UK",
        lat: 51.5074,
        lng: -0.1278,
    },
    Site {
        city: "Lagos",
        country: "Nigeria",
        lat: 6.5244,
        lng: 3.3792,
    },
    Site {
        city: "Lima",
        country: "Peru",
        lat: -12.0464,
        lng: -77.0428,
    },
];

fn sample(
    id: &str,
    virus: &str,
    site: usize,
    severity: f64,
    affected_population: u64,
    status: OutbreakStatus,
    risk_score: f64,
) -> OutbreakRecord {
    let site = KNOWN_SITES[site];
    OutbreakRecord {
        id: id.to_string(),
        virus_name: virus.to_string(),
        location: Location::new(site.lat, site.lng, site.country, Some(site.city)),
        severity,
        affected_population,
        status,
        risk_score,
    }
}

/// Outbreaks shown on the map view when no record source is given.
pub fn sample_outbreaks() -> Vec<OutbreakRecord> {
    vec![
        sample("ob-001", "SARS-CoV-2", 0, 0.8, 5000, OutbreakStatus::Active, 0.85),
        sample("ob-002", "H1N1", 1, 0.6, 3000, OutbreakStatus::Contained, 0.55),
        sample("ob-003", "H5N1", 2, 0.75, 1200, OutbreakStatus::Active, 0.78),
        sample("ob-004", "Zika", 4, 0.4, 8000, OutbreakStatus::Resolved, 0.3),
        sample("ob-005", "MERS-CoV", 6, 0.65, 450, OutbreakStatus::Active, 0.62),
        sample("ob-006", "Dengue", 7, 0.35, 2600, OutbreakStatus::Contained, 0.41),
    ]
}

/// Narrows a record list the way the map's filter panel does.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecordFilter {
    pub status: Option<OutbreakStatus>,
    pub min_severity: Option<f64>,
    pub country: Option<String>,
}

impl RecordFilter {
    pub fn matches(&self, record: &OutbreakRecord) -> bool {
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(min) = self.min_severity {
            if record.severity < min {
                return false;
            }
        }
        if let Some(country) = self.country.as_deref() {
            if !record.location.country.eq_ignore_ascii_case(country.trim()) {
                return false;
            }
        }
        true
    }
}

pub fn filter_records(records: &[OutbreakRecord], filter: &RecordFilter) -> Vec<OutbreakRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Loads a list of records from a JSON or YAML file, picked by extension.
pub fn load_records<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<OutbreakRecord>> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading outbreak records {}", path_ref.display()))?;

    let extension = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let records: Vec<OutbreakRecord> = match extension.as_deref() {
        Some("json") => serde_json::from_str(&contents)
            .with_context(|| format!("parsing outbreak records {}", path_ref.display()))?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing outbreak records {}", path_ref.display()))?,
        _ => bail!(
            "unsupported record file {} (expected .json, .yaml or .yml)",
            path_ref.display()
        ),
    };
    Ok(records)
}
