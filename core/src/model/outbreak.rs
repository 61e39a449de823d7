use crate::prelude::{ReportError, ReportResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of an outbreak as reported by field teams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OutbreakStatus {
    Active,
    Contained,
    Resolved,
}

impl OutbreakStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutbreakStatus::Active => "active",
            OutbreakStatus::Contained => "contained",
            OutbreakStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for OutbreakStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutbreakStatus {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(OutbreakStatus::Active),
            "contained" => Ok(OutbreakStatus::Contained),
            "resolved" => Ok(OutbreakStatus::Resolved),
            other => Err(ReportError::InvalidInput(format!(
                "unknown outbreak status '{}'",
                other
            ))),
        }
    }
}

/// Where an outbreak was observed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Location {
    pub fn new(lat: f64, lng: f64, country: impl Into<String>, city: Option<&str>) -> Self {
        Self {
            lat,
            lng,
            country: country.into(),
            city: city.map(str::to_string),
            region: None,
        }
    }

    /// "City, Country" when a city is known, otherwise just the country.
    pub fn label(&self) -> String {
        match self.city.as_deref() {
            Some(city) if !city.trim().is_empty() => format!("{}, {}", city, self.country),
            _ => self.country.clone(),
        }
    }
}

/// Minimal description of an outbreak used as report input.
///
/// Severity and risk score are expected on the unit interval. The report
/// assembler does not clamp them; use [`OutbreakRecord::validate`] when the
/// record comes from an untrusted source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutbreakRecord {
    pub id: String,
    pub virus_name: String,
    pub location: Location,
    pub severity: f64,
    pub affected_population: u64,
    pub status: OutbreakStatus,
    pub risk_score: f64,
}

impl OutbreakRecord {
    pub fn validate(&self) -> ReportResult<()> {
        if self.id.trim().is_empty() {
            return Err(ReportError::InvalidInput("outbreak id is empty".into()));
        }
        if self.virus_name.trim().is_empty() {
            return Err(ReportError::InvalidInput(format!(
                "outbreak {} has no virus name",
                self.id
            )));
        }
        check_unit_interval(&self.id, "severity", self.severity)?;
        check_unit_interval(&self.id, "risk score", self.risk_score)?;

        let Location { lat, lng, .. } = self.location;
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ReportError::InvalidInput(format!(
                "outbreak {} latitude {} out of range",
                self.id, lat
            )));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(ReportError::InvalidInput(format!(
                "outbreak {} longitude {} out of range",
                self.id, lng
            )));
        }
        Ok(())
    }
}

fn check_unit_interval(id: &str, field: &str, value: f64) -> ReportResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ReportError::InvalidInput(format!(
            "outbreak {} {} {} outside [0, 1]",
            id, field, value
        )))
    }
}
