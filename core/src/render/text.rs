use crate::model::{GeneratedReport, Scenario};
use std::fmt::{self, Write};

fn bullets(out: &mut String, heading: &str, items: &[String]) -> fmt::Result {
    writeln!(out, "  {}:", heading)?;
    for item in items {
        writeln!(out, "    - {}", item)?;
    }
    Ok(())
}

fn scenario(out: &mut String, label: &str, scenario: &Scenario) -> fmt::Result {
    writeln!(
        out,
        "  {:<12} {} cases within {} (probability {})",
        label, scenario.cases, scenario.timeframe, scenario.probability
    )
}

fn write_report(out: &mut String, generated: &GeneratedReport) -> fmt::Result {
    let report = &generated.report;
    writeln!(out, "Outbreak Report {}", generated.id)?;
    writeln!(
        out,
        "Generated {} for outbreak {}",
        generated.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        generated.outbreak_id
    )?;

    let situation = &report.situation_assessment;
    writeln!(out)?;
    writeln!(out, "Situation Assessment")?;
    writeln!(out, "  Status: {}", situation.current_status)?;
    writeln!(out, "  Transmission rate: {}", situation.transmission_rate)?;
    writeln!(out, "  Estimated duration: {}", situation.estimated_duration)?;
    writeln!(out, "  Geographic scope: {}", situation.geographic_scope)?;

    let epi = &report.epidemiological_analysis;
    writeln!(out)?;
    writeln!(out, "Epidemiological Analysis")?;
    writeln!(out, "  Incidence rate: {} per 100,000", epi.incidence_rate)?;
    writeln!(out, "  Mortality rate: {}%", epi.mortality_rate)?;
    writeln!(out, "  Hospitalization rate: {}%", epi.hospitalization_rate)?;
    writeln!(
        out,
        "  Age groups: 0-17 {}%, 18-64 {}%, 65+ {}%",
        epi.age_groups.minors, epi.age_groups.adults, epi.age_groups.seniors
    )?;
    bullets(out, "Comorbidity factors", &epi.comorbidity_factors)?;
    writeln!(out, "  Seasonal pattern: {}", epi.seasonal_pattern)?;

    let response = &report.response_recommendations;
    writeln!(out)?;
    writeln!(out, "Response Recommendations")?;
    bullets(out, "Immediate actions", &response.immediate_actions)?;
    bullets(out, "Medium-term actions", &response.medium_term_actions)?;
    bullets(out, "Long-term actions", &response.long_term_actions)?;
    let resources = &response.resource_requirements;
    writeln!(out, "  Resource requirements:")?;
    writeln!(out, "    Personnel: {}", resources.personnel)?;
    writeln!(out, "    Medical supplies: {} units", resources.medical_supplies)?;
    writeln!(out, "    Testing kits: {}", resources.testing_kits)?;
    writeln!(out, "    Isolation beds: {}", resources.isolation_beds)?;

    let projections = &report.risk_projections;
    writeln!(out)?;
    writeln!(out, "Risk Projections")?;
    scenario(out, "Worst case:", &projections.worst_case)?;
    scenario(out, "Most likely:", &projections.most_likely)?;
    scenario(out, "Best case:", &projections.best_case)?;

    writeln!(out)?;
    writeln!(
        out,
        "Confidence: {}% | Data quality: {}",
        report.confidence, report.data_quality
    )
}

/// Plain-text rendition of a report, suitable for export or a terminal.
pub fn render_text(report: &GeneratedReport) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

impl fmt::Display for GeneratedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_text(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::{tests::sample_record, ReportAssembler};

    #[test]
    fn text_contains_every_section() {
        let report = ReportAssembler::seeded(11).generate(&sample_record());
        let text = render_text(&report);
        for heading in [
            "Situation Assessment",
            "Epidemiological Analysis",
            "Response Recommendations",
            "Risk Projections",
        ] {
            assert!(text.contains(heading), "missing {}", heading);
        }
        assert!(text.contains("Transmission rate: 2.90"));
        assert!(text.contains("Medical supplies: 500 units"));
        assert!(text.contains("Confidence: 85% | Data quality: High"));
    }

    #[test]
    fn display_matches_renderer() {
        let report = ReportAssembler::seeded(11).generate(&sample_record());
        assert_eq!(report.to_string(), render_text(&report));
    }
}
