use crate::workflow::config::ExportFormat;
use anyhow::Context;
use outbreakcore::render::render_text;
use outbreakcore::GeneratedReport;
use std::fs;
use std::path::{Path, PathBuf};

pub fn render(report: &GeneratedReport, format: ExportFormat) -> anyhow::Result<String> {
    let rendered = match format {
        ExportFormat::Json => serde_json::to_string_pretty(report)
            .with_context(|| format!("serializing {} as json", report.id))?,
        ExportFormat::Yaml => serde_yaml::to_string(report)
            .with_context(|| format!("serializing {} as yaml", report.id))?,
        ExportFormat::Text => render_text(report),
    };
    Ok(rendered)
}

/// Outbreak ids come from user input; keep file names to a safe alphabet.
fn file_stem(report_id: &str) -> String {
    report_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Writes one file per report and returns the written paths.
pub fn write_reports(
    reports: &[GeneratedReport],
    format: ExportFormat,
    output_dir: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let mut written = Vec::with_capacity(reports.len());
    for report in reports {
        let path = output_dir.join(format!("{}.{}", file_stem(&report.id), format.extension()));
        let body = render(report, format)?;
        fs::write(&path, body).with_context(|| format!("writing report {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::catalog::sample_outbreaks;
    use outbreakcore::ReportAssembler;

    fn reports() -> Vec<GeneratedReport> {
        let mut assembler = ReportAssembler::seeded(8);
        sample_outbreaks()
            .iter()
            .take(2)
            .map(|record| assembler.generate(record))
            .collect()
    }

    #[test]
    fn json_export_round_trips() {
        let report = &reports()[0];
        let body = render(report, ExportFormat::Json).unwrap();
        let parsed: GeneratedReport = serde_json::from_str(&body).unwrap();
        assert_eq!(&parsed, report);
    }

    #[test]
    fn text_export_uses_renderer() {
        let report = &reports()[0];
        assert_eq!(render(report, ExportFormat::Text).unwrap(), render_text(report));
    }

    #[test]
    fn file_stem_replaces_unsafe_characters() {
        assert_eq!(file_stem("RPT-ob/1-42"), "RPT-ob_1-42");
    }

    #[test]
    fn write_reports_creates_one_file_each() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports");
        let written = write_reports(&reports(), ExportFormat::Yaml, &out).unwrap();
        assert_eq!(written.len(), 2);
        for path in &written {
            assert!(path.exists());
            assert_eq!(path.extension().and_then(|e| e.to_str()), Some("yaml"));
        }
    }
}
