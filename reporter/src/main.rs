use anyhow::Context;
use bridge::server::{bridge_bind_address, ReportBridge};
use clap::Parser;
use generator::profile::GeneratorConfig;
use outbreakcore::OutbreakStatus;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{ExportFormat, WorkflowConfig};
use workflow::export::{render, write_reports};
use workflow::runner::Runner;

mod bridge;
mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Outbreak report driver")]
struct Args {
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Read outbreak records from a JSON or YAML file
    #[arg(long)]
    records: Option<PathBuf>,
    /// Generate this many synthetic outbreak records instead
    #[arg(long)]
    synthetic: Option<usize>,
    /// Seed for the report sampler (and synthetic records)
    #[arg(long)]
    seed: Option<u64>,
    /// Export format [default: json]
    #[arg(long, value_enum)]
    format: Option<ExportFormat>,
    /// Directory to write reports into; stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long)]
    status: Option<OutbreakStatus>,
    #[arg(long)]
    min_severity: Option<f64>,
    #[arg(long)]
    country: Option<String>,
    /// Keep the HTTP bridge alive after the batch run
    #[arg(long, default_value_t = false)]
    serve: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<(WorkflowConfig, bool)> {
        let mut config = if let Some(path) = self.workflow.as_ref() {
            WorkflowConfig::load(path)?
        } else {
            WorkflowConfig::from_args(self.seed, self.format.unwrap_or_default(), self.out.clone())
        };

        // explicit flags override the workflow file
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.out.is_some() {
            config.output_dir = self.out;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.records.is_some() {
            config.records = self.records;
        }
        if let Some(count) = self.synthetic {
            config.synthetic = Some(GeneratorConfig {
                count,
                seed: config.seed.unwrap_or_default(),
                ..Default::default()
            });
        }
        if self.status.is_some() {
            config.filter.status = self.status;
        }
        if self.min_severity.is_some() {
            config.filter.min_severity = self.min_severity;
        }
        if self.country.is_some() {
            config.filter.country = self.country;
        }
        Ok((config, self.serve))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let (workflow_config, serve) = Args::parse().into_config()?;

    let runner = Runner::new(workflow_config.clone());
    let records = runner.load_records()?;
    let result = runner.execute(&records)?;

    println!(
        "Report run -> considered {}, generated {}, skipped {}",
        result.considered,
        result.reports.len(),
        result.skipped.len()
    );
    for skipped in &result.skipped {
        println!("  skipped {}: {}", skipped.outbreak_id, skipped.reason);
    }

    match workflow_config.output_dir.as_deref() {
        Some(dir) => {
            let written = write_reports(&result.reports, workflow_config.format, dir)?;
            println!("Wrote {} reports to {}", written.len(), dir.display());
        }
        None => {
            for report in &result.reports {
                println!("{}", render(report, workflow_config.format)?);
            }
        }
    }

    if serve {
        let bridge = ReportBridge::new(Arc::new(runner), records);
        bridge.publish(&result.reports);
        let (bound, _server) = bridge
            .spawn(bridge_bind_address())
            .context("starting HTTP bridge")?;
        bridge.publish_status(&format!("HTTP bridge on {} (Ctrl+C to stop)...", bound));
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
