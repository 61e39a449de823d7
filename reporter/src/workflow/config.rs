use crate::generator::catalog::RecordFilter;
use crate::generator::profile::GeneratorConfig;
use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Text,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Text => "txt",
        }
    }
}

/// Where the workflow takes its outbreak records from.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordSource<'a> {
    Catalog,
    File(&'a Path),
    Synthetic(&'a GeneratorConfig),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Seeds the report sampler; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub format: ExportFormat,
    pub output_dir: Option<PathBuf>,
    pub filter: RecordFilter,
    pub records: Option<PathBuf>,
    pub synthetic: Option<GeneratorConfig>,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(seed: Option<u64>, format: ExportFormat, output_dir: Option<PathBuf>) -> Self {
        Self {
            seed,
            format,
            output_dir,
            ..Default::default()
        }
    }

    /// File input wins over synthetic generation; the built-in catalog is
    /// the fallback.
    pub fn source(&self) -> RecordSource<'_> {
        if let Some(path) = self.records.as_deref() {
            RecordSource::File(path)
        } else if let Some(generator) = self.synthetic.as_ref() {
            RecordSource::Synthetic(generator)
        } else {
            RecordSource::Catalog
        }
    }
}
