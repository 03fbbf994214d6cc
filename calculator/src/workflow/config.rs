use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// What to do with a batch that contains invalid panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicy {
    /// Refuse the whole batch and report every field error.
    #[default]
    RejectBatch,
    /// Calculate the valid panels and report the rejected ones alongside.
    SkipInvalid,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub policy: ValidationPolicy,
    pub bind_address: SocketAddr,
    pub csv_output: Option<PathBuf>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            policy: ValidationPolicy::default(),
            bind_address: SocketAddr::from(([127, 0, 0, 1], 9000)),
            csv_output: None,
        }
    }
}

impl CalculatorConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading calculator config {}", path_ref.display()))?;
        let config: CalculatorConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing calculator config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(policy: ValidationPolicy, port: u16) -> Self {
        Self {
            policy,
            bind_address: SocketAddr::from(([127, 0, 0, 1], port)),
            csv_output: None,
        }
    }
}
