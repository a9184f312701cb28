//! Configuration file support for rigscore.
//!
//! Provides YAML-based configuration through `rigscore.config.yml` files:
//! the default output format, replacement score tables, bottleneck
//! thresholds and the quality ladder.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

use crate::application::dto::OutputFormat;
use crate::hardware_analysis::policies::{
    BottleneckThresholds, BrandFamilies, QualityLadder, ScoreTable, DEFAULT_SCORE,
};
use crate::hardware_analysis::services::{
    BottleneckDetector, CompatibilityScorer, PerformanceEstimator, ScoreLookup, SystemAnalyzer,
};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "rigscore.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub default_score: Option<u32>,
    pub score_tables: Option<ScoreTablesConfig>,
    pub bottleneck: Option<BottleneckThresholds>,
    pub quality: Option<QualityLadder>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Replacement score tables. A table given here replaces the whole built-in
/// table of that kind.
#[derive(Debug, Deserialize, Default)]
pub struct ScoreTablesConfig {
    pub cpu: Option<BrandFamilies>,
    pub gpu: Option<BrandFamilies>,
}

impl ConfigFile {
    /// Output format from the config, if one is set
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|f| f.parse::<OutputFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }

    /// Score lookup with configured tables layered over the built-in ones
    pub fn score_lookup(&self) -> Result<ScoreLookup> {
        let tables = self.score_tables.as_ref();
        let cpu = match tables.and_then(|t| t.cpu.clone()) {
            Some(brands) => ScoreTable::new(brands).context("Invalid score_tables.cpu")?,
            None => ScoreTable::default_cpu(),
        };
        let gpu = match tables.and_then(|t| t.gpu.clone()) {
            Some(brands) => ScoreTable::new(brands).context("Invalid score_tables.gpu")?,
            None => ScoreTable::default_gpu(),
        };
        Ok(ScoreLookup::new(
            cpu,
            gpu,
            self.default_score.unwrap_or(DEFAULT_SCORE),
        ))
    }

    pub fn compatibility_scorer(&self) -> Result<CompatibilityScorer> {
        Ok(CompatibilityScorer::new(self.score_lookup()?))
    }

    pub fn system_analyzer(&self) -> SystemAnalyzer {
        SystemAnalyzer::new(
            BottleneckDetector::new(self.bottleneck.clone().unwrap_or_default()),
            PerformanceEstimator::new(self.quality.clone().unwrap_or_default()),
        )
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config).with_context(|| format!("Invalid config: {}", path.display()))?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.output_format()?;
    config.score_lookup()?;

    if let Some(ref bottleneck) = config.bottleneck {
        bottleneck.validate()?;
    }
    if let Some(ref quality) = config.quality {
        quality.validate()?;
    }
    if config.default_score == Some(0) {
        bail!(
            "default_score must be greater than 0.\n\n\
             💡 Hint: Unknown parts would otherwise never pass a compatibility check."
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored", key);
    }
}
