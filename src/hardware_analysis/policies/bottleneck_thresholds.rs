use crate::hardware_analysis::domain::Severity;
use crate::shared::error::RigError;
use crate::shared::Result;
use serde::Deserialize;

/// One rung of a severity ladder
///
/// Applies when the imbalance ratio is at least `min_ratio`. The upgrade
/// target recommended to the user is `upgrade_factor` times the stronger
/// component's score.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeverityStep {
    pub min_ratio: f64,
    pub severity: Severity,
    pub percentage_loss: u32,
    pub upgrade_factor: f64,
}

impl SeverityStep {
    pub fn new(min_ratio: f64, severity: Severity, percentage_loss: u32, upgrade_factor: f64) -> Self {
        Self {
            min_ratio,
            severity,
            percentage_loss,
            upgrade_factor,
        }
    }
}

/// BottleneckThresholds policy: the ratios and RAM sizes that flag an
/// unbalanced system
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BottleneckThresholds {
    /// Minimum stronger/weaker ratio before a CPU or GPU bottleneck is considered
    pub trigger_ratio: f64,
    /// Ladder applied to gpu/cpu when the CPU holds the GPU back
    pub cpu_ladder: Vec<SeverityStep>,
    /// Ladder applied to cpu/gpu when the GPU holds the CPU back
    pub gpu_ladder: Vec<SeverityStep>,
    /// Below this much RAM a mild RAM bottleneck is flagged
    pub ram_recommended_gb: u32,
    /// Below this much RAM the RAM bottleneck is moderate
    pub ram_critical_gb: u32,
}

impl Default for BottleneckThresholds {
    fn default() -> Self {
        Self {
            trigger_ratio: 1.5,
            cpu_ladder: vec![
                SeverityStep::new(1.5, Severity::Severe, 25, 0.4),
                SeverityStep::new(1.15, Severity::Moderate, 12, 0.6),
            ],
            gpu_ladder: vec![SeverityStep::new(1.15, Severity::Moderate, 13, 0.5)],
            ram_recommended_gb: 16,
            ram_critical_gb: 8,
        }
    }
}

impl BottleneckThresholds {
    /// Most severe step whose `min_ratio` the ratio reaches (inclusive)
    ///
    /// Steps may be listed in any order.
    pub fn step_for(ladder: &[SeverityStep], ratio: f64) -> Option<&SeverityStep> {
        ladder
            .iter()
            .filter(|step| ratio >= step.min_ratio)
            .max_by(|a, b| a.min_ratio.total_cmp(&b.min_ratio))
    }

    /// # Errors
    /// Rejects non-positive ratios or upgrade factors and a critical RAM size
    /// above the recommended one.
    pub fn validate(&self) -> Result<()> {
        if !(self.trigger_ratio.is_finite() && self.trigger_ratio > 0.0) {
            return Err(Self::invalid(format!(
                "bottleneck.trigger_ratio must be a positive number, got {}",
                self.trigger_ratio
            )));
        }

        for (name, ladder) in [("cpu_ladder", &self.cpu_ladder), ("gpu_ladder", &self.gpu_ladder)] {
            for (i, step) in ladder.iter().enumerate() {
                if !(step.min_ratio.is_finite() && step.min_ratio > 0.0) {
                    return Err(Self::invalid(format!(
                        "bottleneck.{}[{}].min_ratio must be a positive number",
                        name, i
                    )));
                }
                if !(step.upgrade_factor.is_finite() && step.upgrade_factor > 0.0) {
                    return Err(Self::invalid(format!(
                        "bottleneck.{}[{}].upgrade_factor must be a positive number",
                        name, i
                    )));
                }
            }
        }

        if self.ram_critical_gb > self.ram_recommended_gb {
            return Err(Self::invalid(format!(
                "bottleneck.ram_critical_gb ({}) must not exceed ram_recommended_gb ({})",
                self.ram_critical_gb, self.ram_recommended_gb
            )));
        }

        Ok(())
    }

    fn invalid(message: String) -> anyhow::Error {
        RigError::Validation { message }.into()
    }
}
