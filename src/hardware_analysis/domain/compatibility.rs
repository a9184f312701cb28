use super::ComponentKind;
use serde::Serialize;

/// Outcome of checking one component against one game's minimum requirements
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityResult {
    pub compatible: bool,
    pub reason: String,
    /// Percentage in [0, 100] when compatible. Incompatible results carry the
    /// raw have/required ratio. `None` when the component kind has no
    /// scoring rule.
    pub score_percent: Option<f64>,
}

impl CompatibilityResult {
    pub fn compatible(reason: impl Into<String>, score_percent: f64) -> Self {
        Self {
            compatible: true,
            reason: reason.into(),
            score_percent: Some(score_percent),
        }
    }

    pub fn incompatible(reason: impl Into<String>, score_percent: f64) -> Self {
        Self {
            compatible: false,
            reason: reason.into(),
            score_percent: Some(score_percent),
        }
    }

    pub fn unscored(reason: impl Into<String>) -> Self {
        Self {
            compatible: true,
            reason: reason.into(),
            score_percent: None,
        }
    }
}

/// Coarse performance level derived from an averaged compatibility score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTier {
    Low,
    Medium,
    High,
    Ultra,
}

impl PerformanceTier {
    /// Ultra >= 80, High >= 60, Medium >= 40, else Low
    pub fn from_average(score: f64) -> Self {
        if score >= 80.0 {
            PerformanceTier::Ultra
        } else if score >= 60.0 {
            PerformanceTier::High
        } else if score >= 40.0 {
            PerformanceTier::Medium
        } else {
            PerformanceTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceTier::Low => "low",
            PerformanceTier::Medium => "medium",
            PerformanceTier::High => "high",
            PerformanceTier::Ultra => "ultra",
        }
    }
}

impl std::fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of a full compatibility check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairCompatibility {
    pub game: String,
    pub component: String,
    pub kind: ComponentKind,
    #[serde(flatten)]
    pub result: CompatibilityResult,
}

/// Aggregate of every game x component check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityReport {
    pub compatible: bool,
    pub details: Vec<PairCompatibility>,
    pub overall_score: f64,
    pub performance_tier: Option<PerformanceTier>,
    pub recommendations: Vec<String>,
}

impl CompatibilityReport {
    pub fn incompatible_pairs(&self) -> impl Iterator<Item = &PairCompatibility> {
        self.details.iter().filter(|d| !d.result.compatible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_tier_bands() {
        assert_eq!(PerformanceTier::from_average(100.0), PerformanceTier::Ultra);
        assert_eq!(PerformanceTier::from_average(80.0), PerformanceTier::Ultra);
        assert_eq!(PerformanceTier::from_average(79.9), PerformanceTier::High);
        assert_eq!(PerformanceTier::from_average(60.0), PerformanceTier::High);
        assert_eq!(PerformanceTier::from_average(40.0), PerformanceTier::Medium);
        assert_eq!(PerformanceTier::from_average(39.99), PerformanceTier::Low);
        assert_eq!(PerformanceTier::from_average(0.0), PerformanceTier::Low);
    }

    #[test]
    fn test_pair_serializes_flat() {
        let pair = PairCompatibility {
            game: "Elden Ring".to_string(),
            component: "AMD Ryzen 5 5600X".to_string(),
            kind: ComponentKind::Cpu,
            result: CompatibilityResult::compatible("CPU compatible", 100.0),
        };
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json["kind"], "CPU");
        assert_eq!(json["compatible"], true);
        assert_eq!(json["score_percent"], 100.0);
    }

    #[test]
    fn test_unscored_result() {
        let result = CompatibilityResult::unscored("No rule");
        assert!(result.compatible);
        assert!(result.score_percent.is_none());
    }
}
