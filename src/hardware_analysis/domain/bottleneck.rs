use serde::{Deserialize, Serialize};

/// Which part of the system caps throughput
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BottleneckType {
    Cpu,
    Gpu,
    Ram,
    Balanced,
}

impl BottleneckType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BottleneckType::Cpu => "cpu",
            BottleneckType::Gpu => "gpu",
            BottleneckType::Ram => "ram",
            BottleneckType::Balanced => "balanced",
        }
    }
}

impl std::fmt::Display for BottleneckType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bottleneck severity, ordered from harmless to severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Balance analysis of a CPU/GPU/RAM triple
///
/// `bottleneck_type` names the primary bottleneck; `flagged` lists every check
/// that fired, so a CPU bottleneck with too little RAM shows `[cpu, ram]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BottleneckReport {
    /// False when benchmark data was missing and nothing was checked
    pub analyzed: bool,
    pub has_bottleneck: bool,
    #[serde(rename = "type")]
    pub bottleneck_type: BottleneckType,
    pub severity: Severity,
    pub description: String,
    pub recommendations: Vec<String>,
    pub percentage_loss: u32,
    pub flagged: Vec<BottleneckType>,
}

impl Default for BottleneckReport {
    fn default() -> Self {
        Self {
            analyzed: false,
            has_bottleneck: false,
            bottleneck_type: BottleneckType::Balanced,
            severity: Severity::None,
            description: String::new(),
            recommendations: Vec::new(),
            percentage_loss: 0,
            flagged: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::None < Severity::Mild);
        assert!(Severity::Mild < Severity::Moderate);
        assert!(Severity::Moderate < Severity::Severe);
        assert_eq!(Severity::Mild.max(Severity::Severe), Severity::Severe);
    }

    #[test]
    fn test_default_report_is_balanced() {
        let report = BottleneckReport::default();
        assert!(!report.has_bottleneck);
        assert_eq!(report.bottleneck_type, BottleneckType::Balanced);
        assert_eq!(report.severity, Severity::None);
        assert!(report.flagged.is_empty());
    }

    #[test]
    fn test_report_serializes_type_field() {
        let report = BottleneckReport::default();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type"], "balanced");
        assert_eq!(json["severity"], "none");
    }
}
