use crate::hardware_analysis::domain::{
    BottleneckReport, CompatibilityReport, ReportMetadata, Rig, SystemReport,
};
use serde::Serialize;

/// AnalysisResponse - Response DTO of the system analysis use case
///
/// Serialized as-is by the JSON formatter.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub metadata: ReportMetadata,
    pub rig: Rig,
    pub report: SystemReport,
    /// Catalog entries skipped for lacking structured requirements
    pub skipped_games: usize,
}

/// CompatibilityResponse - Response DTO of the compatibility use case
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityResponse {
    pub metadata: ReportMetadata,
    pub rig: Rig,
    pub games_checked: usize,
    pub report: CompatibilityReport,
}

impl CompatibilityResponse {
    /// True when every game/component pair is compatible
    ///
    /// Used to determine the exit code for CI integration.
    pub fn is_compatible(&self) -> bool {
        self.report.compatible
    }
}

/// BottleneckResponse - Response DTO of the bottleneck use case
#[derive(Debug, Clone, Serialize)]
pub struct BottleneckResponse {
    pub metadata: ReportMetadata,
    pub rig: Rig,
    pub report: BottleneckReport,
}
