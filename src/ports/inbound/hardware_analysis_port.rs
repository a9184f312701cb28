use crate::application::dto::{
    AnalysisRequest, AnalysisResponse, BottleneckRequest, BottleneckResponse,
    CompatibilityResponse,
};
use crate::shared::Result;

/// HardwareAnalysisPort - Inbound port for the rig analysis use cases
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to analyze a rig. It represents the application's public API.
pub trait HardwareAnalysisPort {
    /// Scores the rig and estimates every rated game in the catalog
    ///
    /// # Errors
    /// Returns an error if the rig or the catalog cannot be loaded
    fn analyze_system(&self, request: AnalysisRequest) -> Result<AnalysisResponse>;

    /// Checks every catalog game against every rig component
    ///
    /// An incompatible rig is a successful result; callers inspect
    /// [`CompatibilityResponse::is_compatible`].
    ///
    /// # Errors
    /// Returns an error if the rig or the catalog cannot be loaded
    fn check_compatibility(&self, request: AnalysisRequest) -> Result<CompatibilityResponse>;

    /// Detects bottlenecks in the rig alone
    ///
    /// # Errors
    /// Returns an error if the rig cannot be loaded
    fn detect_bottleneck(&self, request: BottleneckRequest) -> Result<BottleneckResponse>;
}
