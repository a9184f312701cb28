use crate::application::dto::{AnalysisResponse, BottleneckResponse, CompatibilityResponse};
use crate::shared::Result;

/// ReportFormatter port for rendering analysis results
///
/// This port abstracts the formatting logic for the different output
/// formats (JSON, Markdown).
pub trait ReportFormatter {
    /// Formats a full system report
    ///
    /// # Arguments
    /// * `response` - The analysis result with its rig and report metadata
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format_system_report(&self, response: &AnalysisResponse) -> Result<String>;

    /// Formats a game x component compatibility report
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format_compatibility_report(&self, response: &CompatibilityResponse) -> Result<String>;

    /// Formats a standalone bottleneck report
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format_bottleneck_report(&self, response: &BottleneckResponse) -> Result<String>;
}
