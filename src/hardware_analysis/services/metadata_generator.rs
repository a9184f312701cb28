use crate::hardware_analysis::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// MetadataGenerator service stamping reports with time and identity
pub struct MetadataGenerator;

impl MetadataGenerator {
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        ReportMetadata::new(
            tool_name.to_string(),
            tool_version.to_string(),
            Utc::now().to_rfc3339(),
            format!("urn:uuid:{}", Uuid::new_v4()),
        )
    }

    /// Metadata naming this binary and its compile-time version
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
