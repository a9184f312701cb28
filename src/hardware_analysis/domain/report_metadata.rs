use serde::Serialize;

/// ReportMetadata value object stamped on every rendered report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetadata {
    tool_name: String,
    tool_version: String,
    generated_at: String,
    report_id: String,
}

impl ReportMetadata {
    pub fn new(
        tool_name: String,
        tool_version: String,
        generated_at: String,
        report_id: String,
    ) -> Self {
        Self {
            tool_name,
            tool_version,
            generated_at,
            report_id,
        }
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// RFC 3339 timestamp
    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    /// `urn:uuid:` identifier, unique per report
    pub fn report_id(&self) -> &str {
        &self.report_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_all_fields() {
        let metadata = ReportMetadata::new(
            "rigscore".to_string(),
            "0.4.0".to_string(),
            "2024-05-01T10:00:00Z".to_string(),
            "urn:uuid:0000".to_string(),
        );
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["tool_name"], "rigscore");
        assert_eq!(json["generated_at"], "2024-05-01T10:00:00Z");
        assert_eq!(json["report_id"], "urn:uuid:0000");
    }
}
