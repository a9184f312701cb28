use crate::application::dto::{AnalysisResponse, BottleneckResponse, CompatibilityResponse};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

/// JsonFormatter adapter rendering responses as pretty-printed JSON
///
/// The response DTOs are serialized directly, so the JSON layout follows
/// their field names (`metadata`, `rig`, `report`, ...).
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render<T: Serialize>(value: &T) -> Result<String> {
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_system_report(&self, response: &AnalysisResponse) -> Result<String> {
        Self::render(response)
    }

    fn format_compatibility_report(&self, response: &CompatibilityResponse) -> Result<String> {
        Self::render(response)
    }

    fn format_bottleneck_report(&self, response: &BottleneckResponse) -> Result<String> {
        Self::render(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware_analysis::domain::{
        CatalogEntry, ComponentKind, Game, GameRequirements, HardwareComponent, ReportMetadata,
        RequirementTier, Rig,
    };
    use crate::hardware_analysis::services::{CompatibilityScorer, SystemAnalyzer};

    fn metadata() -> ReportMetadata {
        ReportMetadata::new(
            "rigscore".to_string(),
            "1.0.0".to_string(),
            "2024-01-01T00:00:00Z".to_string(),
            "urn:uuid:test-123".to_string(),
        )
    }

    fn rig() -> Rig {
        Rig::new(
            HardwareComponent::new(ComponentKind::Cpu, "AMD", "Ryzen 5 5600X").with_benchmark_score(11000),
            HardwareComponent::new(ComponentKind::Gpu, "NVIDIA", "RTX 3060").with_benchmark_score(12000),
            HardwareComponent::new(ComponentKind::Ram, "Corsair", "Vengeance").with_spec_text("16 GB"),
        )
        .unwrap()
    }

    #[test]
    fn test_format_system_report() {
        let rig = rig();
        let catalog = vec![CatalogEntry::new(
            Game::new(10, "Elden Ring"),
            Some(GameRequirements::new(
                RequirementTier::new(6000, 6000, 12, 3),
                RequirementTier::new(9000, 10000, 16, 6),
                RequirementTier::new(14000, 18000, 16, 8),
            )),
        )];
        let report = SystemAnalyzer::default().analyze_system(&rig.cpu, &rig.gpu, &rig.ram, &catalog);
        let response = AnalysisResponse {
            metadata: metadata(),
            rig,
            report,
            skipped_games: 0,
        };

        let json = JsonFormatter::new().format_system_report(&response).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["report_id"], "urn:uuid:test-123");
        assert_eq!(value["rig"]["cpu"]["kind"], "CPU");
        assert_eq!(value["report"]["system_score"]["total"], 10090);
        assert_eq!(value["report"]["games"]["high"][0]["name"], "Elden Ring");
        assert_eq!(value["report"]["games"]["high"][0]["quality"], "high");
    }

    #[test]
    fn test_format_compatibility_report_keeps_unscored_as_null() {
        let rig = rig().with_extra(HardwareComponent::new(ComponentKind::Motherboard, "MSI", "B550"));
        let games = vec![Game::new(1, "Hades").with_minimum_specs("Intel Core i3", "NVIDIA GTX 1050", "4 GB")];
        let report = CompatibilityScorer::default().verify_full(&games, &rig.components());
        let response = CompatibilityResponse {
            metadata: metadata(),
            rig,
            games_checked: 1,
            report,
        };

        let json = JsonFormatter::new()
            .format_compatibility_report(&response)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let details = value["report"]["details"].as_array().unwrap();
        assert_eq!(details.len(), 4);
        assert_eq!(details[3]["kind"], "Motherboard");
        assert!(details[3]["score_percent"].is_null());
    }
}
