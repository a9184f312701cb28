use crate::application::dto::{
    AnalysisRequest, AnalysisResponse, BottleneckRequest, BottleneckResponse,
    CompatibilityResponse,
};
use crate::hardware_analysis::domain::{CatalogEntry, Game, Rig};
use crate::hardware_analysis::services::{CompatibilityScorer, MetadataGenerator, SystemAnalyzer};
use crate::ports::inbound::HardwareAnalysisPort;
use crate::ports::outbound::{GameCatalogReader, ProgressReporter, RigReader};
use crate::shared::Result;
use std::path::Path;
use tracing::info;

/// HardwareAnalysisUseCase - Orchestrates rig analysis workflows
///
/// Loads the rig and catalog through the injected readers, runs the domain
/// services and packages the result with report metadata. The services
/// default to the built-in tables and can be replaced with configured ones.
///
/// # Type Parameters
/// * `RR` - RigReader implementation
/// * `CR` - GameCatalogReader implementation
/// * `PR` - ProgressReporter implementation
pub struct HardwareAnalysisUseCase<RR, CR, PR> {
    rig_reader: RR,
    catalog_reader: CR,
    progress_reporter: PR,
    analyzer: SystemAnalyzer,
    scorer: CompatibilityScorer,
}

impl<RR, CR, PR> HardwareAnalysisUseCase<RR, CR, PR>
where
    RR: RigReader,
    CR: GameCatalogReader,
    PR: ProgressReporter,
{
    /// Creates a new use case with injected dependencies and default services
    pub fn new(rig_reader: RR, catalog_reader: CR, progress_reporter: PR) -> Self {
        Self {
            rig_reader,
            catalog_reader,
            progress_reporter,
            analyzer: SystemAnalyzer::default(),
            scorer: CompatibilityScorer::default(),
        }
    }

    pub fn with_analyzer(mut self, analyzer: SystemAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn with_scorer(mut self, scorer: CompatibilityScorer) -> Self {
        self.scorer = scorer;
        self
    }

    fn load_rig(&self, path: &Path) -> Result<Rig> {
        self.progress_reporter
            .report(&format!("📖 Loading rig from: {}", path.display()));
        let rig = self.rig_reader.read_rig(path)?;
        self.progress_reporter.report(&format!(
            "✅ Rig: {} / {} / {}GB RAM",
            rig.cpu.label(),
            rig.gpu.label(),
            rig.ram.ram_capacity_gb()
        ));
        Ok(rig)
    }

    fn load_catalog(&self, path: &Path) -> Result<Vec<CatalogEntry>> {
        self.progress_reporter
            .report(&format!("📖 Loading game catalog from: {}", path.display()));
        let catalog = self.catalog_reader.read_catalog(path)?;
        self.progress_reporter
            .report(&format!("✅ Loaded {} game(s)", catalog.len()));
        Ok(catalog)
    }
}

impl<RR, CR, PR> HardwareAnalysisPort for HardwareAnalysisUseCase<RR, CR, PR>
where
    RR: RigReader,
    CR: GameCatalogReader,
    PR: ProgressReporter,
{
    fn analyze_system(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        let rig = self.load_rig(&request.rig_path)?;
        let catalog = self.load_catalog(&request.catalog_path)?;

        let skipped_games = catalog.iter().filter(|e| e.requirements.is_none()).count();
        if skipped_games > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} game(s) have no structured requirements and were skipped.",
                skipped_games
            ));
        }

        self.progress_reporter.report("🔍 Estimating performance...");
        let report = self.analyzer.analyze_system_with_progress(
            &rig.cpu,
            &rig.gpu,
            &rig.ram,
            &catalog,
            |done, total| self.progress_reporter.report_progress(done, total, None),
        );

        self.progress_reporter.report_completion(&format!(
            "✅ Analysis complete: {} of {} game(s) playable",
            report.games.playable(),
            report.games.total()
        ));
        info!(
            total_score = report.system_score.total,
            games = report.games.total(),
            "system analysis finished"
        );

        Ok(AnalysisResponse {
            metadata: MetadataGenerator::generate_default_metadata(),
            rig,
            report,
            skipped_games,
        })
    }

    fn check_compatibility(&self, request: AnalysisRequest) -> Result<CompatibilityResponse> {
        let rig = self.load_rig(&request.rig_path)?;
        let catalog = self.load_catalog(&request.catalog_path)?;
        let games: Vec<Game> = catalog.into_iter().map(|entry| entry.game).collect();

        self.progress_reporter
            .report("🔍 Checking compatibility...");
        let report = self.scorer.verify_full(&games, &rig.components());

        let failures = report.incompatible_pairs().count();
        if failures == 0 {
            self.progress_reporter
                .report_completion("✅ Every game is compatible with this rig");
        } else {
            self.progress_reporter.report_completion(&format!(
                "⚠️  {} incompatible game/component pair(s) found",
                failures
            ));
        }
        info!(
            compatible = report.compatible,
            pairs = report.details.len(),
            "compatibility check finished"
        );

        Ok(CompatibilityResponse {
            metadata: MetadataGenerator::generate_default_metadata(),
            rig,
            games_checked: games.len(),
            report,
        })
    }

    fn detect_bottleneck(&self, request: BottleneckRequest) -> Result<BottleneckResponse> {
        let rig = self.load_rig(&request.rig_path)?;
        let report = self.analyzer.detector().detect(&rig.cpu, &rig.gpu, &rig.ram);

        self.progress_reporter.report_completion(&format!(
            "✅ Bottleneck analysis complete: {}",
            report.bottleneck_type
        ));
        info!(kind = %report.bottleneck_type, severity = %report.severity, "bottleneck check finished");

        Ok(BottleneckResponse {
            metadata: MetadataGenerator::generate_default_metadata(),
            rig,
            report,
        })
    }
}

#[cfg(test)]
mod tests;
