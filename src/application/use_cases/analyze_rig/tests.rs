use super::*;
use crate::hardware_analysis::domain::{
    BottleneckType, ComponentKind, GameRequirements, HardwareComponent, RequirementTier,
};
use crate::hardware_analysis::policies::BottleneckThresholds;
use crate::hardware_analysis::services::{BottleneckDetector, PerformanceEstimator};
use std::cell::RefCell;
use std::path::PathBuf;

struct MockRigReader {
    rig: Rig,
}

impl RigReader for MockRigReader {
    fn read_rig(&self, _path: &Path) -> Result<Rig> {
        Ok(self.rig.clone())
    }
}

struct FailingRigReader;

impl RigReader for FailingRigReader {
    fn read_rig(&self, path: &Path) -> Result<Rig> {
        anyhow::bail!("cannot open {}", path.display())
    }
}

struct MockCatalogReader {
    entries: Vec<CatalogEntry>,
}

impl GameCatalogReader for MockCatalogReader {
    fn read_catalog(&self, _path: &Path) -> Result<Vec<CatalogEntry>> {
        Ok(self.entries.clone())
    }
}

#[derive(Default)]
struct RecordingReporter {
    progress: RefCell<Vec<(usize, usize)>>,
    errors: RefCell<Vec<String>>,
    completions: RefCell<Vec<String>>,
}

impl ProgressReporter for &RecordingReporter {
    fn report(&self, _message: &str) {}

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.progress.borrow_mut().push((current, total));
    }

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.completions.borrow_mut().push(message.to_string());
    }
}

fn rig(cpu_score: u32, gpu_score: u32, ram: &str) -> Rig {
    Rig::new(
        HardwareComponent::new(ComponentKind::Cpu, "Intel", "Core i5-12400").with_benchmark_score(cpu_score),
        HardwareComponent::new(ComponentKind::Gpu, "NVIDIA", "GeForce RTX 3060").with_benchmark_score(gpu_score),
        HardwareComponent::new(ComponentKind::Ram, "Corsair", "Vengeance").with_spec_text(ram),
    )
    .unwrap()
}

fn catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            Game::new(1, "Cyberpunk 2077").with_minimum_specs(
                "Intel Core i7-6700",
                "NVIDIA GeForce GTX 1060",
                "12 GB",
            ),
            Some(GameRequirements::new(
                RequirementTier::new(8000, 7000, 8, 3),
                RequirementTier::new(12000, 14000, 12, 6),
                RequirementTier::new(15000, 20000, 16, 10),
            )),
        ),
        CatalogEntry::new(
            Game::new(2, "Hades").with_minimum_specs("Intel Core i3", "NVIDIA GTX 660", "4 GB"),
            None,
        ),
    ]
}

fn request() -> AnalysisRequest {
    AnalysisRequest::new(PathBuf::from("rig.yml"), PathBuf::from("games.yml"))
}

#[test]
fn test_analyze_system_buckets_and_reports_skips() {
    let reporter = RecordingReporter::default();
    let use_case = HardwareAnalysisUseCase::new(
        MockRigReader { rig: rig(9000, 12000, "16 GB") },
        MockCatalogReader { entries: catalog() },
        &reporter,
    );

    let response = use_case.analyze_system(request()).unwrap();
    assert_eq!(response.skipped_games, 1);
    assert_eq!(response.report.games.total(), 1);
    assert_eq!(response.report.games.low.len(), 1);
    assert!(response.metadata.report_id().starts_with("urn:uuid:"));

    assert_eq!(*reporter.progress.borrow(), vec![(1, 1)]);
    assert_eq!(reporter.errors.borrow().len(), 1);
    assert!(reporter.completions.borrow()[0].contains("1 of 1"));
}

#[test]
fn test_check_compatibility_flags_weak_parts() {
    let reporter = RecordingReporter::default();
    let use_case = HardwareAnalysisUseCase::new(
        MockRigReader { rig: rig(9000, 12000, "8 GB") },
        MockCatalogReader { entries: catalog() },
        &reporter,
    );

    let response = use_case.check_compatibility(request()).unwrap();
    assert_eq!(response.games_checked, 2);
    assert_eq!(response.report.details.len(), 6);
    // i5 (70) < i7 (85) and 8 GB < 12 GB for Cyberpunk
    assert!(!response.is_compatible());
    assert_eq!(response.report.incompatible_pairs().count(), 2);
    assert!(reporter.completions.borrow()[0].contains("2 incompatible"));
}

#[test]
fn test_detect_bottleneck_uses_configured_detector() {
    let reporter = RecordingReporter::default();
    let analyzer = SystemAnalyzer::new(
        BottleneckDetector::new(BottleneckThresholds {
            ram_recommended_gb: 32,
            ..Default::default()
        }),
        PerformanceEstimator::default(),
    );
    let use_case = HardwareAnalysisUseCase::new(
        MockRigReader { rig: rig(9000, 12000, "16 GB") },
        MockCatalogReader { entries: vec![] },
        &reporter,
    )
    .with_analyzer(analyzer);

    let response = use_case
        .detect_bottleneck(BottleneckRequest::new(PathBuf::from("rig.yml")))
        .unwrap();
    assert_eq!(response.report.bottleneck_type, BottleneckType::Ram);
}

#[test]
fn test_reader_errors_propagate() {
    let reporter = RecordingReporter::default();
    let use_case = HardwareAnalysisUseCase::new(
        FailingRigReader,
        MockCatalogReader { entries: catalog() },
        &reporter,
    );

    let err = use_case.analyze_system(request()).unwrap_err();
    assert!(err.to_string().contains("cannot open rig.yml"));
}
