use crate::hardware_analysis::domain::{
    CatalogEntry, ComponentLabels, GameBuckets, GameVerdict, HardwareComponent, Quality,
    SystemReport, SystemScore, SystemTier,
};
use crate::hardware_analysis::services::{BottleneckDetector, PerformanceEstimator};
use tracing::debug;

/// Weights in percent, kept integral so the truncated total is exact
const GPU_WEIGHT: u64 = 50;
const CPU_WEIGHT: u64 = 35;
const RAM_WEIGHT: u64 = 15;
/// Points per installed GB of RAM
const RAM_POINTS_PER_GB: u32 = 100;

const ENTRY_LEVEL_BELOW: u32 = 7000;
const MID_RANGE_BELOW: u32 = 10000;

/// SystemAnalyzer service combining scoring, bottleneck detection and
/// per-game estimates into one report
#[derive(Debug, Clone, Default)]
pub struct SystemAnalyzer {
    detector: BottleneckDetector,
    estimator: PerformanceEstimator,
}

impl SystemAnalyzer {
    pub fn new(detector: BottleneckDetector, estimator: PerformanceEstimator) -> Self {
        Self {
            detector,
            estimator,
        }
    }

    pub fn detector(&self) -> &BottleneckDetector {
        &self.detector
    }

    /// Weighted score: 50% GPU, 35% CPU, 15% RAM (100 points per GB)
    pub fn system_score(
        cpu: &HardwareComponent,
        gpu: &HardwareComponent,
        ram: &HardwareComponent,
    ) -> SystemScore {
        let cpu_score = cpu.effective_score();
        let gpu_score = gpu.effective_score();
        let ram_gb = ram.ram_capacity_gb();
        let ram_score = ram_gb.saturating_mul(RAM_POINTS_PER_GB);

        let weighted = u64::from(gpu_score) * GPU_WEIGHT
            + u64::from(cpu_score) * CPU_WEIGHT
            + u64::from(ram_score) * RAM_WEIGHT;
        let tier = SystemTier::from_score(weighted as f64 / 100.0);

        SystemScore {
            total: u32::try_from(weighted / 100).unwrap_or(u32::MAX),
            cpu_score,
            gpu_score,
            ram_score,
            ram_gb,
            tier,
            tier_label: tier.label().to_string(),
            components: ComponentLabels {
                cpu: cpu.label(),
                gpu: gpu.label(),
                ram: format!("{}GB RAM", ram_gb),
            },
        }
    }

    /// Analyzes the rig against every catalog entry that has requirements
    pub fn analyze_system(
        &self,
        cpu: &HardwareComponent,
        gpu: &HardwareComponent,
        ram: &HardwareComponent,
        catalog: &[CatalogEntry],
    ) -> SystemReport {
        self.analyze_system_with_progress(cpu, gpu, ram, catalog, |_, _| {})
    }

    /// Same as [`analyze_system`](Self::analyze_system), calling `on_game`
    /// with (done, total) after each estimated game
    pub fn analyze_system_with_progress<F>(
        &self,
        cpu: &HardwareComponent,
        gpu: &HardwareComponent,
        ram: &HardwareComponent,
        catalog: &[CatalogEntry],
        mut on_game: F,
    ) -> SystemReport
    where
        F: FnMut(usize, usize),
    {
        let system_score = Self::system_score(cpu, gpu, ram);
        let bottleneck = self.detector.detect(cpu, gpu, ram);

        let rated = catalog.iter().filter(|e| e.requirements.is_some()).count();
        let mut games = GameBuckets::default();
        let mut done = 0;

        for entry in catalog {
            let Some(requirements) = &entry.requirements else {
                debug!(game_id = entry.game.id, name = %entry.game.name, "no requirements, skipping");
                continue;
            };

            let estimate = self.estimator.estimate(cpu, gpu, ram, requirements);
            let verdict = GameVerdict {
                game_id: entry.game.id,
                name: entry.game.name.clone(),
                estimate,
            };

            let bucket = if !verdict.estimate.can_run {
                &mut games.cannot_run
            } else {
                match verdict.estimate.quality {
                    Quality::Ultra => &mut games.ultra,
                    Quality::High => &mut games.high,
                    Quality::Medium => &mut games.medium,
                    Quality::Low | Quality::None => &mut games.low,
                }
            };
            bucket.push(verdict);

            done += 1;
            on_game(done, rated);
        }

        let mut recommendations = Vec::new();
        if bottleneck.has_bottleneck {
            recommendations.extend(bottleneck.recommendations.iter().cloned());
        }

        if system_score.total < ENTRY_LEVEL_BELOW {
            recommendations.push(
                "Your system is entry-level. Consider upgrading both GPU and CPU for a better experience."
                    .to_string(),
            );
        } else if system_score.total < MID_RANGE_BELOW {
            recommendations.push(
                "Your system is mid-range. A better GPU would give the biggest jump in performance."
                    .to_string(),
            );
        }

        let ram_recommended = self.detector.thresholds().ram_recommended_gb;
        if system_score.ram_gb < ram_recommended {
            recommendations.push(format!(
                "{}GB of RAM is the current standard for gaming. Consider expanding.",
                ram_recommended
            ));
        }

        debug!(
            total = system_score.total,
            playable = games.playable(),
            cannot_run = games.cannot_run.len(),
            "system analysis done"
        );

        SystemReport {
            system_score,
            bottleneck,
            games,
            recommendations,
        }
    }
}
