use crate::hardware_analysis::domain::{
    GameRequirements, HardwareComponent, Limiter, PerformanceEstimate, Quality, RequirementTier,
    TierLevel,
};
use crate::hardware_analysis::policies::QualityLadder;
use tracing::debug;

/// Ratio used for a component whose requirement is 0, so it never limits
const UNCONSTRAINED_RATIO: f64 = 999.0;

/// Scores of the rig being estimated
#[derive(Debug, Clone, Copy)]
struct RigScores {
    cpu: u32,
    gpu: u32,
    ram_gb: u32,
}

/// PerformanceEstimator service predicting quality tier and frame rate
#[derive(Debug, Clone, Default)]
pub struct PerformanceEstimator {
    ladder: QualityLadder,
}

impl PerformanceEstimator {
    pub fn new(ladder: QualityLadder) -> Self {
        Self { ladder }
    }

    pub fn ladder(&self) -> &QualityLadder {
        &self.ladder
    }

    /// Estimates how a game with `requirements` runs on the given parts
    ///
    /// Tiers are tried from ultra down and the first one fully cleared wins.
    /// Requirement tiers that are not non-decreasing are accepted as given.
    pub fn estimate(
        &self,
        cpu: &HardwareComponent,
        gpu: &HardwareComponent,
        ram: &HardwareComponent,
        requirements: &GameRequirements,
    ) -> PerformanceEstimate {
        let rig = RigScores {
            cpu: cpu.effective_score(),
            gpu: gpu.effective_score(),
            ram_gb: ram.ram_capacity_gb(),
        };
        let minimum = requirements.tier(TierLevel::Minimum);

        if !Self::clears(rig, minimum) {
            let limiter = self.limiter(rig, minimum);
            let reason = Self::failure_reason(rig, minimum);
            debug!(?limiter, %reason, "minimum requirements not met");
            return PerformanceEstimate::cannot_run(limiter, reason);
        }

        let (quality, fps) = self.quality_and_fps(rig, requirements);
        let reference = if quality == Quality::Ultra {
            TierLevel::Ultra
        } else {
            TierLevel::Recommended
        };
        let limiter = self.limiter(rig, requirements.tier(reference));
        debug!(%quality, fps, ?limiter, "performance estimated");

        PerformanceEstimate::runs_at(quality, fps, limiter)
    }

    fn clears(rig: RigScores, tier: &RequirementTier) -> bool {
        rig.cpu >= tier.cpu_score && rig.gpu >= tier.gpu_score && rig.ram_gb >= tier.ram_gb
    }

    fn quality_and_fps(&self, rig: RigScores, req: &GameRequirements) -> (Quality, u32) {
        for (level, quality) in [(TierLevel::Ultra, Quality::Ultra), (TierLevel::Recommended, Quality::High)] {
            let tier = req.tier(level);
            if Self::clears(rig, tier) {
                let fps = self.fps(rig, f64::from(tier.cpu_score), f64::from(tier.gpu_score), quality);
                return (quality, fps);
            }
        }

        // RAM already passed the minimum gate and is not re-checked here
        let medium_cpu = f64::from(req.minimum.cpu_score) * self.ladder.medium_multiplier;
        let medium_gpu = f64::from(req.minimum.gpu_score) * self.ladder.medium_multiplier;
        if f64::from(rig.cpu) >= medium_cpu && f64::from(rig.gpu) >= medium_gpu {
            return (Quality::Medium, self.fps(rig, medium_cpu, medium_gpu, Quality::Medium));
        }

        let fps = self.fps(
            rig,
            f64::from(req.minimum.cpu_score),
            f64::from(req.minimum.gpu_score),
            Quality::Low,
        );
        (Quality::Low, fps)
    }

    /// Base FPS of the tier scaled by the weaker of the two ratios
    fn fps(&self, rig: RigScores, req_cpu: f64, req_gpu: f64, quality: Quality) -> u32 {
        let base = self.ladder.base_fps(quality);
        if req_cpu == 0.0 || req_gpu == 0.0 {
            return base;
        }

        let limiting = (f64::from(rig.cpu) / req_cpu).min(f64::from(rig.gpu) / req_gpu);
        let estimated = (f64::from(base) * limiting).floor() as u32;
        self.ladder.clamp_fps(estimated)
    }

    fn limiter(&self, rig: RigScores, tier: &RequirementTier) -> Option<Limiter> {
        let ratio = |have: u32, required: u32| {
            if required > 0 {
                f64::from(have) / f64::from(required)
            } else {
                UNCONSTRAINED_RATIO
            }
        };
        let cpu_ratio = ratio(rig.cpu, tier.cpu_score);
        let gpu_ratio = ratio(rig.gpu, tier.gpu_score);
        let tolerance = self.ladder.limiter_tolerance;

        if rig.ram_gb < tier.ram_gb {
            Some(Limiter::Ram)
        } else if cpu_ratio < gpu_ratio * tolerance {
            Some(Limiter::Cpu)
        } else if gpu_ratio < cpu_ratio * tolerance {
            Some(Limiter::Gpu)
        } else {
            None
        }
    }

    fn failure_reason(rig: RigScores, minimum: &RequirementTier) -> String {
        let deficit = |have: u32, required: u32| {
            f64::from(required - have) / f64::from(required) * 100.0
        };

        let mut reasons = Vec::new();
        if rig.cpu < minimum.cpu_score {
            reasons.push(format!(
                "CPU insufficient ({:.0}% below minimum)",
                deficit(rig.cpu, minimum.cpu_score)
            ));
        }
        if rig.gpu < minimum.gpu_score {
            reasons.push(format!(
                "GPU insufficient ({:.0}% below minimum)",
                deficit(rig.gpu, minimum.gpu_score)
            ));
        }
        if rig.ram_gb < minimum.ram_gb {
            reasons.push(format!(
                "RAM insufficient (requires {} GB, have {} GB)",
                minimum.ram_gb, rig.ram_gb
            ));
        }

        if reasons.is_empty() {
            "Does not meet minimum requirements".to_string()
        } else {
            reasons.join(" | ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware_analysis::domain::ComponentKind;

    fn parts(cpu: u32, gpu: u32, ram_gb: u32) -> [HardwareComponent; 3] {
        [
            HardwareComponent::new(ComponentKind::Cpu, "Intel", "Core i7").with_benchmark_score(cpu),
            HardwareComponent::new(ComponentKind::Gpu, "NVIDIA", "RTX 4070").with_benchmark_score(gpu),
            HardwareComponent::new(ComponentKind::Ram, "G.Skill", "Trident")
                .with_spec_text(format!("{} GB", ram_gb)),
        ]
    }

    fn requirements() -> GameRequirements {
        GameRequirements::new(
            RequirementTier::new(8000, 7000, 8, 3),
            RequirementTier::new(12000, 14000, 12, 6),
            RequirementTier::new(13000, 16000, 16, 8),
        )
    }

    fn estimate(cpu: u32, gpu: u32, ram_gb: u32, req: &GameRequirements) -> PerformanceEstimate {
        let [c, g, r] = parts(cpu, gpu, ram_gb);
        PerformanceEstimator::default().estimate(&c, &g, &r, req)
    }

    #[test]
    fn test_ultra_scenario() {
        let result = estimate(15000, 20000, 20, &requirements());
        assert!(result.can_run);
        assert_eq!(result.quality, Quality::Ultra);
        // floor(min(15000/13000, 20000/16000) * 90)
        assert_eq!(result.fps_estimate, 103);
        assert_eq!(result.bottleneck, None);
        assert!(result.reason.is_empty());
    }

    #[test]
    fn test_low_scenario_runs() {
        let result = estimate(9000, 12000, 16, &requirements());
        assert!(result.can_run);
        assert_eq!(result.quality, Quality::Low);
        assert_eq!(result.fps_estimate, 33);
    }

    #[test]
    fn test_high_with_cpu_limiter() {
        let result = estimate(12000, 28000, 16, &requirements());
        assert_eq!(result.quality, Quality::High);
        assert_eq!(result.fps_estimate, 60);
        assert_eq!(result.bottleneck, Some(Limiter::Cpu));
    }

    #[test]
    fn test_medium_ignores_ram_and_uses_scaled_minimum() {
        let req = GameRequirements::new(
            RequirementTier::new(8000, 7000, 8, 3),
            RequirementTier::new(12000, 14000, 16, 6),
            RequirementTier::new(15000, 20000, 20, 10),
        );
        let result = estimate(10000, 9000, 8, &req);
        assert_eq!(result.quality, Quality::Medium);
        // floor(45 * min(10000/9600, 9000/8400))
        assert_eq!(result.fps_estimate, 46);
        assert_eq!(result.bottleneck, Some(Limiter::Ram));
    }

    #[test]
    fn test_cannot_run_reason_and_limiter() {
        let result = estimate(4000, 7000, 4, &requirements());
        assert!(!result.can_run);
        assert_eq!(result.quality, Quality::None);
        assert_eq!(result.fps_estimate, 0);
        assert_eq!(result.bottleneck, Some(Limiter::Ram));
        assert_eq!(
            result.reason,
            "CPU insufficient (50% below minimum) | RAM insufficient (requires 8 GB, have 4 GB)"
        );
    }

    #[test]
    fn test_cannot_run_gpu_limiter() {
        let result = estimate(8000, 2000, 8, &requirements());
        assert!(!result.can_run);
        assert_eq!(result.bottleneck, Some(Limiter::Gpu));
        assert_eq!(result.reason, "GPU insufficient (71% below minimum)");
    }

    #[test]
    fn test_fps_clamped_to_ceiling() {
        let result = estimate(100_000, 100_000, 32, &requirements());
        assert_eq!(result.quality, Quality::Ultra);
        assert_eq!(result.fps_estimate, 240);
    }

    #[test]
    fn test_zero_thresholds_use_base_fps() {
        let req = GameRequirements::new(
            RequirementTier::default(),
            RequirementTier::default(),
            RequirementTier::default(),
        );
        let result = estimate(1, 1, 1, &req);
        assert_eq!(result.quality, Quality::Ultra);
        assert_eq!(result.fps_estimate, 90);
        assert_eq!(result.bottleneck, None);
    }

    #[test]
    fn test_unordered_tiers_do_not_panic() {
        let req = GameRequirements::new(
            RequirementTier::new(8000, 7000, 8, 3),
            RequirementTier::new(1000, 1000, 1, 1),
            RequirementTier::new(20000, 0, 4, 0),
        );
        let result = estimate(9000, 8000, 8, &req);
        assert!(result.can_run);
        assert_eq!(result.quality, Quality::High);
        assert_eq!(result.fps_estimate, 240);
    }

    #[test]
    fn test_unknown_scores_cannot_run() {
        let [_, g, r] = parts(0, 9000, 16);
        let cpu = HardwareComponent::new(ComponentKind::Cpu, "Intel", "Core i5");
        let result = PerformanceEstimator::default().estimate(&cpu, &g, &r, &requirements());
        assert!(!result.can_run);
        assert!(result.reason.starts_with("CPU insufficient (100% below minimum)"));
    }

    #[test]
    fn test_custom_ladder() {
        let estimator = PerformanceEstimator::new(QualityLadder {
            ultra_base_fps: 120,
            fps_ceiling: 100,
            ..Default::default()
        });
        let [c, g, r] = parts(15000, 20000, 20);
        let result = estimator.estimate(&c, &g, &r, &requirements());
        assert_eq!(result.fps_estimate, 100);
    }

    #[test]
    fn test_inverted_fps_range_falls_back_to_ceiling() {
        let estimator = PerformanceEstimator::new(QualityLadder {
            fps_floor: 300,
            ..Default::default()
        });
        let [c, g, r] = parts(15000, 20000, 20);
        let result = estimator.estimate(&c, &g, &r, &requirements());
        assert!(result.can_run);
        assert_eq!(result.quality, Quality::Ultra);
        assert_eq!(result.fps_estimate, 240);
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let req = requirements();
        assert_eq!(estimate(9000, 12000, 16, &req), estimate(9000, 12000, 16, &req));
    }
}
