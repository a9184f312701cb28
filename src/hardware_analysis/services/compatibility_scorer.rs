use crate::hardware_analysis::domain::{
    parse_capacity_gb, CompatibilityReport, CompatibilityResult, ComponentKind, Game,
    HardwareComponent, PairCompatibility, PerformanceTier,
};
use crate::hardware_analysis::services::ScoreLookup;
use tracing::debug;

/// Score gap between the best CPU and best GPU that counts as unbalanced
const BALANCE_GAP: u32 = 20;

/// CompatibilityScorer service comparing parts against a game's free-text
/// minimum requirements
///
/// Scores on both sides come from the same [`ScoreLookup`], so a part and a
/// requirement naming the same family compare as equal.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    lookup: ScoreLookup,
}

impl CompatibilityScorer {
    pub fn new(lookup: ScoreLookup) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &ScoreLookup {
        &self.lookup
    }

    /// Checks one component against one game
    pub fn check(&self, game: &Game, component: &HardwareComponent) -> CompatibilityResult {
        let result = match component.kind() {
            ComponentKind::Cpu => self.check_scored(component, &game.minimum_specs.cpu),
            ComponentKind::Gpu => self.check_scored(component, &game.minimum_specs.gpu),
            ComponentKind::Ram => Self::check_ram(component, &game.minimum_specs.ram),
            ComponentKind::Motherboard => {
                CompatibilityResult::unscored("No compatibility rule for Motherboard")
            }
        };
        debug!(
            game = %game.name,
            component = %component.label(),
            compatible = result.compatible,
            score = ?result.score_percent,
            "compatibility checked"
        );
        result
    }

    fn check_scored(&self, component: &HardwareComponent, requirement: &str) -> CompatibilityResult {
        let kind = component.kind();
        let have = self.lookup.score_component(component);
        let required = self.lookup.score_from_requirement_string(kind, requirement);

        if required == 0 {
            return CompatibilityResult::compatible(
                format!("{} compatible - performance 100%", kind),
                100.0,
            );
        }

        let ratio = f64::from(have) / f64::from(required) * 100.0;
        if have >= required {
            let percent = ratio.min(100.0);
            CompatibilityResult::compatible(
                format!("{} compatible - performance {:.0}%", kind, percent),
                percent,
            )
        } else {
            CompatibilityResult::incompatible(
                format!("{} insufficient. Requires: {}", kind, requirement),
                ratio,
            )
        }
    }

    fn check_ram(component: &HardwareComponent, requirement: &str) -> CompatibilityResult {
        let required = parse_capacity_gb(requirement);
        let available = component.ram_capacity_gb();

        if available < required {
            return CompatibilityResult::incompatible(
                format!(
                    "RAM insufficient. Requires {}GB, have {}GB",
                    required, available
                ),
                f64::from(available) / f64::from(required) * 100.0,
            );
        }

        let percent = if required == 0 {
            100.0
        } else {
            let ratio = f64::from(available) / f64::from(required);
            if ratio >= 2.0 {
                100.0
            } else {
                50.0 + (ratio - 1.0) * 50.0
            }
        };

        CompatibilityResult::compatible(
            format!(
                "RAM sufficient ({}GB available, requires {}GB)",
                available, required
            ),
            percent.min(100.0),
        )
    }

    /// Checks every game against every component and aggregates the outcome
    pub fn verify_full(&self, games: &[Game], components: &[HardwareComponent]) -> CompatibilityReport {
        let mut details = Vec::with_capacity(games.len() * components.len());
        for game in games {
            for component in components {
                details.push(PairCompatibility {
                    game: game.name.clone(),
                    component: component.label(),
                    kind: component.kind(),
                    result: self.check(game, component),
                });
            }
        }

        let compatible = details.iter().all(|d| d.result.compatible);
        let scores: Vec<f64> = details.iter().filter_map(|d| d.result.score_percent).collect();

        let (overall_score, performance_tier) = if scores.is_empty() {
            (0.0, None)
        } else {
            let average = scores.iter().sum::<f64>() / scores.len() as f64;
            (average, Some(PerformanceTier::from_average(average)))
        };

        let recommendations = self.recommendations(components, overall_score);

        CompatibilityReport {
            compatible,
            details,
            overall_score,
            performance_tier,
            recommendations,
        }
    }

    fn recommendations(&self, components: &[HardwareComponent], overall_score: f64) -> Vec<String> {
        let mut recommendations = Vec::new();

        let band = if overall_score < 40.0 {
            "Your hardware is below the minimum requirements. Consider upgrading key components."
        } else if overall_score < 60.0 {
            "Your hardware meets the minimum requirements but performance may be low."
        } else if overall_score < 80.0 {
            "Your hardware is good. Games should run well on medium-high settings."
        } else {
            "Excellent hardware! You can play on ultra settings with good performance."
        };
        recommendations.push(band.to_string());

        let best = |kind: ComponentKind| {
            components
                .iter()
                .filter(|c| c.kind() == kind)
                .map(|c| self.lookup.score_component(c))
                .max()
        };

        if let (Some(cpu), Some(gpu)) = (best(ComponentKind::Cpu), best(ComponentKind::Gpu)) {
            if cpu.abs_diff(gpu) > BALANCE_GAP {
                let advice = if cpu > gpu {
                    "Your CPU is stronger than your GPU. Consider upgrading the GPU for better balance."
                } else {
                    "Your GPU is stronger than your CPU. Consider upgrading the CPU to avoid bottlenecks."
                };
                recommendations.push(advice.to_string());
            }
        }

        recommendations
    }
}
