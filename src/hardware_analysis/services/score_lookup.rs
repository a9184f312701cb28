use crate::hardware_analysis::domain::{ComponentKind, HardwareComponent};
use crate::hardware_analysis::policies::{ScoreTable, DEFAULT_SCORE};
use tracing::debug;

/// ScoreLookup service normalizing brand and model text to a score
///
/// Holds one table per scored component kind. Kinds without a table (RAM,
/// Motherboard) always receive the default score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreLookup {
    cpu: ScoreTable,
    gpu: ScoreTable,
    default_score: u32,
}

impl Default for ScoreLookup {
    fn default() -> Self {
        Self::new(ScoreTable::default_cpu(), ScoreTable::default_gpu(), DEFAULT_SCORE)
    }
}

impl ScoreLookup {
    pub fn new(cpu: ScoreTable, gpu: ScoreTable, default_score: u32) -> Self {
        Self {
            cpu,
            gpu,
            default_score,
        }
    }

    pub fn default_score(&self) -> u32 {
        self.default_score
    }

    fn table(&self, kind: ComponentKind) -> Option<&ScoreTable> {
        match kind {
            ComponentKind::Cpu => Some(&self.cpu),
            ComponentKind::Gpu => Some(&self.gpu),
            ComponentKind::Ram | ComponentKind::Motherboard => None,
        }
    }

    /// Score of a concrete part
    pub fn score_for(&self, kind: ComponentKind, brand: &str, model: &str) -> u32 {
        let found = self
            .table(kind)
            .and_then(|table| table.match_model(brand, model));

        match found {
            Some(m) => {
                debug!(%kind, brand, model, family = m.family, score = m.score, "score table hit");
                m.score
            }
            None => {
                debug!(%kind, brand, model, score = self.default_score, "score table miss, using default");
                self.default_score
            }
        }
    }

    /// Convenience for [`score_for`](Self::score_for) on a component record
    pub fn score_component(&self, component: &HardwareComponent) -> u32 {
        self.score_for(component.kind(), component.brand(), component.model())
    }

    /// Score implied by a free-text requirement such as "Intel Core i5-4460"
    pub fn score_from_requirement_string(&self, kind: ComponentKind, text: &str) -> u32 {
        let found = self.table(kind).and_then(|table| table.match_text(text));

        match found {
            Some(m) => {
                debug!(%kind, text, brand = m.brand, family = m.family, score = m.score, "requirement matched");
                m.score
            }
            None => {
                debug!(%kind, text, score = self.default_score, "requirement not recognised, using default");
                self.default_score
            }
        }
    }
}
