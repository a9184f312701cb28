use super::{BottleneckReport, PerformanceEstimate};
use serde::Serialize;

/// Descriptive band of the weighted system score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemTier {
    EntryLevel,
    MidRange,
    MidHigh,
    HighEnd,
    UltraHighEnd,
}

impl SystemTier {
    pub fn from_score(total: f64) -> Self {
        if total >= 15000.0 {
            SystemTier::UltraHighEnd
        } else if total >= 10000.0 {
            SystemTier::HighEnd
        } else if total >= 7000.0 {
            SystemTier::MidHigh
        } else if total >= 4000.0 {
            SystemTier::MidRange
        } else {
            SystemTier::EntryLevel
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SystemTier::UltraHighEnd => "Ultra High-End (4K Ultra)",
            SystemTier::HighEnd => "High-End (1440p Ultra)",
            SystemTier::MidHigh => "Mid-High (1080p Ultra)",
            SystemTier::MidRange => "Mid-Range (1080p Medium-High)",
            SystemTier::EntryLevel => "Entry Level (1080p Low-Medium)",
        }
    }
}

impl std::fmt::Display for SystemTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Display labels for the analysed parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentLabels {
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
}

/// Weighted score of a CPU/GPU/RAM triple
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemScore {
    pub total: u32,
    pub cpu_score: u32,
    pub gpu_score: u32,
    pub ram_score: u32,
    pub ram_gb: u32,
    pub tier: SystemTier,
    pub tier_label: String,
    pub components: ComponentLabels,
}

/// Estimate for one catalog game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameVerdict {
    pub game_id: u32,
    pub name: String,
    #[serde(flatten)]
    pub estimate: PerformanceEstimate,
}

/// Catalog games grouped by achievable quality
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GameBuckets {
    pub ultra: Vec<GameVerdict>,
    pub high: Vec<GameVerdict>,
    pub medium: Vec<GameVerdict>,
    pub low: Vec<GameVerdict>,
    pub cannot_run: Vec<GameVerdict>,
}

impl GameBuckets {
    pub fn total(&self) -> usize {
        self.ultra.len() + self.high.len() + self.medium.len() + self.low.len() + self.cannot_run.len()
    }

    pub fn playable(&self) -> usize {
        self.total() - self.cannot_run.len()
    }
}

/// Complete analysis of a rig against a catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemReport {
    pub system_score: SystemScore,
    pub bottleneck: BottleneckReport,
    pub games: GameBuckets,
    pub recommendations: Vec<String>,
}
