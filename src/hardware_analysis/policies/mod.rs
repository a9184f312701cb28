mod bottleneck_thresholds;
mod quality_ladder;
mod score_table;

pub use bottleneck_thresholds::{BottleneckThresholds, SeverityStep};
pub use quality_ladder::QualityLadder;
pub use score_table::{BrandFamilies, FamilyMatch, ScoreTable, DEFAULT_SCORE};
