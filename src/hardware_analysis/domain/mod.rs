pub mod bottleneck;
pub mod compatibility;
pub mod component;
pub mod performance;
pub mod report_metadata;
pub mod requirements;
pub mod rig;
pub mod system_report;

pub use bottleneck::{BottleneckReport, BottleneckType, Severity};
pub use compatibility::{
    CompatibilityReport, CompatibilityResult, PairCompatibility, PerformanceTier,
};
pub use component::{parse_capacity_gb, ComponentKind, HardwareComponent};
pub use performance::{Limiter, PerformanceEstimate, Quality};
pub use report_metadata::ReportMetadata;
pub use requirements::{
    CatalogEntry, Game, GameRequirements, MinimumSpecs, RequirementTier, TierLevel,
};
pub use rig::Rig;
pub use system_report::{
    ComponentLabels, GameBuckets, GameVerdict, SystemReport, SystemScore, SystemTier,
};
