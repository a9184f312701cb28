mod bottleneck_detector;
mod compatibility_scorer;
mod metadata_generator;
mod performance_estimator;
mod score_lookup;
mod system_analyzer;

pub use bottleneck_detector::BottleneckDetector;
pub use compatibility_scorer::CompatibilityScorer;
pub use metadata_generator::MetadataGenerator;
pub use performance_estimator::PerformanceEstimator;
pub use score_lookup::ScoreLookup;
pub use system_analyzer::SystemAnalyzer;
