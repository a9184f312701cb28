use std::path::PathBuf;

/// AnalysisRequest - Request DTO for the catalog-wide use cases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Path to the rig description (YAML, JSON or TOML)
    pub rig_path: PathBuf,
    /// Path to the game catalog (YAML, JSON or TOML)
    pub catalog_path: PathBuf,
}

impl AnalysisRequest {
    pub fn new(rig_path: PathBuf, catalog_path: PathBuf) -> Self {
        Self {
            rig_path,
            catalog_path,
        }
    }
}

/// BottleneckRequest - Request DTO for rig-only analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BottleneckRequest {
    pub rig_path: PathBuf,
}

impl BottleneckRequest {
    pub fn new(rig_path: PathBuf) -> Self {
        Self { rig_path }
    }
}
