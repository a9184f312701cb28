use serde::{Deserialize, Serialize};

/// One threshold bundle of a game's requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequirementTier {
    #[serde(default)]
    pub cpu_score: u32,
    #[serde(default)]
    pub gpu_score: u32,
    #[serde(default)]
    pub ram_gb: u32,
    #[serde(default)]
    pub vram_gb: u32,
}

impl RequirementTier {
    pub fn new(cpu_score: u32, gpu_score: u32, ram_gb: u32, vram_gb: u32) -> Self {
        Self {
            cpu_score,
            gpu_score,
            ram_gb,
            vram_gb,
        }
    }
}

/// Which of the three declared tiers to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierLevel {
    Minimum,
    Recommended,
    Ultra,
}

/// Structured system requirements of a game
///
/// Tiers are expected to be non-decreasing (minimum <= recommended <= ultra)
/// but nothing here enforces it; scoring tolerates any ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRequirements {
    pub minimum: RequirementTier,
    pub recommended: RequirementTier,
    pub ultra: RequirementTier,
    #[serde(default = "default_storage_gb")]
    pub storage_gb: u32,
    #[serde(default = "default_directx_version")]
    pub directx_version: String,
    #[serde(default)]
    pub requires_ssd: bool,
}

fn default_storage_gb() -> u32 {
    50
}

fn default_directx_version() -> String {
    "DX12".to_string()
}

impl GameRequirements {
    pub fn new(
        minimum: RequirementTier,
        recommended: RequirementTier,
        ultra: RequirementTier,
    ) -> Self {
        Self {
            minimum,
            recommended,
            ultra,
            storage_gb: default_storage_gb(),
            directx_version: default_directx_version(),
            requires_ssd: false,
        }
    }

    pub fn tier(&self, level: TierLevel) -> &RequirementTier {
        match level {
            TierLevel::Minimum => &self.minimum,
            TierLevel::Recommended => &self.recommended,
            TierLevel::Ultra => &self.ultra,
        }
    }
}

/// Free-text minimum requirements as a store page lists them
/// (e.g. "Intel Core i5-4460", "NVIDIA GTX 960", "8 GB").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MinimumSpecs {
    #[serde(default)]
    pub cpu: String,
    #[serde(default)]
    pub gpu: String,
    #[serde(default)]
    pub ram: String,
}

/// Game as known to the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub minimum_specs: MinimumSpecs,
}

impl Game {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            minimum_specs: MinimumSpecs::default(),
        }
    }

    pub fn with_minimum_specs(
        mut self,
        cpu: impl Into<String>,
        gpu: impl Into<String>,
        ram: impl Into<String>,
    ) -> Self {
        self.minimum_specs = MinimumSpecs {
            cpu: cpu.into(),
            gpu: gpu.into(),
            ram: ram.into(),
        };
        self
    }
}

/// A catalog row: the game plus its structured requirements, when known
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub game: Game,
    #[serde(default)]
    pub requirements: Option<GameRequirements>,
}

impl CatalogEntry {
    pub fn new(game: Game, requirements: Option<GameRequirements>) -> Self {
        Self { game, requirements }
    }
}
