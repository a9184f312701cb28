//! rigscore - PC hardware game-compatibility, bottleneck and FPS estimator
//!
//! This library scores a rig (CPU, GPU and RAM) against a catalog of games:
//! per-pair compatibility against free-text minimum specs, CPU/GPU/RAM
//! bottleneck detection, and per-game quality and frame-rate estimates.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`hardware_analysis`): Pure scoring logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//! - **Config** (`config`): `rigscore.config.yml` loading
//!
//! # Example
//!
//! ```no_run
//! use rigscore::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = HardwareAnalysisUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = AnalysisRequest::new(PathBuf::from("rig.yml"), PathBuf::from("games.yml"));
//! let response = use_case.analyze_system(request)?;
//!
//! let output = MarkdownFormatter::new().format_system_report(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod hardware_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        AnalysisRequest, AnalysisResponse, BottleneckRequest, BottleneckResponse,
        CompatibilityResponse, OutputFormat,
    };
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::HardwareAnalysisUseCase;
    pub use crate::hardware_analysis::domain::{
        BottleneckReport, BottleneckType, CatalogEntry, CompatibilityReport,
        CompatibilityResult, ComponentKind, Game, GameRequirements, HardwareComponent, Limiter,
        PerformanceEstimate, Quality, ReportMetadata, RequirementTier, Rig, Severity,
        SystemReport, SystemScore, SystemTier,
    };
    pub use crate::hardware_analysis::policies::{BottleneckThresholds, QualityLadder, ScoreTable};
    pub use crate::hardware_analysis::services::{
        BottleneckDetector, CompatibilityScorer, PerformanceEstimator, ScoreLookup,
        SystemAnalyzer,
    };
    pub use crate::ports::inbound::HardwareAnalysisPort;
    pub use crate::ports::outbound::{
        GameCatalogReader, OutputPresenter, ProgressReporter, ReportFormatter, RigReader,
    };
    pub use crate::shared::Result;
}
