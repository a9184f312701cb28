use crate::hardware_analysis::domain::Quality;
use crate::shared::error::RigError;
use crate::shared::Result;
use serde::Deserialize;

/// QualityLadder policy: frame-rate baselines and tolerances used when
/// estimating how a game will run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct QualityLadder {
    pub ultra_base_fps: u32,
    pub high_base_fps: u32,
    pub medium_base_fps: u32,
    pub low_base_fps: u32,
    /// Medium requires this multiple of the minimum CPU and GPU scores
    pub medium_multiplier: f64,
    pub fps_floor: u32,
    pub fps_ceiling: u32,
    /// A component limits the system when its ratio is below this fraction
    /// of the other component's ratio
    pub limiter_tolerance: f64,
}

impl Default for QualityLadder {
    fn default() -> Self {
        Self {
            ultra_base_fps: 90,
            high_base_fps: 60,
            medium_base_fps: 45,
            low_base_fps: 30,
            medium_multiplier: 1.2,
            fps_floor: 15,
            fps_ceiling: 240,
            limiter_tolerance: 0.7,
        }
    }
}

impl QualityLadder {
    pub fn base_fps(&self, quality: Quality) -> u32 {
        match quality {
            Quality::Ultra => self.ultra_base_fps,
            Quality::High => self.high_base_fps,
            Quality::Medium => self.medium_base_fps,
            Quality::Low => self.low_base_fps,
            Quality::None => 0,
        }
    }

    /// Clamps into [fps_floor, fps_ceiling]; an inverted range yields the ceiling
    pub fn clamp_fps(&self, fps: u32) -> u32 {
        fps.max(self.fps_floor).min(self.fps_ceiling)
    }

    /// # Errors
    /// Rejects an inverted FPS range, a medium multiplier below 1 and a
    /// limiter tolerance outside (0, 1].
    pub fn validate(&self) -> Result<()> {
        if self.fps_floor > self.fps_ceiling {
            return Err(RigError::Validation {
                message: format!(
                    "quality.fps_floor ({}) must not exceed quality.fps_ceiling ({})",
                    self.fps_floor, self.fps_ceiling
                ),
            }
            .into());
        }
        if !(self.medium_multiplier.is_finite() && self.medium_multiplier >= 1.0) {
            return Err(RigError::Validation {
                message: format!(
                    "quality.medium_multiplier must be at least 1.0, got {}",
                    self.medium_multiplier
                ),
            }
            .into());
        }
        if !(self.limiter_tolerance > 0.0 && self.limiter_tolerance <= 1.0) {
            return Err(RigError::Validation {
                message: format!(
                    "quality.limiter_tolerance must be in (0, 1], got {}",
                    self.limiter_tolerance
                ),
            }
            .into());
        }
        Ok(())
    }
}
