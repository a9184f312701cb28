use serde::Serialize;

/// Visual quality preset a system can sustain
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    None,
    Low,
    Medium,
    High,
    Ultra,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::None => "none",
            Quality::Low => "low",
            Quality::Medium => "medium",
            Quality::High => "high",
            Quality::Ultra => "ultra",
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Single component holding a game back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Limiter {
    Cpu,
    Gpu,
    Ram,
}

impl Limiter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Limiter::Cpu => "cpu",
            Limiter::Gpu => "gpu",
            Limiter::Ram => "ram",
        }
    }
}

impl std::fmt::Display for Limiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Expected experience of one game on one rig
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceEstimate {
    pub can_run: bool,
    pub quality: Quality,
    /// In [15, 240] when the game runs, 0 otherwise
    pub fps_estimate: u32,
    pub bottleneck: Option<Limiter>,
    pub reason: String,
}

impl PerformanceEstimate {
    pub fn cannot_run(bottleneck: Option<Limiter>, reason: String) -> Self {
        Self {
            can_run: false,
            quality: Quality::None,
            fps_estimate: 0,
            bottleneck,
            reason,
        }
    }

    pub fn runs_at(quality: Quality, fps_estimate: u32, bottleneck: Option<Limiter>) -> Self {
        Self {
            can_run: true,
            quality,
            fps_estimate,
            bottleneck,
            reason: String::new(),
        }
    }
}
