use serde::{Deserialize, Serialize};

/// Capacities at or above this value are read as megabytes
const MEGABYTE_THRESHOLD: u32 = 100;

/// Hardware category of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    #[serde(rename = "CPU", alias = "cpu")]
    Cpu,
    #[serde(rename = "GPU", alias = "gpu")]
    Gpu,
    #[serde(rename = "RAM", alias = "ram")]
    Ram,
    #[serde(rename = "Motherboard", alias = "motherboard")]
    Motherboard,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Cpu => "CPU",
            ComponentKind::Gpu => "GPU",
            ComponentKind::Ram => "RAM",
            ComponentKind::Motherboard => "Motherboard",
        }
    }
}

impl std::str::FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpu" => Ok(ComponentKind::Cpu),
            "gpu" => Ok(ComponentKind::Gpu),
            "ram" => Ok(ComponentKind::Ram),
            "motherboard" => Ok(ComponentKind::Motherboard),
            _ => Err(format!(
                "Invalid component kind: {}. Expected one of CPU, GPU, RAM, Motherboard",
                s
            )),
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// HardwareComponent value object describing one part of a rig
///
/// `benchmark_score` of `None` or `Some(0)` both mean "unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareComponent {
    kind: ComponentKind,
    brand: String,
    model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    benchmark_score: Option<u32>,
    #[serde(default)]
    spec_text: String,
}

impl HardwareComponent {
    pub fn new(kind: ComponentKind, brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            kind,
            brand: brand.into(),
            model: model.into(),
            benchmark_score: None,
            spec_text: String::new(),
        }
    }

    pub fn with_benchmark_score(mut self, score: u32) -> Self {
        self.benchmark_score = Some(score);
        self
    }

    pub fn with_spec_text(mut self, spec_text: impl Into<String>) -> Self {
        self.spec_text = spec_text.into();
        self
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn benchmark_score(&self) -> Option<u32> {
        self.benchmark_score
    }

    pub fn spec_text(&self) -> &str {
        &self.spec_text
    }

    /// Benchmark score with "unknown" collapsed to 0
    pub fn effective_score(&self) -> u32 {
        self.benchmark_score.unwrap_or(0)
    }

    /// Installed capacity in GB parsed from the spec text
    pub fn ram_capacity_gb(&self) -> u32 {
        parse_capacity_gb(&self.spec_text)
    }

    /// "brand model" as shown in reports
    pub fn label(&self) -> String {
        format!("{} {}", self.brand, self.model).trim().to_string()
    }
}

/// Extracts a memory capacity in GB from free text such as "16 GB DDR4".
///
/// Only the first run of digits is read. Values of 100 or more are treated as
/// megabytes and integer-divided by 1024, so "16000 MB" yields 15. Text without
/// digits yields 0.
pub fn parse_capacity_gb(text: &str) -> u32 {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    let Ok(amount) = digits.parse::<u64>() else {
        return 0;
    };

    let gigabytes = if amount < u64::from(MEGABYTE_THRESHOLD) {
        amount
    } else {
        amount / 1024
    };

    u32::try_from(gigabytes).unwrap_or(u32::MAX)
}
