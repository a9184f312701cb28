use crate::hardware_analysis::domain::{
    BottleneckReport, BottleneckType, HardwareComponent, Severity,
};
use crate::hardware_analysis::policies::{BottleneckThresholds, SeverityStep};
use tracing::debug;

/// BottleneckDetector service classifying the balance of a CPU/GPU/RAM triple
#[derive(Debug, Clone, Default)]
pub struct BottleneckDetector {
    thresholds: BottleneckThresholds,
}

impl BottleneckDetector {
    pub fn new(thresholds: BottleneckThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &BottleneckThresholds {
        &self.thresholds
    }

    /// Analyzes the triple using benchmark scores and installed RAM
    ///
    /// Missing benchmark data is not an error: the report simply says the
    /// system could not be analyzed.
    pub fn detect(
        &self,
        cpu: &HardwareComponent,
        gpu: &HardwareComponent,
        ram: &HardwareComponent,
    ) -> BottleneckReport {
        let mut report = BottleneckReport::default();
        let cpu_score = cpu.effective_score();
        let gpu_score = gpu.effective_score();

        if cpu_score == 0 || gpu_score == 0 {
            debug!(cpu_score, gpu_score, "missing benchmark data, skipping bottleneck analysis");
            report.description = "Insufficient benchmark data to analyze.".to_string();
            return report;
        }

        report.analyzed = true;
        self.check_processors(&mut report, f64::from(cpu_score), f64::from(gpu_score));
        self.check_ram(&mut report, ram.ram_capacity_gb());

        if !report.has_bottleneck {
            report.description =
                "Balanced system! Your configuration is well matched with no significant bottlenecks."
                    .to_string();
        }

        debug!(
            kind = %report.bottleneck_type,
            severity = %report.severity,
            flagged = report.flagged.len(),
            "bottleneck analysis done"
        );
        report
    }

    fn check_processors(&self, report: &mut BottleneckReport, cpu_score: f64, gpu_score: f64) {
        let gpu_over_cpu = gpu_score / cpu_score;
        let cpu_over_gpu = cpu_score / gpu_score;
        let trigger = self.thresholds.trigger_ratio;

        if gpu_over_cpu >= trigger {
            if let Some(step) = BottleneckThresholds::step_for(&self.thresholds.cpu_ladder, gpu_over_cpu) {
                let description = match step.severity {
                    Severity::Severe => {
                        "Your GPU is far more powerful than your CPU. The CPU cannot feed it frames fast enough."
                    }
                    _ => "Your GPU is somewhat more powerful than your CPU. Some GPU headroom goes unused.",
                };
                let target = Self::upgrade_target(step, gpu_score);
                Self::apply(
                    report,
                    BottleneckType::Cpu,
                    step,
                    description,
                    format!("A CPU with a score of ~{}+ would stop starving your GPU.", target),
                );
            }
        } else if cpu_over_gpu >= trigger {
            if let Some(step) = BottleneckThresholds::step_for(&self.thresholds.gpu_ladder, cpu_over_gpu) {
                let description = match step.severity {
                    Severity::Severe => {
                        "Your CPU is far more powerful than your GPU. Graphics performance caps the system."
                    }
                    _ => "Your CPU is somewhat more powerful than your GPU. Graphics-heavy games will be GPU bound.",
                };
                let target = Self::upgrade_target(step, cpu_score);
                Self::apply(
                    report,
                    BottleneckType::Gpu,
                    step,
                    description,
                    format!("A GPU with a score of ~{}+ would make full use of your CPU.", target),
                );
            }
        }
    }

    fn upgrade_target(step: &SeverityStep, stronger_score: f64) -> u64 {
        (step.upgrade_factor * stronger_score).floor() as u64
    }

    fn apply(
        report: &mut BottleneckReport,
        kind: BottleneckType,
        step: &SeverityStep,
        description: &str,
        recommendation: String,
    ) {
        report.has_bottleneck = true;
        report.bottleneck_type = kind;
        report.severity = step.severity;
        report.percentage_loss = step.percentage_loss;
        report.description = description.to_string();
        report.recommendations.push(recommendation);
        report.flagged.push(kind);
    }

    fn check_ram(&self, report: &mut BottleneckReport, ram_gb: u32) {
        let recommended = self.thresholds.ram_recommended_gb;
        if ram_gb >= recommended {
            return;
        }

        report.has_bottleneck = true;
        if report.bottleneck_type == BottleneckType::Balanced {
            report.bottleneck_type = BottleneckType::Ram;
        }

        let ram_severity = if ram_gb < self.thresholds.ram_critical_gb {
            Severity::Moderate
        } else {
            Severity::Mild
        };
        // Never downgrade a CPU/GPU verdict
        report.severity = report.severity.max(ram_severity);

        let block = format!(
            "Insufficient RAM: only {}GB installed, modern games recommend {}GB. Expect stutters in demanding games.",
            ram_gb, recommended
        );
        if report.description.is_empty() {
            report.description = block;
        } else {
            report.description = format!("{}\n\n{}", report.description, block);
        }

        report.recommendations.push(format!(
            "Upgrade to {}GB or {}GB of RAM for better performance.",
            recommended,
            recommended.saturating_mul(2)
        ));
        report.flagged.push(BottleneckType::Ram);
    }
}
