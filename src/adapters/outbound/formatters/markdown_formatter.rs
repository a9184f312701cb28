use crate::application::dto::{AnalysisResponse, BottleneckResponse, CompatibilityResponse};
use crate::hardware_analysis::domain::{
    BottleneckReport, GameBuckets, GameVerdict, PairCompatibility, Quality, ReportMetadata, Rig,
    Severity, SystemScore,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the rig inventory
const RIG_TABLE_HEADER: &str = "| Slot | Part | Benchmark Score | Spec |\n";
const RIG_TABLE_SEPARATOR: &str = "|------|------|-----------------|------|\n";

/// Markdown table header for per-game estimates
const GAME_TABLE_HEADER: &str = "| Game | Quality | Est. FPS | Limited By | Notes |\n";
const GAME_TABLE_SEPARATOR: &str = "|------|---------|----------|------------|-------|\n";

/// Markdown table header for game x component compatibility rows
const COMPAT_TABLE_HEADER: &str = "| Game | Component | Type | Result | Score | Reason |\n";
const COMPAT_TABLE_SEPARATOR: &str = "|------|-----------|------|--------|-------|--------|\n";

/// MarkdownFormatter adapter producing human-readable reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn quality_emoji(quality: Quality) -> &'static str {
        match quality {
            Quality::Ultra => "🟣",
            Quality::High => "🟢",
            Quality::Medium => "🟡",
            Quality::Low => "🟠",
            Quality::None => "🔴",
        }
    }

    fn severity_emoji(severity: Severity) -> &'static str {
        match severity {
            Severity::Severe => "🔴",
            Severity::Moderate => "🟠",
            Severity::Mild => "🟡",
            Severity::None => "🟢",
        }
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, title: &str, metadata: &ReportMetadata) {
        output.push_str(&format!("# {}\n\n", title));
        output.push_str(&format!(
            "_Generated by {} {} on {} ({})_\n\n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.generated_at(),
            metadata.report_id()
        ));
    }

    fn render_rig(&self, output: &mut String, rig: &Rig) {
        output.push_str("## Hardware\n\n");
        output.push_str(RIG_TABLE_HEADER);
        output.push_str(RIG_TABLE_SEPARATOR);

        for component in rig.components() {
            let score = component
                .benchmark_score()
                .filter(|s| *s > 0)
                .map_or("unknown".to_string(), |s| s.to_string());
            let spec = if component.spec_text().is_empty() {
                "-"
            } else {
                component.spec_text()
            };

            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                component.kind(),
                Self::escape_markdown_table_cell(&component.label()),
                score,
                Self::escape_markdown_table_cell(spec)
            ));
        }
        output.push('\n');
    }

    fn render_system_score(&self, output: &mut String, score: &SystemScore) {
        output.push_str("## System Score\n\n");
        output.push_str(&format!(
            "**{}** points, {}\n\n",
            score.total, score.tier_label
        ));
        output.push_str("| Component | Part | Score |\n");
        output.push_str("|-----------|------|-------|\n");
        output.push_str(&format!(
            "| GPU | {} | {} |\n",
            Self::escape_markdown_table_cell(&score.components.gpu),
            score.gpu_score
        ));
        output.push_str(&format!(
            "| CPU | {} | {} |\n",
            Self::escape_markdown_table_cell(&score.components.cpu),
            score.cpu_score
        ));
        output.push_str(&format!(
            "| RAM | {} | {} |\n\n",
            score.components.ram, score.ram_score
        ));
    }

    fn render_bottleneck(&self, output: &mut String, report: &BottleneckReport) {
        output.push_str("## Bottleneck Analysis\n\n");

        if !report.analyzed {
            output.push_str(&format!("ℹ️ {}\n\n", report.description));
            return;
        }
        if !report.has_bottleneck {
            output.push_str(&format!("✅ {}\n\n", report.description));
            return;
        }

        output.push_str(&format!(
            "{} **{}** bottleneck ({} severity, ~{}% performance loss)\n\n",
            Self::severity_emoji(report.severity),
            report.bottleneck_type.as_str().to_uppercase(),
            report.severity,
            report.percentage_loss
        ));
        output.push_str(&format!("{}\n\n", report.description));

        if report.flagged.len() > 1 {
            let flagged: Vec<String> = report
                .flagged
                .iter()
                .map(|kind| kind.as_str().to_uppercase())
                .collect();
            output.push_str(&format!("Flagged checks: {}\n\n", flagged.join(", ")));
        }
    }

    fn render_game_row(&self, output: &mut String, verdict: &GameVerdict) {
        let estimate = &verdict.estimate;
        let fps = if estimate.can_run {
            estimate.fps_estimate.to_string()
        } else {
            "-".to_string()
        };
        let limiter = estimate
            .bottleneck
            .map_or("-".to_string(), |l| l.as_str().to_uppercase());

        output.push_str(&format!(
            "| {} | {} {} | {} | {} | {} |\n",
            Self::escape_markdown_table_cell(&verdict.name),
            Self::quality_emoji(estimate.quality),
            estimate.quality,
            fps,
            limiter,
            Self::escape_markdown_table_cell(&estimate.reason)
        ));
    }

    fn render_games(&self, output: &mut String, games: &GameBuckets, skipped: usize) {
        output.push_str("## Game Performance\n\n");
        output.push_str(&format!(
            "{} of {} game(s) playable.\n\n",
            games.playable(),
            games.total()
        ));

        if games.total() > 0 {
            output.push_str(GAME_TABLE_HEADER);
            output.push_str(GAME_TABLE_SEPARATOR);
            for bucket in [
                &games.ultra,
                &games.high,
                &games.medium,
                &games.low,
                &games.cannot_run,
            ] {
                for verdict in bucket {
                    self.render_game_row(output, verdict);
                }
            }
            output.push('\n');
        } else {
            output.push_str("*No games with structured requirements*\n\n");
        }

        if skipped > 0 {
            output.push_str(&format!(
                "> {} game(s) without structured requirements were skipped.\n\n",
                skipped
            ));
        }
    }

    fn render_compatibility_row(&self, output: &mut String, pair: &PairCompatibility) {
        let result = if pair.result.compatible {
            "✅"
        } else {
            "❌"
        };
        let score = pair
            .result
            .score_percent
            .map_or("N/A".to_string(), |s| format!("{:.0}%", s));

        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            Self::escape_markdown_table_cell(&pair.game),
            Self::escape_markdown_table_cell(&pair.component),
            pair.kind,
            result,
            score,
            Self::escape_markdown_table_cell(&pair.result.reason)
        ));
    }

    fn render_recommendations(&self, output: &mut String, recommendations: &[String]) {
        output.push_str("## Recommendations\n\n");
        if recommendations.is_empty() {
            output.push_str("*No recommendations*\n");
            return;
        }
        for recommendation in recommendations {
            output.push_str(&format!("- {}\n", recommendation));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_system_report(&self, response: &AnalysisResponse) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, "Rig Analysis Report", &response.metadata);
        self.render_rig(&mut output, &response.rig);
        self.render_system_score(&mut output, &response.report.system_score);
        self.render_bottleneck(&mut output, &response.report.bottleneck);
        self.render_games(&mut output, &response.report.games, response.skipped_games);
        self.render_recommendations(&mut output, &response.report.recommendations);
        Ok(output)
    }

    fn format_compatibility_report(&self, response: &CompatibilityResponse) -> Result<String> {
        let report = &response.report;
        let mut output = String::new();
        self.render_header(&mut output, "Compatibility Report", &response.metadata);
        self.render_rig(&mut output, &response.rig);

        output.push_str("## Summary\n\n");
        let verdict = if report.compatible {
            "✅ Compatible"
        } else {
            "❌ Incompatible"
        };
        output.push_str(&format!(
            "| Games Checked | Verdict | Overall Score | Performance Tier |\n\
             |---------------|---------|---------------|------------------|\n\
             | {} | {} | {:.1}% | {} |\n\n",
            response.games_checked,
            verdict,
            report.overall_score,
            report
                .performance_tier
                .map_or("N/A".to_string(), |t| t.to_string())
        ));

        output.push_str("## Details\n\n");
        if report.details.is_empty() {
            output.push_str("*Nothing to check*\n\n");
        } else {
            output.push_str(COMPAT_TABLE_HEADER);
            output.push_str(COMPAT_TABLE_SEPARATOR);
            for pair in &report.details {
                self.render_compatibility_row(&mut output, pair);
            }
            output.push('\n');
        }

        self.render_recommendations(&mut output, &report.recommendations);
        Ok(output)
    }

    fn format_bottleneck_report(&self, response: &BottleneckResponse) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, "Bottleneck Report", &response.metadata);
        self.render_rig(&mut output, &response.rig);
        self.render_bottleneck(&mut output, &response.report);
        self.render_recommendations(&mut output, &response.report.recommendations);
        Ok(output)
    }
}
