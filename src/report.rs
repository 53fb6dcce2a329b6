//! The analysis report handed to delivery and presentation collaborators

use crate::error::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Hard caps on report list lengths. Lists are truncated, never padded.
pub const MAX_STRENGTHS: usize = 4;
pub const MAX_IMPROVEMENTS: usize = 4;
pub const MAX_MISSING_SKILLS: usize = 5;

/// Defaults substituted for scalar fields the AI path leaves out.
pub const DEFAULT_AI_SCORE: u8 = 75;
pub const DEFAULT_RECOMMENDATION: &str = "Recommended after minor tweaks.";
pub const DEFAULT_TIP: &str =
    "Tailor your resume to the specific posting before every submission.";

/// Which pipeline produced the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSource {
    Ai,
    Heuristic,
}

/// The engine's sole output: one complete quality report per request.
/// Created fresh per request and never mutated after assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Quality score; the heuristic path clamps this to [30, 98].
    pub score: u8,
    /// Composed label: seniority + role name + optional stack qualifier.
    pub job_role: String,
    /// Opaque passthrough from intake; never validated here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_email: Option<String>,
    pub recommendation: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_skills: Vec<String>,
    pub tip: String,
    pub source: ReportSource,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Console rendering for the CLI front-end.
    pub fn render_console(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "\n{}  {}\n",
            "Resume Analysis Report".bold(),
            format!("[{}]", source_label(self.source)).dimmed()
        ));
        out.push_str(&format!("{} {}\n", "Target Role:".bold(), self.job_role));
        out.push_str(&format!(
            "{} {}{}\n",
            "Quality Score:".bold(),
            self.score.to_string().cyan().bold(),
            "/100".dimmed()
        ));
        out.push_str(&format!("{}\n", self.recommendation.italic()));

        out.push_str(&format!("\n{}\n", "Strengths".green().bold()));
        for item in &self.strengths {
            out.push_str(&format!("  + {}\n", item));
        }

        out.push_str(&format!("\n{}\n", "Improvement Suggestions".yellow().bold()));
        for item in &self.improvements {
            out.push_str(&format!("  * {}\n", item));
        }

        if !self.missing_skills.is_empty() {
            out.push_str(&format!("\n{}\n", "Missing Skills".red().bold()));
            out.push_str(&format!("  {}\n", self.missing_skills.join(", ")));
        }

        out.push_str(&format!("\n{} {}\n", "Tip:".bold(), self.tip));
        out.push_str(&format!(
            "{}\n",
            format!("Generated {}", self.timestamp.to_rfc3339()).dimmed()
        ));
        out
    }
}

fn source_label(source: ReportSource) -> &'static str {
    match source {
        ReportSource::Ai => "ai",
        ReportSource::Heuristic => "heuristic",
    }
}

/// Recommendation sentence tiers keyed on the final score.
pub fn recommendation_for_score(score: u8) -> String {
    if score >= 85 {
        "Strongly Recommended for submission.".to_string()
    } else if score < 55 {
        "Needs significant rework before submission.".to_string()
    } else {
        DEFAULT_RECOMMENDATION.to_string()
    }
}

/// Truncate a list to its cap. Shorter lists stay shorter; no padding.
pub fn cap_list(mut items: Vec<String>, cap: usize) -> Vec<String> {
    items.truncate(cap);
    items
}

/// De-duplicate preserving first occurrence, then cap.
pub fn dedup_and_cap(items: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.iter().any(|s| s.eq_ignore_ascii_case(&item)) {
            seen.push(item);
        }
        if seen.len() == cap {
            break;
        }
    }
    seen
}
