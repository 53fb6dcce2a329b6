//! Permissive parsing of generative replies
//!
//! Models wrap JSON in prose and markdown fences despite instructions, so the
//! parser extracts the first balanced JSON object from the raw reply and only
//! then deserializes. Scalar fields are defaulted when absent; the three list
//! fields are required and their absence fails the AI attempt.

use crate::ai::AiError;
use crate::report::{
    cap_list, dedup_and_cap, AnalysisReport, ReportSource, DEFAULT_AI_SCORE,
    DEFAULT_RECOMMENDATION, DEFAULT_TIP, MAX_IMPROVEMENTS, MAX_MISSING_SKILLS, MAX_STRENGTHS,
};
use chrono::Utc;
use serde::Deserialize;

/// The fixed JSON shape the prompt demands from the generative service.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiPayload {
    pub score: Option<i64>,
    pub recommendation: Option<String>,
    pub strengths: Option<Vec<String>>,
    pub improvements: Option<Vec<String>>,
    pub missing_skills: Option<Vec<String>>,
    pub tip: Option<String>,
}

/// Parse a raw reply into a validated payload.
pub fn parse_payload(raw: &str) -> Result<AiPayload, AiError> {
    let json = extract_json_object(raw)
        .ok_or_else(|| AiError::Malformed("no JSON object in reply".to_string()))?;
    let payload: AiPayload =
        serde_json::from_str(json).map_err(|e| AiError::Malformed(e.to_string()))?;

    if payload.strengths.is_none() || payload.improvements.is_none() || payload.missing_skills.is_none()
    {
        return Err(AiError::Malformed(
            "reply is missing required list fields".to_string(),
        ));
    }
    Ok(payload)
}

impl AiPayload {
    /// Normalize into the report shape, applying the same list caps as the
    /// heuristic path and documented defaults for absent scalar fields.
    pub fn into_report(self, job_role: String, candidate_email: Option<String>) -> AnalysisReport {
        let score = self
            .score
            .map(|s| s.clamp(0, 100) as u8)
            .unwrap_or(DEFAULT_AI_SCORE);
        AnalysisReport {
            score,
            job_role,
            candidate_email,
            recommendation: self
                .recommendation
                .unwrap_or_else(|| DEFAULT_RECOMMENDATION.to_string()),
            strengths: cap_list(self.strengths.unwrap_or_default(), MAX_STRENGTHS),
            improvements: cap_list(self.improvements.unwrap_or_default(), MAX_IMPROVEMENTS),
            missing_skills: dedup_and_cap(
                self.missing_skills.unwrap_or_default(),
                MAX_MISSING_SKILLS,
            ),
            tip: self.tip.unwrap_or_else(|| DEFAULT_TIP.to_string()),
            source: ReportSource::Ai,
            timestamp: Utc::now(),
        }
    }
}

/// The first balanced `{ ... }` object in `raw`, tolerant of surrounding
/// prose and code fences. Braces inside JSON strings are ignored.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in raw[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}
