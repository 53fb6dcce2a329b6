//! Analysis orchestration
//!
//! One stateless invocation per request: classify, then prefer the external
//! generative path when a credential is configured, falling back to the
//! deterministic heuristic pipeline on any failure. Once intake validation
//! has passed, this engine always produces a complete report.

use crate::ai::{parse, prompts, AiError, GeminiClient};
use crate::analysis::classifier::{classify, Classification};
use crate::analysis::gaps::resolve_gaps;
use crate::analysis::narrative::{build_narrative, NarrativeContext};
use crate::analysis::scoring::score;
use crate::analysis::stack::{detect_stack, GENERAL_STACK};
use crate::catalog::{Catalog, RoleFamily};
use crate::config::Config;
use crate::error::Result;
use crate::report::{recommendation_for_score, AnalysisReport, ReportSource};
use chrono::Utc;
use log::{debug, warn};
use std::sync::Arc;

/// One request's worth of input. The lowercased copy is retained so every
/// matching step scans the same normalized text.
pub struct AnalysisInput {
    pub text: String,
    lowered: String,
    pub role_hint: Option<String>,
    /// Opaque passthrough; validated (if at all) by intake, not here.
    pub candidate_email: Option<String>,
}

impl AnalysisInput {
    pub fn new(text: String, role_hint: Option<String>, candidate_email: Option<String>) -> Self {
        let lowered = text.to_lowercase();
        Self {
            text,
            lowered,
            role_hint,
            candidate_email,
        }
    }

    pub fn lowered(&self) -> &str {
        &self.lowered
    }
}

/// The analysis engine. Holds the read-only catalog and, when configured,
/// the generative client. Safe to share across concurrent requests.
pub struct AnalysisEngine {
    catalog: Arc<Catalog>,
    ai: Option<GeminiClient>,
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Result<Self> {
        let catalog = Arc::new(Catalog::builtin()?);
        let ai = if config.ai_configured() {
            Some(GeminiClient::new(&config.ai)?)
        } else {
            None
        };
        Ok(Self { catalog, ai })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Analyze one resume. Never errors: any AI-path failure falls back to
    /// the heuristic pipeline, which is total over its inputs.
    pub async fn analyze(&self, input: &AnalysisInput) -> AnalysisReport {
        let text = input.lowered();
        let classification = classify(&self.catalog, text, input.role_hint.as_deref());
        let stack = detect_stack(&self.catalog, text);
        let job_role = compose_label(&classification, stack);

        if let Some(client) = &self.ai {
            match self.try_ai(client, input, &classification, &job_role).await {
                Ok(report) => return report,
                Err(e) => {
                    warn!("AI generation failed, falling back to heuristic pipeline: {}", e);
                }
            }
        } else {
            debug!("no generative credential configured; using heuristic pipeline");
        }

        self.heuristic_report(input, &classification, stack, job_role)
    }

    async fn try_ai(
        &self,
        client: &GeminiClient,
        input: &AnalysisInput,
        classification: &Classification<'_>,
        job_role: &str,
    ) -> std::result::Result<AnalysisReport, AiError> {
        let prompt = prompts::render_analysis_prompt(
            &classification.role.name,
            classification.seniority.label(),
            &input.text,
        );
        let raw = client.generate(&prompt).await?;
        let payload = parse::parse_payload(&raw)?;
        Ok(payload.into_report(job_role.to_string(), input.candidate_email.clone()))
    }

    fn heuristic_report(
        &self,
        input: &AnalysisInput,
        classification: &Classification<'_>,
        stack: &str,
        job_role: String,
    ) -> AnalysisReport {
        let text = input.lowered();
        let role = classification.role;
        let matched = &classification.matched_keywords;

        // Raw role-keyword gap, before stack substitution and list capping.
        let keyword_gap = role.keywords.len().saturating_sub(matched.len());
        let score = score(matched.len(), classification.seniority, keyword_gap);

        let ctx = NarrativeContext {
            role,
            text,
            matched,
        };
        let (strengths, improvements) = build_narrative(&ctx);
        let (missing_skills, tip) = resolve_gaps(&self.catalog, role, stack, text);

        AnalysisReport {
            score,
            job_role,
            candidate_email: input.candidate_email.clone(),
            recommendation: recommendation_for_score(score),
            strengths,
            improvements,
            missing_skills,
            tip,
            source: ReportSource::Heuristic,
            timestamp: Utc::now(),
        }
    }
}

/// Human-readable role label: seniority + role name, qualified by the
/// detected stack when one was identified for a technical role.
fn compose_label(classification: &Classification<'_>, stack: &str) -> String {
    let base = format!(
        "{} {}",
        classification.seniority.label(),
        classification.role.name
    );
    if stack != GENERAL_STACK && classification.role.family != RoleFamily::General {
        format!("{} ({})", base, stack)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classifier::Seniority;

    fn engine() -> AnalysisEngine {
        AnalysisEngine::new(&Config::default()).unwrap()
    }

    #[tokio::test]
    async fn test_label_includes_stack_qualifier() {
        let engine = engine();
        let input = AnalysisInput::new(
            "Senior backend developer building REST APIs in Python with Django and SQL databases"
                .to_string(),
            None,
            None,
        );
        let report = engine.analyze(&input).await;
        assert_eq!(report.job_role, "Senior Backend Engineer (Python)");
        assert_eq!(report.source, ReportSource::Heuristic);
    }

    #[tokio::test]
    async fn test_general_role_label_has_no_stack_qualifier() {
        let engine = engine();
        let input = AnalysisInput::new(
            "Warehouse coordinator handling logistics and inventory".to_string(),
            None,
            None,
        );
        let report = engine.analyze(&input).await;
        assert!(report.job_role.ends_with("General Professional"));
    }

    #[tokio::test]
    async fn test_email_passes_through_untouched() {
        let engine = engine();
        let input = AnalysisInput::new(
            "react and redux developer".to_string(),
            None,
            Some("candidate@example.com".to_string()),
        );
        let report = engine.analyze(&input).await;
        assert_eq!(report.candidate_email.as_deref(), Some("candidate@example.com"));
    }

    #[test]
    fn test_input_retains_lowered_copy() {
        let input = AnalysisInput::new("React AND Redux".to_string(), None, None);
        assert_eq!(input.lowered(), "react and redux");
        assert_eq!(input.text, "React AND Redux");
    }

    #[test]
    fn test_seniority_feeds_label() {
        let engine = engine();
        let classification = classify(engine.catalog(), "junior react developer", None);
        assert_eq!(classification.seniority, Seniority::Junior);
        let label = compose_label(&classification, GENERAL_STACK);
        assert_eq!(label, "Junior Frontend Engineer");
    }
}
