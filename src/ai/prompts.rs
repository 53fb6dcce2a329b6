//! Prompt template for the generative analysis path

/// Template placeholders: `{role}`, `{seniority}`, `{resume}`.
const ANALYSIS_TEMPLATE: &str = r#"You are an experienced technical recruiter reviewing a resume.

Target role: {seniority} {role}

<RESUME>
{resume}
</RESUME>

Assess this resume for the target role and respond with ONLY a JSON object in
exactly this shape, with no other prose:

{
  "score": <integer 0-100>,
  "recommendation": "<one sentence verdict>",
  "strengths": ["<up to 4 specific strengths>"],
  "improvements": ["<up to 4 specific improvement suggestions>"],
  "missingSkills": ["<up to 5 skills or technologies the resume lacks for this role>"],
  "tip": "<one actionable tip>"
}

Reference the actual resume content above, not generic advice."#;

/// Render the analysis prompt for one request.
pub fn render_analysis_prompt(role: &str, seniority: &str, resume_text: &str) -> String {
    ANALYSIS_TEMPLATE
        .replace("{role}", role)
        .replace("{seniority}", seniority)
        .replace("{resume}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_substitution() {
        let prompt = render_analysis_prompt(
            "Backend Engineer",
            "Senior",
            "Built APIs at Example Corp.",
        );
        assert!(prompt.contains("Senior Backend Engineer"));
        assert!(prompt.contains("Built APIs at Example Corp."));
        assert!(prompt.contains("missingSkills"));
        assert!(!prompt.contains("{resume}"));
    }
}
