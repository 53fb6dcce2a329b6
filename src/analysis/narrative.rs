//! Strength and improvement generation
//!
//! Each list comes from a fixed, ordered battery of independent
//! predicate->template rules. A rule appends at most one item; lists are
//! truncated in rule-declaration order and fall back to a single generic
//! sentence when no rule fires.

use crate::analysis::{capitalize, contains_any};
use crate::catalog::{RoleFamily, RoleProfile};
use crate::report::{cap_list, MAX_IMPROVEMENTS, MAX_STRENGTHS};

const PERFORMANCE_TERMS: &[&str] = &["performance", "optimize", "scale"];
const TESTING_TERMS: &[&str] = &["test", "tdd", "jest", "pytest", "junit", "cypress", "qa"];
const LEADERSHIP_TERMS: &[&str] = &["lead", "managed"];
const IMPACT_TERMS: &[&str] = &["%", "improved", "reduced"];
const DATABASE_TERMS: &[&str] = &["database", "sql", "mongo"];
const RESPONSIVE_TERMS: &[&str] = &["responsive", "mobile"];

/// Fraction of role keywords that must match before the critical-mismatch
/// improvement stays quiet.
const CRITICAL_MATCH_FRACTION: f32 = 0.15;

/// Inputs shared by every rule in a battery.
pub struct NarrativeContext<'a> {
    pub role: &'a RoleProfile,
    /// Lowercased resume text.
    pub text: &'a str,
    /// Role keywords found in the text, declaration order.
    pub matched: &'a [&'a str],
}

type Rule = fn(&NarrativeContext) -> Option<String>;

const STRENGTH_RULES: &[Rule] = &[
    proficiency_strength,
    performance_strength,
    testing_strength,
    leadership_strength,
];

const IMPROVEMENT_RULES: &[Rule] = &[
    critical_mismatch_improvement,
    database_gap_improvement,
    responsiveness_improvement,
    quantify_impact_improvement,
];

/// Run both batteries and apply caps and fallbacks.
pub fn build_narrative(ctx: &NarrativeContext) -> (Vec<String>, Vec<String>) {
    let strengths = run_battery(STRENGTH_RULES, ctx, MAX_STRENGTHS, || {
        ctx.role
            .canned_strengths
            .first()
            .cloned()
            .unwrap_or_else(|| "Readable structure with relevant professional experience.".to_string())
    });
    let improvements = run_battery(IMPROVEMENT_RULES, ctx, MAX_IMPROVEMENTS, || {
        "Add measurable outcomes to each position to strengthen an already solid resume."
            .to_string()
    });
    (strengths, improvements)
}

fn run_battery(
    rules: &[Rule],
    ctx: &NarrativeContext,
    cap: usize,
    fallback: impl FnOnce() -> String,
) -> Vec<String> {
    let fired: Vec<String> = rules.iter().filter_map(|rule| rule(ctx)).collect();
    if fired.is_empty() {
        vec![fallback()]
    } else {
        cap_list(fired, cap)
    }
}

/// Rule 1: any matched role keyword yields a proficiency sentence naming up
/// to three of them.
pub(crate) fn proficiency_strength(ctx: &NarrativeContext) -> Option<String> {
    if ctx.matched.is_empty() {
        return None;
    }
    let named: Vec<String> = ctx.matched.iter().take(3).map(|k| capitalize(k)).collect();
    Some(format!(
        "Verified proficiency in {}, matching {} expectations.",
        named.join(", "),
        ctx.role.name
    ))
}

/// Rule 2: performance vocabulary, worded for the role's audience.
pub(crate) fn performance_strength(ctx: &NarrativeContext) -> Option<String> {
    if !contains_any(ctx.text, PERFORMANCE_TERMS) {
        return None;
    }
    let sentence = if ctx.role.family.is_ui_facing() {
        "Demonstrates attention to rendering performance and smooth user experience."
    } else if ctx.role.family.is_server_facing() {
        "Shows awareness of backend scalability and performance under load."
    } else {
        "Highlights performance and optimization work, a strong differentiator."
    };
    Some(sentence.to_string())
}

/// Rule 3: testing vocabulary, Frontend wording vs everyone else.
pub(crate) fn testing_strength(ctx: &NarrativeContext) -> Option<String> {
    if !contains_any(ctx.text, TESTING_TERMS) {
        return None;
    }
    let sentence = if ctx.role.family == RoleFamily::Frontend {
        "Component and UI testing experience signals production discipline."
    } else {
        "Automated testing experience signals production discipline."
    };
    Some(sentence.to_string())
}

/// Rule 4: leadership vocabulary.
pub(crate) fn leadership_strength(ctx: &NarrativeContext) -> Option<String> {
    if contains_any(ctx.text, LEADERSHIP_TERMS) {
        Some("Leadership and ownership signals stand out in the experience section.".to_string())
    } else {
        None
    }
}

/// Rule 1: hard alignment warning when almost nothing matched, naming up to
/// two example keywords the role expects.
pub(crate) fn critical_mismatch_improvement(ctx: &NarrativeContext) -> Option<String> {
    let total = ctx.role.keywords.len();
    if total == 0 {
        return None;
    }
    let fraction = ctx.matched.len() as f32 / total as f32;
    if fraction >= CRITICAL_MATCH_FRACTION || ctx.matched.len() >= 2 {
        return None;
    }
    let examples: Vec<String> = ctx
        .role
        .keywords
        .as_slice()
        .iter()
        .filter(|k| !ctx.matched.contains(&k.as_str()))
        .take(2)
        .map(|k| capitalize(k))
        .collect();
    Some(format!(
        "Your resume shows little direct evidence for {}; consider adding work involving {}.",
        ctx.role.name,
        examples.join(" or ")
    ))
}

/// Rule 2: server-side role with no database vocabulary at all.
pub(crate) fn database_gap_improvement(ctx: &NarrativeContext) -> Option<String> {
    if ctx.role.family.expects_database_exposure() && !contains_any(ctx.text, DATABASE_TERMS) {
        Some(
            "No database experience is visible; backend roles expect SQL or NoSQL exposure."
                .to_string(),
        )
    } else {
        None
    }
}

/// Rule 3: frontend role with no responsiveness vocabulary.
pub(crate) fn responsiveness_improvement(ctx: &NarrativeContext) -> Option<String> {
    if ctx.role.family == RoleFamily::Frontend && !contains_any(ctx.text, RESPONSIVE_TERMS) {
        Some(
            "Mention responsive or mobile-first work; frontend reviewers look for it explicitly."
                .to_string(),
        )
    } else {
        None
    }
}

/// Rule 4: universal quantify-your-impact nudge.
pub(crate) fn quantify_impact_improvement(ctx: &NarrativeContext) -> Option<String> {
    if contains_any(ctx.text, IMPACT_TERMS) {
        None
    } else {
        Some(
            "Quantify your impact: percentages and before/after figures make achievements credible."
                .to_string(),
        )
    }
}
