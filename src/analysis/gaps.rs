//! Missing-skill gap computation and tip selection

use crate::analysis::capitalize;
use crate::catalog::{Catalog, RoleProfile};
use crate::report::{dedup_and_cap, MAX_MISSING_SKILLS};

/// High-signal keywords that override the role's default tip when they appear
/// in the first computed missing skill. Only the first missing skill is ever
/// consulted.
const TIP_OVERRIDES: &[(&str, &str)] = &[
    (
        "kubernetes",
        "Container orchestration is a frequent screening filter; even a small Kubernetes side project is worth listing.",
    ),
    (
        "docker",
        "Containerize one of your projects and say so; Docker fluency is assumed almost everywhere now.",
    ),
    (
        "redis",
        "In-memory caching comes up in most scaling conversations; note any Redis or caching-layer work you have done.",
    ),
    (
        "typescript",
        "Static typing is table stakes for large JavaScript codebases; migrating a project to TypeScript is a resume-ready story.",
    ),
    (
        "aws",
        "Cloud hosting experience gets resumes past filters; list the AWS services you have actually used.",
    ),
    (
        "django",
        "A named server framework anchors a backend resume; pair Django with one concrete project.",
    ),
    (
        "express",
        "A named server framework anchors a backend resume; pair Express with one concrete project.",
    ),
    (
        "spring",
        "A named server framework anchors a backend resume; pair Spring with one concrete project.",
    ),
    (
        "react",
        "A named UI framework anchors a frontend resume; ship something small in React and link it.",
    ),
];

/// Compute the capped missing-skill list and the single tip for a request.
///
/// Candidates default to the role's keyword list; Backend-family and
/// Fullstack-family roles use the detected stack's ecosystem tool list
/// (generic tools when the stack is General) unioned with the generic list,
/// so suggestions track the technology actually in use.
pub fn resolve_gaps(
    catalog: &Catalog,
    role: &RoleProfile,
    stack: &str,
    text: &str,
) -> (Vec<String>, String) {
    let candidates: Vec<&str> = if role.family.uses_stack_tools() {
        let mut set: Vec<&str> = catalog.stack_tools(stack).iter().map(String::as_str).collect();
        for tool in catalog.generic_tools() {
            if !set.contains(&tool.as_str()) {
                set.push(tool);
            }
        }
        set
    } else {
        role.keywords.as_slice().iter().map(String::as_str).collect()
    };

    let compact_text = strip_punctuation(text);
    let missing: Vec<String> = candidates
        .into_iter()
        .filter(|cand| !present_in(text, &compact_text, cand))
        .map(capitalize)
        .collect();

    let mut missing = dedup_and_cap(missing, MAX_MISSING_SKILLS);
    if missing.is_empty() {
        // Nothing computable is absent; fall back to the role's canned labels.
        missing = dedup_and_cap(role.canned_missing.clone(), MAX_MISSING_SKILLS);
    }

    let tip = resolve_tip(role, &missing);
    (missing, tip)
}

/// A candidate counts as present when found as written, or with internal
/// punctuation stripped on both sides ("ci/cd" vs "cicd").
fn present_in(text: &str, compact_text: &str, candidate: &str) -> bool {
    text.contains(candidate) || compact_text.contains(&strip_punctuation(candidate))
}

fn strip_punctuation(s: &str) -> String {
    s.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// The role's canned tip, overridden when the first missing skill names a
/// high-signal technology.
fn resolve_tip(role: &RoleProfile, missing: &[String]) -> String {
    if let Some(first) = missing.first() {
        let first = first.to_lowercase();
        for (signal, message) in TIP_OVERRIDES {
            if first.contains(signal) {
                return message.to_string();
            }
        }
    }
    role.tip.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn role<'a>(catalog: &'a Catalog, name: &str) -> &'a RoleProfile {
        catalog.all_roles().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_frontend_gaps_come_from_role_keywords() {
        let catalog = Catalog::builtin().unwrap();
        let frontend = role(&catalog, "Frontend Engineer");
        let (missing, _) = resolve_gaps(
            &catalog,
            frontend,
            "General",
            "senior work with react, redux and jest",
        );
        assert!(missing.len() <= MAX_MISSING_SKILLS);
        assert!(!missing.iter().any(|m| m.eq_ignore_ascii_case("react")));
        assert!(!missing.iter().any(|m| m.eq_ignore_ascii_case("redux")));
        assert!(!missing.iter().any(|m| m.eq_ignore_ascii_case("jest")));
        assert!(missing.contains(&"Vue".to_string()));
    }

    #[test]
    fn test_backend_gaps_use_detected_stack_tools() {
        let catalog = Catalog::builtin().unwrap();
        let backend = role(&catalog, "Backend Engineer");
        let (missing, _) = resolve_gaps(&catalog, backend, "Python", "python and django work");
        assert!(missing.contains(&"Celery".to_string()));
        assert!(missing.contains(&"Pytest".to_string()));
        assert!(missing.contains(&"Postgresql".to_string()));
        // Raw backend role keywords are not suggested once a stack is known.
        assert!(!missing.contains(&"Api".to_string()));
    }

    #[test]
    fn test_backend_general_stack_unions_generic_tools() {
        let catalog = Catalog::builtin().unwrap();
        let backend = role(&catalog, "Backend Engineer");
        let (missing, _) = resolve_gaps(&catalog, backend, "General", "server work");
        // Generic tool list, deduplicated against itself, capped at 5.
        assert_eq!(missing.len(), 5);
        assert!(missing.contains(&"Docker".to_string()));
    }

    #[test]
    fn test_punctuation_stripped_presence_check() {
        let catalog = Catalog::builtin().unwrap();
        let backend = role(&catalog, "Backend Engineer");
        // "cicd" in the text satisfies the "ci/cd" candidate.
        let (missing, _) = resolve_gaps(&catalog, backend, "General", "cicd pipelines daily");
        assert!(!missing.iter().any(|m| m.eq_ignore_ascii_case("ci/cd")));
    }

    #[test]
    fn test_tip_override_consults_only_first_missing_skill() {
        let catalog = Catalog::builtin().unwrap();
        let backend = role(&catalog, "Backend Engineer");
        // Python stack tool list starts with celery: no override keyword, so
        // the role's own tip survives even though redis appears later.
        let (missing, tip) = resolve_gaps(&catalog, backend, "Python", "python and django");
        assert_eq!(missing[0], "Celery");
        assert_eq!(tip, backend.tip);
    }

    #[test]
    fn test_tip_override_fires_on_first_skill() {
        let catalog = Catalog::builtin().unwrap();
        let backend = role(&catalog, "Backend Engineer");
        // Everything before docker in the JavaScript tool list is present.
        let (missing, tip) = resolve_gaps(
            &catalog,
            backend,
            "JavaScript",
            "express nestjs graphql jest prisma redis aws ci/cd pipelines",
        );
        assert_eq!(missing[0], "Docker");
        assert!(tip.contains("Containerize"));
    }

    #[test]
    fn test_canned_labels_when_no_gap_remains() {
        let catalog = Catalog::builtin().unwrap();
        let general = catalog.general_role();
        let text = "communication leadership teamwork project management problem solving organization reporting";
        let (missing, _) = resolve_gaps(&catalog, general, "General", text);
        assert_eq!(
            missing[0],
            "Agile/Scrum Methodology experience"
        );
    }
}
