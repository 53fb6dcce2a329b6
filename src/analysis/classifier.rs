//! Role and seniority classification
//!
//! Pure functions over the static catalog: identical text and hint always
//! yield the identical classification.

use crate::analysis::contains_any;
use crate::catalog::{Catalog, RoleProfile};

const SENIOR_SIGNALS: &[&str] = &["senior", "lead", "principal", "architect"];
const JUNIOR_SIGNALS: &[&str] = &["junior", "entry", "intern", "graduate"];

/// Coarse experience level derived from textual signal words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seniority {
    Junior,
    Middle,
    Senior,
}

impl Seniority {
    pub fn label(self) -> &'static str {
        match self {
            Seniority::Junior => "Junior",
            Seniority::Middle => "Mid-level",
            Seniority::Senior => "Senior",
        }
    }
}

/// Outcome of role detection for one request.
pub struct Classification<'a> {
    pub role: &'a RoleProfile,
    /// Role keywords found in the text, in catalog declaration order.
    pub matched_keywords: Vec<&'a str>,
    pub seniority: Seniority,
    /// True when a user hint forced the role.
    pub hinted: bool,
}

/// Classify the resume text against the catalog.
///
/// A non-sentinel role hint that matches a cataloged role name wins outright;
/// otherwise the profile with the strictly highest keyword-hit count wins,
/// first-declared breaking exact ties, with the General profile as the
/// fallback when nothing scores above zero.
pub fn classify<'a>(
    catalog: &'a Catalog,
    text: &str,
    role_hint: Option<&str>,
) -> Classification<'a> {
    let seniority = detect_seniority(text);

    if let Some(role) = role_hint.and_then(|hint| catalog.role_for_hint(hint)) {
        return Classification {
            matched_keywords: role.keywords.matched_in(text),
            role,
            seniority,
            hinted: true,
        };
    }

    let mut best: Option<(&RoleProfile, Vec<&str>)> = None;
    for role in catalog.roles() {
        let matched = role.keywords.matched_in(text);
        if matched.is_empty() {
            continue;
        }
        // Strictly-greater keeps the first-declared profile on exact ties.
        if best.as_ref().map_or(true, |(_, m)| matched.len() > m.len()) {
            best = Some((role, matched));
        }
    }

    match best {
        Some((role, matched_keywords)) => Classification {
            role,
            matched_keywords,
            seniority,
            hinted: false,
        },
        None => {
            let role = catalog.general_role();
            Classification {
                matched_keywords: role.keywords.matched_in(text),
                role,
                seniority,
                hinted: false,
            }
        }
    }
}

/// Senior signals are checked before junior signals: a text containing both
/// resolves to Senior.
pub fn detect_seniority(text: &str) -> Seniority {
    if contains_any(text, SENIOR_SIGNALS) {
        Seniority::Senior
    } else if contains_any(text, JUNIOR_SIGNALS) {
        Seniority::Junior
    } else {
        Seniority::Middle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_keyword_density_picks_frontend() {
        let catalog = catalog();
        let c = classify(&catalog, "senior developer with react, redux and jest", None);
        assert_eq!(c.role.name, "Frontend Engineer");
        assert_eq!(c.matched_keywords, vec!["react", "redux", "jest"]);
        assert!(!c.hinted);
    }

    #[test]
    fn test_hint_overrides_keyword_density() {
        let catalog = catalog();
        // Text reads frontend, hint says backend: user intent wins.
        let c = classify(
            &catalog,
            "react, redux, jest and more react",
            Some("Backend Engineer"),
        );
        assert_eq!(c.role.name, "Backend Engineer");
        assert!(c.hinted);
    }

    #[test]
    fn test_auto_detect_sentinel_does_not_force() {
        let catalog = catalog();
        let c = classify(&catalog, "react and redux everywhere", Some("auto-detect"));
        assert_eq!(c.role.name, "Frontend Engineer");
        assert!(!c.hinted);
    }

    #[test]
    fn test_no_hits_falls_back_to_general() {
        let catalog = catalog();
        let c = classify(&catalog, "I enjoy gardening and long walks", None);
        assert_eq!(c.role.name, "General Professional");
        assert!(c.matched_keywords.is_empty());
    }

    #[test]
    fn test_exact_tie_goes_to_first_declared() {
        let catalog = catalog();
        // "react" hits both Frontend Engineer and Fullstack Developer with
        // one keyword each; Frontend is declared first.
        let c = classify(&catalog, "I once used react", None);
        assert_eq!(c.role.name, "Frontend Engineer");
    }

    #[test]
    fn test_seniority_signals() {
        assert_eq!(detect_seniority("principal engineer"), Seniority::Senior);
        assert_eq!(detect_seniority("recent graduate"), Seniority::Junior);
        assert_eq!(detect_seniority("five years of work"), Seniority::Middle);
    }

    #[test]
    fn test_senior_signal_beats_junior_signal() {
        // Both signal classes present: senior is checked first by design.
        assert_eq!(
            detect_seniority("senior mentor for junior developers"),
            Seniority::Senior
        );
    }

    #[test]
    fn test_classifier_is_deterministic() {
        let catalog = catalog();
        let text = "backend api work with sql databases";
        let a = classify(&catalog, text, None);
        let b = classify(&catalog, text, None);
        assert_eq!(a.role.name, b.role.name);
        assert_eq!(a.matched_keywords, b.matched_keywords);
        assert_eq!(a.seniority, b.seniority);
    }
}
