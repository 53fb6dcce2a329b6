//! Dominant technology-ecosystem detection
//!
//! Same counting scheme as role detection: strictly highest hit count wins,
//! first-declared wins exact ties. Only gap calculation for server-side roles
//! consumes the result; for other roles it is informational.

use crate::catalog::Catalog;

/// Name of the fallback stack when no ecosystem scores above zero.
pub const GENERAL_STACK: &str = "General";

/// Detect the dominant ecosystem in the lowercased resume text.
pub fn detect_stack<'a>(catalog: &'a Catalog, text: &str) -> &'a str {
    let mut best: Option<(&str, usize)> = None;
    for stack in catalog.stacks() {
        let hits = stack.detection.matched_in(text).len();
        if hits == 0 {
            continue;
        }
        if best.map_or(true, |(_, b)| hits > b) {
            best = Some((&stack.name, hits));
        }
    }
    best.map(|(name, _)| name).unwrap_or(GENERAL_STACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_stack_detected() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            detect_stack(&catalog, "built services in python with django"),
            "Python"
        );
    }

    #[test]
    fn test_javascript_beats_java_on_density() {
        let catalog = Catalog::builtin().unwrap();
        // "javascript" also substring-matches "java"; the extra typescript
        // and node hits keep the JavaScript profile strictly ahead.
        assert_eq!(
            detect_stack(&catalog, "node services in javascript and typescript"),
            "JavaScript"
        );
    }

    #[test]
    fn test_unknown_text_defaults_to_general() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(detect_stack(&catalog, "fortran punch cards"), GENERAL_STACK);
    }
}
