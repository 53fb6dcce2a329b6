//! Role-aware heuristic analysis pipeline

pub mod classifier;
pub mod engine;
pub mod gaps;
pub mod narrative;
pub mod scoring;
pub mod stack;

/// True if any term appears as a substring of the (already lowercased) text.
pub(crate) fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| text.contains(t))
}

/// Uppercase the first character, e.g. "celery" -> "Celery".
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("celery"), "Celery");
        assert_eq!(capitalize("ci/cd"), "Ci/cd");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("we optimize queries", &["performance", "optimize"]));
        assert!(!contains_any("plain text", &["performance", "optimize"]));
    }
}
