//! Heuristic scoring formula
//!
//! Deliberately simple and auditable: more role-relevant evidence and
//! seniority raise the score, a large residual keyword gap caps it, and the
//! bounds keep degenerate 0/100 outputs off the report.

use crate::analysis::classifier::Seniority;

pub const BASE_SCORE: i32 = 40;
pub const PER_KEYWORD_BONUS: i32 = 7;
pub const SENIOR_BONUS: i32 = 5;
pub const GAP_PENALTY: i32 = 10;
/// The penalty applies only when more than this many role keywords are absent.
pub const GAP_PENALTY_THRESHOLD: usize = 5;
pub const MIN_SCORE: i32 = 30;
pub const MAX_SCORE: i32 = 98;

/// Score from matched role-keyword count, seniority, and the raw role-keyword
/// gap count (computed before any gap list is capped).
pub fn score(matched_count: usize, seniority: Seniority, missing_count: usize) -> u8 {
    let mut score = BASE_SCORE + PER_KEYWORD_BONUS * matched_count as i32;
    if seniority == Seniority::Senior {
        score += SENIOR_BONUS;
    }
    if missing_count > GAP_PENALTY_THRESHOLD {
        score -= GAP_PENALTY;
    }
    score.clamp(MIN_SCORE, MAX_SCORE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_components() {
        // base + 7 * 3 + senior bonus, no penalty at exactly 5 gaps
        assert_eq!(score(3, Seniority::Senior, 5), 66);
        assert_eq!(score(3, Seniority::Middle, 5), 61);
        assert_eq!(score(3, Seniority::Junior, 5), 61);
    }

    #[test]
    fn test_gap_penalty_is_strictly_greater_than_threshold() {
        assert_eq!(score(2, Seniority::Middle, 5), 54);
        assert_eq!(score(2, Seniority::Middle, 6), 44);
    }

    #[test]
    fn test_floor_clamp() {
        // No evidence, large gap: 40 - 10 = 30, exactly the floor.
        assert_eq!(score(0, Seniority::Middle, 7), 30);
        assert_eq!(score(0, Seniority::Junior, 100), 30);
    }

    #[test]
    fn test_ceiling_clamp() {
        assert_eq!(score(20, Seniority::Senior, 0), 98);
    }

    #[test]
    fn test_bounds_hold_for_all_plausible_inputs() {
        for matched in 0..30 {
            for missing in 0..30 {
                for seniority in [Seniority::Junior, Seniority::Middle, Seniority::Senior] {
                    let s = score(matched, seniority, missing) as i32;
                    assert!((MIN_SCORE..=MAX_SCORE).contains(&s));
                }
            }
        }
    }
}
