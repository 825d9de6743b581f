//! Score Calculator.
//!
//! Two modes:
//!
//! ## Reputation
//! ```text
//! confidence      = min(total_reviews / 10, 1)
//! reputation      = (rating / 5) * confidence          in [0, 1]
//! ```
//! A 5-star mentor with one review must not outrank a 4.5-star mentor
//! with fifty, so small samples are damped toward zero.
//!
//! ## Match (against a company's required stacks)
//! ```text
//! stack_score     = required.is_empty ? 0.5 : |mentor ∩ required| / |required|
//! availability    = hours_per_week >= 10 ? 0.1 : 0
//! final           = stack_score * 0.5 + availability + reputation * 0.4
//! match_score     = round(final * 100)
//! ```
//! The ceiling of `final` is 1.1. It is intentionally not renormalized.
//!
//! Scores are request-scoped projections and are never stored.

use catalog::{Mentor, normalize_stacks};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;

/// Weight of stack fit in the final match score
pub const STACK_WEIGHT: f64 = 0.5;
/// Weight of reputation in the final match score
pub const REPUTATION_WEIGHT: f64 = 0.4;
/// Flat bonus for mentors with enough weekly availability
pub const AVAILABILITY_BONUS: f64 = 0.1;
pub const AVAILABILITY_BONUS_MIN_HOURS: u32 = 10;
/// Review count at which confidence saturates
pub const FULL_CONFIDENCE_REVIEWS: u32 = 10;
/// Stack score used when the company lists no required stacks
pub const NEUTRAL_STACK_SCORE: f64 = 0.5;
pub const MAX_RATING: f64 = 5.0;

/// A derived score attached to a mentor for one request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum MentorScore {
    /// Company-specific fit, 0..=110
    #[serde(rename = "matchScore")]
    Match(u32),
    /// Company-independent quality, 0..=1
    #[serde(rename = "reputationScore")]
    Reputation(f64),
}

impl MentorScore {
    /// Sort key; match and reputation scores are never compared to each other
    pub fn value(&self) -> f64 {
        match *self {
            MentorScore::Match(score) => score as f64,
            MentorScore::Reputation(score) => score,
        }
    }
}

/// A mentor snapshot plus its request-scoped score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMentor {
    #[serde(flatten)]
    pub mentor: Mentor,
    #[serde(flatten)]
    pub score: MentorScore,
}

impl ScoredMentor {
    pub fn match_score(&self) -> Option<u32> {
        match self.score {
            MentorScore::Match(score) => Some(score),
            MentorScore::Reputation(_) => None,
        }
    }

    pub fn reputation_score(&self) -> Option<f64> {
        match self.score {
            MentorScore::Reputation(score) => Some(score),
            MentorScore::Match(_) => None,
        }
    }
}

/// Every term of a match score, for explanations and tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBreakdown {
    pub stack_score: f64,
    pub availability_bonus: f64,
    pub reputation_score: f64,
    pub final_score: f64,
}

impl MatchBreakdown {
    /// The integer score shown to users and used for sorting
    pub fn match_score(&self) -> u32 {
        (self.final_score * 100.0).round() as u32
    }
}

/// Review-count damping factor in [0, 1]
pub fn confidence(total_reviews: u32) -> f64 {
    (total_reviews as f64 / FULL_CONFIDENCE_REVIEWS as f64).min(1.0)
}

/// Confidence-adjusted reputation in [0, 1]. Missing rating or review
/// count counts as zero.
pub fn reputation_score(mentor: &Mentor) -> f64 {
    (mentor.rating_or_zero() / MAX_RATING) * confidence(mentor.reviews_or_zero())
}

/// Fraction of `required` stacks the mentor covers, or the neutral 0.5
/// when nothing is required. `required` must already be normalized.
pub fn stack_score(mentor_stacks: &[String], required: &[String]) -> f64 {
    if required.is_empty() {
        return NEUTRAL_STACK_SCORE;
    }
    let mentor_set: HashSet<String> = mentor_stacks.iter().map(|s| s.to_lowercase()).collect();
    let covered = required.iter().filter(|s| mentor_set.contains(*s)).count();
    covered as f64 / required.len() as f64
}

pub fn availability_bonus(hours_per_week: u32) -> f64 {
    if hours_per_week >= AVAILABILITY_BONUS_MIN_HOURS {
        AVAILABILITY_BONUS
    } else {
        0.0
    }
}

/// Compute every term of the match score for one mentor.
pub fn match_breakdown(mentor: &Mentor, required: &[String]) -> MatchBreakdown {
    let stack_score = stack_score(&mentor.stacks, required);
    let availability_bonus = availability_bonus(mentor.availability_hours_per_week);
    let reputation_score = reputation_score(mentor);
    let final_score =
        stack_score * STACK_WEIGHT + availability_bonus + reputation_score * REPUTATION_WEIGHT;

    MatchBreakdown {
        stack_score,
        availability_bonus,
        reputation_score,
        final_score,
    }
}

#[derive(Debug, Clone)]
enum ScoringMode {
    Reputation,
    Match { required_stacks: Vec<String> },
}

/// Scores candidate batches in parallel.
///
/// Output order always equals input order; ranking is a separate step.
#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    mode: ScoringMode,
}

impl ScoreCalculator {
    /// Reputation-only scoring, used by the top-mentors feed
    pub fn reputation() -> Self {
        Self {
            mode: ScoringMode::Reputation,
        }
    }

    /// Match scoring against a company's required stacks
    pub fn for_required_stacks(required_stacks: &[String]) -> Self {
        Self {
            mode: ScoringMode::Match {
                required_stacks: normalize_stacks(required_stacks),
            },
        }
    }

    pub fn score(&self, mentor: &Mentor) -> MentorScore {
        match &self.mode {
            ScoringMode::Reputation => MentorScore::Reputation(reputation_score(mentor)),
            ScoringMode::Match { required_stacks } => {
                MentorScore::Match(match_breakdown(mentor, required_stacks).match_score())
            }
        }
    }

    /// Score every mentor, preserving candidate order.
    pub fn score_all(&self, mentors: Vec<Mentor>) -> Vec<ScoredMentor> {
        mentors
            .into_par_iter()
            .map(|mentor| {
                let score = self.score(&mentor);
                ScoredMentor { mentor, score }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::mentor_with_stacks;

    const EPS: f64 = 1e-9;

    fn stacks(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|s| s.to_string()).collect()
    }

    fn rated(id: &str, tags: &[&str], rating: f64, reviews: u32, hours: u32) -> Mentor {
        let mut m = mentor_with_stacks(id, tags);
        m.rating = Some(rating);
        m.total_reviews = Some(reviews);
        m.availability_hours_per_week = hours;
        m
    }

    #[test]
    fn test_zero_reviews_means_zero_reputation() {
        for rating in [0.0, 2.5, 5.0] {
            let m = rated("a", &[], rating, 0, 0);
            assert_eq!(reputation_score(&m), 0.0);
        }
    }

    #[test]
    fn test_confidence_saturates_at_ten_reviews() {
        assert_eq!(confidence(10), 1.0);
        assert_eq!(confidence(11), 1.0);
        assert_eq!(confidence(500), 1.0);
        assert!((confidence(3) - 0.3).abs() < EPS);
    }

    #[test]
    fn test_missing_rating_and_reviews_read_as_zero() {
        let mut m = mentor_with_stacks("a", &[]);
        m.rating = None;
        m.total_reviews = None;
        assert_eq!(reputation_score(&m), 0.0);

        m.rating = Some(5.0);
        assert_eq!(reputation_score(&m), 0.0);
    }

    #[test]
    fn test_few_perfect_reviews_lose_to_many_good_ones() {
        let lucky = rated("a", &[], 5.0, 1, 0);
        let proven = rated("b", &[], 4.5, 50, 0);
        assert!(reputation_score(&proven) > reputation_score(&lucky));
    }

    #[test]
    fn test_empty_required_stacks_is_neutral() {
        assert_eq!(stack_score(&stacks(&["react"]), &[]), 0.5);
        assert_eq!(stack_score(&[], &[]), 0.5);
    }

    #[test]
    fn test_stack_score_fraction() {
        let required = stacks(&["react", "node", "go", "rust"]);
        assert_eq!(stack_score(&stacks(&["react", "python"]), &required), 0.25);
        assert_eq!(stack_score(&stacks(&["REACT", "Node"]), &required), 0.5);
    }

    #[test]
    fn test_match_score_monotonic_in_overlap() {
        let required = stacks(&["a", "b", "c", "d"]);
        let mut previous = 0;
        for covered in 0..=4 {
            let tags: Vec<&str> = ["a", "b", "c", "d"][..covered].to_vec();
            let m = rated("m", &tags, 4.0, 5, 8);
            let score = match_breakdown(&m, &required).match_score();
            assert!(score >= previous, "{score} < {previous} at {covered}");
            previous = score;
        }
    }

    #[test]
    fn test_scenario_full_fit_scores_100() {
        let required = stacks(&["react"]);
        let a = rated("a", &["react", "node"], 5.0, 20, 12);

        let breakdown = match_breakdown(&a, &required);
        assert_eq!(breakdown.stack_score, 1.0);
        assert_eq!(breakdown.availability_bonus, 0.1);
        assert_eq!(breakdown.reputation_score, 1.0);
        assert!((breakdown.final_score - 1.0).abs() < EPS);
        assert_eq!(breakdown.match_score(), 100);
    }

    #[test]
    fn test_scenario_no_overlap_scores_6() {
        let required = stacks(&["react"]);
        let b = rated("b", &["python"], 4.0, 2, 5);

        let breakdown = match_breakdown(&b, &required);
        assert_eq!(breakdown.stack_score, 0.0);
        assert_eq!(breakdown.availability_bonus, 0.0);
        assert!((breakdown.reputation_score - 0.16).abs() < EPS);
        assert!((breakdown.final_score - 0.064).abs() < EPS);
        assert_eq!(breakdown.match_score(), 6);
    }

    #[test]
    fn test_ceiling_is_not_renormalized() {
        let m = rated("a", &["x"], 5.0, 10, 40);
        let breakdown = match_breakdown(&m, &[]);
        // 0.5*0.5 + 0.1 + 0.4
        assert!((breakdown.final_score - 0.75).abs() < EPS);

        let breakdown = match_breakdown(&m, &stacks(&["x"]));
        assert!(breakdown.final_score <= 1.1 + EPS);
    }

    #[test]
    fn test_calculator_preserves_order() {
        let mentors = vec![
            rated("low", &["python"], 1.0, 1, 0),
            rated("high", &["react"], 5.0, 30, 20),
        ];

        let scored = ScoreCalculator::for_required_stacks(&stacks(&["React"])).score_all(mentors);
        assert_eq!(scored[0].mentor.id, "low");
        assert_eq!(scored[1].mentor.id, "high");
        assert_eq!(scored[1].match_score(), Some(100));
        assert_eq!(scored[1].reputation_score(), None);
    }

    #[test]
    fn test_reputation_calculator() {
        let scored = ScoreCalculator::reputation().score_all(vec![rated("a", &[], 4.0, 5, 0)]);
        let score = scored[0].reputation_score().unwrap();
        assert!((score - 0.4).abs() < EPS);
        assert_eq!(scored[0].match_score(), None);
    }

    #[test]
    fn test_scored_mentor_serializes_flat() {
        let scored = ScoredMentor {
            mentor: rated("a", &["react"], 5.0, 20, 12),
            score: MentorScore::Match(100),
        };
        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["id"], "a");
        assert_eq!(json["matchScore"], 100);
        assert_eq!(json["hourlyRate"], 100.0);
    }
}
