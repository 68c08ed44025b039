use serde::Serialize;
use crate::models::domain::{MatchResult, Profile};

/// Score at or above which a match counts as excellent
pub const EXCELLENT_SCORE: u8 = 80;

/// Aggregate figures over a ranked list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    #[serde(rename = "matchesFound")]
    pub matches_found: usize,
    #[serde(rename = "bestScore")]
    pub best_score: u8,
    #[serde(rename = "averageScore")]
    pub average_score: u8,
    #[serde(rename = "excellentMatches")]
    pub excellent_matches: usize,
}

impl MatchSummary {
    /// Summarize an already ranked list. Scores are read, never recomputed.
    pub fn from_matches(matches: &[MatchResult<'_>]) -> Self {
        let matches_found = matches.len();
        let best_score = matches.iter().map(|m| m.score).max().unwrap_or(0);
        let average_score = if matches_found == 0 {
            0
        } else {
            let total: u32 = matches.iter().map(|m| u32::from(m.score)).sum();
            (f64::from(total) / matches_found as f64).round() as u8
        };
        let excellent_matches = matches.iter().filter(|m| m.score >= EXCELLENT_SCORE).count();

        Self {
            matches_found,
            best_score,
            average_score,
            excellent_matches,
        }
    }
}

/// Results page payload for one completed registration
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport<'a> {
    pub mentee: &'a Profile,
    pub matches: Vec<MatchResult<'a>>,
    pub summary: MatchSummary,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

impl<'a> MatchReport<'a> {
    pub fn new(mentee: &'a Profile, matches: Vec<MatchResult<'a>>) -> Self {
        let summary = MatchSummary::from_matches(&matches);
        Self {
            mentee,
            matches,
            summary,
            generated_at: chrono::Utc::now(),
        }
    }
}
