use crate::core::scoring::calculate_match_score;
use crate::models::{MatchResult, Profile};

/// Number of matches returned when the caller does not ask for a count
pub const DEFAULT_TOP_N: usize = 5;

/// Ranks mentor candidates for a mentee
///
/// # Pipeline Stages
/// 1. Role filter (mentors only)
/// 2. Scoring
/// 3. Stable descending sort by score
/// 4. Truncation to the requested count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    default_top_n: usize,
}

impl Matcher {
    pub fn new(default_top_n: usize) -> Self {
        Self { default_top_n }
    }

    pub fn default_top_n(&self) -> usize {
        self.default_top_n
    }

    /// Rank candidates for a mentee, returning at most `top_n` matches
    ///
    /// Candidates whose role is not mentor are skipped. Equal scores keep
    /// their relative input order. Fewer mentors than `top_n` returns all
    /// of them; no mentors returns an empty list.
    ///
    /// # Arguments
    /// * `mentee` - The profile being matched
    /// * `candidates` - Candidate profiles, borrowed by the results
    /// * `top_n` - Maximum number of matches to return
    pub fn rank<'a>(
        &self,
        mentee: &Profile,
        candidates: &'a [Profile],
        top_n: usize,
    ) -> Vec<MatchResult<'a>> {
        let mut scored: Vec<MatchResult<'a>> = candidates
            .iter()
            .filter(|candidate| candidate.is_mentor())
            .map(|mentor| calculate_match_score(mentee, mentor))
            .collect();

        let mentor_count = scored.len();

        // sort_by is stable: ties keep input order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(top_n);

        tracing::debug!(
            mentee_id = %mentee.id,
            candidates = candidates.len(),
            mentors = mentor_count,
            returned = scored.len(),
            "Ranked mentor candidates"
        );

        scored
    }

    /// Rank with this matcher's default count
    pub fn rank_default<'a>(&self, mentee: &Profile, candidates: &'a [Profile]) -> Vec<MatchResult<'a>> {
        self.rank(mentee, candidates, self.default_top_n)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

/// Rank candidates with a one-off default matcher
pub fn rank<'a>(mentee: &Profile, candidates: &'a [Profile], top_n: usize) -> Vec<MatchResult<'a>> {
    Matcher::default().rank(mentee, candidates, top_n)
}
