use crate::core::{experience::experience_compatibility, similarity::jaccard_similarity};
use crate::models::{MatchBreakdown, MatchResult, Profile, ScoringWeights};

/// Score a mentor (0-100) against a mentee
///
/// Scoring formula:
/// score = (
///     skills_similarity * 0.4 +       # Jaccard over skills
///     interests_similarity * 0.3 +    # Jaccard over interests
///     goals_similarity * 0.2 +        # Jaccard over goals
///     experience_compatibility * 0.1  # Seniority gap lookup
/// ) * 100
///
/// The breakdown reports each factor on its own 0-100 scale, not its
/// weighted contribution.
pub fn calculate_match_score<'m>(mentee: &Profile, mentor: &'m Profile) -> MatchResult<'m> {
    let skills = jaccard_similarity(&mentee.skills, &mentor.skills);
    let interests = jaccard_similarity(&mentee.interests, &mentor.interests);
    let goals = jaccard_similarity(&mentee.goals, &mentor.goals);
    let experience = experience_compatibility(mentee.experience_level, mentor.experience_level);

    let total = skills * ScoringWeights::SKILLS
        + interests * ScoringWeights::INTERESTS
        + goals * ScoringWeights::GOALS
        + experience * ScoringWeights::EXPERIENCE;

    MatchResult {
        mentor,
        score: to_percent(total),
        breakdown: MatchBreakdown {
            skills_match: to_percent(skills),
            interests_match: to_percent(interests),
            goals_match: to_percent(goals),
            experience_compatibility: to_percent(experience),
        },
    }
}

/// Convert a 0-1 fraction to a whole percentage, rounding half away from zero
#[inline]
fn to_percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}
