//! Mentor Match - ranks mentor profiles against a mentee
//!
//! Each mentor is scored on skills, interests and goals overlap (Jaccard
//! similarity over case-folded labels) plus an experience compatibility
//! rule, then ranked by total score.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use self::core::{calculate_match_score, rank, Matcher};
pub use models::{ExperienceLevel, MatchBreakdown, MatchReport, MatchResult, Profile, RegistrationRequest, Role};
pub use services::MentorDataset;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let dataset = MentorDataset::builtin().unwrap();
        let mentee = dataset.profiles()[0].clone();
        let matches = rank(&mentee, dataset.profiles(), 3);
        assert_eq!(matches.len(), 3);
    }
}
