// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ExperienceLevel, MatchBreakdown, MatchResult, Profile, ProfileError, Role, ScoringWeights};
pub use requests::{RegistrationError, RegistrationRequest};
pub use responses::{MatchReport, MatchSummary, EXCELLENT_SCORE};
