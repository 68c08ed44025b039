// Core algorithm exports
pub mod experience;
pub mod matcher;
pub mod scoring;
pub mod similarity;

pub use experience::experience_compatibility;
pub use matcher::{rank, Matcher, DEFAULT_TOP_N};
pub use scoring::calculate_match_score;
pub use similarity::jaccard_similarity;
