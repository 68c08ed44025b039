use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while constructing a profile
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Unknown experience level: {0:?} (expected beginner, intermediate, advanced or expert)")]
    UnknownExperienceLevel(String),

    #[error("Unknown role: {0:?} (expected mentor or mentee)")]
    UnknownRole(String),
}

/// Which side of the match a profile sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mentor,
    Mentee,
}

impl FromStr for Role {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mentor" => Ok(Role::Mentor),
            "mentee" => Ok(Role::Mentee),
            _ => Err(ProfileError::UnknownRole(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Mentor => f.write_str("mentor"),
            Role::Mentee => f.write_str("mentee"),
        }
    }
}

/// Ordered experience category
///
/// Only the ordinal distance between two levels is used, when computing
/// experience compatibility.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
        ExperienceLevel::Expert,
    ];

    /// Ordinal position, 0 (beginner) through 3 (expert)
    #[inline]
    pub fn ordinal(self) -> i8 {
        match self {
            ExperienceLevel::Beginner => 0,
            ExperienceLevel::Intermediate => 1,
            ExperienceLevel::Advanced => 2,
            ExperienceLevel::Expert => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
            ExperienceLevel::Expert => "expert",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            "expert" => Ok(ExperienceLevel::Expert),
            _ => Err(ProfileError::UnknownExperienceLevel(s.to_string())),
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mentor or mentee profile
///
/// Skills, interests and goals are label sets: comparison ignores letter
/// casing and order. Bio, availability and avatar are display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(rename = "experienceLevel")]
    pub experience_level: ExperienceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Profile {
    #[inline]
    pub fn is_mentor(&self) -> bool {
        self.role == Role::Mentor
    }
}

/// Unweighted per-factor scores, each on its own 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    #[serde(rename = "skillsMatch")]
    pub skills_match: u8,
    #[serde(rename = "interestsMatch")]
    pub interests_match: u8,
    #[serde(rename = "goalsMatch")]
    pub goals_match: u8,
    #[serde(rename = "experienceCompatibility")]
    pub experience_compatibility: u8,
}

/// A scored mentor. Borrows the mentor from the caller's candidate list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub mentor: &'a Profile,
    pub score: u8,
    pub breakdown: MatchBreakdown,
}

/// Factor weights. Fixed; they sum to 1.0.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights;

impl ScoringWeights {
    pub const SKILLS: f64 = 0.4;
    pub const INTERESTS: f64 = 0.3;
    pub const GOALS: f64 = 0.2;
    pub const EXPERIENCE: f64 = 0.1;
}
