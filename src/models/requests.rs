use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::models::domain::{ExperienceLevel, Profile, Role};

/// Errors that can occur while registering a mentee
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Registration form payload
///
/// ```json
/// {
///   "name": "Jane Doe",
///   "email": "jane@example.com",
///   "skills": ["Python", "React", "SQL"],
///   "interests": ["Research", "Teaching", "Open Source"],
///   "goals": ["Career Advancement", "Networking"],
///   "experienceLevel": "intermediate"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegistrationRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 3))]
    #[serde(default)]
    pub skills: Vec<String>,
    #[validate(length(min = 3))]
    #[serde(default)]
    pub interests: Vec<String>,
    #[validate(length(min = 2))]
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(alias = "experience_level", rename = "experienceLevel", default)]
    pub experience_level: ExperienceLevel,
}

impl RegistrationRequest {
    /// Validate the form and turn it into a mentee profile with a fresh id
    pub fn into_profile(self) -> Result<Profile, RegistrationError> {
        self.validate()?;

        Ok(Profile {
            id: uuid::Uuid::new_v4().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: Role::Mentee,
            skills: self.skills,
            interests: self.interests,
            goals: self.goals,
            experience_level: self.experience_level,
            bio: None,
            availability: None,
            avatar: None,
        })
    }
}
