use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Profile;

/// Mentor records bundled with the binary
const BUILTIN_MENTORS: &str = include_str!("../../data/mentors.json");

/// Errors that can occur while loading a mentor dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate profile id in dataset: {0}")]
    DuplicateId(String),
}

/// Static candidate list handed to the matcher
#[derive(Debug, Clone, Default)]
pub struct MentorDataset {
    profiles: Vec<Profile>,
}

impl MentorDataset {
    /// Parse the bundled dataset
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::from_json_str(BUILTIN_MENTORS)
    }

    /// Load a JSON array of profiles from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_json_str(&raw)?;
        tracing::debug!("Loaded {} profiles from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Parse a JSON array of profiles
    ///
    /// Unknown experience levels or roles fail here, before any scoring.
    pub fn from_json_str(raw: &str) -> Result<Self, DatasetError> {
        let profiles: Vec<Profile> = serde_json::from_str(raw)?;
        Self::from_profiles(profiles)
    }

    pub fn from_profiles(profiles: Vec<Profile>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(profiles.len());
        for profile in &profiles {
            if !seen.insert(profile.id.as_str()) {
                return Err(DatasetError::DuplicateId(profile.id.clone()));
            }
        }

        Ok(Self { profiles })
    }

    /// Every record, in dataset order
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn mentors(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter().filter(|p| p.is_mentor())
    }

    pub fn find(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
