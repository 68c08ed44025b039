use clap::{Args, Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use thiserror::Error;

use mentor_match::models::RegistrationError;
use mentor_match::services::DatasetError;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

#[derive(Parser)]
#[command(
    name = "mentor-match",
    version,
    about = "Rank mentors for a mentee by skills, interests, goals and experience"
)]
pub struct Cli {
    /// Settings file (defaults to config/default.toml and config/local.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Mentor dataset JSON (defaults to the bundled dataset)
    #[arg(long, global = true)]
    pub mentors: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long, global = true)]
    pub compact: bool,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a mentee and print the ranked mentor report
    Match(MatchCommand),
    /// Score one mentee profile against one mentor
    Score(ScoreCommand),
    /// List the mentors in the dataset
    Mentors,
}

#[derive(Args)]
pub struct MatchCommand {
    /// Registration form JSON, or - for stdin
    #[arg(long)]
    pub registration: PathBuf,
    /// Number of matches to return
    #[arg(long)]
    pub top: Option<NonZeroUsize>,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Mentee profile JSON, or - for stdin
    #[arg(long)]
    pub mentee: PathBuf,
    /// Id of the mentor to score against
    #[arg(long)]
    pub mentor_id: String,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error("invalid input: {0}")]
    InvalidInput(#[source] serde_json::Error),

    #[error("unknown mentor id: {0}")]
    UnknownMentor(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Registration(_) | CliError::InvalidInput(_) | CliError::UnknownMentor(_) => {
                exit_code::INVALID_INPUT
            }
            _ => exit_code::RUNTIME_FAILURE,
        }
    }
}
