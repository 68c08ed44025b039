mod cli;

use clap::Parser;
use cli::{exit_code, Cli, CliError, Commands};
use mentor_match::config::{LoggingSettings, Settings};
use mentor_match::core::{calculate_match_score, Matcher};
use mentor_match::models::{MatchReport, Profile, RegistrationRequest};
use mentor_match::services::MentorDataset;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings, verbose: u8) {
    let level = match verbose {
        0 => logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout carries the report; logs go to stderr
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.pretty().init();
    }
}

/// Read a file, or stdin when the path is `-`
fn read_input(path: &Path) -> Result<String, CliError> {
    let io_error = |source| CliError::Io {
        path: path.display().to_string(),
        source,
    };

    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_error)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).map_err(io_error)
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<(), CliError> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

fn load_dataset(path: Option<&Path>) -> Result<MentorDataset, CliError> {
    let dataset = match path {
        Some(path) => MentorDataset::from_path(path)?,
        None => MentorDataset::builtin()?,
    };
    info!(
        "Mentor dataset loaded ({} profiles, {} mentors)",
        dataset.len(),
        dataset.mentors().count()
    );
    Ok(dataset)
}

fn run() -> Result<(), CliError> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    init_logging(&settings.logging, cli.verbose);
    info!("Configuration loaded successfully");

    let dataset_path = cli.mentors.as_deref().or(settings.dataset.path.as_deref());
    let dataset = load_dataset(dataset_path)?;

    let matcher = Matcher::new(settings.matching.default_top_n);

    match cli.command {
        Commands::Match(cmd) => {
            let raw = read_input(&cmd.registration)?;
            let request: RegistrationRequest =
                serde_json::from_str(&raw).map_err(CliError::InvalidInput)?;
            let mentee = request.into_profile()?;

            let top_n = cmd
                .top
                .map(|n| n.get())
                .unwrap_or(settings.matching.results_top_n);

            info!("Finding matches for mentee: {}, limit: {}", mentee.id, top_n);

            let matches = matcher.rank(&mentee, dataset.profiles(), top_n);
            let report = MatchReport::new(&mentee, matches);

            info!(
                "Returning {} matches for mentee {} (best score {})",
                report.summary.matches_found, mentee.id, report.summary.best_score
            );

            print_json(&report, cli.compact)
        }
        Commands::Score(cmd) => {
            let raw = read_input(&cmd.mentee)?;
            let mentee: Profile = serde_json::from_str(&raw).map_err(CliError::InvalidInput)?;

            let mentor = dataset
                .mentors()
                .find(|m| m.id == cmd.mentor_id)
                .ok_or_else(|| CliError::UnknownMentor(cmd.mentor_id.clone()))?;

            let result = calculate_match_score(&mentee, mentor);
            print_json(&result, cli.compact)
        }
        Commands::Mentors => {
            let mentors: Vec<&Profile> = dataset.mentors().collect();
            print_json(&mentors, cli.compact)
        }
    }
}

fn main() {
    let code = match run() {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            e.exit_code()
        }
    };

    if code != exit_code::SUCCESS {
        std::process::exit(code);
    }
}
