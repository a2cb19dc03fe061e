//! Fitverse - Workout Gamification Engine
//!
//! Command line entry point.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fitverse::avatar::AvatarCatalog;
use fitverse::badges::RarityOrder;
use fitverse::coach::{CoachClient, CoachProfile, Gender};
use fitverse::leaderboard::build_leaderboard;
use fitverse::progression::{compute_streak, parse_timestamp, Goal, ProgressionUpdater, WorkoutChecklist};
use fitverse::storage::{self, EngineConfig};

#[derive(Parser)]
#[command(name = "fitverse", version, about = "Workout gamification engine")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a completed session to a state file
    Complete {
        #[arg(long)]
        state: PathBuf,
        /// Number of exercises checked off
        #[arg(long)]
        exercises: u32,
        /// Completion time (defaults to the local clock)
        #[arg(long)]
        at: Option<String>,
    },
    /// Print the current streak for a state file
    Streak {
        #[arg(long)]
        state: PathBuf,
        #[arg(long)]
        at: Option<String>,
    },
    /// Print the leaderboard for a member list
    Leaderboard {
        #[arg(long)]
        members: PathBuf,
    },
    /// Print the avatar image for a state file
    Avatar {
        #[arg(long)]
        state: PathBuf,
        #[arg(long, default_value = "cat")]
        avatar: String,
    },
    /// Ask the coach for a workout plan
    Plan {
        #[arg(long, value_parser = parse_goal)]
        goal: Goal,
        #[arg(long, value_parser = parse_gender, default_value = "Other")]
        gender: Gender,
        #[arg(long, default_value = "drill_sergeant")]
        trainer: String,
        #[arg(long, default_value_t = 0)]
        progress: u8,
        #[arg(long, default_value_t = 75.0)]
        weight: f64,
    },
}

fn parse_goal(s: &str) -> Result<Goal, String> {
    Goal::from_str(s).ok_or_else(|| {
        format!("unknown goal '{s}', expected one of: Build Muscle, Lose Weight, Improve Endurance")
    })
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    [Gender::Male, Gender::Female, Gender::Other]
        .into_iter()
        .find(|g| g.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("unknown gender '{s}', expected one of: Male, Female, Other"))
}

fn resolve_now(at: Option<&str>) -> anyhow::Result<NaiveDateTime> {
    match at {
        Some(s) => Ok(parse_timestamp(s)?),
        None => Ok(chrono::Local::now().naive_local()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Fitverse v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => storage::load_config_from(path)?,
        None => storage::load_config()?,
    };

    match cli.command {
        Command::Complete { state, exercises, at } => complete(&config, &state, exercises, at.as_deref()),
        Command::Streak { state, at } => {
            let current = storage::load_state(&state)?;
            let now = resolve_now(at.as_deref())?;
            let streak = compute_streak(&current.activity_log, current.weekly_goal, now);
            println!("{streak}");
            Ok(())
        }
        Command::Leaderboard { members } => {
            let members = storage::load_members(&members)?;
            let board = build_leaderboard(
                &members,
                &RarityOrder::default(),
                config.leaderboard.top_badges,
                None,
            );
            for entry in board {
                let icons: Vec<&str> = entry.top_badges.iter().map(|b| b.icon()).collect();
                println!("{:>3}. {:<24} {:>8} {}", entry.rank, entry.name, entry.points, icons.join(" "));
            }
            Ok(())
        }
        Command::Avatar { state, avatar } => {
            let current = storage::load_state(&state)?;
            let catalog = AvatarCatalog::default();
            let url = catalog
                .stage_image(&avatar, current.goal, f64::from(current.progress))
                .with_context(|| format!("unknown avatar '{avatar}'"))?;
            println!("{url}");
            Ok(())
        }
        Command::Plan { goal, gender, trainer, progress, weight } => {
            let profile = CoachProfile {
                goal,
                gender,
                progress,
                current_weight_kg: weight,
                trainer_id: trainer,
            };
            plan(&config, &profile)
        }
    }
}

fn complete(config: &EngineConfig, path: &Path, exercises: u32, at: Option<&str>) -> anyhow::Result<()> {
    let current = storage::load_state(path)
        .with_context(|| format!("loading state from {}", path.display()))?;
    let now = resolve_now(at)?;

    let updater = ProgressionUpdater::new(config.scoring.clone());
    let outcome = updater.complete_session(&current, exercises, now)?;
    storage::save_state(path, &outcome.state)?;

    println!(
        "points={} streak={} progress={}%",
        outcome.state.points, outcome.state.streak, outcome.state.progress
    );
    for badge in &outcome.unlocked {
        println!("Unlocked {} {}: {}", badge.icon(), badge, badge.description());
    }
    Ok(())
}

fn plan(config: &EngineConfig, profile: &CoachProfile) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let generated = CoachClient::from_settings(&config.coach)
        .and_then(|client| runtime.block_on(client.request_plan(profile)));

    // Keep the built-in list when the coach is unavailable
    let checklist = match generated {
        Ok(exercises) => {
            let batch = chrono::Utc::now().timestamp_millis().to_string();
            WorkoutChecklist::from_plan(&batch, &exercises)
        }
        Err(e) => {
            eprintln!("Coach unavailable ({e}), using the default plan");
            WorkoutChecklist::for_goal(profile.goal)
        }
    };

    for item in checklist.items() {
        println!("{:<6} {:<28} {} x {}", item.id, item.name, item.sets, item.reps);
    }
    Ok(())
}
