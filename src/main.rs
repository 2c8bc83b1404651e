use std::fs;
use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use diet_planner_rs::catalog;
use diet_planner_rs::cli::{Cli, Command};
use diet_planner_rs::error::Result;
use diet_planner_rs::interface::{prompt_profile, render_history, render_summary, render_target};
use diet_planner_rs::planner::{daily_target, generate_meal_plan, summarize};
use diet_planner_rs::state::{append_history, load_history, load_profile, save_profile};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { seed, export } => cmd_plan(&cli.profile, &cli.history, seed, export),
        Command::Profile => cmd_profile(&cli.profile),
        Command::Target => cmd_target(&cli.profile),
        Command::History => cmd_history(&cli.history),
    }
}

/// Interactively collect and save the profile.
fn cmd_profile(profile_path: &str) -> Result<()> {
    let profile = prompt_profile()?;
    save_profile(profile_path, &profile)?;
    println!("Profile saved to {}", profile_path);
    Ok(())
}

/// Show the daily target for the saved profile.
fn cmd_target(profile_path: &str) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let target = daily_target(&profile);
    print!("{}", render_target(&target));
    Ok(())
}

/// Generate a plan, display it, record it to history, optionally export it.
fn cmd_plan(
    profile_path: &str,
    history_path: &str,
    seed: Option<u64>,
    export: Option<String>,
) -> Result<()> {
    let profile = load_profile(profile_path)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let plan = generate_meal_plan(&profile, catalog::all(), &mut rng);
    let summary = summarize(&plan);
    let text = render_summary(&summary);
    print!("{}", text);

    // A failed history write must not discard the plan the user just got.
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    if let Err(e) = append_history(history_path, &today, &summary) {
        eprintln!("Warning: could not record plan to history: {}", e);
    }

    if let Some(export_path) = export {
        fs::write(&export_path, &text)?;
        println!("Meal plan exported to {}", export_path);
    }

    Ok(())
}

/// Show past plans from the history file.
fn cmd_history(history_path: &str) -> Result<()> {
    if !Path::new(history_path).exists() {
        println!("No history available yet.");
        return Ok(());
    }

    let entries = load_history(history_path)?;
    print!("{}", render_history(&entries));
    Ok(())
}
