use clap::{Parser, Subcommand};

/// DietPlanner — compute daily nutrition targets and assemble meal plans
/// from a built-in food catalog.
#[derive(Parser, Debug)]
#[command(name = "diet_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the saved profile JSON file.
    #[arg(short, long, default_value = "profile.json")]
    pub profile: String,

    /// Path to the meal history CSV file.
    #[arg(long, default_value = "meal_history.csv")]
    pub history: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a meal plan from the saved profile.
    Plan {
        /// Seed for the random selection, for reproducible plans.
        #[arg(long)]
        seed: Option<u64>,

        /// Export the rendered plan to a text file.
        #[arg(long)]
        export: Option<String>,
    },

    /// Interactively create or update the profile.
    Profile,

    /// Show the daily calorie and macro target for the saved profile.
    Target,

    /// Show past meal plans from the history file.
    History,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            seed: None,
            export: None,
        }
    }
}
