use clap::{Parser, Subcommand};

/// SmartDining — optimize a week of campus meals against a budget and dietary filters.
#[derive(Parser, Debug)]
#[command(name = "smart_dining")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the menu CSV file.
    #[arg(short, long, default_value = "menu.csv")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an optimized weekly meal plan (default).
    Plan {
        /// Write the plan as CSV to this path.
        #[arg(long)]
        export: Option<String>,

        /// Write the plan as JSON to this path.
        #[arg(long)]
        json: Option<String>,
    },

    /// Show a summary of the menu file.
    Inspect,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            export: None,
            json: None,
        }
    }
}
