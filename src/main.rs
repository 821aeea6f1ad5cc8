use clap::Parser;
use std::path::Path;

use smart_dining_rs::catalog::load_menu;
use smart_dining_rs::cli::{Cli, Command};
use smart_dining_rs::error::Result;
use smart_dining_rs::export::{write_plan_csv, write_plan_json};
use smart_dining_rs::interface::{
    collect_preferences, display_menu_summary, display_targets, display_weekly_plan,
};
use smart_dining_rs::planner::{plan_week, MilpSolver};

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
        Command::Plan { export, json } => cmd_plan(&cli.file, export.as_deref(), json.as_deref()),
        Command::Inspect => cmd_inspect(&cli.file),
    }
}

/// Collect preferences, run the optimizer, and display the plan.
fn cmd_plan(file_path: &str, export: Option<&str>, json: Option<&str>) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Menu file not found: {}", file_path);
        eprintln!("Provide a menu CSV with --file.");
        return Ok(());
    }

    let menu = load_menu(path)?;
    println!("Loaded {} meals", menu.len());
    println!();

    let prefs = collect_preferences()?;

    println!();
    println!(
        "Optimizing 14 meals against a ${:.2} weekly budget...",
        prefs.weekly_budget
    );

    let plan = plan_week(&menu, &prefs, &MilpSolver)?;

    display_weekly_plan(&plan);
    display_targets(prefs.gender, &plan);

    if let Some(csv_path) = export {
        write_plan_csv(csv_path, &plan)?;
        println!("Plan exported to {}", csv_path);
    }

    if let Some(json_path) = json {
        write_plan_json(json_path, &plan)?;
        println!("Plan written to {}", json_path);
    }

    Ok(())
}

/// Preview the menu file: counts, price range, first few rows.
fn cmd_inspect(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Menu file not found: {}", file_path);
        return Ok(());
    }

    let menu = load_menu(path)?;
    display_menu_summary(&menu);

    Ok(())
}
