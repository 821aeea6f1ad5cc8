use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiningError {
    #[error(
        "only {available} meals match the active filters; a weekly plan needs at least 14 \
         (relax some restrictions or add meals to the menu)"
    )]
    InsufficientInventory { available: usize },

    #[error(
        "no meal assignment satisfies every constraint; try raising the budget or relaxing \
         restrictions"
    )]
    Infeasible,

    #[error("solver failure: {0} (retrying with the same request may succeed)")]
    Solver(String),

    #[error("solver returned a malformed assignment: {0}")]
    MalformedSolution(String),

    #[error("menu file is missing required columns: {0}")]
    MissingColumns(String),

    #[error("invalid menu row: {0}")]
    InvalidMeal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, DiningError>;
