use crate::utils::output::OutputStyle;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config file {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("`{0}` was not found in PATH")]
    MissingTool(String),

    #[error("`{program}` exited with {status}: {stderr}")]
    External {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to parse output: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("System error: {0}")]
    System(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub enum FlowResult {
    EmptyList { item_type: String },
    Skipped(String),
    Success(String),
}

pub fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<AppError>() {
        Some(AppError::MissingTool(tool)) => {
            eprintln!(
                "❌ {}",
                OutputStyle::error(&format!("`{}` is required but was not found in PATH", tool))
            );
        }
        Some(AppError::Config { path, reason }) => {
            eprintln!(
                "❌ {}",
                OutputStyle::error(&format!("Cannot read {}: {}", path.display(), reason))
            );
        }
        _ => {
            eprintln!("❌ {}", OutputStyle::error(&format!("{:#}", err)));
        }
    }
}

pub fn handle_flow(flow: FlowResult) {
    match flow {
        FlowResult::EmptyList { item_type } => {
            let msg = format!("No {} found", item_type);
            println!("{}", OutputStyle::muted(&msg));
        }
        FlowResult::Skipped(msg) => {
            println!("⏭️  {}", OutputStyle::muted(&msg));
        }
        FlowResult::Success(msg) => {
            println!("✅ {}", OutputStyle::success(&msg));
        }
    }
}
