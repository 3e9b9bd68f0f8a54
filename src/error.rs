//! Error types for the evaluation workflow

use crate::models::{Category, EvaluationKey};

/// Result type for workflow and store operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors raised by the evaluation workflow
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("Evaluation for employee {} in Q{} {} already exists.", .0.employee_number, .0.quarter, .0.year)]
    DuplicateEvaluation(EvaluationKey),

    #[error("No evaluation found for employee {} in Q{} {}. Employee must submit self-evaluation first.", .0.employee_number, .0.quarter, .0.year)]
    EvaluationNotFound(EvaluationKey),

    #[error("Employee must complete self-evaluation before manager can evaluate ({0}).")]
    MissingSelfEvaluation(EvaluationKey),

    #[error("Manager evaluation for employee {} in Q{} {} is already completed.", .0.employee_number, .0.quarter, .0.year)]
    AlreadyCompleted(EvaluationKey),

    #[error("Quarter must be between 1 and 4, got {0}")]
    InvalidQuarter(u8),

    #[error("Unknown employee: {0}")]
    UnknownEmployee(String),

    #[error(transparent)]
    Validation(#[from] ScoreError),

    #[error(transparent)]
    Persistence(#[from] PersistError),
}

/// A rejected score submission
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("Score for {0} is required.")]
    MissingCategory(Category),

    #[error("Score for {category} must be between 1 and 5, got {score}.")]
    OutOfRange { category: Category, score: i32 },
}

/// Failures writing the record file
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("Failed to write evaluation records: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize evaluation records: {0}")]
    Serialize(#[from] serde_json::Error),
}
