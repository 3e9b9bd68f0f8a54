// perfeval - Quarterly Employee Evaluations
// Self-evaluation followed by manager review, persisted to a JSON record file

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod services;
pub mod store;
pub mod validator;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use error::{EvalError, EvalResult, PersistError, ScoreError};
pub use models::{Category, Employee, Evaluation, EvaluationKey, EvaluationStage, ScoreMap};
pub use persistence::{JsonRecordFile, RecordGateway};
pub use services::{EmployeeDirectory, WorkflowController};
pub use store::{EvaluationStore, InMemoryStore};
