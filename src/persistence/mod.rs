//! Durable evaluation records
//!
//! Every save loads the whole record file, replaces the record for the
//! evaluation's key and rewrites the file:
//! - records are denormalized with the employee's name and department
//! - a missing or corrupt file reads as an empty collection
//! - the rewrite is a plain overwrite, not an atomic replace

mod record_file;

pub use record_file::{EvaluationRecord, JsonRecordFile, DEFAULT_RECORDS_FILE};

use crate::error::PersistError;
use crate::models::{Employee, Evaluation};

/// Sink the workflow hands each mutated evaluation to
pub trait RecordGateway {
    fn save(&self, evaluation: &Evaluation, employee: &Employee) -> Result<(), PersistError>;
}
