//! Evaluation registry
//!
//! The workflow talks to the registry through [`EvaluationStore`] so a
//! different backing (e.g. a fixture store in tests) can stand in for
//! [`InMemoryStore`].

mod memory;

pub use memory::InMemoryStore;

use crate::error::EvalResult;
use crate::models::{Evaluation, EvaluationKey};

/// Registry of evaluations keyed by (employee number, quarter, year).
///
/// Employee numbers are matched case-insensitively. Records are never
/// removed.
pub trait EvaluationStore {
    /// Insert a fresh evaluation. Fails with `DuplicateEvaluation` if the key exists.
    fn create(&mut self, key: EvaluationKey) -> EvalResult<&Evaluation>;

    fn get(&self, key: &EvaluationKey) -> Option<&Evaluation>;

    fn get_mut(&mut self, key: &EvaluationKey) -> Option<&mut Evaluation>;

    /// Evaluations for one employee, most recent first (year, then quarter)
    fn list_by_employee(&self, employee_number: &str) -> Vec<&Evaluation>;

    /// Evaluations that are not completed yet
    fn list_pending(&self) -> Vec<&Evaluation>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
