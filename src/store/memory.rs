use super::EvaluationStore;
use crate::error::{EvalError, EvalResult};
use crate::models::{Evaluation, EvaluationKey};
use std::cmp::Reverse;

/// Vec-backed store holding every evaluation for the process lifetime
#[derive(Debug, Default)]
pub struct InMemoryStore {
    evaluations: Vec<Evaluation>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously saved evaluations.
    ///
    /// A later entry for an existing key replaces the earlier one.
    pub fn from_evaluations(evaluations: impl IntoIterator<Item = Evaluation>) -> Self {
        let mut store = Self::new();
        for evaluation in evaluations {
            let key = evaluation.key();
            match store.position(&key) {
                Some(index) => store.evaluations[index] = evaluation,
                None => store.evaluations.push(evaluation),
            }
        }
        store
    }

    fn position(&self, key: &EvaluationKey) -> Option<usize> {
        self.evaluations.iter().position(|e| e.matches(key))
    }
}

impl EvaluationStore for InMemoryStore {
    fn create(&mut self, key: EvaluationKey) -> EvalResult<&Evaluation> {
        if self.position(&key).is_some() {
            return Err(EvalError::DuplicateEvaluation(key));
        }

        self.evaluations.push(Evaluation::new(key));
        let index = self.evaluations.len() - 1;
        Ok(&self.evaluations[index])
    }

    fn get(&self, key: &EvaluationKey) -> Option<&Evaluation> {
        self.evaluations.iter().find(|e| e.matches(key))
    }

    fn get_mut(&mut self, key: &EvaluationKey) -> Option<&mut Evaluation> {
        self.evaluations.iter_mut().find(|e| e.matches(key))
    }

    fn list_by_employee(&self, employee_number: &str) -> Vec<&Evaluation> {
        let mut found: Vec<&Evaluation> = self
            .evaluations
            .iter()
            .filter(|e| e.employee_number.eq_ignore_ascii_case(employee_number))
            .collect();
        found.sort_by_key(|e| Reverse((e.year, e.quarter)));
        found
    }

    fn list_pending(&self) -> Vec<&Evaluation> {
        self.evaluations.iter().filter(|e| !e.is_completed).collect()
    }

    fn len(&self) -> usize {
        self.evaluations.len()
    }
}
