//! Workflow service - self-evaluation then manager-evaluation
//!
//! Each submission validates the scores, mutates the store and then saves
//! the evaluation through the record gateway before returning.
//!
//! Stages: Created -> SelfSubmitted -> ManagerCompleted (terminal).

use super::employee_service::EmployeeDirectory;
use crate::error::{EvalError, EvalResult};
use crate::models::{Employee, Evaluation, EvaluationKey, ScoreMap};
use crate::persistence::RecordGateway;
use crate::store::EvaluationStore;
use crate::validator;
use chrono::Utc;

/// Drives evaluation creation and stage transitions
pub struct WorkflowController<S, G> {
    store: S,
    gateway: G,
    directory: EmployeeDirectory,
}

impl<S: EvaluationStore, G: RecordGateway> WorkflowController<S, G> {
    pub fn new(store: S, gateway: G, directory: EmployeeDirectory) -> Self {
        Self {
            store,
            gateway,
            directory,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }

    /// Explicitly create an evaluation in the Created stage
    pub fn create_evaluation(
        &mut self,
        employee_number: &str,
        quarter: u8,
        year: i32,
    ) -> EvalResult<Evaluation> {
        let employee = lookup_employee(&self.directory, employee_number)?;
        let key = EvaluationKey::new(&employee.number, quarter, year)?;

        let evaluation = self.store.create(key)?;
        tracing::info!(evaluation = %evaluation.key(), "created evaluation");

        self.gateway.save(evaluation, employee)?;
        Ok(evaluation.clone())
    }

    /// Record the employee's own scores, creating the evaluation if needed.
    ///
    /// Resubmission overwrites earlier self scores in any stage and leaves
    /// manager scores and completion untouched.
    pub fn submit_self_evaluation(
        &mut self,
        employee_number: &str,
        quarter: u8,
        year: i32,
        scores: ScoreMap,
    ) -> EvalResult<Evaluation> {
        let employee = lookup_employee(&self.directory, employee_number)?;
        let key = EvaluationKey::new(&employee.number, quarter, year)?;

        if self.store.get(&key).is_none() {
            self.store.create(key.clone())?;
            tracing::info!(evaluation = %key, "created evaluation for self-evaluation");
        }

        validator::validate(&scores)?;

        let evaluation = self
            .store
            .get_mut(&key)
            .ok_or_else(|| EvalError::EvaluationNotFound(key.clone()))?;
        evaluation.self_scores = scores;
        tracing::info!(evaluation = %key, stage = evaluation.stage().name(), "self-evaluation submitted");

        self.gateway.save(evaluation, employee)?;
        Ok(evaluation.clone())
    }

    /// Record the manager's review and complete the evaluation.
    ///
    /// Requires an existing evaluation with complete self scores that is
    /// not completed yet.
    pub fn submit_manager_evaluation(
        &mut self,
        employee_number: &str,
        quarter: u8,
        year: i32,
        scores: ScoreMap,
        remarks: Option<String>,
    ) -> EvalResult<Evaluation> {
        let employee = lookup_employee(&self.directory, employee_number)?;
        let key = EvaluationKey::new(&employee.number, quarter, year)?;

        let evaluation = self
            .store
            .get_mut(&key)
            .ok_or_else(|| EvalError::EvaluationNotFound(key.clone()))?;

        if evaluation.is_completed {
            return Err(EvalError::AlreadyCompleted(key));
        }

        if !evaluation.has_self_evaluation_completed() {
            return Err(EvalError::MissingSelfEvaluation(key));
        }

        validator::validate(&scores)?;

        evaluation.manager_scores = scores;
        evaluation.manager_remarks = remarks.unwrap_or_default();
        evaluation.is_completed = true;
        evaluation.completed_date = Some(Utc::now());
        tracing::info!(evaluation = %key, "manager evaluation completed");

        self.gateway.save(evaluation, employee)?;
        Ok(evaluation.clone())
    }

    pub fn get(&self, employee_number: &str, quarter: u8, year: i32) -> EvalResult<Option<&Evaluation>> {
        let key = EvaluationKey::new(employee_number, quarter, year)?;
        Ok(self.store.get(&key))
    }

    pub fn list_by_employee(&self, employee_number: &str) -> Vec<&Evaluation> {
        self.store.list_by_employee(employee_number)
    }

    pub fn list_pending(&self) -> Vec<&Evaluation> {
        self.store.list_pending()
    }

    /// Pending evaluations whose self-evaluation is done
    pub fn awaiting_manager(&self) -> Vec<&Evaluation> {
        self.store
            .list_pending()
            .into_iter()
            .filter(|e| e.has_self_evaluation_completed())
            .collect()
    }
}

fn lookup_employee<'a>(
    directory: &'a EmployeeDirectory,
    employee_number: &str,
) -> EvalResult<&'a Employee> {
    directory
        .get(employee_number)
        .ok_or_else(|| EvalError::UnknownEmployee(employee_number.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PersistError, ScoreError};
    use crate::models::{Category, EvaluationStage};
    use crate::store::InMemoryStore;
    use std::cell::RefCell;

    /// Gateway that records what it was asked to save
    #[derive(Default)]
    struct RecordingGateway {
        saved: RefCell<Vec<(Evaluation, String)>>,
        fail: bool,
    }

    impl RecordGateway for RecordingGateway {
        fn save(&self, evaluation: &Evaluation, employee: &Employee) -> Result<(), PersistError> {
            if self.fail {
                return Err(PersistError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only",
                )));
            }
            self.saved
                .borrow_mut()
                .push((evaluation.clone(), employee.name.clone()));
            Ok(())
        }
    }

    fn controller() -> WorkflowController<InMemoryStore, RecordingGateway> {
        WorkflowController::new(
            InMemoryStore::new(),
            RecordingGateway::default(),
            EmployeeDirectory::default(),
        )
    }

    fn scores(values: [i32; 5]) -> ScoreMap {
        Category::ALL.into_iter().zip(values).collect()
    }

    #[test]
    fn test_self_evaluation_creates_record() {
        let mut workflow = controller();

        let evaluation = workflow
            .submit_self_evaluation("EMP001", 1, 2024, scores([4, 5, 3, 4, 5]))
            .unwrap();

        assert_eq!(evaluation.stage(), EvaluationStage::SelfSubmitted);
        assert!(!evaluation.is_completed);
        assert_eq!(workflow.store().len(), 1);

        let saved = workflow.gateway.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].1, "John Doe");
    }

    #[test]
    fn test_self_evaluation_uses_directory_number() {
        let mut workflow = controller();

        let evaluation = workflow
            .submit_self_evaluation("emp001", 1, 2024, scores([3; 5]))
            .unwrap();

        assert_eq!(evaluation.employee_number, "EMP001");
    }

    #[test]
    fn test_self_resubmission_overwrites_only_self_scores() {
        let mut workflow = controller();
        workflow
            .submit_self_evaluation("EMP001", 1, 2024, scores([3; 5]))
            .unwrap();
        workflow
            .submit_manager_evaluation("EMP001", 1, 2024, scores([4; 5]), None)
            .unwrap();

        let evaluation = workflow
            .submit_self_evaluation("EMP001", 1, 2024, scores([5; 5]))
            .unwrap();

        assert_eq!(evaluation.self_scores, scores([5; 5]));
        assert_eq!(evaluation.manager_scores, scores([4; 5]));
        assert!(evaluation.is_completed);
        assert_eq!(workflow.store().len(), 1);
    }

    #[test]
    fn test_invalid_self_scores_still_create_record() {
        let mut workflow = controller();

        let result = workflow.submit_self_evaluation("EMP002", 2, 2024, scores([3, 3, 9, 3, 3]));

        assert!(matches!(
            result,
            Err(EvalError::Validation(ScoreError::OutOfRange {
                category: Category::Innovation,
                score: 9
            }))
        ));
        let evaluation = workflow.get("EMP002", 2, 2024).unwrap().unwrap();
        assert_eq!(evaluation.stage(), EvaluationStage::Created);
        assert!(workflow.gateway.saved.borrow().is_empty());
    }

    #[test]
    fn test_manager_evaluation_requires_record() {
        let mut workflow = controller();

        let result = workflow.submit_manager_evaluation("EMP001", 1, 2024, scores([4; 5]), None);

        assert!(matches!(result, Err(EvalError::EvaluationNotFound(_))));
        assert!(workflow.store().is_empty());
    }

    #[test]
    fn test_manager_evaluation_requires_self_scores() {
        let mut workflow = controller();
        workflow.create_evaluation("EMP003", 3, 2024).unwrap();

        let result = workflow.submit_manager_evaluation("EMP003", 3, 2024, scores([4; 5]), None);

        assert!(matches!(result, Err(EvalError::MissingSelfEvaluation(_))));
        let evaluation = workflow.get("EMP003", 3, 2024).unwrap().unwrap();
        assert!(evaluation.manager_scores.is_empty());
        assert!(!evaluation.is_completed);
    }

    #[test]
    fn test_manager_evaluation_validates_scores() {
        let mut workflow = controller();
        workflow
            .submit_self_evaluation("EMP001", 1, 2024, scores([3; 5]))
            .unwrap();

        let mut partial = scores([4; 5]);
        partial.remove(&Category::Communication);
        let result = workflow.submit_manager_evaluation("EMP001", 1, 2024, partial, None);

        assert!(matches!(
            result,
            Err(EvalError::Validation(ScoreError::MissingCategory(
                Category::Communication
            )))
        ));
        assert!(!workflow.get("EMP001", 1, 2024).unwrap().unwrap().is_completed);
    }

    #[test]
    fn test_manager_evaluation_completes() {
        let mut workflow = controller();
        workflow
            .submit_self_evaluation("EMP001", 1, 2024, scores([4, 5, 3, 4, 5]))
            .unwrap();

        let evaluation = workflow
            .submit_manager_evaluation(
                "EMP001",
                1,
                2024,
                scores([3, 4, 3, 3, 4]),
                Some("Solid quarter".to_string()),
            )
            .unwrap();

        assert!(evaluation.is_completed);
        assert!(evaluation.completed_date.is_some());
        assert_eq!(evaluation.manager_remarks, "Solid quarter");
        assert_eq!(evaluation.stage(), EvaluationStage::ManagerCompleted);
        assert_eq!(workflow.gateway.saved.borrow().len(), 2);
    }

    #[test]
    fn test_completed_evaluation_rejects_second_manager_review() {
        let mut workflow = controller();
        workflow
            .submit_self_evaluation("EMP001", 1, 2024, scores([3; 5]))
            .unwrap();
        let first = workflow
            .submit_manager_evaluation("EMP001", 1, 2024, scores([4; 5]), Some("a".to_string()))
            .unwrap();

        let result =
            workflow.submit_manager_evaluation("EMP001", 1, 2024, scores([1; 5]), Some("b".to_string()));

        assert!(matches!(result, Err(EvalError::AlreadyCompleted(_))));
        let evaluation = workflow.get("EMP001", 1, 2024).unwrap().unwrap();
        assert_eq!(evaluation.completed_date, first.completed_date);
        assert_eq!(evaluation.manager_scores, scores([4; 5]));
        assert_eq!(evaluation.manager_remarks, "a");
        assert_eq!(evaluation.stage(), EvaluationStage::ManagerCompleted);
        assert_eq!(workflow.gateway.saved.borrow().len(), 2);
    }

    #[test]
    fn test_manager_remarks_default_to_empty() {
        let mut workflow = controller();
        workflow
            .submit_self_evaluation("EMP001", 1, 2024, scores([3; 5]))
            .unwrap();

        let evaluation = workflow
            .submit_manager_evaluation("EMP001", 1, 2024, scores([3; 5]), None)
            .unwrap();

        assert_eq!(evaluation.manager_remarks, "");
    }

    #[test]
    fn test_create_duplicate_fails() {
        let mut workflow = controller();
        workflow.create_evaluation("EMP001", 1, 2024).unwrap();

        let result = workflow.create_evaluation("emp001", 1, 2024);
        assert!(matches!(result, Err(EvalError::DuplicateEvaluation(_))));
    }

    #[test]
    fn test_unknown_employee_rejected() {
        let mut workflow = controller();

        let result = workflow.submit_self_evaluation("EMP999", 1, 2024, scores([3; 5]));

        assert!(matches!(result, Err(EvalError::UnknownEmployee(_))));
        assert!(workflow.store().is_empty());
    }

    #[test]
    fn test_invalid_quarter_rejected() {
        let mut workflow = controller();

        let result = workflow.create_evaluation("EMP001", 5, 2024);
        assert!(matches!(result, Err(EvalError::InvalidQuarter(5))));
    }

    #[test]
    fn test_persistence_failure_propagates_after_mutation() {
        let mut workflow = WorkflowController::new(
            InMemoryStore::new(),
            RecordingGateway {
                fail: true,
                ..Default::default()
            },
            EmployeeDirectory::default(),
        );

        let result = workflow.submit_self_evaluation("EMP001", 1, 2024, scores([3; 5]));

        let err = result.unwrap_err();
        assert!(matches!(err, EvalError::Persistence(_)));
        assert_eq!(err.to_string(), "Failed to write evaluation records: read-only");
        // memory is ahead of disk
        let evaluation = workflow.get("EMP001", 1, 2024).unwrap().unwrap();
        assert_eq!(evaluation.stage(), EvaluationStage::SelfSubmitted);
    }

    #[test]
    fn test_pending_and_awaiting_manager() {
        let mut workflow = controller();
        workflow.create_evaluation("EMP004", 1, 2024).unwrap();
        workflow
            .submit_self_evaluation("EMP002", 1, 2024, scores([3; 5]))
            .unwrap();
        workflow
            .submit_self_evaluation("EMP001", 1, 2024, scores([3; 5]))
            .unwrap();
        workflow
            .submit_manager_evaluation("EMP001", 1, 2024, scores([3; 5]), None)
            .unwrap();

        let pending: Vec<&str> = workflow
            .list_pending()
            .iter()
            .map(|e| e.employee_number.as_str())
            .collect();
        assert_eq!(pending, vec!["EMP004", "EMP002"]);

        let awaiting = workflow.awaiting_manager();
        assert_eq!(awaiting.len(), 1);
        assert_eq!(awaiting[0].employee_number, "EMP002");
    }
}
