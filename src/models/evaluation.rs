use super::category::{is_complete, ScoreMap};
use crate::error::{EvalError, EvalResult};
use chrono::{DateTime, Utc};
use std::fmt;

/// Composite identity of an evaluation: (employee number, quarter, year).
///
/// Compare keys with [`EvaluationKey::matches`]; employee numbers are
/// case-insensitive.
#[derive(Debug, Clone)]
pub struct EvaluationKey {
    pub employee_number: String,
    pub quarter: u8,
    pub year: i32,
}

impl EvaluationKey {
    /// Build a key, rejecting quarters outside 1..=4
    pub fn new(employee_number: impl Into<String>, quarter: u8, year: i32) -> EvalResult<Self> {
        if !(1..=4).contains(&quarter) {
            return Err(EvalError::InvalidQuarter(quarter));
        }
        Ok(Self {
            employee_number: employee_number.into(),
            quarter,
            year,
        })
    }

    /// Key equality with the employee number compared case-insensitively
    pub fn matches(&self, employee_number: &str, quarter: u8, year: i32) -> bool {
        self.quarter == quarter
            && self.year == year
            && self.employee_number.eq_ignore_ascii_case(employee_number)
    }
}

impl fmt::Display for EvaluationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Q{} {}", self.employee_number, self.quarter, self.year)
    }
}

/// Workflow stage of an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationStage {
    /// Record exists, no self scores yet
    Created,
    /// Self scores complete, waiting on the manager
    SelfSubmitted,
    /// Manager scores recorded (terminal)
    ManagerCompleted,
}

impl EvaluationStage {
    pub fn name(&self) -> &'static str {
        match self {
            EvaluationStage::Created => "Created",
            EvaluationStage::SelfSubmitted => "Self-evaluation submitted",
            EvaluationStage::ManagerCompleted => "Completed",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            EvaluationStage::Created => "📝",
            EvaluationStage::SelfSubmitted => "⏳",
            EvaluationStage::ManagerCompleted => "✅",
        }
    }
}

/// A quarterly evaluation for one employee
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub employee_number: String,
    pub quarter: u8,
    pub year: i32,

    /// Filled only by self-submission
    pub self_scores: ScoreMap,

    /// Filled only by manager-submission
    pub manager_scores: ScoreMap,

    pub manager_remarks: String,
    pub is_completed: bool,
    pub created_date: DateTime<Utc>,
    pub completed_date: Option<DateTime<Utc>>,
}

impl Evaluation {
    /// Fresh evaluation in the Created stage
    pub fn new(key: EvaluationKey) -> Self {
        Self {
            employee_number: key.employee_number,
            quarter: key.quarter,
            year: key.year,
            self_scores: ScoreMap::new(),
            manager_scores: ScoreMap::new(),
            manager_remarks: String::new(),
            is_completed: false,
            created_date: Utc::now(),
            completed_date: None,
        }
    }

    pub fn key(&self) -> EvaluationKey {
        EvaluationKey {
            employee_number: self.employee_number.clone(),
            quarter: self.quarter,
            year: self.year,
        }
    }

    /// Whether this evaluation has the given composite key
    pub fn matches(&self, key: &EvaluationKey) -> bool {
        key.matches(&self.employee_number, self.quarter, self.year)
    }

    /// e.g. "Q1 2024"
    pub fn quarter_display(&self) -> String {
        format!("Q{} {}", self.quarter, self.year)
    }

    pub fn has_self_evaluation_completed(&self) -> bool {
        is_complete(&self.self_scores)
    }

    pub fn has_manager_evaluation_completed(&self) -> bool {
        is_complete(&self.manager_scores)
    }

    pub fn stage(&self) -> EvaluationStage {
        if self.is_completed {
            EvaluationStage::ManagerCompleted
        } else if self.has_self_evaluation_completed() {
            EvaluationStage::SelfSubmitted
        } else {
            EvaluationStage::Created
        }
    }
}
