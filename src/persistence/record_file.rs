//! JsonRecordFile - whole-file JSON record collection

use super::RecordGateway;
use crate::error::PersistError;
use crate::models::{Category, Employee, Evaluation, ScoreMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Record file used when nothing else is configured
pub const DEFAULT_RECORDS_FILE: &str = "evaluations.json";

/// Persisted form of an evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRecord {
    pub employee_number: String,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub employee_department: String,
    pub quarter: u8,
    pub year: i32,
    #[serde(default)]
    pub self_scores: BTreeMap<String, i32>,
    #[serde(default)]
    pub manager_scores: BTreeMap<String, i32>,
    #[serde(default)]
    pub manager_remarks: String,
    #[serde(default)]
    pub is_completed: bool,
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
}

impl EvaluationRecord {
    pub fn new(evaluation: &Evaluation, employee: &Employee) -> Self {
        Self {
            employee_number: evaluation.employee_number.clone(),
            employee_name: employee.name.clone(),
            employee_department: employee.department.clone(),
            quarter: evaluation.quarter,
            year: evaluation.year,
            self_scores: to_record_scores(&evaluation.self_scores),
            manager_scores: to_record_scores(&evaluation.manager_scores),
            manager_remarks: evaluation.manager_remarks.clone(),
            is_completed: evaluation.is_completed,
            created_date: evaluation.created_date,
            completed_date: evaluation.completed_date,
        }
    }

    pub fn has_key(&self, evaluation: &Evaluation) -> bool {
        self.quarter == evaluation.quarter
            && self.year == evaluation.year
            && self
                .employee_number
                .eq_ignore_ascii_case(&evaluation.employee_number)
    }

    /// Convert back to an in-memory evaluation, dropping unknown categories
    pub fn to_evaluation(&self) -> Evaluation {
        Evaluation {
            employee_number: self.employee_number.clone(),
            quarter: self.quarter,
            year: self.year,
            self_scores: from_record_scores(&self.self_scores),
            manager_scores: from_record_scores(&self.manager_scores),
            manager_remarks: self.manager_remarks.clone(),
            is_completed: self.is_completed,
            created_date: self.created_date,
            completed_date: self.completed_date,
        }
    }
}

fn to_record_scores(scores: &ScoreMap) -> BTreeMap<String, i32> {
    scores
        .iter()
        .map(|(category, score)| (category.id().to_string(), *score))
        .collect()
}

fn from_record_scores(scores: &BTreeMap<String, i32>) -> ScoreMap {
    scores
        .iter()
        .filter_map(|(name, score)| match Category::from_name(name) {
            Some(category) => Some((category, *score)),
            None => {
                tracing::warn!(category = %name, "ignoring unknown category in record file");
                None
            }
        })
        .collect()
}

/// Record collection stored as one pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonRecordFile {
    path: PathBuf,
}

impl JsonRecordFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record. Missing, unreadable or corrupt files read as empty.
    pub fn load_records(&self) -> Vec<EvaluationRecord> {
        if !self.path.exists() {
            return Vec::new();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read record file, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Option<Vec<EvaluationRecord>>>(&content) {
            Ok(records) => records.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "record file is corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Load records as evaluations, for rebuilding the in-memory store
    pub fn load_evaluations(&self) -> Vec<Evaluation> {
        self.load_records()
            .iter()
            .map(EvaluationRecord::to_evaluation)
            .collect()
    }
}

impl RecordGateway for JsonRecordFile {
    /// Merge one evaluation into the file.
    ///
    /// Overwrites the whole file in place; an interrupted write can leave
    /// it truncated.
    fn save(&self, evaluation: &Evaluation, employee: &Employee) -> Result<(), PersistError> {
        let mut records = self.load_records();
        records.retain(|r| !r.has_key(evaluation));
        records.push(EvaluationRecord::new(evaluation, employee));

        let content = serde_json::to_string_pretty(&records)?;
        std::fs::write(&self.path, content)?;

        tracing::debug!(
            path = %self.path.display(),
            employee = %evaluation.employee_number,
            quarter = evaluation.quarter,
            year = evaluation.year,
            total = records.len(),
            "saved evaluation record"
        );
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EvaluationKey;
    use tempfile::TempDir;

    fn employee() -> Employee {
        Employee::new("EMP001", "John Doe", "Engineering")
    }

    fn evaluation(quarter: u8, year: i32) -> Evaluation {
        let mut evaluation = Evaluation::new(EvaluationKey::new("EMP001", quarter, year).unwrap());
        evaluation.self_scores = Category::ALL.iter().map(|c| (*c, 4)).collect();
        evaluation
    }

    fn setup() -> (TempDir, JsonRecordFile) {
        let temp_dir = TempDir::new().unwrap();
        let file = JsonRecordFile::new(temp_dir.path().join("evaluations.json"));
        (temp_dir, file)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_temp, file) = setup();
        assert!(file.load_records().is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let (_temp, file) = setup();
        std::fs::write(file.path(), "{ not json").unwrap();
        assert!(file.load_records().is_empty());

        std::fs::write(file.path(), "").unwrap();
        assert!(file.load_records().is_empty());

        std::fs::write(file.path(), "null").unwrap();
        assert!(file.load_records().is_empty());
    }

    #[test]
    fn test_save_creates_denormalized_record() {
        let (_temp, file) = setup();
        let evaluation = evaluation(1, 2024);

        file.save(&evaluation, &employee()).unwrap();

        let records = file.load_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].employee_name, "John Doe");
        assert_eq!(records[0].employee_department, "Engineering");
        assert_eq!(records[0].self_scores.get("WorkQuality"), Some(&4));
        assert!(records[0].manager_scores.is_empty());
        assert_eq!(records[0].to_evaluation(), evaluation);
    }

    #[test]
    fn test_save_replaces_existing_record_for_key() {
        let (_temp, file) = setup();
        let mut first = evaluation(1, 2024);
        file.save(&first, &employee()).unwrap();
        file.save(&evaluation(2, 2024), &employee()).unwrap();

        first.manager_remarks = "Solid quarter".to_string();
        file.save(&first, &employee()).unwrap();

        let records = file.load_records();
        assert_eq!(records.len(), 2);
        let matching: Vec<_> = records.iter().filter(|r| r.has_key(&first)).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].manager_remarks, "Solid quarter");
    }

    #[test]
    fn test_save_over_corrupt_file_starts_fresh() {
        let (_temp, file) = setup();
        std::fs::write(file.path(), "garbage").unwrap();

        file.save(&evaluation(3, 2024), &employee()).unwrap();

        assert_eq!(file.load_records().len(), 1);
    }

    #[test]
    fn test_written_json_uses_camel_case() {
        let (_temp, file) = setup();
        file.save(&evaluation(1, 2024), &employee()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        for field in [
            "\"employeeNumber\"",
            "\"employeeName\"",
            "\"employeeDepartment\"",
            "\"selfScores\"",
            "\"managerScores\"",
            "\"managerRemarks\"",
            "\"isCompleted\"",
            "\"createdDate\"",
            "\"completedDate\"",
        ] {
            assert!(content.contains(field), "missing {}", field);
        }
        assert!(content.starts_with('['));
        assert!(content.contains('\n'));
    }

    #[test]
    fn test_unknown_categories_dropped_on_load() {
        let (_temp, file) = setup();
        let json = r#"[{
            "employeeNumber": "EMP002",
            "quarter": 2,
            "year": 2024,
            "selfScores": {"Attendance": 3, "Leadership": 5},
            "createdDate": "2024-04-01T09:00:00Z"
        }]"#;
        std::fs::write(file.path(), json).unwrap();

        let evaluations = file.load_evaluations();
        assert_eq!(evaluations.len(), 1);
        assert_eq!(evaluations[0].self_scores.len(), 1);
        assert_eq!(evaluations[0].self_scores.get(&Category::Attendance), Some(&3));
        assert!(evaluations[0].completed_date.is_none());
    }

    #[test]
    fn test_write_failure_propagates() {
        let temp_dir = TempDir::new().unwrap();
        let file = JsonRecordFile::new(temp_dir.path().join("missing-dir").join("evaluations.json"));

        let result = file.save(&evaluation(1, 2024), &employee());
        assert!(matches!(result, Err(PersistError::Io(_))));
    }
}
