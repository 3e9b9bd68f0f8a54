use serde::{Deserialize, Serialize};
use std::fmt;

/// An employee as known to the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee number (e.g., "EMP001"), compared case-insensitively
    pub number: String,

    /// Display name
    pub name: String,

    /// Department
    pub department: String,
}

impl Employee {
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            department: department.into(),
        }
    }

    /// Check whether this employee has the given number
    pub fn has_number(&self, number: &str) -> bool {
        self.number.eq_ignore_ascii_case(number)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.number, self.name, self.department)
    }
}
