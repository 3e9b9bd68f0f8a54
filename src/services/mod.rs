//! Service layer for perfeval
//!
//! Business logic shared by the CLI subcommands and the interactive menu.

pub mod employee_service;
pub mod workflow;

// Re-export commonly used types
pub use employee_service::{default_employees, EmployeeDirectory};
pub use workflow::WorkflowController;
