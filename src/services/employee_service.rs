//! Employee directory - static lookup of known employees

use crate::models::Employee;

/// Employees loaded at startup, looked up by number (case-insensitive)
#[derive(Debug, Clone)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
}

impl EmployeeDirectory {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn get(&self, employee_number: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.has_number(employee_number))
    }

    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// Add an employee. Fails if the number is already taken.
    pub fn add(&mut self, employee: Employee) -> crate::Result<()> {
        if self.get(&employee.number).is_some() {
            anyhow::bail!("Employee with number {} already exists.", employee.number);
        }
        self.employees.push(employee);
        Ok(())
    }
}

impl Default for EmployeeDirectory {
    fn default() -> Self {
        Self::new(default_employees())
    }
}

/// Built-in sample roster used when the config lists no employees
pub fn default_employees() -> Vec<Employee> {
    vec![
        Employee::new("EMP001", "John Doe", "Engineering"),
        Employee::new("EMP002", "Jane Smith", "Marketing"),
        Employee::new("EMP003", "Bob Johnson", "Engineering"),
        Employee::new("EMP004", "Alice Brown", "HR"),
    ]
}
