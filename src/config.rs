//! perfeval configuration (perfeval.toml)

use crate::models::Employee;
use crate::persistence::DEFAULT_RECORDS_FILE;
use crate::services::{default_employees, EmployeeDirectory};
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "perfeval.toml";

/// perfeval configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EvalConfig {
    /// Where evaluation records are written
    #[serde(default = "default_records_file")]
    pub records_file: PathBuf,

    /// Employee roster; the built-in sample roster when empty
    #[serde(default)]
    pub employees: Vec<Employee>,
}

fn default_records_file() -> PathBuf {
    PathBuf::from(DEFAULT_RECORDS_FILE)
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            records_file: default_records_file(),
            employees: Vec::new(),
        }
    }
}

impl EvalConfig {
    /// Load config from `perfeval.toml` under `project_root`
    pub fn load(project_root: &Path) -> crate::Result<Self> {
        Self::load_from(&project_root.join(CONFIG_FILE))
    }

    /// Load config from an explicit path. A missing file yields defaults.
    pub fn load_from(config_path: &Path) -> crate::Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: EvalConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        Ok(config)
    }

    /// Build the employee directory from the configured roster
    pub fn directory(&self) -> crate::Result<EmployeeDirectory> {
        if self.employees.is_empty() {
            return Ok(EmployeeDirectory::new(default_employees()));
        }

        let mut directory = EmployeeDirectory::new(Vec::new());
        for employee in &self.employees {
            directory
                .add(employee.clone())
                .context("Invalid employee roster in config")?;
        }
        Ok(directory)
    }
}
