//! Command-line surface
//!
//! Each subcommand opens a [`Workflow`] rebuilt from the record file,
//! collects plain values from its arguments and renders the result.

pub mod menu;
pub mod submit;
pub mod view;

use crate::config::EvalConfig;
use crate::models::{score_label, Category, Evaluation, ScoreMap};
use crate::persistence::JsonRecordFile;
use crate::services::WorkflowController;
use crate::store::{EvaluationStore, InMemoryStore};
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Workflow backed by the in-memory store and the JSON record file
pub type Workflow = WorkflowController<InMemoryStore, JsonRecordFile>;

/// Options shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Explicit config path (defaults to ./perfeval.toml)
    pub config: Option<PathBuf>,
    /// Record file override
    pub records_file: Option<PathBuf>,
}

/// Load config, hydrate the store from the record file and build the workflow
pub fn open_workflow(options: &SessionOptions) -> Result<Workflow> {
    let config = match &options.config {
        Some(path) => EvalConfig::load_from(path)?,
        None => EvalConfig::load(&std::env::current_dir()?)?,
    };
    let records_path = options
        .records_file
        .clone()
        .unwrap_or_else(|| config.records_file.clone());

    open_workflow_at(&config, &records_path)
}

/// Build a workflow for an already-loaded config and record path
pub fn open_workflow_at(config: &EvalConfig, records_path: &Path) -> Result<Workflow> {
    let gateway = JsonRecordFile::new(records_path);
    let store = InMemoryStore::from_evaluations(gateway.load_evaluations());
    tracing::debug!(
        path = %records_path.display(),
        evaluations = store.len(),
        "loaded evaluation records"
    );

    Ok(WorkflowController::new(store, gateway, config.directory()?))
}

/// Composite key arguments
#[derive(Debug, Clone, Args)]
pub struct EvaluationArgs {
    /// Employee number (e.g., EMP001)
    pub employee: String,

    /// Quarter (1-4)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub quarter: u8,

    /// Year (2020-2030)
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(2020..=2030))]
    pub year: i32,
}

/// Per-category scores (1 = Poor ... 5 = Excellent)
#[derive(Debug, Clone, Default, Args)]
pub struct ScoreArgs {
    /// Attendance score
    #[arg(long)]
    pub attendance: Option<i32>,

    /// Work Quality score
    #[arg(long)]
    pub work_quality: Option<i32>,

    /// Innovation score
    #[arg(long)]
    pub innovation: Option<i32>,

    /// Communication score
    #[arg(long)]
    pub communication: Option<i32>,

    /// Skill Development score
    #[arg(long)]
    pub skill_development: Option<i32>,

    /// Score as CATEGORY=N, repeatable (e.g., -s "Work Quality=4")
    #[arg(short = 's', long = "score", value_name = "CATEGORY=N", value_parser = parse_score_pair)]
    pub scores: Vec<(Category, i32)>,
}

impl ScoreArgs {
    /// Collect the provided scores; `--score` entries win over the flags
    pub fn into_scores(self) -> ScoreMap {
        let flags = [
            (Category::Attendance, self.attendance),
            (Category::WorkQuality, self.work_quality),
            (Category::Innovation, self.innovation),
            (Category::Communication, self.communication),
            (Category::SkillDevelopment, self.skill_development),
        ];

        let mut scores: ScoreMap = flags
            .into_iter()
            .filter_map(|(category, score)| score.map(|s| (category, s)))
            .collect();
        scores.extend(self.scores);
        scores
    }
}

/// Parse `CATEGORY=N`
pub fn parse_score_pair(s: &str) -> std::result::Result<(Category, i32), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=N, got '{}'", s))?;
    let category: Category = name.trim().parse()?;
    let score = value
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid score '{}': {}", value.trim(), e))?;
    Ok((category, score))
}

// =============================================================================
// Rendering
// =============================================================================

pub(crate) fn print_scores(title: &str, scores: &ScoreMap) {
    println!("\n{}", title.bold());
    for (category, score) in scores {
        println!("  {}: {} ({})", category.label(), score, score_label(*score).dimmed());
    }
}

pub(crate) fn print_evaluation(evaluation: &Evaluation) {
    let stage = evaluation.stage();
    println!(
        "{}",
        format!("=== {} ===", evaluation.quarter_display()).cyan().bold()
    );
    println!("Status: {} {}", stage.emoji(), stage.name());
    println!("Created: {}", evaluation.created_date.format("%Y-%m-%d"));
    if let Some(completed) = evaluation.completed_date {
        println!("Completed: {}", completed.format("%Y-%m-%d"));
    }

    if evaluation.has_self_evaluation_completed() {
        print_scores("Self-Evaluation:", &evaluation.self_scores);
    }

    if evaluation.has_manager_evaluation_completed() {
        print_scores("Manager Evaluation:", &evaluation.manager_scores);
        if !evaluation.manager_remarks.trim().is_empty() {
            println!("\n{} {}", "Manager Remarks:".bold(), evaluation.manager_remarks);
        }
    }
    println!();
}
