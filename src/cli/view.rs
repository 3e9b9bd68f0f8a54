use super::{open_workflow, print_evaluation, EvaluationArgs, SessionOptions, Workflow};
use crate::models::Evaluation;
use crate::Result;
use colored::Colorize;

pub fn run_show(options: &SessionOptions, key: EvaluationArgs) -> Result<()> {
    let workflow = open_workflow(options)?;

    match workflow.get(&key.employee, key.quarter, key.year)? {
        Some(evaluation) => print_evaluation(evaluation),
        None => println!(
            "{}",
            format!(
                "No evaluation found for {} in Q{} {}.",
                key.employee, key.quarter, key.year
            )
            .yellow()
        ),
    }
    Ok(())
}

pub fn run_list(options: &SessionOptions, employee_number: &str) -> Result<()> {
    let workflow = open_workflow(options)?;
    let name = employee_name(&workflow, employee_number);

    let evaluations = workflow.list_by_employee(employee_number);
    if evaluations.is_empty() {
        println!("{}", format!("No evaluations found for {}.", name).yellow());
        return Ok(());
    }

    println!("{}\n", format!("Evaluations for {}:", name).green().bold());
    for evaluation in evaluations {
        print_evaluation(evaluation);
    }
    Ok(())
}

pub fn run_pending(options: &SessionOptions, awaiting_manager: bool) -> Result<()> {
    let workflow = open_workflow(options)?;

    let pending = if awaiting_manager {
        workflow.awaiting_manager()
    } else {
        workflow.list_pending()
    };

    if pending.is_empty() {
        println!("{}", "No pending evaluations.".yellow());
        return Ok(());
    }

    println!("{}", "Pending evaluations:".green().bold());
    for (i, evaluation) in pending.iter().enumerate() {
        println!("{}. {}", i + 1, pending_line(&workflow, evaluation));
    }
    Ok(())
}

pub fn run_employees(options: &SessionOptions) -> Result<()> {
    let workflow = open_workflow(options)?;

    println!("{}", "All employees:".green().bold());
    for employee in workflow.directory().all() {
        println!("   • {}", employee);
    }
    Ok(())
}

pub(crate) fn employee_name(workflow: &Workflow, employee_number: &str) -> String {
    workflow
        .directory()
        .get(employee_number)
        .map(|e| e.name.clone())
        .unwrap_or_else(|| employee_number.to_string())
}

/// "Jane Smith (EMP002) - Q1 2024 ⏳ Self-evaluation submitted"
pub(crate) fn pending_line(workflow: &Workflow, evaluation: &Evaluation) -> String {
    let stage = evaluation.stage();
    format!(
        "{} ({}) - {} {} {}",
        employee_name(workflow, &evaluation.employee_number),
        evaluation.employee_number,
        evaluation.quarter_display(),
        stage.emoji(),
        stage.name()
    )
}
