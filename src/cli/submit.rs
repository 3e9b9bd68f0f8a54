use super::{open_workflow, print_evaluation, EvaluationArgs, ScoreArgs, SessionOptions};
use crate::Result;
use colored::Colorize;

pub fn run_self(options: &SessionOptions, key: EvaluationArgs, scores: ScoreArgs) -> Result<()> {
    let mut workflow = open_workflow(options)?;
    let evaluation =
        workflow.submit_self_evaluation(&key.employee, key.quarter, key.year, scores.into_scores())?;

    println!("{}", "✅ Self-evaluation submitted successfully!".green());
    print_evaluation(&evaluation);
    Ok(())
}

pub fn run_manager(
    options: &SessionOptions,
    key: EvaluationArgs,
    scores: ScoreArgs,
    remarks: Option<String>,
) -> Result<()> {
    let mut workflow = open_workflow(options)?;
    let evaluation = workflow.submit_manager_evaluation(
        &key.employee,
        key.quarter,
        key.year,
        scores.into_scores(),
        remarks,
    )?;

    println!("{}", "✅ Manager evaluation completed successfully!".green());
    print_evaluation(&evaluation);
    Ok(())
}

pub fn run_create(options: &SessionOptions, key: EvaluationArgs) -> Result<()> {
    let mut workflow = open_workflow(options)?;
    let evaluation = workflow.create_evaluation(&key.employee, key.quarter, key.year)?;

    println!(
        "{}",
        format!(
            "📝 Created evaluation for {} - {}",
            evaluation.employee_number,
            evaluation.quarter_display()
        )
        .green()
    );
    Ok(())
}
