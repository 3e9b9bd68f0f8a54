//! Interactive menu

use super::view::{employee_name, pending_line};
use super::{open_workflow, print_evaluation, print_scores, SessionOptions, Workflow};
use crate::models::{Category, Employee, ScoreMap, MAX_SCORE, MIN_SCORE};
use crate::Result;
use colored::Colorize;
use dialoguer::{Input, Select};

const MENU_ITEMS: &[&str] = &[
    "Employee Self-Evaluation",
    "Manager Evaluation",
    "View Evaluations",
    "View Employees",
    "Exit",
];

pub fn run(options: &SessionOptions) -> Result<()> {
    let mut workflow = open_workflow(options)?;

    println!("{}\n", "=== Employee Evaluation System ===".cyan().bold());

    loop {
        let choice = Select::new()
            .with_prompt("Main Menu")
            .items(MENU_ITEMS)
            .default(0)
            .interact_opt()?;

        let result = match choice {
            Some(0) => self_evaluation(&mut workflow),
            Some(1) => manager_evaluation(&mut workflow),
            Some(2) => view_evaluations(&workflow),
            Some(3) => {
                for employee in workflow.directory().all() {
                    println!("   • {}", employee);
                }
                Ok(())
            }
            _ => {
                println!("Thank you for using the Employee Evaluation System!");
                return Ok(());
            }
        };

        // Errors end the current action, not the session
        if let Err(e) = result {
            eprintln!("{}", format!("Error: {}", e).red());
        }
        println!();
    }
}

fn self_evaluation(workflow: &mut Workflow) -> Result<()> {
    let Some(employee) = select_employee(workflow)? else {
        return Ok(());
    };
    let (quarter, year) = prompt_quarter_and_year()?;

    println!(
        "\nSelf-evaluation for {} - Q{} {}",
        employee.name.bold(),
        quarter,
        year
    );
    println!("(1 = Poor, 2 = Below Average, 3 = Average, 4 = Good, 5 = Excellent)");

    let scores = prompt_scores(None)?;
    workflow.submit_self_evaluation(&employee.number, quarter, year, scores)?;

    println!("{}", "✅ Self-evaluation submitted successfully!".green());
    Ok(())
}

fn manager_evaluation(workflow: &mut Workflow) -> Result<()> {
    let view: &Workflow = workflow;
    let pending: Vec<(String, u8, i32, ScoreMap, String)> = view
        .awaiting_manager()
        .into_iter()
        .map(|e| {
            (
                e.employee_number.clone(),
                e.quarter,
                e.year,
                e.self_scores.clone(),
                pending_line(view, e),
            )
        })
        .collect();

    if pending.is_empty() {
        println!("{}", "No pending evaluations available for manager review.".yellow());
        return Ok(());
    }

    let labels: Vec<&str> = pending.iter().map(|p| p.4.as_str()).collect();
    let Some(index) = Select::new()
        .with_prompt("Select evaluation to review")
        .items(&labels)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };

    let (employee_number, quarter, year, self_scores, _) = &pending[index];
    println!(
        "\nManager evaluation for {} - Q{} {}",
        employee_name(workflow, employee_number).bold(),
        quarter,
        year
    );
    print_scores("Employee's Self-Evaluation:", self_scores);
    println!();

    let scores = prompt_scores(Some(self_scores))?;
    let remarks: String = Input::new()
        .with_prompt("Manager remarks")
        .allow_empty(true)
        .interact_text()?;

    workflow.submit_manager_evaluation(employee_number, *quarter, *year, scores, Some(remarks))?;

    println!("{}", "✅ Manager evaluation completed successfully!".green());
    Ok(())
}

fn view_evaluations(workflow: &Workflow) -> Result<()> {
    let Some(employee) = select_employee(workflow)? else {
        return Ok(());
    };

    let evaluations = workflow.list_by_employee(&employee.number);
    if evaluations.is_empty() {
        println!("{}", format!("No evaluations found for {}.", employee.name).yellow());
        return Ok(());
    }

    println!("\n{}\n", format!("Evaluations for {}:", employee.name).green().bold());
    for evaluation in evaluations {
        print_evaluation(evaluation);
    }
    Ok(())
}

fn select_employee(workflow: &Workflow) -> Result<Option<Employee>> {
    let employees = workflow.directory().all();
    let labels: Vec<String> = employees.iter().map(|e| e.to_string()).collect();

    let selection = Select::new()
        .with_prompt("Select an employee")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|i| employees[i].clone()))
}

fn prompt_quarter_and_year() -> Result<(u8, i32)> {
    let quarter: u8 = Input::new()
        .with_prompt("Enter quarter (1-4)")
        .validate_with(|q: &u8| -> std::result::Result<(), &str> {
            if (1..=4).contains(q) {
                Ok(())
            } else {
                Err("Please enter a valid quarter (1-4).")
            }
        })
        .interact_text()?;

    let year: i32 = Input::new()
        .with_prompt("Enter year (e.g., 2024)")
        .validate_with(|y: &i32| -> std::result::Result<(), &str> {
            if (2020..=2030).contains(y) {
                Ok(())
            } else {
                Err("Please enter a valid year between 2020 and 2030.")
            }
        })
        .interact_text()?;

    Ok((quarter, year))
}

/// Ask for one score per category, showing the employee's own score if given
fn prompt_scores(reference: Option<&ScoreMap>) -> Result<ScoreMap> {
    let mut scores = ScoreMap::new();

    for category in Category::ALL {
        let prompt = match reference.and_then(|r| r.get(&category)) {
            Some(own) => format!("{} (Employee: {})", category.label(), own),
            None => category.label().to_string(),
        };

        let score: i32 = Input::new()
            .with_prompt(prompt)
            .validate_with(|s: &i32| -> std::result::Result<(), &str> {
                if (MIN_SCORE..=MAX_SCORE).contains(s) {
                    Ok(())
                } else {
                    Err("Please enter a valid score between 1 and 5.")
                }
            })
            .interact_text()?;

        scores.insert(category, score);
    }

    Ok(scores)
}
