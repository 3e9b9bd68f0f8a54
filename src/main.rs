use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use perfeval::cli::{EvaluationArgs, ScoreArgs, SessionOptions};
use perfeval::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "perfeval")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Quarterly employee evaluations", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Evaluation record file (overrides records_file from config)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Config file (default: ./perfeval.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit an employee's self-evaluation (creates the evaluation if needed)
    #[command(name = "self-eval")]
    SelfEval {
        #[command(flatten)]
        key: EvaluationArgs,

        #[command(flatten)]
        scores: ScoreArgs,
    },

    /// Submit the manager evaluation for a self-evaluated quarter
    #[command(name = "manager-eval")]
    ManagerEval {
        #[command(flatten)]
        key: EvaluationArgs,

        #[command(flatten)]
        scores: ScoreArgs,

        /// Manager remarks
        #[arg(short, long)]
        remarks: Option<String>,
    },

    /// Create an empty evaluation
    Create {
        #[command(flatten)]
        key: EvaluationArgs,
    },

    /// Show one evaluation
    Show {
        #[command(flatten)]
        key: EvaluationArgs,
    },

    /// List an employee's evaluations, most recent first
    List {
        /// Employee number
        employee: String,
    },

    /// List evaluations that are not completed
    Pending {
        /// Only those with a finished self-evaluation
        #[arg(short, long)]
        awaiting_manager: bool,
    },

    /// List employees
    Employees,

    /// Interactive menu
    Menu,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "perfeval=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("PERFEVAL_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let options = SessionOptions {
        config: cli.config,
        records_file: cli.file,
    };

    match cli.command {
        Commands::SelfEval { key, scores } => {
            perfeval::cli::submit::run_self(&options, key, scores)?;
        }

        Commands::ManagerEval {
            key,
            scores,
            remarks,
        } => {
            perfeval::cli::submit::run_manager(&options, key, scores, remarks)?;
        }

        Commands::Create { key } => {
            perfeval::cli::submit::run_create(&options, key)?;
        }

        Commands::Show { key } => {
            perfeval::cli::view::run_show(&options, key)?;
        }

        Commands::List { employee } => {
            perfeval::cli::view::run_list(&options, &employee)?;
        }

        Commands::Pending { awaiting_manager } => {
            perfeval::cli::view::run_pending(&options, awaiting_manager)?;
        }

        Commands::Employees => {
            perfeval::cli::view::run_employees(&options)?;
        }

        Commands::Menu => {
            perfeval::cli::menu::run(&options)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "perfeval", &mut io::stdout());
        }
    }

    Ok(())
}
