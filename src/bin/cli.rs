//! Payroll CLI
//!
//! Command-line front end for the employee record store.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use payroll::{Command, Config, EmployeeId, EmployeeRecord, EmployeeStore, Outcome, RosterSummary};
use tracing_subscriber::{fmt, EnvFilter};

/// Payroll CLI
#[derive(Parser, Debug)]
#[command(name = "payroll-cli")]
#[command(about = "Manage an employee roster stored in a flat file")]
#[command(version)]
struct Args {
    /// Backing data file
    #[arg(short, long, default_value = Config::DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add an employee
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long, default_value = "")]
        department: String,

        /// Salary as a non-negative decimal number
        #[arg(short, long)]
        salary: String,
    },

    /// Replace an employee's name, department and salary
    Update {
        id: EmployeeId,

        #[arg(short, long)]
        name: String,

        #[arg(short, long, default_value = "")]
        department: String,

        #[arg(short, long)]
        salary: String,
    },

    /// Delete an employee
    Delete {
        id: EmployeeId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show one employee
    Show { id: EmployeeId },

    /// List all employees
    List {
        /// Print the roster as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the roster as CSV
    ExportCsv {
        /// Destination file [default: employees.csv]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the roster as a text report
    ExportReport {
        /// Destination file [default: employees.txt]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    // Logs go to stderr so stdout carries only command output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,payroll=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder().data_file(&args.data_file).build();

    let mut store = match EmployeeStore::open(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            eprintln!("Error loading data: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut store, args.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(store: &mut EmployeeStore, command: Commands) -> payroll::Result<()> {
    let (command, json) = match command {
        Commands::Add {
            name,
            department,
            salary,
        } => (
            Command::Add {
                name,
                department,
                salary,
            },
            false,
        ),
        Commands::Update {
            id,
            name,
            department,
            salary,
        } => (
            Command::Update {
                id,
                name,
                department,
                salary,
            },
            false,
        ),
        Commands::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete employee {}?", id))? {
                println!("Cancelled");
                return Ok(());
            }
            (Command::Delete { id }, false)
        }
        Commands::Show { id } => (Command::Get { id }, false),
        Commands::List { json } => (Command::List, json),
        Commands::ExportCsv { output } => (
            Command::ExportCsv {
                destination: output,
            },
            false,
        ),
        Commands::ExportReport { output } => (
            Command::ExportReport {
                destination: output,
            },
            false,
        ),
    };

    let verb = match &command {
        Command::Add { .. } => "added",
        Command::Update { .. } => "updated",
        _ => "",
    };

    match store.execute(command)? {
        Outcome::Record(record) if verb.is_empty() => print_records([&record]),
        Outcome::Record(record) => println!("Employee {} {} successfully", record.id, verb),
        Outcome::Deleted(id) => println!("Employee {} deleted successfully", id),
        Outcome::Roster(roster) if json => {
            println!("{}", serde_json::to_string_pretty(&roster)?);
        }
        Outcome::Roster(roster) => {
            print_records(&roster);
            print_summary(&store.summary());
        }
        Outcome::Exported { path, rows, .. } => {
            println!("Exported {} employees to {}", rows, path.display());
        }
    }

    Ok(())
}

/// Ask a yes/no question on stdin
fn confirm(question: &str) -> io::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "YES" | "Yes"))
}

fn print_records<'a>(records: impl IntoIterator<Item = &'a EmployeeRecord>) {
    println!("{:<6} {:<25} {:<20} {:>12}", "ID", "Name", "Department", "Salary");
    for record in records {
        println!(
            "{:<6} {:<25} {:<20} {:>12}",
            record.id,
            record.name,
            record.department,
            record.salary_text()
        );
    }
}

fn print_summary(summary: &RosterSummary) {
    println!();
    println!(
        "{} employees, total ${:.2}, average ${:.2}",
        summary.count, summary.total_salary, summary.average_salary
    );
}
