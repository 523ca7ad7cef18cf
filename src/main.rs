use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use foyer::cli::{
    handle_category_command, handle_compass, handle_dashboard, handle_expense_command,
    handle_export, handle_import, handle_projection, handle_salary_command,
    handle_savings_command, CategoryCommands, ExpenseCommands, SalaryCommands, SavingsCommands,
};
use foyer::config::{paths::FoyerPaths, settings::Settings};
use foyer::migrate::{migrate_if_needed, MigrationOutcome};
use foyer::storage::Storage;

#[derive(Parser)]
#[command(
    name = "foyer",
    author = "Dayne Merad",
    version,
    about = "Household budget tracker for the terminal",
    long_about = "foyer tracks a monthly salary split into budgeted categories, \
                  logs expenses against them and keeps savings envelopes moving \
                  toward their targets, with an advisory compass for the month."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Salary management commands
    #[command(subcommand)]
    Salary(SalaryCommands),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Expense management commands
    #[command(subcommand, alias = "tx")]
    Expense(ExpenseCommands),

    /// Savings envelope commands
    #[command(subcommand)]
    Savings(SavingsCommands),

    /// Show the dashboard for a month, a year, or all time
    #[command(alias = "dash")]
    Dashboard {
        /// Restrict to a month (YYYY-MM, current month if nothing is given)
        #[arg(long, conflicts_with_all = ["year", "all"])]
        month: Option<String>,
        /// Restrict to a year
        #[arg(long, conflicts_with = "all")]
        year: Option<i32>,
        /// No window: aggregate everything
        #[arg(long)]
        all: bool,
    },

    /// Show advisory tips for the month
    Compass {
        /// Month to advise on (YYYY-MM, current month if omitted)
        #[arg(long)]
        month: Option<String>,
    },

    /// Show the twelve-month projection for a year
    Projection {
        /// Year to project (current year if omitted)
        year: Option<i32>,
    },

    /// Export all budget data to a JSON file
    Export {
        /// Output file
        file: PathBuf,
    },

    /// Import budget data from a JSON file (replaces everything)
    Import {
        /// Input file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FoyerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths)?;
    storage.load_all()?;

    if let MigrationOutcome::Migrated {
        categories,
        transactions,
        ..
    } = migrate_if_needed(&storage)?
    {
        println!(
            "Migrated legacy data: {} categories, {} expenses.",
            categories, transactions
        );
    }

    match cli.command {
        Commands::Salary(cmd) => handle_salary_command(&storage, &settings, cmd)?,
        Commands::Category(cmd) => handle_category_command(&storage, &settings, cmd)?,
        Commands::Expense(cmd) => handle_expense_command(&storage, &settings, cmd)?,
        Commands::Savings(cmd) => handle_savings_command(&storage, &settings, cmd)?,
        Commands::Dashboard { month, year, all } => {
            handle_dashboard(&storage, &settings, month, year, all)?
        }
        Commands::Compass { month } => handle_compass(&storage, &settings, month)?,
        Commands::Projection { year } => handle_projection(&storage, &settings, year)?,
        Commands::Export { file } => handle_export(&storage, &file)?,
        Commands::Import { file } => handle_import(&storage, &file)?,
    }

    Ok(())
}
