//! Salary CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_amount;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Amount;
use crate::services::SalaryService;
use crate::storage::Storage;

/// Salary subcommands
#[derive(Subcommand)]
pub enum SalaryCommands {
    /// Show the current salary
    Show,

    /// Set the monthly salary
    Set {
        /// New salary
        amount: String,
        /// Apply even if the salary falls below the category budgets
        #[arg(long)]
        confirm: bool,
    },
}

/// Handle a salary command
pub fn handle_salary_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SalaryCommands,
) -> BudgetResult<()> {
    let service = SalaryService::new(storage);

    match cmd {
        SalaryCommands::Show => {
            let salary = service.get()?;
            if salary.is_positive() {
                println!("Salary: {}", format_amount(salary, &settings.currency));
            } else {
                println!("No salary set. Use 'foyer salary set <amount>'.");
            }
        }

        SalaryCommands::Set { amount, confirm } => {
            let amount = Amount::parse(&amount)
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            match service.set(amount, confirm) {
                Ok(salary) => {
                    println!("Salary set to {}", format_amount(salary, &settings.currency));
                }
                Err(err) if err.needs_confirmation() => {
                    println!("Warning: {}", err);
                    println!("Re-run with --confirm to apply the new salary anyway.");
                }
                Err(err) => return Err(err),
            }
        }
    }

    Ok(())
}
