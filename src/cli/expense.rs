//! Expense CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_amount;
use crate::display::transaction::format_transaction_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, TransactionId, Window};
use crate::services::{CategoryService, TransactionService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Log an expense against a category
    Add {
        /// Category name or ID
        category: String,
        /// Expense amount
        amount: String,
        /// Expense date (YYYY-MM-DD, today if omitted)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List expenses, newest first
    List {
        /// Restrict to a month (YYYY-MM)
        #[arg(long, conflicts_with = "year")]
        month: Option<String>,
        /// Restrict to a year
        #[arg(long)]
        year: Option<i32>,
    },

    /// Delete a single expense by id
    Delete {
        /// Expense id (as shown by 'foyer expense list')
        id: String,
    },

    /// Delete the whole expense history
    Clear {
        /// Skip the confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            date,
            note,
        } => {
            let categories = CategoryService::new(storage);
            let category = categories
                .find(&category)?
                .ok_or_else(|| BudgetError::category_not_found(&category))?;

            let amount = Amount::parse(&amount)
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            let date = match date {
                Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                    BudgetError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", raw))
                })?,
                None => Local::now().date_naive(),
            };

            let transaction =
                service.add(category.id, amount, date, note.as_deref().unwrap_or(""))?;

            println!(
                "Logged {} {} on {} against '{}'",
                transaction.id,
                format_amount(transaction.amount, &settings.currency),
                transaction.date,
                category.name
            );
        }

        ExpenseCommands::List { month, year } => {
            let window = parse_window(month.as_deref(), year)?;
            let transactions = service.list(window)?;
            let categories = storage.categories.get_all()?;

            print!(
                "{}",
                format_transaction_list(&transactions, &categories, &settings.currency)
            );
        }

        ExpenseCommands::Delete { id } => {
            let id: TransactionId = id
                .parse()
                .map_err(|_| BudgetError::Validation(format!("Invalid expense id '{}'", id)))?;

            let deleted = service.delete(id)?;
            println!(
                "Deleted expense {} ({})",
                deleted.id,
                format_amount(deleted.amount, &settings.currency)
            );
        }

        ExpenseCommands::Clear { force } => {
            if !force {
                println!(
                    "This deletes all {} recorded expense(s).",
                    storage.transactions.count()?
                );
                println!("Re-run with --force to confirm.");
                return Ok(());
            }

            let removed = service.clear_history()?;
            println!("Cleared {} expense(s).", removed);
        }
    }

    Ok(())
}

/// Translate the --month / --year flags into a window
pub fn parse_window(month: Option<&str>, year: Option<i32>) -> BudgetResult<Option<Window>> {
    if let Some(raw) = month {
        let window: Window = raw
            .parse()
            .map_err(|e: crate::models::WindowParseError| BudgetError::Validation(e.to_string()))?;
        return match window {
            Window::Month { .. } => Ok(Some(window)),
            Window::Year(_) => Err(BudgetError::Validation(format!(
                "Expected YYYY-MM for --month, got '{}'",
                raw
            ))),
        };
    }

    Ok(year.map(Window::year))
}
