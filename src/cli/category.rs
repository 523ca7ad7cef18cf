//! Category CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::category::format_category_table;
use crate::display::format_amount;
use crate::engine::Snapshot;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Amount;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with spending and utilization
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Monthly budget
        budget: String,
    },

    /// Edit a category's name or budget
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New budget
        #[arg(short, long)]
        budget: Option<String>,
    },

    /// Delete a category and every expense logged against it
    Delete {
        /// Category name or ID
        category: String,
        /// Skip the confirmation
        #[arg(long)]
        force: bool,
    },

    /// Replace all categories with the example envelope set
    Seed {
        /// Skip the confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let snapshot = Snapshot::load(storage)?;
            print!(
                "{}",
                format_category_table(&snapshot, None, &settings.currency)
            );
        }

        CategoryCommands::Add { name, budget } => {
            let budget = Amount::parse(&budget)
                .map_err(|e| BudgetError::Validation(e.to_string()))?;
            let category = service.add(&name, budget)?;

            println!(
                "Created category '{}' with budget {}",
                category.name,
                format_amount(category.budget, &settings.currency)
            );
        }

        CategoryCommands::Edit {
            category,
            name,
            budget,
        } => {
            let existing = service
                .find(&category)?
                .ok_or_else(|| BudgetError::category_not_found(&category))?;

            let budget = budget
                .map(|b| Amount::parse(&b))
                .transpose()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            let updated = service.update(existing.id, name.as_deref(), budget)?;
            println!(
                "Updated '{}': budget {}",
                updated.name,
                format_amount(updated.budget, &settings.currency)
            );
        }

        CategoryCommands::Delete { category, force } => {
            let existing = service
                .find(&category)?
                .ok_or_else(|| BudgetError::category_not_found(&category))?;

            let affected = storage.transactions.get_by_category(existing.id)?.len();
            if !force {
                println!(
                    "This deletes category '{}' and its {} expense(s).",
                    existing.name, affected
                );
                println!("Re-run with --force to confirm.");
                return Ok(());
            }

            let (deleted, removed) = service.delete(existing.id)?;
            println!(
                "Deleted category '{}' and {} expense(s).",
                deleted.name, removed
            );
        }

        CategoryCommands::Seed { force } => {
            if !force {
                println!("This replaces all existing categories with the example set.");
                println!("Re-run with --force to confirm.");
                return Ok(());
            }

            let seeded = service.seed_defaults()?;
            println!("Seeded {} categories.", seeded.len());
        }
    }

    Ok(())
}
