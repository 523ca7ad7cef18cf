//! Savings envelope CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_amount;
use crate::display::savings::format_savings_table;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, Window};
use crate::services::SavingsService;
use crate::storage::Storage;

/// Savings envelope subcommands
#[derive(Subcommand)]
pub enum SavingsCommands {
    /// List all envelopes
    List,

    /// Create an envelope, or update it if the name already exists
    Set {
        /// Envelope name (case-insensitive identity)
        name: String,
        /// Amount set aside
        amount: String,
        /// Savings goal
        #[arg(short, long)]
        target: Option<String>,
        /// Month used for the allocation check (YYYY-MM, current if omitted)
        #[arg(long)]
        month: Option<String>,
    },

    /// Delete an envelope
    Delete {
        /// Envelope name or ID
        envelope: String,
    },
}

/// Handle a savings command
pub fn handle_savings_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SavingsCommands,
) -> BudgetResult<()> {
    let service = SavingsService::new(storage);

    match cmd {
        SavingsCommands::List => {
            let envelopes = service.list()?;
            print!("{}", format_savings_table(&envelopes, &settings.currency));
        }

        SavingsCommands::Set {
            name,
            amount,
            target,
            month,
        } => {
            let amount = Amount::parse(&amount)
                .map_err(|e| BudgetError::Validation(e.to_string()))?;
            let target = target
                .map(|t| Amount::parse(&t))
                .transpose()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            let window = match month {
                Some(raw) => raw
                    .parse::<Window>()
                    .map_err(|e| BudgetError::Validation(e.to_string()))?,
                None => Window::month_of(Local::now().date_naive()),
            };

            let envelope = service.upsert(&name, amount, target, window)?;
            match envelope.target {
                Some(target) => println!(
                    "Envelope '{}': {} toward {}",
                    envelope.name,
                    format_amount(envelope.amount, &settings.currency),
                    format_amount(target, &settings.currency)
                ),
                None => println!(
                    "Envelope '{}': {}",
                    envelope.name,
                    format_amount(envelope.amount, &settings.currency)
                ),
            }
        }

        SavingsCommands::Delete { envelope } => {
            let deleted = service.delete(&envelope)?;
            println!("Deleted envelope '{}'.", deleted.name);
        }
    }

    Ok(())
}
