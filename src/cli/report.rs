//! Dashboard, compass and projection CLI handlers

use chrono::{Datelike, Local};

use crate::compass;
use crate::config::Settings;
use crate::display::category::format_category_table;
use crate::display::dashboard::{format_dashboard, format_projection_table, format_tips};
use crate::engine::Snapshot;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Window;
use crate::storage::Storage;

use super::expense::parse_window;

/// Show the dashboard for a window (current month by default)
pub fn handle_dashboard(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
    year: Option<i32>,
    all: bool,
) -> BudgetResult<()> {
    let window = if all {
        None
    } else {
        parse_window(month.as_deref(), year)?
            .or_else(|| Some(Window::month_of(Local::now().date_naive())))
    };

    let snapshot = Snapshot::load(storage)?;
    print!("{}", format_dashboard(&snapshot, window, &settings.currency));
    println!();
    print!(
        "{}",
        format_category_table(&snapshot, window, &settings.currency)
    );

    Ok(())
}

/// Show the compass tips for a month (current month by default)
pub fn handle_compass(
    storage: &Storage,
    _settings: &Settings,
    month: Option<String>,
) -> BudgetResult<()> {
    let today = Local::now().date_naive();
    let window = match month {
        Some(raw) => {
            let window: Window = raw
                .parse()
                .map_err(|e: crate::models::WindowParseError| {
                    BudgetError::Validation(e.to_string())
                })?;
            match window {
                Window::Month { .. } => window,
                Window::Year(_) => {
                    return Err(BudgetError::Validation(format!(
                        "Expected YYYY-MM for --month, got '{}'",
                        raw
                    )))
                }
            }
        }
        None => Window::month_of(today),
    };

    let snapshot = Snapshot::load(storage)?;
    let tips = compass::generate(&snapshot, window, today);
    print!("{}", format_tips(&tips));

    Ok(())
}

/// Show the twelve-month projection (current year by default)
pub fn handle_projection(
    storage: &Storage,
    settings: &Settings,
    year: Option<i32>,
) -> BudgetResult<()> {
    let year = year.unwrap_or_else(|| Local::now().date_naive().year());

    let snapshot = Snapshot::load(storage)?;
    let projection = snapshot.annual_projection(year);
    print!(
        "{}",
        format_projection_table(&projection, &settings.currency)
    );

    Ok(())
}
