//! Dashboard, projection and compass display formatting

use crate::compass::{Tip, TipSeverity};
use crate::engine::{AnnualProjection, Snapshot};
use crate::models::Window;

use super::{format_amount, format_bar};

/// Format the dashboard summary for a window
pub fn format_dashboard(snapshot: &Snapshot, window: Option<Window>, currency: &str) -> String {
    let spent = snapshot.total_spent(window);
    let theoretical = snapshot.theoretical_savings(window);
    let allocated = snapshot.total_savings_allocated();
    let left = snapshot.left_to_allocate(window);

    let mut output = String::new();

    match window {
        Some(w) => output.push_str(&format!("Dashboard — {}\n\n", w)),
        None => output.push_str("Dashboard — all time\n\n"),
    }

    let salary_str = if snapshot.salary.is_positive() {
        format_amount(snapshot.salary, currency)
    } else {
        "—".to_string()
    };

    output.push_str(&format!("  {:<22} {}\n", "Salary", salary_str));
    output.push_str(&format!(
        "  {:<22} {}\n",
        "Category budgets",
        format_amount(snapshot.sum_category_budgets(), currency)
    ));
    output.push_str(&format!(
        "  {:<22} {}\n",
        "Spent",
        format_amount(spent, currency)
    ));
    output.push_str(&format!(
        "  {:<22} {}\n",
        "Theoretical savings",
        format_amount(theoretical, currency)
    ));
    output.push_str(&format!(
        "  {:<22} {}\n",
        "In envelopes",
        format_amount(allocated, currency)
    ));
    output.push_str(&format!(
        "  {:<22} {}\n",
        "Left to allocate",
        format_amount(left, currency)
    ));

    if snapshot.salary.is_positive() {
        output.push_str(&format!(
            "\n  [{}] spent vs salary\n",
            format_bar(spent.value(), snapshot.salary.value(), 24)
        ));
    }

    output
}

/// Format the twelve-month projection table
pub fn format_projection_table(projection: &AnnualProjection, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Projection for {}\n\n", projection.year));
    output.push_str(&format!(
        "{:>5}  {:>14}  {:>14}  {:>14}\n",
        "Month", "Spent", "Savings", "In envelopes"
    ));
    output.push_str(&format!(
        "{:->5}  {:->14}  {:->14}  {:->14}\n",
        "", "", "", ""
    ));

    for month in &projection.months {
        output.push_str(&format!(
            "{:>5}  {:>14}  {:>14}  {:>14}\n",
            format!("{:02}", month.month),
            format_amount(month.spent, currency),
            format_amount(month.theoretical_savings, currency),
            format_amount(month.savings_allocated, currency),
        ));
    }

    output.push_str(&format!(
        "{:>5}  {:>14}  {:>14}  {:>14}\n",
        "Total",
        format_amount(projection.total_spent, currency),
        format_amount(projection.total_theoretical_savings, currency),
        format_amount(projection.savings_allocated, currency),
    ));

    output
}

/// Format the compass tips with color hints
pub fn format_tips(tips: &[Tip]) -> String {
    let mut output = String::new();

    for tip in tips {
        let (symbol, color) = match tip.severity {
            TipSeverity::Good => ("✓", "\x1b[32m"),
            TipSeverity::Warning => ("!", "\x1b[33m"),
            TipSeverity::Bad => ("✗", "\x1b[31m"),
        };
        output.push_str(&format!("{}{} {}\x1b[0m\n", color, symbol, tip.message));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Category, NewTransaction, TransactionId};
    use chrono::NaiveDate;

    fn snapshot() -> Snapshot {
        let food = Category::new("Food", Amount::new(50000.0));
        let transactions = vec![NewTransaction::new(
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            food.id,
            Amount::new(20000.0),
            "",
        )
        .into_transaction(TransactionId::new(1))];
        Snapshot::new(Amount::new(100000.0), vec![food], transactions, vec![])
    }

    #[test]
    fn test_dashboard_contents() {
        let output = format_dashboard(&snapshot(), Some(Window::month(2025, 6)), "DZD");

        assert!(output.contains("2025-06"));
        assert!(output.contains("100 000 DZD"));
        assert!(output.contains("20 000 DZD"));
        assert!(output.contains("80 000 DZD"));
        assert!(output.contains("spent vs salary"));
    }

    #[test]
    fn test_dashboard_without_salary_shows_dash() {
        let empty = Snapshot::new(Amount::zero(), vec![], vec![], vec![]);
        let output = format_dashboard(&empty, None, "DZD");
        assert!(output.contains("—"));
        assert!(!output.contains("spent vs salary"));
    }

    #[test]
    fn test_projection_table_has_12_rows_and_total() {
        let projection = snapshot().annual_projection(2025);
        let output = format_projection_table(&projection, "DZD");

        assert!(output.contains("Projection for 2025"));
        assert!(output.contains("01"));
        assert!(output.contains("12"));
        assert!(output.contains("Total"));
    }

    #[test]
    fn test_tips_formatting() {
        let tips = vec![
            Tip {
                severity: TipSeverity::Good,
                message: "All good".into(),
            },
            Tip {
                severity: TipSeverity::Bad,
                message: "Over budget".into(),
            },
        ];

        let output = format_tips(&tips);
        assert!(output.contains("✓ All good"));
        assert!(output.contains("✗ Over budget"));
    }
}
