//! Category display formatting

use crate::engine::Snapshot;
use crate::models::{Amount, Window};

use super::format_amount;

/// Format the category table: budget, spent, remaining and utilization per
/// category, with a totals row
pub fn format_category_table(
    snapshot: &Snapshot,
    window: Option<Window>,
    currency: &str,
) -> String {
    if snapshot.categories.is_empty() {
        return "No categories yet. Add one with 'foyer category add'.\n".to_string();
    }

    let spent_by_cat = snapshot.spent_by_category(window);

    let name_width = snapshot
        .categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}  {:>12}  {:>5}\n",
        "Category",
        "Budget",
        "Spent",
        "Remaining",
        "Use",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:->12}  {:->12}  {:->5}\n",
        "",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for category in &snapshot.categories {
        let spent = spent_by_cat
            .get(&category.id)
            .copied()
            .unwrap_or_default();
        let remaining = category.budget - spent;
        let utilization = snapshot.category_utilization(category, window);

        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>12}  {:>12}  {:>4}%\n",
            category.name,
            format_amount(category.budget, currency),
            format_amount(spent, currency),
            format_amount(remaining, currency),
            utilization,
            width = name_width
        ));
    }

    let total_budget = snapshot.sum_category_budgets();
    let total_spent: Amount = spent_by_cat.values().copied().sum();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}\n",
        "Total",
        format_amount(total_budget, currency),
        format_amount(total_spent, currency),
        width = name_width
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, NewTransaction, TransactionId};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_table() {
        let snapshot = Snapshot::new(Amount::zero(), vec![], vec![], vec![]);
        let output = format_category_table(&snapshot, None, "DZD");
        assert!(output.contains("No categories yet"));
    }

    #[test]
    fn test_table_contains_rows_and_totals() {
        let food = Category::new("Food", Amount::new(50000.0));
        let transactions = vec![NewTransaction::new(
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            food.id,
            Amount::new(20000.0),
            "",
        )
        .into_transaction(TransactionId::new(1))];
        let snapshot = Snapshot::new(Amount::new(100000.0), vec![food], transactions, vec![]);

        let output = format_category_table(&snapshot, None, "DZD");
        assert!(output.contains("Food"));
        assert!(output.contains("50 000 DZD"));
        assert!(output.contains("20 000 DZD"));
        assert!(output.contains("30 000 DZD"));
        assert!(output.contains("40%"));
        assert!(output.contains("Total"));
    }
}
