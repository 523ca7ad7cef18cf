//! Transaction display formatting

use std::collections::HashMap;

use crate::models::{Category, CategoryId, Transaction};

use super::format_amount;

/// Format a transaction list with resolved category names
pub fn format_transaction_list(
    transactions: &[Transaction],
    categories: &[Category],
    currency: &str,
) -> String {
    if transactions.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let names: HashMap<CategoryId, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let mut output = String::new();
    output.push_str(&format!(
        "{:>6}  {:<10}  {:<20}  {:>12}  {}\n",
        "Id", "Date", "Category", "Amount", "Note"
    ));
    output.push_str(&format!(
        "{:->6}  {:-<10}  {:-<20}  {:->12}  {:-<4}\n",
        "", "", "", "", ""
    ));

    for t in transactions {
        let category = names.get(&t.category_id).copied().unwrap_or("—");
        output.push_str(&format!(
            "{:>6}  {:<10}  {:<20}  {:>12}  {}\n",
            t.id.to_string(),
            t.date.to_string(),
            category,
            format_amount(t.amount, currency),
            t.note
        ));
    }

    output
}
