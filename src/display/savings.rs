//! Savings envelope display formatting

use crate::models::SavingsEnvelope;

use super::{format_amount, format_bar};

/// Format the savings envelope table with progress toward targets
pub fn format_savings_table(envelopes: &[SavingsEnvelope], currency: &str) -> String {
    if envelopes.is_empty() {
        return "No savings envelopes. Create one with 'foyer savings set'.\n".to_string();
    }

    let name_width = envelopes
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}  {}\n",
        "Envelope",
        "Saved",
        "Target",
        "Progress",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:->12}  {:-<12}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for envelope in envelopes {
        let (target_str, bar) = match envelope.target {
            Some(target) if target.is_positive() => (
                format_amount(target, currency),
                format_bar(envelope.amount.value(), target.value(), 12),
            ),
            _ => ("-".to_string(), String::new()),
        };

        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>12}  {}\n",
            envelope.name,
            format_amount(envelope.amount, currency),
            target_str,
            bar,
            width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    #[test]
    fn test_empty_table() {
        let output = format_savings_table(&[], "DZD");
        assert!(output.contains("No savings envelopes"));
    }

    #[test]
    fn test_table_with_and_without_target() {
        let envelopes = vec![
            SavingsEnvelope::new("Urgence", Amount::new(850.0), Some(Amount::new(1000.0))),
            SavingsEnvelope::new("Divers", Amount::new(200.0), None),
        ];

        let output = format_savings_table(&envelopes, "DZD");
        assert!(output.contains("Urgence"));
        assert!(output.contains("850 DZD"));
        assert!(output.contains("1 000 DZD"));
        assert!(output.contains('█'));
        assert!(output.contains("Divers"));
    }
}
