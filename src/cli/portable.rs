//! Export / import CLI handlers

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{BudgetError, BudgetResult};
use crate::portable;
use crate::storage::Storage;

/// Export the four collections to a JSON file
pub fn handle_export(storage: &Storage, file: &Path) -> BudgetResult<()> {
    let out = File::create(file)
        .map_err(|e| BudgetError::Export(format!("Failed to create {}: {}", file.display(), e)))?;
    let mut writer = BufWriter::new(out);

    portable::export_json(storage, &mut writer)?;

    println!("Exported budget data to {}", file.display());
    Ok(())
}

/// Import a JSON file, replacing all four collections
pub fn handle_import(storage: &Storage, file: &Path) -> BudgetResult<()> {
    let contents = std::fs::read_to_string(file)
        .map_err(|e| BudgetError::Import(format!("Failed to read {}: {}", file.display(), e)))?;

    let document = portable::parse_json(&contents)?;
    let summary = portable::apply(storage, document)?;

    println!(
        "Imported {} categories, {} expenses, {} envelopes.",
        summary.categories, summary.transactions, summary.savings
    );
    Ok(())
}
