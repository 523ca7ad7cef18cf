//! CLI command definitions and handlers

pub mod category;
pub mod expense;
pub mod portable;
pub mod report;
pub mod salary;
pub mod savings;

pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use portable::{handle_export, handle_import};
pub use report::{handle_compass, handle_dashboard, handle_projection};
pub use salary::{handle_salary_command, SalaryCommands};
pub use savings::{handle_savings_command, SavingsCommands};
