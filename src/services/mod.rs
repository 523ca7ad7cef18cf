//! Service layer for foyer
//!
//! The service layer provides the admission-control rules on top of the
//! storage layer: every mutation validates fully before issuing any store
//! write, so a rejected action leaves state untouched.

pub mod category;
pub mod salary;
pub mod savings;
pub mod transaction;

pub use category::CategoryService;
pub use salary::SalaryService;
pub use savings::SavingsService;
pub use transaction::TransactionService;
