pub mod health;
pub mod import;

pub use import::{ExpenseCsvImporter, ExpenseImportError};
