// Expense table extraction from HTML financial records.

pub mod tables;

pub use tables::{extract_descriptions, extract_tables, ExpenseLine, TableExtractor};
