// Company financial records: model, JSON persistence, synthetic generation.

pub mod loader;
pub mod models;
pub mod synthetic;

pub use loader::{load_records, save_records, RecordFormat};
pub use models::CompanyRecord;
