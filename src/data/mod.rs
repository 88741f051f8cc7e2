//! Data module - CSV loading, the record table, and filtering

mod dataset;
mod filter;
mod loader;

pub use dataset::{display_case, CustomerTypeOption, Dataset, Record};
pub use filter::FilterSelection;
pub use loader::{DataLoader, LoaderError};
