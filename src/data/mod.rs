//! Data module - CSV loading and conversion to typed records

mod loader;
mod processor;
mod records;

pub use loader::{DataLoader, LoadError, DELIVERY_COLUMNS, MATCH_COLUMNS, NA_VALUES};
pub use processor::DataProcessor;
pub use records::{Dataset, DeliveryRecord, MatchRecord};
