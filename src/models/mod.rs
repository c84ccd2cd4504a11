pub mod types;

pub use types::{FetchOutcome, HarvestStats, Product, ProductEntry, ProductIndex, ReportId, ReportRecord};
