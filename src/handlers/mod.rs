// Handler modules
pub mod export;

pub use export::{ExportOptions, ExportSummary, handle_export};
