mod exporter;
mod extractor;
mod loader;
mod types;

pub use exporter::{export_phone_numbers, save_workbook};
pub use loader::load_document;
pub use types::{ExportedWorkbook, JobEvent, LoadedDocument};
