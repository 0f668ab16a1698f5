//! CSV interchange for the property analyzer: loading property records
//! from CSV input and exporting analysis results as a tabular file.

pub mod export;
pub mod loader;

pub use export::CsvExportError;
pub use loader::CsvLoadError;
