//! Tabular export of analysis results.
//!
//! Writes one CSV row per analyzed property, columns in
//! [`AnalysisResult`] field order (identity, metrics, recommendation,
//! summary), headers from the field names. The investment-type column
//! carries the user-facing label verbatim, so a written file reads back
//! into the same records it was written from.

use std::path::{Path, PathBuf};

use prop_core::AnalysisResult;

/// Errors that can occur while exporting or reading back results CSV.
#[derive(Debug, thiserror::Error)]
pub enum CsvExportError {
    /// CSV (de)serialisation failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The output file could not be written.
    #[error("cannot write '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The in-memory writer could not be flushed.
    #[error("CSV flush error: {0}")]
    Flush(String),

    /// The serialized output was not valid UTF-8.
    #[error("exported CSV was not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Serializes the results to a CSV string, one row per property, in
/// sequence order.
///
/// # Errors
///
/// Returns [`CsvExportError::Csv`] if serialization fails.
pub fn write_to_string(results: &[AnalysisResult]) -> Result<String, CsvExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for result in results {
        writer.serialize(result)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CsvExportError::Flush(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes the results to a CSV file at `path`.
///
/// # Errors
///
/// Returns [`CsvExportError::Io`] when the file cannot be written, or
/// [`CsvExportError::Csv`] if serialization fails.
pub fn write_to_file(path: &Path, results: &[AnalysisResult]) -> Result<(), CsvExportError> {
    let contents = write_to_string(results)?;
    std::fs::write(path, contents).map_err(|source| CsvExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a results CSV (as produced by [`write_to_string`]) back into
/// records, in file order.
///
/// # Errors
///
/// Returns [`CsvExportError::Csv`] if the CSV is structurally invalid or a
/// field cannot be deserialised (including unknown investment-type labels).
pub fn read_from_str(input: &str) -> Result<Vec<AnalysisResult>, CsvExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<AnalysisResult>()
        .map(|row| Ok(row?))
        .collect()
}
