//! CSV loader for property input data.
//!
//! ## CSV Format
//!
//! The expected CSV format uses the following columns. Column order does
//! **not** matter (headers are matched by name). All header names are
//! case-sensitive and must match exactly.
//!
//! | Column | Required | Type | Notes |
//! |-------------------------------|----------|---------|--------------------------------------|
//! | `name` | yes | string | |
//! | `address` | yes | string | |
//! | `zip_code` | yes | string | Kept verbatim (leading zeros survive) |
//! | `image_url` | no | string | Leave cell empty for `None` |
//! | `square_footage` | yes | decimal | |
//! | `purchase_price` | yes | decimal | |
//! | `down_payment` | yes | decimal | |
//! | `interest_rate_percent` | yes | decimal | e.g. `6.5` |
//! | `loan_term_years` | yes | integer | |
//! | `annual_property_tax` | yes | decimal | |
//! | `annual_insurance` | yes | decimal | |
//! | `monthly_maintenance` | yes | decimal | |
//! | `vacancy_rate` | yes | decimal | Fraction, e.g. `0.05` for 5% |
//! | `expected_monthly_rent` | yes | decimal | |
//! | `annual_appreciation_percent` | yes | decimal | May be negative |
//! | `hold_period_years` | yes | decimal | May be fractional, e.g. `2.5` |
//! | `rehab_cost` | yes | decimal | |
//! | `target_resale_price` | yes | decimal | |
//!
//! ### Minimal example
//!
//! ```csv
//! name,address,zip_code,square_footage,purchase_price,down_payment,interest_rate_percent,loan_term_years,annual_property_tax,annual_insurance,monthly_maintenance,vacancy_rate,expected_monthly_rent,annual_appreciation_percent,hold_period_years,rehab_cost,target_resale_price
//! Property A,123 Main St,12345,1500,200000,40000,6.5,30,3600,1200,150,0.05,1800,3.0,5,30000,275000
//! ```
//!
//! The loader performs no range validation; out-of-range values load fine
//! and are rejected per property at analysis time.

use std::path::{Path, PathBuf};

use prop_core::PropertyInput;
use rust_decimal::Decimal;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    address: String,
    zip_code: String,
    image_url: Option<String>,
    square_footage: Decimal,
    purchase_price: Decimal,
    down_payment: Decimal,
    interest_rate_percent: Decimal,
    loan_term_years: u32,
    annual_property_tax: Decimal,
    annual_insurance: Decimal,
    monthly_maintenance: Decimal,
    vacancy_rate: Decimal,
    expected_monthly_rent: Decimal,
    annual_appreciation_percent: Decimal,
    hold_period_years: Decimal,
    rehab_cost: Decimal,
    target_resale_price: Decimal,
}

impl From<CsvRow> for PropertyInput {
    fn from(row: CsvRow) -> Self {
        PropertyInput {
            name: row.name,
            address: row.address,
            zip_code: row.zip_code,
            image_url: row.image_url.filter(|url| !url.is_empty()),
            square_footage: row.square_footage,
            purchase_price: row.purchase_price,
            down_payment: row.down_payment,
            interest_rate_percent: row.interest_rate_percent,
            loan_term_years: row.loan_term_years,
            annual_property_tax: row.annual_property_tax,
            annual_insurance: row.annual_insurance,
            monthly_maintenance: row.monthly_maintenance,
            vacancy_rate: row.vacancy_rate,
            expected_monthly_rent: row.expected_monthly_rent,
            annual_appreciation_percent: row.annual_appreciation_percent,
            hold_period_years: row.hold_period_years,
            rehab_cost: row.rehab_cost,
            target_resale_price: row.target_resale_price,
        }
    }
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading property CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// The file could not be read from disk.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Parse CSV text (the full file contents as a `&str`) and return a vector
/// of [`PropertyInput`]. Rows are returned in file order.
///
/// # Errors
///
/// Returns [`CsvLoadError::Parse`] if the CSV is structurally invalid or a
/// required field cannot be deserialised.
pub fn load_from_str(input: &str) -> Result<Vec<PropertyInput>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .map(|row| Ok(PropertyInput::from(row?)))
        .collect()
}

/// Convenience wrapper: read a file from disk and delegate to
/// [`load_from_str`].
///
/// # Errors
///
/// Returns [`CsvLoadError::Io`] when the file cannot be read, or a
/// [`CsvLoadError::Parse`] when the contents are invalid.
pub fn load_from_file(path: &Path) -> Result<Vec<PropertyInput>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
