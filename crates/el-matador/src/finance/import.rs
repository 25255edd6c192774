use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::health::parse_amount_text;

const FALLBACK_CATEGORY: &str = "other";
const CATEGORY_HEADER: &str = "Category";
const AMOUNT_HEADER: &str = "Amount";

/// Failure while reading an expense export.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseImportError {
    #[error("failed to read expense export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid expense CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads a `Category,Amount` spreadsheet export into a monthly expense map.
///
/// Header names are matched case-insensitively; an export missing either
/// column is rejected rather than imported as empty rows.
pub struct ExpenseCsvImporter;

impl ExpenseCsvImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<BTreeMap<String, f64>, ExpenseImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<BTreeMap<String, f64>, ExpenseImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(canonical_header)
            .collect();
        csv_reader.set_headers(csv::StringRecord::from(headers));

        let mut expenses: BTreeMap<String, f64> = BTreeMap::new();
        let mut rows = 0usize;

        for record in csv_reader.deserialize::<ExpenseRow>() {
            let row = record?;
            *expenses.entry(normalize_category(&row.category)).or_insert(0.0) += row.amount;
            rows += 1;
        }

        debug!(rows, categories = expenses.len(), "imported expense rows");
        Ok(expenses)
    }
}

#[derive(Debug, Deserialize)]
struct ExpenseRow {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Amount", deserialize_with = "lenient_cell")]
    amount: f64,
}

fn canonical_header(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case(CATEGORY_HEADER) {
        CATEGORY_HEADER.to_string()
    } else if trimmed.eq_ignore_ascii_case(AMOUNT_HEADER) {
        AMOUNT_HEADER.to_string()
    } else {
        trimmed.to_string()
    }
}

fn normalize_category(raw: &str) -> String {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        FALLBACK_CATEGORY.to_string()
    } else {
        normalized
    }
}

fn lenient_cell<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(parse_currency_cell).unwrap_or(0.0))
}

/// Spreadsheet cells may carry currency formatting such as `$1,200.00`.
fn parse_currency_cell(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|ch| !matches!(ch, '$' | ',' | ' '))
        .collect();
    parse_amount_text(&cleaned)
}
