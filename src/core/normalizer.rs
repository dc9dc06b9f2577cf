//! Turns raw text fields into canonical `(name, quantity, unit)` triples.

use crate::domain::model::RawStockLine;
use crate::utils::error::NormalizationError;

pub const STOCK_LINE_FIELDS: usize = 3;

/// A trimmed triple. Quantity stays signed so callers decide how to treat negatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub name: String,
    pub quantity: i64,
    pub unit: String,
}

/// Removes leading and trailing ASCII spaces only; tabs and inner spacing survive.
pub fn trim_spaces(s: &str) -> &str {
    s.trim_matches(' ')
}

/// Empty quantity text counts as a missing field and yields 0.
pub fn parse_quantity(raw: &str) -> Result<i64, NormalizationError> {
    let text = trim_spaces(raw);
    if text.is_empty() {
        return Ok(0);
    }
    text.parse::<i64>()
        .map_err(|_| NormalizationError::InvalidQuantity {
            value: raw.to_string(),
        })
}

pub fn normalize(raw_name: &str, raw_quantity: &str, raw_unit: &str) -> Result<Normalized, NormalizationError> {
    Ok(Normalized {
        name: trim_spaces(raw_name).to_string(),
        quantity: parse_quantity(raw_quantity)?,
        unit: trim_spaces(raw_unit).to_string(),
    })
}

pub fn normalize_line(line: &RawStockLine) -> Result<Normalized, NormalizationError> {
    match line.fields.as_slice() {
        [name, quantity, unit] => normalize(name, quantity, unit),
        fields => Err(NormalizationError::MalformedLine {
            expected: STOCK_LINE_FIELDS,
            found: fields.len(),
        }),
    }
}
