//! Odds ratio
//!
//! Cross-product ratio of a 2x2 table `[[a, b], [c, d]]` with rows as
//! condition categories and columns as outcome categories. The convention
//! is pinned to `(a/c) / (b/d)`: the odds of being in row 0 rather than
//! row 1, in column 0 relative to column 1. Transposing the table inverts
//! the ratio.
use crate::errors::ContingencyError;
use crate::table::Table;

/// Odds ratio `(a/c) / (b/d)` of a 2x2 table.
///
/// Fails with `InvalidShape` for anything other than a 2x2 table and with
/// `DivisionByZero` when a denominator cell (b, c or d) is zero.
pub fn odds_ratio(table: &Table<u64>) -> Result<f64, ContingencyError> {
    if table.shape() != (2, 2) {
        return Err(ContingencyError::InvalidShape(
            "a 2x2 table".to_string(),
            format!("{}x{}", table.rows, table.cols),
        ));
    }
    let a = *table.get(0, 0) as f64;
    let b = *table.get(0, 1) as f64;
    let c = *table.get(1, 0) as f64;
    let d = *table.get(1, 1) as f64;

    if c == 0.0 {
        return Err(ContingencyError::DivisionByZero("(1, 0)".to_string()));
    }
    if d == 0.0 {
        return Err(ContingencyError::DivisionByZero("(1, 1)".to_string()));
    }
    if b == 0.0 {
        return Err(ContingencyError::DivisionByZero("(0, 1)".to_string()));
    }
    Ok((a / c) / (b / d))
}
