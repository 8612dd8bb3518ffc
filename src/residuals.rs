//! Standardized residuals
//!
//! Per-cell deviations `(observed - expected) / sqrt(expected)`, which put
//! every cell on a comparable (approximately Z-score) scale. Residuals are
//! for interpretation only; they never feed back into the statistic.
use crate::errors::ContingencyError;
use crate::table::Table;
use crate::utils::validate_observed_expected;

/// Standardized residual table for matching observed and expected tables.
pub fn standardized_residuals(
    observed: &Table<u64>,
    expected: &Table<f64>,
) -> Result<Table<f64>, ContingencyError> {
    if observed.shape() != expected.shape() {
        return Err(ContingencyError::InvalidShape(
            format!("a {}x{} expected table", observed.rows, observed.cols),
            format!("{}x{}", expected.rows, expected.cols),
        ));
    }
    validate_observed_expected(&observed.data, &expected.data, observed.cols)?;

    let data = observed
        .data
        .iter()
        .zip(&expected.data)
        .map(|(&o, &e)| (o as f64 - e) / e.sqrt())
        .collect();
    Table::new(data, observed.rows, observed.cols)
}
