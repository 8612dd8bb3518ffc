//! Pearson chi-squared statistic
//!
//! The reduction from observed and expected counts to the scalar
//! `sum((observed - expected)^2 / expected)`. Building the expectation
//! model, reducing to the statistic, and mapping the statistic to a
//! probability are kept as separate functions so each can be tested on
//! its own.
use crate::errors::ContingencyError;
use crate::table::Table;
use crate::utils::validate_observed_expected;

/// Chi-squared statistic over matching 1-D observed and expected counts.
///
/// Fails if the slices differ in length or any expected count is not
/// strictly positive.
pub fn chi_squared_statistic_1d(observed: &[u64], expected: &[f64]) -> Result<f64, ContingencyError> {
    validate_observed_expected(observed, expected, observed.len().max(1))?;
    Ok(sum_of_squares(observed, expected))
}

fn sum_of_squares(observed: &[u64], expected: &[f64]) -> f64 {
    observed
        .iter()
        .zip(expected)
        .map(|(&o, &e)| {
            let d = o as f64 - e;
            d * d / e
        })
        .sum()
}

/// Chi-squared statistic over matching 2-D observed and expected tables.
pub fn chi_squared_statistic(
    observed: &Table<u64>,
    expected: &Table<f64>,
) -> Result<f64, ContingencyError> {
    if observed.shape() != expected.shape() {
        return Err(ContingencyError::InvalidShape(
            format!("a {}x{} expected table", observed.rows, observed.cols),
            format!("{}x{}", expected.rows, expected.cols),
        ));
    }
    validate_observed_expected(&observed.data, &expected.data, observed.cols)?;
    Ok(sum_of_squares(&observed.data, &expected.data))
}
