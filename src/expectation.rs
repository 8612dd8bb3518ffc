//! Expectation builders
//!
//! Expected counts under a stated null hypothesis. Two nulls are supported:
//! a uniform-frequency null for 1-D tables (every category equally likely)
//! and an independence null for 2-D tables (cell expectation is the outer
//! product of the marginal proportions, scaled by the grand total).
//!
//! Both builders preserve the observed totals: the expected counts always
//! sum to the observed grand total, and under the independence null every
//! expected row and column sum reproduces the corresponding observed
//! marginal.
use crate::errors::ContingencyError;
use crate::table::Table;
use crate::utils::items_to_strings;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The null hypothesis an expectation model is built under.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum NullModel {
    /// Every category equally likely (1-D goodness-of-fit).
    Uniform,
    /// Row and column variables independent (2-D contingency table).
    Independence,
}

impl FromStr for NullModel {
    type Err = ContingencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Uniform" => Ok(NullModel::Uniform),
            "Independence" => Ok(NullModel::Independence),
            _ => Err(ContingencyError::ParseString(
                s.to_string(),
                "NullModel".to_string(),
                items_to_strings(vec!["Uniform", "Independence"]),
            )),
        }
    }
}

/// Expected counts under the uniform-frequency null: every cell gets the
/// arithmetic mean of the observed counts.
///
/// The mean is the single fitted constraint, so a test built on this
/// expectation has `k - 1` degrees of freedom.
pub fn uniform_expectation(observed: &[u64]) -> Result<Vec<f64>, ContingencyError> {
    let k = observed.len();
    if k < 2 {
        return Err(ContingencyError::TooFewCategories(
            "The uniform-frequency null".to_string(),
            2,
            k,
        ));
    }
    let total: u64 = observed.iter().sum();
    if total == 0 {
        return Err(ContingencyError::DegenerateExpectation(0, 0, 0.0));
    }
    let mean = total as f64 / k as f64;
    Ok(vec![mean; k])
}

/// Expected counts under the independence null:
/// `e(i, j) = row_total[i] * col_total[j] / grand_total`.
///
/// Fixing the marginals spends `rows + cols - 1` constraints, so a test
/// built on this expectation has `(rows - 1) * (cols - 1)` degrees of
/// freedom. A zero marginal would force a zero expected cell, which makes
/// the statistic undefined, so it is rejected here.
pub fn independence_expectation(observed: &Table<u64>) -> Result<Table<f64>, ContingencyError> {
    let (rows, cols) = observed.shape();
    if rows < 2 {
        return Err(ContingencyError::TooFewCategories(
            "The independence null".to_string(),
            2,
            rows,
        ));
    }
    if cols < 2 {
        return Err(ContingencyError::TooFewCategories(
            "The independence null".to_string(),
            2,
            cols,
        ));
    }

    let row_totals = observed.row_sums();
    let col_totals = observed.col_sums();
    if let Some(i) = row_totals.iter().position(|&t| t == 0) {
        return Err(ContingencyError::DegenerateExpectation(i, 0, 0.0));
    }
    if let Some(j) = col_totals.iter().position(|&t| t == 0) {
        return Err(ContingencyError::DegenerateExpectation(0, j, 0.0));
    }
    let grand_total = observed.total() as f64;

    let mut data = Vec::with_capacity(rows * cols);
    for &r in &row_totals {
        for &c in &col_totals {
            data.push(r as f64 * c as f64 / grand_total);
        }
    }
    Table::new(data, rows, cols)
}
