//! High-level test drivers
//!
//! One-shot entry points that wire the expectation builders, the statistic
//! reduction and the p-value evaluation together for the two supported
//! nulls. Each call is independent and side-effect free apart from a
//! warning log when the large-sample approximation gets shaky.
use crate::errors::ContingencyError;
use crate::expectation::{independence_expectation, uniform_expectation, NullModel};
use crate::pvalue::chi_squared_p_value;
use crate::residuals::standardized_residuals;
use crate::statistic::{chi_squared_statistic, chi_squared_statistic_1d};
use crate::table::Table;
use log::warn;
use serde::{Deserialize, Serialize};

/// Expected counts below this make the chi-squared approximation unreliable.
const MIN_EXPECTED_COUNT: f64 = 5.0;

/// The outcome of a single chi-squared test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSummary {
    /// Chi-squared statistic.
    pub statistic: f64,
    /// Degrees of freedom.
    pub df: usize,
    /// Upper-tail p-value.
    pub p_value: f64,
    /// The null hypothesis the expectation was built under.
    pub null: NullModel,
}

impl TestSummary {
    /// Serialize the summary to a JSON string.
    pub fn to_json(&self) -> Result<String, ContingencyError> {
        match serde_json::to_string(self) {
            Ok(s) => Ok(s),
            Err(e) => Err(ContingencyError::UnableToWrite(e.to_string())),
        }
    }
}

/// The outcome of an independence test, with the derived tables kept for
/// interpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndependenceTest {
    /// Statistic, degrees of freedom and p-value.
    pub summary: TestSummary,
    /// Expected counts under the independence null.
    pub expected: Table<f64>,
    /// Standardized residuals, `(observed - expected) / sqrt(expected)`.
    pub residuals: Table<f64>,
}

/// Chi-squared goodness-of-fit test against the uniform-frequency null.
///
/// Degrees of freedom are `k - 1` for `k` categories.
pub fn goodness_of_fit(observed: &[u64]) -> Result<TestSummary, ContingencyError> {
    let expected = uniform_expectation(observed)?;
    warn_on_small_expected(&expected);
    let statistic = chi_squared_statistic_1d(observed, &expected)?;
    let df = observed.len() - 1;
    let p_value = chi_squared_p_value(statistic, df)?;
    Ok(TestSummary {
        statistic,
        df,
        p_value,
        null: NullModel::Uniform,
    })
}

/// Chi-squared test of independence between the row and column variables.
///
/// Degrees of freedom are `(rows - 1) * (cols - 1)`.
pub fn independence_test(observed: &Table<u64>) -> Result<IndependenceTest, ContingencyError> {
    let expected = independence_expectation(observed)?;
    warn_on_small_expected(&expected.data);
    let statistic = chi_squared_statistic(observed, &expected)?;
    let df = (observed.rows - 1) * (observed.cols - 1);
    let p_value = chi_squared_p_value(statistic, df)?;
    let residuals = standardized_residuals(observed, &expected)?;
    Ok(IndependenceTest {
        summary: TestSummary {
            statistic,
            df,
            p_value,
            null: NullModel::Independence,
        },
        expected,
        residuals,
    })
}

fn warn_on_small_expected(expected: &[f64]) {
    let small = expected.iter().filter(|&&e| e < MIN_EXPECTED_COUNT).count();
    if small > 0 {
        warn!(
            "{} of {} expected counts are below {}. The chi-squared approximation may be inaccurate.",
            small,
            expected.len(),
            MIN_EXPECTED_COUNT
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::precision_round;

    #[test]
    fn test_goodness_of_fit_daily_counts() {
        // Seven daily counts, mean 402/7, six degrees of freedom.
        let observed = vec![41, 48, 105, 58, 45, 54, 51];
        let result = goodness_of_fit(&observed).unwrap();
        assert_eq!(result.df, 6);
        assert_eq!(precision_round(result.statistic, 4), 49.2736);
        assert!(result.p_value < 1e-7);
    }

    #[test]
    fn test_goodness_of_fit_small_example() {
        let observed = vec![9, 15, 9, 8, 6, 7];
        let result = goodness_of_fit(&observed).unwrap();
        assert_eq!(result.df, 5);
        assert_eq!(precision_round(result.statistic, 4), 5.5556);
        assert_eq!(precision_round(result.p_value, 4), 0.3519);
    }

    #[test]
    fn test_independence_police_stop_data() {
        let observed =
            Table::from_rows(&[vec![1219, 36244], vec![3108, 239241]]).unwrap();
        let result = independence_test(&observed).unwrap();
        assert_eq!(result.summary.df, 1);
        assert_eq!(precision_round(result.summary.statistic, 4), 828.2999);
        assert!(result.summary.p_value < 1e-12);
        assert_eq!(precision_round(*result.expected.get(0, 0), 4), 579.3261);
        assert_eq!(precision_round(*result.residuals.get(0, 0), 4), 26.5765);
    }

    #[test]
    fn test_independence_depression_sleep_trouble() {
        // 3x2: depressed days (none / several / most) by sleep trouble.
        let observed = Table::from_rows(&[
            vec![2614, 4532],
            vec![676, 648],
            vec![247, 176],
        ])
        .unwrap();
        let result = independence_test(&observed).unwrap();
        assert_eq!(result.summary.df, 2);
        assert_eq!(precision_round(result.summary.statistic, 4), 162.0192);
        assert!(result.summary.p_value < 1e-30);

        // Expected counts recomputed from the marginals.
        let row_totals = observed.row_sums();
        let col_totals = observed.col_sums();
        let n = observed.total() as f64;
        for i in 0..3 {
            for j in 0..2 {
                let e = row_totals[i] as f64 * col_totals[j] as f64 / n;
                assert!((result.expected.get(i, j) - e).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_independence_expected_reproduces_grand_total() {
        let observed = Table::from_rows(&[vec![12, 7, 9], vec![5, 21, 14]]).unwrap();
        let result = independence_test(&observed).unwrap();
        assert!((result.expected.total() - observed.total() as f64).abs() < 1e-9);
    }

    #[test]
    fn test_summary_json_round_trip() {
        let observed = vec![9, 15, 9, 8, 6, 7];
        let summary = goodness_of_fit(&observed).unwrap();
        let json = summary.to_json().unwrap();
        let back: TestSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.df, summary.df);
        assert_eq!(back.statistic, summary.statistic);
        assert_eq!(back.p_value, summary.p_value);
        assert_eq!(back.null, NullModel::Uniform);
    }
}
