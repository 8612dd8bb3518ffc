//! Chi-squared upper-tail probability
//!
//! Maps a statistic and its degrees of freedom to the probability that a
//! chi-squared variable with that many degrees of freedom exceeds the
//! statistic. The regularized incomplete gamma evaluation is delegated to
//! `statrs` rather than reimplemented.
use crate::errors::ContingencyError;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Upper-tail p-value of the chi-squared distribution.
///
/// Non-increasing in `statistic` for fixed `df`; `p(0, df) == 1` for any
/// `df >= 1`. Fails if `df < 1` or the statistic is negative or NaN.
pub fn chi_squared_p_value(statistic: f64, df: usize) -> Result<f64, ContingencyError> {
    if df < 1 {
        return Err(ContingencyError::InvalidDegreesOfFreedom(df));
    }
    if statistic.is_nan() || statistic < 0.0 {
        return Err(ContingencyError::InvalidStatistic(statistic));
    }
    let dist = ChiSquared::new(df as f64)
        .map_err(|_| ContingencyError::InvalidDegreesOfFreedom(df))?;
    Ok((1.0 - dist.cdf(statistic)).clamp(0.0, 1.0))
}
