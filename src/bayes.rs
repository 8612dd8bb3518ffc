//! Contingency-table Bayes factors
//!
//! The Bayes factor K compares the marginal likelihood of the observed
//! table under an association model against an independence model. The
//! crate treats the evaluator as an external collaborator behind the
//! [`BayesFactorEvaluator`] trait: callers hand over the 2-D frequency
//! table and a sampling scheme and receive a single positive scalar back.
//!
//! The shipped implementation is the Gunel and Dickey default, a ratio of
//! Dirichlet-multinomial marginal likelihoods. The special-function work
//! is delegated to `statrs`. K is returned on the log scale first because
//! real tables routinely push K past 1e100.
use crate::errors::ContingencyError;
use crate::table::Table;
use crate::utils::items_to_strings;
use serde::{Deserialize, Serialize};
use statrs::function::gamma::ln_gamma;
use std::str::FromStr;

/// How the observed table was sampled, which fixes the form of the
/// marginal likelihoods.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum SamplingScheme {
    /// One multinomial sample over all cells; only the grand total is fixed.
    JointMultinomial,
    /// One multinomial sample per row; row totals are fixed by design.
    IndependentMultinomial,
}

impl FromStr for SamplingScheme {
    type Err = ContingencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JointMultinomial" => Ok(SamplingScheme::JointMultinomial),
            "IndependentMultinomial" => Ok(SamplingScheme::IndependentMultinomial),
            _ => Err(ContingencyError::ParseString(
                s.to_string(),
                "SamplingScheme".to_string(),
                items_to_strings(vec!["JointMultinomial", "IndependentMultinomial"]),
            )),
        }
    }
}

/// External collaborator boundary for contingency-table Bayes factors.
///
/// `K > 1` favors association between the row and column variables,
/// `K < 1` favors independence.
pub trait BayesFactorEvaluator {
    /// Natural log of the Bayes factor K for association over independence.
    fn ln_bayes_factor(
        &self,
        observed: &Table<u64>,
        scheme: SamplingScheme,
    ) -> Result<f64, ContingencyError>;

    /// The Bayes factor K itself. Overflows to infinity for tables whose
    /// log Bayes factor exceeds roughly 709; prefer the log form there.
    fn bayes_factor(
        &self,
        observed: &Table<u64>,
        scheme: SamplingScheme,
    ) -> Result<f64, ContingencyError> {
        Ok(self.ln_bayes_factor(observed, scheme)?.exp())
    }
}

/// Gunel and Dickey default Bayes factor.
///
/// Every cell carries a symmetric Dirichlet prior with the given
/// concentration (1.0 by default); the independence model inherits the
/// marginal priors implied by summing the cell prior over rows and
/// columns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GunelDickey {
    /// Prior concentration per cell. Must be strictly positive.
    pub prior_concentration: f64,
}

impl Default for GunelDickey {
    fn default() -> Self {
        GunelDickey {
            prior_concentration: 1.0,
        }
    }
}

impl GunelDickey {
    fn validate(&self, observed: &Table<u64>) -> Result<(), ContingencyError> {
        if !(self.prior_concentration > 0.0) {
            return Err(ContingencyError::InvalidParameter(
                "prior_concentration".to_string(),
                "a positive real value".to_string(),
                self.prior_concentration.to_string(),
            ));
        }
        let (rows, cols) = observed.shape();
        if rows < 2 || cols < 2 {
            return Err(ContingencyError::TooFewCategories(
                "The contingency-table Bayes factor".to_string(),
                2,
                rows.min(cols),
            ));
        }
        Ok(())
    }
}

impl BayesFactorEvaluator for GunelDickey {
    fn ln_bayes_factor(
        &self,
        observed: &Table<u64>,
        scheme: SamplingScheme,
    ) -> Result<f64, ContingencyError> {
        self.validate(observed)?;
        let (rows, cols) = observed.shape();
        let a = self.prior_concentration;

        let cells: Vec<f64> = observed.data.iter().map(|&y| y as f64).collect();
        let row_totals: Vec<f64> = observed.row_sums().iter().map(|&y| y as f64).collect();
        let col_totals: Vec<f64> = observed.col_sums().iter().map(|&y| y as f64).collect();

        let ln_bf = match scheme {
            SamplingScheme::JointMultinomial => {
                // Association: one Dirichlet over all cells. Independence:
                // independent Dirichlets over the row and column marginals,
                // with concentrations summed from the cell prior.
                let m1 = ln_dirichlet_multinomial(&cells, a);
                let m0 = ln_dirichlet_multinomial(&row_totals, a * cols as f64)
                    + ln_dirichlet_multinomial(&col_totals, a * rows as f64);
                m1 - m0
            }
            SamplingScheme::IndependentMultinomial => {
                // Association: each row gets its own Dirichlet over columns.
                // Independence: all rows share one column distribution.
                let m1: f64 = (0..rows)
                    .map(|i| {
                        let row: Vec<f64> = cells[i * cols..(i + 1) * cols].to_vec();
                        ln_dirichlet_multinomial(&row, a)
                    })
                    .sum();
                let m0 = ln_dirichlet_multinomial(&col_totals, a * rows as f64);
                m1 - m0
            }
        };
        Ok(ln_bf)
    }
}

/// Log marginal likelihood of counts under a symmetric Dirichlet prior,
/// up to the multinomial coefficient (which cancels in the ratio):
/// `ln B(y + a) - ln B(a)` with `B` the multivariate beta function.
fn ln_dirichlet_multinomial(counts: &[f64], concentration: f64) -> f64 {
    let posterior: Vec<f64> = counts.iter().map(|&y| y + concentration).collect();
    let prior = vec![concentration; counts.len()];
    ln_multivariate_beta(&posterior) - ln_multivariate_beta(&prior)
}

fn ln_multivariate_beta(v: &[f64]) -> f64 {
    let sum: f64 = v.iter().sum();
    v.iter().map(|&x| ln_gamma(x)).sum::<f64>() - ln_gamma(sum)
}
