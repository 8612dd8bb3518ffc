//! Errors
//!
//! Custom error types used throughout the `contingency` crate.
use thiserror::Error;

/// Errors that can occur while evaluating categorical association tests.
#[derive(Debug, Error)]
pub enum ContingencyError {
    /// Observed and expected tables do not line up.
    #[error("Shape mismatch: expected {0}, but {1} provided.")]
    InvalidShape(String, String),
    /// An expected count is zero or negative, making the statistic undefined.
    #[error("Expected count at cell ({0}, {1}) is {2}; every expected count must be strictly positive.")]
    DegenerateExpectation(usize, usize, f64),
    /// A denominator cell of a 2x2 table is zero.
    #[error("Cell {0} of the 2x2 table is zero; the odds ratio is undefined.")]
    DivisionByZero(String),
    /// Degrees of freedom below one.
    #[error("Degrees of freedom must be at least 1, but {0} provided.")]
    InvalidDegreesOfFreedom(usize),
    /// A negative or NaN test statistic.
    #[error("The test statistic must be a non-negative number, but {0} provided.")]
    InvalidStatistic(f64),
    /// Fewer categories than the test can work with.
    #[error("{0} requires at least {1} categories, but {2} provided.")]
    TooFewCategories(String, usize, usize),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to serialize a result to JSON.
    #[error("Unable to write result: {0}")]
    UnableToWrite(String),
}
