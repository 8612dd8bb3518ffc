// Modules
pub mod analysis;
pub mod bayes;
pub mod errors;
pub mod expectation;
pub mod odds;
pub mod pvalue;
pub mod residuals;
pub mod statistic;
pub mod table;
pub mod utils;

// Individual classes, and functions
pub use analysis::{goodness_of_fit, independence_test, IndependenceTest, TestSummary};
pub use bayes::{BayesFactorEvaluator, GunelDickey, SamplingScheme};
pub use expectation::NullModel;
pub use odds::odds_ratio;
pub use table::Table;
