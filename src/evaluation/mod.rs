mod estimators;
mod evaluators;
mod measurement;
mod resubstitution;

pub use estimators::{BasicEstimator, Estimator};
pub use evaluators::{BasicClassificationEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt};
pub use measurement::Measurement;
pub use resubstitution::evaluate;
