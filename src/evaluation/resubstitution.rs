use crate::classifiers::Classifier;
use crate::core::dataset::Dataset;
use crate::evaluation::{Measurement, PerformanceEvaluator};

/// Scores `classifier` on every record of `dataset`, in order, and returns
/// the evaluator's figures.
pub fn evaluate(
    classifier: &dyn Classifier,
    dataset: &Dataset,
    evaluator: &mut dyn PerformanceEvaluator,
) -> Vec<Measurement> {
    for instance in dataset.instances() {
        let outcome = classifier.decide(instance);
        evaluator.add_result(instance, &outcome);
    }
    evaluator.performance()
}
