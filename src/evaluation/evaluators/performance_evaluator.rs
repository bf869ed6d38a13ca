use crate::classifiers::decision_tree::DecisionError;
use crate::core::instances::Instance;
use crate::evaluation::Measurement;
use std::collections::HashMap;

/// Accumulates classifier outcomes against ground truth.
///
/// Each call to [`add_result`](PerformanceEvaluator::add_result) pairs a
/// labelled record with what the classifier answered for it, including the
/// answers that are not a label at all.
pub trait PerformanceEvaluator {
    /// Clears every accumulated figure.
    fn reset(&mut self);

    fn add_result(&mut self, example: &dyn Instance, outcome: &Result<i32, DecisionError>);

    fn performance(&self) -> Vec<Measurement>;
}

pub trait PerformanceEvaluatorExt {
    /// `(name, value)` for each requested metric, in request order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).into_iter().next().and_then(|(_, v)| v)
    }
}

impl<T: PerformanceEvaluator + ?Sized> PerformanceEvaluatorExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let map: HashMap<_, _> = self
            .performance()
            .into_iter()
            .map(|m| (m.name, m.value))
            .collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }
}
