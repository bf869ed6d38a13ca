use crate::classifiers::decision_tree::DecisionError;
use crate::core::instances::Instance;
use crate::evaluation::{Estimator, Measurement, PerformanceEvaluator};
use std::collections::BTreeMap;

/// Accuracy and no-match rate over labelled records.
///
/// A record the classifier could not label counts as a miss for accuracy and
/// as a hit for `no_match_rate`. Records without a label are skipped.
/// Per-class recall is reported for each label seen when enabled.
pub struct BasicClassificationEvaluator<E: Estimator + Default> {
    weight_correct: E,
    no_match: E,
    recall: BTreeMap<i32, E>,
    show_recall_per_class: bool,
}

impl<E: Estimator + Default> BasicClassificationEvaluator<E> {
    pub fn new(show_recall_per_class: bool) -> Self {
        Self {
            weight_correct: E::default(),
            no_match: E::default(),
            recall: BTreeMap::new(),
            show_recall_per_class,
        }
    }

    pub fn new_with_default_flags() -> Self {
        Self::new(false)
    }
}

impl<E: Estimator + Default> Default for BasicClassificationEvaluator<E> {
    fn default() -> Self {
        Self::new_with_default_flags()
    }
}

impl<E: Estimator + Default> PerformanceEvaluator for BasicClassificationEvaluator<E> {
    fn reset(&mut self) {
        *self = Self::new(self.show_recall_per_class)
    }

    fn add_result(&mut self, example: &dyn Instance, outcome: &Result<i32, DecisionError>) {
        let Some(y) = example.class_value() else {
            return;
        };

        let hit = matches!(outcome, Ok(yhat) if *yhat == y);
        self.weight_correct.add(if hit { 1.0 } else { 0.0 });
        self.no_match.add(if outcome.is_err() { 1.0 } else { 0.0 });
        self.recall
            .entry(y)
            .or_default()
            .add(if hit { 1.0 } else { 0.0 });
    }

    fn performance(&self) -> Vec<Measurement> {
        let mut m = vec![
            Measurement::new("instances", self.weight_correct.count() as f64),
            Measurement::new("accuracy", self.weight_correct.estimation()),
            Measurement::new("no_match_rate", self.no_match.estimation()),
        ];
        if self.show_recall_per_class {
            for (label, est) in &self.recall {
                m.push(Measurement::new(
                    format!("recall_class_{label}"),
                    est.estimation(),
                ));
            }
        }
        m
    }
}
