use crate::classifiers::decision_tree::TreeBuilder;
use crate::classifiers::decision_tree::split_criteria::{
    GiniSplitCriterion, InfoGainSplitCriterion, SplitCriterion,
};
use crate::ui::types::choices::{InductionParams, SplitCriterionChoice};

impl From<SplitCriterionChoice> for Box<dyn SplitCriterion> {
    fn from(choice: SplitCriterionChoice) -> Self {
        match choice {
            SplitCriterionChoice::InfoGain(_) => Box::new(InfoGainSplitCriterion::new()),
            SplitCriterionChoice::Gini(_) => Box::new(GiniSplitCriterion::new()),
        }
    }
}

impl From<InductionParams> for TreeBuilder {
    fn from(params: InductionParams) -> Self {
        TreeBuilder::new()
            .with_split_criterion(params.split_criterion.into())
            .with_max_distinct_values(params.max_distinct_values)
            .with_trace(params.trace)
    }
}
