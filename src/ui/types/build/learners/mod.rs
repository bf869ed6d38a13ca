use crate::classifiers::DecisionTree;
use crate::classifiers::decision_tree::TreeBuilder;
use crate::core::dataset::Dataset;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::InductionParams;

mod decision_tree;

pub fn build_learner(params: &InductionParams, dataset: &Dataset) -> Result<DecisionTree, BuildError> {
    params.validate()?;
    Ok(TreeBuilder::from(params.clone()).build(dataset)?)
}
