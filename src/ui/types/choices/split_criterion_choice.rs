use crate::ui::types::choices::UIChoice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Empty parameter object so the wizard can still look under "params"
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct NoParams {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SplitCriterionKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SplitCriterionChoice {
    #[strum_discriminants(strum(
        message = "Information Gain",
        detailed_message = "Entropy reduction, the classic ID3 measure."
    ))]
    InfoGain(NoParams),
    #[strum_discriminants(strum(
        message = "Gini Gain",
        detailed_message = "Reduction in Gini impurity of the labels."
    ))]
    Gini(NoParams),
}

impl Default for SplitCriterionChoice {
    fn default() -> Self {
        Self::InfoGain(NoParams::default())
    }
}

impl UIChoice for SplitCriterionChoice {
    type Kind = SplitCriterionKind;

    fn schema() -> Schema {
        schema_for!(SplitCriterionChoice)
    }

    fn kind(&self) -> Self::Kind {
        self.into()
    }

    fn prompt_label() -> &'static str {
        "Choose a split criterion:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            SplitCriterionKind::InfoGain | SplitCriterionKind::Gini => Value::Object(Map::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;
    use strum::{EnumMessage, IntoEnumIterator};

    #[test]
    fn default_is_information_gain() {
        assert_eq!(
            SplitCriterionChoice::default().kind(),
            SplitCriterionKind::InfoGain
        );
    }

    #[test]
    fn tagged_enum_serialization() {
        let v = serde_json::to_value(SplitCriterionChoice::Gini(NoParams {})).unwrap();
        assert_eq!(v, json!({ "type": "gini", "params": {} }));
        let back: SplitCriterionChoice =
            serde_json::from_value(json!({ "type": "info-gain", "params": {} })).unwrap();
        assert_eq!(back, SplitCriterionChoice::default());
    }

    #[test]
    fn kinds_carry_menu_text() {
        let names: Vec<&'static str> = SplitCriterionKind::iter().map(Into::into).collect();
        assert_eq!(names, vec!["info-gain", "gini"]);
        assert_eq!(SplitCriterionKind::from_str("gini").unwrap(), SplitCriterionKind::Gini);
        assert_eq!(SplitCriterionKind::Gini.get_message(), Some("Gini Gain"));
    }

    #[test]
    fn from_parts_builds_the_variant() {
        let kind = SplitCriterionKind::Gini;
        let choice =
            SplitCriterionChoice::from_parts(kind, SplitCriterionChoice::default_params(kind))
                .unwrap();
        assert_eq!(choice, SplitCriterionChoice::Gini(NoParams {}));
    }
}
