use crate::classifiers::decision_tree::DEFAULT_MAX_DISTINCT_VALUES;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::SplitCriterionChoice;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_max_distinct_values() -> usize {
    DEFAULT_MAX_DISTINCT_VALUES
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InductionParams {
    #[serde(default)]
    #[schemars(skip)]
    pub split_criterion: SplitCriterionChoice,

    #[serde(default = "default_max_distinct_values")]
    #[schemars(
        title = "Maximum distinct values",
        description = "Values of a field beyond this many are ignored when splitting.",
        range(min = 1),
        default = "default_max_distinct_values"
    )]
    pub max_distinct_values: usize,

    #[serde(default)]
    #[schemars(
        title = "Trace induction?",
        description = "Record what the builder saw at every node."
    )]
    pub trace: bool,
}

impl Default for InductionParams {
    fn default() -> Self {
        Self {
            split_criterion: SplitCriterionChoice::default(),
            max_distinct_values: default_max_distinct_values(),
            trace: false,
        }
    }
}

impl InductionParams {
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.max_distinct_values == 0 {
            return Err(BuildError::InvalidParameter(
                "max_distinct_values must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, BuildError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BuildError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{FieldKind, NoParams, field_specs, schema_for};
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn missing_fields_apply_defaults() {
        let p: InductionParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p, InductionParams::default());
        assert_eq!(p.max_distinct_values, 6);
        assert!(!p.trace);
    }

    #[test]
    fn full_document_parses() {
        let p = InductionParams::from_json_str(
            r#"{ "split_criterion": { "type": "gini", "params": {} },
                 "max_distinct_values": 4, "trace": true }"#,
        )
        .unwrap();
        assert_eq!(p.split_criterion, SplitCriterionChoice::Gini(NoParams {}));
        assert_eq!(p.max_distinct_values, 4);
        assert!(p.trace);
    }

    #[test]
    fn zero_bound_is_rejected() {
        let err = InductionParams::from_json_str(r#"{ "max_distinct_values": 0 }"#).unwrap_err();
        assert!(matches!(err, BuildError::InvalidParameter(_)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = InductionParams::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, BuildError::Json(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "trace": true }}"#).unwrap();
        let p = InductionParams::from_path(file.path()).unwrap();
        assert!(p.trace);
        assert!(matches!(
            InductionParams::from_path("/definitely/not/here.json"),
            Err(BuildError::Io(_))
        ));
    }

    #[test]
    fn schema_exposes_scalar_fields_only() {
        let specs = field_specs(&schema_for::<InductionParams>()).unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["max_distinct_values", "trace"]);

        let bound = &specs[0];
        assert_eq!(bound.kind, FieldKind::Integer);
        assert_eq!(bound.title, "Maximum distinct values");
        assert_eq!(bound.min, Some(1.0));
        assert_eq!(bound.default, Some(json!(6)));
        assert_eq!(specs[1].kind, FieldKind::Boolean);
    }
}
