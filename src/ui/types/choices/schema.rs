use anyhow::{Context, Result, anyhow, bail};
use schemars::Schema;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

pub fn schema_for<T: schemars::JsonSchema>() -> Schema {
    schemars::schema_for!(T)
}

/// Scalar properties of a plain struct schema, in declaration order.
/// Fields of other shapes are left out.
pub fn field_specs(root: &Schema) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;
    object_specs(root_obj, root_obj)
}

/// Same as [`field_specs`] for the `params` of one variant of a tagged enum.
pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;

    let alts = root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(|v| v.as_array())
        .context("missing oneOf/anyOf")?;

    for branch in alts {
        let bobj = branch.as_object().context("branch is not object")?;
        let Some(props) = bobj.get("properties").and_then(|v| v.as_object()) else {
            continue;
        };
        if !discriminant_matches(props, kind_key) {
            continue;
        }

        let Some(params_obj) = props.get("params").and_then(|v| v.as_object()) else {
            return Ok(vec![]);
        };
        let Some(params_obj) = resolve_ref_obj(root_obj, params_obj) else {
            return Ok(vec![]);
        };
        return object_specs(root_obj, params_obj);
    }

    bail!("no branch found for type={kind_key}");
}

fn object_specs(
    root_obj: &Map<String, Value>,
    obj: &Map<String, Value>,
) -> Result<Vec<FieldSpec>> {
    let Some(props) = obj.get("properties").and_then(|v| v.as_object()) else {
        return Ok(vec![]);
    };

    let required: Vec<&str> = obj
        .get("required")
        .and_then(|v| v.as_array())
        .map(|a| a.iter().filter_map(|v| v.as_str()).collect())
        .unwrap_or_default();

    let mut out = Vec::new();
    for (name, field_schema) in props {
        let mut fs_obj = field_schema
            .as_object()
            .context("field schema not object")?;

        if fs_obj.get("$ref").is_some() {
            fs_obj = resolve_ref_obj(root_obj, fs_obj)
                .ok_or_else(|| anyhow!("failed to resolve field $ref for '{name}'"))?;
        }

        let Some(kind) = detect_field_kind(fs_obj.get("type")) else {
            continue;
        };

        out.push(FieldSpec {
            name: name.clone(),
            title: fs_obj
                .get("title")
                .and_then(|v| v.as_str())
                .unwrap_or(name)
                .to_string(),
            description: fs_obj
                .get("description")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            required: required.contains(&name.as_str()),
            kind,
            default: fs_obj.get("default").cloned(),
            min: fs_obj
                .get("minimum")
                .or_else(|| fs_obj.get("exclusiveMinimum"))
                .and_then(|v| v.as_f64()),
            max: fs_obj
                .get("maximum")
                .or_else(|| fs_obj.get("exclusiveMaximum"))
                .and_then(|v| v.as_f64()),
        });
    }
    Ok(out)
}

fn discriminant_matches(props: &Map<String, Value>, kind_key: &str) -> bool {
    let Some(tobj) = props.get("type").and_then(|v| v.as_object()) else {
        return false;
    };

    if tobj.get("const").and_then(|v| v.as_str()) == Some(kind_key) {
        return true;
    }
    matches!(
        tobj.get("enum").and_then(|v| v.as_array()).map(Vec::as_slice),
        Some([only]) if only.as_str() == Some(kind_key)
    )
}

/// Resolve a local $ref like "#/$defs/NoParams" against the root object.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    match obj.get("$ref") {
        Some(Value::String(r)) => {
            let path = r.strip_prefix("#/")?;
            let mut cur: &Map<String, Value> = root_obj;
            for raw_seg in path.split('/') {
                // JSON Pointer unescape (~1 => /, ~0 => ~)
                let seg = raw_seg.replace("~1", "/").replace("~0", "~");
                cur = cur.get(&seg)?.as_object()?;
            }
            Some(cur)
        }
        _ => Some(obj),
    }
}

fn detect_field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    let kind_of = |s: &str| match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    };
    match ty {
        Some(Value::String(s)) => kind_of(s),
        // unions like ["null","integer"] for Option<T>
        Some(Value::Array(arr)) => arr.iter().filter_map(|v| v.as_str()).find_map(kind_of),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::SplitCriterionChoice;
    use serde_json::json;

    #[test]
    fn field_kinds_from_type_keyword() {
        assert_eq!(detect_field_kind(Some(&json!("integer"))), Some(FieldKind::Integer));
        assert_eq!(
            detect_field_kind(Some(&json!(["null", "number"]))),
            Some(FieldKind::Number)
        );
        assert_eq!(detect_field_kind(Some(&json!("object"))), None);
        assert_eq!(detect_field_kind(None), None);
    }

    #[test]
    fn choice_variants_without_params_have_no_specs() {
        let schema = schema_for::<SplitCriterionChoice>();
        assert!(specs_for_kind(&schema, "gini").unwrap().is_empty());
        assert!(specs_for_kind(&schema, "info-gain").unwrap().is_empty());
        assert!(specs_for_kind(&schema, "entropy").is_err());
    }

    #[test]
    fn refs_resolve_through_defs() {
        let root = json!({ "$defs": { "P": { "type": "integer" } } });
        let root = root.as_object().unwrap();
        let field = json!({ "$ref": "#/$defs/P" });
        let resolved = resolve_ref_obj(root, field.as_object().unwrap()).unwrap();
        assert_eq!(resolved.get("type"), Some(&json!("integer")));
    }
}
