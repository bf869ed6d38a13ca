use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use strum::{EnumMessage, IntoEnumIterator};

use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{
    FieldKind, FieldSpec, InductionParams, SplitCriterionChoice, UIChoice, field_specs,
    schema_for, specs_for_kind,
};
use std::sync::Arc;

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn kind_items<K>() -> Vec<(K, String)>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            (k, text)
        })
        .collect()
}

/// Offers every kind of `C`, then asks for the picked kind's parameters.
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D, current: &C) -> Result<C> {
    let items = kind_items::<C::Kind>();
    let texts: Vec<String> = items.iter().map(|(_, text)| text.clone()).collect();
    let start = items
        .iter()
        .position(|(k, _)| *k == current.kind())
        .unwrap_or(0);

    let picked = driver.ask_select(
        C::prompt_label(),
        C::prompt_help().unwrap_or(""),
        &texts,
        start,
    )?;
    let (kind, _) = items.get(picked).context("selection out of range")?;

    let key: &'static str = (*kind).into();
    let specs = specs_for_kind(&C::schema(), key)?;
    let defaults = C::default_params(*kind);
    let params = ask_fields(driver, &specs, &defaults)?;
    C::from_parts(*kind, Value::Object(params))
}

/// Walks the induction settings, starting from `current`.
pub fn prompt_params<D: PromptDriver>(
    driver: &D,
    current: &InductionParams,
) -> Result<InductionParams> {
    let split_criterion: SplitCriterionChoice = prompt_choice(driver, &current.split_criterion)?;

    let specs = field_specs(&schema_for::<InductionParams>())?;
    let mut params = ask_fields(driver, &specs, &serde_json::to_value(current)?)?;
    params.insert(
        "split_criterion".into(),
        serde_json::to_value(split_criterion)?,
    );

    let params: InductionParams = serde_json::from_value(Value::Object(params))?;
    params.validate()?;
    Ok(params)
}

fn ask_fields<D: PromptDriver>(
    driver: &D,
    specs: &[FieldSpec],
    current: &Value,
) -> Result<Map<String, Value>> {
    let mut params = Map::new();
    for s in specs {
        let init = current.get(&s.name).cloned().or_else(|| s.default.clone());
        let help = s.description.as_deref().unwrap_or("");

        let val = match s.kind {
            FieldKind::Boolean => {
                let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
                Value::Bool(driver.ask_bool(&s.title, help, def)?)
            }
            FieldKind::String => {
                let def = init
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_default();
                Value::String(driver.ask_string(&s.title, help, &def)?)
            }
            FieldKind::Integer => {
                let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
                Value::from(driver.ask_u64(
                    &s.title,
                    help,
                    def,
                    s.min.map(|x| x as u64),
                    s.max.map(|x| x as u64),
                )?)
            }
            FieldKind::Number => {
                let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
                Value::from(driver.ask_f64(&s.title, help, def, s.min, s.max)?)
            }
        };
        params.insert(s.name.clone(), val);
    }
    Ok(params)
}

/// Asks for every predictor of `header` by label. The label slot is set to
/// the first class value, which classification ignores.
pub fn prompt_record<D: PromptDriver>(
    driver: &D,
    header: &Arc<InstanceHeader>,
) -> Result<DenseInstance> {
    let class_index = header.class_index();
    let mut values = Vec::with_capacity(header.number_of_attributes());
    for (index, attribute) in header.attributes.iter().enumerate() {
        let code = if index == class_index {
            attribute.codes.first().copied().unwrap_or(0)
        } else {
            let picked = driver.ask_select(
                &format!("{}:", attribute.name()),
                "↑/↓ to navigate, ↵ to select",
                &attribute.values,
                0,
            )?;
            *attribute
                .codes
                .get(picked)
                .with_context(|| format!("no value #{picked} for {}", attribute.name()))?
        };
        values.push(code);
    }
    Ok(DenseInstance::new(Arc::clone(header), values))
}

fn validate_path_str(
    input: &str,
    must_exist: bool,
    must_be_file: bool,
    allowed_exts: &[&str],
) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if must_exist && !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if must_be_file && p.exists() && !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    if !allowed_exts.is_empty() {
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if allowed_exts.iter().any(|e| e.eq_ignore_ascii_case(ext)) => {}
            _ => return Err(format!("Expected a .{} file", allowed_exts.join(" / ."))),
        }
    }
    Ok(())
}

pub fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
    allowed_exts: &[&str],
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate_path_str(&answer, true, true, allowed_exts) {
            Ok(()) => return Ok(PathBuf::from(answer.trim())),
            Err(msg) => {
                eprintln!("✗ {}", msg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::Instance;
    use crate::streams::course_outcomes_header;
    use crate::testing::stubs::ScriptedDriver;
    use crate::ui::types::choices::{NoParams, SplitCriterionKind};

    #[test]
    fn kind_items_carry_messages() {
        let items = kind_items::<SplitCriterionKind>();
        assert_eq!(items.len(), 2);
        assert!(items[0].1.starts_with("Information Gain"));
        assert_eq!(items[1].0, SplitCriterionKind::Gini);
    }

    #[test]
    fn params_wizard_reads_every_field() {
        let driver = ScriptedDriver::new()
            .select(1)
            .u64(3)
            .bool(true);
        let params = prompt_params(&driver, &InductionParams::default()).unwrap();
        assert_eq!(
            params,
            InductionParams {
                split_criterion: SplitCriterionChoice::Gini(NoParams {}),
                max_distinct_values: 3,
                trace: true,
            }
        );
        assert!(driver.is_exhausted());
    }

    #[test]
    fn record_prompt_maps_labels_to_codes() {
        let header = course_outcomes_header();
        // GAMES, true, 20
        let driver = ScriptedDriver::new().select(2).select(1).select(4);
        let record = prompt_record(&driver, &header).unwrap();
        assert_eq!(record.to_vec(), vec![2, 1, 20, 0]);
        assert_eq!(record.class_index(), 3);
    }

    #[test]
    fn path_validation() {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let path = file.path().to_string_lossy().into_owned();
        assert!(validate_path_str(&path, true, true, &["csv"]).is_ok());
        assert!(validate_path_str(&path, true, true, &["json"]).is_err());
        assert!(validate_path_str("   ", false, false, &[]).is_err());
        assert!(validate_path_str("/no/such/file.csv", true, true, &["csv"]).is_err());

        let driver = ScriptedDriver::new().string("/no/such/file.csv").string(&path);
        let got = prompt_path_until_ok(&driver, "Records file", "", "", &["csv"]).unwrap();
        assert_eq!(got, PathBuf::from(&path));
    }
}
