use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::validator::{ErrorMessage, Validation};
use inquire::{Confirm, CustomType, Select, Text};
use std::fmt::Display;

pub struct InquireDriver;

fn check_bounds<T: PartialOrd + Display + Copy>(
    x: T,
    min: Option<T>,
    max: Option<T>,
) -> Validation {
    let message = match (min, max) {
        (Some(lo), Some(hi)) if x < lo || x > hi => format!("Must be between {lo} and {hi}"),
        (Some(lo), None) if x < lo => format!("Must be ≥ {lo}"),
        (None, Some(hi)) if x > hi => format!("Must be ≤ {hi}"),
        _ => return Validation::Valid,
    };
    Validation::Invalid(ErrorMessage::Custom(message))
}

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        Ok(CustomType::<u64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(move |x: &u64| Ok(check_bounds(*x, min, max)))
            .prompt()?)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        Ok(CustomType::<f64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(move |x: &f64| Ok(check_bounds(*x, min, max)))
            .prompt()?)
    }

    fn ask_select(
        &self,
        title: &str,
        help: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize> {
        let picked = Select::new(title, options.to_vec())
            .with_starting_cursor(default)
            .with_help_message(help)
            .raw_prompt()?;
        Ok(picked.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(check_bounds(1u64, Some(1), Some(6)), Validation::Valid);
        assert_eq!(check_bounds(6u64, Some(1), Some(6)), Validation::Valid);
        assert!(matches!(check_bounds(0u64, Some(1), None), Validation::Invalid(_)));
        assert!(matches!(check_bounds(2.5, None, Some(2.0)), Validation::Invalid(_)));
        assert_eq!(check_bounds(7u64, None, None), Validation::Valid);
    }
}
