use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
enum Answer {
    Bool(bool),
    String(String),
    U64(u64),
    F64(f64),
    Select(usize),
}

/// Replays a fixed sequence of answers; any other question is an error.
#[derive(Default)]
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(self, answer: Answer) -> Self {
        self.answers.borrow_mut().push_back(answer);
        self
    }

    pub fn bool(self, v: bool) -> Self {
        self.push(Answer::Bool(v))
    }

    pub fn string(self, v: &str) -> Self {
        self.push(Answer::String(v.to_string()))
    }

    pub fn u64(self, v: u64) -> Self {
        self.push(Answer::U64(v))
    }

    pub fn f64(self, v: f64) -> Self {
        self.push(Answer::F64(v))
    }

    pub fn select(self, index: usize) -> Self {
        self.push(Answer::Select(index))
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        match self.answers.borrow_mut().pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("script ran out of answers at '{title}'"),
        }
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, _default: bool) -> Result<bool> {
        match self.next(title)? {
            Answer::Bool(v) => Ok(v),
            other => bail!("expected a bool for '{title}', script has {other:?}"),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, _default: &str) -> Result<String> {
        match self.next(title)? {
            Answer::String(v) => Ok(v),
            other => bail!("expected a string for '{title}', script has {other:?}"),
        }
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        _default: u64,
        _min: Option<u64>,
        _max: Option<u64>,
    ) -> Result<u64> {
        match self.next(title)? {
            Answer::U64(v) => Ok(v),
            other => bail!("expected an integer for '{title}', script has {other:?}"),
        }
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        _default: f64,
        _min: Option<f64>,
        _max: Option<f64>,
    ) -> Result<f64> {
        match self.next(title)? {
            Answer::F64(v) => Ok(v),
            other => bail!("expected a number for '{title}', script has {other:?}"),
        }
    }

    fn ask_select(
        &self,
        title: &str,
        _help: &str,
        options: &[String],
        _default: usize,
    ) -> Result<usize> {
        match self.next(title)? {
            Answer::Select(i) if i < options.len() => Ok(i),
            other => bail!("expected one of {} options for '{title}', script has {other:?}", options.len()),
        }
    }
}
