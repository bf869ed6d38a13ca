use anyhow::Result;
use std::io::Write;
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{EnumIter, EnumMessage, IntoStaticStr};

use crate::classifiers::DecisionTree;
use crate::classifiers::decision_tree::PathStyle;
use crate::core::dataset::Dataset;
use crate::evaluation::{BasicClassificationEvaluator, BasicEstimator, evaluate};
use crate::streams::CsvRecordStream;
use crate::ui::cli::console::report::{write_build_report, write_stats};
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::wizard::{prompt_params, prompt_path_until_ok, prompt_record};
use crate::ui::types::build::{BuildError, build_learner};
use crate::ui::types::choices::InductionParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumMessage, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum MenuAction {
    #[strum(message = "Print decision paths")]
    Paths,
    #[strum(message = "Print decision paths with labels")]
    NamedPaths,
    #[strum(message = "Print sample statistics")]
    Stats,
    #[strum(message = "Classify a record")]
    Classify,
    #[strum(message = "Score the tree on its training records")]
    Evaluate,
    #[strum(message = "Change induction settings")]
    Configure,
    #[strum(message = "Load records from a CSV file")]
    LoadRecords,
    #[strum(message = "Quit")]
    Quit,
}

impl MenuAction {
    fn text(self) -> String {
        self.get_message()
            .map(str::to_string)
            .unwrap_or_else(|| <&'static str>::from(self).to_string())
    }
}

/// Interactive session around one dataset and the tree built from it.
pub struct Console {
    dataset: Dataset,
    params: InductionParams,
    tree: DecisionTree,
}

impl Console {
    pub fn new(dataset: Dataset, params: InductionParams) -> Result<Self, BuildError> {
        let tree = build_learner(&params, &dataset)?;
        Ok(Self {
            dataset,
            params,
            tree,
        })
    }

    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    pub fn params(&self) -> &InductionParams {
        &self.params
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn run<D: PromptDriver, W: Write>(&mut self, driver: &D, out: &mut W) -> Result<()> {
        let actions: Vec<MenuAction> = MenuAction::iter().collect();
        let texts: Vec<String> = actions.iter().map(|a| a.text()).collect();
        loop {
            let picked = driver.ask_select(
                "What next?",
                "↑/↓ to navigate, ↵ to select",
                &texts,
                0,
            )?;
            let Some(&action) = actions.get(picked) else {
                continue;
            };
            if !self.dispatch(action, driver, out)? {
                return Ok(());
            }
        }
    }

    /// Runs one menu action. Returns `false` once the session should end.
    pub fn dispatch<D: PromptDriver, W: Write>(
        &mut self,
        action: MenuAction,
        driver: &D,
        out: &mut W,
    ) -> Result<bool> {
        match action {
            MenuAction::Paths => self.tree.print_paths(out, PathStyle::Codes)?,
            MenuAction::NamedPaths => self.tree.print_paths(out, PathStyle::Named)?,
            MenuAction::Stats => write_stats(&self.dataset, out)?,
            MenuAction::Classify => self.classify(driver, out)?,
            MenuAction::Evaluate => {
                let mut evaluator = BasicClassificationEvaluator::<BasicEstimator>::new(true);
                for measurement in evaluate(&self.tree, &self.dataset, &mut evaluator) {
                    writeln!(out, "{measurement}")?;
                }
            }
            MenuAction::Configure => {
                let params = prompt_params(driver, &self.params)?;
                self.rebuild(self.dataset.clone(), params, out)?;
            }
            MenuAction::LoadRecords => self.load_records(driver, out)?,
            MenuAction::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn classify<D: PromptDriver, W: Write>(&self, driver: &D, out: &mut W) -> Result<()> {
        let header = self.dataset.header();
        let record = prompt_record(driver, header)?;
        match self.tree.decide(&record) {
            Ok(label) => writeln!(
                out,
                "{} = {}",
                header.attribute_name(header.class_index()),
                header.describe_value(header.class_index(), label)
            )?,
            Err(e) => writeln!(out, "✗ {e}")?,
        }
        Ok(())
    }

    fn load_records<D: PromptDriver, W: Write>(&mut self, driver: &D, out: &mut W) -> Result<()> {
        let path = prompt_path_until_ok(
            driver,
            "Records file:",
            "Comma-separated labels, one record per line",
            "",
            &["csv"],
        )?;
        let loaded = CsvRecordStream::open(&path, self.dataset.header().clone())
            .and_then(|mut stream| Dataset::from_stream(&mut stream));
        match loaded {
            Ok(dataset) => self.rebuild(dataset, self.params.clone(), out),
            Err(e) => {
                eprintln!("✗ {}: {e}", path.display());
                Ok(())
            }
        }
    }

    /// Swaps in a tree built from `dataset` and `params`; on failure the
    /// current tree stays.
    fn rebuild<W: Write>(
        &mut self,
        dataset: Dataset,
        params: InductionParams,
        out: &mut W,
    ) -> Result<()> {
        match build_learner(&params, &dataset) {
            Ok(tree) => {
                write_build_report(&tree, out)?;
                self.tree = tree;
                self.dataset = dataset;
                self.params = params;
            }
            Err(e) => eprintln!("✗ {e}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streams::course_outcomes;
    use crate::testing::stubs::ScriptedDriver;

    fn console() -> Console {
        Console::new(course_outcomes().unwrap(), InductionParams::default()).unwrap()
    }

    fn index_of(action: MenuAction) -> usize {
        MenuAction::iter().position(|a| a == action).unwrap()
    }

    fn run(console: &mut Console, driver: &ScriptedDriver) -> String {
        let mut out = Vec::new();
        console.run(driver, &mut out).unwrap();
        assert!(driver.is_exhausted());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn menu_lists_messages() {
        let texts: Vec<String> = MenuAction::iter().map(MenuAction::text).collect();
        assert_eq!(texts.first().map(String::as_str), Some("Print decision paths"));
        assert_eq!(texts.last().map(String::as_str), Some("Quit"));
    }

    #[test]
    fn quit_ends_the_session_silently() {
        let driver = ScriptedDriver::new().select(index_of(MenuAction::Quit));
        assert_eq!(run(&mut console(), &driver), "");
    }

    #[test]
    fn paths_then_classify() {
        let driver = ScriptedDriver::new()
            .select(index_of(MenuAction::NamedPaths))
            .select(index_of(MenuAction::Classify))
            .select(2)
            .select(1)
            .select(4)
            .select(index_of(MenuAction::Quit));
        let text = run(&mut console(), &driver);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], "{ass2 => 0}{topic => ASTAR} => pass = true");
        assert_eq!(lines[16], "pass = true");
    }

    #[test]
    fn classify_reports_missing_branch() {
        // DTREE, true, 10 has no matching branch
        let driver = ScriptedDriver::new()
            .select(index_of(MenuAction::Classify))
            .select(1)
            .select(1)
            .select(2)
            .select(index_of(MenuAction::Quit));
        let text = run(&mut console(), &driver);
        assert_eq!(text, "✗ no branch for value 1 of field 0\n");
    }

    #[test]
    fn evaluate_prints_measurements() {
        let driver = ScriptedDriver::new()
            .select(index_of(MenuAction::Evaluate))
            .select(index_of(MenuAction::Quit));
        let text = run(&mut console(), &driver);
        assert!(text.starts_with("instances: 40.0000\naccuracy: 0.9000\nno_match_rate: 0.0000\n"));
        assert!(text.contains("recall_class_0: "));
    }

    #[test]
    fn configure_rebuilds_with_new_settings() {
        let mut console = console();
        let driver = ScriptedDriver::new()
            .select(index_of(MenuAction::Configure))
            .select(1)
            .u64(6)
            .bool(false)
            .select(index_of(MenuAction::Quit));
        let text = run(&mut console, &driver);
        assert!(text.starts_with("tree: "));
        assert_eq!(console.params().max_distinct_values, 6);
        assert_ne!(console.params(), &InductionParams::default());
    }

    #[test]
    fn load_records_replaces_the_dataset() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "topic,ass1,ass2,pass").unwrap();
        writeln!(file, "GAMES,true,20,true").unwrap();
        writeln!(file, "GAMES,false,0,false").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let mut console = console();
        let driver = ScriptedDriver::new()
            .select(index_of(MenuAction::LoadRecords))
            .string(&path)
            .select(index_of(MenuAction::Paths))
            .select(index_of(MenuAction::Quit));
        let text = run(&mut console, &driver);
        assert_eq!(console.dataset().len(), 2);
        assert!(text.contains("{1 => 1} => 1\n"));
        assert!(text.contains("{1 => 0} => 0\n"));
    }
}
