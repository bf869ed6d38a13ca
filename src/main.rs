use aidt::core::dataset::Dataset;
use aidt::streams::{CsvRecordStream, course_outcomes, course_outcomes_header};
use aidt::ui::cli::console::{Console, write_build_report};
use aidt::ui::cli::drivers::InquireDriver;
use aidt::ui::types::choices::InductionParams;
use anyhow::{Context, Result, bail};
use std::io;
use std::path::PathBuf;

const USAGE: &str = "usage: aidt [--params FILE.json] [--verbose] [DATA.csv]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    params: Option<PathBuf>,
    verbose: bool,
    data: Option<PathBuf>,
    help: bool,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut parsed = Args::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "-v" | "--verbose" => parsed.verbose = true,
                "-p" | "--params" => {
                    let path = args.next().context("--params needs a file")?;
                    parsed.params = Some(PathBuf::from(path));
                }
                flag if flag.starts_with('-') => bail!("unknown option {flag}\n{USAGE}"),
                data => {
                    if parsed.data.is_some() {
                        bail!("more than one data file given\n{USAGE}");
                    }
                    parsed.data = Some(PathBuf::from(data));
                }
            }
        }
        Ok(parsed)
    }
}

fn load_dataset(path: Option<&PathBuf>) -> Result<Dataset> {
    let Some(path) = path else {
        return Ok(course_outcomes()?);
    };
    let mut stream = CsvRecordStream::open(path, course_outcomes_header())
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(Dataset::from_stream(&mut stream)?)
}

fn main() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let mut params = match &args.params {
        Some(path) => InductionParams::from_path(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => InductionParams::default(),
    };
    params.trace |= args.verbose;

    let dataset = load_dataset(args.data.as_ref())?;
    let mut console = Console::new(dataset, params).context("building the decision tree")?;

    let mut out = io::stdout().lock();
    write_build_report(console.tree(), &mut out)?;
    console.run(&InquireDriver, &mut out)
}
