//! Descriptive statistics over a text file of numbers, one per line.
//!
//! The pipeline is strictly sequential: [`data::loader`] partitions lines into
//! numbers and malformed entries, [`processing::statistics`] computes the
//! summary, and [`report::writer`] emits it to the log and a results file.

pub mod data;
pub mod error;
pub mod processing;
pub mod report;

use std::path::PathBuf;
use std::time::Instant;

use data::loader::load_file;
use error::StatsError;
use processing::statistics::SampleStats;
use report::writer::{ReportWriter, StatisticsReport};

/// Results file written in the working directory.
pub const RESULTS_FILE: &str = "StatisticsResults.txt";

/// Inputs for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl RunOptions {
    /// Read `input`, write to [`RESULTS_FILE`] in the working directory.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(RESULTS_FILE),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

/// Load, compute and write. Nothing is written unless at least one number parsed.
pub fn run(options: &RunOptions) -> Result<StatisticsReport, StatsError> {
    let start = Instant::now();

    let sample = load_file(&options.input)?;
    let stats = SampleStats::compute(&sample.numbers).ok_or_else(|| StatsError::NoValidData {
        path: options.input.clone(),
    })?;

    let report = StatisticsReport {
        stats,
        malformed: sample.malformed,
        elapsed_secs: start.elapsed().as_secs_f64(),
    };
    ReportWriter::new(&options.output).write(&report)?;
    Ok(report)
}
