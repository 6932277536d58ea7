use std::fmt::Write as _;
use std::path::PathBuf;

use crate::error::StatsError;
use crate::processing::statistics::SampleStats;

/// Snapshot of one run, built once all input has been consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    pub stats: SampleStats,
    pub malformed: Vec<String>,
    pub elapsed_secs: f64,
}

impl StatisticsReport {
    /// The statistics block: Mean, Median, Mode, Variance, Standard Deviation.
    pub fn summary(&self) -> String {
        let s = &self.stats;
        let modes: Vec<String> = s.modes.iter().map(|&m| format_float(m)).collect();
        format!(
            "Mean: {}\nMedian: {}\nMode: [{}]\nVariance: {}\nStandard Deviation: {}\n",
            format_float(s.mean),
            format_float(s.median),
            modes.join(", "),
            format_float(s.variance),
            format_float(s.std_dev)
        )
    }

    /// Full text written to the results file.
    pub fn render(&self) -> String {
        let mut out = self.summary();
        if !self.malformed.is_empty() {
            out.push_str("\nInvalid data:\n");
            for line in &self.malformed {
                out.push_str(line);
                out.push('\n');
            }
        }
        let _ = writeln!(out, "Execution time: {:.6} seconds", self.elapsed_secs);
        out
    }
}

/// Shortest round-trip rendering with a `.0` on integral values.
///
/// Magnitudes below 1e-4 or from 1e16 up use exponent form with a signed,
/// at least two-digit exponent (`1e+16`, `1.5e-07`).
pub fn format_float(v: f64) -> String {
    let abs = v.abs();
    if v == 0.0 || (1e-4..1e16).contains(&abs) {
        return format!("{v:?}");
    }

    let exp_form = format!("{v:e}");
    match exp_form.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => exp_form,
    }
}

/// Writes reports to a results file and the log stream.
pub struct ReportWriter {
    output: PathBuf,
}

impl ReportWriter {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self { output: output.into() }
    }

    /// Log the summary and overwrite the results file with the full report.
    pub fn write(&self, report: &StatisticsReport) -> Result<(), StatsError> {
        tracing::info!("Results:\n{}", report.summary());
        tracing::info!("Execution time: {:.3} seconds", report.elapsed_secs);

        std::fs::write(&self.output, report.render()).map_err(|e| StatsError::Write {
            path: self.output.clone(),
            source: e,
        })?;
        tracing::debug!("Wrote results to {:?}", self.output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(malformed: &[&str]) -> StatisticsReport {
        StatisticsReport {
            stats: SampleStats::compute(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
            malformed: malformed.iter().map(|s| s.to_string()).collect(),
            elapsed_secs: 0.0123456789,
        }
    }

    #[test]
    fn summary_lines() {
        let text = report(&[]).summary();
        assert_eq!(
            text,
            "Mean: 2.5\nMedian: 2.5\nMode: [1.0, 2.0, 3.0, 4.0]\nVariance: 1.25\n\
             Standard Deviation: 1.118033988749895\n"
        );
    }

    #[test]
    fn exponent_values_use_signed_two_digit_exponents() {
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(-1.5e-7), "-1.5e-07");
        assert_eq!(format_float(2.5e300), "2.5e+300");
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-3.0), "-3.0");
    }

    #[test]
    fn mode_line_with_exponent_values() {
        let r = StatisticsReport {
            stats: SampleStats::compute(&[1e16, 1e-5]).unwrap(),
            malformed: Vec::new(),
            elapsed_secs: 0.0,
        };
        assert!(r.summary().contains("Mode: [1e+16, 1e-05]\n"));
    }

    #[test]
    fn render_without_malformed_section() {
        let text = report(&[]).render();
        assert!(!text.contains("Invalid data:"));
        assert!(text.ends_with("Standard Deviation: 1.118033988749895\nExecution time: 0.012346 seconds\n"));
    }

    #[test]
    fn render_lists_malformed_lines_verbatim() {
        let text = report(&["ABC", "", "1,5"]).render();
        assert!(text.contains("\n\nInvalid data:\nABC\n\n1,5\nExecution time: 0.012346 seconds\n"));
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale contents that are longer than the report ".repeat(20)).unwrap();

        let r = report(&["x"]);
        ReportWriter::new(&path).write(&r).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r.render());
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = ReportWriter::new(&path).write(&report(&[])).unwrap_err();
        assert!(matches!(err, StatsError::Write { .. }));
    }
}
