use std::io::ErrorKind;
use std::path::Path;

use crate::data::parser;
use crate::error::StatsError;

/// Result of loading a data file: parsed numbers and rejected lines, both in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedSample {
    pub numbers: Vec<f64>,
    pub malformed: Vec<String>,
}

impl LoadedSample {
    /// Partition lines into numbers and malformed entries.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut sample = LoadedSample::default();
        for line in lines {
            match parser::parse_line(line) {
                Ok(v) => sample.numbers.push(v),
                Err(raw) => sample.malformed.push(raw),
            }
        }
        sample
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

/// Load a text file with one value per line.
///
/// A missing file is `StatsError::NotFound`; an empty file yields an empty sample.
pub fn load_file(path: &Path) -> Result<LoadedSample, StatsError> {
    let content = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => StatsError::NotFound { path: path.to_path_buf() },
        _ => StatsError::Read { path: path.to_path_buf(), source: e },
    })?;

    let text = match String::from_utf8(content) {
        Ok(text) => text,
        // Fallback: treat as latin1 (each byte maps to same Unicode code point)
        Err(e) => e.as_bytes().iter().map(|&b| b as char).collect(),
    };

    let sample = LoadedSample::from_lines(text.lines());
    tracing::debug!(
        "Loaded {} numbers and {} malformed lines from {:?}",
        sample.numbers.len(),
        sample.malformed.len(),
        path
    );
    Ok(sample)
}
