use std::path::PathBuf;

/// Fatal conditions that end a statistics run.
///
/// Lines that fail to parse are not errors; they are collected as data by
/// the loader.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("File '{}' not found.", path.display())]
    NotFound { path: PathBuf },
    #[error("Cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No valid numbers found in '{}'.", path.display())]
    NoValidData { path: PathBuf },
    #[error("Cannot write results to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StatsError {
    /// Process exit status for this error. Every failure is status 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
