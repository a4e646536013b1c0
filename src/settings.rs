use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_OUTPUT_DIR: &str = "Fetched_Images";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where images go and how long a single request may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Relative paths resolve against the current working directory.
    pub output_dir: PathBuf,
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
