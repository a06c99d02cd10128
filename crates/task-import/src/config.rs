//! Import run configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT_FILE: &str = "habitica_tasks.json";

/// Pause after each write request. Habitica allows 30 requests per minute.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(1100);

/// Settings for a single import run.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Path of the JSON export to import.
    pub input: PathBuf,
    /// Fixed delay after every task submission and tag creation.
    pub request_delay: Duration,
}

impl ImportConfig {
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }

    #[must_use]
    pub fn with_request_delay(mut self, request_delay: Duration) -> Self {
        self.request_delay = request_delay;
        self
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_FILE)
    }
}

/// Wait out the fixed request delay.
pub(crate) async fn pace(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
