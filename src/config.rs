//! Run configuration

use std::path::PathBuf;

use crate::completion::DEFAULT_SCOPE;

/// Directory the scraper writes its collections to
pub const DEFAULT_INPUT_DIR: &str = "output";

/// Where the completion index is written
pub const DEFAULT_OUTPUT_PATH: &str = "output.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub scope: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            scope: DEFAULT_SCOPE.to_string(),
        }
    }
}
