//! Loading of the scraped API reference
//!
//! The scraper writes one JSON array per category into a single directory.
//! Every file is required; a missing or malformed file aborts the run.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{GeneratorError, Result};
use crate::models::{EnumCategory, Function, FunctionCategory};

pub const CLASSES_FILE: &str = "classes.json";
pub const ENUMS_FILE: &str = "enums.json";
pub const GLOBAL_FUNCTIONS_FILE: &str = "global-functions.json";
pub const HOOKS_FILE: &str = "hooks.json";
pub const LIBRARIES_FILE: &str = "libraries.json";
pub const PANELS_FILE: &str = "panels.json";

/// Every file the loader expects in the input directory
pub const REFERENCE_FILES: [&str; 6] = [
    CLASSES_FILE,
    ENUMS_FILE,
    GLOBAL_FUNCTIONS_FILE,
    HOOKS_FILE,
    LIBRARIES_FILE,
    PANELS_FILE,
];

/// All scraped collections, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiReference {
    pub classes: Vec<FunctionCategory>,
    pub enums: Vec<EnumCategory>,
    pub global_functions: Vec<Function>,
    pub hooks: Vec<FunctionCategory>,
    pub libraries: Vec<FunctionCategory>,
    pub panels: Vec<FunctionCategory>,
}

impl ApiReference {
    pub fn record_count(&self) -> usize {
        self.classes.len()
            + self.enums.len()
            + self.global_functions.len()
            + self.hooks.len()
            + self.libraries.len()
            + self.panels.len()
    }
}

/// Read every collection from `input_dir`
pub fn load_reference(input_dir: &Path) -> Result<ApiReference> {
    Ok(ApiReference {
        classes: load_collection(input_dir, CLASSES_FILE)?,
        enums: load_collection(input_dir, ENUMS_FILE)?,
        global_functions: load_collection(input_dir, GLOBAL_FUNCTIONS_FILE)?,
        hooks: load_collection(input_dir, HOOKS_FILE)?,
        libraries: load_collection(input_dir, LIBRARIES_FILE)?,
        panels: load_collection(input_dir, PANELS_FILE)?,
    })
}

/// Read one JSON array of records
pub fn load_collection<T: DeserializeOwned>(input_dir: &Path, file_name: &str) -> Result<Vec<T>> {
    let path = input_dir.join(file_name);
    let text = fs::read_to_string(&path).map_err(|source| GeneratorError::Read {
        path: path.clone(),
        source,
    })?;
    let records: Vec<T> = serde_json::from_str(&text).map_err(|source| GeneratorError::Parse {
        path: path.clone(),
        source,
    })?;

    debug!("Loaded {} records from {:?}", records.len(), path);
    Ok(records)
}
