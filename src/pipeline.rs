//! End-to-end generation: load, build, write

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, warn};

use crate::builder::{BuildStats, BuilderConfig, CompletionBuilder};
use crate::catalog::{GLOBAL_VARIABLES, KEYWORDS, VALUED_GLOBALS};
use crate::completion::OutputDocument;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::loader::{ApiReference, load_reference};
use crate::writer::write_document;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub completions: usize,
    pub stats: BuildStats,
}

/// Build the completion document from static catalogs plus `reference`
///
/// Categories are processed in a fixed order: keywords, global variables,
/// global functions, class methods, library functions, hooks, panels, enums.
pub fn build_document(
    reference: &ApiReference,
    scope: &str,
    config: BuilderConfig,
) -> (OutputDocument, BuildStats) {
    let mut builder = CompletionBuilder::new(config);

    builder.add_keywords(KEYWORDS);
    builder.add_global_variables(GLOBAL_VARIABLES);
    builder.add_valued_globals(VALUED_GLOBALS);
    builder.add_global_functions(&reference.global_functions);
    builder.add_class_methods(&reference.classes);
    builder.add_library_functions(&reference.libraries);
    builder.add_hooks(&reference.hooks);
    builder.add_panels(&reference.panels);
    builder.add_enums(&reference.enums);

    builder.finish(scope)
}

/// Run the whole pipeline once
pub fn generate(config: &GeneratorConfig) -> Result<RunSummary> {
    let start = Instant::now();

    info!("Loading API reference from {:?}", config.input_dir);
    let reference = load_reference(&config.input_dir)?;
    info!("Loaded {} top-level records", reference.record_count());

    let (document, stats) = build_document(&reference, &config.scope, BuilderConfig::default());
    for (section, count) in &stats.sections {
        info!("{}: {} completions", section, count);
    }
    if stats.skipped > 0 {
        warn!("Skipped {} records without a name", stats.skipped);
    }
    if stats.unannotated > 0 {
        info!("{} completions have no realm annotation", stats.unannotated);
    }

    write_document(&config.output, &document)?;
    info!(
        "Wrote {} completions to {:?} in {:?}",
        document.completions.len(),
        config.output,
        start.elapsed()
    );

    Ok(RunSummary {
        output: config.output.clone(),
        completions: document.completions.len(),
        stats,
    })
}
