pub mod builder;
pub mod catalog;
pub mod completion;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod realm;
pub mod serde_helpers;
pub mod snippet;
pub mod writer;

pub use builder::{BuildStats, BuilderConfig, CompletionBuilder, Section};
pub use completion::{CompletionEntry, CompletionKind, OutputDocument};
pub use config::GeneratorConfig;
pub use error::{GeneratorError, Result};
pub use pipeline::{RunSummary, build_document, generate};
