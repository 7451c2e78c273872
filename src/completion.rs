//! Completion entries and the output document
//!
//! The output mirrors the Sublime Text `.sublime-completions` format:
//! a `scope` selector plus a list of entries. `kind` is either the bare
//! string `"keyword"` or a `[kind, symbol, label]` triple.

use serde::{Serialize, Serializer};

/// Scope selector the completions apply to
pub const DEFAULT_SCOPE: &str = "source.lua - keyword.control.lua - constant.language.lua - string";

/// UI category of a completion entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    Keyword,
    GlobalVariable,
    GlobalFunction,
    ClassMethod,
    LibraryFunction,
    Hook,
    Panel,
    PanelMethod,
    EnumField,
}

impl CompletionKind {
    /// The `[kind, symbol, label]` triple, or `None` for plain keywords
    pub const fn triple(self) -> Option<[&'static str; 3]> {
        match self {
            CompletionKind::Keyword => None,
            CompletionKind::GlobalVariable => Some(["namespace", "G", "Global Variable"]),
            CompletionKind::GlobalFunction => Some(["function", "f", "Global"]),
            CompletionKind::ClassMethod => Some(["function", "c", "Class"]),
            CompletionKind::LibraryFunction => Some(["function", "f", "Function"]),
            CompletionKind::Hook => Some(["snippet", "H", "Hook"]),
            CompletionKind::Panel => Some(["navigation", "P", "Panel"]),
            CompletionKind::PanelMethod => Some(["markup", "m", "Panel Method"]),
            CompletionKind::EnumField => Some(["variable", "E", "Enum"]),
        }
    }
}

impl Serialize for CompletionKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.triple() {
            Some(triple) => triple.serialize(serializer),
            None => serializer.serialize_str("keyword"),
        }
    }
}

/// One autocomplete item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionEntry {
    pub trigger: String,
    pub contents: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    pub kind: CompletionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl CompletionEntry {
    /// Entry whose inserted text equals its trigger
    pub fn plain(trigger: impl Into<String>, kind: CompletionKind) -> Self {
        let trigger = trigger.into();
        Self {
            contents: trigger.clone(),
            trigger,
            annotation: None,
            kind,
            details: None,
        }
    }

    pub fn with_contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = contents.into();
        self
    }

    pub fn with_annotation(mut self, annotation: Option<String>) -> Self {
        self.annotation = annotation;
        self
    }

    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.details = details;
        self
    }
}

/// The serialized completion index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputDocument {
    pub scope: String,
    pub completions: Vec<CompletionEntry>,
}
