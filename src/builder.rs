//! Completion entry builder
//!
//! `CompletionBuilder` is an append-only accumulator. Each `add_*` method
//! shapes one category of input into entries and appends them in input order,
//! so the final list is ordered by the sequence of calls and then by record
//! order within each call. Nothing is sorted or deduplicated.
//!
//! Records without a usable name are skipped with a warning, since an entry
//! needs a non-empty trigger. A nameless class, library, hook family or panel
//! takes its children with it; a nameless enum does not, because its fields
//! never mention the enum name. Entries whose realm set has no label (codes 0
//! and 6) are emitted without an annotation and counted in
//! [`BuildStats::unannotated`].

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use tracing::{debug, trace, warn};

use crate::catalog::LIBRARY_EXCLUSIONS;
use crate::completion::{CompletionEntry, CompletionKind, OutputDocument};
use crate::models::{EnumCategory, Function, FunctionCategory};
use crate::realm::{Realm, RealmCode, RealmTable};
use crate::snippet::{format_arguments, format_signature};

/// Output grouping, in processing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Keywords,
    GlobalVariables,
    GlobalFunctions,
    ClassMethods,
    LibraryFunctions,
    Hooks,
    Panels,
    Enums,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Keywords => "keywords",
            Section::GlobalVariables => "global variables",
            Section::GlobalFunctions => "global functions",
            Section::ClassMethods => "class methods",
            Section::LibraryFunctions => "library functions",
            Section::Hooks => "hooks",
            Section::Panels => "panels",
            Section::Enums => "enums",
        };
        f.write_str(name)
    }
}

/// Fixed tables the builder consults
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    pub realms: RealmTable,
    /// Qualified `library.function` names never emitted as library entries
    pub library_exclusions: HashSet<String>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            realms: RealmTable::default(),
            library_exclusions: LIBRARY_EXCLUSIONS.iter().map(|name| name.to_string()).collect(),
        }
    }
}

/// Counters collected while building
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Entries emitted per section
    pub sections: BTreeMap<Section, usize>,
    /// Records dropped for lacking a name
    pub skipped: usize,
    /// Library functions dropped by the exclusion set
    pub excluded: usize,
    /// Entries emitted without a realm annotation
    pub unannotated: usize,
}

impl BuildStats {
    pub fn total(&self) -> usize {
        self.sections.values().sum()
    }

    pub fn count(&self, section: Section) -> usize {
        self.sections.get(&section).copied().unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct CompletionBuilder {
    config: BuilderConfig,
    entries: Vec<CompletionEntry>,
    stats: BuildStats,
}

impl CompletionBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            stats: BuildStats::default(),
        }
    }

    pub fn entries(&self) -> &[CompletionEntry] {
        &self.entries
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Consume the builder into the output document
    pub fn finish(self, scope: impl Into<String>) -> (OutputDocument, BuildStats) {
        let document = OutputDocument {
            scope: scope.into(),
            completions: self.entries,
        };
        (document, self.stats)
    }

    pub fn add_keywords(&mut self, keywords: &[&str]) -> usize {
        let start = self.entries.len();
        for keyword in keywords {
            self.push(Section::Keywords, CompletionEntry::plain(*keyword, CompletionKind::Keyword));
        }
        self.added_since(start)
    }

    pub fn add_global_variables(&mut self, names: &[&str]) -> usize {
        let start = self.entries.len();
        for name in names {
            self.push(
                Section::GlobalVariables,
                CompletionEntry::plain(*name, CompletionKind::GlobalVariable),
            );
        }
        self.added_since(start)
    }

    /// Globals with a known value, shown as `name = value`
    pub fn add_valued_globals(&mut self, globals: &[(&str, &str)]) -> usize {
        let start = self.entries.len();
        for (name, value) in globals {
            let entry = CompletionEntry::plain(*name, CompletionKind::GlobalVariable)
                .with_details(Some(format!("{} = {}", name, value)));
            self.push(Section::GlobalVariables, entry);
        }
        self.added_since(start)
    }

    pub fn add_global_functions(&mut self, functions: &[Function]) -> usize {
        let start = self.entries.len();
        for function in functions {
            let Some(name) = self.require_name(Section::GlobalFunctions, function.name(), "global function")
            else {
                continue;
            };
            self.push_callable(
                Section::GlobalFunctions,
                CompletionKind::GlobalFunction,
                name.to_string(),
                name,
                function,
                true,
            );
        }
        self.added_since(start)
    }

    /// Methods of each class, detailed as `Class:method(args)`
    pub fn add_class_methods(&mut self, classes: &[FunctionCategory]) -> usize {
        let start = self.entries.len();
        for class in classes {
            let Some(class_name) = self.require_category_name(Section::ClassMethods, class) else {
                continue;
            };
            debug!("Adding class {}", class_name);

            for method in class.functions() {
                let Some(name) = self.require_name(Section::ClassMethods, method.name(), class_name) else {
                    continue;
                };
                self.push_callable(
                    Section::ClassMethods,
                    CompletionKind::ClassMethod,
                    name.to_string(),
                    &format!("{}:{}", class_name, name),
                    method,
                    true,
                );
            }
        }
        self.added_since(start)
    }

    /// Library functions, triggered by their qualified `library.function` name
    pub fn add_library_functions(&mut self, libraries: &[FunctionCategory]) -> usize {
        let start = self.entries.len();
        for library in libraries {
            let Some(library_name) = self.require_category_name(Section::LibraryFunctions, library) else {
                continue;
            };
            debug!("Adding library {}", library_name);

            for function in library.functions() {
                let Some(name) = self.require_name(Section::LibraryFunctions, function.name(), library_name)
                else {
                    continue;
                };
                let qualified = format!("{}.{}", library_name, name);
                if self.config.library_exclusions.contains(&qualified) {
                    debug!("Skipping excluded library function {}", qualified);
                    self.stats.excluded += 1;
                    continue;
                }
                self.push_callable(
                    Section::LibraryFunctions,
                    CompletionKind::LibraryFunction,
                    qualified.clone(),
                    &qualified,
                    function,
                    true,
                );
            }
        }
        self.added_since(start)
    }

    /// Hooks insert only their name; arguments appear in the details
    pub fn add_hooks(&mut self, hooks: &[FunctionCategory]) -> usize {
        let start = self.entries.len();
        for family in hooks {
            let Some(family_name) = self.require_category_name(Section::Hooks, family) else {
                continue;
            };
            debug!("Adding hooks of {}", family_name);

            for hook in family.functions() {
                let Some(name) = self.require_name(Section::Hooks, hook.name(), family_name) else {
                    continue;
                };
                self.push_callable(
                    Section::Hooks,
                    CompletionKind::Hook,
                    name.to_string(),
                    &format!("{}:{}", family_name, name),
                    hook,
                    false,
                );
            }
        }
        self.added_since(start)
    }

    /// One entry per panel, followed by one per panel method
    pub fn add_panels(&mut self, panels: &[FunctionCategory]) -> usize {
        let start = self.entries.len();
        for panel in panels {
            let Some(panel_name) = self.require_category_name(Section::Panels, panel) else {
                continue;
            };
            debug!("Adding panel {}", panel_name);

            let entry = CompletionEntry::plain(panel_name, CompletionKind::Panel)
                .with_annotation(Some("Panel".to_string()))
                .with_details(Some(format!("vgui.Create(\"{}\")", panel_name)));
            self.push(Section::Panels, entry);

            for method in panel.functions() {
                let Some(name) = self.require_name(Section::Panels, method.name(), panel_name) else {
                    continue;
                };
                self.push_callable(
                    Section::Panels,
                    CompletionKind::PanelMethod,
                    name.to_string(),
                    &format!("{}:{}", panel_name, name),
                    method,
                    true,
                );
            }
        }
        self.added_since(start)
    }

    /// Enum fields, annotated with the realms of their enclosing enum
    pub fn add_enums(&mut self, enums: &[EnumCategory]) -> usize {
        let start = self.entries.len();
        for category in enums {
            let enum_name = match category.name() {
                Some(name) => name,
                None => {
                    warn!("Enum without a name, adding its {} fields anyway", category.fields().len());
                    "unnamed enum"
                }
            };
            debug!("Adding enum {}", enum_name);

            for field in category.fields() {
                let Some(name) = self.require_name(Section::Enums, field.name(), enum_name) else {
                    continue;
                };
                let annotation = self.annotate(category.realms.as_deref(), name);
                let details = field.value.as_ref().map(|value| format!("{} = {}", name, value));
                let entry = CompletionEntry::plain(name, CompletionKind::EnumField)
                    .with_annotation(annotation)
                    .with_details(details);
                self.push(Section::Enums, entry);
            }
        }
        self.added_since(start)
    }

    fn push_callable(
        &mut self,
        section: Section,
        kind: CompletionKind,
        trigger: String,
        signature_prefix: &str,
        function: &Function,
        insert_arguments: bool,
    ) {
        let arguments = function.arguments.as_deref();
        let contents = if insert_arguments {
            format!("{}{}", trigger, format_arguments(arguments))
        } else {
            trigger.clone()
        };
        let annotation = self.annotate(function.realms.as_deref(), &trigger);
        let entry = CompletionEntry::plain(trigger, kind)
            .with_contents(contents)
            .with_annotation(annotation)
            .with_details(Some(format_signature(signature_prefix, arguments)));
        self.push(section, entry);
    }

    fn annotate(&mut self, realms: Option<&[Realm]>, trigger: &str) -> Option<String> {
        match self.config.realms.resolve(realms) {
            Some(label) => Some(label.to_string()),
            None => {
                trace!(
                    "No realm label for {} (code {})",
                    trigger,
                    RealmCode::from_realms(realms.unwrap_or_default()).bits()
                );
                self.stats.unannotated += 1;
                None
            }
        }
    }

    fn require_name<'a>(&mut self, section: Section, name: Option<&'a str>, parent: &str) -> Option<&'a str> {
        if name.is_none() {
            self.skip(section, &format!("unnamed record in {}", parent));
        }
        name
    }

    fn require_category_name<'a>(&mut self, section: Section, category: &'a FunctionCategory) -> Option<&'a str> {
        let name = category.name();
        if name.is_none() {
            self.skip(
                section,
                &format!("unnamed category with {} functions", category.functions().len()),
            );
        }
        name
    }

    fn skip(&mut self, section: Section, reason: &str) {
        warn!("Skipping {} record: {}", section, reason);
        self.stats.skipped += 1;
    }

    fn push(&mut self, section: Section, entry: CompletionEntry) {
        trace!("{}: {}", section, entry.trigger);
        *self.stats.sections.entry(section).or_insert(0) += 1;
        self.entries.push(entry);
    }

    fn added_since(&self, start: usize) -> usize {
        self.entries.len() - start
    }
}
