//! Input records produced by the wiki scraper
//!
//! Only the fields the completion index needs are modelled; anything else
//! the scraper emits (descriptions, return types, source links) is ignored.

use serde::Deserialize;

use crate::realm::Realm;
use crate::serde_helpers::{deserialize_default, deserialize_rendered};

/// A single function parameter
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Argument {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: String,
    #[serde(default, deserialize_with = "deserialize_default")]
    pub default: Option<String>,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A global function, method, library function, hook or panel method
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Function {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub arguments: Option<Vec<Argument>>,
    #[serde(default)]
    pub realms: Option<Vec<Realm>>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<Argument>) -> Self {
        self.arguments = Some(arguments);
        self
    }

    pub fn with_realms(mut self, realms: Vec<Realm>) -> Self {
        self.realms = Some(realms);
        self
    }

    /// Name, if present and non-empty
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }
}

/// A named group of functions: a class, library, hook family or panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FunctionCategory {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub functions: Option<Vec<Function>>,
}

impl FunctionCategory {
    pub fn new(name: impl Into<String>, functions: Vec<Function>) -> Self {
        Self {
            name: Some(name.into()),
            functions: Some(functions),
        }
    }

    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn functions(&self) -> &[Function] {
        self.functions.as_deref().unwrap_or_default()
    }
}

/// One enumeration constant
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnumField {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_rendered")]
    pub value: Option<String>,
}

impl EnumField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }
}

/// An enumeration; its realms apply to every field
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnumCategory {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub realms: Option<Vec<Realm>>,
    #[serde(default)]
    pub fields: Option<Vec<EnumField>>,
}

impl EnumCategory {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn fields(&self) -> &[EnumField] {
        self.fields.as_deref().unwrap_or_default()
    }
}

fn non_empty(name: &Option<String>) -> Option<&str> {
    name.as_deref().filter(|name| !name.is_empty())
}
