//! Realm tags and their completion annotations
//!
//! Every Garry's Mod API is callable on some combination of the client,
//! server and menu states. A realm set is folded into a 3-bit code
//! (client=1, server=2, menu=4) which a fixed table maps to the label shown
//! next to the completion. Codes 0 and 6 have no label.

use serde::Deserialize;
use std::fmt;

/// Execution context an API is available in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Realm {
    Client,
    Server,
    Menu,
    /// Any tag the scraper emits that is not one of the three states
    #[serde(other)]
    Unknown,
}

impl Realm {
    pub const fn bit(self) -> u8 {
        match self {
            Realm::Client => 1,
            Realm::Server => 2,
            Realm::Menu => 4,
            Realm::Unknown => 0,
        }
    }
}

/// Bitmask of realms, always in `0..=7`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RealmCode(u8);

impl RealmCode {
    pub const EMPTY: RealmCode = RealmCode(0);

    /// Fold a realm set into its code; repeated tags count once
    pub fn from_realms(realms: &[Realm]) -> Self {
        RealmCode(realms.iter().fold(0, |code, realm| code | realm.bit()))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// Annotation text for a resolved realm code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RealmLabel {
    Client,
    Server,
    Shared,
    Menu,
    SharedMenu,
}

impl RealmLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            RealmLabel::Client => "Client",
            RealmLabel::Server => "Server",
            RealmLabel::Shared => "Shared",
            RealmLabel::Menu => "Menu",
            RealmLabel::SharedMenu => "SharedMenu",
        }
    }
}

impl fmt::Display for RealmLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labels indexed by realm code
pub const REALM_LABELS: [Option<RealmLabel>; 8] = [
    None,
    Some(RealmLabel::Client),
    Some(RealmLabel::Server),
    Some(RealmLabel::Shared),
    Some(RealmLabel::Menu),
    Some(RealmLabel::Shared),
    None,
    Some(RealmLabel::SharedMenu),
];

/// Fixed lookup from realm code to label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealmTable {
    labels: [Option<RealmLabel>; 8],
}

impl RealmTable {
    pub const fn new(labels: [Option<RealmLabel>; 8]) -> Self {
        Self { labels }
    }

    pub fn label(&self, code: RealmCode) -> Option<RealmLabel> {
        self.labels[usize::from(code.bits() & 0b111)]
    }

    pub fn is_mapped(&self, code: RealmCode) -> bool {
        self.label(code).is_some()
    }

    /// Resolve a realm set (absent counts as empty) to its label
    pub fn resolve(&self, realms: Option<&[Realm]>) -> Option<RealmLabel> {
        self.label(RealmCode::from_realms(realms.unwrap_or_default()))
    }
}

impl Default for RealmTable {
    fn default() -> Self {
        Self::new(REALM_LABELS)
    }
}
