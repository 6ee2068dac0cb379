//! Localized string lookup

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// String table supplied by the host
pub trait Locale {
    /// Localized text for `key`, `None` when the key is unknown
    fn get_value(&self, key: &str) -> Option<&str>;
}

/// Locale backed by an in-memory map
///
/// Loadable from TOML or RON through [`Config`], e.g.
///
/// ```toml
/// [strings]
/// GEN_ABOUT = "About"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleTable {
    /// Key to text
    pub strings: HashMap<String, String>,
}

impl LocaleTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry (builder pattern)
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(key.into(), value.into());
        self
    }
}

impl Locale for LocaleTable {
    fn get_value(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }
}

impl Config for LocaleTable {}
