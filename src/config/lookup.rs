//! Extra lookup-table entries from the config file.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::render::Lookup;

/// `[lookup]` section: entries added on top of the built-in tables.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LookupConfig {
    /// Sport name as it appears in alerts -> display name.
    #[serde(default)]
    pub sports: BTreeMap<String, String>,
    /// Bookmaker name -> link shown when the alert has none.
    #[serde(default)]
    pub bookmaker_urls: BTreeMap<String, String>,
}

impl LookupConfig {
    /// Built-in tables with this section's entries applied.
    #[must_use]
    pub fn to_lookup(&self) -> Lookup {
        Lookup::default().extend(self.sports.clone(), self.bookmaker_urls.clone())
    }
}
