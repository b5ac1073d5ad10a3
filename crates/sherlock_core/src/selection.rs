use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::SiteEntry;

/// Inclusion value given to sites when a selection is created or a site comes into scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultSelection {
    All,
    #[default]
    None,
}

impl DefaultSelection {
    pub fn included(self) -> bool {
        matches!(self, DefaultSelection::All)
    }
}

/// Per-session inclusion state, keyed by the names of the currently visible sites.
///
/// Every operation consumes the selection and returns the replacement, so a
/// render always observes one complete state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    included: BTreeMap<String, bool>,
}

impl Selection {
    pub fn initialize(sites: &[SiteEntry], default: bool) -> Self {
        Self {
            included: sites
                .iter()
                .map(|site| (site.name.clone(), default))
                .collect(),
        }
    }

    /// Sets inclusion for one site. Unknown names leave the selection untouched.
    pub fn toggle(mut self, name: &str, value: bool) -> Self {
        if let Some(slot) = self.included.get_mut(name) {
            *slot = value;
        }
        self
    }

    pub fn set_all(mut self, value: bool) -> Self {
        for slot in self.included.values_mut() {
            *slot = value;
        }
        self
    }

    /// Recomputes the key set for a new visible subset.
    ///
    /// Surviving keys keep their value, dropped keys are forgotten and keys that
    /// enter scope get `default`.
    pub fn rescope(mut self, sites: &[SiteEntry], default: bool) -> Self {
        let included = sites
            .iter()
            .map(|site| {
                let value = self.included.remove(&site.name).unwrap_or(default);
                (site.name.clone(), value)
            })
            .collect();
        Self { included }
    }

    pub fn selected_names(&self) -> BTreeSet<String> {
        self.included
            .iter()
            .filter(|(_, included)| **included)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn has_selection(&self) -> bool {
        self.included.values().any(|included| *included)
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.included.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.included.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.included.len()
    }

    pub fn is_empty(&self) -> bool {
        self.included.is_empty()
    }
}
