use serde::{Deserialize, Serialize};

/// URL the lookup service reports for a site where the username was not located.
pub const NOT_FOUND_SENTINEL: &str = "Desired sites not found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundSite {
    pub name: String,
    #[serde(alias = "link")]
    pub url: String,
}

impl FoundSite {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.url == NOT_FOUND_SENTINEL
    }
}

/// Drops "not found" records and sorts the rest by name, ignoring case.
///
/// The sort is stable, so records whose names compare equal keep their input order.
pub fn shape(raw: Vec<FoundSite>) -> Vec<FoundSite> {
    let mut found: Vec<FoundSite> = raw.into_iter().filter(|site| !site.is_not_found()).collect();
    found.sort_by_cached_key(|site| site.name.to_uppercase());
    found
}
