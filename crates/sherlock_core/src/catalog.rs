//! Static site catalog, parsed and validated once at startup.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::error::Category;
use serde_json::Value;
use thiserror::Error;

/// Keys in the catalog document that carry metadata rather than sites.
pub const RESERVED_KEYS: &[&str] = &["default", "$schema"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteEntry {
    pub name: String,
    pub url: String,
    #[serde(rename = "isNSFW")]
    pub is_nsfw: bool,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog document must be an object keyed by site name")]
    NotAnObject,
    #[error("site {0:?} appears more than once in the catalog")]
    DuplicateSite(String),
    #[error("site {name:?} is malformed: {reason}")]
    MalformedEntry { name: String, reason: String },
}

/// Immutable set of known sites.
///
/// Entries are kept sorted case-insensitively by name, so listing is a filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    entries: Vec<SiteEntry>,
}

impl Catalog {
    /// Builds a catalog from already-typed entries, rejecting duplicate names.
    pub fn new(entries: Vec<SiteEntry>) -> Result<Self, CatalogError> {
        {
            let mut seen = HashSet::with_capacity(entries.len());
            for entry in &entries {
                if !seen.insert(entry.name.as_str()) {
                    return Err(CatalogError::DuplicateSite(entry.name.clone()));
                }
            }
        }
        let mut entries: Vec<SiteEntry> = entries
            .into_iter()
            .filter(|entry| !is_reserved(&entry.name))
            .collect();
        entries.sort_by_cached_key(|entry| entry.name.to_uppercase());
        Ok(Self { entries })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let document: RawDocument = serde_json::from_str(raw).map_err(|err| {
            if err.classify() == Category::Data {
                CatalogError::NotAnObject
            } else {
                CatalogError::Json(err)
            }
        })?;
        let mut entries = Vec::with_capacity(document.0.len());
        for (name, value) in document.0 {
            if is_reserved(&name) {
                continue;
            }
            entries.push(parse_entry(name, value)?);
        }
        Self::new(entries)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Sites visible under the given NSFW mode, sorted case-insensitively by name.
    pub fn list_sites(&self, include_nsfw: bool) -> Vec<SiteEntry> {
        self.entries
            .iter()
            .filter(|entry| include_nsfw || !entry.is_nsfw)
            .cloned()
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&SiteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_reserved(name: &str) -> bool {
    RESERVED_KEYS.contains(&name)
}

#[derive(Deserialize)]
struct RawSite {
    url: String,
    #[serde(rename = "isNSFW", default)]
    is_nsfw: bool,
}

fn parse_entry(name: String, value: Value) -> Result<SiteEntry, CatalogError> {
    if !value.is_object() {
        return Err(CatalogError::MalformedEntry {
            name,
            reason: "expected an object".to_string(),
        });
    }
    match RawSite::deserialize(value) {
        Ok(raw) => Ok(SiteEntry {
            name,
            url: raw.url,
            is_nsfw: raw.is_nsfw,
        }),
        Err(err) => Err(CatalogError::MalformedEntry {
            name,
            reason: err.to_string(),
        }),
    }
}

/// Top-level catalog object with every key kept, duplicates included.
struct RawDocument(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for RawDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = RawDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object keyed by site name")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    pairs.push((key, value));
                }
                Ok(RawDocument(pairs))
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}
