use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Selection;

/// Flag forwarded to the lookup service when NSFW sites are requested.
pub const NSFW_FLAG: &str = "nsfw";

/// Body of the browser-to-relay submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub username: String,
    pub sites: Vec<String>,
    #[serde(rename = "withNSFW", default)]
    pub with_nsfw: bool,
}

/// Body the relay forwards to the remote lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayPayload {
    pub usernames: Vec<String>,
    pub sites: Vec<String>,
    pub f: Vec<String>,
}

impl From<SearchRequest> for RelayPayload {
    fn from(request: SearchRequest) -> Self {
        let f = if request.with_nsfw {
            vec![NSFW_FLAG.to_string()]
        } else {
            Vec::new()
        };
        Self {
            usernames: vec![request.username],
            sites: request.sites,
            f,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a username is required")]
    EmptyUsername,
    #[error("select at least one site")]
    NoSitesSelected,
}

/// Form-level precondition for building a request.
pub fn validate_submission(username: &str, selection: &Selection) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    if !selection.has_selection() {
        return Err(ValidationError::NoSitesSelected);
    }
    Ok(())
}

/// Builds the outgoing request. Callers run [`validate_submission`] first.
pub fn build_request(username: &str, selection: &Selection, include_nsfw: bool) -> SearchRequest {
    SearchRequest {
        username: username.trim().to_string(),
        sites: selection.selected_names().into_iter().collect(),
        with_nsfw: include_nsfw,
    }
}
