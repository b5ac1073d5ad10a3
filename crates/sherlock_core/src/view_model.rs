use crate::{FoundSite, SubmissionPhase, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub username: String,
    pub with_nsfw: bool,
    pub sites: Vec<SiteRowView>,
    pub selected_count: usize,
    pub phase: SubmissionPhase,
    pub submit_enabled: bool,
    pub submitting: bool,
    /// Shaped results; `None` while the form is shown.
    pub results: Option<Vec<FoundSite>>,
    /// Lookup succeeded but nothing was found.
    pub no_results: bool,
    pub error: Option<String>,
    /// Why the form cannot be submitted right now, if anything blocks it.
    pub validation: Option<ValidationError>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRowView {
    pub name: String,
    pub url: String,
    pub checked: bool,
}
