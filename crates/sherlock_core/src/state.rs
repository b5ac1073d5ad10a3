use std::sync::Arc;

use crate::view_model::{AppViewModel, SiteRowView};
use crate::{validate_submission, Catalog, DefaultSelection, FoundSite, Selection, SiteEntry};

/// Lifecycle of a single form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    catalog: Arc<Catalog>,
    default_selection: DefaultSelection,
    with_nsfw: bool,
    visible: Vec<SiteEntry>,
    selection: Selection,
    username: String,
    phase: SubmissionPhase,
    results: Option<Vec<FoundSite>>,
    last_error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, default_selection: DefaultSelection) -> Self {
        let visible = catalog.list_sites(false);
        let selection = Selection::initialize(&visible, default_selection.included());
        Self {
            catalog,
            default_selection,
            visible,
            selection,
            dirty: true,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let validation = validate_submission(&self.username, &self.selection).err();
        let accepts_input = self.accepts_input();
        AppViewModel {
            username: self.username.clone(),
            with_nsfw: self.with_nsfw,
            sites: self
                .visible
                .iter()
                .map(|site| SiteRowView {
                    name: site.name.clone(),
                    url: site.url.clone(),
                    checked: self.selection.get(&site.name).unwrap_or(false),
                })
                .collect(),
            selected_count: self.selection.selected_names().len(),
            phase: self.phase,
            submit_enabled: accepts_input && validation.is_none(),
            submitting: self.phase == SubmissionPhase::Submitting,
            no_results: self.results.as_ref().is_some_and(Vec::is_empty),
            results: self.results.clone(),
            error: self.last_error.clone(),
            validation,
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn with_nsfw(&self) -> bool {
        self.with_nsfw
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn results(&self) -> Option<&[FoundSite]> {
        self.results.as_deref()
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// The form is editable and submittable only when nothing is in flight or displayed.
    pub(crate) fn accepts_input(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Idle | SubmissionPhase::Failed)
    }

    pub(crate) fn set_username(&mut self, username: String) {
        if self.username != username {
            self.username = username;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_nsfw(&mut self, with_nsfw: bool) {
        if self.with_nsfw == with_nsfw {
            return;
        }
        self.with_nsfw = with_nsfw;
        self.visible = self.catalog.list_sites(with_nsfw);
        let selection = std::mem::take(&mut self.selection);
        self.selection = selection.rescope(&self.visible, self.default_selection.included());
        self.mark_dirty();
    }

    pub(crate) fn toggle_site(&mut self, name: &str, included: bool) {
        let next = self.selection.clone().toggle(name, included);
        self.replace_selection(next);
    }

    pub(crate) fn set_all(&mut self, included: bool) {
        let next = self.selection.clone().set_all(included);
        self.replace_selection(next);
    }

    pub(crate) fn begin_submission(&mut self) {
        self.phase = SubmissionPhase::Submitting;
        self.last_error = None;
        self.mark_dirty();
    }

    pub(crate) fn finish_success(&mut self, results: Vec<FoundSite>) {
        self.phase = SubmissionPhase::Success;
        self.results = Some(results);
        self.mark_dirty();
    }

    pub(crate) fn finish_failure(&mut self, message: String) {
        self.phase = SubmissionPhase::Failed;
        self.last_error = Some(message);
        self.mark_dirty();
    }

    pub(crate) fn back_to_idle(&mut self) {
        self.phase = SubmissionPhase::Idle;
        self.results = None;
        self.mark_dirty();
    }

    fn replace_selection(&mut self, selection: Selection) {
        if self.selection != selection {
            self.selection = selection;
            self.mark_dirty();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
