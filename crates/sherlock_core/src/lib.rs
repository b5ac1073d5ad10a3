//! Sherlock core: site catalog, selection state, query building, result shaping
//! and the pure submission state machine.
mod catalog;
mod effect;
mod msg;
mod request;
mod selection;
mod shape;
mod state;
mod update;
mod view_model;

pub use catalog::{Catalog, CatalogError, SiteEntry, RESERVED_KEYS};
pub use effect::Effect;
pub use msg::Msg;
pub use request::{
    build_request, validate_submission, RelayPayload, SearchRequest, ValidationError, NSFW_FLAG,
};
pub use selection::{DefaultSelection, Selection};
pub use shape::{shape, FoundSite, NOT_FOUND_SENTINEL};
pub use state::{AppState, SubmissionPhase};
pub use update::update;
pub use view_model::{AppViewModel, SiteRowView};
