use crate::{FoundSite, SearchRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitLookup(SearchRequest),
    ExportResults {
        username: String,
        results: Vec<FoundSite>,
    },
}
