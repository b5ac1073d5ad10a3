use crate::FoundSite;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the username input.
    UsernameChanged(String),
    /// User flipped the "With NSFW" switch.
    NsfwToggled(bool),
    /// User checked or unchecked a single site.
    SiteToggled { name: String, included: bool },
    /// User flipped the "Check All" switch.
    CheckAllToggled(bool),
    /// User submitted the form.
    SubmitClicked,
    /// The lookup returned; records are raw and still contain "not found" entries.
    LookupSucceeded(Vec<FoundSite>),
    /// The lookup failed in transport or decoding.
    LookupFailed(String),
    /// User left the results view.
    BackClicked,
    /// User asked for the results as a text file.
    ExportClicked,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
