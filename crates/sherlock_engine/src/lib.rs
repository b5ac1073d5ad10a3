//! Sherlock engine: lookup transport, relay forwarding and result export.
mod body;
mod client;
mod engine;
mod export;
mod forward;
mod types;

pub use client::{decode_found_sites, LookupClient, LookupSettings, ReqwestLookupClient, SUBMIT_PATH};
pub use engine::EngineHandle;
pub use export::{export_filename, export_results, render_results_text, ExportError, ExportOptions};
pub use forward::{ForwardSettings, ReqwestUpstream, Upstream, UpstreamReply};
pub use types::{EngineEvent, FailureKind, LookupError};
