use std::path::PathBuf;

use chrono::Utc;
use sherlock_core::{Effect, Msg};
use sherlock_engine::{export_results, EngineEvent, EngineHandle, ExportOptions};
use sherlock_logging::{sherlock_error, sherlock_info, sherlock_warn};

/// What running an effect produced, for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectOutcome {
    Submitted,
    Exported(PathBuf),
    ExportFailed(String),
}

pub struct EffectRunner {
    engine: EngineHandle,
    export_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, export_dir: PathBuf) -> Self {
        Self { engine, export_dir }
    }

    pub fn run(&self, effects: Vec<Effect>) -> Vec<EffectOutcome> {
        effects
            .into_iter()
            .map(|effect| match effect {
                Effect::SubmitLookup(request) => {
                    sherlock_info!(
                        "SubmitLookup user={} sites={} nsfw={}",
                        request.username,
                        request.sites.len(),
                        request.with_nsfw
                    );
                    self.engine.submit(request);
                    EffectOutcome::Submitted
                }
                Effect::ExportResults { username, results } => {
                    let options = ExportOptions {
                        generated_utc: Some(Utc::now().to_rfc3339()),
                    };
                    match export_results(&self.export_dir, &username, &results, &options) {
                        Ok(path) => {
                            sherlock_info!("Exported {} results to {:?}", results.len(), path);
                            EffectOutcome::Exported(path)
                        }
                        Err(err) => {
                            sherlock_error!("Export for {} failed: {}", username, err);
                            EffectOutcome::ExportFailed(err.to_string())
                        }
                    }
                }
            })
            .collect()
    }

    /// Blocks until the engine reports back and maps the event to a message.
    pub fn next_msg(&self) -> Msg {
        match self.engine.recv() {
            Some(EngineEvent::LookupCompleted { username, result }) => match result {
                Ok(raw) => {
                    sherlock_info!("Lookup for {} returned {} records", username, raw.len());
                    Msg::LookupSucceeded(raw)
                }
                Err(err) => {
                    sherlock_warn!("Lookup for {} failed: {}", username, err);
                    Msg::LookupFailed(err.to_string())
                }
            },
            None => Msg::LookupFailed("lookup engine stopped".to_string()),
        }
    }
}
