use std::sync::Arc;

use anyhow::bail;
use sherlock_core::{update, AppState, AppViewModel, Catalog, Msg, SubmissionPhase};
use sherlock_engine::EngineHandle;
use sherlock_logging::{sherlock_debug, sherlock_warn};

use super::config::AppConfig;
use super::effects::{EffectOutcome, EffectRunner};
use super::render::render;

/// What the user asked the headless front end to do.
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    pub username: String,
    pub sites: Vec<String>,
    pub all: bool,
    pub nsfw: bool,
    pub export: bool,
}

/// Drives the core state machine the way an interactive form would.
pub struct Frontend {
    state: AppState,
    runner: EffectRunner,
}

impl Frontend {
    pub fn new(state: AppState, runner: EffectRunner) -> Self {
        Self { state, runner }
    }

    pub fn dispatch(&mut self, msg: Msg) -> Vec<EffectOutcome> {
        sherlock_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects)
    }

    /// Pumps engine events until the in-flight lookup resolves.
    pub fn await_lookup(&mut self) {
        while self.state.phase() == SubmissionPhase::Submitting {
            let msg = self.runner.next_msg();
            self.dispatch(msg);
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

pub fn run_search(config: &AppConfig, catalog: Arc<Catalog>, args: SearchArgs) -> anyhow::Result<()> {
    let engine = EngineHandle::new(config.lookup_settings());
    let runner = EffectRunner::new(engine, config.export_dir.clone());
    let mut frontend = Frontend::new(AppState::new(catalog, config.default_selection), runner);

    let outcomes = submit_form(&mut frontend, &args);
    if outcomes.is_empty() {
        for line in render(&frontend.view()) {
            eprintln!("{line}");
        }
        bail!("search was not submitted");
    }

    println!("{}", render(&frontend.view()).join("\n"));
    frontend.await_lookup();
    println!("{}", render(&frontend.view()).join("\n"));

    if frontend.state().phase() == SubmissionPhase::Failed {
        bail!("lookup failed");
    }

    if args.export {
        for outcome in frontend.dispatch(Msg::ExportClicked) {
            match outcome {
                EffectOutcome::Exported(path) => println!("Saved results to {}", path.display()),
                EffectOutcome::ExportFailed(reason) => bail!("export failed: {reason}"),
                EffectOutcome::Submitted => {}
            }
        }
    }
    Ok(())
}

/// Replays the form interaction and presses submit; returns the submit outcomes.
fn submit_form(frontend: &mut Frontend, args: &SearchArgs) -> Vec<EffectOutcome> {
    frontend.dispatch(Msg::UsernameChanged(args.username.clone()));
    if args.nsfw {
        frontend.dispatch(Msg::NsfwToggled(true));
    }
    if args.all {
        frontend.dispatch(Msg::CheckAllToggled(true));
    } else if !args.sites.is_empty() {
        frontend.dispatch(Msg::CheckAllToggled(false));
        for name in &args.sites {
            if frontend.state().selection().get(name).is_none() {
                sherlock_warn!("Site {:?} is not in the visible catalog; skipped", name);
                continue;
            }
            frontend.dispatch(Msg::SiteToggled {
                name: name.clone(),
                included: true,
            });
        }
    }
    frontend.dispatch(Msg::SubmitClicked)
}
