use crate::{build_request, shape, validate_submission, AppState, Effect, Msg, SubmissionPhase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UsernameChanged(username) => {
            if state.accepts_input() {
                state.set_username(username);
            }
            Vec::new()
        }
        Msg::NsfwToggled(with_nsfw) => {
            if state.accepts_input() {
                state.set_nsfw(with_nsfw);
            }
            Vec::new()
        }
        Msg::SiteToggled { name, included } => {
            if state.accepts_input() {
                state.toggle_site(&name, included);
            }
            Vec::new()
        }
        Msg::CheckAllToggled(included) => {
            if state.accepts_input() {
                state.set_all(included);
            }
            Vec::new()
        }
        Msg::SubmitClicked => {
            // One request in flight at a time; a blocked form never builds a request.
            if !state.accepts_input()
                || validate_submission(state.username(), state.selection()).is_err()
            {
                return (state, Vec::new());
            }
            let request = build_request(state.username(), state.selection(), state.with_nsfw());
            state.begin_submission();
            vec![Effect::SubmitLookup(request)]
        }
        Msg::LookupSucceeded(raw) => {
            if state.phase() == SubmissionPhase::Submitting {
                state.finish_success(shape(raw));
            }
            Vec::new()
        }
        Msg::LookupFailed(message) => {
            if state.phase() == SubmissionPhase::Submitting {
                state.finish_failure(message);
            }
            Vec::new()
        }
        Msg::BackClicked => {
            if state.phase() == SubmissionPhase::Success {
                state.back_to_idle();
            }
            Vec::new()
        }
        Msg::ExportClicked => match (state.phase(), state.results()) {
            (SubmissionPhase::Success, Some(results)) => vec![Effect::ExportResults {
                username: state.username().trim().to_string(),
                results: results.to_vec(),
            }],
            _ => Vec::new(),
        },
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
