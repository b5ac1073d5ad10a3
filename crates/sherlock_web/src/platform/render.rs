use sherlock_core::{AppViewModel, SubmissionPhase};

/// Renders the view as terminal lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    match view.phase {
        SubmissionPhase::Submitting => vec![format!(
            "Searching {} site(s) for {}...",
            view.selected_count,
            view.username.trim()
        )],
        SubmissionPhase::Success => match &view.results {
            Some(results) if !results.is_empty() => {
                let mut lines = vec!["Found sites:".to_string()];
                lines.extend(
                    results
                        .iter()
                        .map(|site| format!("  {}: {}", site.name, site.url)),
                );
                lines
            }
            _ => vec!["No sites found.".to_string()],
        },
        SubmissionPhase::Failed => vec![format!(
            "Lookup failed: {}",
            view.error.as_deref().unwrap_or("unknown error")
        )],
        SubmissionPhase::Idle => match view.validation {
            Some(reason) => vec![format!("Cannot search: {reason}")],
            None => vec![format!(
                "{} of {} site(s) selected",
                view.selected_count,
                view.sites.len()
            )],
        },
    }
}

#[cfg(test)]
mod tests {
    use sherlock_core::{FoundSite, ValidationError};

    use super::*;

    #[test]
    fn success_lists_found_sites() {
        let view = AppViewModel {
            phase: SubmissionPhase::Success,
            results: Some(vec![FoundSite::new("GitHub", "https://github.com/bob")]),
            ..AppViewModel::default()
        };
        assert_eq!(
            render(&view),
            vec!["Found sites:", "  GitHub: https://github.com/bob"]
        );
    }

    #[test]
    fn empty_success_is_distinct_from_failure() {
        let empty = AppViewModel {
            phase: SubmissionPhase::Success,
            results: Some(Vec::new()),
            no_results: true,
            ..AppViewModel::default()
        };
        assert_eq!(render(&empty), vec!["No sites found."]);

        let failed = AppViewModel {
            phase: SubmissionPhase::Failed,
            error: Some("http status 502".to_string()),
            ..AppViewModel::default()
        };
        assert_eq!(render(&failed), vec!["Lookup failed: http status 502"]);
    }

    #[test]
    fn blocked_form_explains_why() {
        let view = AppViewModel {
            validation: Some(ValidationError::NoSitesSelected),
            ..AppViewModel::default()
        };
        assert_eq!(render(&view), vec!["Cannot search: select at least one site"]);
    }
}
