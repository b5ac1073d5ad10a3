use pretty_assertions::assert_eq;
use serde_json::json;
use sherlock_core::{
    build_request, validate_submission, Catalog, RelayPayload, SearchRequest, Selection,
    SiteEntry, ValidationError,
};

fn selection_a_only() -> Selection {
    let catalog = Catalog::new(vec![
        SiteEntry {
            name: "A".to_string(),
            url: "https://a.example/{}".to_string(),
            is_nsfw: false,
        },
        SiteEntry {
            name: "B".to_string(),
            url: "https://b.example/{}".to_string(),
            is_nsfw: false,
        },
    ])
    .expect("catalog");
    Selection::initialize(&catalog.list_sites(false), false).toggle("A", true)
}

#[test]
fn build_request_uses_selected_names() {
    let request = build_request("bob", &selection_a_only(), false);

    assert_eq!(
        request,
        SearchRequest {
            username: "bob".to_string(),
            sites: vec!["A".to_string()],
            with_nsfw: false,
        }
    );
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "username": "bob", "sites": ["A"], "withNSFW": false })
    );
}

#[test]
fn build_request_trims_username() {
    let request = build_request("  bob \n", &selection_a_only(), true);
    assert_eq!(request.username, "bob");
    assert!(request.with_nsfw);
}

#[test]
fn validation_blocks_empty_username_and_empty_selection() {
    let selection = selection_a_only();
    assert_eq!(validate_submission("bob", &selection), Ok(()));
    assert_eq!(
        validate_submission("   ", &selection),
        Err(ValidationError::EmptyUsername)
    );

    let nothing = selection.set_all(false);
    assert_eq!(
        validate_submission("bob", &nothing),
        Err(ValidationError::NoSitesSelected)
    );
}

#[test]
fn inbound_request_defaults_missing_nsfw_flag() {
    let request: SearchRequest =
        serde_json::from_value(json!({ "username": "bob", "sites": ["A", "B"] })).unwrap();
    assert!(!request.with_nsfw);
    assert_eq!(request.sites, vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn relay_payload_wraps_username_and_flags() {
    let request = SearchRequest {
        username: "bob".to_string(),
        sites: vec!["A".to_string()],
        with_nsfw: true,
    };
    let payload = RelayPayload::from(request.clone());
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({ "usernames": ["bob"], "sites": ["A"], "f": ["nsfw"] })
    );

    let safe = RelayPayload::from(SearchRequest {
        with_nsfw: false,
        ..request
    });
    assert!(safe.f.is_empty());
}
