use sherlock_core::{Catalog, CatalogError, SiteEntry};

fn init_logging() {
    sherlock_logging::initialize_for_tests();
}

fn names(sites: &[SiteEntry]) -> Vec<&str> {
    sites.iter().map(|site| site.name.as_str()).collect()
}

#[test]
fn nsfw_sites_only_listed_when_requested() {
    init_logging();
    let catalog = Catalog::from_json_str(
        r#"{
            "B": { "url": "https://b.example/{}", "isNSFW": true },
            "A": { "url": "https://a.example/{}", "isNSFW": false }
        }"#,
    )
    .expect("valid catalog");

    assert_eq!(names(&catalog.list_sites(false)), vec!["A"]);
    assert_eq!(names(&catalog.list_sites(true)), vec!["A", "B"]);
}

#[test]
fn listing_is_sorted_case_insensitively() {
    init_logging();
    let catalog = Catalog::from_json_str(
        r#"{
            "reddit": { "url": "https://reddit.com/user/{}" },
            "GitHub": { "url": "https://github.com/{}" },
            "about.me": { "url": "https://about.me/{}" },
            "Zhihu": { "url": "https://zhihu.com/people/{}" }
        }"#,
    )
    .expect("valid catalog");

    assert_eq!(
        names(&catalog.list_sites(false)),
        vec!["about.me", "GitHub", "reddit", "Zhihu"]
    );
}

#[test]
fn reserved_keys_are_not_sites() {
    init_logging();
    let catalog = Catalog::from_json_str(
        r#"{
            "$schema": "data.schema.json",
            "default": { "url": "ignored", "isNSFW": false },
            "GitHub": { "url": "https://github.com/{}" }
        }"#,
    )
    .expect("valid catalog");

    assert_eq!(catalog.len(), 1);
    assert!(!catalog.contains("default"));
    assert_eq!(names(&catalog.list_sites(true)), vec!["GitHub"]);
}

#[test]
fn missing_nsfw_flag_defaults_to_safe_and_extra_fields_are_ignored() {
    init_logging();
    let catalog = Catalog::from_json_str(
        r#"{
            "GitHub": {
                "url": "https://github.com/{}",
                "urlMain": "https://github.com/",
                "errorType": "status_code"
            }
        }"#,
    )
    .expect("valid catalog");

    let site = catalog.get("GitHub").expect("site present");
    assert!(!site.is_nsfw);
    assert_eq!(site.url, "https://github.com/{}");
}

#[test]
fn duplicate_names_are_rejected() {
    init_logging();
    let err = Catalog::from_json_str(
        r#"{
            "GitHub": { "url": "https://github.com/{}" },
            "GitHub": { "url": "https://github.com/other/{}" }
        }"#,
    )
    .unwrap_err();

    assert!(matches!(err, CatalogError::DuplicateSite(name) if name == "GitHub"));
}

#[test]
fn duplicate_typed_entries_are_rejected() {
    let entry = SiteEntry {
        name: "A".to_string(),
        url: "https://a.example".to_string(),
        is_nsfw: false,
    };
    let err = Catalog::new(vec![entry.clone(), entry]).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateSite(_)));
}

#[test]
fn malformed_entries_name_the_offending_site() {
    init_logging();
    let missing_url = Catalog::from_json_str(r#"{ "Broken": { "isNSFW": false } }"#).unwrap_err();
    assert!(matches!(
        missing_url,
        CatalogError::MalformedEntry { ref name, .. } if name == "Broken"
    ));

    let bad_flag =
        Catalog::from_json_str(r#"{ "Flaky": { "url": "https://x", "isNSFW": "yes" } }"#)
            .unwrap_err();
    assert!(matches!(
        bad_flag,
        CatalogError::MalformedEntry { ref name, .. } if name == "Flaky"
    ));

    let not_object = Catalog::from_json_str(r#"{ "Scalar": "https://x" }"#).unwrap_err();
    assert!(matches!(
        not_object,
        CatalogError::MalformedEntry { ref name, .. } if name == "Scalar"
    ));
}

#[test]
fn top_level_must_be_an_object() {
    init_logging();
    let err = Catalog::from_json_str(r#"["GitHub"]"#).unwrap_err();
    assert!(matches!(err, CatalogError::NotAnObject));

    let err = Catalog::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}
