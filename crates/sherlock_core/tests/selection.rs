use std::collections::BTreeSet;

use sherlock_core::{Catalog, Selection, SiteEntry};

fn site(name: &str, is_nsfw: bool) -> SiteEntry {
    SiteEntry {
        name: name.to_string(),
        url: format!("https://{}.example/{{}}", name.to_lowercase()),
        is_nsfw,
    }
}

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn initialize_uses_default_for_every_site() {
    let sites = vec![site("A", false), site("B", false)];

    let all = Selection::initialize(&sites, true);
    assert_eq!(all.len(), 2);
    assert_eq!(all.selected_names(), set(&["A", "B"]));

    let none = Selection::initialize(&sites, false);
    assert!(none.selected_names().is_empty());
    assert!(!none.has_selection());
}

#[test]
fn toggle_round_trip_restores_original_value() {
    let sites = vec![site("A", false), site("B", false)];
    let original = Selection::initialize(&sites, false).toggle("B", true);

    let round_trip = original.clone().toggle("A", true).toggle("A", false);
    assert_eq!(round_trip.get("A"), original.get("A"));
    assert_eq!(round_trip, original);
}

#[test]
fn toggle_unknown_name_is_a_noop() {
    let sites = vec![site("A", false)];
    let selection = Selection::initialize(&sites, false);

    let next = selection.clone().toggle("Missing", true);
    assert_eq!(next, selection);
    assert_eq!(next.get("Missing"), None);
}

#[test]
fn set_all_selects_exactly_the_key_set() {
    let sites = vec![site("A", false), site("B", false), site("C", false)];
    let selection = Selection::initialize(&sites, false).toggle("B", true);

    let all = selection.set_all(true);
    let keys: BTreeSet<String> = all.names().map(str::to_string).collect();
    assert_eq!(all.selected_names(), keys);

    let none = all.set_all(false);
    assert!(none.selected_names().is_empty());
}

#[test]
fn nsfw_round_trip_preserves_safe_selection() {
    let catalog = Catalog::new(vec![
        site("A", false),
        site("B", true),
        site("C", false),
    ])
    .expect("catalog");

    let safe = catalog.list_sites(false);
    let with_nsfw = catalog.list_sites(true);

    let selection = Selection::initialize(&safe, false).toggle("A", true);
    let widened = selection.clone().rescope(&with_nsfw, true);
    assert_eq!(widened.get("B"), Some(true));
    assert_eq!(widened.get("A"), Some(true));
    assert_eq!(widened.get("C"), Some(false));

    let narrowed = widened.toggle("C", true).toggle("C", false).rescope(&safe, true);
    assert_eq!(narrowed, selection);
    assert_eq!(narrowed.get("B"), None);
}

#[test]
fn rescope_gives_new_sites_the_default() {
    let catalog = Catalog::new(vec![site("A", false), site("B", true)]).expect("catalog");
    let selection = Selection::initialize(&catalog.list_sites(false), true);

    let widened = selection.rescope(&catalog.list_sites(true), false);
    assert_eq!(widened.get("A"), Some(true));
    assert_eq!(widened.get("B"), Some(false));
}
