#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Route registry tests against the production route table.

use safeloop_site::routes::site_routes;
use safeloop_site::routing::RouteName;

#[test]
fn every_registered_name_resolves_to_its_stored_path() {
    let registry = site_routes();
    for route in registry.iter() {
        assert_eq!(registry.path_for(route.name.as_str()), route.path);
    }
}

#[test]
fn unregistered_names_resolve_to_root() {
    let registry = site_routes();
    assert_eq!(registry.path_for("checkout"), "/");
    assert_eq!(registry.path_for("Blog"), "/");
    assert_eq!(registry.path_for(""), "/");
}

#[test]
fn names_are_pairwise_distinct() {
    let registry = site_routes();
    let mut names: Vec<_> = registry.iter().map(|r| r.name.as_str()).collect();
    names.sort_unstable();
    let before = names.len();
    names.dedup();
    assert_eq!(names.len(), before);
}

#[test]
fn generate_path_for_blog_single() {
    let registry = site_routes();
    assert_eq!(
        registry.generate_path("blog-single", &[("slug", "hello-world")]),
        "/blog/hello-world"
    );
}

#[test]
fn generate_path_for_home_ignores_params() {
    let registry = site_routes();
    assert_eq!(registry.generate_path("home", &[]), "/");
    assert_eq!(registry.generate_path("home", &[("foo", "bar")]), "/");
}

#[test]
fn navigation_entries_are_stable_across_calls() {
    let registry = site_routes();
    let first = registry.navigation_entries();
    let second = registry.navigation_entries();

    assert_eq!(first, second);
    assert!(first.iter().all(|e| e.label.is_some()));

    // Registry order is preserved in the derived menu.
    let names: Vec<_> = first.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["home", "about", "pricing", "blog", "contact"]);
}

#[test]
fn enum_lookups_agree_with_string_lookups() {
    let registry = site_routes();
    for name in RouteName::ALL {
        assert_eq!(registry.path_of(name), registry.path_for(name.as_str()));
    }
}
