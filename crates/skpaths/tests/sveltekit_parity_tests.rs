//! Parity tests pinning the derivation to SvelteKit route-tree
//! conventions.
//!
//! These exercise the pure path-to-templates stage directly, without a
//! filesystem, so each convention's exact output — including emission
//! order within one marker file — stays locked down.

use pretty_assertions::assert_eq;
use skpaths::{derive_templates, RoutePath};

fn templates(path: &str) -> Vec<String> {
    derive_templates(&RoutePath::from_relative(path))
}

#[test]
fn root_page() {
    assert_eq!(templates(""), vec!["/"]);
}

#[test]
fn top_level_static() {
    assert_eq!(templates("about"), vec!["/about"]);
}

#[test]
fn nested_static() {
    assert_eq!(templates("settings/profile/avatar"), vec!["/settings/profile/avatar"]);
}

#[test]
fn dynamic_param() {
    assert_eq!(templates("blog/[slug]"), vec!["/blog/${string}"]);
}

#[test]
fn multiple_dynamic_params() {
    assert_eq!(
        templates("posts/[year]/[month]"),
        vec!["/posts/${string}/${string}"]
    );
}

#[test]
fn rest_param() {
    assert_eq!(templates("docs/[...rest]"), vec!["/docs/${string}"]);
}

#[test]
fn rest_param_matches_dynamic_rendering() {
    // Catch-all and dynamic produce the same placeholder
    assert_eq!(templates("docs/[...rest]"), templates("docs/[rest]"));
}

#[test]
fn route_group_is_stripped() {
    assert_eq!(templates("(marketing)/about"), vec!["/about"]);
}

#[test]
fn nested_route_groups_are_stripped() {
    assert_eq!(
        templates("(app)/(admin)/users/[id]"),
        vec!["/users/${string}"]
    );
}

#[test]
fn group_wrapping_the_root() {
    assert_eq!(templates("(marketing)"), vec!["/"]);
}

#[test]
fn trailing_optional_param() {
    assert_eq!(templates("docs/[[page]]"), vec!["/docs", "/docs/${string}"]);
}

#[test]
fn leading_optional_param() {
    assert_eq!(
        templates("[[lang]]/about"),
        vec!["/about", "/${string}/about"]
    );
}

#[test]
fn optional_param_alone() {
    assert_eq!(templates("[[lang]]"), vec!["/", "/${string}"]);
}

#[test]
fn stacked_optionals_enumerate_suffixes_only() {
    // keep-first-k variants plus the all-present form; not a power set
    assert_eq!(
        templates("a/[[b]]/[[c]]"),
        vec!["/a/${string}", "/a", "/a/${string}/${string}"]
    );
}

#[test]
fn optional_between_required_segments() {
    // Non-trailing optionals are not validated; peeling applies as-is
    assert_eq!(
        templates("a/[[b]]/c"),
        vec!["/a/c", "/a/${string}/c"]
    );
}

#[test]
fn optional_after_dynamic() {
    assert_eq!(
        templates("[x]/[[y]]"),
        vec!["/${string}", "/${string}/${string}"]
    );
}

#[test]
fn group_and_optional_together() {
    assert_eq!(
        templates("(site)/[[lang]]/contact"),
        vec!["/contact", "/${string}/contact"]
    );
}

#[test]
fn malformed_brackets_are_literal() {
    assert_eq!(templates("foo[x]bar"), vec!["/foo[x]bar"]);
    assert_eq!(templates("[]"), vec!["/[]"]);
    assert_eq!(templates("weird]name"), vec!["/weird]name"]);
}

#[test]
fn double_bracket_rest_behaves_as_optional() {
    assert_eq!(
        templates("docs/[[...rest]]"),
        vec!["/docs", "/docs/${string}"]
    );
}
