//! Snapshot tests over the built-in dialect matrices
//!
//! Capability deltas between dialect versions are data; keeping the affected
//! matrix rows as snapshots makes every delta reviewable in the diff.

use rx_syntax::syntax::dialects;
use rx_syntax::syntax::token::CATEGORIES;
use rx_syntax::{Category, Features};

/// Sorted token names of one matrix row
fn row(features: &Features, category: Category) -> Vec<&'static str> {
    let mut names: Vec<_> = features
        .capabilities(category)
        .iter()
        .map(|t| t.name())
        .collect();
    names.sort_unstable();
    names
}

#[test]
fn baseline_free_space_row() {
    let fresh = Features::new("fresh");
    insta::assert_debug_snapshot!(row(&fresh, Category::FreeSpace), @r###"
    [
        "comment",
        "white_space",
    ]
    "###);
}

#[test]
fn ruby_18_assertion_row() {
    let v18 = dialects::ruby_v18();
    insta::assert_debug_snapshot!(row(&v18, Category::Assertion), @r###"
    [
        "lookahead",
        "neg_lookahead",
    ]
    "###);
}

#[test]
fn ruby_19_group_row_gains_named_forms() {
    let v19 = dialects::ruby_v19();
    insta::assert_debug_snapshot!(row(&v19, Category::Group), @r###"
    [
        "atomic",
        "capture",
        "inline_comment",
        "named_ab",
        "named_sq",
        "options",
        "passive",
    ]
    "###);
}

#[test]
fn ruby_20_conditional_row() {
    let v20 = dialects::ruby_v20();
    insta::assert_debug_snapshot!(row(&v20, Category::Conditional), @r###"
    [
        "condition",
        "conditional_close",
        "conditional_open",
        "conditional_separator",
    ]
    "###);
}

#[test]
fn ruby_24_group_row_gains_absence() {
    let v24 = dialects::ruby_v24();
    insta::assert_debug_snapshot!(row(&v24, Category::Group), @r###"
    [
        "absence",
        "atomic",
        "capture",
        "inline_comment",
        "named_ab",
        "named_sq",
        "options",
        "passive",
    ]
    "###);
}

#[test]
fn matrices_serialize_for_the_cli() {
    // The matrix form the CLI prints: every built-in serializes cleanly and
    // covers no more than the known categories.
    for name in dialects::names() {
        let matrix = dialects::for_name(name).unwrap().matrix();
        let json = serde_json::to_string(&matrix).unwrap();
        assert!(json.starts_with('{'));
        for key in matrix.keys() {
            assert!(CATEGORIES.iter().any(|c| c.name() == *key));
        }
    }
}
