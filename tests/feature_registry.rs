//! Integration tests for the capability-set registry
//!
//! These exercise the registry the way dialect definitions and the parser
//! use it: setup-time add/remove mutations, then read-only supports/require
//! queries, including the require-then-normalize sequence run per construct.

use rx_syntax::syntax::dialects;
use rx_syntax::syntax::token;
use rx_syntax::{normalize, Category, Features, Token};

#[test]
fn added_tokens_are_supported() {
    let mut features = Features::new("test");
    features.add(Category::Assertion, &[Token::Lookahead]);
    assert!(features.supports(Category::Assertion, Token::Lookahead));
}

#[test]
fn removed_tokens_are_not_supported() {
    let mut features = Features::new("test");
    features.add(Category::Assertion, token::assertion::ALL);
    features.remove(Category::Assertion, &[Token::NegLookbehind]);
    assert!(!features.supports(Category::Assertion, Token::NegLookbehind));
    assert!(features.supports(Category::Assertion, Token::Lookbehind));
}

#[test]
fn never_added_tokens_are_rejected() {
    let features = Features::new("test");
    assert!(!features.supports(Category::Conditional, Token::Condition));
    let err = features
        .require(Category::Conditional, Token::Condition)
        .unwrap_err();
    assert_eq!(err.dialect, "test");
    assert_eq!(err.category, Category::Conditional);
    assert_eq!(err.token, Token::Condition);
}

#[test]
fn fresh_instances_carry_the_baseline() {
    let features = Features::new("fresh");
    for t in token::literal::ALL {
        assert!(features.supports(Category::Literal, *t));
    }
    for t in token::free_space::ALL {
        assert!(features.supports(Category::FreeSpace, *t));
    }
}

#[test]
fn repeated_add_changes_nothing() {
    let mut once = Features::new("test");
    once.add(Category::Group, token::group::BASIC);
    let mut twice = Features::new("test");
    twice.add(Category::Group, token::group::BASIC);
    twice.add(Category::Group, token::group::BASIC);
    assert_eq!(
        once.capabilities(Category::Group),
        twice.capabilities(Category::Group)
    );
}

#[test]
fn require_on_supported_pair_has_no_observable_effect() {
    let mut features = Features::new("test");
    features.add(Category::Meta, token::meta::ALL);
    let before = features.matrix();
    assert!(features.require(Category::Meta, Token::Dot).is_ok());
    assert!(features.require(Category::Meta, Token::Dot).is_ok());
    assert_eq!(features.matrix(), before);
    assert_eq!(features.label(), "test");
}

#[test]
fn parser_sequence_validates_raw_and_builds_with_canonical() {
    // The parser checks the raw token as scanned, then hands the normalized
    // pair to tree construction.
    let dialect = dialects::for_name("ruby/1.9").unwrap();
    let (category, raw) = (Category::Group, Token::NamedSq);
    assert!(dialect.require(category, raw).is_ok());
    assert_eq!(normalize(category, raw), (Category::Group, Token::Named));
}

#[test]
fn unsupported_construct_error_names_the_dialect() {
    let dialect = dialects::for_name("ruby/1.8").unwrap();
    let err = dialect
        .require(Category::Group, Token::NamedAb)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "`ruby/1.8` does not support group:named_ab"
    );
}
