//! # rx-syntax
//!
//! Feature-capability registry for regular-expression dialects.
//!
//! A dialect (a regex engine version or flavor) is described by a capability
//! set: which construct tokens it supports in each construct category. A
//! parser checks every scanned construct against the active dialect with
//! [`Features::require`](syntax::Features::require) and obtains the canonical
//! spelling for tree construction with [`normalize`](syntax::normalize).
//!
//! Built-in dialects live in [`syntax::dialects`]; callers can also assemble
//! their own `Features` value from scratch.

pub mod syntax;

pub use syntax::{normalize, Category, Features, Token, UnsupportedFeatureError};
