//! Dialect feature registry
//!
//! This module decides, per configured syntax dialect, whether a grammar
//! construct is legal, and collapses alias spellings of the same construct to
//! one canonical form.
//!
//! Structure:
//!     The scanner hands every construct to the registry as a raw
//!     (category, token) pair. The parser validates it against the active
//!     dialect and then normalizes it for tree construction:
//!
//! 1. `features.require(category, raw_token)?` - legality under the dialect
//! 2. `normalize(category, raw_token)` - the canonical pair for the AST node
//!
//! Dialect capability sets are built once during setup by composing additive
//! and subtractive deltas over a base set (see [dialects]), then shared
//! read-only for the lifetime of all parses.

pub mod dialects;
pub mod features;
pub mod normalization;
pub mod token;

pub use features::{Features, UnsupportedFeatureError};
pub use normalization::normalize;
pub use token::{Category, Token};
