//! Canonicalization of alias tokens
//!
//! Named groups and name/number references exist in two textual notations,
//! angle-bracket (`(?<x>`, `\k<x>`) and single-quote (`(?'x'`, `\k'x'`).
//! Downstream tree construction should not care which one was typed, so both
//! raw forms collapse to one canonical token. The alias surface is kept as a
//! single data table keyed by (category, raw token) rather than branch logic,
//! which makes it reviewable and exhaustively testable.
//!
//! Any pair absent from the table is its own canonical form, so categories
//! with no aliases pass through unchanged.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::token::{Category, Token};

/// Group aliases: both named-group notations become `named`
const GROUP_ALIASES: &[(Token, Token)] = &[
    (Token::NamedAb, Token::Named),
    (Token::NamedSq, Token::Named),
];

/// Backref aliases: each reference/call construct's two notations become one
/// canonical token
const BACKREF_ALIASES: &[(Token, Token)] = &[
    (Token::NameRefAb, Token::NameRef),
    (Token::NameRefSq, Token::NameRef),
    (Token::NameCallAb, Token::NameCall),
    (Token::NameCallSq, Token::NameCall),
    (Token::NameRecursionRefAb, Token::NameRecursionRef),
    (Token::NameRecursionRefSq, Token::NameRecursionRef),
    (Token::NumberRefAb, Token::NumberRef),
    (Token::NumberRefSq, Token::NumberRef),
    (Token::NumberCallAb, Token::NumberCall),
    (Token::NumberCallSq, Token::NumberCall),
    (Token::NumberRelRefAb, Token::NumberRelRef),
    (Token::NumberRelRefSq, Token::NumberRelRef),
    (Token::NumberRelCallAb, Token::NumberRelCall),
    (Token::NumberRelCallSq, Token::NumberRelCall),
    (Token::NumberRecursionRefAb, Token::NumberRecursionRef),
    (Token::NumberRecursionRefSq, Token::NumberRecursionRef),
];

static ALIASES: Lazy<HashMap<(Category, Token), (Category, Token)>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for (raw, canonical) in GROUP_ALIASES {
        table.insert((Category::Group, *raw), (Category::Group, *canonical));
    }
    for (raw, canonical) in BACKREF_ALIASES {
        table.insert((Category::Backref, *raw), (Category::Backref, *canonical));
    }
    table
});

/// Canonical (category, token) pair for a raw scanned pair. Identity for
/// everything outside the alias table.
pub fn normalize(category: Category, token: Token) -> (Category, Token) {
    ALIASES
        .get(&(category, token))
        .copied()
        .unwrap_or((category, token))
}
