//! Built-in dialect definitions
//!
//! Each dialect is built by explicit composition: start from the baseline or
//! from another dialect's finished capability set, then apply an ordered list
//! of additive deltas. Nothing is inherited implicitly, so a dialect's full
//! feature surface can be audited by reading one function top to bottom.
//!
//! The version deltas reconstruct the Ruby regex engine family: 1.8 is the
//! classic engine, 1.9 brings the Oniguruma additions (named groups,
//! lookbehind, possessive quantifiers), 2.0 the Onigmo ones (conditionals,
//! keep mark, extended character types), 2.4 the absence group.
//!
//! All built-ins live behind a `Lazy` map and are only ever handed out as
//! `&'static Features`, so after the map is built the sets are immutable.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use super::features::Features;
use super::token::{self, Category, Token};

/// Classic engine, the common ancestor of the family
pub fn ruby_v18() -> Features {
    let mut f = Features::new("ruby/1.8");
    f.add(Category::Anchor, token::anchor::ALL);
    f.add(Category::Assertion, token::assertion::LOOKAHEAD);
    f.add(Category::Backref, token::backref::PLAIN);
    f.add(Category::CharacterType, token::character_type::BASIC);
    f.add(Category::Escape, token::escape::BASIC);
    f.add(Category::Group, token::group::BASIC);
    f.add(Category::Meta, token::meta::ALL);
    f.add(Category::PosixClass, token::posix_class::ALL);
    f.add(Category::Quantifier, token::quantifier::GREEDY);
    f.add(Category::Quantifier, token::quantifier::RELUCTANT);
    f
}

/// 1.8 plus the Oniguruma additions
pub fn ruby_v19() -> Features {
    let mut f = ruby_v18().relabeled("ruby/1.9");
    f.add(Category::Assertion, token::assertion::LOOKBEHIND);
    f.add(Category::Backref, token::backref::REF_CALL_FORMS);
    f.add(Category::Escape, token::escape::UNICODE);
    f.add(Category::Group, token::group::NAMED_FORMS);
    f.add(Category::Quantifier, token::quantifier::POSSESSIVE);
    f
}

/// 1.9 plus the Onigmo additions
pub fn ruby_v20() -> Features {
    let mut f = ruby_v19().relabeled("ruby/2.0");
    f.add(Category::Backref, token::backref::RECURSION_FORMS);
    f.add(Category::CharacterType, token::character_type::EXTENDED);
    f.add(Category::Conditional, token::conditional::ALL);
    f.add(Category::Keep, token::keep::ALL);
    f
}

/// 2.0 plus the absence group
pub fn ruby_v24() -> Features {
    let mut f = ruby_v20().relabeled("ruby/2.4");
    f.add(Category::Group, &[Token::Absence]);
    f
}

/// Implements every token of every category. Useful as a permissive default
/// and for tooling that has no dialect context; also accepts pre-normalized
/// canonical pairs.
pub fn any() -> Features {
    let mut f = Features::new("any");
    for category in token::CATEGORIES {
        f.add(*category, token::all_for(*category));
    }
    f
}

static DIALECTS: Lazy<BTreeMap<&'static str, Features>> = Lazy::new(|| {
    BTreeMap::from([
        ("ruby/1.8", ruby_v18()),
        ("ruby/1.9", ruby_v19()),
        ("ruby/2.0", ruby_v20()),
        ("ruby/2.4", ruby_v24()),
        ("any", any()),
    ])
});

/// Look up a built-in dialect by name (e.g. `"ruby/1.9"`)
pub fn for_name(name: &str) -> Option<&'static Features> {
    DIALECTS.get(name)
}

/// Names of every built-in dialect, sorted
pub fn names() -> impl Iterator<Item = &'static str> {
    DIALECTS.keys().copied()
}
