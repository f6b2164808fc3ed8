//! Token definitions for the dialect registry
//!
//! This module defines the construct categories and construct tokens the
//! registry operates over. The scanner produces (category, token) pairs from
//! regex source text; the registry only treats them as opaque keys and values,
//! so everything here is plain data: two enums, a name for each variant, and
//! per-category `ALL` lists used to seed baselines and build the
//! all-implementing dialect.
//!
//! Naming convention: tokens that exist in two textual notations carry an
//! `Ab` (angle-bracket form, e.g. `(?<name>`) or `Sq` (single-quote form,
//! e.g. `(?'name'`) suffix. The suffix-free sibling is the canonical token
//! the normalization table collapses both forms into.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Classes of grammar constructs a scanner can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Anchor,
    Assertion,
    Backref,
    CharacterType,
    Conditional,
    Escape,
    FreeSpace,
    Group,
    Keep,
    Literal,
    Meta,
    PosixClass,
    Quantifier,
}

/// Specific construct identities, unique across all categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    // literal
    Literal,

    // free_space
    Comment,
    WhiteSpace,

    // anchor
    Bol,
    Eol,
    BufferStart,
    BufferEnd,
    MatchStart,
    WordBoundary,
    NonwordBoundary,

    // assertion
    Lookahead,
    NegLookahead,
    Lookbehind,
    NegLookbehind,

    // backref
    Number,
    NumberRef,
    NumberRefAb,
    NumberRefSq,
    NumberCall,
    NumberCallAb,
    NumberCallSq,
    NumberRelRef,
    NumberRelRefAb,
    NumberRelRefSq,
    NumberRelCall,
    NumberRelCallAb,
    NumberRelCallSq,
    NumberRecursionRef,
    NumberRecursionRefAb,
    NumberRecursionRefSq,
    NameRef,
    NameRefAb,
    NameRefSq,
    NameCall,
    NameCallAb,
    NameCallSq,
    NameRecursionRef,
    NameRecursionRefAb,
    NameRecursionRefSq,

    // character_type
    Digit,
    Nondigit,
    Space,
    Nonspace,
    Word,
    Nonword,
    HexDigit,
    NonHexDigit,
    Linebreak,
    ExtendedGrapheme,

    // conditional
    ConditionalOpen,
    ConditionalClose,
    ConditionalSeparator,
    Condition,

    // escape
    Backslash,
    AsciiEscape,
    Bell,
    Backspace,
    FormFeed,
    Newline,
    CarriageReturn,
    Tab,
    VerticalTab,
    Octal,
    Hex,
    Codepoint,
    CodepointList,
    Control,
    MetaSequence,

    // group
    Capture,
    Passive,
    Atomic,
    Options,
    InlineComment,
    Named,
    NamedAb,
    NamedSq,
    Absence,

    // keep
    Mark,

    // meta
    Dot,
    Alternation,

    // posix_class
    Alnum,
    Alpha,
    Blank,
    Cntrl,
    Graph,
    Lower,
    Print,
    Punct,
    Upper,
    Xdigit,

    // quantifier
    ZeroOrOne,
    ZeroOrOneReluctant,
    ZeroOrOnePossessive,
    ZeroOrMore,
    ZeroOrMoreReluctant,
    ZeroOrMorePossessive,
    OneOrMore,
    OneOrMoreReluctant,
    OneOrMorePossessive,
    Interval,
    IntervalReluctant,
    IntervalPossessive,
}

/// All categories, in display order
pub const CATEGORIES: &[Category] = &[
    Category::Anchor,
    Category::Assertion,
    Category::Backref,
    Category::CharacterType,
    Category::Conditional,
    Category::Escape,
    Category::FreeSpace,
    Category::Group,
    Category::Keep,
    Category::Literal,
    Category::Meta,
    Category::PosixClass,
    Category::Quantifier,
];

pub mod literal {
    use super::Token;
    pub const ALL: &[Token] = &[Token::Literal];
}

pub mod free_space {
    use super::Token;
    pub const ALL: &[Token] = &[Token::Comment, Token::WhiteSpace];
}

pub mod anchor {
    use super::Token;
    pub const ALL: &[Token] = &[
        Token::Bol,
        Token::Eol,
        Token::BufferStart,
        Token::BufferEnd,
        Token::MatchStart,
        Token::WordBoundary,
        Token::NonwordBoundary,
    ];
}

pub mod assertion {
    use super::Token;
    pub const LOOKAHEAD: &[Token] = &[Token::Lookahead, Token::NegLookahead];
    pub const LOOKBEHIND: &[Token] = &[Token::Lookbehind, Token::NegLookbehind];
    pub const ALL: &[Token] = &[
        Token::Lookahead,
        Token::NegLookahead,
        Token::Lookbehind,
        Token::NegLookbehind,
    ];
}

pub mod backref {
    use super::Token;
    /// Plain numeric backreference (`\1`)
    pub const PLAIN: &[Token] = &[Token::Number];
    /// Raw two-notation reference and call forms (`\k<...>`, `\k'...'`, `\g<...>`, `\g'...'`)
    pub const REF_CALL_FORMS: &[Token] = &[
        Token::NameRefAb,
        Token::NameRefSq,
        Token::NameCallAb,
        Token::NameCallSq,
        Token::NumberRefAb,
        Token::NumberRefSq,
        Token::NumberCallAb,
        Token::NumberCallSq,
        Token::NumberRelRefAb,
        Token::NumberRelRefSq,
        Token::NumberRelCallAb,
        Token::NumberRelCallSq,
    ];
    /// Raw two-notation recursion-reference forms (`\g<0>`, `\k<n+0>`, ...)
    pub const RECURSION_FORMS: &[Token] = &[
        Token::NameRecursionRefAb,
        Token::NameRecursionRefSq,
        Token::NumberRecursionRefAb,
        Token::NumberRecursionRefSq,
    ];
    pub const ALL: &[Token] = &[
        Token::Number,
        Token::NumberRef,
        Token::NumberRefAb,
        Token::NumberRefSq,
        Token::NumberCall,
        Token::NumberCallAb,
        Token::NumberCallSq,
        Token::NumberRelRef,
        Token::NumberRelRefAb,
        Token::NumberRelRefSq,
        Token::NumberRelCall,
        Token::NumberRelCallAb,
        Token::NumberRelCallSq,
        Token::NumberRecursionRef,
        Token::NumberRecursionRefAb,
        Token::NumberRecursionRefSq,
        Token::NameRef,
        Token::NameRefAb,
        Token::NameRefSq,
        Token::NameCall,
        Token::NameCallAb,
        Token::NameCallSq,
        Token::NameRecursionRef,
        Token::NameRecursionRefAb,
        Token::NameRecursionRefSq,
    ];
}

pub mod character_type {
    use super::Token;
    pub const BASIC: &[Token] = &[
        Token::Digit,
        Token::Nondigit,
        Token::Space,
        Token::Nonspace,
        Token::Word,
        Token::Nonword,
        Token::HexDigit,
        Token::NonHexDigit,
    ];
    pub const EXTENDED: &[Token] = &[Token::Linebreak, Token::ExtendedGrapheme];
    pub const ALL: &[Token] = &[
        Token::Digit,
        Token::Nondigit,
        Token::Space,
        Token::Nonspace,
        Token::Word,
        Token::Nonword,
        Token::HexDigit,
        Token::NonHexDigit,
        Token::Linebreak,
        Token::ExtendedGrapheme,
    ];
}

pub mod conditional {
    use super::Token;
    pub const ALL: &[Token] = &[
        Token::ConditionalOpen,
        Token::ConditionalClose,
        Token::ConditionalSeparator,
        Token::Condition,
    ];
}

pub mod escape {
    use super::Token;
    pub const BASIC: &[Token] = &[
        Token::Backslash,
        Token::AsciiEscape,
        Token::Bell,
        Token::Backspace,
        Token::FormFeed,
        Token::Newline,
        Token::CarriageReturn,
        Token::Tab,
        Token::VerticalTab,
        Token::Octal,
        Token::Hex,
        Token::Control,
        Token::MetaSequence,
    ];
    pub const UNICODE: &[Token] = &[Token::Codepoint, Token::CodepointList];
    pub const ALL: &[Token] = &[
        Token::Backslash,
        Token::AsciiEscape,
        Token::Bell,
        Token::Backspace,
        Token::FormFeed,
        Token::Newline,
        Token::CarriageReturn,
        Token::Tab,
        Token::VerticalTab,
        Token::Octal,
        Token::Hex,
        Token::Codepoint,
        Token::CodepointList,
        Token::Control,
        Token::MetaSequence,
    ];
}

pub mod group {
    use super::Token;
    pub const BASIC: &[Token] = &[
        Token::Capture,
        Token::Passive,
        Token::Atomic,
        Token::Options,
        Token::InlineComment,
    ];
    /// Raw two-notation named-group forms (`(?<name>`, `(?'name'`)
    pub const NAMED_FORMS: &[Token] = &[Token::NamedAb, Token::NamedSq];
    pub const ALL: &[Token] = &[
        Token::Capture,
        Token::Passive,
        Token::Atomic,
        Token::Options,
        Token::InlineComment,
        Token::Named,
        Token::NamedAb,
        Token::NamedSq,
        Token::Absence,
    ];
}

pub mod keep {
    use super::Token;
    pub const ALL: &[Token] = &[Token::Mark];
}

pub mod meta {
    use super::Token;
    pub const ALL: &[Token] = &[Token::Dot, Token::Alternation];
}

pub mod posix_class {
    use super::Token;
    pub const ALL: &[Token] = &[
        Token::Alnum,
        Token::Alpha,
        Token::Blank,
        Token::Cntrl,
        Token::Graph,
        Token::Lower,
        Token::Print,
        Token::Punct,
        Token::Upper,
        Token::Xdigit,
    ];
}

pub mod quantifier {
    use super::Token;
    pub const GREEDY: &[Token] = &[
        Token::ZeroOrOne,
        Token::ZeroOrMore,
        Token::OneOrMore,
        Token::Interval,
    ];
    pub const RELUCTANT: &[Token] = &[
        Token::ZeroOrOneReluctant,
        Token::ZeroOrMoreReluctant,
        Token::OneOrMoreReluctant,
        Token::IntervalReluctant,
    ];
    pub const POSSESSIVE: &[Token] = &[
        Token::ZeroOrOnePossessive,
        Token::ZeroOrMorePossessive,
        Token::OneOrMorePossessive,
        Token::IntervalPossessive,
    ];
    pub const ALL: &[Token] = &[
        Token::ZeroOrOne,
        Token::ZeroOrOneReluctant,
        Token::ZeroOrOnePossessive,
        Token::ZeroOrMore,
        Token::ZeroOrMoreReluctant,
        Token::ZeroOrMorePossessive,
        Token::OneOrMore,
        Token::OneOrMoreReluctant,
        Token::OneOrMorePossessive,
        Token::Interval,
        Token::IntervalReluctant,
        Token::IntervalPossessive,
    ];
}

/// The full token list for a category
pub fn all_for(category: Category) -> &'static [Token] {
    match category {
        Category::Anchor => anchor::ALL,
        Category::Assertion => assertion::ALL,
        Category::Backref => backref::ALL,
        Category::CharacterType => character_type::ALL,
        Category::Conditional => conditional::ALL,
        Category::Escape => escape::ALL,
        Category::FreeSpace => free_space::ALL,
        Category::Group => group::ALL,
        Category::Keep => keep::ALL,
        Category::Literal => literal::ALL,
        Category::Meta => meta::ALL,
        Category::PosixClass => posix_class::ALL,
        Category::Quantifier => quantifier::ALL,
    }
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Anchor => "anchor",
            Category::Assertion => "assertion",
            Category::Backref => "backref",
            Category::CharacterType => "character_type",
            Category::Conditional => "conditional",
            Category::Escape => "escape",
            Category::FreeSpace => "free_space",
            Category::Group => "group",
            Category::Keep => "keep",
            Category::Literal => "literal",
            Category::Meta => "meta",
            Category::PosixClass => "posix_class",
            Category::Quantifier => "quantifier",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATEGORIES
            .iter()
            .find(|c| c.name() == s)
            .copied()
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

impl Token {
    pub fn name(&self) -> &'static str {
        match self {
            Token::Literal => "literal",
            Token::Comment => "comment",
            Token::WhiteSpace => "white_space",
            Token::Bol => "bol",
            Token::Eol => "eol",
            Token::BufferStart => "buffer_start",
            Token::BufferEnd => "buffer_end",
            Token::MatchStart => "match_start",
            Token::WordBoundary => "word_boundary",
            Token::NonwordBoundary => "nonword_boundary",
            Token::Lookahead => "lookahead",
            Token::NegLookahead => "neg_lookahead",
            Token::Lookbehind => "lookbehind",
            Token::NegLookbehind => "neg_lookbehind",
            Token::Number => "number",
            Token::NumberRef => "number_ref",
            Token::NumberRefAb => "number_ref_ab",
            Token::NumberRefSq => "number_ref_sq",
            Token::NumberCall => "number_call",
            Token::NumberCallAb => "number_call_ab",
            Token::NumberCallSq => "number_call_sq",
            Token::NumberRelRef => "number_rel_ref",
            Token::NumberRelRefAb => "number_rel_ref_ab",
            Token::NumberRelRefSq => "number_rel_ref_sq",
            Token::NumberRelCall => "number_rel_call",
            Token::NumberRelCallAb => "number_rel_call_ab",
            Token::NumberRelCallSq => "number_rel_call_sq",
            Token::NumberRecursionRef => "number_recursion_ref",
            Token::NumberRecursionRefAb => "number_recursion_ref_ab",
            Token::NumberRecursionRefSq => "number_recursion_ref_sq",
            Token::NameRef => "name_ref",
            Token::NameRefAb => "name_ref_ab",
            Token::NameRefSq => "name_ref_sq",
            Token::NameCall => "name_call",
            Token::NameCallAb => "name_call_ab",
            Token::NameCallSq => "name_call_sq",
            Token::NameRecursionRef => "name_recursion_ref",
            Token::NameRecursionRefAb => "name_recursion_ref_ab",
            Token::NameRecursionRefSq => "name_recursion_ref_sq",
            Token::Digit => "digit",
            Token::Nondigit => "nondigit",
            Token::Space => "space",
            Token::Nonspace => "nonspace",
            Token::Word => "word",
            Token::Nonword => "nonword",
            Token::HexDigit => "hex_digit",
            Token::NonHexDigit => "non_hex_digit",
            Token::Linebreak => "linebreak",
            Token::ExtendedGrapheme => "extended_grapheme",
            Token::ConditionalOpen => "conditional_open",
            Token::ConditionalClose => "conditional_close",
            Token::ConditionalSeparator => "conditional_separator",
            Token::Condition => "condition",
            Token::Backslash => "backslash",
            Token::AsciiEscape => "ascii_escape",
            Token::Bell => "bell",
            Token::Backspace => "backspace",
            Token::FormFeed => "form_feed",
            Token::Newline => "newline",
            Token::CarriageReturn => "carriage_return",
            Token::Tab => "tab",
            Token::VerticalTab => "vertical_tab",
            Token::Octal => "octal",
            Token::Hex => "hex",
            Token::Codepoint => "codepoint",
            Token::CodepointList => "codepoint_list",
            Token::Control => "control",
            Token::MetaSequence => "meta_sequence",
            Token::Capture => "capture",
            Token::Passive => "passive",
            Token::Atomic => "atomic",
            Token::Options => "options",
            Token::InlineComment => "inline_comment",
            Token::Named => "named",
            Token::NamedAb => "named_ab",
            Token::NamedSq => "named_sq",
            Token::Absence => "absence",
            Token::Mark => "mark",
            Token::Dot => "dot",
            Token::Alternation => "alternation",
            Token::Alnum => "alnum",
            Token::Alpha => "alpha",
            Token::Blank => "blank",
            Token::Cntrl => "cntrl",
            Token::Graph => "graph",
            Token::Lower => "lower",
            Token::Print => "print",
            Token::Punct => "punct",
            Token::Upper => "upper",
            Token::Xdigit => "xdigit",
            Token::ZeroOrOne => "zero_or_one",
            Token::ZeroOrOneReluctant => "zero_or_one_reluctant",
            Token::ZeroOrOnePossessive => "zero_or_one_possessive",
            Token::ZeroOrMore => "zero_or_more",
            Token::ZeroOrMoreReluctant => "zero_or_more_reluctant",
            Token::ZeroOrMorePossessive => "zero_or_more_possessive",
            Token::OneOrMore => "one_or_more",
            Token::OneOrMoreReluctant => "one_or_more_reluctant",
            Token::OneOrMorePossessive => "one_or_more_possessive",
            Token::Interval => "interval",
            Token::IntervalReluctant => "interval_reluctant",
            Token::IntervalPossessive => "interval_possessive",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Token {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATEGORIES
            .iter()
            .flat_map(|c| all_for(*c).iter())
            .find(|t| t.name() == s)
            .copied()
            .ok_or_else(|| format!("unknown token: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_round_trip() {
        for category in CATEGORIES {
            assert_eq!(category.name().parse::<Category>(), Ok(*category));
        }
    }

    #[test]
    fn token_names_round_trip() {
        for category in CATEGORIES {
            for token in all_for(*category) {
                assert_eq!(token.name().parse::<Token>(), Ok(*token));
            }
        }
    }

    #[test]
    fn all_lists_have_no_duplicates() {
        use std::collections::HashSet;
        let mut seen = HashSet::new();
        for category in CATEGORIES {
            for token in all_for(*category) {
                assert!(seen.insert(*token), "{token} listed twice");
            }
        }
    }

    #[test]
    fn sublists_are_covered_by_all() {
        for sublist in [
            assertion::LOOKAHEAD,
            assertion::LOOKBEHIND,
            backref::PLAIN,
            backref::REF_CALL_FORMS,
            backref::RECURSION_FORMS,
            character_type::BASIC,
            character_type::EXTENDED,
            escape::BASIC,
            escape::UNICODE,
            group::BASIC,
            group::NAMED_FORMS,
            quantifier::GREEDY,
            quantifier::RELUCTANT,
            quantifier::POSSESSIVE,
        ] {
            for token in sublist {
                let covered = CATEGORIES
                    .iter()
                    .any(|c| all_for(*c).contains(token));
                assert!(covered, "{token} missing from its category list");
            }
        }
    }
}
