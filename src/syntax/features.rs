//! Capability-set registry
//!
//! A `Features` value is the supported-construct matrix of one dialect: a map
//! from construct category to the set of construct tokens that dialect
//! accepts. Dialect-definition code mutates it with [`Features::add`] and
//! [`Features::remove`] during setup; the parser then only queries it through
//! [`Features::supports`] and [`Features::require`].
//!
//! The sets hold *raw* tokens as produced by the scanner. Legality is checked
//! on the raw token; the canonical pair for tree construction comes from
//! [`normalize`](crate::syntax::normalization::normalize) afterwards.
//!
//! Mutation is setup-time only. After setup a `Features` value is shared
//! read-only (the built-in dialects are handed out as `&'static Features`),
//! so no internal synchronization is carried.

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use super::token::{self, Category, Token};

/// Returned for reads of a category no mutation ever touched
static EMPTY: Lazy<HashSet<Token>> = Lazy::new(HashSet::new);

/// Raised when a scanned construct is not part of the active dialect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedFeatureError {
    pub dialect: String,
    pub category: Category,
    pub token: Token,
}

impl fmt::Display for UnsupportedFeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` does not support {}:{}",
            self.dialect, self.category, self.token
        )
    }
}

impl std::error::Error for UnsupportedFeatureError {}

/// Supported-construct matrix of one dialect
#[derive(Debug, Clone)]
pub struct Features {
    label: String,
    implemented: HashMap<Category, HashSet<Token>>,
}

impl Features {
    /// Create a capability set seeded with the baseline every dialect shares:
    /// all literal and all free-space tokens.
    pub fn new(label: impl Into<String>) -> Self {
        let mut features = Features {
            label: label.into(),
            implemented: HashMap::new(),
        };
        features.add(Category::Literal, token::literal::ALL);
        features.add(Category::FreeSpace, token::free_space::ALL);
        features
    }

    /// Human-readable dialect identity, for diagnostics only
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The same capability set under a new label. Used when deriving one
    /// dialect from another's set.
    pub fn relabeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// The supported-token set for a category. Categories never touched by a
    /// mutation read as a shared empty set; only the mutation paths allocate
    /// entries.
    pub fn capabilities(&self, category: Category) -> &HashSet<Token> {
        self.implemented.get(&category).unwrap_or(&EMPTY)
    }

    fn entry(&mut self, category: Category) -> &mut HashSet<Token> {
        self.implemented.entry(category).or_default()
    }

    /// Mark each token as supported. Re-adding a present token is a no-op.
    pub fn add(&mut self, category: Category, tokens: &[Token]) {
        self.entry(category).extend(tokens.iter().copied());
    }

    /// Withdraw support for each token. Absent tokens are no-ops.
    pub fn remove(&mut self, category: Category, tokens: &[Token]) {
        if let Some(set) = self.implemented.get_mut(&category) {
            for token in tokens {
                set.remove(token);
            }
        }
    }

    /// Membership test for one raw (category, token) pair
    pub fn supports(&self, category: Category, token: Token) -> bool {
        self.capabilities(category).contains(&token)
    }

    /// Enforcement entry point used by the parser: fails with
    /// [`UnsupportedFeatureError`] unless the raw pair is supported.
    pub fn require(
        &self,
        category: Category,
        token: Token,
    ) -> Result<(), UnsupportedFeatureError> {
        if self.supports(category, token) {
            Ok(())
        } else {
            Err(UnsupportedFeatureError {
                dialect: self.label.clone(),
                category,
                token,
            })
        }
    }

    /// The full matrix as sorted names, category -> token names. Stable
    /// ordering makes it directly serializable and snapshot-friendly.
    pub fn matrix(&self) -> BTreeMap<&'static str, Vec<&'static str>> {
        let mut matrix = BTreeMap::new();
        for (category, tokens) in &self.implemented {
            if tokens.is_empty() {
                continue;
            }
            let mut names: Vec<_> = tokens.iter().map(|t| t.name()).collect();
            names.sort_unstable();
            matrix.insert(category.name(), names);
        }
        matrix
    }
}
