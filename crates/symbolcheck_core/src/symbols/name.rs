//! Case-folded element names.
//!
//! Element names are folded to lower case once, at construction, and are never
//! modified afterwards. The original casing is not kept: every query compares
//! folded characters, and rendering an [`ElementName`] capitalizes the folded
//! form rather than echoing the caller's input.

use std::{collections::BTreeSet, fmt::Display};

use super::fold;

/// An element name, folded to a single case.
///
/// The name is stored as a sequence of `char`s so that positions used by the
/// validity rule are character positions, not byte offsets. No constraint is
/// placed on the content: empty and single-letter names are accepted, and the
/// queries built on top of them report that no symbol exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ElementName {
    chars: Vec<char>,
}

impl ElementName {
    pub fn new(name: &str) -> Self {
        Self { chars: name.chars().map(fold).collect() }
    }

    /// Number of characters in the name.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Folded characters of the name, in order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns the position of the first occurrence of `c`, compared case-insensitively.
    pub fn first_position(&self, c: char) -> Option<usize> {
        let c = fold(c);
        self.chars.iter().position(|&candidate| candidate == c)
    }

    /// Returns the characters strictly after `position`.
    ///
    /// The slice is empty when `position` is the last index of the name or lies
    /// beyond it.
    pub fn suffix_after(&self, position: usize) -> &[char] {
        self.chars.get(position + 1..).unwrap_or_default()
    }

    /// Returns the set of distinct folded characters appearing in the name.
    pub fn distinct_letters(&self) -> BTreeSet<char> {
        self.chars.iter().copied().collect()
    }
}

impl From<&str> for ElementName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Display for ElementName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut chars = self.chars.iter();
        if let Some(first) = chars.next() {
            write!(f, "{}", first.to_uppercase())?;
        }
        chars.try_for_each(|c| write!(f, "{c}"))
    }
}
