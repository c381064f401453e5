//! Two-letter symbol candidates.

use std::{fmt::Display, str::FromStr};

use super::{SymbolError, fold};

/// A two-letter symbol, folded to the same case as element names.
///
/// Symbols order alphabetically by first letter, then by second letter. They
/// render with the first letter upper case and the second lower case, the way
/// chemical symbols are written (`Ei`, `Nn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    first: char,
    second: char,
}

impl Symbol {
    pub fn new(first: char, second: char) -> Self {
        Self { first: fold(first), second: fold(second) }
    }

    pub fn first(&self) -> char {
        self.first
    }

    pub fn second(&self) -> char {
        self.second
    }
}

impl TryFrom<&str> for Symbol {
    type Error = SymbolError;

    fn try_from(symbol: &str) -> Result<Self, Self::Error> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(second), None) => Ok(Self::new(first, second)),
            _ => Err(SymbolError::InvalidSymbolLength {
                symbol: symbol.to_string(),
                length: symbol.chars().count(),
            }),
        }
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.first.to_uppercase(), self.second)
    }
}
