//! Symbol validator bound to one element name.
//!
//! The validator answers three queries, all derived from the same ordered
//! subsequence relation:
//!
//! - **Validation**: is a candidate symbol legal for the element?
//! - **Alphabetical minimum**: which legal symbol comes first alphabetically?
//! - **Distinct count**: how many distinct legal symbols does the element have?
//!
//! Every query borrows the validator immutably and has no side effect besides
//! logging, so a single validator can be shared freely across threads.
//!
//! ## Degenerate Names
//!
//! Names shorter than two characters have no legal symbol at all. Validation
//! rejects every candidate, the distinct count is zero and the alphabetical
//! minimum reports [`SymbolError::NoValidSymbol`].

use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::{ElementName, Symbol, SymbolError};

/// Validates two-letter symbols against an element name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolValidator {
    element: ElementName,
}

impl SymbolValidator {
    /// Creates a validator bound to `name`.
    ///
    /// The name is folded to lower case once; no other constraint is enforced.
    pub fn new(name: &str) -> Self {
        let element = ElementName::new(name);
        debug!("[validator] Bound element {} ({} characters)", element, element.len());
        Self { element }
    }

    pub fn element(&self) -> &ElementName {
        &self.element
    }

    /// Returns `true` if `symbol` is a legal symbol for the bound element.
    ///
    /// The symbol must have exactly two characters, and those characters must
    /// appear in the element name in the same order, comparing case-insensitively.
    /// Any other length yields `false`.
    pub fn validate(&self, symbol: &str) -> bool {
        let valid = Symbol::try_from(symbol).is_ok_and(|symbol| self.validate_symbol(&symbol));
        trace!("[validator] {} -> {} for element {}", symbol, valid, self.element);
        valid
    }

    /// Returns `true` if a pre-parsed `symbol` is legal for the bound element.
    ///
    /// The first letter is located at its first occurrence in the name; the
    /// second letter must then occur anywhere after it. Taking the first
    /// occurrence leaves the longest possible remainder, so a repeated letter
    /// such as `Nn` for Xenon is accepted when the letter occurs twice and
    /// rejected when it occurs only once.
    pub fn validate_symbol(&self, symbol: &Symbol) -> bool {
        self.element
            .first_position(symbol.first())
            .is_some_and(|position| self.element.suffix_after(position).contains(&symbol.second()))
    }

    /// Returns the alphabetically first legal symbol of the bound element.
    ///
    /// The first letter is the smallest character among every position but
    /// the last, taken at its leftmost occurrence. The second letter is the
    /// smallest character after that occurrence. Any symbol with a larger
    /// first letter sorts later regardless of its second letter, so the two
    /// greedy choices give the global minimum.
    ///
    /// # Errors
    ///
    /// [`SymbolError::NoValidSymbol`] when the name has fewer than two characters.
    pub fn first_valid_symbol_in_alphabetical_order(&self) -> Result<Symbol, SymbolError> {
        let candidates = self.element.chars().split_last().map_or(&[][..], |(_, init)| init);

        let symbol = candidates
            .iter()
            .enumerate()
            .min_by_key(|&(_, c)| c)
            .and_then(|(position, &first)| {
                self.element
                    .suffix_after(position)
                    .iter()
                    .min()
                    .map(|&second| Symbol::new(first, second))
            })
            .ok_or_else(|| SymbolError::NoValidSymbol { element: self.element.to_string() })?;

        debug!("[validator] First valid symbol for {} is {}", self.element, symbol);
        Ok(symbol)
    }

    /// Returns the number of distinct legal symbols of the bound element.
    ///
    /// For every distinct letter, the legal second letters are the distinct
    /// characters after its first occurrence. Iterating over distinct first
    /// letters means no symbol is counted twice.
    pub fn number_of_valid_symbols(&self) -> usize {
        let count: usize = self
            .element
            .distinct_letters()
            .into_iter()
            .filter_map(|first| self.element.first_position(first))
            .map(|position| {
                self.element.suffix_after(position).iter().collect::<BTreeSet<_>>().len()
            })
            .sum();

        debug!("[validator] {} has {} valid symbols", self.element, count);
        count
    }

    /// Returns every distinct legal symbol of the bound element, in alphabetical order.
    pub fn valid_symbols(&self) -> BTreeSet<Symbol> {
        self.element
            .distinct_letters()
            .into_iter()
            .filter_map(|first| {
                self.element.first_position(first).map(|position| (first, position))
            })
            .flat_map(|(first, position)| {
                self.element
                    .suffix_after(position)
                    .iter()
                    .map(move |&second| Symbol::new(first, second))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_validator_validate() {
        let mercury = SymbolValidator::new("Mercury");
        assert!(mercury.validate("Cy"));
        assert!(mercury.validate("cY"));
        assert!(!mercury.validate("Hg"));
        assert!(!mercury.validate("Yc"));
        assert!(!mercury.validate("C"));
        assert!(!mercury.validate("Cyr"));
    }

    #[test]
    fn unit_validator_validate_symbol() {
        let xenon = SymbolValidator::new("Xenon");
        assert!(xenon.validate_symbol(&Symbol::new('n', 'n')));
        assert!(!xenon.validate_symbol(&Symbol::new('o', 'o')));
    }

    #[test]
    fn unit_validator_first_valid_symbol() {
        assert_eq!(
            SymbolValidator::new("Gozerium").first_valid_symbol_in_alphabetical_order(),
            Ok(Symbol::new('e', 'i'))
        );
        // The smallest letter is last, so it can only be a second letter.
        assert_eq!(
            SymbolValidator::new("Edcba").first_valid_symbol_in_alphabetical_order(),
            Ok(Symbol::new('b', 'a'))
        );
    }

    #[test]
    fn unit_validator_number_of_valid_symbols() {
        assert_eq!(SymbolValidator::new("Zuulon").number_of_valid_symbols(), 11);
        assert_eq!(SymbolValidator::new("Abc").number_of_valid_symbols(), 3);
    }

    #[test]
    fn unit_validator_valid_symbols() {
        let symbols = SymbolValidator::new("Abc").valid_symbols();
        assert_eq!(
            symbols.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["Ab", "Ac", "Bc"]
        );
    }

    #[test]
    fn unit_validator_degenerate_names() {
        for name in ["", "B"] {
            let validator = SymbolValidator::new(name);
            assert!(!validator.validate("Bb"));
            assert_eq!(validator.number_of_valid_symbols(), 0);
            assert!(validator.valid_symbols().is_empty());
            assert_eq!(
                validator.first_valid_symbol_in_alphabetical_order(),
                Err(SymbolError::NoValidSymbol { element: ElementName::new(name).to_string() })
            );
        }
    }
}
