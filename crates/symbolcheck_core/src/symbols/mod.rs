//! Symbol validation module.
//!
//! ## Components
//!
//! - **Name**: [`ElementName`], the case-folded element name every query runs against
//! - **Symbol**: [`Symbol`], a parsed two-letter candidate with alphabetical ordering
//! - **Validator**: [`SymbolValidator`], the validity rule and the two analyses built on it
//! - **Error Handling**: [`SymbolError`] for malformed symbols and degenerate names
//!
//! ## The Validity Rule
//!
//! A symbol `(a, b)` is valid for a name `N` when there are indices `i < j` with
//! `N[i] == a` and `N[j] == b`, comparing case-insensitively. This is an ordered
//! subsequence test, not a substring test, so `(x, x)` is valid only when `x`
//! occurs at least twice in the name.

pub mod error;
pub mod name;
pub mod symbol;
pub mod validator;

pub use error::SymbolError;
pub use name::ElementName;
pub use symbol::Symbol;
pub use validator::SymbolValidator;

/// Folds a character to the single case used for every comparison.
///
/// Characters whose lower-case form expands to several characters keep only
/// the first one, so folded names stay position-aligned with their input.
pub(crate) fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
