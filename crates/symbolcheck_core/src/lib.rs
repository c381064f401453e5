//! Element symbol validation.
//!
//! A symbol is a two-letter abbreviation of an element name. It is legal for a
//! given name when both of its letters appear in the name, in the same order,
//! at two distinct positions. The first letter does not have to be the first
//! letter of the name and the two letters do not have to be adjacent: `"Cy"`
//! is a legal symbol for Mercury, `"Hg"` is not.
//!
//! [`symbols::SymbolValidator`] binds one element name and answers three
//! questions about it: whether a candidate symbol is legal, which legal symbol
//! comes first alphabetically, and how many distinct legal symbols exist.
//!
//! ```
//! use symbolcheck_core::symbols::SymbolValidator;
//!
//! let xenon = SymbolValidator::new("Xenon");
//! assert!(xenon.validate("Nn"));
//! assert!(!xenon.validate("Oo"));
//! assert_eq!(SymbolValidator::new("Gozerium").first_valid_symbol_in_alphabetical_order().unwrap().to_string(), "Ei");
//! assert_eq!(SymbolValidator::new("Zuulon").number_of_valid_symbols(), 11);
//! ```

#[cfg(test)]
pub mod tests;

pub mod symbols;

#[cfg(feature = "symbolcheck_tracing")]
pub mod symbolcheck_tracing {
    use std::sync::Once;
    use tracing_subscriber::{EnvFilter, fmt};

    static INIT: Once = Once::new();

    /// Initialize tracing for tests
    /// This sets up a tracing subscriber that will display logs during test execution.
    /// Call this at the beginning of tests that need to see validator output.
    pub fn init() {
        INIT.call_once(|| {
            let filter = EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new("off"))
                .unwrap();

            fmt().with_target(false).with_test_writer().with_env_filter(filter).init();
        });
    }
}
