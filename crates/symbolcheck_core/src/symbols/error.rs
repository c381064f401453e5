use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SymbolError {
    #[error("Symbol error, symbols must have exactly two characters (symbol: {symbol}, length: {length})")]
    InvalidSymbolLength { symbol: String, length: usize },

    #[error("Symbol error, no valid symbol exists (element: {element})")]
    NoValidSymbol { element: String },
}
