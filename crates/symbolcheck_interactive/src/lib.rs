//! Instruction interpreter for symbol validation sessions.
//!
//! This module provides a simple DSL for querying a [`SymbolValidator`] from a
//! terminal or a playbook file. Instructions follow the format:
//!
//! `ACTION [argument]`
//!
//! where:
//! - ACTION := "ELEMENT" | "VALIDATE" | "FIRST" | "COUNT" | "LIST" | "HELP"
//! - argument := element name (for ELEMENT) | symbol (for VALIDATE)
//!
//! Examples:
//! - `ELEMENT Xenon`
//! - `VALIDATE Nn`
//! - `FIRST`
//! - `COUNT`

use std::convert::TryFrom;
use std::fmt::Display;

use symbolcheck_core::symbols::{ElementName, Symbol, SymbolValidator};
use tracing::debug;

/// Represents a command action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Nil,
    Element,
    Validate,
    First,
    Count,
    List,
    Help,
}

impl Command {
    /// Parse a command from a string
    fn parse(s: &str) -> anyhow::Result<Self> {
        match s.to_uppercase().as_str() {
            "ELEMENT" | "E" => Ok(Command::Element),
            "VALIDATE" | "V" => Ok(Command::Validate),
            "FIRST" | "F" => Ok(Command::First),
            "COUNT" | "N" => Ok(Command::Count),
            "LIST" | "L" => Ok(Command::List),
            "HELP" | "H" | "?" => Ok(Command::Help),
            _ => Err(anyhow::anyhow!("Unknown command: {}", s)),
        }
    }

    fn arity(&self) -> usize {
        match self {
            Command::Nil => 1,
            Command::Help => 1,
            Command::First => 1,
            Command::Count => 1,
            Command::List => 1,
            Command::Element => 2,
            Command::Validate => 2,
        }
    }
}

/// Represents a complete instruction: ACTION [ARGUMENT]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub command: Command,
    pub argument: Option<String>,
}

impl TryFrom<&str> for Instruction {
    type Error = anyhow::Error;

    /// Parse an instruction string in the format "ACTION [argument]"
    ///
    /// # Examples
    /// - `ELEMENT Mercury`
    /// - `VALIDATE Cy`
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();

        // Skip empty lines and comments
        if s.is_empty() || s.starts_with('#') {
            return Ok(Instruction { command: Command::Nil, argument: None });
        }

        let parts: Vec<&str> = s.splitn(2, char::is_whitespace).collect();
        let command = Command::parse(parts[0])?;
        if command.arity() != parts.len() {
            return Err(anyhow::anyhow!(
                "Invalid number of arguments for command: {}, expected {}, got {}",
                parts[0],
                command.arity(),
                parts.len()
            ));
        }

        let argument = parts.get(1).map(|arg| arg.trim().to_string());
        Ok(Instruction { command, argument })
    }
}

impl TryFrom<String> for Instruction {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Instruction, anyhow::Error> {
        Instruction::try_from(s.as_str())
    }
}

/// Result of a successfully executed instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Nil,
    Bound(ElementName),
    Validity { symbol: String, element: ElementName, valid: bool },
    First(Symbol),
    Count(usize),
    Symbols(Vec<Symbol>),
    Help,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Nil => Ok(()),
            Outcome::Bound(element) => write!(f, "✓ Bound element: {element}"),
            Outcome::Validity { symbol, element, valid: true } => {
                write!(f, "✓ '{symbol}' is a valid symbol for {element}")
            }
            Outcome::Validity { symbol, element, valid: false } => {
                write!(f, "✗ '{symbol}' is not a valid symbol for {element}")
            }
            Outcome::First(symbol) => write!(f, "{symbol}"),
            Outcome::Count(count) => write!(f, "{count}"),
            Outcome::Symbols(symbols) => {
                let symbols: Vec<String> = symbols.iter().map(ToString::to_string).collect();
                write!(f, "{}", symbols.join(" "))
            }
            Outcome::Help => write!(f, "{HELP}"),
        }
    }
}

const HELP: &str = "\
Available instructions:
 $ ELEMENT <name>                  # Bind the element name to validate against
 $ VALIDATE <symbol>               # Check whether a symbol is valid for the element
 $ FIRST                           # Show the alphabetically first valid symbol
 $ COUNT                           # Show the number of distinct valid symbols
 $ LIST                            # Show every valid symbol in alphabetical order
 $ HELP                            # Show this help message
 $ # [comment]                     # Comment line
 $                                 # No operation";

/// Holds the validator bound by the latest ELEMENT instruction
#[derive(Debug, Default)]
pub struct Session {
    validator: Option<SymbolValidator>,
}

impl Session {
    /// Create a session, optionally bound to an element from the start
    pub fn new(element: Option<&str>) -> Self {
        Self { validator: element.map(SymbolValidator::new) }
    }

    fn validator(&self) -> anyhow::Result<&SymbolValidator> {
        self.validator.as_ref().ok_or_else(|| {
            anyhow::anyhow!("No element bound, use ELEMENT <name> or --element first")
        })
    }

    /// Execute an instruction against the bound validator
    pub fn execute(&mut self, instruction: &Instruction) -> anyhow::Result<Outcome> {
        debug!(command = ?instruction.command, argument = ?instruction.argument, "Executing");
        match (instruction.command, instruction.argument.as_deref()) {
            (Command::Nil, _) => Ok(Outcome::Nil),
            (Command::Help, _) => Ok(Outcome::Help),
            (Command::Element, Some(name)) => {
                let validator = SymbolValidator::new(name);
                let element = validator.element().clone();
                self.validator = Some(validator);
                Ok(Outcome::Bound(element))
            }
            (Command::Element, None) => Err(anyhow::anyhow!("ELEMENT command requires a name")),
            (Command::Validate, Some(symbol)) => {
                let validator = self.validator()?;
                Ok(Outcome::Validity {
                    symbol: symbol.to_string(),
                    element: validator.element().clone(),
                    valid: validator.validate(symbol),
                })
            }
            (Command::Validate, None) => {
                Err(anyhow::anyhow!("VALIDATE command requires a symbol"))
            }
            (Command::First, _) => {
                Ok(Outcome::First(self.validator()?.first_valid_symbol_in_alphabetical_order()?))
            }
            (Command::Count, _) => Ok(Outcome::Count(self.validator()?.number_of_valid_symbols())),
            (Command::List, _) => {
                Ok(Outcome::Symbols(self.validator()?.valid_symbols().into_iter().collect()))
            }
        }
    }
}
