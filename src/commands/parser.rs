//! Line parser: tokenize, match, bind.
//!
//! Turns a raw input line into the matched definition plus a populated,
//! strongly-typed command value.

use thiserror::Error;
use tracing::debug;

use super::binder::{ArgMap, BindArgs, BindError};
use super::matcher::match_command;
use super::registry::{CommandDef, CommandRegistry};
use super::tokenizer::tokenize;

/// Errors returned while parsing a line.
///
/// All of these are recoverable; the caller reports them and re-prompts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line contained no tokens.
    #[error("empty input")]
    EmptyInput,

    /// No registered path is a prefix of the line.
    #[error("unknown command: {line}")]
    UnknownCommand { line: String },

    /// An argument failed type coercion.
    #[error(transparent)]
    Bind(#[from] BindError),
}

/// A successfully parsed line.
#[derive(Debug)]
pub struct ParsedCommand<'r, C> {
    /// The matched definition.
    pub def: &'r CommandDef<C>,
    /// The populated command value, owned by the caller.
    pub command: C,
}

/// Parser over an explicitly supplied registry.
pub struct Parser<C> {
    registry: CommandRegistry<C>,
}

impl<C: BindArgs> Parser<C> {
    /// Creates a parser over a fully populated registry.
    pub fn new(registry: CommandRegistry<C>) -> Self {
        Self { registry }
    }

    /// Returns the underlying registry.
    pub fn registry(&self) -> &CommandRegistry<C> {
        &self.registry
    }

    /// Parses a single input line.
    pub fn parse(&self, line: &str) -> Result<ParsedCommand<'_, C>, ParseError> {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (def, rest) =
            match_command(&self.registry, &tokens).ok_or_else(|| ParseError::UnknownCommand {
                line: line.to_string(),
            })?;

        let args = ArgMap::from_tokens(rest);
        let mut command = def.instantiate();
        command.bind_args(&args)?;

        debug!(command = %def.name(), args = args.len(), "Parsed command");
        Ok(ParsedCommand { def, command })
    }
}
