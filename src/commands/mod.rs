//! Command parsing and dispatch for the FlowDB shell.
//!
//! The parsing core (tokenizer, registry, matcher, binder, parser) is generic
//! over the command type and knows nothing about FlowDB. The router and
//! definitions supply the FlowDB command set; handlers act on parsed values.

pub mod binder;
pub mod definitions;
pub mod handlers;
pub mod help;
pub mod matcher;
pub mod output;
pub mod parser;
pub mod registry;
pub mod router;
pub mod tokenizer;

pub use binder::{ArgMap, BindArgs, BindError, BindErrorKind, CommandShape, Field, FieldKind, Setter};
pub use definitions::{CatalogEntry, CommandCategory, COMMANDS};
pub use handlers::{dispatch, Session};
pub use output::{CommandOutput, ControlAction};
pub use parser::{ParseError, ParsedCommand, Parser};
pub use registry::{CommandDef, CommandRegistry, RegistryError};
pub use router::{Command, CommandRouter};
pub use tokenizer::tokenize;
