//! Registry of named, multi-word command paths.
//!
//! Each definition binds a lower-cased path such as `s3 add` to a factory
//! producing a fresh, zero-valued command. Registration happens once at
//! startup; the registry is read-only afterwards and passed explicitly to
//! the parser.

use thiserror::Error;
use tracing::debug;

/// Errors raised while registering commands.
///
/// These are programmer mistakes in the startup wiring, not user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The path contained no words.
    #[error("empty command path")]
    EmptyPath,

    /// The path is already registered.
    #[error("duplicate command path: {0}")]
    DuplicatePath(String),
}

/// A registered command definition.
pub struct CommandDef<C> {
    path: Vec<String>,
    factory: fn() -> C,
}

impl<C> CommandDef<C> {
    /// Returns the lower-cased path words.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Returns the path joined with single spaces.
    pub fn name(&self) -> String {
        self.path.join(" ")
    }

    /// Creates a fresh command value.
    pub fn instantiate(&self) -> C {
        (self.factory)()
    }
}

impl<C> std::fmt::Debug for CommandDef<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDef")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Ordered set of command definitions.
pub struct CommandRegistry<C> {
    defs: Vec<CommandDef<C>>,
}

impl<C> Default for CommandRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> CommandRegistry<C> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { defs: Vec::new() }
    }

    /// Registers `factory` under `path`, returning an error for empty or duplicate paths.
    ///
    /// The path is lower-cased and split on whitespace.
    pub fn try_register(&mut self, path: &str, factory: fn() -> C) -> Result<(), RegistryError> {
        let words: Vec<String> = path
            .to_lowercase()
            .split_whitespace()
            .map(String::from)
            .collect();

        if words.is_empty() {
            return Err(RegistryError::EmptyPath);
        }

        if self.defs.iter().any(|def| def.path == words) {
            return Err(RegistryError::DuplicatePath(words.join(" ")));
        }

        debug!(path = %words.join(" "), "Registered command");
        self.defs.push(CommandDef {
            path: words,
            factory,
        });
        Ok(())
    }

    /// Registers `factory` under `path`.
    ///
    /// # Panics
    ///
    /// Panics on an empty or duplicate path. Registration is startup wiring,
    /// so a bad path must stop the program before any input is parsed.
    pub fn register(&mut self, path: &str, factory: fn() -> C) {
        if let Err(e) = self.try_register(path, factory) {
            panic!("invalid command registration {path:?}: {e}");
        }
    }

    /// Registers the same factory under several paths (aliases).
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`register`](Self::register).
    pub fn register_many(&mut self, factory: fn() -> C, paths: &[&str]) {
        for path in paths {
            self.register(path, factory);
        }
    }

    /// Returns the registered definitions in registration order.
    pub fn definitions(&self) -> &[CommandDef<C>] {
        &self.defs
    }

    /// Returns the number of registered paths.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
