//! Argument binding for command shapes.
//!
//! A command shape declares its bindable fields once as a static table of
//! [`Field`] entries: the binding key plus a typed setter. Binding walks that
//! table, looks each key up in the [`ArgMap`] built from the remaining tokens,
//! and coerces the raw string to the setter's type. Fields not listed in the
//! table are never touched, and keys with no field are ignored.

use std::collections::HashMap;

use thiserror::Error;
use tracing::trace;

use super::tokenizer::split_argument;

/// Semantic type of a bindable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Copied verbatim.
    Text,
    /// Boolean flag.
    Flag,
    /// Signed base-10 integer.
    Int,
    /// Unsigned base-10 integer.
    Uint,
}

impl FieldKind {
    /// Returns a short type name for help and error output.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Flag => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
        }
    }
}

/// Typed setter for one field of a command shape.
pub enum Setter<T> {
    Text(fn(&mut T, String)),
    Flag(fn(&mut T, bool)),
    Int(fn(&mut T, i64)),
    Uint(fn(&mut T, u64)),
}

impl<T> Setter<T> {
    /// Returns the semantic type this setter accepts.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Flag(_) => FieldKind::Flag,
            Self::Int(_) => FieldKind::Int,
            Self::Uint(_) => FieldKind::Uint,
        }
    }
}

/// A bindable field: its lower-case binding key and setter.
pub struct Field<T> {
    pub key: &'static str,
    pub setter: Setter<T>,
}

/// A command shape with a declarative field table.
pub trait CommandShape: Sized + 'static {
    /// Bindable fields of this shape.
    const FIELDS: &'static [Field<Self>];
}

/// Populates a command value from parsed arguments.
///
/// Implemented for every [`CommandShape`], and by sum types that delegate
/// to the shape held by each variant.
pub trait BindArgs {
    fn bind_args(&mut self, args: &ArgMap) -> Result<(), BindError>;
}

impl<T: CommandShape> BindArgs for T {
    fn bind_args(&mut self, args: &ArgMap) -> Result<(), BindError> {
        bind_fields(self, T::FIELDS, args)
    }
}

/// Why a raw value could not be coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindErrorKind {
    InvalidBool,
    InvalidInt,
    InvalidUint,
}

impl std::fmt::Display for BindErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::InvalidBool => "invalid bool",
            Self::InvalidInt => "invalid int",
            Self::InvalidUint => "invalid uint",
        };
        f.write_str(s)
    }
}

/// A field whose raw value failed type coercion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} for {key}: {value:?}")]
pub struct BindError {
    /// Binding key of the field.
    pub key: &'static str,
    /// The offending raw value.
    pub value: String,
    pub kind: BindErrorKind,
}

/// Lower-cased argument keys mapped to raw values.
///
/// Later occurrences of a key overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgMap {
    values: HashMap<String, String>,
}

impl ArgMap {
    /// Builds the map from the tokens following a command path.
    pub fn from_tokens(tokens: &[String]) -> Self {
        let mut values = HashMap::new();
        for arg in tokens.iter().filter_map(|t| split_argument(t)) {
            values.insert(arg.key, arg.value);
        }
        Self { values }
    }

    /// Returns the raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }
}

/// Applies every field in `fields` that has an entry in `args`.
///
/// Stops at the first coercion failure. Fields already set are not rolled
/// back, so callers must discard the value on error.
pub fn bind_fields<T>(target: &mut T, fields: &[Field<T>], args: &ArgMap) -> Result<(), BindError> {
    for field in fields {
        let Some(raw) = args.get(field.key) else {
            continue;
        };

        trace!(key = field.key, kind = field.setter.kind().type_name(), "Binding field");

        let fail = |kind| BindError {
            key: field.key,
            value: raw.to_string(),
            kind,
        };

        match field.setter {
            Setter::Text(set) => set(target, raw.to_string()),
            Setter::Flag(set) => {
                set(target, parse_bool(raw).ok_or_else(|| fail(BindErrorKind::InvalidBool))?)
            }
            Setter::Int(set) => {
                set(target, raw.parse().map_err(|_| fail(BindErrorKind::InvalidInt))?)
            }
            Setter::Uint(set) => {
                set(target, parse_uint(raw).ok_or_else(|| fail(BindErrorKind::InvalidUint))?)
            }
        }
    }

    Ok(())
}

/// Parses an unsigned base-10 integer. No sign is accepted.
fn parse_uint(s: &str) -> Option<u64> {
    if s.starts_with('+') {
        return None;
    }
    s.parse().ok()
}

/// Parses the canonical boolean spellings.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
