//! FlowDB command shapes and routing.
//!
//! Every command the shell understands is a variant of [`Command`]. Shapes
//! with arguments declare their bindable fields through [`CommandShape`];
//! [`CommandRouter`] wires the catalog into a [`Parser`].

use super::binder::{ArgMap, BindArgs, BindError, CommandShape, Field, FieldKind, Setter};
use super::definitions::COMMANDS;
use super::parser::{ParseError, ParsedCommand, Parser};
use super::registry::CommandRegistry;

/// Arguments for `table`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableInfoArgs {
    /// Table name.
    pub name: String,
}

impl CommandShape for TableInfoArgs {
    const FIELDS: &'static [Field<Self>] = &[Field {
        key: "name",
        setter: Setter::Text(|c, v| c.name = v),
    }];
}

/// Arguments for `s3 add`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct S3AddArgs {
    /// Profile name.
    pub name: String,
    pub bucket: String,
    /// Endpoint URL.
    pub url: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
}

impl CommandShape for S3AddArgs {
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            key: "name",
            setter: Setter::Text(|c, v| c.name = v),
        },
        Field {
            key: "bucket",
            setter: Setter::Text(|c, v| c.bucket = v),
        },
        Field {
            key: "url",
            setter: Setter::Text(|c, v| c.url = v),
        },
        Field {
            key: "region",
            setter: Setter::Text(|c, v| c.region = v),
        },
        Field {
            key: "access_key",
            setter: Setter::Text(|c, v| c.access_key = v),
        },
        Field {
            key: "secret_key",
            setter: Setter::Text(|c, v| c.secret_key = v),
        },
    ];
}

/// Arguments for `s3 delete`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct S3DeleteArgs {
    /// Profile name to delete.
    pub name: String,
}

impl CommandShape for S3DeleteArgs {
    const FIELDS: &'static [Field<Self>] = &[Field {
        key: "name",
        setter: Setter::Text(|c, v| c.name = v),
    }];
}

/// Arguments shared by `head`, `query` and `delete`.
///
/// `table` and `prefix` are alternatives; choosing between them is up to the
/// handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeArgs {
    /// Table name.
    pub table: String,
    /// Key prefix.
    pub prefix: String,
    /// Range start timestamp.
    pub from: String,
    /// Range end timestamp.
    pub to: String,
    /// Maximum number of rows; zero means server default.
    pub limit: i64,
}

impl CommandShape for RangeArgs {
    const FIELDS: &'static [Field<Self>] = &[
        Field {
            key: "table",
            setter: Setter::Text(|c, v| c.table = v),
        },
        Field {
            key: "prefix",
            setter: Setter::Text(|c, v| c.prefix = v),
        },
        Field {
            key: "from",
            setter: Setter::Text(|c, v| c.from = v),
        },
        Field {
            key: "to",
            setter: Setter::Text(|c, v| c.to = v),
        },
        Field {
            key: "limit",
            setter: Setter::Int(|c, v| c.limit = v),
        },
    ];
}

/// Arguments for `config set`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSetArgs {
    /// New server address (host:port).
    pub addr: String,
}

impl CommandShape for ConfigSetArgs {
    const FIELDS: &'static [Field<Self>] = &[Field {
        key: "addr",
        setter: Setter::Text(|c, v| c.addr = v),
    }];
}

/// Parsed command with arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show information about one table.
    TableInfo(TableInfoArgs),
    /// List all tables.
    ListTables,
    /// Show S3 help.
    S3Help,
    /// List S3 profiles.
    S3List,
    /// Add or update an S3 profile.
    S3Add(S3AddArgs),
    /// Delete an S3 profile.
    S3Delete(S3DeleteArgs),
    /// Show database statistics.
    Stats,
    /// Earliest rows in a range.
    Head(RangeArgs),
    /// General range query.
    Query(RangeArgs),
    /// Delete rows in a range.
    Delete(RangeArgs),
    /// Back up the database.
    Backup,
    /// Restore the database from backup.
    Restore,
    /// Show config help.
    ConfigHelp,
    /// Show current config.
    ConfigShow,
    /// Set the server address.
    ConfigSet(ConfigSetArgs),
    /// Reset the server address to the default.
    ConfigReset,
}

impl BindArgs for Command {
    fn bind_args(&mut self, args: &ArgMap) -> Result<(), BindError> {
        match self {
            Self::TableInfo(c) => c.bind_args(args),
            Self::S3Add(c) => c.bind_args(args),
            Self::S3Delete(c) => c.bind_args(args),
            Self::Head(c) | Self::Query(c) | Self::Delete(c) => c.bind_args(args),
            Self::ConfigSet(c) => c.bind_args(args),
            Self::ListTables
            | Self::S3Help
            | Self::S3List
            | Self::Stats
            | Self::Backup
            | Self::Restore
            | Self::ConfigHelp
            | Self::ConfigShow
            | Self::ConfigReset => Ok(()),
        }
    }
}

impl Command {
    /// Returns the binding keys and types this command accepts.
    pub fn arguments(&self) -> Vec<(&'static str, FieldKind)> {
        match self {
            Self::TableInfo(_) => describe::<TableInfoArgs>(),
            Self::S3Add(_) => describe::<S3AddArgs>(),
            Self::S3Delete(_) => describe::<S3DeleteArgs>(),
            Self::Head(_) | Self::Query(_) | Self::Delete(_) => describe::<RangeArgs>(),
            Self::ConfigSet(_) => describe::<ConfigSetArgs>(),
            _ => Vec::new(),
        }
    }
}

fn describe<T: CommandShape>() -> Vec<(&'static str, FieldKind)> {
    T::FIELDS
        .iter()
        .map(|f| (f.key, f.setter.kind()))
        .collect()
}

/// Command router for parsing user input.
pub struct CommandRouter {
    parser: Parser<Command>,
}

impl Default for CommandRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRouter {
    /// Builds a router with every catalog entry registered.
    pub fn new() -> Self {
        let mut registry = CommandRegistry::new();
        for entry in COMMANDS {
            registry.register_many(entry.factory, entry.paths);
        }
        Self {
            parser: Parser::new(registry),
        }
    }

    /// Parse a line into a command.
    pub fn parse(&self, line: &str) -> Result<ParsedCommand<'_, Command>, ParseError> {
        self.parser.parse(line)
    }

    /// Returns the number of registered paths, aliases included.
    pub fn path_count(&self) -> usize {
        self.parser.registry().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::binder::BindErrorKind;
    use pretty_assertions::assert_eq;

    fn parse(line: &str) -> Command {
        CommandRouter::new().parse(line).unwrap().command
    }

    #[test]
    fn test_router_registers_all_paths() {
        let expected: usize = COMMANDS.iter().map(|e| e.paths.len()).sum();
        assert_eq!(CommandRouter::new().path_count(), expected);
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("tables"), Command::ListTables);
        assert_eq!(parse("stats"), Command::Stats);
        assert_eq!(parse("backup"), Command::Backup);
        assert_eq!(parse("restore"), Command::Restore);
        assert_eq!(parse("s3 list"), Command::S3List);
        assert_eq!(parse("config show"), Command::ConfigShow);
        assert_eq!(parse("config reset"), Command::ConfigReset);
    }

    #[test]
    fn test_parse_help_aliases() {
        for line in ["s3", "s3 help", "s3 h", "S3 HELP"] {
            assert_eq!(parse(line), Command::S3Help, "{line}");
        }
        for line in ["config", "config help", "config h"] {
            assert_eq!(parse(line), Command::ConfigHelp, "{line}");
        }
    }

    #[test]
    fn test_parse_table_vs_tables() {
        assert_eq!(
            parse("table name=orders"),
            Command::TableInfo(TableInfoArgs {
                name: "orders".to_string()
            })
        );
        assert_eq!(parse("tables"), Command::ListTables);
    }

    #[test]
    fn test_parse_s3_add() {
        let cmd = parse(r#"s3 add name=prod bucket=backups url="https://s3.example.com" region=eu-west-1"#);
        assert_eq!(
            cmd,
            Command::S3Add(S3AddArgs {
                name: "prod".to_string(),
                bucket: "backups".to_string(),
                url: "https://s3.example.com".to_string(),
                region: "eu-west-1".to_string(),
                access_key: String::new(),
                secret_key: String::new(),
            })
        );
    }

    #[test]
    fn test_parse_s3_delete() {
        assert_eq!(
            parse("s3 delete name=old"),
            Command::S3Delete(S3DeleteArgs {
                name: "old".to_string()
            })
        );
    }

    #[test]
    fn test_parse_range_commands() {
        let expected = RangeArgs {
            table: "ticks".to_string(),
            prefix: String::new(),
            from: "2024-01-01".to_string(),
            to: "2024-02-01".to_string(),
            limit: 50,
        };
        let args = "table=ticks from=2024-01-01 to=2024-02-01 limit=50";

        assert_eq!(parse(&format!("head {args}")), Command::Head(expected.clone()));
        assert_eq!(parse(&format!("query {args}")), Command::Query(expected.clone()));
        assert_eq!(parse(&format!("delete {args}")), Command::Delete(expected));
    }

    #[test]
    fn test_parse_range_limit_error() {
        let err = CommandRouter::new()
            .parse("query table=ticks limit=ten")
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::Bind(BindError {
                key: "limit",
                value: "ten".to_string(),
                kind: BindErrorKind::InvalidInt,
            })
        );
    }

    #[test]
    fn test_parse_config_set() {
        assert_eq!(
            parse("config set addr=127.0.0.1:7777"),
            Command::ConfigSet(ConfigSetArgs {
                addr: "127.0.0.1:7777".to_string()
            })
        );
    }

    #[test]
    fn test_parse_unknown() {
        let router = CommandRouter::new();
        assert!(matches!(
            router.parse("frobnicate"),
            Err(ParseError::UnknownCommand { line }) if line == "frobnicate"
        ));
    }

    #[test]
    fn test_arguments_describe_fields() {
        assert_eq!(
            Command::Head(RangeArgs::default()).arguments(),
            vec![
                ("table", FieldKind::Text),
                ("prefix", FieldKind::Text),
                ("from", FieldKind::Text),
                ("to", FieldKind::Text),
                ("limit", FieldKind::Int),
            ]
        );
        assert!(Command::Stats.arguments().is_empty());
    }
}
