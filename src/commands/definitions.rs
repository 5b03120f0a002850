//! Command definitions for declarative command metadata.
//!
//! Each entry lists the paths a command is registered under, the factory
//! producing its empty value, and the text used to render help. The router
//! registers from this table, so help and parsing cannot drift apart.

use super::router::{
    Command, ConfigSetArgs, RangeArgs, S3AddArgs, S3DeleteArgs, TableInfoArgs,
};

/// Category for grouping commands in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCategory {
    /// Table inspection commands.
    Tables,
    /// S3 profile commands.
    S3,
    /// Range query commands.
    Queries,
    /// Backup and restore commands.
    Backup,
    /// Statistics commands.
    Stats,
    /// Client configuration commands.
    Config,
}

impl CommandCategory {
    /// All categories in help display order.
    pub const ALL: [CommandCategory; 6] = [
        Self::Tables,
        Self::S3,
        Self::Queries,
        Self::Backup,
        Self::Stats,
        Self::Config,
    ];

    /// Returns the display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Tables => "Tables",
            Self::S3 => "S3 profiles",
            Self::Queries => "Queries",
            Self::Backup => "Backup / Restore",
            Self::Stats => "Stats",
            Self::Config => "Config",
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Paths this command is registered under; the first is primary.
    pub paths: &'static [&'static str],
    /// Usage line shown in help.
    pub usage: &'static str,
    /// Short description shown in help.
    pub description: &'static str,
    /// Category for grouping in help.
    pub category: CommandCategory,
    /// Produces an empty command value.
    pub factory: fn() -> Command,
}

impl CatalogEntry {
    /// Returns the primary path.
    pub fn name(&self) -> &'static str {
        self.paths[0]
    }

    /// Returns the entries belonging to `category`, in catalog order.
    pub fn in_category(category: CommandCategory) -> impl Iterator<Item = &'static CatalogEntry> {
        COMMANDS.iter().filter(move |e| e.category == category)
    }
}

/// All command definitions.
pub static COMMANDS: &[CatalogEntry] = &[
    // Tables
    CatalogEntry {
        paths: &["table"],
        usage: "table name=<table>",
        description: "Show information about a specific table",
        category: CommandCategory::Tables,
        factory: || Command::TableInfo(TableInfoArgs::default()),
    },
    CatalogEntry {
        paths: &["tables"],
        usage: "tables",
        description: "List all tables",
        category: CommandCategory::Tables,
        factory: || Command::ListTables,
    },
    // S3 profiles
    CatalogEntry {
        paths: &["s3", "s3 help", "s3 h"],
        usage: "s3, s3 help, s3 h",
        description: "Show S3 help and usage",
        category: CommandCategory::S3,
        factory: || Command::S3Help,
    },
    CatalogEntry {
        paths: &["s3 list"],
        usage: "s3 list",
        description: "List configured S3 profiles",
        category: CommandCategory::S3,
        factory: || Command::S3List,
    },
    CatalogEntry {
        paths: &["s3 add"],
        usage: "s3 add name=<name> [bucket=<b>] [url=<u>] [region=<r>] [access_key=<k>] [secret_key=<s>]",
        description: "Add or update an S3 profile",
        category: CommandCategory::S3,
        factory: || Command::S3Add(S3AddArgs::default()),
    },
    CatalogEntry {
        paths: &["s3 delete"],
        usage: "s3 delete name=<name>",
        description: "Delete an S3 profile",
        category: CommandCategory::S3,
        factory: || Command::S3Delete(S3DeleteArgs::default()),
    },
    // Stats
    CatalogEntry {
        paths: &["stats"],
        usage: "stats",
        description: "Show database statistics",
        category: CommandCategory::Stats,
        factory: || Command::Stats,
    },
    // Queries
    CatalogEntry {
        paths: &["head"],
        usage: "head table=<t>|prefix=<p> from=<ts> to=<ts> [limit=<n>]",
        description: "Query earliest rows in a range",
        category: CommandCategory::Queries,
        factory: || Command::Head(RangeArgs::default()),
    },
    CatalogEntry {
        paths: &["query"],
        usage: "query table=<t>|prefix=<p> from=<ts> to=<ts> [limit=<n>]",
        description: "General query",
        category: CommandCategory::Queries,
        factory: || Command::Query(RangeArgs::default()),
    },
    CatalogEntry {
        paths: &["delete"],
        usage: "delete table=<t>|prefix=<p> from=<ts> to=<ts> [limit=<n>]",
        description: "Delete rows in a range",
        category: CommandCategory::Queries,
        factory: || Command::Delete(RangeArgs::default()),
    },
    // Backup / restore
    CatalogEntry {
        paths: &["backup"],
        usage: "backup",
        description: "Back up the database",
        category: CommandCategory::Backup,
        factory: || Command::Backup,
    },
    CatalogEntry {
        paths: &["restore"],
        usage: "restore",
        description: "Restore the database from backup",
        category: CommandCategory::Backup,
        factory: || Command::Restore,
    },
    // Config
    CatalogEntry {
        paths: &["config", "config help", "config h"],
        usage: "config, config help, config h",
        description: "Show config help and usage",
        category: CommandCategory::Config,
        factory: || Command::ConfigHelp,
    },
    CatalogEntry {
        paths: &["config show"],
        usage: "config show",
        description: "Show current server address",
        category: CommandCategory::Config,
        factory: || Command::ConfigShow,
    },
    CatalogEntry {
        paths: &["config set"],
        usage: "config set addr=<host:port>",
        description: "Set the server address",
        category: CommandCategory::Config,
        factory: || Command::ConfigSet(ConfigSetArgs::default()),
    },
    CatalogEntry {
        paths: &["config reset"],
        usage: "config reset",
        description: "Reset the server address to the default",
        category: CommandCategory::Config,
        factory: || Command::ConfigReset,
    },
];
