//! Command handlers for the FlowDB shell.
//!
//! Each handler takes the session and an already-typed command and returns a
//! [`CommandOutput`]. Dispatch is an exhaustive match over [`Command`].

pub mod queries;
pub mod s3;
pub mod settings;
pub mod tables;

use crate::config::{Config, S3Profile};

use super::output::CommandOutput;
use super::router::Command;

/// Mutable state shared by handlers for the lifetime of the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Current server address.
    pub server_addr: String,
    /// S3 profiles, seeded from the config file.
    pub s3_profiles: Vec<S3Profile>,
}

impl Session {
    /// Creates a session from the loaded config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            server_addr: config.server_addr.clone(),
            s3_profiles: config.s3_profiles.clone(),
        }
    }

    /// Returns the index of the profile named `name`, ignoring case.
    pub fn find_s3_profile(&self, name: &str) -> Option<usize> {
        self.s3_profiles
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Runs the handler for `command`.
pub fn dispatch(session: &mut Session, command: &Command) -> CommandOutput {
    match command {
        Command::TableInfo(args) => tables::handle_table_info(args),
        Command::ListTables => tables::handle_list_tables(),
        Command::S3Help => s3::handle_s3_help(),
        Command::S3List => s3::handle_s3_list(session),
        Command::S3Add(args) => s3::handle_s3_add(session, args),
        Command::S3Delete(args) => s3::handle_s3_delete(session, args),
        Command::Stats => queries::handle_stats(),
        Command::Head(args) => queries::handle_range("head", args),
        Command::Query(args) => queries::handle_range("query", args),
        Command::Delete(args) => queries::handle_range("delete", args),
        Command::Backup => queries::handle_backup(),
        Command::Restore => queries::handle_restore(),
        Command::ConfigHelp => settings::handle_config_help(),
        Command::ConfigShow => settings::handle_config_show(session),
        Command::ConfigSet(args) => settings::handle_config_set(session, args),
        Command::ConfigReset => settings::handle_config_reset(session),
    }
}
