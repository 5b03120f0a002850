//! Command-line argument parsing for the FlowDB shell.

use clap::Parser;
use std::path::PathBuf;

/// Interactive command shell for FlowDB.
#[derive(Parser, Debug)]
#[command(name = "flowdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Server address, overriding the config file (host:port)
    #[arg(long, value_name = "ADDR", env = "FLOWDB_ADDR")]
    pub addr: Option<String>,

    /// Run a command line and exit; may be repeated to run several in order
    #[arg(short = 'e', long = "execute", value_name = "LINE")]
    pub execute: Vec<String>,

    /// Write logs to a file in the state directory instead of stderr
    #[arg(long)]
    pub log_file: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }

    /// Returns true if lines were given with `-e` and no prompt should be shown.
    pub fn is_batch(&self) -> bool {
        !self.execute.is_empty()
    }
}
