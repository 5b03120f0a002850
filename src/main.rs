//! FlowDB shell - interactive command shell for FlowDB.

use std::io;

use flowdb_cli::cli::Cli;
use flowdb_cli::commands::Session;
use flowdb_cli::config::Config;
use flowdb_cli::error::Result;
use flowdb_cli::logging;
use flowdb_cli::repl::Repl;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse_args();

    let log_to_file = cli.log_file;
    if log_to_file {
        logging::init_file_logging();
    } else {
        logging::init_stderr_logging();
    }

    if let Err(e) = run(cli) {
        error!("{}: {}", e.category(), e);
        if log_to_file {
            eprintln!("{}: {}", e.category(), e);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    // Server address precedence: --addr / FLOWDB_ADDR, then config file
    let mut session = Session::from_config(&config);
    if let Some(addr) = &cli.addr {
        session.server_addr = addr.clone();
    }
    info!(server = %session.server_addr, "Starting shell");

    let mut repl = Repl::new(session, config.prompt, io::stdout().lock());

    if cli.is_batch() {
        repl.run_batch(&cli.execute)
    } else {
        repl.run(io::stdin().lock())
    }
}
