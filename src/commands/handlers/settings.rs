//! Client configuration handlers (config help, show, set, reset).

use tracing::info;

use super::Session;
use crate::commands::definitions::CommandCategory;
use crate::commands::help::render_category;
use crate::commands::output::CommandOutput;
use crate::commands::router::ConfigSetArgs;
use crate::config::DEFAULT_SERVER_ADDR;

/// Handle `config`, `config help`, `config h`.
pub fn handle_config_help() -> CommandOutput {
    CommandOutput::multiple(vec![
        CommandOutput::info(render_category(CommandCategory::Config)),
        CommandOutput::info(format!("Default server address: {DEFAULT_SERVER_ADDR}")),
    ])
}

/// Handle `config show`.
pub fn handle_config_show(session: &Session) -> CommandOutput {
    CommandOutput::info(format!(
        "Current config:\n  server address: {}",
        session.server_addr
    ))
}

/// Handle `config set`.
pub fn handle_config_set(session: &mut Session, args: &ConfigSetArgs) -> CommandOutput {
    let new_addr = args.addr.trim();

    if new_addr.is_empty() {
        return CommandOutput::error("server address cannot be empty");
    }

    if new_addr == session.server_addr {
        return CommandOutput::info("server address unchanged");
    }

    info!(old = %session.server_addr, new = new_addr, "Server address changed");
    session.server_addr = new_addr.to_string();
    CommandOutput::info(format!("server address updated to {new_addr}"))
}

/// Handle `config reset`.
pub fn handle_config_reset(session: &mut Session) -> CommandOutput {
    if session.server_addr == DEFAULT_SERVER_ADDR {
        return CommandOutput::info(format!(
            "server address already at default: {DEFAULT_SERVER_ADDR}"
        ));
    }

    info!(old = %session.server_addr, "Server address reset");
    session.server_addr = DEFAULT_SERVER_ADDR.to_string();
    CommandOutput::info(format!(
        "server address reset to default ({DEFAULT_SERVER_ADDR})"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(session: &mut Session, addr: &str) -> CommandOutput {
        handle_config_set(
            session,
            &ConfigSetArgs {
                addr: addr.to_string(),
            },
        )
    }

    #[test]
    fn test_show() {
        let session = Session::default();
        assert_eq!(
            handle_config_show(&session),
            CommandOutput::info("Current config:\n  server address: localhost:7777")
        );
    }

    #[test]
    fn test_set_updates_address() {
        let mut session = Session::default();
        let output = set(&mut session, " 127.0.0.1:9000 ");
        assert_eq!(
            output,
            CommandOutput::info("server address updated to 127.0.0.1:9000")
        );
        assert_eq!(session.server_addr, "127.0.0.1:9000");
    }

    #[test]
    fn test_set_rejects_empty() {
        let mut session = Session::default();
        assert!(set(&mut session, "").is_error());
        assert_eq!(session.server_addr, DEFAULT_SERVER_ADDR);
    }

    #[test]
    fn test_set_unchanged() {
        let mut session = Session::default();
        assert_eq!(
            set(&mut session, DEFAULT_SERVER_ADDR),
            CommandOutput::info("server address unchanged")
        );
    }

    #[test]
    fn test_reset() {
        let mut session = Session::default();
        set(&mut session, "remote:1");

        assert_eq!(
            handle_config_reset(&mut session),
            CommandOutput::info("server address reset to default (localhost:7777)")
        );
        assert_eq!(session.server_addr, DEFAULT_SERVER_ADDR);
        assert_eq!(
            handle_config_reset(&mut session),
            CommandOutput::info("server address already at default: localhost:7777")
        );
    }
}
