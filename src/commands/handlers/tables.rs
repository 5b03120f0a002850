//! Table command handlers (table, tables).

use crate::commands::output::CommandOutput;
use crate::commands::router::TableInfoArgs;

/// Handle `table`.
pub fn handle_table_info(args: &TableInfoArgs) -> CommandOutput {
    if args.name.trim().is_empty() {
        return CommandOutput::error("Usage: table name=<table>");
    }
    CommandOutput::info(format!("table info: {}", args.name))
}

/// Handle `tables`.
pub fn handle_list_tables() -> CommandOutput {
    CommandOutput::info("list tables")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_info() {
        let output = handle_table_info(&TableInfoArgs {
            name: "orders".to_string(),
        });
        assert_eq!(output, CommandOutput::info("table info: orders"));
    }

    #[test]
    fn test_table_info_requires_name() {
        assert!(handle_table_info(&TableInfoArgs::default()).is_error());
    }
}
