//! Transport-agnostic command output types.
//!
//! Handlers return these; the REPL decides how to print them.

/// Output from a command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Informational message (success, status, etc.).
    Info(String),

    /// Error message.
    Error(String),

    /// Structured table data for display.
    Table {
        /// Column headers.
        headers: Vec<String>,
        /// Row data (each row is a vector of cell values).
        rows: Vec<Vec<String>>,
    },

    /// Application control action.
    Control(ControlAction),

    /// Multiple outputs (for commands that produce several messages).
    Multiple(Vec<CommandOutput>),
}

/// Control actions that affect the terminal itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Clear the terminal.
    ClearScreen,
}

impl CommandOutput {
    /// Creates an info message.
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Creates an error message.
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Creates a table output.
    pub fn table(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self::Table { headers, rows }
    }

    /// Creates a multiple output from a vector.
    pub fn multiple(outputs: Vec<CommandOutput>) -> Self {
        Self::Multiple(outputs)
    }

    /// Creates a clear screen control action.
    pub fn clear_screen() -> Self {
        Self::Control(ControlAction::ClearScreen)
    }

    /// Returns true if this output, or any nested output, is an error.
    pub fn is_error(&self) -> bool {
        match self {
            Self::Error(_) => true,
            Self::Multiple(outputs) => outputs.iter().any(Self::is_error),
            _ => false,
        }
    }
}

/// Formats a table with left-aligned columns sized to their widest cell.
pub fn format_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    let format_row = |cells: &[String]| {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        line.join("  ").trim_end().to_string()
    };

    let mut lines = vec![format_row(headers)];
    lines.extend(rows.iter().map(|row| format_row(row)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_info_output() {
        let output = CommandOutput::info("Hello, world!");
        assert!(matches!(output, CommandOutput::Info(s) if s == "Hello, world!"));
    }

    #[test]
    fn test_error_output() {
        let output = CommandOutput::error("Something went wrong");
        assert!(output.is_error());
    }

    #[test]
    fn test_nested_error() {
        let output = CommandOutput::multiple(vec![
            CommandOutput::info("ok"),
            CommandOutput::error("bad"),
        ]);
        assert!(output.is_error());
        assert!(!CommandOutput::info("ok").is_error());
    }

    #[test]
    fn test_clear_screen_action() {
        assert_eq!(
            CommandOutput::clear_screen(),
            CommandOutput::Control(ControlAction::ClearScreen)
        );
    }

    #[test]
    fn test_format_table() {
        let table = format_table(
            &["#".to_string(), "NAME".to_string()],
            &[
                vec!["1".to_string(), "prod".to_string()],
                vec!["10".to_string(), "x".to_string()],
            ],
        );
        assert_eq!(table, "#   NAME\n1   prod\n10  x");
    }
}
