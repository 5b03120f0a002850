//! Help text for FlowDB shell commands.

use super::definitions::{CatalogEntry, CommandCategory};

/// Built-in commands handled by the REPL before parsing.
pub const BUILTIN_HELP: &str = r#"General:
  help, h              Show this help menu
  clear, cls           Clear the screen
  exit, quit           Exit the shell"#;

/// Column at which descriptions start; longer usages wrap.
const USAGE_WIDTH: usize = 22;

/// Renders the full help menu shown for `help`.
pub fn render_help() -> String {
    let mut out = String::from("FlowDB shell\n\n");
    out.push_str(BUILTIN_HELP);
    out.push('\n');

    for category in CommandCategory::ALL {
        out.push('\n');
        out.push_str(category.display_name());
        out.push_str(":\n");
        for entry in CatalogEntry::in_category(category) {
            push_entry(&mut out, entry);
        }
    }

    out.push_str("\nFor more details on a group of commands:\n");
    out.push_str("  s3 help               S3-specific help\n");
    out.push_str("  config help           Config-specific help");
    out
}

/// Renders help for one category, including each command's arguments.
pub fn render_category(category: CommandCategory) -> String {
    let mut out = format!("{} commands:\n", category.display_name());

    for entry in CatalogEntry::in_category(category) {
        push_entry(&mut out, entry);
        let args = (entry.factory)().arguments();
        if !args.is_empty() {
            let list: Vec<String> = args
                .iter()
                .map(|(key, kind)| format!("{key} ({})", kind.type_name()))
                .collect();
            out.push_str(&format!("      arguments: {}\n", list.join(", ")));
        }
    }

    out.trim_end().to_string()
}

fn push_entry(out: &mut String, entry: &CatalogEntry) {
    if entry.usage.len() < USAGE_WIDTH {
        out.push_str(&format!(
            "  {:<width$}{}\n",
            entry.usage,
            entry.description,
            width = USAGE_WIDTH
        ));
    } else {
        out.push_str(&format!("  {}\n", entry.usage));
        out.push_str(&format!(
            "  {:<width$}{}\n",
            "",
            entry.description,
            width = USAGE_WIDTH
        ));
    }
}
