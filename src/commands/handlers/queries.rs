//! Query, stats and backup handlers.
//!
//! The remote client lives outside this crate, so these echo the typed
//! command back to the operator.

use tracing::info;

use crate::commands::output::CommandOutput;
use crate::commands::router::RangeArgs;

/// Handle `head`, `query` and `delete`.
pub fn handle_range(verb: &str, args: &RangeArgs) -> CommandOutput {
    info!(verb, table = %args.table, prefix = %args.prefix, "Range command");
    CommandOutput::info(format!("{verb}: {args:?}"))
}

/// Handle `stats`.
pub fn handle_stats() -> CommandOutput {
    CommandOutput::info("stats: database statistics")
}

/// Handle `backup`.
pub fn handle_backup() -> CommandOutput {
    CommandOutput::info("backup: started")
}

/// Handle `restore`.
pub fn handle_restore() -> CommandOutput {
    CommandOutput::info("restore: started")
}
