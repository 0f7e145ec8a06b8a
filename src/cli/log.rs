//! Operation log command

use std::io::Write;

use crate::audit::AuditLogger;
use crate::display::format_log_entries;
use crate::error::CalculatorResult;

/// Print the most recent `limit` log entries
///
/// `plain` prints one line per entry instead of the table.
pub fn handle_log_command<W: Write>(
    logger: &AuditLogger,
    limit: usize,
    plain: bool,
    out: &mut W,
) -> CalculatorResult<()> {
    if !logger.exists() {
        writeln!(out, "No operations logged.")?;
        return Ok(());
    }

    let entries = logger.read_recent(limit)?;
    if plain {
        for entry in &entries {
            writeln!(out, "{}", entry.format_human_readable())?;
        }
        return Ok(());
    }

    writeln!(out, "{}", format_log_entries(&entries).trim_end())?;
    writeln!(
        out,
        "Showing {} of {} operations",
        entries.len(),
        logger.entry_count()?
    )?;
    Ok(())
}
