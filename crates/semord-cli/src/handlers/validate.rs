//! Validate command handler

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{OutputWriter, ValidationEntry};
use semord_core::Version;

/// Handle the validate command
///
/// Every input is checked and reported; the command fails afterwards if
/// any of them was invalid.
pub fn handle_validate(
    args: ValidateArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let entries: Vec<ValidationEntry> = args
        .versions
        .iter()
        .map(|raw| match Version::parse_with(raw, config.dialect) {
            Ok(_) => ValidationEntry::valid(raw),
            Err(e) => ValidationEntry::invalid(raw, &e),
        })
        .collect();

    output.validation(&entries)?;

    let invalid = entries.iter().filter(|entry| !entry.valid).count();
    tracing::info!(total = entries.len(), invalid, "Validated versions");

    if invalid > 0 {
        return Err(Error::ValidationFailed {
            invalid,
            total: entries.len(),
        });
    }
    Ok(())
}
