//! Compare command handler

use super::utils::parse_version;
use crate::cli::CompareArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::{ComparisonReport, OutputWriter};
use semord_core::compare_with;

/// Handle the compare command
pub fn handle_compare(args: CompareArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let left = parse_version(&args.left, config.dialect)?;
    let right = parse_version(&args.right, config.dialect)?;

    let ordering = compare_with(&left, &right, config.dialect);
    tracing::info!(left = %left, right = %right, ?ordering, "Compared versions");

    output.comparison(&ComparisonReport::new(&left, &right, ordering))
}
