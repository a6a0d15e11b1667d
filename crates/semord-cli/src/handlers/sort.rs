//! Sort command handler

use super::utils::{parse_version, read_inputs};
use crate::cli::SortArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use semord_core::{sort_descending_with, sort_with, Version};
use std::io::{self, BufRead};

/// Handle the sort command, reading stdin when no versions are given
pub fn handle_sort(args: SortArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let stdin = io::stdin();
    sort_from(args, config, output, stdin.lock())
}

fn sort_from<R: BufRead>(
    args: SortArgs,
    config: &Config,
    output: &mut OutputWriter,
    input: R,
) -> Result<()> {
    let inputs = if args.versions.is_empty() {
        tracing::debug!("Reading versions from stdin");
        read_inputs(input)?
    } else {
        args.versions
    };

    if inputs.is_empty() {
        return Err(Error::invalid_args("no versions to sort"));
    }

    let _timer = Timer::new("sort");
    let mut versions = inputs
        .iter()
        .map(|raw| parse_version(raw, config.dialect))
        .collect::<Result<Vec<Version>>>()?;

    if args.reverse {
        sort_descending_with(&mut versions, config.dialect);
    } else {
        sort_with(&mut versions, config.dialect);
    }
    tracing::info!(count = versions.len(), reverse = args.reverse, "Sorted versions");

    output.versions(&versions)
}
