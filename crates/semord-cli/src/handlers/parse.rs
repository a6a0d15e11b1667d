//! Parse command handler

use super::utils::parse_version;
use crate::cli::ParseArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::{OutputWriter, VersionReport};

/// Handle the parse command
pub fn handle_parse(args: ParseArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let version = parse_version(&args.version, config.dialect)?;
    output.version_report(&VersionReport::new(&version, config.dialect))
}
