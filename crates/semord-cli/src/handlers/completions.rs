//! Shell completions command handler

use crate::cli::{Cli, CompletionsArgs};
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use clap::CommandFactory;

/// Handle the completions command
///
/// The script is rendered in full before anything is written, so a failure
/// never leaves a truncated script on stdout.
pub fn handle_completions(args: CompletionsArgs, output: &mut OutputWriter) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    let mut script = Vec::new();
    clap_complete::generate(args.shell.to_clap_shell(), &mut cmd, name, &mut script);
    tracing::debug!(shell = ?args.shell, bytes = script.len(), "Generated completions");

    let script = String::from_utf8(script)
        .map_err(|e| Error::other(format!("Completion script is not UTF-8: {}", e)))?;
    output.write(&script)
}
