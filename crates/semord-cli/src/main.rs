//! Semord CLI - Command-line interface for semantic version handling
//!
//! This is the main entry point for the Semord CLI application, providing
//! commands for parsing, comparing, sorting, bumping and validating
//! semantic versions.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Load configuration before logging; its logging section feeds the subscriber
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => effective_config(&cli, config),
        Err(e) => exit_with(&e, cli.use_color()),
    };

    // Set up colored output
    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);

    // Initialize logging
    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli, config, use_color) {
        Ok(()) => process::exit(0),
        Err(e) => exit_with(&e, use_color),
    }
}

fn exit_with(e: &error::Error, use_color: bool) -> ! {
    eprintln!("{}", error::format_error(e, use_color));

    if e.should_show_help() {
        eprintln!("\nFor more information, try '--help'");
    }

    process::exit(e.exit_code());
}

/// Apply command-line overrides on top of the loaded configuration
fn effective_config(cli: &Cli, mut config: Config) -> Config {
    if let Some(dialect) = cli.dialect {
        config.dialect = dialect.into();
    }
    if let Some(format) = cli.output {
        config.output.format = format;
    }
    if cli.no_color {
        config.output.color = false;
    }
    config
}

/// Main application logic
#[instrument(skip(cli, config, use_color), fields(command = ?cli.command))]
fn run(cli: Cli, config: Config, use_color: bool) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let mut output = OutputWriter::new(config.output.format, use_color, cli.quiet);

    tracing::info!(
        command = ?cli.command,
        dialect = %config.dialect,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    match cli.command {
        Commands::Parse(args) => handlers::handle_parse(args, &config, &mut output),
        Commands::Compare(args) => handlers::handle_compare(args, &config, &mut output),
        Commands::Sort(args) => handlers::handle_sort(args, &config, &mut output),
        Commands::Bump(args) => handlers::handle_bump(args, &config, &mut output),
        Commands::Validate(args) => handlers::handle_validate(args, &config, &mut output),
        Commands::Config(args) => handlers::handle_config(args, &config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args, &mut output),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let verbosity = cli.verbosity_level();
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);

    logging_config.merge_with_file(&config.logging, verbosity);
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    logging::init_logging(logging_config)
}
