//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Semord CLI - Parse, compare and order semantic versions
///
/// Versions follow MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]. Build metadata
/// never affects ordering.
#[derive(Parser, Debug)]
#[command(
    name = "semord",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SEMORD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (overrides the configuration file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Parsing and ordering rules (overrides the configuration file)
    #[arg(long, value_enum, global = true)]
    pub dialect: Option<DialectArg>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a version and show its components
    Parse(ParseArgs),

    /// Compare two versions by precedence
    Compare(CompareArgs),

    /// Sort versions by precedence (reads stdin when no versions are given)
    Sort(SortArgs),

    /// Print the next major, minor or patch release
    Bump(BumpArgs),

    /// Check whether each input is a valid version
    Validate(ValidateArgs),

    /// Inspect configuration
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the parse command
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Version string to parse
    #[arg(id = "version_value", value_name = "VERSION", allow_hyphen_values = true)]
    pub version: String,
}

/// Arguments for the compare command
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    #[arg(value_name = "LEFT", allow_hyphen_values = true)]
    pub left: String,

    /// Right-hand version
    #[arg(value_name = "RIGHT", allow_hyphen_values = true)]
    pub right: String,
}

/// Arguments for the sort command
#[derive(Parser, Debug)]
pub struct SortArgs {
    /// Versions to sort; one per line on stdin if omitted
    #[arg(value_name = "VERSIONS")]
    pub versions: Vec<String>,

    /// Sort from highest to lowest precedence
    #[arg(short, long)]
    pub reverse: bool,
}

/// Arguments for the bump command
#[derive(Parser, Debug)]
pub struct BumpArgs {
    /// Version to increment
    #[arg(id = "version_value", value_name = "VERSION", allow_hyphen_values = true)]
    pub version: String,

    /// Component to increment
    #[arg(value_enum)]
    pub component: BumpComponent,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Version strings to check
    #[arg(value_name = "VERSIONS", required = true, allow_hyphen_values = true)]
    pub versions: Vec<String>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration inspection actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show(ConfigShowArgs),

    /// List the files checked when no --config is given
    Paths,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Parsing and ordering dialect
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DialectArg {
    /// Reject 0.0.0 and compare pre-release identifiers as text
    Classic,
    /// SemVer 2.0 rules
    Standard,
}

/// Version component to increment
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BumpComponent {
    Major,
    Minor,
    Patch,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<DialectArg> for semord_core::Dialect {
    fn from(dialect: DialectArg) -> Self {
        match dialect {
            DialectArg::Classic => semord_core::Dialect::Classic,
            DialectArg::Standard => semord_core::Dialect::Standard,
        }
    }
}

impl From<BumpComponent> for semord_core::Component {
    fn from(component: BumpComponent) -> Self {
        match component {
            BumpComponent::Major => semord_core::Component::Major,
            BumpComponent::Minor => semord_core::Component::Minor,
            BumpComponent::Patch => semord_core::Component::Patch,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify that the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli {
            verbose: 2,
            quiet: false,
            config: None,
            output: None,
            no_color: false,
            dialect: None,
            command: Commands::Parse(ParseArgs {
                version: "1.2.3".to_string(),
            }),
        };
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli {
            verbose: 2,
            quiet: true,
            ..cli
        };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }

    #[test]
    fn test_subcommand_parsing() {
        let cli = Cli::parse_from(["semord", "compare", "1.0.0-alpha", "1.0.0"]);
        match cli.command {
            Commands::Compare(args) => {
                assert_eq!(args.left, "1.0.0-alpha");
                assert_eq!(args.right, "1.0.0");
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::parse_from([
            "semord",
            "--dialect",
            "standard",
            "sort",
            "-r",
            "1.0.0",
            "2.0.0",
        ]);
        assert_eq!(cli.dialect, Some(DialectArg::Standard));
        match cli.command {
            Commands::Sort(args) => {
                assert!(args.reverse);
                assert_eq!(args.versions.len(), 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::parse_from(["semord", "-o", "json-pretty", "bump", "1.2.3", "minor"]);
        assert_eq!(cli.output, Some(OutputFormat::JsonPretty));
        assert!(matches!(
            cli.command,
            Commands::Bump(BumpArgs { component: BumpComponent::Minor, .. })
        ));
    }

    #[test]
    fn test_dialect_conversion() {
        assert_eq!(
            semord_core::Dialect::from(DialectArg::Standard),
            semord_core::Dialect::Standard
        );
        assert_eq!(
            semord_core::Component::from(BumpComponent::Patch),
            semord_core::Component::Patch
        );
    }
}
