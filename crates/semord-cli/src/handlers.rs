//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.
//! Handlers receive the effective configuration, with command-line
//! overrides already applied, and write through an [`OutputWriter`].
//!
//! [`OutputWriter`]: crate::output::OutputWriter

mod bump;
mod compare;
mod completions;
mod config;
mod parse;
mod sort;
mod utils;
mod validate;

pub use bump::handle_bump;
pub use compare::handle_compare;
pub use completions::handle_completions;
pub use config::handle_config;
pub use parse::handle_parse;
pub use sort::handle_sort;
pub use validate::handle_validate;
