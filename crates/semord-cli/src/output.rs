//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable) for parsed versions,
//! comparisons, sorted lists and validation reports.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use semord_core::{Dialect, Version};
use serde::Serialize;
use std::cmp::Ordering;
use std::io::{self, Write};
use tracing::trace;

/// Components of a parsed version
#[derive(Debug, Clone, Serialize)]
pub struct VersionReport {
    pub version: String,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub pre_release: Vec<String>,
    pub build: Vec<String>,
    pub is_pre_release: bool,
    pub dialect: Dialect,
}

/// Outcome of comparing two versions
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub left: String,
    pub right: String,
    pub ordering: &'static str,
    pub before: bool,
    pub after: bool,
    pub same: bool,
}

/// Validation outcome for one input
#[derive(Debug, Clone, Serialize)]
pub struct ValidationEntry {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VersionReport {
    pub fn new(version: &Version, dialect: Dialect) -> Self {
        Self {
            version: version.to_string(),
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            pre_release: version.pre_release().to_vec(),
            build: version.build().to_vec(),
            is_pre_release: version.is_pre_release(),
            dialect,
        }
    }
}

impl ComparisonReport {
    pub fn new(left: &Version, right: &Version, ordering: Ordering) -> Self {
        Self {
            left: left.to_string(),
            right: right.to_string(),
            ordering: match ordering {
                Ordering::Less => "less",
                Ordering::Equal => "equal",
                Ordering::Greater => "greater",
            },
            before: ordering == Ordering::Less,
            after: ordering == Ordering::Greater,
            same: ordering == Ordering::Equal,
        }
    }

    fn symbol(&self) -> &'static str {
        match self.ordering {
            "less" => "<",
            "greater" => ">",
            _ => "==",
        }
    }
}

impl ValidationEntry {
    pub fn valid(input: &str) -> Self {
        Self {
            input: input.to_string(),
            valid: true,
            kind: None,
            message: None,
        }
    }

    pub fn invalid(input: &str, error: &semord_core::Error) -> Self {
        Self {
            input: input.to_string(),
            valid: false,
            kind: Some(error.kind().to_string()),
            message: Some(error.to_string()),
        }
    }
}

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format the components of a version
    fn format_version_report(&self, report: &VersionReport) -> Result<String>;

    /// Format a comparison between two versions
    fn format_comparison(&self, report: &ComparisonReport) -> Result<String>;

    /// Format validation outcomes
    fn format_validation(&self, entries: &[ValidationEntry]) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_version_report(&self, report: &VersionReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_version_report_human(report)),
            _ => self.format(report),
        }
    }

    fn format_comparison(&self, report: &ComparisonReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format!(
                "{} {} {} ({})",
                report.left,
                report.symbol(),
                report.right,
                report.ordering
            )),
            _ => self.format(report),
        }
    }

    fn format_validation(&self, entries: &[ValidationEntry]) -> Result<String> {
        match self {
            OutputFormat::Human => {
                let lines: Vec<String> = entries.iter().map(validation_line).collect();
                Ok(lines.join("\n"))
            }
            _ => self.format(&entries),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!("Outputting data: {}", formatted);
        self.emit(&formatted)
    }

    /// Write a version's components
    pub fn version_report(&mut self, report: &VersionReport) -> Result<()> {
        let formatted = self.format.format_version_report(report)?;
        self.emit(&formatted)
    }

    /// Write a comparison result
    pub fn comparison(&mut self, report: &ComparisonReport) -> Result<()> {
        let formatted = self.format.format_comparison(report)?;
        self.emit(&formatted)
    }

    /// Write validation outcomes
    ///
    /// Quiet human output keeps only the invalid entries.
    pub fn validation(&mut self, entries: &[ValidationEntry]) -> Result<()> {
        if self.format != OutputFormat::Human {
            let formatted = self.format.format_validation(entries)?;
            return self.emit(&formatted);
        }

        for entry in entries {
            if self.quiet && entry.valid {
                continue;
            }
            let line = validation_line(entry);
            if !self.use_color {
                self.writeln(&line)?;
            } else if entry.valid {
                self.writeln(&line.green().to_string())?;
            } else {
                self.writeln(&line.red().to_string())?;
            }
        }
        Ok(())
    }

    /// Write a list of versions, one per line for human output
    pub fn versions(&mut self, versions: &[Version]) -> Result<()> {
        if self.format == OutputFormat::Human {
            for version in versions {
                self.writeln(&version.to_string())?;
            }
            return Ok(());
        }
        self.data(&versions)
    }

    // Machine formats may lack a trailing newline; YAML already has one
    fn emit(&mut self, formatted: &str) -> Result<()> {
        if formatted.ends_with('\n') {
            self.write(formatted)
        } else {
            self.writeln(formatted)
        }
    }
}

/// Format a version report for human reading
fn format_version_report_human(report: &VersionReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Version:     {}\n", report.version));
    output.push_str(&format!("Major:       {}\n", report.major));
    output.push_str(&format!("Minor:       {}\n", report.minor));
    output.push_str(&format!("Patch:       {}\n", report.patch));
    output.push_str(&format!("Pre-release: {}\n", join_or_dash(&report.pre_release)));
    output.push_str(&format!("Build:       {}\n", join_or_dash(&report.build)));
    output.push_str(&format!("Dialect:     {}", report.dialect));

    output
}

/// One human-readable validation line, without color
fn validation_line(entry: &ValidationEntry) -> String {
    if entry.valid {
        format!("✓ {}", entry.input)
    } else {
        let message = entry.message.as_deref().unwrap_or("invalid");
        format!("✗ {}: {}", entry.input, message)
    }
}

fn join_or_dash(identifiers: &[String]) -> String {
    if identifiers.is_empty() {
        "-".to_string()
    } else {
        identifiers.join(".")
    }
}
