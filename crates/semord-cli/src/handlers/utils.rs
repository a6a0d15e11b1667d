//! Shared helpers for command handlers

use crate::error::Result;
use semord_core::{Dialect, Version};
use std::io::BufRead;

/// Parse one command-line version under the configured dialect
pub fn parse_version(raw: &str, dialect: Dialect) -> Result<Version> {
    let version = Version::parse_with(raw, dialect)?;
    tracing::debug!(input = raw, version = %version, "Parsed version");
    Ok(version)
}

/// Read one version per line, skipping blank lines
pub fn read_inputs<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_inputs_skips_blank_lines() {
        let input = Cursor::new("1.0.0\n\n  0.9.0  \r\n\t\n2.0.0-rc.1");
        let inputs = read_inputs(input).unwrap();
        assert_eq!(inputs, ["1.0.0", "0.9.0", "2.0.0-rc.1"]);
    }

    #[test]
    fn test_parse_version_uses_dialect() {
        assert!(parse_version("0.0.0", Dialect::Classic).is_err());
        assert!(parse_version("0.0.0", Dialect::Standard).is_ok());
    }
}
