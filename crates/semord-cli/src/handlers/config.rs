//! Config command handler

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Show(show) => {
            let rendered = match show.format {
                ConfigFormat::Toml => config.to_toml()?,
                ConfigFormat::Json => serde_json::to_string_pretty(config)?,
                ConfigFormat::Yaml => serde_yaml::to_string(config)?,
            };
            output.writeln(rendered.trim_end())
        }
        ConfigAction::Paths => {
            for path in Config::default_config_paths() {
                let marker = if path.exists() { "*" } else { " " };
                output.writeln(&format!("{} {}", marker, path.display()))?;
            }
            Ok(())
        }
    }
}
