//! Bump command handler

use super::utils::parse_version;
use crate::cli::BumpArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use semord_core::Version;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct BumpReport<'a> {
    from: &'a Version,
    to: &'a Version,
    component: String,
}

/// Handle the bump command
pub fn handle_bump(args: BumpArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let version = parse_version(&args.version, config.dialect)?;
    let component: semord_core::Component = args.component.into();
    let bumped = version.bump(component)?;
    tracing::info!(from = %version, to = %bumped, %component, "Bumped version");

    if output.format() == crate::cli::OutputFormat::Human {
        return output.writeln(&bumped.to_string());
    }

    output.data(&BumpReport {
        from: &version,
        to: &bumped,
        component: component.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{BumpComponent, OutputFormat};
    use crate::error::Error;
    use crate::handlers::test_support::capture;

    #[test]
    fn test_bump_human() {
        for (component, expected) in [
            (BumpComponent::Major, "2.0.0\n"),
            (BumpComponent::Minor, "1.3.0\n"),
            (BumpComponent::Patch, "1.2.4\n"),
        ] {
            let (mut output, captured) = capture(OutputFormat::Human);
            let args = BumpArgs {
                version: "1.2.3-rc.1+build.7".to_string(),
                component,
            };
            handle_bump(args, &Config::default(), &mut output).unwrap();
            assert_eq!(captured.text(), expected);
        }
    }

    #[test]
    fn test_bump_json() {
        let (mut output, captured) = capture(OutputFormat::Json);
        let args = BumpArgs {
            version: "0.9.9".to_string(),
            component: BumpComponent::Minor,
        };
        handle_bump(args, &Config::default(), &mut output).unwrap();
        assert_eq!(
            captured.text(),
            "{\"from\":\"0.9.9\",\"to\":\"0.10.0\",\"component\":\"minor\"}\n"
        );
    }

    #[test]
    fn test_bump_overflow() {
        let (mut output, _) = capture(OutputFormat::Human);
        let args = BumpArgs {
            version: "1.4294967295.0".to_string(),
            component: BumpComponent::Minor,
        };
        let err = handle_bump(args, &Config::default(), &mut output).unwrap_err();
        assert!(matches!(
            err,
            Error::Core(semord_core::Error::IntegerOverflow { .. })
        ));
    }
}
