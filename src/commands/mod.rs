//! CLI command implementations
//!
//! `InspectCommand` prints a diagnostic report for one file,
//! `BatchCommand` extracts many files in parallel.

pub mod command_traits;
pub mod inspect_command;
pub mod batch_command;

pub use command_traits::{Command, CommandFactory};
pub use inspect_command::InspectCommand;
pub use batch_command::BatchCommand;

use std::time::Duration;

use clap::ArgMatches;

use crate::api::{ExtractorOptions, MetadataExtractor};
use crate::tiff::errors::{DecodeError, DecodeResult};

/// Factory for creating command instances based on CLI arguments
pub struct SatmetaCommandFactory;

impl SatmetaCommandFactory {
    pub fn new() -> Self {
        SatmetaCommandFactory
    }
}

impl Default for SatmetaCommandFactory {
    fn default() -> Self {
        SatmetaCommandFactory::new()
    }
}

impl CommandFactory for SatmetaCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> DecodeResult<Box<dyn Command>> {
        let inputs: Vec<String> = args
            .get_many::<String>("input")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        let extractor = MetadataExtractor::new(extractor_options(args)?);

        match inputs.as_slice() {
            [] => Err(DecodeError::InvalidArgument("Missing input file".to_string())),
            [input] if !args.get_flag("batch") => {
                let filename = args.get_one::<String>("filename").cloned();
                Ok(Box::new(InspectCommand::new(input, filename, extractor)))
            },
            _ => {
                if args.get_one::<String>("filename").is_some() {
                    return Err(DecodeError::InvalidArgument(
                        "--filename applies to a single input only".to_string(),
                    ));
                }
                Ok(Box::new(BatchCommand::new(&inputs, extractor)))
            },
        }
    }
}

/// Maps CLI flags onto extractor options
fn extractor_options(args: &ArgMatches) -> DecodeResult<ExtractorOptions> {
    let mut options = ExtractorOptions::default();

    if let Some(timeout) = args.get_one::<String>("timeout") {
        let seconds: u64 = timeout
            .parse()
            .map_err(|_| DecodeError::InvalidArgument(format!("Invalid timeout: {}", timeout)))?;
        options.remote_timeout = Duration::from_secs(seconds);
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, ArgAction};

    fn parse(argv: &[&str]) -> ArgMatches {
        clap::Command::new("satmeta")
            .arg(Arg::new("input").num_args(1..).index(1))
            .arg(Arg::new("batch").short('b').action(ArgAction::SetTrue))
            .arg(Arg::new("filename").short('f'))
            .arg(Arg::new("timeout").long("timeout").default_value("30"))
            .get_matches_from(argv)
    }

    #[test]
    fn test_timeout_flag() {
        let options = extractor_options(&parse(&["satmeta", "a.tif", "--timeout", "5"])).unwrap();
        assert_eq!(options.remote_timeout, Duration::from_secs(5));

        let invalid = extractor_options(&parse(&["satmeta", "a.tif", "--timeout", "soon"]));
        assert!(matches!(invalid, Err(DecodeError::InvalidArgument(_))));
    }

    #[test]
    fn test_command_selection() {
        let factory = SatmetaCommandFactory::new();

        assert!(factory.create_command(&parse(&["satmeta", "a.tif"])).is_ok());
        assert!(factory.create_command(&parse(&["satmeta", "-b", "a.tif"])).is_ok());
        assert!(factory.create_command(&parse(&["satmeta", "a.tif", "b.tif"])).is_ok());
        assert!(matches!(
            factory.create_command(&parse(&["satmeta"])),
            Err(DecodeError::InvalidArgument(_))
        ));
        assert!(matches!(
            factory.create_command(&parse(&["satmeta", "-f", "S2A.tif", "a.tif", "b.tif"])),
            Err(DecodeError::InvalidArgument(_))
        ));
    }
}
