//! Command pattern interfaces
//!
//! Each CLI mode is a `Command`; a `CommandFactory` picks the command from
//! the parsed arguments.

use crate::tiff::errors::DecodeResult;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> DecodeResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches) -> DecodeResult<Box<dyn Command>>;
}
