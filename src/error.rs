use std::path::PathBuf;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    /// No positional project name was passed on the command line.
    #[error("the project name is not set")]
    MissingProjectName,

    /// A directory could not be created for a reason other than it already existing.
    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDirectoryError { path: PathBuf, source: std::io::Error },

    #[error("Failed to write file '{}': {source}", .path.display())]
    WriteFileError { path: PathBuf, source: std::io::Error },

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),
}

/// Convenience type alias for Results with this crate's error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
