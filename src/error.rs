//! Error handling for the tfdocs application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for tfdocs operations.
///
/// Parsing and formatting never fail: absent or malformed fields degrade
/// to their documented defaults. The only hard failures live at the file
/// boundary.
#[derive(Error, Debug)]
pub enum TfdocsError {
    /// The variables file could not be found
    #[error("Cannot find {path} in current directory.")]
    MissingInputFile { path: String },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with TfdocsError as the error type.
pub type TfdocsResult<T> = Result<T, TfdocsError>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The TfdocsError to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: TfdocsError) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
