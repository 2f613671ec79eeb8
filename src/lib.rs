//! tfdocs keeps Terraform module documentation in sync with the module's
//! variables file. It parses `variable` blocks, rewrites them in a
//! canonical sorted form and splices a summary of the module's interface
//! into the README between TFDOCS markers.

/// Bracket balance scanning with string-literal immunity
/// Decides when a multi-line field value is complete
pub mod balance;

/// Command-line interface module for the tfdocs application
pub mod cli;

/// Common constants: TFDOCS markers and default file names
pub mod constants;

/// Error types and handling for the tfdocs application
pub mod error;

/// Per-field extraction state machine
/// Accumulates field values across continuation lines
pub mod extract;

/// Canonical re-indentation of map, list and call shaped values
pub mod format;

/// Variable block splitting and record construction
pub mod parser;

/// README composition: summary block, marker splice, change detection
pub mod readme;

/// Canonical serialization of records back into configuration syntax
pub mod serialize;

/// Module source resolution from git context
pub mod source;
