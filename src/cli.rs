//! Command-line interface implementation for tfdocs.
//! Provides argument parsing using clap.

use crate::constants::{DEFAULT_README_FILE, DEFAULT_VARIABLES_FILE};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for tfdocs.
#[derive(Parser, Debug)]
#[command(author, version, about = "tfdocs: Terraform variables formatter and README generator", long_about = None)]
pub struct Args {
    /// Specify a custom name for the module (defaults to the current
    /// directory name)
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub module_name: Option<String>,

    /// Specify a custom name for the README.md file
    #[arg(long = "readme", value_name = "FILE", default_value = DEFAULT_README_FILE)]
    pub readme_file: PathBuf,

    /// Specify a custom name for the variables.tf file
    #[arg(long = "variables", value_name = "FILE", default_value = DEFAULT_VARIABLES_FILE)]
    pub variables_file: PathBuf,

    /// Specify a custom source for the module
    #[arg(long, value_name = "SOURCE")]
    pub source: Option<String>,

    /// Suffix the module source with the git path and tag placeholder
    #[arg(long)]
    pub git_source: bool,

    /// Format and sort the variables.tf file
    #[arg(short = 'f', long)]
    pub format: bool,

    /// Show the generated README.md file (and variables.tf when
    /// formatting is enabled) without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
