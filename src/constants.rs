//! Common constants used throughout the tfdocs application.

/// Start marker of the generated README region
pub const MARKER_START: &str = "<!-- TFDOCS START -->";

/// End marker of the generated README region
pub const MARKER_END: &str = "<!-- TFDOCS END -->";

/// Default variables file name
pub const DEFAULT_VARIABLES_FILE: &str = "variables.tf";

/// Default README file name
pub const DEFAULT_README_FILE: &str = "README.md";
