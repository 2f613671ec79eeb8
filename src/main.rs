//! tfdocs' main application entry point and orchestration logic.
//! Handles command-line argument parsing, runs the parse/format/serialize
//! pipeline once and reports which files changed.

use tfdocs::{
    cli::{get_args, Args},
    error::{default_error_handler, TfdocsResult},
    readme::Readme,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads and parses the variables file
/// 2. Under --dry-run, prints the generated files and reports
/// 3. Otherwise writes the variables file (with -f) and the README
/// 4. Reports changed files: exit 1 when anything changed, 0 otherwise
fn run(args: Args) -> TfdocsResult<()> {
    let module_name = args.module_name.clone().unwrap_or_else(default_module_name);

    let readme = Readme::load(
        &args.readme_file,
        &args.variables_file,
        &module_name,
        args.source.as_deref(),
        args.git_source,
    )?;

    // Captured before any write so the report reflects the state found
    // on disk.
    let variables_changed = readme.variables_changed();
    let readme_changed = readme.readme_changed();

    if args.dry_run {
        if args.format {
            readme.print_variables();
        }
        readme.print_readme();
        report_and_exit(readme_changed, variables_changed, &args);
    }

    if args.format {
        readme.write_variables()?;
    }
    readme.write_readme()?;

    report_and_exit(readme_changed, variables_changed, &args);
}

/// Prints a summary of changed files and exits.
///
/// Exit code 1 when there are applied or pending updates, 0 otherwise.
fn report_and_exit(readme_changed: bool, variables_changed: bool, args: &Args) -> ! {
    let mut changed_files = Vec::new();

    if readme_changed {
        changed_files.push(args.readme_file.display().to_string());
    }
    if args.format && variables_changed {
        changed_files.push(args.variables_file.display().to_string());
    }

    if changed_files.is_empty() {
        println!("Nothing to update");
        std::process::exit(0);
    }

    let changed_list = changed_files.join(", ");
    if args.dry_run {
        println!("Pending changes: {changed_list}");
    } else {
        println!("Updated: {changed_list}");
    }
    std::process::exit(1);
}

/// The current directory's name, used when --name is not given.
fn default_module_name() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "module".to_string())
}
