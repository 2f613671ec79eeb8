//! Module source resolution for the README summary.
//! An explicit source is taken verbatim; otherwise the enclosing git
//! repository supplies the remote URL and the module's path inside it.

use git2::Repository;
use log::debug;
use std::path::Path;

/// Resolves the `source = "..."` string for the summary block.
///
/// # Arguments
/// * `module_name` - Name used by the local-path fallback
/// * `source` - Explicit source from the command line, if any
/// * `git_source` - Whether to suffix the source with `//<path>?ref=<TAG>`
///
/// # Returns
/// * `String` - Resolved source; falls back to `./modules/<module_name>`
///   when no git context is available
pub fn generate_source(module_name: &str, source: Option<&str>, git_source: bool) -> String {
    let context = if source.is_some() && !git_source {
        None
    } else {
        git_context()
    };
    let context = context.as_ref().map(|(url, path)| (url.as_str(), path.as_str()));

    compose_source(module_name, source, git_source, context)
}

/// Pure composition of the source string from an optional git context.
pub fn compose_source(
    module_name: &str,
    source: Option<&str>,
    git_source: bool,
    context: Option<(&str, &str)>,
) -> String {
    if let Some(source) = source {
        if !git_source {
            return source.to_string();
        }
    }

    match context {
        Some((remote_url, rel_path)) => {
            format!("{}//{}?ref=<TAG>", source.unwrap_or(remote_url), rel_path)
        }
        None => format!("./modules/{module_name}"),
    }
}

/// Discovers the enclosing repository's origin URL and the working
/// directory's path relative to the repository root.
fn git_context() -> Option<(String, String)> {
    let repo = Repository::discover(".").ok()?;
    let workdir = repo.workdir()?.to_path_buf();
    let remote_url = repo.find_remote("origin").ok()?.url()?.to_string();

    let cwd = std::env::current_dir().ok()?;
    let rel_path = relative_path(&cwd, &workdir);

    debug!("resolved git source from {}", workdir.display());
    Some((remote_url, rel_path))
}

/// Path of `cwd` relative to `root`, `.` when they are the same.
fn relative_path(cwd: &Path, root: &Path) -> String {
    let cwd = cwd.canonicalize().unwrap_or_else(|_| cwd.to_path_buf());
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());

    match cwd.strip_prefix(&root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.to_string_lossy().into_owned(),
        Err(_) => ".".to_string(),
    }
}
