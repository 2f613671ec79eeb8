//! Per-field value extraction from the lines of a variable block.
//! Each block line is probed once per field; a field whose brackets have
//! not yet balanced keeps consuming lines until they do.

use crate::balance::is_balanced;
use regex::Regex;
use std::sync::LazyLock;

static TYPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*type\s*=\s*").unwrap());
static TYPE_OVERRIDE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#\s*tfdocs:\s*type\s*=\s*").unwrap());
static DEFAULT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*default\s*=\s*").unwrap());
static DESCRIPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*description\s*=\s*").unwrap());

/// The four attributes recognized inside a variable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Type,
    /// Display type from a `# tfdocs: type=...` comment directive.
    TypeOverride,
    Default,
    Description,
}

impl FieldKind {
    fn pattern(&self) -> &'static Regex {
        match self {
            FieldKind::Type => &TYPE_PATTERN,
            FieldKind::TypeOverride => &TYPE_OVERRIDE_PATTERN,
            FieldKind::Default => &DEFAULT_PATTERN,
            FieldKind::Description => &DESCRIPTION_PATTERN,
        }
    }
}

/// Extraction state carried between lines of a block.
///
/// At most one field is continuing at any time in well-formed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Continuation {
    #[default]
    Idle,
    Continuing(FieldKind),
}

/// Feeds one line to the extractor for one field.
///
/// # Arguments
/// * `line` - Current line of the block
/// * `kind` - Field being probed
/// * `value` - Value accumulated so far for this field
/// * `state` - Continuation state shared by all probes of the block
///
/// # Returns
/// * `(String, Continuation)` - Updated value and state
///
/// # Behavior
/// - Idle and the line does not start this field: inputs pass through
/// - Fresh match: the value is the right-hand side of the first `=`
/// - Continuing this field: the trimmed line is appended
/// - The new value is re-balanced to decide whether the field is done
pub fn extract_field(
    line: &str,
    kind: FieldKind,
    value: String,
    state: Continuation,
) -> (String, Continuation) {
    let continuing = state == Continuation::Continuing(kind);
    let fresh = state == Continuation::Idle && kind.pattern().is_match(line);

    if !fresh && !continuing {
        return (value, state);
    }

    let next = if continuing {
        let mut accumulated = value;
        accumulated.push_str(line.trim());
        accumulated
    } else {
        line.split_once('=')
            .map(|(_, rhs)| rhs.trim().to_string())
            .unwrap_or_default()
    };

    let state = if is_balanced(&next) {
        Continuation::Idle
    } else {
        Continuation::Continuing(kind)
    };

    (next, state)
}
