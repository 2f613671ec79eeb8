//! Variable block parsing for Terraform variables files.
//! Groups the file's lines into one block per `variable "<name>" { ... }`
//! declaration and extracts the four recognized fields from each block.

use crate::balance::scan_balance;
use crate::extract::{extract_field, Continuation, FieldKind};
use regex::Regex;
use std::sync::LazyLock;

static VARIABLE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*variable\s+"?(\w+)"?\s*\{"#).unwrap());

/// One parsed variable block.
///
/// Raw fields hold the literal text after the `=`, collapsed onto one
/// line; they are never reformatted in place. `type_override` is used
/// only for the README summary, never for the rewritten variables file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRecord {
    pub name: String,
    pub type_raw: String,
    pub type_override: Option<String>,
    pub default_raw: Option<String>,
    pub description_raw: String,
}

/// Parses a variables file into records, in file order.
///
/// # Arguments
/// * `content` - Full text of the variables file
///
/// # Returns
/// * `Vec<VariableRecord>` - One record per variable block
///
/// # Notes
/// - A block starts at a `variable "<name>" {` header (quotes optional)
///   and ends when the accumulated block text balances
/// - Missing fields fall back to their defaults: type `unknown`,
///   description `"No description provided"`
/// - Callers wanting the canonical view sort the result by name
pub fn parse_variables(content: &str) -> Vec<VariableRecord> {
    let mut records = Vec::new();
    let mut block: Vec<&str> = Vec::new();
    let mut header: Option<String> = None;

    for line in content.trim().lines() {
        block.push(line);

        if header.is_none() {
            if let Some(captures) = VARIABLE_HEADER.captures(line) {
                header = Some(captures[1].to_string());
            }
        }

        if header.is_some() && scan_balance(block.iter().copied()) {
            if let Some(name) = header.take() {
                records.push(finalize_block(name, &block));
            }
            block.clear();
        }
    }

    records
}

/// Runs the four field probes over a completed block and fills defaults.
fn finalize_block(name: String, lines: &[&str]) -> VariableRecord {
    let mut type_raw = String::new();
    let mut type_override = String::new();
    let mut default_raw = String::new();
    let mut description_raw = String::new();
    let mut state = Continuation::default();

    for line in lines {
        (type_raw, state) = extract_field(line, FieldKind::Type, type_raw, state);
        (type_override, state) =
            extract_field(line, FieldKind::TypeOverride, type_override, state);
        (default_raw, state) = extract_field(line, FieldKind::Default, default_raw, state);
        (description_raw, state) =
            extract_field(line, FieldKind::Description, description_raw, state);
    }

    VariableRecord {
        name,
        type_override: (!type_override.is_empty()).then_some(type_override),
        type_raw: if type_raw.is_empty() { "unknown".to_string() } else { type_raw },
        default_raw: (!default_raw.is_empty()).then_some(default_raw),
        description_raw: if description_raw.is_empty() {
            "\"No description provided\"".to_string()
        } else {
            description_raw
        },
    }
}
