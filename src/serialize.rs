//! Canonical serialization of variable records back into configuration
//! syntax.

use crate::format::format_value;
use crate::parser::VariableRecord;

/// Renders one variable block in canonical form, followed by a blank
/// separator line.
///
/// Field order is `#tfdocs` directive, `type`, `description`, `default`;
/// `type` and `default` are re-indented, `description` is emitted as-is.
pub fn serialize_variable(record: &VariableRecord) -> String {
    let mut out = format!("variable \"{}\" {{\n", record.name);

    if let Some(override_type) = &record.type_override {
        out.push_str(&format!("  #tfdocs: type={}\n", override_type));
    }

    let type_line = format!("  type = {}\n", format_value(&record.type_raw, 1));
    let description_line = format!("  description = {}\n", record.description_raw);

    // map(object(...)) blocks with an empty default keep description
    // first, matching the historical output.
    let description_first = record.type_raw.starts_with("map(object(")
        && record.default_raw.as_deref() == Some("{}");

    if description_first {
        out.push_str(&description_line);
        out.push_str(&type_line);
    } else {
        out.push_str(&type_line);
        out.push_str(&description_line);
    }

    if let Some(default_raw) = &record.default_raw {
        out.push_str(&format!("  default = {}\n", format_value(default_raw, 1)));
    }

    out.push_str("}\n\n");
    out
}

/// Concatenates all blocks in the caller-supplied order and terminates
/// the file with exactly one trailing newline.
pub fn serialize_file(records: &[VariableRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&serialize_variable(record));
    }
    format!("{}\n", out.trim_end())
}
