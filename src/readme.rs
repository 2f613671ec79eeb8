//! README composition and the file boundary of the pipeline.
//! Owns the parsed record set for one invocation: loads and parses the
//! variables file, renders the summary block, splices it between the
//! TFDOCS markers and writes both output files.

use crate::constants::{MARKER_END, MARKER_START};
use crate::error::{TfdocsError, TfdocsResult};
use crate::parser::{parse_variables, VariableRecord};
use crate::serialize::serialize_file;
use crate::source::generate_source;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// One module's documentation state: the sorted record set plus the
/// paths it was read from and will be written back to.
#[derive(Debug)]
pub struct Readme {
    module_name: String,
    module_source: Option<String>,
    git_source: bool,
    readme_file: PathBuf,
    variables_file: PathBuf,
    records: Vec<VariableRecord>,
    variables_changed: bool,
}

impl Readme {
    /// Reads and parses the variables file.
    ///
    /// # Errors
    /// * `TfdocsError::MissingInputFile` when the variables file does
    ///   not exist; this is the pipeline's only fatal parse-side error
    pub fn load<P: AsRef<Path>>(
        readme_file: P,
        variables_file: P,
        module_name: &str,
        module_source: Option<&str>,
        git_source: bool,
    ) -> TfdocsResult<Self> {
        let variables_file = variables_file.as_ref().to_path_buf();
        let content = fs::read_to_string(&variables_file).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TfdocsError::MissingInputFile {
                    path: variables_file.display().to_string(),
                }
            } else {
                TfdocsError::IoError(e)
            }
        })?;

        let mut records = parse_variables(&content);
        records.sort_by(|a, b| a.name.cmp(&b.name));
        debug!("parsed {} variable blocks", records.len());

        let variables_changed = serialize_file(&records).trim() != content.trim();

        Ok(Self {
            module_name: module_name.to_string(),
            module_source: module_source.map(str::to_string),
            git_source,
            readme_file: readme_file.as_ref().to_path_buf(),
            variables_file,
            records,
            variables_changed,
        })
    }

    /// Whether canonical reserialization differs from the on-disk file.
    pub fn variables_changed(&self) -> bool {
        self.variables_changed
    }

    /// Whether the composed README differs from the on-disk file.
    pub fn readme_changed(&self) -> bool {
        match fs::read_to_string(&self.readme_file) {
            Ok(existing) => {
                let existing: Vec<&str> = existing.split('\n').collect();
                self.compose_readme() != existing
            }
            Err(_) => true,
        }
    }

    /// Canonical text of the variables file.
    pub fn canonical_variables(&self) -> String {
        serialize_file(&self.records)
    }

    pub fn write_variables(&self) -> TfdocsResult<()> {
        fs::write(&self.variables_file, self.canonical_variables())?;
        Ok(())
    }

    /// The fenced summary block spliced into the README.
    ///
    /// The `#` comment column is right-aligned across all variables:
    /// each line's rendered width is measured before upper-casing and
    /// padded to the widest line plus two.
    pub fn summary_lines(&self) -> Vec<String> {
        let width = self
            .records
            .iter()
            .map(|record| rendered_width(record))
            .max()
            .unwrap_or(0);

        let source =
            generate_source(&self.module_name, self.module_source.as_deref(), self.git_source);

        let mut lines = vec![
            "```".to_string(),
            format!("module <{}> {{", self.module_name),
            format!("  source = \"{source}\""),
        ];

        for record in &self.records {
            let display_type = display_type(record);
            let padding = " ".repeat(width - rendered_width(record) + 2);
            lines.push(format!(
                "  {} = <{}> {} # {}",
                record.name,
                display_type.to_uppercase(),
                padding,
                unquote(&record.description_raw)
            ));
        }

        lines.push("}".to_string());
        lines.push("```".to_string());
        lines
    }

    /// Full README content as lines.
    ///
    /// When the file exists and holds both markers, everything strictly
    /// between them is replaced and all other lines are preserved.
    /// Otherwise a fresh document is synthesized.
    pub fn compose_readme(&self) -> Vec<String> {
        let summary = self.summary_lines();

        if let Ok(existing) = fs::read_to_string(&self.readme_file) {
            let lines: Vec<&str> = existing.split('\n').collect();
            let start = lines.iter().position(|line| line.contains(MARKER_START));
            let end = lines.iter().position(|line| line.contains(MARKER_END));

            if let (Some(start), Some(end)) = (start, end) {
                if start < end {
                    let mut spliced: Vec<String> =
                        lines[..=start].iter().map(|l| l.to_string()).collect();
                    spliced.extend(summary);
                    spliced.extend(lines[end..].iter().map(|l| l.to_string()));
                    return spliced;
                }
            }
            debug!("no TFDOCS markers in {}, rewriting", self.readme_file.display());
        }

        let mut fresh = vec![
            format!("# {} module", self.module_name),
            String::new(),
            MARKER_START.to_string(),
        ];
        fresh.extend(summary);
        fresh.push(MARKER_END.to_string());
        fresh.push(String::new());
        fresh
    }

    pub fn write_readme(&self) -> TfdocsResult<()> {
        let mut lines = self.compose_readme();
        if lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        fs::write(&self.readme_file, format!("{}\n", lines.join("\n")))?;
        Ok(())
    }

    pub fn print_variables(&self) {
        println!("--- {} ---", self.variables_file.display());
        println!("{}", self.canonical_variables());
    }

    pub fn print_readme(&self) {
        println!("--- {} ---", self.readme_file.display());
        for line in self.compose_readme() {
            println!("{line}");
        }
    }
}

fn display_type(record: &VariableRecord) -> &str {
    record.type_override.as_deref().unwrap_or(&record.type_raw)
}

/// Width of `  <name> = <<type>>` in characters, pre-uppercase.
fn rendered_width(record: &VariableRecord) -> usize {
    format!("  {} = <{}>", record.name, display_type(record)).chars().count()
}

/// Strips one layer of surrounding single or double quotes.
fn unquote(text: &str) -> &str {
    let starts = text.starts_with('"') || text.starts_with('\'');
    let ends = text.ends_with('"') || text.ends_with('\'');
    if starts && ends && text.len() >= 2 {
        &text[1..text.len() - 1]
    } else {
        text
    }
}
