//! Canonical re-indentation of raw field values.
//! Recognizes map, list and function-call shaped literals and re-renders
//! them with a fixed two-space step per nesting level. Formatting
//! canonical text reproduces it unchanged, which is what the no-op
//! detection in the pipeline relies on.

/// Spaces added per nesting level.
const INDENT_STEP: &str = "  ";

/// Maps whose single rendered entry is shorter than this stay inline.
const INLINE_MAP_LIMIT: usize = 40;

/// Formats a raw value for splicing after `<field> = ` at the given
/// nesting level.
///
/// The first line of the result carries no indentation (the caller has
/// already opened the line); continuation lines carry absolute
/// indentation derived from `level`.
pub fn format_value(raw: &str, level: usize) -> String {
    render(raw, level)
}

fn pad(level: usize) -> String {
    INDENT_STEP.repeat(level)
}

fn render(value: &str, level: usize) -> String {
    let value = value.trim();

    if let Some(inner) = enclosed_by(value, '{', '}') {
        return render_map(inner.trim(), level);
    }
    if let Some(inner) = enclosed_by(value, '[', ']') {
        return render_list(inner.trim(), level);
    }
    if let Some((name, args)) = call_parts(value) {
        return render_call(name, args.trim(), level);
    }

    value.to_string()
}

fn render_map(inner: &str, level: usize) -> String {
    if inner.is_empty() {
        return "{}".to_string();
    }

    let entries: Vec<String> = split_top_level(inner)
        .iter()
        .map(|entry| render_entry(entry, level + 1))
        .collect();

    if entries.len() == 1
        && !entries[0].contains('\n')
        && entries[0].len() < INLINE_MAP_LIMIT
    {
        return format!("{{ {} }}", entries[0]);
    }

    let body = entries
        .iter()
        .map(|entry| format!("{}{}", pad(level + 1), entry))
        .collect::<Vec<_>>()
        .join(",\n");

    format!("{{\n{}\n{}}}", body, pad(level))
}

fn render_list(inner: &str, level: usize) -> String {
    if inner.is_empty() {
        return "[]".to_string();
    }

    let elements = split_top_level(inner)
        .iter()
        .map(|element| format!("{}{}", pad(level + 1), render(element, level + 1)))
        .collect::<Vec<_>>()
        .join(",\n");

    format!("[\n{}\n{}]", elements, pad(level))
}

fn render_call(name: &str, args: &str, level: usize) -> String {
    if args.is_empty() {
        return format!("{name}()");
    }

    // Arguments stay at the caller's level so a map or list argument
    // closes on the governed indent with `)` appended, not a fresh line.
    let rendered = split_top_level(args)
        .iter()
        .map(|arg| render(arg, level))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{name}({rendered})")
}

/// Renders one `key = value` map entry; pieces without a top-level `=`
/// are rendered as bare values.
fn render_entry(entry: &str, level: usize) -> String {
    match split_assignment(entry) {
        Some((key, value)) => format!("{} = {}", key.trim(), render(value, level)),
        None => render(entry, level),
    }
}

/// Tracks nesting depth and string-literal state while scanning a value.
#[derive(Default)]
struct DepthScanner {
    depth: i32,
    in_string: bool,
    backslashes: usize,
}

impl DepthScanner {
    fn step(&mut self, ch: char) {
        if ch == '\\' {
            self.backslashes += 1;
            return;
        }
        let escaped = self.backslashes % 2 == 1;
        self.backslashes = 0;

        if self.in_string {
            if ch == '"' && !escaped {
                self.in_string = false;
            }
            return;
        }

        match ch {
            '"' => self.in_string = true,
            '{' | '[' | '(' => self.depth += 1,
            '}' | ']' | ')' => self.depth -= 1,
            _ => {}
        }
    }

    fn at_top_level(&self) -> bool {
        self.depth == 0 && !self.in_string
    }
}

/// Splits on commas at nesting depth zero, ignoring commas inside
/// nested `{}`/`[]`/`()` and inside string literals.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut scanner = DepthScanner::default();
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if ch == ',' && scanner.at_top_level() {
            pieces.push(&text[start..idx]);
            start = idx + 1;
            continue;
        }
        scanner.step(ch);
    }
    pieces.push(&text[start..]);

    pieces.iter().map(|p| p.trim()).filter(|p| !p.is_empty()).collect()
}

/// Splits an entry on its first top-level `=` into key and value.
fn split_assignment(entry: &str) -> Option<(&str, &str)> {
    let mut scanner = DepthScanner::default();

    for (idx, ch) in entry.char_indices() {
        if ch == '=' && scanner.at_top_level() {
            return Some((&entry[..idx], &entry[idx + 1..]));
        }
        scanner.step(ch);
    }

    None
}

/// Returns the interior of `text` when it is exactly one `open`..`close`
/// literal, i.e. the opening delimiter's match is the final character.
fn enclosed_by(text: &str, open: char, close: char) -> Option<&str> {
    if text.len() < 2 || !text.starts_with(open) || !text.ends_with(close) {
        return None;
    }

    let mut scanner = DepthScanner::default();
    for (idx, ch) in text.char_indices() {
        scanner.step(ch);
        if idx > 0 && scanner.at_top_level() {
            if idx == text.len() - close.len_utf8() {
                return Some(&text[open.len_utf8()..idx]);
            }
            return None;
        }
    }

    None
}

/// Recognizes `name(...)` where `name` is an identifier and the opening
/// parenthesis closes at the final character.
fn call_parts(text: &str) -> Option<(&str, &str)> {
    let open = text.find('(')?;
    let name = &text[..open];

    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    let inner = enclosed_by(&text[open..], '(', ')')?;
    Some((name, inner))
}
