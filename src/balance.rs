//! Bracket balance scanning for multi-line field values.
//! Decides when an accumulated value has closed all of its delimiters,
//! treating double-quoted string literals as opaque.

/// Reports whether every opening delimiter in `text` has been closed.
///
/// # Arguments
/// * `text` - Text to scan
///
/// # Returns
/// * `bool` - `true` when all of `()`, `{}`, `[]` and `<>` are balanced
///
/// # Notes
/// - Delimiters inside double-quoted string literals are ignored
/// - A closer that does not match the most recent opener (including a
///   closer with nothing open) makes the text unbalanced immediately
pub fn is_balanced(text: &str) -> bool {
    scan_balance(std::iter::once(text))
}

/// Scans an ordered sequence of parts as if they were concatenated.
///
/// Callers probing a multi-line value line by line pass the accumulated
/// lines without joining them first.
pub fn scan_balance<'a, I>(parts: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let mut stack: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut backslashes = 0usize;

    for part in parts {
        for ch in part.chars() {
            if ch == '\\' {
                backslashes += 1;
                continue;
            }
            let escaped = backslashes % 2 == 1;
            backslashes = 0;

            if in_string {
                if ch == '"' && !escaped {
                    in_string = false;
                }
                continue;
            }

            match ch {
                '"' => in_string = true,
                '(' | '{' | '[' | '<' => stack.push(ch),
                ')' | '}' | ']' | '>' => {
                    if stack.pop() != Some(opener_of(ch)) {
                        return false;
                    }
                }
                _ => {}
            }
        }
    }

    stack.is_empty() && !in_string
}

fn opener_of(closer: char) -> char {
    match closer {
        ')' => '(',
        '}' => '{',
        ']' => '[',
        _ => '<',
    }
}
