use tfdocs::balance::{is_balanced, scan_balance};

#[test]
fn test_paired_delimiters() {
    assert!(is_balanced("()"));
    assert!(is_balanced("()()"));
    assert!(is_balanced("{}"));
    assert!(is_balanced("{}{}"));
    assert!(is_balanced("[]"));
    assert!(is_balanced("[][]"));
    assert!(is_balanced("<>"));
    assert!(is_balanced("<><>"));
    assert!(is_balanced("(){}[]<>"));
    assert!(is_balanced("({[]})"));
    assert!(is_balanced("({[]})()"));
    assert!(is_balanced("({[]})(){}"));
    assert!(is_balanced("({[]})(){}{}"));
}

#[test]
fn test_unclosed_openers() {
    assert!(!is_balanced("()("));
    assert!(!is_balanced("()()("));
    assert!(!is_balanced("{}{"));
    assert!(!is_balanced("{}{}{"));
    assert!(!is_balanced("[]["));
    assert!(!is_balanced("[][]["));
    assert!(!is_balanced("<><"));
    assert!(!is_balanced("<><><"));
    assert!(!is_balanced("({[]})("));
    assert!(!is_balanced("({[]})()("));
    assert!(!is_balanced("({[]})(){}{"));
}

#[test]
fn test_stray_closer_fails() {
    assert!(!is_balanced(")"));
    assert!(!is_balanced("]"));
    assert!(!is_balanced("()}"));
}

#[test]
fn test_mismatched_closer_fails() {
    assert!(!is_balanced("(]"));
    assert!(!is_balanced("([)]"));
    assert!(!is_balanced("{[}]"));
}

#[test]
fn test_empty_input() {
    assert!(is_balanced(""));
    assert!(scan_balance(std::iter::empty::<&str>()));
}

#[test]
fn test_string_literals_are_opaque() {
    assert!(is_balanced(r#"["123 abc:def.ghi -zyx"]"#));
    assert!(is_balanced(r#""[""#));
    assert!(is_balanced(r#"{"key" = "val)ue"}"#));
    assert!(is_balanced(r#""(((""#));
}

#[test]
fn test_escaped_quote_does_not_close_string() {
    // The bracket after the escaped quote is still inside the literal.
    assert!(is_balanced(r#""a\"[" "#));
    assert!(is_balanced(r#""a\\"[]"#));
}

#[test]
fn test_unterminated_string_is_unbalanced() {
    assert!(!is_balanced(r#""abc"#));
}

#[test]
fn test_sequence_form() {
    assert!(scan_balance(["()"]));
    assert!(!scan_balance(["()", "("]));
    assert!(scan_balance(["()", "()"]));
    assert!(!scan_balance(["()", "()", "("]));
    assert!(scan_balance(["{}"]));
    assert!(!scan_balance(["{}", "{"]));
    assert!(scan_balance(["{}", "{}"]));
    assert!(scan_balance(["list(object({", "name = string", "}))"]));
}
