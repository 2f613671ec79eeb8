use tfdocs::format::format_value;

#[test]
fn test_scalars_pass_through() {
    assert_eq!(format_value("string", 1), "string");
    assert_eq!(format_value("\"my default string\"", 1), "\"my default string\"");
    assert_eq!(format_value("40", 1), "40");
    assert_eq!(format_value("true", 1), "true");
    assert_eq!(format_value("  string  ", 1), "string");
    assert_eq!(format_value("\"myapp-1.1.1\"", 1), "\"myapp-1.1.1\"");
}

#[test]
fn test_empty_collections_stay_inline() {
    assert_eq!(format_value("{}", 1), "{}");
    assert_eq!(format_value("[]", 1), "[]");
    assert_eq!(format_value("object({})", 1), "object({})");
    assert_eq!(format_value("list(object({}))", 1), "list(object({}))");
}

#[test]
fn test_nested_call_at_top_level() {
    let input = "list(object({name = string,size = number,directory = string}))";
    let expected = "\
list(object({
  name = string,
  size = number,
  directory = string
}))";
    assert_eq!(format_value(input, 0), expected);
}

#[test]
fn test_nested_call_inside_block() {
    let input = "list(object({name = string,size = number,directory = string}))";
    let expected = "\
list(object({
    name = string,
    size = number,
    directory = string
  }))";
    assert_eq!(format_value(input, 1), expected);
}

#[test]
fn test_list_of_maps() {
    let input = r#"[{name = "name1",size = 10,directory = "dir1"},{name = "name2",size = 15,directory = "dir2"},{name = "name3",size = 20,directory = "dir3"}]"#;
    let expected = r#"[
    {
      name = "name1",
      size = 10,
      directory = "dir1"
    },
    {
      name = "name2",
      size = 15,
      directory = "dir2"
    },
    {
      name = "name3",
      size = 20,
      directory = "dir3"
    }
  ]"#;
    assert_eq!(format_value(input, 1), expected);
}

#[test]
fn test_single_short_map_entry_stays_inline() {
    assert_eq!(format_value("{name = \"x\"}", 1), "{ name = \"x\" }");
    assert_eq!(format_value("map(object({a = string}))", 1), "map(object({ a = string }))");
}

#[test]
fn test_single_long_map_entry_expands() {
    let input = "{description_of_something = \"a fairly long default value\"}";
    let expected = "\
{
    description_of_something = \"a fairly long default value\"
  }";
    assert_eq!(format_value(input, 1), expected);
}

#[test]
fn test_list_elements_split_outside_strings_only() {
    let expected = "\
[
  \"a,b\",
  \"c\"
]";
    assert_eq!(format_value("[\"a,b\", \"c\"]", 0), expected);
}

#[test]
fn test_single_element_list_expands() {
    let expected = "\
[
    \"123 abc:def.ghi -zyx\"
  ]";
    assert_eq!(format_value("[\"123 abc:def.ghi -zyx\"]", 1), expected);
}

#[test]
fn test_call_with_scalar_arguments() {
    assert_eq!(format_value("list(string)", 1), "list(string)");
    assert_eq!(format_value("map(string)", 1), "map(string)");
    assert_eq!(format_value("tuple(string,number)", 1), "tuple(string, number)");
}

#[test]
fn test_unknown_type_passes_through() {
    assert_eq!(format_value("unknown", 1), "unknown");
}

#[test]
fn test_formatting_is_idempotent() {
    let inputs = [
        "list(object({name = string,size = number,directory = string}))",
        r#"[{name = "name1",size = 10},{name = "name2",size = 15}]"#,
        "map(object({a = string}))",
        "{}",
        "[]",
        "\"scalar\"",
        "tuple(string,number)",
    ];
    for input in inputs {
        for level in [0, 1, 2] {
            let once = format_value(input, level);
            assert_eq!(format_value(&once, level), once, "input: {input}, level: {level}");
        }
    }
}

#[test]
fn test_deeply_nested_maps() {
    let input = "{outer = {inner = {a = 1,b = 2},other = 3}}";
    let expected = "\
{
  outer = {
    inner = {
      a = 1,
      b = 2
    },
    other = 3
  }
}";
    assert_eq!(format_value(input, 0), expected);
}
