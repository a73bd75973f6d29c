//! Tests for NAME=VALUE file parsing

use rstest::rstest;

use ssm_param::domain::{parse_var_lines, VarEntry};

fn entry(name: &str, value: &str) -> VarEntry {
    VarEntry {
        name: name.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn given_plain_lines_when_parsing_then_returns_all_entries() {
    // Arrange
    let content = "DB_HOST=localhost\nDB_PORT=5432\n";

    // Act
    let entries = parse_var_lines(content);

    // Assert
    assert_eq!(
        entries,
        vec![entry("DB_HOST", "localhost"), entry("DB_PORT", "5432")]
    );
}

#[test]
fn given_spaces_around_equals_when_parsing_then_trims_them() {
    let entries = parse_var_lines("DB_PORT = 5432\n");
    assert_eq!(entries, vec![entry("DB_PORT", "5432")]);
}

#[test]
fn given_quoted_value_when_parsing_then_strips_one_pair_of_quotes() {
    let entries = parse_var_lines("DB_PORT = \"5432\"\n");
    assert_eq!(entries, vec![entry("DB_PORT", "5432")]);
}

#[test]
fn given_quoted_name_and_value_when_parsing_then_strips_both() {
    let entries = parse_var_lines("\"NAME\"=\"value with spaces\"\n");
    assert_eq!(entries, vec![entry("NAME", "value with spaces")]);
}

#[test]
fn given_value_containing_equals_when_parsing_then_splits_on_first() {
    let entries = parse_var_lines("CONN=host=db;port=5432\n");
    assert_eq!(entries, vec![entry("CONN", "host=db;port=5432")]);
}

#[rstest]
#[case::no_equals("JUST_A_NAME")]
#[case::empty_name("=value")]
#[case::empty_value("NAME=")]
#[case::empty_quoted_value("NAME=\"\"")]
#[case::whitespace_value("NAME=   ")]
#[case::blank_line("")]
fn given_malformed_line_when_parsing_then_skips_it(#[case] line: &str) {
    assert!(parse_var_lines(line).is_empty());
}

#[test]
fn given_mixed_lines_when_parsing_then_keeps_only_valid_ones() {
    // Arrange
    let content = r#"DB_HOST=localhost

not a declaration
DB_PORT = "5432"
=orphan
"#;

    // Act
    let entries = parse_var_lines(content);

    // Assert
    assert_eq!(
        entries,
        vec![entry("DB_HOST", "localhost"), entry("DB_PORT", "5432")]
    );
}
