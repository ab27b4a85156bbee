use greedy_huffman::{create_code_table_reports, CLIParser};
use std::path::PathBuf;

const INPUT_TEXT_PATH: &str = "tests/sample.txt";

fn get_project_root_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn get_input_text_path() -> PathBuf {
    let mut root_path = get_project_root_path();
    root_path.push(INPUT_TEXT_PATH);
    root_path
}

fn find_code<'a>(report: &'a str, symbol: &str) -> Option<&'a str> {
    report
        .lines()
        .find(|line| line.split_whitespace().next() == Some(symbol))
        .and_then(|line| line.split_whitespace().last())
}

#[test]
fn test_create_code_table_for_file() {
    let input_text_path = get_input_text_path();
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec!["test", input_text_path.to_str().unwrap()]);
    let reports = create_code_table_reports(&arguments).expect("Encoding failed");
    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(find_code(report, "'a'"), Some("000"));
    assert_eq!(find_code(report, "'b'"), Some("001"));
    assert_eq!(find_code(report, "'c'"), Some("01"));
    assert_eq!(find_code(report, "'d'"), Some("1"));
    assert!(report.contains("encoded length: 19 bits"));
}

#[test]
fn test_reports_keep_input_order() {
    let input_text_path = get_input_text_path();
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        input_text_path.to_str().unwrap(),
        "--text",
        "111223",
        "--text",
        "abcdef",
        "--threads",
        "3",
    ]);
    let reports = create_code_table_reports(&arguments).expect("Encoding failed");
    assert_eq!(reports.len(), 3);
    assert!(reports[0].contains("sample.txt"));
    assert!(reports[1].starts_with("== text #1 =="));
    assert!(reports[2].starts_with("== text #2 =="));
    assert_eq!(find_code(&reports[1], "'1'"), Some("1"));
    assert_eq!(find_code(&reports[2], "'f'"), Some("11"));
}

#[test]
fn test_single_symbol_input_fails() {
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec!["test", "--text", "abc", "--text", "zzzz"]);
    let error = create_code_table_reports(&arguments).expect_err("Encoding must fail");
    assert!(error.to_string().contains("text #2"));
}

#[test]
fn test_missing_input_fails() {
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec!["test", "--symbols", "Words"]);
    assert!(create_code_table_reports(&arguments).is_err());
}
