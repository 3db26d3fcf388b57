use super::*;

use super::cell::{normalize_cell_content, unescape_cell};
use super::row::TableSyntax;

fn tokenize(line: &str) -> Option<Vec<String>> {
    TableSyntax::new().tokenize_row(line)
}

fn is_separator(line: &str) -> bool {
    TableSyntax::new().is_separator_line(line)
}

#[test]
fn unescape_cell_resolves_pipes_before_backslashes() {
    assert_eq!(unescape_cell(r"a\|b"), "a|b");
    assert_eq!(unescape_cell(r"a\\b"), r"a\b");
    assert_eq!(unescape_cell(""), "");
    assert_eq!(unescape_cell("plain"), "plain");
}

#[test]
fn normalize_cell_content_replaces_break_tag_variants() {
    let syntax = TableSyntax::new();
    let cells = syntax
        .tokenize_row("| a<br>b | c<BR/>d | e<br />f | f<br >g |")
        .unwrap();
    assert_eq!(cells, vec!["a\nb", "c\nd", "e\nf", "f\ng"]);
}

#[test]
fn normalize_cell_content_trims_ends_but_keeps_interior_newlines() {
    let syntax = TableSyntax::new();
    assert_eq!(normalize_cell_content(syntax.break_tag(), "  x<br>y  "), "x\ny");
    assert_eq!(normalize_cell_content(syntax.break_tag(), "x<br>"), "x");
}

#[test]
fn plain_text_survives_unescape_and_normalize_untouched() {
    let syntax = TableSyntax::new();
    for text in ["hello", "a b c", "1.2-3", "colon: value"] {
        assert_eq!(
            normalize_cell_content(syntax.break_tag(), &unescape_cell(text)),
            text
        );
    }
}

#[test]
fn tokenize_row_splits_on_unescaped_pipes_only() {
    assert_eq!(
        tokenize(r"| a | b\|c | d |").unwrap(),
        vec!["a", "b|c", "d"]
    );
}

#[test]
fn tokenize_row_yields_single_empty_cell_for_bare_pipes() {
    assert_eq!(tokenize("||").unwrap(), vec![""]);
    assert_eq!(tokenize("|").unwrap(), vec![""]);
}

#[test]
fn tokenize_row_keeps_empty_cells_between_adjacent_pipes() {
    assert_eq!(tokenize("| a || b |").unwrap(), vec!["a", "", "b"]);
}

#[test]
fn tokenize_row_rejects_lines_without_both_outer_pipes() {
    assert!(tokenize("plain prose").is_none());
    assert!(tokenize("| missing end").is_none());
    assert!(tokenize("missing start |").is_none());
    assert!(tokenize("").is_none());
}

#[test]
fn tokenize_row_trims_surrounding_whitespace_first() {
    assert_eq!(tokenize("   | a | b |   ").unwrap(), vec!["a", "b"]);
}

#[test]
fn separator_accepts_alignment_markers() {
    assert!(is_separator("|---|:---:|---:|"));
    assert!(is_separator("| --- | :-: |"));
    assert!(is_separator("|-|"));
}

#[test]
fn separator_tolerates_blank_segments() {
    assert!(is_separator("|  |---|"));
}

#[test]
fn separator_rejects_data_rows_and_non_rows() {
    assert!(!is_separator("| a | b |"));
    assert!(!is_separator("---"));
    assert!(!is_separator("| --- | x |"));
}

#[test]
fn extract_finds_header_separator_and_data_rows() {
    let lines = vec!["| H1 | H2 |", "|---|---|", "| a | b |", "| c | d |"];

    let extraction = extract_first_table(&lines).unwrap();
    assert_eq!(extraction.headers, vec!["H1", "H2"]);
    assert_eq!(
        extraction.rows,
        vec![vec!["a", "b"], vec!["c", "d"]]
    );
    assert!(extraction.warnings.is_empty());
}

#[test]
fn extract_skips_prose_before_the_header() {
    let lines = vec![
        "# Heading",
        "",
        "Some prose.",
        "| H1 | H2 |",
        "|---|---|",
        "| a | b |",
    ];

    let extraction = extract_first_table(&lines).unwrap();
    assert_eq!(extraction.headers, vec!["H1", "H2"]);
    assert_eq!(extraction.rows, vec![vec!["a", "b"]]);
}

#[test]
fn extract_skips_non_row_lines_between_header_and_separator() {
    let lines = vec!["| H1 | H2 |", "", "note in the gap", "|---|---|", "| a | b |"];

    let extraction = extract_first_table(&lines).unwrap();
    assert_eq!(extraction.rows, vec![vec!["a", "b"]]);
}

#[test]
fn extract_fails_when_data_appears_before_separator() {
    let lines = vec!["| H1 | H2 |", "| a | b |", "|---|---|"];

    let err = extract_first_table(&lines).unwrap_err();
    assert_eq!(err, ExtractError::RowBeforeSeparator { line: 2 });
}

#[test]
fn extract_fails_without_any_header() {
    let lines = vec!["no tables here", "just prose"];

    let err = extract_first_table(&lines).unwrap_err();
    assert_eq!(err, ExtractError::NoHeader);
}

#[test]
fn extract_fails_when_separator_never_arrives() {
    let lines = vec!["| H1 | H2 |", "trailing prose"];

    let err = extract_first_table(&lines).unwrap_err();
    assert_eq!(err, ExtractError::NoSeparator { header_line: 1 });
}

#[test]
fn extract_warns_on_header_only_table() {
    let lines = vec!["| H1 | H2 |", "|---|---|"];

    let extraction = extract_first_table(&lines).unwrap();
    assert!(extraction.rows.is_empty());
    assert_eq!(extraction.warnings, vec![ExtractWarning::NoDataRows]);
}

#[test]
fn extract_warns_on_width_mismatch_but_keeps_the_row() {
    let lines = vec!["| H1 |", "|---|", "| a | b |"];

    let extraction = extract_first_table(&lines).unwrap();
    assert_eq!(extraction.rows, vec![vec!["a", "b"]]);
    assert_eq!(
        extraction.warnings,
        vec![ExtractWarning::WidthMismatch {
            line: 3,
            row: 1,
            expected: 1,
            actual: 2,
        }]
    );
}

#[test]
fn extract_stops_at_the_end_of_the_first_table() {
    let lines = vec![
        "| H1 | H2 |",
        "|---|---|",
        "| a | b |",
        "",
        "| X1 | X2 |",
        "|---|---|",
        "| y | z |",
    ];

    let extraction = extract_first_table(&lines).unwrap();
    assert_eq!(extraction.headers, vec!["H1", "H2"]);
    assert_eq!(extraction.rows, vec![vec!["a", "b"]]);
}

#[test]
fn extract_is_a_pure_function_of_its_input() {
    let lines = vec!["| H1 |", "|---|", "| a | b |", "done"];

    let first = extract_first_table(&lines).unwrap();
    let second = extract_first_table(&lines).unwrap();
    assert_eq!(first, second);
}

#[test]
fn annotate_cell_detects_bold_and_italic_markers() {
    assert_eq!(annotate_cell("**bold**"), ("bold".to_string(), CellStyle::Bold));
    assert_eq!(annotate_cell("*it*"), ("it".to_string(), CellStyle::Italic));
    assert_eq!(annotate_cell("_it_"), ("it".to_string(), CellStyle::Italic));
    assert_eq!(annotate_cell("plain"), ("plain".to_string(), CellStyle::None));
}

#[test]
fn annotate_cell_trims_inside_the_markers() {
    assert_eq!(
        annotate_cell("** padded **"),
        ("padded".to_string(), CellStyle::Bold)
    );
}

#[test]
fn annotate_cell_uses_character_count_thresholds() {
    assert_eq!(annotate_cell("****"), ("**".to_string(), CellStyle::Italic));
    assert_eq!(annotate_cell("***"), ("*".to_string(), CellStyle::Italic));
    assert_eq!(annotate_cell("**"), ("**".to_string(), CellStyle::None));
    assert_eq!(annotate_cell("**é**"), ("é".to_string(), CellStyle::Bold));
}

#[test]
fn annotate_cell_ignores_mid_string_markers() {
    assert_eq!(
        annotate_cell("a **b** c"),
        ("a **b** c".to_string(), CellStyle::None)
    );
}
