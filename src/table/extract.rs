use std::fmt;

use thiserror::Error;

use super::row::TableSyntax;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("no markdown table header found")]
    NoHeader,
    #[error("no separator line found after the header at line {header_line}")]
    NoSeparator { header_line: usize },
    #[error("table data at line {line} appears before the separator line")]
    RowBeforeSeparator { line: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractWarning {
    WidthMismatch {
        line: usize,
        row: usize,
        expected: usize,
        actual: usize,
    },
    NoDataRows,
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthMismatch {
                line,
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {row} (line {line}) has {actual} columns, expected {expected}"
            ),
            Self::NoDataRows => write!(f, "no data rows found in table"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableExtraction {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub warnings: Vec<ExtractWarning>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingHeader,
    HeaderFound { header_line: usize },
    SeparatorFound,
}

pub fn extract_first_table<S: AsRef<str>>(
    lines: &[S],
) -> Result<TableExtraction, ExtractError> {
    let syntax = TableSyntax::new();
    let mut state = ScanState::SeekingHeader;
    let mut headers = Vec::<String>::new();
    let mut rows = Vec::<Vec<String>>::new();
    let mut warnings = Vec::<ExtractWarning>::new();

    for (index, raw_line) in lines.iter().enumerate() {
        let line_number = index + 1;
        let line = raw_line.as_ref();

        // The separator check runs before tokenization so a dash-only line
        // right after the header is never misread as a data row.
        if matches!(state, ScanState::HeaderFound { .. }) && syntax.is_separator_line(line) {
            state = ScanState::SeparatorFound;
            continue;
        }

        match syntax.tokenize_row(line) {
            Some(cells) => match state {
                ScanState::SeekingHeader => {
                    headers = cells;
                    state = ScanState::HeaderFound {
                        header_line: line_number,
                    };
                }
                ScanState::HeaderFound { .. } => {
                    return Err(ExtractError::RowBeforeSeparator { line: line_number });
                }
                ScanState::SeparatorFound => {
                    if cells.len() != headers.len() {
                        warnings.push(ExtractWarning::WidthMismatch {
                            line: line_number,
                            row: rows.len() + 1,
                            expected: headers.len(),
                            actual: cells.len(),
                        });
                    }
                    rows.push(cells);
                }
            },
            None => {
                // Only the first table is extracted; a non-row line after
                // the separator marks its end.
                if state == ScanState::SeparatorFound {
                    break;
                }
            }
        }
    }

    match state {
        ScanState::SeekingHeader => Err(ExtractError::NoHeader),
        ScanState::HeaderFound { header_line } => Err(ExtractError::NoSeparator { header_line }),
        ScanState::SeparatorFound => {
            if rows.is_empty() {
                warnings.push(ExtractWarning::NoDataRows);
            }

            Ok(TableExtraction {
                headers,
                rows,
                warnings,
            })
        }
    }
}
