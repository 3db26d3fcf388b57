use regex::Regex;

use super::cell::{normalize_cell_content, unescape_cell};

pub(crate) struct TableSyntax {
    break_tag: Regex,
    separator_segment: Regex,
}

impl TableSyntax {
    pub(crate) fn new() -> Self {
        let break_tag = Regex::new(r"(?i)<br\s*/?>").expect("valid break tag regex");
        let separator_segment =
            Regex::new(r"^[:\s-]*-+[:\s-]*$").expect("valid separator segment regex");

        Self {
            break_tag,
            separator_segment,
        }
    }

    #[cfg(test)]
    pub(crate) fn break_tag(&self) -> &Regex {
        &self.break_tag
    }

    pub(crate) fn tokenize_row(&self, line: &str) -> Option<Vec<String>> {
        let inner = pipe_delimited_inner(line)?;

        let cells = split_unescaped_pipes(inner)
            .into_iter()
            .map(|segment| normalize_cell_content(&self.break_tag, &unescape_cell(segment.trim())))
            .collect::<Vec<String>>();

        Some(cells)
    }

    pub(crate) fn is_separator_line(&self, line: &str) -> bool {
        let Some(inner) = pipe_delimited_inner(line) else {
            return false;
        };

        let segments = split_unescaped_pipes(inner);
        if segments.is_empty() {
            return false;
        }

        segments.iter().all(|segment| {
            let trimmed = segment.trim();
            // A blank segment between adjacent pipes counts as a plain dash.
            let candidate = if trimmed.is_empty() { "-" } else { trimmed };
            self.separator_segment.is_match(candidate)
        })
    }
}

fn pipe_delimited_inner(line: &str) -> Option<&str> {
    let line = line.trim();
    if !line.starts_with('|') || !line.ends_with('|') {
        return None;
    }

    if line.len() > 1 {
        Some(&line[1..line.len() - 1])
    } else {
        Some("")
    }
}

fn split_unescaped_pipes(inner: &str) -> Vec<&str> {
    let bytes = inner.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0usize;

    for (index, &byte) in bytes.iter().enumerate() {
        if byte == b'|' && (index == 0 || bytes[index - 1] != b'\\') {
            segments.push(&inner[start..index]);
            start = index + 1;
        }
    }

    segments.push(&inner[start..]);
    segments
}
