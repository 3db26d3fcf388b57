use regex::Regex;

pub(crate) fn unescape_cell(text: &str) -> String {
    // Escaped pipes first, so the backslash they leave behind is never
    // consumed again by the escaped-backslash pass.
    text.replace("\\|", "|").replace("\\\\", "\\")
}

pub(crate) fn normalize_cell_content(break_tag: &Regex, text: &str) -> String {
    break_tag.replace_all(text, "\n").trim().to_string()
}
