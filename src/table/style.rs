#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    None,
    Bold,
    Italic,
}

pub fn annotate_cell(value: &str) -> (String, CellStyle) {
    let char_count = value.chars().count();

    if value.starts_with("**") && value.ends_with("**") && char_count > 4 {
        let inner = &value[2..value.len() - 2];
        return (inner.trim().to_string(), CellStyle::Bold);
    }

    let single_marker = (value.starts_with('*') && value.ends_with('*'))
        || (value.starts_with('_') && value.ends_with('_'));
    if single_marker && char_count > 2 {
        let inner = &value[1..value.len() - 1];
        return (inner.trim().to_string(), CellStyle::Italic);
    }

    (value.to_string(), CellStyle::None)
}
