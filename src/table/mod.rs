mod cell;
mod extract;
mod row;
mod style;
#[cfg(test)]
mod tests;

pub use extract::{ExtractError, ExtractWarning, TableExtraction, extract_first_table};
pub use style::{CellStyle, annotate_cell};
