use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TableCounts {
    pub column_count: usize,
    pub data_row_count: usize,
    pub width_mismatch_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    pub manifest_version: u32,
    pub generated_at: String,
    pub input_path: String,
    pub input_sha256: String,
    pub status: String,
    pub headers: Vec<String>,
    pub counts: TableCounts,
    pub warnings: Vec<String>,
    pub failure: Option<String>,
}
