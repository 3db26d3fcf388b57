use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::cli::ConvertArgs;
use crate::commands::check;
use crate::table::{CellStyle, TableExtraction, annotate_cell, extract_first_table};
use crate::util::{ensure_directory, write_json_pretty};

pub fn run(args: ConvertArgs) -> Result<()> {
    if !has_csv_extension(&args.output_path) {
        bail!(
            "output file must have .csv extension: {}",
            args.output_path.display()
        );
    }

    let content = fs::read_to_string(&args.input_path)
        .with_context(|| format!("failed to read input file: {}", args.input_path.display()))?;
    let lines = content.lines().collect::<Vec<&str>>();

    let outcome = extract_first_table(&lines);
    check::log_outcome(&args.input_path, &outcome);

    if let Some(report_path) = &args.report_path {
        let report = check::build_report(&args.input_path, &outcome)?;
        write_json_pretty(report_path, &report)?;
        info!(path = %report_path.display(), "wrote parse report");
    }

    let extraction = outcome?;
    write_csv(&args.output_path, &extraction, args.no_styling)?;

    info!(
        path = %args.output_path.display(),
        columns = extraction.headers.len(),
        rows = extraction.rows.len(),
        "wrote csv output"
    );

    Ok(())
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

fn write_csv(output_path: &Path, extraction: &TableExtraction, no_styling: bool) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_directory(parent)?;
    }

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("failed to create csv file: {}", output_path.display()))?;

    let mut bold_cells = 0usize;
    let mut italic_cells = 0usize;

    for source_row in std::iter::once(&extraction.headers).chain(extraction.rows.iter()) {
        let mut record = Vec::with_capacity(source_row.len());

        for cell in source_row {
            if no_styling {
                record.push(cell.clone());
                continue;
            }

            let (display, style) = annotate_cell(cell);
            match style {
                CellStyle::Bold => bold_cells += 1,
                CellStyle::Italic => italic_cells += 1,
                CellStyle::None => {}
            }
            record.push(display);
        }

        writer
            .write_record(&record)
            .with_context(|| format!("failed to write csv row: {}", output_path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to finalize csv file: {}", output_path.display()))?;

    if !no_styling && (bold_cells > 0 || italic_cells > 0) {
        info!(bold_cells, italic_cells, "stripped emphasis markers");
    }

    Ok(())
}
