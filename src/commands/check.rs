use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};

use crate::cli::CheckArgs;
use crate::model::{ParseReport, TableCounts};
use crate::table::{ExtractError, ExtractWarning, TableExtraction, extract_first_table};
use crate::util::{now_utc_string, sha256_file, utc_compact_string, write_json_pretty};

pub fn run(args: CheckArgs) -> Result<()> {
    let content = fs::read_to_string(&args.input_path)
        .with_context(|| format!("failed to read input file: {}", args.input_path.display()))?;
    let lines = content.lines().collect::<Vec<&str>>();

    let outcome = extract_first_table(&lines);
    log_outcome(&args.input_path, &outcome);

    let report = build_report(&args.input_path, &outcome)?;

    if args.dry_run {
        info!(status = %report.status, "check dry-run complete");
    } else {
        let report_path = args
            .report_path
            .unwrap_or_else(|| default_report_path(&args.input_path));
        write_json_pretty(&report_path, &report)?;
        info!(path = %report_path.display(), "wrote parse report");
    }

    outcome?;
    Ok(())
}

pub fn build_report(
    input_path: &Path,
    outcome: &Result<TableExtraction, ExtractError>,
) -> Result<ParseReport> {
    let input_sha256 = sha256_file(input_path)?;

    let report = match outcome {
        Ok(extraction) => ParseReport {
            manifest_version: 1,
            generated_at: now_utc_string(),
            input_path: input_path.display().to_string(),
            input_sha256,
            status: "ok".to_string(),
            headers: extraction.headers.clone(),
            counts: TableCounts {
                column_count: extraction.headers.len(),
                data_row_count: extraction.rows.len(),
                width_mismatch_count: extraction
                    .warnings
                    .iter()
                    .filter(|warning| matches!(warning, ExtractWarning::WidthMismatch { .. }))
                    .count(),
            },
            warnings: extraction
                .warnings
                .iter()
                .map(ToString::to_string)
                .collect(),
            failure: None,
        },
        Err(err) => ParseReport {
            manifest_version: 1,
            generated_at: now_utc_string(),
            input_path: input_path.display().to_string(),
            input_sha256,
            status: "failed".to_string(),
            headers: Vec::new(),
            counts: TableCounts {
                column_count: 0,
                data_row_count: 0,
                width_mismatch_count: 0,
            },
            warnings: Vec::new(),
            failure: Some(err.to_string()),
        },
    };

    Ok(report)
}

pub fn log_outcome(input_path: &Path, outcome: &Result<TableExtraction, ExtractError>) {
    match outcome {
        Ok(extraction) => {
            for warning in &extraction.warnings {
                warn!(input = %input_path.display(), warning = %warning, "table warning");
            }

            info!(
                input = %input_path.display(),
                columns = extraction.headers.len(),
                rows = extraction.rows.len(),
                "extracted first markdown table"
            );
        }
        Err(err) => {
            warn!(input = %input_path.display(), error = %err, "no usable markdown table");
        }
    }
}

fn default_report_path(input_path: &Path) -> PathBuf {
    let file_name = format!("mdtable_report_{}.json", utc_compact_string(Utc::now()));

    match input_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}
