use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "mdtable",
    version,
    about = "Extract the first Markdown table in a file and export it as spreadsheet-ready CSV"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Convert(ConvertArgs),
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[arg(short = 'i', long = "inputfile", value_name = "MARKDOWN_FILE")]
    pub input_path: PathBuf,

    #[arg(short = 'o', long = "outputfile", value_name = "CSV_FILE")]
    pub output_path: PathBuf,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub no_styling: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[arg(short = 'i', long = "inputfile", value_name = "MARKDOWN_FILE")]
    pub input_path: PathBuf,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
