//! Scan command - extract one directory of bills under one layout.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::debug;

use billscan_core::pdf::PdfTextRenderer;
use billscan_core::table::{build_table, Batch};

use super::{collect_with_progress, load_config, print_batch_summary, write_table, LayoutArg};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Directory containing bill documents
    #[arg(required = true)]
    dir: PathBuf,

    /// Bill layout the documents were issued under
    #[arg(short, long, value_enum)]
    layout: LayoutArg,

    /// Output CSV file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.dir.is_dir() {
        anyhow::bail!("input directory not found: {}", args.dir.display());
    }

    let renderer = PdfTextRenderer::new(&config.pdf);
    let report = collect_with_progress(&args.dir, args.layout.into(), &renderer, &config)?;

    let table = build_table(vec![Batch {
        layout: args.layout.into(),
        bills: report.bills.clone(),
    }]);

    write_table(&table, args.output.as_deref())?;

    println!(
        "{} Processed {} in {:?}",
        style("✓").green(),
        args.dir.display(),
        start.elapsed()
    );
    print_batch_summary(&report);

    debug!("table has {} rows", table.len());

    Ok(())
}
