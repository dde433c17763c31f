//! Merge command - reconcile old- and new-layout directories into one table.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;

use billscan_core::pdf::PdfTextRenderer;
use billscan_core::table::{build_table, Batch};
use billscan_core::LayoutFormat;

use super::{collect_with_progress, load_config, print_batch_summary, write_table};

/// Arguments for the merge command.
#[derive(Args)]
pub struct MergeArgs {
    /// Directory with old-layout bills
    #[arg(long)]
    old: PathBuf,

    /// Directory with new-layout bills
    #[arg(long)]
    new: PathBuf,

    /// Output CSV file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: MergeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    for dir in [&args.old, &args.new] {
        if !dir.is_dir() {
            anyhow::bail!("input directory not found: {}", dir.display());
        }
    }

    let renderer = PdfTextRenderer::new(&config.pdf);

    let old_report =
        collect_with_progress(&args.old, LayoutFormat::Old, &renderer, &config)?;
    print_batch_summary(&old_report);

    let new_report =
        collect_with_progress(&args.new, LayoutFormat::New, &renderer, &config)?;
    print_batch_summary(&new_report);

    // Old-format records precede new-format records in the unified table
    let table = build_table(vec![
        Batch {
            layout: LayoutFormat::Old,
            bills: old_report.bills,
        },
        Batch {
            layout: LayoutFormat::New,
            bills: new_report.bills,
        },
    ]);

    write_table(&table, args.output.as_deref())?;

    println!(
        "{} Merged {} rows in {:?}",
        style("✓").green(),
        table.len(),
        start.elapsed()
    );

    Ok(())
}
