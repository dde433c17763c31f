//! CLI subcommands and shared helpers.

pub mod inspect;
pub mod merge;
pub mod scan;

use std::path::Path;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use billscan_core::batch::{document_files, process_document, BatchReport, FileOutcome};
use billscan_core::models::bill::BillRecord;
use billscan_core::models::config::BillscanConfig;
use billscan_core::pdf::DocumentRenderer;
use billscan_core::LayoutFormat;

/// Bill layout selector shared by the subcommands.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LayoutArg {
    /// Historical bill layout
    Old,
    /// Current bill layout
    New,
}

impl From<LayoutArg> for LayoutFormat {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Old => LayoutFormat::Old,
            LayoutArg::New => LayoutFormat::New,
        }
    }
}

/// Load the pipeline configuration, falling back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<BillscanConfig> {
    match config_path {
        Some(path) => Ok(BillscanConfig::from_file(Path::new(path))?),
        None => Ok(BillscanConfig::default()),
    }
}

/// Collect one directory with a per-file progress bar.
pub fn collect_with_progress(
    dir: &Path,
    layout: LayoutFormat,
    renderer: &dyn DocumentRenderer,
    config: &BillscanConfig,
) -> anyhow::Result<BatchReport> {
    let (files, skipped) = document_files(dir, &config.batch)?;

    println!(
        "{} Found {} documents in {}",
        style("ℹ").blue(),
        files.len(),
        dir.display()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut report = BatchReport {
        bills: Vec::with_capacity(files.len()),
        outcomes: skipped,
    };

    for path in files {
        match process_document(&path, layout, renderer) {
            Ok(bill) => {
                report.bills.push(bill);
                report.outcomes.push(FileOutcome::Processed(path));
            }
            Err(e) if config.batch.skip_render_errors => {
                warn!("failed to render {}: {}", path.display(), e);
                report.outcomes.push(FileOutcome::RenderFailed { path, error: e });
            }
            Err(e) => anyhow::bail!("failed to render {}: {}", path.display(), e),
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete");
    Ok(report)
}

/// Print the per-directory summary and any failed files.
pub fn print_batch_summary(report: &BatchReport) {
    println!(
        "   {} extracted, {} failed",
        style(report.processed()).green(),
        style(report.render_failures()).red()
    );

    let failed: Vec<_> = report
        .outcomes
        .iter()
        .filter_map(|o| match o {
            FileOutcome::RenderFailed { path, error } => Some((path, error)),
            _ => None,
        })
        .collect();

    if !failed.is_empty() {
        println!("{}", style("Failed files:").red());
        for (path, error) in failed {
            println!("  - {}: {}", path.display(), error);
        }
    }
}

/// Format the typed table as CSV: header row, no index column.
pub fn format_table_csv(records: &[BillRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "invoice_no",
        "service_address",
        "date",
        "read_type",
        "billing_period",
        "energy_used",
        "total_charges",
        "month",
        "year",
    ])?;

    for record in records {
        wtr.write_record([
            record.invoice_no.clone().unwrap_or_default(),
            record.service_address.clone().unwrap_or_default(),
            record.date.map(|d| d.to_string()).unwrap_or_default(),
            record.read_type.map(|t| t.to_string()).unwrap_or_default(),
            record.billing_period.map(|n| n.to_string()).unwrap_or_default(),
            record.energy_used.map(|d| d.to_string()).unwrap_or_default(),
            record.total_charges.map(|d| d.to_string()).unwrap_or_default(),
            record.month.map(|m| m.to_string()).unwrap_or_default(),
            record.year.map(|y| y.to_string()).unwrap_or_default(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// Write the table to a file or stdout.
pub fn write_table(records: &[BillRecord], output: Option<&Path>) -> anyhow::Result<()> {
    let csv = format_table_csv(records)?;

    match output {
        Some(path) => {
            std::fs::write(path, csv)?;
            println!(
                "{} Table written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => print!("{}", csv),
    }

    Ok(())
}
