//! Inspect command - extract a single bill document for debugging.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use billscan_core::batch::process_document;
use billscan_core::models::bill::BillRecord;
use billscan_core::pdf::PdfTextRenderer;
use billscan_core::table::{build_table, Batch};

use super::{format_table_csv, load_config, LayoutArg};

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Input bill document (PDF)
    #[arg(required = true)]
    input: PathBuf,

    /// Bill layout the document was issued under
    #[arg(short, long, value_enum)]
    layout: LayoutArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: InspectArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("input file not found: {}", args.input.display());
    }

    info!("inspecting {}", args.input.display());

    let renderer = PdfTextRenderer::new(&config.pdf);
    let bill = process_document(&args.input, args.layout.into(), &renderer)?;

    let missing = bill.missing_fields();
    if !missing.is_empty() {
        eprintln!(
            "{} Unmatched fields: {}",
            style("!").yellow(),
            missing.join(", ")
        );
    }

    let table = build_table(vec![Batch {
        layout: args.layout.into(),
        bills: vec![bill],
    }]);
    let record = &table[0];

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(record)?,
        OutputFormat::Csv => format_table_csv(&table)?,
        OutputFormat::Text => format_record_text(record),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_record_text(record: &BillRecord) -> String {
    fn cell<T: std::fmt::Display>(value: &Option<T>) -> String {
        value
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    let mut output = String::new();
    output.push_str(&format!("Invoice:         {}\n", cell(&record.invoice_no)));
    output.push_str(&format!("Service address: {}\n", cell(&record.service_address)));
    output.push_str(&format!("Read date:       {}\n", cell(&record.date)));
    output.push_str(&format!("Read type:       {}\n", cell(&record.read_type)));
    output.push_str(&format!("Billing days:    {}\n", cell(&record.billing_period)));
    output.push_str(&format!("Energy (kWh):    {}\n", cell(&record.energy_used)));
    output.push_str(&format!("Total charges:   {}\n", cell(&record.total_charges)));
    output
}
