use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use comfy_table::Table as ComfyTable;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use martgen_core::config::MartGenConfig;
use martgen_core::generate::{
    default_end_date, default_start_date, generate_dataset, GenerationParams, DEFAULT_CUSTOMERS,
    DEFAULT_PRODUCTS, DEFAULT_TRANSACTIONS,
};
use martgen_core::output::write_dataset;
use martgen_core::summary::summarize;

use crate::args::GenerateArgs;

pub fn run(args: &GenerateArgs) -> Result<()> {
    // Load optional martgen.toml config
    let config = martgen_core::config::read_config(Path::new("."))?;

    let params = resolve_params(args, config.as_ref());
    debug!(
        seed = params.seed,
        customers = params.customers,
        products = params.products,
        transactions = params.transactions,
        "resolved generation parameters"
    );
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create output directory {}", args.out_dir.display()))?;

    // Phase 1: Generate
    let pb = ProgressBar::new(params.transactions as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.cyan} [1/2] Generating data... {bar:40.cyan/dim} {pos}/{len} ({eta})",
            )
            .expect("static template")
            .progress_chars("█▓░"),
    );

    let dataset = generate_dataset(
        &params,
        Some(&|table, current, _total| {
            if table == "fact_sales" {
                pb.set_position(current as u64);
            }
        }),
    )?;

    let total_rows = dataset.customers.len()
        + dataset.products.len()
        + dataset.dates.len()
        + dataset.sales.len()
        + dataset.quality.len();
    pb.finish_with_message(format!("Generating data... ✓ ({} rows)", total_rows));

    // Phase 2: Write CSV files
    let pb2 = ProgressBar::new_spinner();
    pb2.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} [2/2] {msg}")
            .expect("static template"),
    );
    pb2.set_message(format!("Writing to {}...", args.out_dir.display()));
    pb2.enable_steady_tick(std::time::Duration::from_millis(100));

    let paths = write_dataset(&args.out_dir, &dataset)?;

    pb2.finish_with_message(format!("Writing to {}... ✓", args.out_dir.display()));
    eprintln!(
        "\n✓ Generated {} rows across {} tables → {} (seed {})",
        total_rows,
        paths.len(),
        args.out_dir.display(),
        params.seed,
    );

    // Defect summary over the fact table
    let summary = summarize(&dataset.sales);
    let mut t = ComfyTable::new();
    t.set_header(["Metric", "Count"]);
    t.add_row(["Total sales records", &summary.total_records.to_string()]);
    t.add_row([
        "Records with missing data",
        &summary.missing_data.to_string(),
    ]);
    t.add_row(["Invalid quantities", &summary.invalid_quantities.to_string()]);
    t.add_row(["Missing costs", &summary.missing_costs.to_string()]);
    t.add_row(["High discounts", &summary.high_discounts.to_string()]);

    println!("\nData quality summary:");
    println!("{t}");

    Ok(())
}

/// Merge CLI flags over martgen.toml over built-in defaults.
fn resolve_params(args: &GenerateArgs, config: Option<&MartGenConfig>) -> GenerationParams {
    let cfg_gen = config.map(|c| &c.generate);
    let cfg_dates = config.map(|c| &c.dates);

    let seed = args
        .seed
        .or(cfg_gen.and_then(|g| g.seed))
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock after epoch")
                .as_secs()
        });

    GenerationParams {
        customers: args
            .customers
            .or(cfg_gen.and_then(|g| g.customers))
            .unwrap_or(DEFAULT_CUSTOMERS),
        products: args
            .products
            .or(cfg_gen.and_then(|g| g.products))
            .unwrap_or(DEFAULT_PRODUCTS),
        transactions: args
            .transactions
            .or(cfg_gen.and_then(|g| g.transactions))
            .unwrap_or(DEFAULT_TRANSACTIONS),
        start_date: args
            .start_date
            .or(cfg_dates.and_then(|d| d.start))
            .unwrap_or_else(default_start_date),
        end_date: args
            .end_date
            .or(cfg_dates.and_then(|d| d.end))
            .unwrap_or_else(default_end_date),
        seed,
        today: chrono::Local::now().date_naive(),
    }
}
