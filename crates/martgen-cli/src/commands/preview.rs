use anyhow::Result;
use chrono::Local;
use comfy_table::Table as ComfyTable;

use martgen_core::generate::{generate_dataset, GenerationParams};
use martgen_core::output::csv::TableRecord;

use crate::args::PreviewArgs;

/// Dataset sizes for preview: small, but big enough to show the injected
/// defects alongside clean rows.
const PREVIEW_CUSTOMERS: usize = 25;
const PREVIEW_PRODUCTS: usize = 20;
const PREVIEW_TRANSACTIONS: usize = 200;

pub fn run(args: &PreviewArgs) -> Result<()> {
    let seed = 42u64; // Fixed seed for preview
    let params = GenerationParams {
        customers: PREVIEW_CUSTOMERS,
        products: PREVIEW_PRODUCTS,
        transactions: PREVIEW_TRANSACTIONS,
        ..GenerationParams::new(seed, Local::now().date_naive())
    };

    let dataset = generate_dataset(&params, None)?;

    print_table(&dataset.customers, args.rows);
    print_table(&dataset.products, args.rows);
    print_table(&dataset.dates, args.rows);
    print_table(&dataset.sales, args.rows);
    print_table(&dataset.quality, args.rows);

    Ok(())
}

fn print_table<R: TableRecord>(rows: &[R], limit: usize) {
    println!("━━━ {} ({} rows) ━━━", R::NAME, rows.len());

    let mut t = ComfyTable::new();
    t.set_header(R::header().to_vec());

    for row in rows.iter().take(limit) {
        let values: Vec<String> = row
            .to_row()
            .iter()
            .map(|v| {
                let s = v.to_string();
                if s.len() > 40 {
                    format!("{}...", &s[..37])
                } else {
                    s
                }
            })
            .collect();
        t.add_row(values);
    }

    println!("{}\n", t);
}
