//! Table generators and the fixed generation pipeline.
//!
//! Five routines run in strict dependency order: the three dimension tables
//! (customers, products, dates), then the sales facts referencing them, then
//! the daily quality metrics aggregated from the facts. A single seeded
//! `StdRng` is passed explicitly through every generator in that order, so
//! the whole dataset is a pure function of `GenerationParams`.

pub mod customers;
pub mod dates;
pub mod defects;
pub mod products;
pub mod quality;
pub mod sales;
pub mod value;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::error::{MartGenError, Result};
use customers::Customer;
use dates::DateRow;
use products::Product;
use quality::QualityMetric;
use sales::Sale;

pub const DEFAULT_CUSTOMERS: usize = 100;
pub const DEFAULT_PRODUCTS: usize = 80;
pub const DEFAULT_TRANSACTIONS: usize = 20_000;

/// Default first day of the date dimension, 2022-01-01.
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).expect("valid constant date")
}

/// Default last day of the date dimension, 2024-12-31.
pub fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid constant date")
}

/// Everything the pipeline needs; two identical values of this struct yield
/// byte-identical datasets.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub customers: usize,
    pub products: usize,
    pub transactions: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub seed: u64,
    /// Anchor for join-date sampling ("within the last two years"). Pinned
    /// here instead of read from the wall clock so regeneration with the
    /// same parameters reproduces the same rows.
    pub today: NaiveDate,
}

impl GenerationParams {
    pub fn new(seed: u64, today: NaiveDate) -> Self {
        Self {
            customers: DEFAULT_CUSTOMERS,
            products: DEFAULT_PRODUCTS,
            transactions: DEFAULT_TRANSACTIONS,
            start_date: default_start_date(),
            end_date: default_end_date(),
            seed,
            today,
        }
    }
}

/// The five generated tables of one run.
#[derive(Debug)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub dates: Vec<DateRow>,
    pub sales: Vec<Sale>,
    pub quality: Vec<QualityMetric>,
}

/// Run the full pipeline: dimensions, facts, metrics.
///
/// `progress` receives `(table, rows_done, rows_total)` callbacks; dimension
/// tables report once on completion, the fact generator reports in batches.
pub fn generate_dataset(
    params: &GenerationParams,
    progress: Option<&dyn Fn(&str, usize, usize)>,
) -> Result<Dataset> {
    if params.start_date > params.end_date {
        return Err(MartGenError::DateRange {
            start: params.start_date,
            end: params.end_date,
        });
    }

    debug!(seed = params.seed, "starting generation pipeline");
    let mut rng = StdRng::seed_from_u64(params.seed);

    let customers = customers::generate_customers(&mut rng, params.customers, params.today)?;
    report(progress, "dim_customer", customers.len());

    let products = products::generate_products(&mut rng, params.products)?;
    report(progress, "dim_product", products.len());

    let dates = dates::build_date_dimension(params.start_date, params.end_date);
    report(progress, "dim_date", dates.len());

    let sales = sales::generate_sales(
        &mut rng,
        &customers,
        &products,
        &dates,
        params.transactions,
        progress,
    );

    let quality =
        quality::compute_quality_metrics(&mut rng, &sales, params.start_date, params.end_date);
    report(progress, "data_quality_metrics", quality.len());

    Ok(Dataset {
        customers,
        products,
        dates,
        sales,
        quality,
    })
}

fn report(progress: Option<&dyn Fn(&str, usize, usize)>, table: &str, rows: usize) {
    if let Some(cb) = progress {
        cb(table, rows, rows);
    }
}

/// Round to two decimals, for money and weight columns.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
