//! Daily data-quality metrics over the sales facts.
//!
//! One row per calendar day of the configured range, whether or not any
//! fact landed on that day. The table is recomputed wholesale from the fact
//! table; it is never updated incrementally.

use std::collections::HashMap;

use chrono::NaiveDate;
use rand::Rng;

use crate::generate::sales::Sale;
use crate::generate::value::Value;
use crate::output::csv::TableRecord;

/// A row of the quality metrics table.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityMetric {
    pub date: NaiveDate,
    pub total_records: i64,
    pub missing_data: i64,
    pub invalid_quantities: i64,
    pub high_discounts: i64,
    /// Sampled uniformly in [0.9, 1.0]; a stand-in score, uncorrelated with
    /// the counted defects.
    pub data_quality_score: f64,
}

/// Compute one metric row per day in `start..=end`, ascending.
///
/// Facts with a null OrderDate never match any day, so they are counted in
/// no row.
pub fn compute_quality_metrics(
    rng: &mut impl Rng,
    sales: &[Sale],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<QualityMetric> {
    // Group facts by order date once instead of scanning the whole table
    // per day.
    let mut by_day: HashMap<NaiveDate, Vec<&Sale>> = HashMap::new();
    for sale in sales {
        if let Some(day) = sale.order_date {
            by_day.entry(day).or_default().push(sale);
        }
    }

    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|day| {
            let rows: &[&Sale] = by_day.get(&day).map(Vec::as_slice).unwrap_or(&[]);
            QualityMetric {
                date: day,
                total_records: rows.len() as i64,
                missing_data: rows.iter().filter(|s| s.has_missing_field()).count() as i64,
                invalid_quantities: rows.iter().filter(|s| s.has_invalid_quantity()).count()
                    as i64,
                high_discounts: rows.iter().filter(|s| s.has_high_discount()).count() as i64,
                data_quality_score: rng.random_range(0.9..=1.0),
            }
        })
        .collect()
}

impl TableRecord for QualityMetric {
    const NAME: &'static str = "data_quality_metrics";

    fn header() -> &'static [&'static str] {
        &[
            "Date",
            "TotalRecords",
            "MissingData",
            "InvalidQuantities",
            "HighDiscounts",
            "DataQualityScore",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.date.into(),
            self.total_records.into(),
            self.missing_data.into(),
            self.invalid_quantities.into(),
            self.high_discounts.into(),
            self.data_quality_score.into(),
        ]
    }
}
