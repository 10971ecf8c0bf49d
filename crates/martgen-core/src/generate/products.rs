//! Product dimension generator.
//!
//! Builds `dim_product` rows with a category/subcategory hierarchy and
//! margin-consistent pricing (cost is always derived from the unit price at a
//! 40-70% factor), then injects a few invalid prices and missing costs.

use fake::faker::company::en::CatchPhrase;
use fake::Fake;
use rand::Rng;

use crate::error::{MartGenError, Result};
use crate::generate::defects::sample_rows;
use crate::generate::round2;
use crate::generate::value::Value;
use crate::output::csv::TableRecord;

const CATEGORIES: [&str; 5] = [
    "Electronics",
    "Furniture",
    "Office Supplies",
    "Software",
    "Hardware",
];

/// Subcategories for each category, keyed by position in `CATEGORIES`.
fn subcategories(category: &'static str) -> &'static [&'static str; 5] {
    match category {
        "Electronics" => &["Phones", "Laptops", "Tablets", "Monitors", "Accessories"],
        "Furniture" => &["Chairs", "Desks", "Tables", "Storage", "Furnishings"],
        "Office Supplies" => &["Paper", "Binders", "Art", "Supplies", "Labels"],
        "Software" => &["Operating Systems", "Security", "Utilities", "Business", "Design"],
        "Hardware" => &["Processors", "Memory", "Storage", "Peripherals", "Networking"],
        other => unreachable!("unknown category {other}"),
    }
}

/// Rows that get UnitPrice forced to zero.
const INVALID_PRICES: usize = 3;
/// Rows that get Cost nulled (independent draw, may overlap).
const MISSING_COSTS: usize = 3;

/// A row of the product dimension.
///
/// Under normal conditions `0 < cost < unit_price`; the injected defect rows
/// deliberately violate that.
#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub category: &'static str,
    pub subcategory: &'static str,
    pub unit_price: f64,
    pub cost: Option<f64>,
    pub weight: f64,
    pub stock_level: i64,
    pub reorder_point: i64,
    pub minimum_order_quantity: i64,
}

/// Generate `count` products with IDs 1..=count.
pub fn generate_products(rng: &mut impl Rng, count: usize) -> Result<Vec<Product>> {
    if count < INVALID_PRICES.max(MISSING_COSTS) {
        return Err(MartGenError::RowCount {
            table: "dim_product",
            requested: count,
            minimum: INVALID_PRICES.max(MISSING_COSTS),
        });
    }

    let mut products = Vec::with_capacity(count);
    for id in 1..=count as i64 {
        let category = CATEGORIES[rng.random_range(0..CATEGORIES.len())];
        let subs = subcategories(category);
        let unit_price = round2(rng.random_range(10.0..=2000.0));

        products.push(Product {
            product_id: id,
            name: CatchPhrase().fake_with_rng(rng),
            category,
            subcategory: subs[rng.random_range(0..subs.len())],
            unit_price,
            // Cost is derived from the price after it is drawn, so the
            // cost < price invariant holds for every non-defect row.
            cost: Some(round2(unit_price * rng.random_range(0.4..=0.7))),
            weight: round2(rng.random_range(0.1..=50.0)),
            stock_level: rng.random_range(0..=500),
            reorder_point: rng.random_range(10..=100),
            minimum_order_quantity: rng.random_range(1..=10),
        });
    }

    // Invalid-price and missing-cost rows are drawn independently and may
    // overlap. A zero-price row keeps its original cost, which breaks the
    // cost < price invariant for that row as well.
    for idx in sample_rows(rng, products.len(), INVALID_PRICES) {
        products[idx].unit_price = 0.0;
    }
    for idx in sample_rows(rng, products.len(), MISSING_COSTS) {
        products[idx].cost = None;
    }

    Ok(products)
}

impl TableRecord for Product {
    const NAME: &'static str = "dim_product";

    fn header() -> &'static [&'static str] {
        &[
            "ProductID",
            "ProductName",
            "Category",
            "SubCategory",
            "UnitPrice",
            "Cost",
            "Weight",
            "StockLevel",
            "ReorderPoint",
            "MinimumOrderQuantity",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.product_id.into(),
            self.name.clone().into(),
            self.category.into(),
            self.subcategory.into(),
            self.unit_price.into(),
            self.cost.into(),
            self.weight.into(),
            self.stock_level.into(),
            self.reorder_point.into(),
            self.minimum_order_quantity.into(),
        ]
    }
}
