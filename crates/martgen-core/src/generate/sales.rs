//! Sales fact generator.
//!
//! Produces `fact_sales` rows referencing the three dimension tables by key,
//! with deliberately injected quality issues: missing order dates, missing
//! customers, missing unit prices, and non-positive quantities on a 10%
//! "error" subset. Derived measures (SalesAmount/Cost/Profit) go null
//! together whenever a required operand is missing; the null checks are
//! explicit per operand rather than a blanket fault handler.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::generate::customers::Customer;
use crate::generate::dates::DateRow;
use crate::generate::products::Product;
use crate::generate::round2;
use crate::generate::value::Value;
use crate::output::csv::TableRecord;

/// Order IDs are sequential from here, one per row, defects or not.
pub const FIRST_ORDER_ID: i64 = 1001;

const SHIP_MODES: [&str; 3] = ["Standard", "Express", "Next Day"];

/// Share of rows flagged for an invalid quantity draw.
const ERROR_RATE: f64 = 0.10;
/// Per-field chance of a nulled OrderDate, CustomerID, or UnitPrice.
const MISSING_FIELD_RATE: f64 = 0.02;
/// Share of rows that carry a discount at all.
const DISCOUNT_RATE: f64 = 0.20;
/// Chance that a computable Cost is dropped anyway.
const MISSING_COST_RATE: f64 = 0.05;

/// Progress reporting batch size, matches terminal refresh without per-row
/// callback overhead.
const PROGRESS_BATCH_SIZE: usize = 500;

/// A row of the sales fact table. Foreign keys are not enforced; nullable
/// references are part of the simulated quality issues.
#[derive(Debug, Clone)]
pub struct Sale {
    pub sales_order_id: i64,
    pub order_date: Option<NaiveDate>,
    pub customer_id: Option<i64>,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: Option<f64>,
    pub discount_amount: f64,
    /// Always derived from the sampled order date, even when `order_date`
    /// itself was nulled afterwards. Shipments exist regardless of whether
    /// the order timestamp survived ingestion.
    pub ship_date: NaiveDate,
    pub ship_mode: &'static str,
    pub sales_person_id: i64,
    pub sales_amount: Option<f64>,
    pub cost: Option<f64>,
    pub profit: Option<f64>,
}

impl Sale {
    /// True when any nullable column of this row is null.
    pub fn has_missing_field(&self) -> bool {
        self.order_date.is_none()
            || self.customer_id.is_none()
            || self.unit_price.is_none()
            || self.sales_amount.is_none()
            || self.cost.is_none()
            || self.profit.is_none()
    }

    pub fn has_invalid_quantity(&self) -> bool {
        self.quantity <= 0
    }

    /// True when the discount exceeds half of the sales amount. A null
    /// amount never counts as a high discount.
    pub fn has_high_discount(&self) -> bool {
        self.sales_amount
            .is_some_and(|amount| self.discount_amount > amount * 0.5)
    }
}

/// Generate `count` sales facts against the given dimensions.
///
/// The sampling order per row is fixed; with a seeded generator the output
/// is fully deterministic. `progress` is invoked every
/// `PROGRESS_BATCH_SIZE` rows and once at the end.
pub fn generate_sales(
    rng: &mut impl Rng,
    customers: &[Customer],
    products: &[Product],
    dates: &[DateRow],
    count: usize,
    progress: Option<&dyn Fn(&str, usize, usize)>,
) -> Vec<Sale> {
    let mut sales = Vec::with_capacity(count);

    for n in 0..count {
        let has_error = rng.random_bool(ERROR_RATE);

        // The date is always sampled before the null substitution so the
        // ship date below can still be derived from it.
        let sampled_date = dates[rng.random_range(0..dates.len())].date;
        let order_date = if rng.random_bool(MISSING_FIELD_RATE) {
            None
        } else {
            Some(sampled_date)
        };

        let product = &products[rng.random_range(0..products.len())];

        let sampled_customer = customers[rng.random_range(0..customers.len())].customer_id;
        let customer_id = if rng.random_bool(MISSING_FIELD_RATE) {
            None
        } else {
            Some(sampled_customer)
        };

        let quantity: i64 = if has_error {
            rng.random_range(-5..=20)
        } else {
            rng.random_range(1..=10)
        };

        let unit_price = if rng.random_bool(MISSING_FIELD_RATE) {
            None
        } else {
            Some(product.unit_price)
        };

        let discount_amount = if rng.random_bool(DISCOUNT_RATE) {
            round2(rng.random_range(0.0..=product.unit_price * 0.3))
        } else {
            0.0
        };

        let ship_date = sampled_date + Duration::days(rng.random_range(1..=7));
        let ship_mode = SHIP_MODES[rng.random_range(0..SHIP_MODES.len())];
        let sales_person_id = rng.random_range(1..=10);

        // Quantity is never null in this model, so a missing unit price is
        // the only operand that knocks out all three derived measures.
        let (sales_amount, cost, profit) = match unit_price {
            Some(price) => {
                let amount = quantity as f64 * price - discount_amount;
                let cost = if rng.random_bool(MISSING_COST_RATE) {
                    None
                } else {
                    product.cost.map(|c| c * quantity as f64)
                };
                let profit = cost.map(|c| amount - c);
                (Some(amount), cost, profit)
            }
            None => (None, None, None),
        };

        sales.push(Sale {
            sales_order_id: FIRST_ORDER_ID + n as i64,
            order_date,
            customer_id,
            product_id: product.product_id,
            quantity,
            unit_price,
            discount_amount,
            ship_date,
            ship_mode,
            sales_person_id,
            sales_amount,
            cost,
            profit,
        });

        if let Some(cb) = progress {
            let done = n + 1;
            if done.is_multiple_of(PROGRESS_BATCH_SIZE) || done == count {
                cb("fact_sales", done, count);
            }
        }
    }

    sales
}

impl TableRecord for Sale {
    const NAME: &'static str = "fact_sales";

    fn header() -> &'static [&'static str] {
        &[
            "SalesOrderID",
            "OrderDate",
            "CustomerID",
            "ProductID",
            "Quantity",
            "UnitPrice",
            "DiscountAmount",
            "ShipDate",
            "ShipMode",
            "SalesPersonID",
            "SalesAmount",
            "Cost",
            "Profit",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.sales_order_id.into(),
            self.order_date.into(),
            self.customer_id.into(),
            self.product_id.into(),
            self.quantity.into(),
            self.unit_price.into(),
            self.discount_amount.into(),
            self.ship_date.into(),
            self.ship_mode.into(),
            self.sales_person_id.into(),
            self.sales_amount.into(),
            self.cost.into(),
            self.profit.into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::customers::generate_customers;
    use crate::generate::dates::build_date_dimension;
    use crate::generate::products::generate_products;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixture(rng: &mut StdRng, count: usize) -> Vec<Sale> {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let customers = generate_customers(rng, 10, today).unwrap();
        let products = generate_products(rng, 10).unwrap();
        let dates = build_date_dimension(
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        );
        generate_sales(rng, &customers, &products, &dates, count, None)
    }

    #[test]
    fn test_order_ids_contiguous_from_1001() {
        let mut rng = StdRng::seed_from_u64(20);
        let sales = fixture(&mut rng, 200);
        assert_eq!(sales.len(), 200);
        for (i, s) in sales.iter().enumerate() {
            assert_eq!(s.sales_order_id, FIRST_ORDER_ID + i as i64);
        }
    }

    #[test]
    fn test_quantity_ranges() {
        let mut rng = StdRng::seed_from_u64(21);
        let sales = fixture(&mut rng, 2000);
        for s in &sales {
            assert!((-5..=20).contains(&s.quantity), "{}", s.quantity);
        }
        // With 10% error rows, some invalid quantities should show up.
        assert!(sales.iter().any(|s| s.quantity <= 0));
        assert!(sales.iter().any(|s| (1..=10).contains(&s.quantity)));
    }

    #[test]
    fn test_ship_date_follows_sampled_order_date() {
        let mut rng = StdRng::seed_from_u64(22);
        let sales = fixture(&mut rng, 1000);
        for s in &sales {
            if let Some(order_date) = s.order_date {
                let lag = (s.ship_date - order_date).num_days();
                assert!((1..=7).contains(&lag), "lag {} days", lag);
            }
        }
        // Nulled order dates still carry a ship date.
        assert!(sales.iter().any(|s| s.order_date.is_none()));
    }

    #[test]
    fn test_derived_fields_null_together() {
        let mut rng = StdRng::seed_from_u64(23);
        let sales = fixture(&mut rng, 2000);

        for s in &sales {
            match s.unit_price {
                None => {
                    assert!(s.sales_amount.is_none());
                    assert!(s.cost.is_none());
                    assert!(s.profit.is_none());
                }
                Some(price) => {
                    let amount = s.sales_amount.expect("amount present when price is");
                    assert_eq!(amount, s.quantity as f64 * price - s.discount_amount);
                    match s.cost {
                        Some(cost) => assert_eq!(s.profit, Some(amount - cost)),
                        None => assert!(s.profit.is_none()),
                    }
                }
            }
        }
    }

    #[test]
    fn test_foreign_keys_reference_dimensions() {
        let mut rng = StdRng::seed_from_u64(24);
        let sales = fixture(&mut rng, 500);
        for s in &sales {
            assert!((1..=10).contains(&s.product_id));
            if let Some(id) = s.customer_id {
                assert!((1..=10).contains(&id));
            }
            assert!((1..=10).contains(&s.sales_person_id));
            assert!(SHIP_MODES.contains(&s.ship_mode));
        }
    }

    #[test]
    fn test_discount_mostly_zero() {
        let mut rng = StdRng::seed_from_u64(25);
        let sales = fixture(&mut rng, 2000);
        let with_discount = sales.iter().filter(|s| s.discount_amount > 0.0).count();
        // Around 20% of rows draw a discount; allow a generous band.
        assert!(with_discount > 200 && with_discount < 600, "{}", with_discount);
    }
}
