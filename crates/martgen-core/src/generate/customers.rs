//! Customer dimension generator.
//!
//! Builds `dim_customer` rows with sequential surrogate keys and realistic
//! fake identities, then nulls the contact fields of a few randomly chosen
//! rows to simulate incomplete CRM data.

use chrono::{Duration, NaiveDate};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::Rng;

use crate::error::{MartGenError, Result};
use crate::generate::defects::sample_rows;
use crate::generate::value::Value;
use crate::output::csv::TableRecord;

const COUNTRIES: [&str; 10] = [
    "United States",
    "Canada",
    "United Kingdom",
    "Germany",
    "France",
    "Spain",
    "Italy",
    "Australia",
    "Japan",
    "Brazil",
];

const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];

const SEGMENTS: [&str; 4] = ["Consumer", "Corporate", "Small Business", "Enterprise"];

const CREDIT_LIMITS: [i64; 6] = [1000, 2000, 5000, 10_000, 20_000, 50_000];

const PAYMENT_METHODS: [&str; 3] = ["Credit Card", "Bank Transfer", "PayPal"];

/// Rows that get their Email (and, independently, Phone) nulled.
const MISSING_CONTACTS: usize = 5;

/// Join dates are sampled from the two years ending at the anchor date.
const JOIN_WINDOW_DAYS: i64 = 730;

/// A row of the customer dimension. Immutable once generated; later stages
/// reference it by `customer_id` only.
#[derive(Debug, Clone)]
pub struct Customer {
    pub customer_id: i64,
    pub name: String,
    pub country: &'static str,
    pub region: &'static str,
    pub segment: &'static str,
    pub join_date: NaiveDate,
    pub credit_limit: i64,
    pub preferred_payment: &'static str,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Generate `count` customers with IDs 1..=count.
///
/// `today` anchors the join-date window so tests can pin it for reproducible
/// output regardless of when they run.
pub fn generate_customers(
    rng: &mut impl Rng,
    count: usize,
    today: NaiveDate,
) -> Result<Vec<Customer>> {
    if count < MISSING_CONTACTS {
        return Err(MartGenError::RowCount {
            table: "dim_customer",
            requested: count,
            minimum: MISSING_CONTACTS,
        });
    }

    let mut customers = Vec::with_capacity(count);
    for id in 1..=count as i64 {
        // 50/50 between a company-style and a person-style account name.
        let name: String = if rng.random_bool(0.5) {
            CompanyName().fake_with_rng(rng)
        } else {
            Name().fake_with_rng(rng)
        };

        customers.push(Customer {
            customer_id: id,
            name,
            country: COUNTRIES[rng.random_range(0..COUNTRIES.len())],
            region: REGIONS[rng.random_range(0..REGIONS.len())],
            segment: SEGMENTS[rng.random_range(0..SEGMENTS.len())],
            join_date: today - Duration::days(rng.random_range(0..=JOIN_WINDOW_DAYS)),
            credit_limit: CREDIT_LIMITS[rng.random_range(0..CREDIT_LIMITS.len())],
            preferred_payment: PAYMENT_METHODS[rng.random_range(0..PAYMENT_METHODS.len())],
            email: Some(SafeEmail().fake_with_rng(rng)),
            phone: Some(PhoneNumber().fake_with_rng(rng)),
        });
    }

    // The two index sets are drawn independently and may overlap.
    for idx in sample_rows(rng, customers.len(), MISSING_CONTACTS) {
        customers[idx].email = None;
    }
    for idx in sample_rows(rng, customers.len(), MISSING_CONTACTS) {
        customers[idx].phone = None;
    }

    Ok(customers)
}

impl TableRecord for Customer {
    const NAME: &'static str = "dim_customer";

    fn header() -> &'static [&'static str] {
        &[
            "CustomerID",
            "CustomerName",
            "Country",
            "Region",
            "Segment",
            "JoinDate",
            "CreditLimit",
            "PreferredPayment",
            "Email",
            "Phone",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.customer_id.into(),
            self.name.clone().into(),
            self.country.into(),
            self.region.into(),
            self.segment.into(),
            self.join_date.into(),
            self.credit_limit.into(),
            self.preferred_payment.into(),
            self.email.clone().into(),
            self.phone.clone().into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_sequential_ids_no_gaps() {
        let mut rng = StdRng::seed_from_u64(1);
        let customers = generate_customers(&mut rng, 50, anchor()).unwrap();
        assert_eq!(customers.len(), 50);
        for (i, c) in customers.iter().enumerate() {
            assert_eq!(c.customer_id, i as i64 + 1);
        }
    }

    #[test]
    fn test_exactly_five_missing_emails_and_phones() {
        let mut rng = StdRng::seed_from_u64(2);
        let customers = generate_customers(&mut rng, 100, anchor()).unwrap();

        let missing_emails = customers.iter().filter(|c| c.email.is_none()).count();
        let missing_phones = customers.iter().filter(|c| c.phone.is_none()).count();
        assert_eq!(missing_emails, 5);
        assert_eq!(missing_phones, 5);
    }

    #[test]
    fn test_join_date_within_two_year_window() {
        let mut rng = StdRng::seed_from_u64(3);
        let today = anchor();
        let customers = generate_customers(&mut rng, 20, today).unwrap();

        let floor = today - Duration::days(JOIN_WINDOW_DAYS);
        for c in &customers {
            assert!(c.join_date >= floor && c.join_date <= today, "{}", c.join_date);
        }
    }

    #[test]
    fn test_enumerated_fields_come_from_lookup_tables() {
        let mut rng = StdRng::seed_from_u64(4);
        let customers = generate_customers(&mut rng, 30, anchor()).unwrap();

        for c in &customers {
            assert!(COUNTRIES.contains(&c.country));
            assert!(REGIONS.contains(&c.region));
            assert!(SEGMENTS.contains(&c.segment));
            assert!(CREDIT_LIMITS.contains(&c.credit_limit));
            assert!(PAYMENT_METHODS.contains(&c.preferred_payment));
        }
    }

    #[test]
    fn test_too_few_rows_for_defect_injection() {
        let mut rng = StdRng::seed_from_u64(5);
        let err = generate_customers(&mut rng, 4, anchor()).unwrap_err();
        assert!(matches!(
            err,
            MartGenError::RowCount {
                table: "dim_customer",
                requested: 4,
                minimum: 5,
            }
        ));
    }
}
