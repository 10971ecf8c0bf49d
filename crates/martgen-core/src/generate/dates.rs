//! Calendar dimension generator.
//!
//! Every field is a pure function of the date; there is no randomness here.
//! The fiscal year rolls in July (month >= 7 belongs to the next fiscal
//! year). FiscalQuarter intentionally keeps the calendar quarter formula and
//! is not shifted to the fiscal year start; downstream reports expect the
//! two quarter columns to match.

use chrono::{Datelike, NaiveDate};

use crate::generate::value::Value;
use crate::output::csv::TableRecord;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// First month of the next fiscal year.
const FISCAL_YEAR_START_MONTH: u32 = 7;

/// A row of the date dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRow {
    /// Sortable integer key, `YYYY*10000 + MM*100 + DD`.
    pub date_key: i64,
    pub date: NaiveDate,
    pub year: i32,
    pub quarter: u32,
    pub month: u32,
    pub month_name: &'static str,
    /// ISO weekday number, Monday=1 .. Sunday=7.
    pub week_day: u32,
    pub week_day_name: &'static str,
    pub is_weekend: bool,
    /// Placeholder, never derived from a holiday calendar.
    pub is_holiday: bool,
    pub fiscal_year: i32,
    pub fiscal_quarter: u32,
}

/// Compute the `YYYYMMDD` integer key for a date.
pub fn date_key(date: NaiveDate) -> i64 {
    date.year() as i64 * 10_000 + date.month() as i64 * 100 + date.day() as i64
}

fn date_row(date: NaiveDate) -> DateRow {
    let weekday = date.weekday().number_from_monday();
    let quarter = (date.month() - 1) / 3 + 1;
    let fiscal_year = if date.month() >= FISCAL_YEAR_START_MONTH {
        date.year() + 1
    } else {
        date.year()
    };

    DateRow {
        date_key: date_key(date),
        date,
        year: date.year(),
        quarter,
        month: date.month(),
        month_name: MONTH_NAMES[date.month0() as usize],
        week_day: weekday,
        week_day_name: WEEKDAY_NAMES[(weekday - 1) as usize],
        is_weekend: weekday >= 6,
        is_holiday: false,
        fiscal_year,
        fiscal_quarter: quarter,
    }
}

/// Build the date dimension, one row per calendar day in `start..=end`,
/// ascending. An empty range (start after end) yields no rows; the pipeline
/// rejects that earlier with a `DateRange` error.
pub fn build_date_dimension(start: NaiveDate, end: NaiveDate) -> Vec<DateRow> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(date_row)
        .collect()
}

impl TableRecord for DateRow {
    const NAME: &'static str = "dim_date";

    fn header() -> &'static [&'static str] {
        &[
            "DateKey",
            "Date",
            "Year",
            "Quarter",
            "Month",
            "MonthName",
            "WeekDay",
            "WeekDayName",
            "IsWeekend",
            "IsHoliday",
            "FiscalYear",
            "FiscalQuarter",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.date_key.into(),
            self.date.into(),
            (self.year as i64).into(),
            (self.quarter as i64).into(),
            (self.month as i64).into(),
            self.month_name.into(),
            (self.week_day as i64).into(),
            self.week_day_name.into(),
            (self.is_weekend as i64).into(),
            (self.is_holiday as i64).into(),
            (self.fiscal_year as i64).into(),
            (self.fiscal_quarter as i64).into(),
        ]
    }
}
