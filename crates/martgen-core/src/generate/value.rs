use std::borrow::Cow;

use chrono::NaiveDate;

/// A generated cell value for an output column.
///
/// The `String` variant uses `Cow<'static, str>` so that values drawn from
/// static lookup tables (countries, segments, ship modes, etc.) can be held
/// as zero-cost `&'static str` borrows, while dynamically generated values
/// (names, emails, phone numbers) are stored as owned `String`s.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    String(Cow<'static, str>),
    Date(NaiveDate),
}

impl Value {
    /// Convert to a CSV-friendly string. Nulls serialize as empty fields.
    pub fn to_csv_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => s.to_string(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "{}", s),
            Value::Date(d) => write!(f, "{}", d),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(Cow::Owned(v))
    }
}

impl From<&'static str> for Value {
    fn from(v: &'static str) -> Self {
        Value::String(Cow::Borrowed(v))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_serializes_as_empty_field() {
        assert_eq!(Value::Null.to_csv_string(), "");
        assert!(Value::Null.is_null());
    }

    #[test]
    fn test_date_serializes_iso() {
        let d = NaiveDate::from_ymd_opt(2022, 3, 9).unwrap();
        assert_eq!(Value::Date(d).to_csv_string(), "2022-03-09");
    }

    #[test]
    fn test_option_conversion() {
        let some: Value = Some(42i64).into();
        let none: Value = Option::<i64>::None.into();
        assert_eq!(some, Value::Int(42));
        assert_eq!(none, Value::Null);
    }
}
