//! CSV serialization for the generated tables.
//!
//! Plain comma-separated output with a header row and no index column.
//! Nulls become empty fields, dates serialize as `YYYY-MM-DD`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{MartGenError, Result};
use crate::generate::value::Value;

/// A fixed-schema row that knows its table name, column names, and how to
/// render itself as a row of cell values.
pub trait TableRecord {
    /// Output file stem, e.g. "dim_customer".
    const NAME: &'static str;

    fn header() -> &'static [&'static str];

    fn to_row(&self) -> Vec<Value>;
}

/// Write one table as CSV: header line, then one line per row.
pub fn write_csv_table<W: Write, R: TableRecord>(writer: &mut W, rows: &[R]) -> Result<()> {
    writeln!(
        writer,
        "{}",
        R::header()
            .iter()
            .map(|c| csv_escape(c))
            .collect::<Vec<_>>()
            .join(",")
    )
    .map_err(|e| MartGenError::Output {
        message: format!("writing CSV columns for {}", R::NAME),
        source: e,
    })?;

    for row in rows {
        let values: Vec<String> = row
            .to_row()
            .iter()
            .map(|v| csv_escape(&v.to_csv_string()))
            .collect();

        writeln!(writer, "{}", values.join(",")).map_err(|e| MartGenError::Output {
            message: format!("writing CSV row for {}", R::NAME),
            source: e,
        })?;
    }

    Ok(())
}

/// Write one table to `<dir>/<table>.csv` and return the path.
pub fn write_table_file<R: TableRecord>(dir: &Path, rows: &[R]) -> Result<PathBuf> {
    let path = dir.join(format!("{}.csv", R::NAME));
    let file = File::create(&path).map_err(|e| MartGenError::Output {
        message: format!("creating {}", path.display()),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    write_csv_table(&mut writer, rows)?;
    writer.flush().map_err(|e| MartGenError::Output {
        message: format!("flushing {}", path.display()),
        source: e,
    })?;

    Ok(path)
}

/// Escape a string for CSV: quote if it contains comma, quote, or newline.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: i64,
        label: &'static str,
        amount: Option<f64>,
    }

    impl TableRecord for Row {
        const NAME: &'static str = "test_rows";

        fn header() -> &'static [&'static str] {
            &["ID", "Label", "Amount"]
        }

        fn to_row(&self) -> Vec<Value> {
            vec![self.id.into(), self.label.into(), self.amount.into()]
        }
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("hello"), "hello");
        assert_eq!(csv_escape("hello,world"), "\"hello,world\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_write_csv_table() {
        let rows = vec![
            Row {
                id: 1,
                label: "plain",
                amount: Some(12.5),
            },
            Row {
                id: 2,
                label: "with, comma",
                amount: None,
            },
        ];

        let mut buf = Vec::new();
        write_csv_table(&mut buf, &rows).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "ID,Label,Amount\n1,plain,12.5\n2,\"with, comma\",\n");
    }

    #[test]
    fn test_write_table_file() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![Row {
            id: 7,
            label: "x",
            amount: Some(1.0),
        }];

        let path = write_table_file(dir.path(), &rows).unwrap();
        assert_eq!(path.file_name().unwrap(), "test_rows.csv");

        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("ID,Label,Amount\n"));
    }
}
