pub mod csv;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::generate::Dataset;

/// Write all five tables of a dataset to `<dir>/<table>.csv`, in pipeline
/// order. Returns the written paths.
pub fn write_dataset(dir: &Path, dataset: &Dataset) -> Result<Vec<PathBuf>> {
    Ok(vec![
        csv::write_table_file(dir, &dataset.customers)?,
        csv::write_table_file(dir, &dataset.products)?,
        csv::write_table_file(dir, &dataset.dates)?,
        csv::write_table_file(dir, &dataset.sales)?,
        csv::write_table_file(dir, &dataset.quality)?,
    ])
}
