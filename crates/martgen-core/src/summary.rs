//! Whole-run defect summary over the sales fact table, printed by the CLI
//! after generation.

use crate::generate::sales::Sale;

/// Counts of injected quality issues across the whole fact table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefectSummary {
    pub total_records: usize,
    /// Rows with at least one null column.
    pub missing_data: usize,
    /// Rows with quantity <= 0.
    pub invalid_quantities: usize,
    /// Rows with a null Cost.
    pub missing_costs: usize,
    /// Rows where the discount exceeds half the sales amount.
    pub high_discounts: usize,
}

pub fn summarize(sales: &[Sale]) -> DefectSummary {
    DefectSummary {
        total_records: sales.len(),
        missing_data: sales.iter().filter(|s| s.has_missing_field()).count(),
        invalid_quantities: sales.iter().filter(|s| s.has_invalid_quantity()).count(),
        missing_costs: sales.iter().filter(|s| s.cost.is_none()).count(),
        high_discounts: sales.iter().filter(|s| s.has_high_discount()).count(),
    }
}
