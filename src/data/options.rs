use std::collections::HashSet;

use super::model::{CategoryField, Company};

// ---------------------------------------------------------------------------
// Option lists for the categorical filter panels
// ---------------------------------------------------------------------------

/// A choice in a filter panel together with the number of companies in the
/// full dataset that carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionCount {
    pub value: String,
    pub count: usize,
}

/// Distinct values of `field`, in the order they first appear.
pub fn distinct_values(companies: &[Company], field: CategoryField) -> Vec<String> {
    let mut seen = HashSet::new();
    companies
        .iter()
        .map(|c| c.category(field))
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Distinct values of `field` with their match counts against the full
/// dataset. Other active filters do not influence the counts.
pub fn option_counts(companies: &[Company], field: CategoryField) -> Vec<OptionCount> {
    distinct_values(companies, field)
        .into_iter()
        .map(|value| {
            let count = companies
                .iter()
                .filter(|c| c.category(field) == value)
                .count();
            OptionCount { value, count }
        })
        .collect()
}
