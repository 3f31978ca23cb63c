use super::filter::FilterState;
use super::model::Company;
use super::sort::SortState;

/// Sort then filter `companies` without touching them.
///
/// The sort is stable, so rows with equal keys keep their dataset order.
/// With no sort key the dataset order is kept as is.
pub fn run<'a>(companies: &'a [Company], filter: &FilterState, sort: &SortState) -> Vec<&'a Company> {
    let mut rows: Vec<&Company> = companies.iter().collect();
    if sort.key.is_some() {
        rows.sort_by(|a, b| sort.compare(a, b));
    }
    rows.retain(|c| filter.matches(c));
    rows
}
