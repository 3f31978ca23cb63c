use crate::config::Domains;

use super::controls::{self, Endpoint, RangeControl};
use super::filter::{FilterState, OpenRange};
use super::model::{CategoryField, Field};
use super::sort::SortState;

// ---------------------------------------------------------------------------
// User actions
// ---------------------------------------------------------------------------

/// Every state change the user can trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Checkbox click on a filter choice.
    Toggle(CategoryField, String),
    /// "Alle" button of a filter panel; carries the panel's options.
    SelectAll(CategoryField, Vec<String>),
    /// "Zurücksetzen" button of a filter panel.
    ClearSelection(CategoryField),
    Revenue(Endpoint, f64),
    Headcount(Endpoint, u32),
    FoundingYear(Endpoint, i32),
    /// Column header click.
    SortBy(Field),
    /// Global reset of filters and sort order.
    Reset,
}

// ---------------------------------------------------------------------------
// ViewState – filter + sort as one value
// ---------------------------------------------------------------------------

/// Everything that determines the displayed rows besides the data itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub filter: FilterState,
    pub sort: SortState,
}

impl ViewState {
    /// Default state: no constraints, dataset order.
    pub fn new(domains: &Domains) -> Self {
        Self {
            filter: FilterState::new(domains),
            sort: SortState::default(),
        }
    }

    /// Produce the state that follows `action`. `self` is left untouched.
    pub fn reduce(&self, action: Action, domains: &Domains) -> ViewState {
        let filter = &self.filter;
        match action {
            Action::Toggle(field, value) => self.with_filter(filter.with_selection(
                field,
                controls::toggle(filter.selection(field), &value),
            )),
            Action::SelectAll(field, options) => self.with_filter(filter.with_selection(
                field,
                controls::select_all(filter.selection(field), &options),
            )),
            Action::ClearSelection(field) => self.with_filter(
                filter.with_selection(field, controls::clear(filter.selection(field))),
            ),
            Action::Revenue(endpoint, value) => {
                let control = RangeControl::new(domains.revenue);
                let current = filter.revenue.resolve(domains.revenue);
                let revenue = OpenRange::from(control.set_endpoint(current, endpoint, value));
                self.with_filter(FilterState {
                    revenue,
                    ..filter.clone()
                })
            }
            Action::Headcount(endpoint, value) => {
                let control = RangeControl::new(domains.headcount);
                self.with_filter(FilterState {
                    headcount: control.set_endpoint(filter.headcount, endpoint, value),
                    ..filter.clone()
                })
            }
            Action::FoundingYear(endpoint, value) => {
                let control = RangeControl::new(domains.founding_year);
                self.with_filter(FilterState {
                    founding_year: control.set_endpoint(filter.founding_year, endpoint, value),
                    ..filter.clone()
                })
            }
            Action::SortBy(field) => ViewState {
                filter: filter.clone(),
                sort: self.sort.toggled(field),
            },
            Action::Reset => ViewState::new(domains),
        }
    }

    fn with_filter(&self, filter: FilterState) -> ViewState {
        ViewState {
            filter,
            sort: self.sort,
        }
    }
}
