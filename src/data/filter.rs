use std::collections::BTreeSet;

use crate::config::Domains;

use super::model::{CategoryField, Company};

// ---------------------------------------------------------------------------
// Selection – constraint on a categorical field
// ---------------------------------------------------------------------------

/// Whether a panel accepts several values at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Multi,
    Single,
}

/// Selected values of a categorical field. An empty set means no constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    mode: SelectionMode,
    values: BTreeSet<String>,
}

impl Selection {
    /// An unconstrained selection.
    pub fn any(mode: SelectionMode) -> Self {
        Self {
            mode,
            values: BTreeSet::new(),
        }
    }

    /// A selection holding `values`. In single mode only the first value is kept.
    pub fn of<I, S>(mode: SelectionMode, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut iter = values.into_iter().map(Into::into);
        let values = match mode {
            SelectionMode::Multi => iter.collect(),
            SelectionMode::Single => iter.next().into_iter().collect(),
        };
        Self { mode, values }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn values(&self) -> &BTreeSet<String> {
        &self.values
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// True when nothing is selected, i.e. every value passes.
    pub fn is_unconstrained(&self) -> bool {
        self.values.is_empty()
    }

    pub fn matches(&self, value: &str) -> bool {
        self.is_unconstrained() || self.values.contains(value)
    }
}

// ---------------------------------------------------------------------------
// Numeric ranges
// ---------------------------------------------------------------------------

/// Inclusive range with both ends set. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedRange<T> {
    min: T,
    max: T,
}

impl<T: Copy + PartialOrd> ClosedRange<T> {
    /// Build a range, swapping the ends if they arrive reversed.
    pub fn new(a: T, b: T) -> Self {
        if b < a {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Force `value` into the range.
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// Inclusive range where either end may be absent (unbounded).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OpenRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl OpenRange {
    pub const UNBOUNDED: OpenRange = OpenRange { min: None, max: None };

    /// Build a range, swapping the ends if both are set and reversed.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        match (min, max) {
            (Some(a), Some(b)) if b < a => Self {
                min: Some(b),
                max: Some(a),
            },
            _ => Self { min, max },
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// The concrete pair shown by a control, substituting domain edges for
    /// missing ends.
    pub fn resolve(&self, domain: ClosedRange<f64>) -> ClosedRange<f64> {
        ClosedRange::new(
            self.min.unwrap_or(domain.min()),
            self.max.unwrap_or(domain.max()),
        )
    }
}

impl From<ClosedRange<f64>> for OpenRange {
    fn from(range: ClosedRange<f64>) -> Self {
        OpenRange::new(Some(range.min()), Some(range.max()))
    }
}

// ---------------------------------------------------------------------------
// FilterState – all active constraints
// ---------------------------------------------------------------------------

/// The combined filter constraints. Replaced as a whole on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub types: Selection,
    pub regions: Selection,
    pub industries: Selection,
    pub revenue: OpenRange,
    pub headcount: ClosedRange<u32>,
    pub founding_year: ClosedRange<i32>,
}

impl FilterState {
    /// Defaults: no categorical constraint, unbounded revenue, full domains
    /// for headcount and founding year.
    pub fn new(domains: &Domains) -> Self {
        Self {
            types: Selection::any(SelectionMode::Multi),
            regions: Selection::any(SelectionMode::Single),
            industries: Selection::any(SelectionMode::Single),
            revenue: OpenRange::UNBOUNDED,
            headcount: domains.headcount,
            founding_year: domains.founding_year,
        }
    }

    pub fn selection(&self, field: CategoryField) -> &Selection {
        match field {
            CategoryField::Type => &self.types,
            CategoryField::Region => &self.regions,
            CategoryField::Industry => &self.industries,
        }
    }

    /// Copy of `self` with the selection for `field` replaced.
    pub fn with_selection(&self, field: CategoryField, selection: Selection) -> Self {
        let mut next = self.clone();
        match field {
            CategoryField::Type => next.types = selection,
            CategoryField::Region => next.regions = selection,
            CategoryField::Industry => next.industries = selection,
        }
        next
    }

    /// Whether `company` satisfies every constraint.
    pub fn matches(&self, company: &Company) -> bool {
        let checks = [
            self.types.matches(&company.company_type),
            self.regions.matches(&company.region),
            self.industries.matches(&company.industry),
            self.revenue.contains(company.revenue),
            self.headcount.contains(company.headcount),
            self.founding_year.contains(company.founding_year),
        ];
        checks.iter().all(|&ok| ok)
    }
}
