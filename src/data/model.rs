use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Company – one row of the dataset
// ---------------------------------------------------------------------------

/// A single company record. Records are never mutated after load.
///
/// Keys follow the dataset files (`typ`, `branche`, `umsatz`, ...); the
/// English names are accepted as aliases when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "typ", alias = "type")]
    pub company_type: String,
    pub region: String,
    #[serde(rename = "branche", alias = "industry")]
    pub industry: String,
    /// Annual revenue in euros.
    #[serde(rename = "umsatz", alias = "revenue")]
    pub revenue: f64,
    #[serde(rename = "mitarbeiter", alias = "headcount")]
    pub headcount: u32,
    #[serde(rename = "gruendung", alias = "foundingYear")]
    pub founding_year: i32,
}

impl Company {
    /// Value of a categorical field.
    pub fn category(&self, field: CategoryField) -> &str {
        match field {
            CategoryField::Type => &self.company_type,
            CategoryField::Region => &self.region,
            CategoryField::Industry => &self.industry,
        }
    }

    /// Value of any field, typed for comparison.
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Name => FieldValue::Text(&self.name),
            Field::Type => FieldValue::Text(&self.company_type),
            Field::Region => FieldValue::Text(&self.region),
            Field::Industry => FieldValue::Text(&self.industry),
            Field::Revenue => FieldValue::Number(self.revenue),
            Field::Headcount => FieldValue::Number(f64::from(self.headcount)),
            Field::FoundingYear => FieldValue::Number(f64::from(self.founding_year)),
        }
    }
}

/// A borrowed field value: either text or a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

// ---------------------------------------------------------------------------
// Field – the columns of the table
// ---------------------------------------------------------------------------

/// Every column of a [`Company`], in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Type,
    Region,
    Industry,
    Revenue,
    Headcount,
    FoundingYear,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Type,
        Field::Region,
        Field::Industry,
        Field::Revenue,
        Field::Headcount,
        Field::FoundingYear,
    ];

    /// Column title used in the table header.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Type => "Typ",
            Field::Region => "Region",
            Field::Industry => "Branche",
            Field::Revenue => "Umsatz",
            Field::Headcount => "Mitarbeiter",
            Field::FoundingYear => "Gründer",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Field::Revenue | Field::Headcount | Field::FoundingYear)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The fields that can be filtered by choosing values from a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryField {
    Type,
    Region,
    Industry,
}

impl CategoryField {
    pub const ALL: [CategoryField; 3] = [
        CategoryField::Type,
        CategoryField::Region,
        CategoryField::Industry,
    ];

    /// Heading of the filter panel governing this field.
    pub fn panel_label(self) -> &'static str {
        match self {
            CategoryField::Type => "Firmentyp",
            CategoryField::Region => "Region",
            CategoryField::Industry => "Branche",
        }
    }
}

// ---------------------------------------------------------------------------
// CompanyStore – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded dataset. Populated once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct CompanyStore {
    companies: Vec<Company>,
}

impl CompanyStore {
    pub fn new(companies: Vec<Company>) -> Self {
        Self { companies }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Number of companies.
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}
