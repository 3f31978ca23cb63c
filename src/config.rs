use std::path::PathBuf;

use chrono::Datelike;

use crate::data::filter::ClosedRange;

/// Earliest founding year the year filter offers.
pub const FIRST_FOUNDING_YEAR: i32 = 1980;

// ---------------------------------------------------------------------------
// Control domains
// ---------------------------------------------------------------------------

/// Value domains of the three range controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domains {
    pub revenue: ClosedRange<f64>,
    pub headcount: ClosedRange<u32>,
    pub founding_year: ClosedRange<i32>,
}

impl Default for Domains {
    fn default() -> Self {
        let this_year = chrono::Local::now().year();
        Self {
            revenue: ClosedRange::new(0.0, 10_000_000.0),
            headcount: ClosedRange::new(0, 500),
            founding_year: ClosedRange::new(FIRST_FOUNDING_YEAR, this_year),
        }
    }
}

// ---------------------------------------------------------------------------
// Browser configuration
// ---------------------------------------------------------------------------

/// Fixed settings of the browser. There is no config file; everything here
/// is a compile-time default.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Dataset loaded at startup when it exists.
    pub dataset_path: PathBuf,
    pub domains: Domains,
    pub xlsx_file_name: &'static str,
    pub pdf_file_name: &'static str,
    pub sheet_name: &'static str,
    pub document_title: &'static str,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("demo_firmen.json"),
            domains: Domains::default(),
            xlsx_file_name: "firmen.xlsx",
            pdf_file_name: "firmen.pdf",
            sheet_name: "Firmen",
            document_title: "Firmenübersicht",
        }
    }
}
