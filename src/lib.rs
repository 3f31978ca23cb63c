//! Browser for a static list of company records: filter by type, region,
//! industry and numeric ranges, sort by any column, export the current view
//! to Excel or PDF.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod export;
pub mod format;
pub mod state;
pub mod ui;
