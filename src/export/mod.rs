//! Serializers for the currently displayed rows.
//!
//! Exporters receive the pipeline output as is; they never filter or sort.

pub mod pdf;
pub mod xlsx;

use std::path::Path;

use thiserror::Error;

use crate::config::BrowserConfig;
use crate::data::model::Company;

/// Header row shared by both exporters.
pub const HEADER: [&str; 7] = [
    "Name",
    "Typ",
    "Region",
    "Branche",
    "Umsatz (€)",
    "Mitarbeiter",
    "Gründer",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("spreadsheet export failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("PDF export failed: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("writing export file failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Output formats offered by the export menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Xlsx, ExportFormat::Pdf];

    /// Menu entry text.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "Excel",
            ExportFormat::Pdf => "PDF",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Default file name offered in the save dialog.
    pub fn default_file_name(self, config: &BrowserConfig) -> &'static str {
        match self {
            ExportFormat::Xlsx => config.xlsx_file_name,
            ExportFormat::Pdf => config.pdf_file_name,
        }
    }

    /// Serialize `rows` in this format.
    pub fn render(self, rows: &[&Company], config: &BrowserConfig) -> Result<Vec<u8>, ExportError> {
        match self {
            ExportFormat::Xlsx => xlsx::to_bytes(rows, config.sheet_name),
            ExportFormat::Pdf => pdf::to_bytes(rows, config.document_title),
        }
    }

    /// Serialize `rows` and write them to `path`.
    pub fn write(
        self,
        rows: &[&Company],
        config: &BrowserConfig,
        path: &Path,
    ) -> Result<(), ExportError> {
        let bytes = self.render(rows, config)?;
        std::fs::write(path, bytes)?;
        log::info!("Exported {} rows to {}", rows.len(), path.display());
        Ok(())
    }
}
