use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use super::{ExportError, HEADER};
use crate::data::model::Company;

/// Build a workbook with one sheet: the header row, then one row per company
/// in the given order. Numeric columns are written as numbers.
pub fn build_workbook(rows: &[&Company], sheet_name: &str) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    write_header(worksheet)?;
    for (i, company) in rows.iter().enumerate() {
        write_company(worksheet, i as u32 + 1, company)?;
    }

    Ok(workbook)
}

/// Serialize to `.xlsx` bytes.
pub fn to_bytes(rows: &[&Company], sheet_name: &str) -> Result<Vec<u8>, ExportError> {
    let mut workbook = build_workbook(rows, sheet_name)?;
    Ok(workbook.save_to_buffer()?)
}

fn write_header(worksheet: &mut Worksheet) -> Result<(), XlsxError> {
    let bold = Format::new().set_bold();
    for (col, title) in HEADER.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &bold)?;
    }
    worksheet.set_column_width(0, 30.0)?;
    Ok(())
}

fn write_company(worksheet: &mut Worksheet, row: u32, company: &Company) -> Result<(), XlsxError> {
    worksheet.write_string(row, 0, &company.name)?;
    worksheet.write_string(row, 1, &company.company_type)?;
    worksheet.write_string(row, 2, &company.region)?;
    worksheet.write_string(row, 3, &company.industry)?;
    worksheet.write_number(row, 4, company.revenue)?;
    worksheet.write_number(row, 5, company.headcount)?;
    worksheet.write_number(row, 6, company.founding_year)?;
    Ok(())
}
