use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray, Float32Array, Float64Array, Int32Array, Int64Array};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{Company, CompanyStore};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a company dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json`    – `[{ "name": ..., "typ": ..., "umsatz": ..., ... }, ...]`
/// * `.csv`     – header row with the same keys
/// * `.parquet` – one flat column per key
pub fn load_file(path: &Path) -> Result<CompanyStore> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let store = match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!("Loaded {} companies from {}", store.len(), path.display());
    Ok(store)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<CompanyStore> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

/// Parse a JSON array of company objects.
///
/// ```json
/// [
///   { "name": "Nordlicht GmbH", "typ": "GmbH", "region": "Nord",
///     "branche": "Tech", "umsatz": 500000, "mitarbeiter": 10, "gruendung": 2010 },
///   ...
/// ]
/// ```
pub fn parse_json(text: &str) -> Result<CompanyStore> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let companies = records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            if !rec.is_object() {
                bail!("Row {i} is not a JSON object");
            }
            serde_json::from_value::<Company>(rec.clone())
                .with_context(|| format!("Row {i}: invalid company record"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CompanyStore::new(companies))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row `name,typ,region,branche,umsatz,mitarbeiter,gruendung`.
fn load_csv(path: &Path) -> Result<CompanyStore> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<CompanyStore> {
    let companies = reader
        .deserialize::<Company>()
        .enumerate()
        .map(|(row_no, result)| result.with_context(|| format!("CSV row {row_no}")))
        .collect::<Result<Vec<_>>>()?;

    Ok(CompanyStore::new(companies))
}

/// Parse CSV text with a header row.
pub fn parse_csv(text: &str) -> Result<CompanyStore> {
    read_csv(csv::Reader::from_reader(text.as_bytes()))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one column per company field.
///
/// Expected schema:
/// - `name`, `typ`, `region`, `branche`: Utf8 or LargeUtf8
/// - `umsatz`: Float64, Float32, Int64 or Int32
/// - `mitarbeiter`, `gruendung`: Int64 or Int32
fn load_parquet(path: &Path) -> Result<CompanyStore> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut companies = Vec::new();
    let mut offset = 0;

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        companies.extend(companies_from_batch(&batch, offset)?);
        offset += batch.num_rows();
    }

    Ok(CompanyStore::new(companies))
}

/// Convert one record batch. `offset` is the index of its first row in the file.
pub fn companies_from_batch(batch: &RecordBatch, offset: usize) -> Result<Vec<Company>> {
    let name = column(batch, "name")?;
    let company_type = column(batch, "typ")?;
    let region = column(batch, "region")?;
    let industry = column(batch, "branche")?;
    let revenue = column(batch, "umsatz")?;
    let headcount = column(batch, "mitarbeiter")?;
    let founding_year = column(batch, "gruendung")?;

    (0..batch.num_rows())
        .map(|row| -> Result<Company> {
            let company = Company {
                name: string_at(name, row)?,
                company_type: string_at(company_type, row)?,
                region: string_at(region, row)?,
                industry: string_at(industry, row)?,
                revenue: f64_at(revenue, row)?,
                headcount: u32::try_from(i64_at(headcount, row)?)
                    .context("'mitarbeiter' out of range")?,
                founding_year: i32::try_from(i64_at(founding_year, row)?)
                    .context("'gruendung' out of range")?,
            };
            Ok(company)
        })
        .enumerate()
        .map(|(row, result)| result.with_context(|| format!("Row {}", offset + row)))
        .collect()
}

// -- Parquet / Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    batch
        .column_by_name(name)
        .with_context(|| format!("Parquet file missing '{name}' column"))
}

fn string_at(col: &ArrayRef, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in text column");
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}

fn f64_at(col: &ArrayRef, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    let any = col.as_any();
    if let Some(arr) = any.downcast_ref::<Float64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = any.downcast_ref::<Float32Array>() {
        Ok(f64::from(arr.value(row)))
    } else {
        i64_at(col, row).map(|v| v as f64)
    }
}

fn i64_at(col: &ArrayRef, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value in integer column");
    }
    let any = col.as_any();
    if let Some(arr) = any.downcast_ref::<Int64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = any.downcast_ref::<Int32Array>() {
        Ok(i64::from(arr.value(row)))
    } else {
        bail!("Expected integer column, got {:?}", col.data_type())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::array::StringArray;
    use arrow::datatypes::{Field, Schema};

    use super::*;

    #[test]
    fn json_rows_are_indexed_in_errors() {
        let text = r#"[
            {"name":"A","typ":"GmbH","region":"Nord","branche":"Tech","umsatz":1,"mitarbeiter":1,"gruendung":2000},
            {"name":"B","typ":"AG"}
        ]"#;
        let err = parse_json(text).unwrap_err();
        assert!(format!("{err:#}").contains("Row 1"));
    }

    #[test]
    fn json_requires_an_array() {
        let err = parse_json(r#"{"name":"A"}"#).unwrap_err();
        assert!(err.to_string().contains("top-level JSON array"));
    }

    #[test]
    fn csv_with_dataset_headers() {
        let text = "name,typ,region,branche,umsatz,mitarbeiter,gruendung\n\
                    Alpha,GmbH,Nord,Tech,1500.5,12,2001\n\
                    Beta,AG,Süd,Handel,200000,250,1988\n";
        let store = parse_csv(text).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.companies()[0].revenue, 1500.5);
        assert_eq!(store.companies()[1].region, "Süd");
    }

    #[test]
    fn csv_bad_number_names_the_row() {
        let text = "name,typ,region,branche,umsatz,mitarbeiter,gruendung\n\
                    Alpha,GmbH,Nord,Tech,viel,12,2001\n";
        let err = parse_csv(text).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 0"));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("firmen.txt")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn batch_with_integer_revenue() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("name", DataType::Utf8, false),
            Field::new("typ", DataType::Utf8, false),
            Field::new("region", DataType::Utf8, false),
            Field::new("branche", DataType::Utf8, false),
            Field::new("umsatz", DataType::Int64, false),
            Field::new("mitarbeiter", DataType::Int32, false),
            Field::new("gruendung", DataType::Int64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(StringArray::from(vec!["Alpha"])),
                Arc::new(StringArray::from(vec!["GmbH"])),
                Arc::new(StringArray::from(vec!["Nord"])),
                Arc::new(StringArray::from(vec!["Tech"])),
                Arc::new(Int64Array::from(vec![750_000])),
                Arc::new(Int32Array::from(vec![42])),
                Arc::new(Int64Array::from(vec![1999])),
            ],
        )
        .unwrap();

        let companies = companies_from_batch(&batch, 0).unwrap();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].revenue, 750_000.0);
        assert_eq!(companies[0].headcount, 42);
        assert_eq!(companies[0].founding_year, 1999);
    }
}
