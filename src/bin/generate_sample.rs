use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use bizselect::data::model::Company;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[lo, hi]`.
    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_f64() * (hi - lo + 1) as f64) as i64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.range(0, items.len() as i64 - 1) as usize]
    }
}

const PREFIXES: [&str; 12] = [
    "Nordlicht", "Alpen", "Rhein", "Elbe", "Spree", "Hansa", "Brocken", "Isar", "Main",
    "Weser", "Bodensee", "Harz",
];
const STEMS: [&str; 10] = [
    "Systeme", "Logistik", "Technik", "Handel", "Werke", "Digital", "Bau", "Energie", "Medien",
    "Consulting",
];
const TYPES: [&str; 5] = ["GmbH", "AG", "KG", "GmbH & Co. KG", "UG"];
const REGIONS: [&str; 5] = ["Nord", "Süd", "Ost", "West", "Mitte"];
const INDUSTRIES: [&str; 6] = ["Tech", "Handel", "Industrie", "Logistik", "Gesundheit", "Energie"];

fn generate(count: usize, rng: &mut SimpleRng) -> Vec<Company> {
    (0..count)
        .map(|_| {
            let company_type = rng.pick(&TYPES);
            let headcount = rng.range(1, 520) as u32;
            // Revenue loosely follows headcount, rounded to thousands.
            let per_head = rng.range(40, 220) as f64 * 1_000.0;
            let revenue = (f64::from(headcount) * per_head / 1_000.0).round() * 1_000.0;
            Company {
                name: format!("{} {} {company_type}", rng.pick(&PREFIXES), rng.pick(&STEMS)),
                company_type: company_type.to_string(),
                region: rng.pick(&REGIONS).to_string(),
                industry: rng.pick(&INDUSTRIES).to_string(),
                revenue,
                headcount,
                founding_year: rng.range(1975, 2024) as i32,
            }
        })
        .collect()
}

fn write_parquet(companies: &[Company], path: &str) -> Result<()> {
    let text = |f: fn(&Company) -> &str| {
        StringArray::from(companies.iter().map(f).collect::<Vec<_>>())
    };

    let schema = Arc::new(Schema::new(vec![
        Field::new("name", DataType::Utf8, false),
        Field::new("typ", DataType::Utf8, false),
        Field::new("region", DataType::Utf8, false),
        Field::new("branche", DataType::Utf8, false),
        Field::new("umsatz", DataType::Float64, false),
        Field::new("mitarbeiter", DataType::Int64, false),
        Field::new("gruendung", DataType::Int64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(text(|c| c.name.as_str())),
            Arc::new(text(|c| c.company_type.as_str())),
            Arc::new(text(|c| c.region.as_str())),
            Arc::new(text(|c| c.industry.as_str())),
            Arc::new(Float64Array::from_iter_values(companies.iter().map(|c| c.revenue))),
            Arc::new(Int64Array::from_iter_values(
                companies.iter().map(|c| i64::from(c.headcount)),
            )),
            Arc::new(Int64Array::from_iter_values(
                companies.iter().map(|c| i64::from(c.founding_year)),
            )),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let companies = generate(120, &mut rng);

    let json_path = "demo_firmen.json";
    let json = serde_json::to_string_pretty(&companies).context("serializing companies")?;
    std::fs::write(json_path, json).with_context(|| format!("writing {json_path}"))?;

    let parquet_path = "demo_firmen.parquet";
    write_parquet(&companies, parquet_path)?;

    println!(
        "Wrote {} companies to {json_path} and {parquet_path}",
        companies.len()
    );
    Ok(())
}
