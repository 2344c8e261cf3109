use crate::api::parse_dataset;
use crate::models::Dataset;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Save records as CSV with header `year,month,variance,temperature`.
pub fn save_csv<P: AsRef<Path>>(data: &Dataset, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("year", "month", "variance", "temperature"))?;
    for r in &data.monthly_variance {
        wtr.serialize((
            r.year,
            r.month,
            r.variance,
            r.temperature(data.base_temperature),
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save the dataset as pretty JSON in the source schema.
pub fn save_json<P: AsRef<Path>>(data: &Dataset, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(data)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Read and validate a dataset stored locally in the source schema.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_dataset(&text).with_context(|| format!("load {}", path.display()))
}
