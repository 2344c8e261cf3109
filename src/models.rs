use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Public location of the monthly global land-surface temperature dataset.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Problems found while validating a decoded dataset.
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("dataset contains no monthly records")]
    Empty,
    #[error("record #{index} ({year}) has month {month}, expected 1-12")]
    InvalidMonth { index: usize, year: i32, month: u8 },
    #[error("non-finite {field} in record #{index}")]
    NonFiniteValue { index: usize, field: &'static str },
}

/// One observation: deviation from the base temperature for a year/month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MonthlyVariance {
    pub year: i32,
    /// Calendar month, 1 = January.
    pub month: u8,
    /// Deviation from the base temperature in °C.
    pub variance: f64,
}

impl MonthlyVariance {
    /// Absolute temperature of this record.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

/// Document returned by the dataset endpoint.
///
/// The endpoint uses camelCase keys:
/// `{"baseTemperature": 8.66, "monthlyVariance": [{"year":1753,"month":1,"variance":-1.366}, …]}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyVariance>,
}

impl Dataset {
    /// Check the invariants every later phase relies on.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if !self.base_temperature.is_finite() {
            return Err(DatasetError::NonFiniteValue {
                index: 0,
                field: "baseTemperature",
            });
        }
        if self.monthly_variance.is_empty() {
            return Err(DatasetError::Empty);
        }
        for (index, r) in self.monthly_variance.iter().enumerate() {
            if !(1..=12).contains(&r.month) {
                return Err(DatasetError::InvalidMonth {
                    index,
                    year: r.year,
                    month: r.month,
                });
            }
            if !r.variance.is_finite() {
                return Err(DatasetError::NonFiniteValue {
                    index,
                    field: "variance",
                });
            }
        }
        Ok(())
    }

    pub fn domains(&self) -> Domains {
        compute_domains(&self.monthly_variance, self.base_temperature)
    }
}

/// Extrema derived once from the dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domains {
    pub min_year: i32,
    pub max_year: i32,
    pub min_temp: f64,
    pub max_temp: f64,
    /// Number of distinct years present; drives the cell width.
    pub year_count: usize,
}

/// Single pass over the records for year and absolute temperature extrema.
///
/// An empty slice yields a degenerate domain (`0..0`, `base..base`); callers validate the
/// dataset first.
pub fn compute_domains(records: &[MonthlyVariance], base_temperature: f64) -> Domains {
    let mut years = BTreeSet::new();
    let (mut min_year, mut max_year) = (i32::MAX, i32::MIN);
    let (mut min_var, mut max_var) = (f64::INFINITY, f64::NEG_INFINITY);
    for r in records {
        min_year = min_year.min(r.year);
        max_year = max_year.max(r.year);
        min_var = min_var.min(r.variance);
        max_var = max_var.max(r.variance);
        years.insert(r.year);
    }
    if records.is_empty() {
        return Domains {
            min_year: 0,
            max_year: 0,
            min_temp: base_temperature,
            max_temp: base_temperature,
            year_count: 0,
        };
    }
    Domains {
        min_year,
        max_year,
        min_temp: base_temperature + min_var,
        max_temp: base_temperature + max_var,
        year_count: years.len(),
    }
}
