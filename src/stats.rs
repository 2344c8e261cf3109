use crate::models::Dataset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary statistics of absolute temperature for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    /// 1 = January.
    pub month: u8,
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Compute per-month statistics of `base + variance`, ordered January..December.
/// Months without records are omitted.
pub fn monthly_summary(data: &Dataset) -> Vec<Summary> {
    let mut groups: BTreeMap<u8, Vec<f64>> = BTreeMap::new();
    for r in &data.monthly_variance {
        groups
            .entry(r.month)
            .or_default()
            .push(r.temperature(data.base_temperature));
    }

    let mut out = Vec::new();
    for (month, mut vals) in groups {
        vals.sort_by(|a, b| a.total_cmp(b));
        let count = vals.len();
        let min = vals.first().cloned();
        let max = vals.last().cloned();
        let mean = if count > 0 {
            Some(vals.iter().copied().sum::<f64>() / count as f64)
        } else {
            None
        };
        let median = if count == 0 {
            None
        } else if count % 2 == 1 {
            Some(vals[count / 2])
        } else {
            Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
        };
        out.push(Summary {
            month,
            count,
            min,
            max,
            mean,
            median,
        });
    }
    out
}

/// Mean absolute temperature per year, in year order.
pub fn yearly_means(data: &Dataset) -> Vec<(i32, f64)> {
    let mut sums: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for r in &data.monthly_variance {
        let e = sums.entry(r.year).or_insert((0.0, 0));
        e.0 += r.temperature(data.base_temperature);
        e.1 += 1;
    }
    sums.into_iter()
        .map(|(year, (sum, n))| (year, sum / n as f64))
        .collect()
}
