//! Mapping functions from data space to pixels and colours.
//!
//! - `LinearScale`: continuous domain → continuous pixel range (years, legend temperatures)
//! - `MonthScale`: month 1–12 → one of 12 equal vertical slots
//! - `ThresholdScale`: temperature → discrete colour bucket
//! - `nice_ticks`: round tick values for integer-labelled axes

use crate::palette::Rgb;

/// Continuous linear mapping `domain → range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to the range. A zero-width domain maps everything to the range start.
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < f64::EPSILON {
            return r0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Month (1 = January) to the top edge of its slot within `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthScale {
    pub range: (f64, f64),
}

impl MonthScale {
    pub fn new(range: (f64, f64)) -> Self {
        Self { range }
    }

    /// Height of one month slot.
    pub fn bandwidth(&self) -> f64 {
        (self.range.1 - self.range.0) / 12.0
    }

    pub fn map(&self, month: u8) -> f64 {
        self.range.0 + f64::from(month.saturating_sub(1)) * self.bandwidth()
    }

    /// Vertical centre of the slot, where the axis label sits.
    pub fn center(&self, month: u8) -> f64 {
        self.map(month) + self.bandwidth() / 2.0
    }
}

/// Threshold scale: `boundaries.len() + 1 == colors.len()`.
///
/// A value `v` selects the first bucket `i` with `v < boundaries[i]`, or the last bucket if
/// none matches.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale {
    pub min: f64,
    pub max: f64,
    pub boundaries: Vec<f64>,
    pub colors: Vec<Rgb>,
}

impl ThresholdScale {
    pub fn bucket(&self, v: f64) -> usize {
        self.boundaries
            .iter()
            .position(|b| v < *b)
            .unwrap_or(self.boundaries.len())
    }

    pub fn color(&self, v: f64) -> Rgb {
        self.colors[self.bucket(v).min(self.colors.len() - 1)]
    }

    /// `[lo, hi]` covered by bucket `i`; the open outer ends are clamped to `[min, max]`.
    pub fn invert_extent(&self, i: usize) -> (f64, f64) {
        let lo = if i == 0 {
            self.min
        } else {
            self.boundaries.get(i - 1).copied().unwrap_or(self.max)
        };
        let hi = self.boundaries.get(i).copied().unwrap_or(self.max);
        (lo, hi)
    }

    /// All bucket extents paired with their colour, in colour order.
    pub fn extents(&self) -> Vec<((f64, f64), Rgb)> {
        self.colors
            .iter()
            .enumerate()
            .map(|(i, c)| (self.invert_extent(i), *c))
            .collect()
    }
}

/// Split `[min, max]` into `colors.len()` equal-width buckets.
///
/// Boundaries are `min + i * (max - min) / n` for `i = 1..n`.
pub fn build_color_scale(min: f64, max: f64, colors: &[Rgb]) -> ThresholdScale {
    let n = colors.len();
    let step = if n == 0 { 0.0 } else { (max - min) / n as f64 };
    let boundaries = (1..n).map(|i| min + i as f64 * step).collect();
    ThresholdScale {
        min,
        max,
        boundaries,
        colors: colors.to_vec(),
    }
}

/// Roughly `count` round tick values (step 1, 2 or 5 × 10^k) inside `[start, stop]`.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if (stop - start).abs() < f64::EPSILON {
        return vec![start];
    }
    let (lo, hi) = if start < stop {
        (start, stop)
    } else {
        (stop, start)
    };
    let raw = (hi - lo) / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let err = raw / power;
    let factor = if err >= 50f64.sqrt() {
        10.0
    } else if err >= 10f64.sqrt() {
        5.0
    } else if err >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    let step = factor * power;
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::TEMPERATURE_COLORS;

    #[test]
    fn linear_maps_endpoints() {
        let s = LinearScale::new((1753.0, 2016.0), (60.0, 1040.0));
        assert!((s.map(1753.0) - 60.0).abs() < 1e-9);
        assert!((s.map(2016.0) - 1040.0).abs() < 1e-9);
    }

    #[test]
    fn month_slots_are_even() {
        let s = MonthScale::new((60.0, 540.0));
        assert_eq!(s.bandwidth(), 40.0);
        assert_eq!(s.map(1), 60.0);
        assert_eq!(s.map(12), 500.0);
        assert_eq!(s.center(1), 80.0);
    }

    #[test]
    fn year_ticks_are_round() {
        let t = nice_ticks(1753.0, 2016.0, 10);
        assert_eq!(t.first().copied(), Some(1760.0));
        assert!(t.windows(2).all(|w| (w[1] - w[0] - 20.0).abs() < 1e-9));
    }

    #[test]
    fn outer_values_fall_into_outer_buckets() {
        let s = build_color_scale(5.0, 15.0, &TEMPERATURE_COLORS);
        assert_eq!(s.bucket(-100.0), 0);
        assert_eq!(s.bucket(5.0), 0);
        assert_eq!(s.bucket(15.0), 10);
        assert_eq!(s.bucket(100.0), 10);
        assert_eq!(s.invert_extent(0), (5.0, s.boundaries[0]));
        assert_eq!(s.invert_extent(10), (s.boundaries[9], 15.0));
    }
}
