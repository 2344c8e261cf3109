//! Hover tooltip: content for a record and the show/hide state driven by pointer events.

use super::text::{escape_html, month_name, one_decimal};
use crate::models::MonthlyVariance;

/// Opacity while the pointer is over a cell.
pub const HOVER_OPACITY: f64 = 0.9;

/// Three lines describing one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    /// `"1850 - January"`
    pub heading: String,
    /// Absolute temperature, one decimal: `"8.0°C"`.
    pub temperature: String,
    /// Raw variance as given by the source: `"-0.68°C"`.
    pub variance: String,
}

impl TooltipContent {
    pub fn for_record(record: &MonthlyVariance, base_temperature: f64) -> Self {
        let month = month_name(record.month).unwrap_or("?");
        Self {
            heading: format!("{} - {}", record.year, month),
            temperature: format!("{}°C", one_decimal(record.temperature(base_temperature))),
            variance: format!("{}°C", record.variance),
        }
    }

    pub fn lines(&self) -> [&str; 3] {
        [&self.heading, &self.temperature, &self.variance]
    }

    /// Escaped markup with `<br/>` separators, as injected into `#tooltip`.
    pub fn to_html(&self) -> String {
        self.lines()
            .iter()
            .map(|l| escape_html(l))
            .collect::<Vec<_>>()
            .join("<br/>")
    }
}

/// State of the floating `#tooltip` element.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub opacity: f64,
    pub left: f64,
    pub top: f64,
    pub data_year: Option<i32>,
    pub content: Option<TooltipContent>,
    offset: f64,
}

impl Tooltip {
    /// Hidden tooltip placed `offset` pixels right of and below the pointer when shown.
    pub fn new(offset: i32) -> Self {
        Self {
            opacity: 0.0,
            left: 0.0,
            top: 0.0,
            data_year: None,
            content: None,
            offset: f64::from(offset),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Pointer moved over `record` at page coordinates `pointer`.
    pub fn on_hover(&mut self, record: &MonthlyVariance, base_temperature: f64, pointer: (f64, f64)) {
        self.opacity = HOVER_OPACITY;
        self.left = pointer.0 + self.offset;
        self.top = pointer.1 + self.offset;
        self.data_year = Some(record.year);
        self.content = Some(TooltipContent::for_record(record, base_temperature));
    }

    /// Pointer left the cell. Position and content stay; only visibility changes.
    pub fn on_leave(&mut self) {
        self.opacity = 0.0;
    }
}
