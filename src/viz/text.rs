//! Label formatting and text measurement.

use chrono::Month;

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Largest font size (down to 6px) at which every label fits in `max_px`.
pub fn fit_font_px<'a>(labels: impl IntoIterator<Item = &'a str>, font_px: u32, max_px: u32) -> u32 {
    let widest = labels.into_iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut px = font_px;
    while px > 6 && estimate_text_width_px(&"m".repeat(widest), px) > max_px {
        px -= 1;
    }
    px
}

/// English month name for a 1-based month, e.g. `1 -> "January"`.
pub fn month_name(month: u8) -> Option<&'static str> {
    Month::try_from(month).ok().map(|m| m.name())
}

/// Fixed one-decimal formatting used by the legend ticks and tooltip.
pub fn one_decimal(v: f64) -> String {
    format!("{:.1}", v)
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
