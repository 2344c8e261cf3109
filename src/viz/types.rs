//! Public types for the visualization module: layout configuration and scene elements.

use crate::models::MonthlyVariance;
use crate::palette::Rgb;

/// Vertical budget split evenly between the legend swatches' height and the colour count.
const LEGEND_BAND_PX: f64 = 300.0;

/// Layout of the chart. Every phase receives this explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Height of the plotting region; the canvas adds `padding` below it for the legend.
    pub height: u32,
    /// Gap between canvas edge and plotting region on every side.
    pub padding: u32,
    /// Width of the colour legend.
    pub legend_width: u32,
    /// Font size for tick labels.
    pub font_px: u32,
    /// Tooltip offset from the pointer, both axes.
    pub tooltip_offset: i32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 600,
            padding: 60,
            legend_width: 400,
            font_px: 10,
            tooltip_offset: 10,
        }
    }
}

impl ChartConfig {
    /// Canvas height including the legend band. `Heatmap` rejects configs where this would
    /// overflow, so the saturation never shows in a drawn chart.
    pub fn canvas_height(&self) -> u32 {
        self.height.saturating_add(self.padding)
    }

    /// Horizontal extent of the plotting region.
    pub fn x_range(&self) -> (f64, f64) {
        (
            f64::from(self.padding),
            f64::from(self.width) - f64::from(self.padding),
        )
    }

    /// Vertical extent of the plotting region.
    pub fn y_range(&self) -> (f64, f64) {
        (
            f64::from(self.padding),
            f64::from(self.height) - f64::from(self.padding),
        )
    }

    pub fn legend_height(&self, color_count: usize) -> f64 {
        LEGEND_BAND_PX / color_count.max(1) as f64
    }
}

/// Which side of the plot an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Position along the axis, in the axis group's coordinates.
    pub pos: f64,
    pub label: String,
}

/// An axis ready for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// DOM id of the axis group, if any.
    pub id: Option<&'static str>,
    pub orient: AxisOrient,
    /// Group translation within the canvas.
    pub translate: (f64, f64),
    /// Extent of the domain line along the axis.
    pub extent: (f64, f64),
    pub tick_size: f64,
    pub ticks: Vec<Tick>,
}

/// One colour bucket in the legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendSwatch {
    /// Temperatures covered by the bucket.
    pub extent: (f64, f64),
    pub x: f64,
    pub width: f64,
    pub fill: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub translate: (f64, f64),
    pub swatch_height: f64,
    pub swatches: Vec<LegendSwatch>,
    /// Bottom axis, relative to the legend group.
    pub axis: Axis,
}

/// One heatmap rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub record: MonthlyVariance,
    /// `base + variance`.
    pub temperature: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
}

impl Cell {
    pub fn data_year(&self) -> i32 {
        self.record.year
    }

    /// Zero-based month, matching the month axis index.
    pub fn data_month(&self) -> u8 {
        self.record.month.saturating_sub(1)
    }

    pub fn data_temp(&self) -> f64 {
        self.temperature
    }
}

/// Everything a backend needs to draw the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub config: ChartConfig,
    pub title: String,
    pub description: String,
    pub base_temperature: f64,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Legend,
    pub cells: Vec<Cell>,
}
