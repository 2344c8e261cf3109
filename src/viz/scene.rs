//! Scale construction and layout of axes, legend and cells.

use anyhow::{Result, anyhow};

use super::text::{month_name, one_decimal};
use super::types::{Axis, AxisOrient, Cell, ChartConfig, Legend, LegendSwatch, Scene, Tick};
use crate::models::{Dataset, Domains};
use crate::palette::{Rgb, TEMPERATURE_COLORS};
use crate::scale::{LinearScale, MonthScale, ThresholdScale, build_color_scale, nice_ticks};

/// Heading above the chart.
pub const TITLE: &str = "Monthly Global Land-Surface Temperature";

const AXIS_TICK_SIZE: f64 = 6.0;
const LEGEND_TICK_SIZE: f64 = 10.0;
const YEAR_TICK_COUNT: usize = 10;

/// A dataset bound to its scales and layout.
#[derive(Debug, Clone)]
pub struct Heatmap<'a> {
    pub data: &'a Dataset,
    pub config: ChartConfig,
    pub domains: Domains,
    pub x: LinearScale,
    pub y: MonthScale,
    pub color: ThresholdScale,
    pub legend_x: LinearScale,
}

impl<'a> Heatmap<'a> {
    /// Build with the default 11-colour ramp.
    pub fn new(data: &'a Dataset, config: ChartConfig) -> Result<Self> {
        Self::with_colors(data, config, &TEMPERATURE_COLORS)
    }

    pub fn with_colors(data: &'a Dataset, config: ChartConfig, colors: &[Rgb]) -> Result<Self> {
        if data.monthly_variance.is_empty() {
            return Err(anyhow!("no data to plot"));
        }
        if colors.is_empty() {
            return Err(anyhow!("colour ramp is empty"));
        }
        let inset = 2 * u64::from(config.padding);
        if u64::from(config.width) <= inset || u64::from(config.height) <= inset {
            return Err(anyhow!(
                "chart {}x{} leaves no room inside padding {}",
                config.width,
                config.height,
                config.padding
            ));
        }
        if config.height.checked_add(config.padding).is_none() {
            return Err(anyhow!(
                "canvas height {} + {} overflows",
                config.height,
                config.padding
            ));
        }
        let domains = data.domains();
        let x = LinearScale::new(
            (f64::from(domains.min_year), f64::from(domains.max_year) + 1.0),
            config.x_range(),
        );
        let y = MonthScale::new(config.y_range());
        let color = build_color_scale(domains.min_temp, domains.max_temp, colors);
        let legend_x = LinearScale::new(
            (domains.min_temp, domains.max_temp),
            (0.0, f64::from(config.legend_width)),
        );
        Ok(Self {
            data,
            config,
            domains,
            x,
            y,
            color,
            legend_x,
        })
    }

    pub fn description(&self) -> String {
        format!(
            "{} - {}: base temperature {}°C",
            self.domains.min_year, self.domains.max_year, self.data.base_temperature
        )
    }

    /// Year axis (bottom) and month axis (left).
    pub fn render_axes(&self) -> (Axis, Axis) {
        let (x0, x1) = self.config.x_range();
        let (y0, y1) = self.config.y_range();

        let x_ticks = nice_ticks(
            f64::from(self.domains.min_year),
            f64::from(self.domains.max_year) + 1.0,
            YEAR_TICK_COUNT,
        )
        .into_iter()
        .filter(|year| year.fract() == 0.0)
        .map(|year| Tick {
            pos: self.x.map(year),
            label: format!("{}", year.round() as i64),
        })
        .collect();
        let x_axis = Axis {
            id: Some("x-axis"),
            orient: AxisOrient::Bottom,
            translate: (0.0, y1),
            extent: (x0, x1),
            tick_size: AXIS_TICK_SIZE,
            ticks: x_ticks,
        };

        let y_ticks = (1..=12u8)
            .filter_map(|m| {
                month_name(m).map(|name| Tick {
                    pos: self.y.center(m),
                    label: name.to_string(),
                })
            })
            .collect();
        let y_axis = Axis {
            id: Some("y-axis"),
            orient: AxisOrient::Left,
            translate: (x0, 0.0),
            extent: (y0, y1),
            tick_size: AXIS_TICK_SIZE,
            ticks: y_ticks,
        };
        (x_axis, y_axis)
    }

    /// Swatches sized by mapping each bucket's extent through the legend scale, plus an axis
    /// with one tick per bucket boundary.
    pub fn render_legend(&self) -> Legend {
        let swatch_height = self.config.legend_height(self.color.colors.len());
        let swatches = self
            .color
            .extents()
            .into_iter()
            .map(|((lo, hi), fill)| {
                let x = self.legend_x.map(lo);
                LegendSwatch {
                    extent: (lo, hi),
                    x,
                    width: (self.legend_x.map(hi) - x).max(0.0),
                    fill,
                }
            })
            .collect();
        let ticks = self
            .color
            .boundaries
            .iter()
            .map(|b| Tick {
                pos: self.legend_x.map(*b),
                label: one_decimal(*b),
            })
            .collect();
        Legend {
            translate: (
                f64::from(self.config.padding),
                f64::from(self.config.height),
            ),
            swatch_height,
            swatches,
            axis: Axis {
                id: None,
                orient: AxisOrient::Bottom,
                translate: (0.0, swatch_height),
                extent: (0.0, f64::from(self.config.legend_width)),
                tick_size: LEGEND_TICK_SIZE,
                ticks,
            },
        }
    }

    /// One rectangle per record, in source order.
    pub fn render_cells(&self) -> Vec<Cell> {
        let (x0, x1) = self.config.x_range();
        let width = (x1 - x0) / self.domains.year_count.max(1) as f64;
        let height = self.y.bandwidth();
        let base = self.data.base_temperature;
        self.data
            .monthly_variance
            .iter()
            .map(|r| {
                let temperature = r.temperature(base);
                Cell {
                    record: *r,
                    temperature,
                    x: self.x.map(f64::from(r.year)),
                    y: self.y.map(r.month),
                    width,
                    height,
                    fill: self.color.color(temperature),
                }
            })
            .collect()
    }

    pub fn scene(&self) -> Scene {
        let (x_axis, y_axis) = self.render_axes();
        Scene {
            config: self.config,
            title: TITLE.to_string(),
            description: self.description(),
            base_temperature: self.data.base_temperature,
            x_axis,
            y_axis,
            legend: self.render_legend(),
            cells: self.render_cells(),
        }
    }
}
