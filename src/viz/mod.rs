//! Visualization: turn a dataset into a heatmap scene and draw it.
//!
//! - `scene`: scales plus layout of axes, legend and cells (backend independent)
//! - `tooltip`: hover content and show/hide state
//! - static snapshots to **SVG** or **PNG** through plotters (this module)
//! - interactive HTML lives in `crate::html`

pub mod scene;
pub mod text;
pub mod tooltip;
pub mod types;

pub use scene::Heatmap;
pub use tooltip::{Tooltip, TooltipContent};
pub use types::{Axis, AxisOrient, Cell, ChartConfig, Legend, LegendSwatch, Scene, Tick};

use crate::models::Dataset;
use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use text::fit_font_px;

/// One-time registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

/// Lay out the full chart for `data`.
pub fn render_scene(data: &Dataset, config: ChartConfig) -> Result<Scene> {
    Ok(Heatmap::new(data, config)?.scene())
}

/// Draw a static heatmap. The backend is chosen by extension: `.svg` → SVG, anything else →
/// bitmap (PNG by default).
pub fn plot_snapshot<P: AsRef<Path>>(data: &Dataset, out_path: P, config: ChartConfig) -> Result<()> {
    let scene = render_scene(data, config)?;
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let dims = (config.width, config.canvas_height());

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), dims).into_drawing_area();
        draw_scene(&root, &scene)?;
        root.present().map_err(|e| anyhow!("{:?}", e))?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), dims).into_drawing_area();
        draw_scene(&root, &scene)?;
        root.present().map_err(|e| anyhow!("{:?}", e))?;
    }
    log::info!("wrote snapshot {}", out_path.display());
    Ok(())
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

fn draw_scene<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, scene: &Scene) -> Result<()> {
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let cfg = &scene.config;
    let heading = TextStyle::from((FontFamily::SansSerif, cfg.font_px + 8))
        .pos(Pos::new(HPos::Center, VPos::Top));
    let sub = TextStyle::from((FontFamily::SansSerif, cfg.font_px + 4))
        .pos(Pos::new(HPos::Center, VPos::Top));
    let centre = px(f64::from(cfg.width) / 2.0);
    root.draw(&Text::new(scene.title.as_str(), (centre, 6), heading))
        .map_err(|e| anyhow!("{:?}", e))?;
    root.draw(&Text::new(
        scene.description.as_str(),
        (centre, 6 + cfg.font_px as i32 + 14),
        sub,
    ))
    .map_err(|e| anyhow!("{:?}", e))?;

    for cell in &scene.cells {
        root.draw(&Rectangle::new(
            [
                (px(cell.x), px(cell.y)),
                (px(cell.x + cell.width), px(cell.y + cell.height)),
            ],
            RGBColor::from(cell.fill).filled(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }

    draw_axis(root, &scene.x_axis, (0.0, 0.0), cfg.font_px, cfg.padding)?;
    draw_axis(root, &scene.y_axis, (0.0, 0.0), cfg.font_px, cfg.padding)?;

    let legend = &scene.legend;
    let (lx, ly) = legend.translate;
    for s in &legend.swatches {
        root.draw(&Rectangle::new(
            [
                (px(lx + s.x), px(ly)),
                (px(lx + s.x + s.width), px(ly + legend.swatch_height)),
            ],
            RGBColor::from(s.fill).filled(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }
    draw_axis(root, &legend.axis, legend.translate, cfg.font_px, cfg.padding)
}

/// Draw the domain line, tick marks and labels of `axis`, offset by `origin`.
fn draw_axis<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    axis: &Axis,
    origin: (f64, f64),
    font_px: u32,
    gutter_px: u32,
) -> Result<()> {
    let ox = origin.0 + axis.translate.0;
    let oy = origin.1 + axis.translate.1;
    let line = BLACK.stroke_width(1);
    let (e0, e1) = axis.extent;
    let gap = 3.0;

    match axis.orient {
        AxisOrient::Bottom => {
            root.draw(&PathElement::new(
                vec![(px(ox + e0), px(oy)), (px(ox + e1), px(oy))],
                line,
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
            let style = TextStyle::from((FontFamily::SansSerif, font_px))
                .pos(Pos::new(HPos::Center, VPos::Top));
            for t in &axis.ticks {
                let x = px(ox + t.pos);
                root.draw(&PathElement::new(
                    vec![(x, px(oy)), (x, px(oy + axis.tick_size))],
                    line,
                ))
                .map_err(|e| anyhow!("{:?}", e))?;
                root.draw(&Text::new(
                    t.label.as_str(),
                    (x, px(oy + axis.tick_size + gap)),
                    style.clone(),
                ))
                .map_err(|e| anyhow!("{:?}", e))?;
            }
        }
        AxisOrient::Left => {
            root.draw(&PathElement::new(
                vec![(px(ox), px(oy + e0)), (px(ox), px(oy + e1))],
                line,
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
            // Month names are wide; shrink them to fit the left gutter.
            let room = (gutter_px as f64 - axis.tick_size - gap).max(1.0) as u32;
            let label_px = fit_font_px(axis.ticks.iter().map(|t| t.label.as_str()), font_px, room);
            let style = TextStyle::from((FontFamily::SansSerif, label_px))
                .pos(Pos::new(HPos::Right, VPos::Center));
            for t in &axis.ticks {
                let y = px(oy + t.pos);
                root.draw(&PathElement::new(
                    vec![(px(ox - axis.tick_size), y), (px(ox), y)],
                    line,
                ))
                .map_err(|e| anyhow!("{:?}", e))?;
                root.draw(&Text::new(
                    t.label.as_str(),
                    (px(ox - axis.tick_size - gap), y),
                    style.clone(),
                ))
                .map_err(|e| anyhow!("{:?}", e))?;
            }
        }
    }
    Ok(())
}
