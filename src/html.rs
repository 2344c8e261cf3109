//! Interactive HTML output: one self-contained page with an inline SVG heatmap and a hover
//! tooltip.
//!
//! Element ids (`#title`, `#description`, `#x-axis`, `#y-axis`, `#legend`, `#tooltip`) and
//! the `data-year` / `data-month` / `data-temp` attributes on every `rect.cell` are stable;
//! automated checks select on them.

use crate::models::Dataset;
use crate::viz::text::escape_html;
use crate::viz::tooltip::{HOVER_OPACITY, TooltipContent};
use crate::viz::types::{Axis, AxisOrient, ChartConfig, Scene};
use crate::viz::render_scene;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const STYLE: &str = r#"body { font-family: sans-serif; text-align: center; }
svg { display: block; margin: 0 auto; }
.tick line, .domain { stroke: #000; fill: none; }
.tick text { font-size: 10px; fill: #000; }
.cell:hover { stroke: #000; stroke-width: 1; }
#tooltip { position: absolute; pointer-events: none; background-color: rgba(0,0,0,0.9); color: #fff; padding: 10px; border-radius: 5px; font-size: 14px; text-align: center; }"#;

/// Build the page for `data`.
pub fn render_page(data: &Dataset, config: ChartConfig) -> Result<String> {
    let scene = render_scene(data, config)?;
    Ok(page_markup(&scene))
}

/// Build the page and write it to `path`.
pub fn write_page<P: AsRef<Path>>(data: &Dataset, path: P, config: ChartConfig) -> Result<()> {
    let path = path.as_ref();
    let page = render_page(data, config)?;
    fs::write(path, page).with_context(|| format!("write {}", path.display()))?;
    log::info!("wrote page {}", path.display());
    Ok(())
}

/// Serialize a laid-out scene as an HTML document.
pub fn page_markup(scene: &Scene) -> String {
    let cfg = &scene.config;
    let mut out = String::with_capacity(256 * scene.cells.len() + 4096);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(&scene.title));
    let _ = writeln!(out, "<style>\n{}\n</style>\n</head>\n<body>", STYLE);
    let _ = writeln!(out, "<h1 id=\"title\">{}</h1>", escape_html(&scene.title));
    let _ = writeln!(
        out,
        "<h2 id=\"description\">{}</h2>",
        escape_html(&scene.description)
    );
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">",
        cfg.width,
        cfg.canvas_height()
    );

    write_legend(&mut out, scene);
    write_axis(&mut out, &scene.x_axis);
    write_axis(&mut out, &scene.y_axis);

    for cell in &scene.cells {
        let tip = TooltipContent::for_record(&cell.record, scene.base_temperature);
        let _ = writeln!(
            out,
            "<rect class=\"cell\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" data-month=\"{}\" data-year=\"{}\" data-temp=\"{}\" data-tooltip=\"{}\"/>",
            num(cell.x),
            num(cell.y),
            num(cell.width),
            num(cell.height),
            cell.fill,
            cell.data_month(),
            cell.data_year(),
            cell.data_temp(),
            escape_html(&tip.to_html()),
        );
    }
    out.push_str("</svg>\n");
    out.push_str("<div id=\"tooltip\" style=\"opacity: 0;\"></div>\n");
    let _ = writeln!(out, "<script>\n{}\n</script>", script(cfg.tooltip_offset));
    out.push_str("</body>\n</html>\n");
    out
}

/// Pointer handlers: move shows the tooltip next to the pointer, leave hides it.
fn script(offset: i32) -> String {
    format!(
        r#"(function () {{
  var tooltip = document.getElementById("tooltip");
  document.querySelectorAll("rect.cell").forEach(function (cell) {{
    cell.addEventListener("mousemove", function (e) {{
      tooltip.style.opacity = "{opacity}";
      tooltip.style.left = (e.pageX + {offset}) + "px";
      tooltip.style.top = (e.pageY + {offset}) + "px";
      tooltip.setAttribute("data-year", cell.getAttribute("data-year"));
      tooltip.innerHTML = cell.getAttribute("data-tooltip");
    }});
    cell.addEventListener("mouseout", function () {{
      tooltip.style.opacity = "0";
    }});
  }});
}})();"#,
        opacity = HOVER_OPACITY,
        offset = offset
    )
}

fn write_legend(out: &mut String, scene: &Scene) {
    let legend = &scene.legend;
    let _ = writeln!(
        out,
        "<g id=\"legend\" class=\"legend\" transform=\"translate({},{})\">",
        num(legend.translate.0),
        num(legend.translate.1)
    );
    out.push_str("<g>\n");
    for s in &legend.swatches {
        let _ = writeln!(
            out,
            "<rect x=\"{}\" y=\"0\" width=\"{}\" height=\"{}\" style=\"fill: {}\"/>",
            num(s.x),
            num(s.width),
            num(legend.swatch_height),
            s.fill
        );
    }
    out.push_str("</g>\n");
    write_axis(out, &legend.axis);
    out.push_str("</g>\n");
}

fn write_axis(out: &mut String, axis: &Axis) {
    let id = axis
        .id
        .map(|id| format!(" id=\"{}\"", id))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "<g{} transform=\"translate({},{})\">",
        id,
        num(axis.translate.0),
        num(axis.translate.1)
    );
    let (e0, e1) = axis.extent;
    let size = num(axis.tick_size);
    match axis.orient {
        AxisOrient::Bottom => {
            let _ = writeln!(
                out,
                "<path class=\"domain\" d=\"M{},0H{}\"/>",
                num(e0),
                num(e1)
            );
            for t in &axis.ticks {
                let _ = writeln!(
                    out,
                    "<g class=\"tick\" transform=\"translate({},0)\"><line y2=\"{}\"/><text y=\"{}\" dy=\"0.71em\" text-anchor=\"middle\">{}</text></g>",
                    num(t.pos),
                    size,
                    num(axis.tick_size + 3.0),
                    escape_html(&t.label)
                );
            }
        }
        AxisOrient::Left => {
            let _ = writeln!(
                out,
                "<path class=\"domain\" d=\"M0,{}V{}\"/>",
                num(e0),
                num(e1)
            );
            for t in &axis.ticks {
                let _ = writeln!(
                    out,
                    "<g class=\"tick\" transform=\"translate(0,{})\"><line x2=\"-{}\"/><text x=\"-{}\" dy=\"0.32em\" text-anchor=\"end\">{}</text></g>",
                    num(t.pos),
                    size,
                    num(axis.tick_size + 3.0),
                    escape_html(&t.label)
                );
            }
        }
    }
    out.push_str("</g>\n");
}

/// Compact coordinate: at most three decimals, trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
