//! gtv_heatmap
//!
//! Fetch the monthly global land-surface temperature dataset and render it as a heatmap.
//! Pairs with the `gtv` CLI.
//!
//! ### Features
//! - Fetch and validate the dataset (or load it from a local JSON file)
//! - Year, month, threshold-colour and legend scales
//! - Interactive HTML page with axes, colour legend and hover tooltip
//! - Static PNG/SVG snapshot of the same chart
//! - CSV/JSON export and per-month summary statistics
//!
//! ### Example
//! ```no_run
//! use gtv_heatmap::{Client, viz::ChartConfig};
//!
//! let data = Client::default().fetch()?;
//! gtv_heatmap::html::write_page(&data, "heatmap.html", ChartConfig::default())?;
//! gtv_heatmap::viz::plot_snapshot(&data, "heatmap.png", ChartConfig::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod html;
pub mod models;
pub mod palette;
pub mod scale;
pub mod stats;
pub mod storage;
pub mod viz;

pub use api::Client;
pub use models::{Dataset, DatasetError, Domains, MonthlyVariance, compute_domains};
pub use scale::build_color_scale;
