use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use gtv_heatmap::models::DEFAULT_DATASET_URL;
use gtv_heatmap::viz::ChartConfig;
use gtv_heatmap::{Client, html, stats, storage, viz};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gtv",
    version,
    about = "Render the monthly global temperature variance dataset as a heatmap"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the dataset and write the heatmap (and optionally exports and stats).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Dataset URL.
    #[arg(long, default_value = DEFAULT_DATASET_URL, conflicts_with = "input")]
    url: String,
    /// Read the dataset from a local JSON file instead of the network.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Interactive HTML output.
    #[arg(long, default_value = "heatmap.html")]
    out: PathBuf,
    /// Also draw a static snapshot at the given path (.svg or .png).
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Canvas width (default 1100).
    #[arg(long, default_value_t = 1100)]
    width: u32,
    /// Plot height; the legend band is added below (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Padding around the plot (default 60).
    #[arg(long, default_value_t = 60)]
    padding: u32,
    /// Width of the colour legend (default 400).
    #[arg(long, default_value_t = 400)]
    legend_width: u32,
    /// Save records (with absolute temperature) as CSV.
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Save the dataset as JSON.
    #[arg(long)]
    json: Option<PathBuf>,
    /// Print per-month statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => format!("{:.2}", x),
        _ => "NA".to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let data = match &args.input {
        Some(path) => storage::load_json(path)?,
        None => Client::new(args.url.as_str())?.fetch()?,
    };

    let config = ChartConfig {
        width: args.width,
        height: args.height,
        padding: args.padding,
        legend_width: args.legend_width,
        ..ChartConfig::default()
    };

    html::write_page(&data, &args.out, config)?;
    eprintln!(
        "Wrote heatmap of {} records to {}",
        data.monthly_variance.len(),
        args.out.display()
    );

    if let Some(path) = args.snapshot.as_ref() {
        viz::plot_snapshot(&data, path, config)?;
        eprintln!("Wrote snapshot to {}", path.display());
    }

    if let Some(path) = args.csv.as_ref() {
        storage::save_csv(&data, path)?;
        eprintln!("Saved {} rows to {}", data.monthly_variance.len(), path.display());
    }
    if let Some(path) = args.json.as_ref() {
        storage::save_json(&data, path)?;
        eprintln!("Saved dataset to {}", path.display());
    }

    if args.stats {
        for s in stats::monthly_summary(&data) {
            println!(
                "{:>9}  count={} min={} max={} mean={} median={}",
                viz::text::month_name(s.month).unwrap_or("?"),
                s.count,
                fmt_opt(s.min),
                fmt_opt(s.max),
                fmt_opt(s.mean),
                fmt_opt(s.median)
            );
        }
        let years = stats::yearly_means(&data);
        let coolest = years.iter().min_by(|a, b| a.1.total_cmp(&b.1));
        let warmest = years.iter().max_by(|a, b| a.1.total_cmp(&b.1));
        if let (Some((cy, ct)), Some((wy, wt))) = (coolest, warmest) {
            println!("coolest year {} mean={:.2}", cy, ct);
            println!("warmest year {} mean={:.2}", wy, wt);
        }
    }

    Ok(())
}
