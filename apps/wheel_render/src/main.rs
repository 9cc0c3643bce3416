use anyhow::Context;
use clap::Parser;
use natal_wheel::{load_chart_data_from_json, load_wheel_settings, WheelSettings, WheelView};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a natal chart wheel to SVG")]
struct Args {
    #[arg(help = "Path to chart JSON (planets, houses, aspects)")]
    chart: PathBuf,

    #[arg(long, help = "Wheel settings TOML")]
    settings: Option<PathBuf>,

    #[arg(long, short, help = "Output SVG path; stdout when omitted")]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = 0)]
    zoom_in: u32,

    #[arg(long, default_value_t = 0)]
    zoom_out: u32,

    #[arg(long)]
    hide_aspects: bool,

    #[arg(long, help = "Body to focus; its description goes to stderr")]
    focus: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => load_wheel_settings(path)?,
        None => WheelSettings::default(),
    };

    let json = fs::read_to_string(&args.chart)
        .with_context(|| format!("Could not read chart {}", args.chart.display()))?;
    let data = load_chart_data_from_json(&json)
        .with_context(|| format!("Invalid chart {}", args.chart.display()))?;

    let mut wheel = WheelView::with_settings(Some(data), settings);
    for _ in 0..args.zoom_in {
        wheel.zoom_in();
    }
    for _ in 0..args.zoom_out {
        wheel.zoom_out();
    }
    if args.hide_aspects {
        wheel.toggle_aspects();
    }
    if let Some(name) = &args.focus {
        if !wheel.set_focused_body(name) {
            log::warn!("No body named {:?} in chart", name);
        }
    }

    let svg = wheel.to_svg();
    match &args.output {
        Some(path) => {
            fs::write(path, &svg).with_context(|| format!("Could not write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{}", svg),
    }

    if let Some(tooltip) = wheel.tooltip() {
        eprintln!("{}", tooltip.text());
    }
    Ok(())
}
