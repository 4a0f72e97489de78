// File: crates/demo/src/main.rs
// Summary: Headless demo; loads a schedule (JSON or CSV), renders the chart to PNG, optionally prints a hover tooltip.

use anyhow::{Context, Result};
use schedule_core::telemetry::init_default_tracing;
use schedule_core::{
    ChartConfig, ChartOptions, HeadlessTooltip, Schedule, ScheduleChart, SkiaSurface, Viewport,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

struct Args {
    input: PathBuf,
    out: Option<PathBuf>,
    viewport: Viewport,
    theme: Option<String>,
    config: Option<PathBuf>,
    hover_x: Option<f32>,
}

fn main() -> Result<()> {
    let _ = init_default_tracing();
    let args = parse_args(std::env::args().skip(1))?;

    let schedule = load_schedule(&args.input)
        .with_context(|| format!("failed to load schedule '{}'", args.input.display()))?;
    if schedule.is_empty() {
        anyhow::bail!("schedule '{}' has no rows", args.input.display());
    }
    info!(rows = schedule.len(), years = schedule.total_years(), "loaded schedule");

    let mut opts = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            ChartConfig::from_json(&text)?.into_options()
        }
        None => ChartOptions::default(),
    };
    if let Some(name) = &args.theme {
        opts.theme = schedule_core::theme::find(name);
    }

    let mut chart = ScheduleChart::new(
        Arc::new(schedule),
        SkiaSurface::new()?,
        HeadlessTooltip::default(),
        args.viewport,
        opts,
    )?;

    let out = args.out.clone().unwrap_or_else(|| out_name_for(&args.input));
    chart.surface_mut().write_png(&out)?;
    let (bw, bh) = chart.surface().backing_size();
    println!("Wrote {} ({}x{} px)", out.display(), bw, bh);

    if let Some(x) = args.hover_x {
        match chart.pointer_move(x) {
            Some(index) => {
                let tip = chart.tooltip();
                if let Some(content) = &tip.content {
                    println!("Hover x={x} -> period {index} at ({:.0}, {:.0})", tip.position.x, tip.position.y);
                    println!("  {}", content.title);
                    println!("  principal: {}", content.principal);
                    println!("  interest:  {}", content.interest);
                }
            }
            None => println!("Hover x={x} -> no period"),
        }
    }
    Ok(())
}

fn usage() -> &'static str {
    "usage: schedule-demo [SCHEDULE.json|.csv] [--out PNG] [--width W] [--height H] [--dpr R] \
     [--theme NAME] [--config CONFIG.json] [--hover X]"
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        input: PathBuf::from("demos/schedule_sample.json"),
        out: None,
        viewport: Viewport::default(),
        theme: None,
        config: None,
        hover_x: None,
    };
    while let Some(arg) = it.next() {
        let mut value = |flag: &str| it.next().with_context(|| format!("{flag} needs a value\n{}", usage()));
        match arg.as_str() {
            "--out" => args.out = Some(PathBuf::from(value("--out")?)),
            "--width" => args.viewport.width = value("--width")?.parse().context("--width")?,
            "--height" => args.viewport.height = value("--height")?.parse().context("--height")?,
            "--dpr" => args.viewport.pixel_ratio = value("--dpr")?.parse().context("--dpr")?,
            "--theme" => args.theme = Some(value("--theme")?),
            "--config" => args.config = Some(PathBuf::from(value("--config")?)),
            "--hover" => args.hover_x = Some(value("--hover")?.parse().context("--hover")?),
            "-h" | "--help" => {
                println!("{}", usage());
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag {flag}\n{}", usage()),
            path => args.input = PathBuf::from(path),
        }
    }
    Ok(args)
}

/// JSON array or CSV, chosen by extension.
fn load_schedule(path: &Path) -> Result<Schedule> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase());
    let schedule = match ext.as_deref() {
        Some("csv") => {
            let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
            Schedule::from_csv_reader(file)?
        }
        _ => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            Schedule::from_json(&text)?
        }
    };
    Ok(schedule)
}

/// Produce output file name like target/out/schedule_<stem>.png
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    out.push(format!("schedule_{stem}.png"));
    out
}
