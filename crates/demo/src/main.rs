// File: crates/demo/src/main.rs
// Summary: Demo streams CSV (or synthetic) samples into a strip chart on a simulated panel and writes PNG frames.

use anyhow::{Context, Result};
use chart_core::series::styles;
use chart_core::theme::{self, Theme};
use chart_core::types::MAX_SERIES;
use chart_core::{
    AdvancePolicy, BarChart, BarConfig, Card, CardConfig, Gauge, GaugeConfig, LegendPosition, LineGraph,
    LineGraphConfig, PieChart, PieConfig,
};
use chart_render_skia::{PanelDevice, SkiaPanel};
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const PANEL: Size = Size::new(320, 240);
const EXPORT_SCALE: u32 = 2;
const SYNTHETIC_SAMPLES: usize = 700;

struct Feed {
    names: Vec<String>,
    rows: Vec<Vec<f32>>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // stripchart-demo [input.csv|-] [theme] [wrap|scroll]
    let mut args = std::env::args().skip(1);
    let input = args.next().filter(|a| a != "-");
    let theme = theme::find(&args.next().unwrap_or_else(|| "dark".to_string()));
    let policy = match args.next().as_deref() {
        Some("wrap") => AdvancePolicy::Wrap,
        Some("scroll") | None => AdvancePolicy::Scroll,
        Some(other) => anyhow::bail!("unknown policy '{other}', expected wrap or scroll"),
    };

    let feed = match &input {
        Some(path) => load_csv(Path::new(path)).with_context(|| format!("failed to load CSV '{path}'"))?,
        None => synthetic(SYNTHETIC_SAMPLES),
    };
    if feed.rows.is_empty() {
        anyhow::bail!("no samples loaded, check headers/delimiter.");
    }
    tracing::info!(
        samples = feed.rows.len(),
        series = feed.names.len(),
        theme = theme.name,
        ?policy,
        "feed ready"
    );

    let frames = run_strip_chart(&feed, &theme, policy)?;
    tracing::info!(frames, "strip chart frames written");

    let out = out_dir().join("dashboard.png");
    render_dashboard(&feed, &theme)?.save_png(&out)?;
    tracing::info!(path = %out.display(), "dashboard written");
    Ok(())
}

/// Feed every sample through a full-panel line graph, saving a frame once
/// per plot width of samples and once at the end.
fn run_strip_chart(feed: &Feed, theme: &Theme, policy: AdvancePolicy) -> Result<usize> {
    let (y_min, y_max) = padded_range(&feed.rows);
    let names: Vec<&str> = feed.names.iter().map(String::as_str).collect();
    let config = LineGraphConfig {
        bounds: Rectangle::new(Point::zero(), PANEL),
        y_min,
        y_max,
        y_step: nice_step(y_max - y_min),
        title: "Live samples".to_string(),
        series: styles(names.len(), &names, &[]),
        policy,
        ..LineGraphConfig::default()
    }
    .with_theme(theme);

    let mut dev = panel();
    let mut graph = LineGraph::new(config, &mut dev)?;
    let width = graph.geometry().width as usize;
    let mut frames = 0;
    for (i, row) in feed.rows.iter().enumerate() {
        for (s, v) in row.iter().enumerate() {
            graph.plot_point(&mut dev, s, *v);
        }
        if (i + 1) % width == 0 {
            save_frame(&dev, policy, frames)?;
            frames += 1;
        }
        graph.advance(&mut dev);
    }
    save_frame(&dev, policy, frames)?;
    Ok(frames + 1)
}

fn render_dashboard(feed: &Feed, theme: &Theme) -> Result<SkiaPanel> {
    let (y_min, y_max) = padded_range(&feed.rows);
    let last = feed.rows.last().cloned().unwrap_or_default();
    let names: Vec<&str> = feed.names.iter().map(String::as_str).collect();
    let mut dev = panel();

    let pie = PieConfig {
        bounds: Rectangle::new(Point::zero(), Size::new(160, 120)),
        title: "Share".to_string(),
        slices: styles(names.len(), &names, &[]),
        ..PieConfig::default()
    }
    .with_theme(theme);
    let mut pie = PieChart::new(pie, &mut dev)?;
    pie.set_data(&last);
    pie.draw(&mut dev);

    let bars = BarConfig {
        bounds: Rectangle::new(Point::new(160, 0), Size::new(160, 120)),
        title: "Latest".to_string(),
        legend: LegendPosition::Bottom,
        bars: styles(names.len(), &names, &[]),
        ..BarConfig::default()
    }
    .with_theme(theme);
    let mut bars = BarChart::new(bars, &mut dev)?;
    bars.set_data(&last);
    bars.draw(&mut dev);

    let gauge = GaugeConfig {
        center: Point::new(80, 180),
        radius: 52,
        min: y_min,
        max: y_max,
        ..GaugeConfig::default()
    }
    .with_theme(theme);
    let mut gauge = Gauge::new(gauge, &mut dev)?;
    gauge.set_value(&mut dev, last.first().copied().unwrap_or(y_min));

    let card = CardConfig {
        bounds: Rectangle::new(Point::new(180, 140), Size::new(120, 80)),
        title: "Samples".to_string(),
        ..CardConfig::default()
    }
    .with_theme(theme);
    let mut card = Card::new(card, &mut dev);
    card.set_value(&mut dev, feed.rows.len().to_string());

    Ok(dev.into_inner())
}

fn panel() -> PanelDevice {
    SkiaPanel::new(PANEL.width, PANEL.height).with_scale(EXPORT_SCALE).into_device()
}

fn out_dir() -> PathBuf {
    PathBuf::from("target/out")
}

fn save_frame(dev: &PanelDevice, policy: AdvancePolicy, index: usize) -> Result<()> {
    let tag = match policy {
        AdvancePolicy::Wrap => "wrap",
        AdvancePolicy::Scroll => "scroll",
    };
    let path = out_dir().join(format!("stripchart_{tag}_{index:03}.png"));
    dev.target().save_png(&path)?;
    tracing::debug!(path = %path.display(), "frame saved");
    Ok(())
}

/// Value range over every sample with 5% headroom; flat data gets a unit band.
fn padded_range(rows: &[Vec<f32>]) -> (f32, f32) {
    let (lo, hi) = rows
        .iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 100.0);
    }
    if hi - lo <= f32::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

/// Round step giving roughly five ticks.
fn nice_step(span: f32) -> f32 {
    let raw = span / 5.0;
    let mag = 10f32.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm < 1.5 {
        1.0
    } else if norm < 3.5 {
        2.0
    } else if norm < 7.5 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Three phase-shifted waves with a slow drift, in 0..100.
fn synthetic(n: usize) -> Feed {
    let rows = (0..n)
        .map(|i| {
            let t = i as f32 * 0.05;
            vec![
                50.0 + 30.0 * t.sin() + 5.0 * (t * 7.0).sin(),
                40.0 + 25.0 * (t * 0.6 + 1.0).cos(),
                20.0 + 10.0 * (t * 0.25).sin() + (i % 40) as f32 * 0.5,
            ]
        })
        .collect();
    Feed { names: vec!["sine".into(), "cosine".into(), "drift".into()], rows }
}

/// One column per series, headers as names. Non-numeric columns are skipped,
/// and at most five numeric columns are kept.
fn load_csv(path: &Path) -> Result<Feed> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();

    let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;
    let numeric: Vec<usize> = (0..headers.len())
        .filter(|&i| {
            records
                .iter()
                .filter_map(|r| r.get(i))
                .all(|s| s.trim().parse::<f32>().is_ok())
        })
        .take(MAX_SERIES)
        .collect();
    if numeric.is_empty() {
        anyhow::bail!("no numeric columns in {}", path.display());
    }
    tracing::debug!(?headers, ?numeric, "csv columns");

    let rows = records
        .iter()
        .map(|r| {
            numeric
                .iter()
                .map(|&i| r.get(i).and_then(|s| s.trim().parse::<f32>().ok()).unwrap_or(f32::NAN))
                .collect()
        })
        .collect();
    Ok(Feed { names: numeric.iter().map(|&i| headers[i].clone()).collect(), rows })
}
