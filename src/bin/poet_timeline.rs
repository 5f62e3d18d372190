use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use poet_timeline::api::{TimelineChart, TimelineStyle};
use poet_timeline::dataset::Dataset;
use poet_timeline::error::TimelineResult;
use poet_timeline::render::SvgRenderer;
use poet_timeline::telemetry;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "poet-timeline",
    version,
    about = "Render the Tang poets life-span timeline"
)]
struct Cli {
    /// Zoom level (1-10); width is 1200px + 300px per level above 1.
    #[arg(long, default_value_t = 5)]
    zoom: i64,

    /// Canvas-local pointer x to draw the hover guide at.
    #[arg(long)]
    hover_x: Option<f64>,

    /// Canvas-local pointer y; a row under it gets the hover accent.
    /// Defaults to the axis baseline.
    #[arg(long, requires = "hover_x")]
    hover_y: Option<f64>,

    /// JSON dataset replacing the built-in poets.
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// JSON layout overrides applied on top of the dataset's layout.
    #[arg(long)]
    layout: Option<PathBuf>,

    /// JSON style overrides.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Print the geometry snapshot as JSON instead of drawing.
    #[arg(long)]
    snapshot: bool,

    /// Output file; `.png` needs the `cairo-backend` feature. Defaults to stdout SVG.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let _ = telemetry::init_default_tracing();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("poet-timeline: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> TimelineResult<()> {
    let mut dataset = match &cli.dataset {
        Some(path) => Dataset::from_json_file(path)?,
        None => Dataset::builtin().clone(),
    };
    if let Some(path) = &cli.layout {
        let raw = std::fs::read_to_string(path)?;
        dataset.layout = dataset.layout.with_json_overrides(&raw)?;
    }

    let mut chart = TimelineChart::new(SvgRenderer::new(), dataset)?;
    if let Some(path) = &cli.style {
        let raw = std::fs::read_to_string(path)?;
        chart.set_style(serde_json::from_str::<TimelineStyle>(&raw)?)?;
    }
    chart.set_zoom_value(cli.zoom)?;
    if let Some(x) = cli.hover_x {
        let y = cli.hover_y.unwrap_or(chart.layout().top_padding);
        chart.pointer_move(x, y);
    }

    if cli.snapshot {
        let json = chart.snapshot_json_pretty()?;
        return emit(cli.output.as_deref(), json.as_bytes());
    }

    if cli.output.as_deref().is_some_and(is_png_path) {
        return render_png(&chart, cli.output.as_deref());
    }

    chart.renderer_mut().set_title("唐代著名诗人生卒时间线");
    chart.render()?;
    info!(
        zoom = %chart.zoom(),
        width = chart.chart_width(),
        poets = chart.dataset().len(),
        "timeline rendered"
    );
    emit(cli.output.as_deref(), chart.renderer().document().as_bytes())
}

fn is_png_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

#[cfg(feature = "cairo-backend")]
fn render_png(chart: &TimelineChart<SvgRenderer>, output: Option<&Path>) -> TimelineResult<()> {
    use poet_timeline::render::{CairoRenderer, Renderer};

    let Some(path) = output else {
        return Ok(());
    };
    let mut renderer = CairoRenderer::new(1, 1)?;
    renderer.render_layered(&chart.build_layered_render_frame()?)?;
    renderer.write_png(path)?;
    info!(path = %path.display(), "timeline png written");
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn render_png(_chart: &TimelineChart<SvgRenderer>, _output: Option<&Path>) -> TimelineResult<()> {
    Err(poet_timeline::TimelineError::InvalidData(
        "png output requires the `cairo-backend` feature".to_owned(),
    ))
}

fn emit(output: Option<&Path>, bytes: &[u8]) -> TimelineResult<()> {
    match output {
        Some(path) => std::fs::write(path, bytes)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
