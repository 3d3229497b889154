use crate::config::ChartConfig;
use crate::report::Bar;
use anyhow::{Context, Result, bail};
use plotters::prelude::*;

/// Draw one bar per solution mean and return the chart as an SVG document.
///
/// Undefined means get no bar. Negative means extend the y axis below zero.
pub fn render_bar_chart(bars: &[Bar], y_desc: &str, cfg: &ChartConfig) -> Result<String> {
    if bars.is_empty() {
        bail!("chart must have at least one bar");
    }

    let heights: Vec<(usize, f64)> = bars
        .iter()
        .enumerate()
        .filter(|(_, bar)| bar.mean.is_finite())
        .map(|(idx, bar)| (idx, bar.mean))
        .collect();
    for bar in bars.iter().filter(|bar| bar.mean < 0.0) {
        log::warn!("{}: negative mean {} in {y_desc} chart", bar.label, bar.mean);
    }

    let y_max = heights.iter().map(|&(_, val)| val).fold(0.0, f64::max);
    let y_min = heights.iter().map(|&(_, val)| val).fold(0.0, f64::min);
    let (y_min, y_max) = if y_max > y_min {
        (1.1 * y_min, 1.1 * y_max)
    } else {
        (0.0, 1.0)
    };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (cfg.width, cfg.height)).into_drawing_area();
        root.fill(&WHITE).context("failed to fill background")?;

        // Discrete ranges are inclusive, so `0..n - 1` holds `n` categories.
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d((0..bars.len() - 1).into_segmented(), y_min..y_max)
            .context("failed to build chart")?;

        let label_of = |seg: &SegmentValue<usize>| match seg {
            SegmentValue::CenterOf(idx) => bars
                .get(*idx)
                .map(|bar| bar.label.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        };
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(cfg.x_label.as_str())
            .y_desc(y_desc)
            .x_label_formatter(&label_of)
            .draw()
            .context("failed to draw mesh")?;

        // Histogram margins are in pixels on each side of a bar.
        let (plot_width, _) = chart.plotting_area().dim_in_pixel();
        let category_width = plot_width as f64 / bars.len() as f64;
        let margin = (category_width * (1.0 - cfg.bar_width) / 2.0) as u32;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BLUE.filled())
                    .margin(margin)
                    .data(heights.iter().copied()),
            )
            .context("failed to draw bars")?;

        root.present().context("failed to finish chart")?;
    }

    Ok(svg)
}
