//! Log-log runtime chart rendered to SVG.

use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use plotters::prelude::*;

use crate::complexity::FittedModel;
use crate::harness::{Algorithm, Measurements};

const CHART_SIZE: (u32, u32) = (1024, 768);
const CHART_ORDER: [Algorithm; 3] = [Algorithm::Naive, Algorithm::Bubble, Algorithm::Reference];

fn series_color(algorithm: Algorithm) -> RGBColor {
    match algorithm {
        Algorithm::Naive => RGBColor(31, 119, 180),
        Algorithm::Bubble => RGBColor(255, 127, 14),
        Algorithm::Reference => RGBColor(44, 160, 44),
    }
}

fn model_color(index: usize) -> RGBColor {
    [RGBColor(214, 39, 40), RGBColor(148, 103, 189)][index % 2]
}

/// Points that can be placed on log axes.
fn log_points(scales: &[usize], values: impl IntoIterator<Item = f64>) -> Vec<(f64, f64)> {
    scales
        .iter()
        .zip(values)
        .map(|(&n, v)| (n as f64, v))
        .filter(|&(n, v)| n > 0.0 && v > 0.0 && v.is_finite())
        .collect()
}

/// Render measured durations and fitted models on log-log axes.
pub fn render(path: &Path, measurements: &Measurements, models: &[FittedModel]) -> Result<()> {
    let scales = &measurements.scales;

    let measured: Vec<(Algorithm, Vec<(f64, f64)>)> = CHART_ORDER
        .into_iter()
        .map(|algorithm| {
            let points = log_points(scales, measurements.durations(algorithm).iter().copied());
            if points.len() < scales.len() {
                warn!(
                    "Dropped {} non-positive {} durations from the chart",
                    scales.len() - points.len(),
                    algorithm.label()
                );
            }
            (algorithm, points)
        })
        .collect();

    let predicted: Vec<(FittedModel, Vec<(f64, f64)>)> = models
        .iter()
        .map(|fit| (*fit, log_points(scales, scales.iter().map(|&n| fit.predict(n as f64)))))
        .collect();

    let all_points = measured
        .iter()
        .flat_map(|(_, points)| points)
        .chain(predicted.iter().flat_map(|(_, points)| points));
    let (mut x_min, mut x_max, mut y_min, mut y_max) = (f64::MAX, f64::MIN, f64::MAX, f64::MIN);
    for &(x, y) in all_points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if x_min > x_max {
        // Nothing drawable; keep the axes valid anyway.
        (x_min, x_max, y_min, y_max) = (1.0, 10.0, 1e-9, 1.0);
    }

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Sorting runtime versus input size", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(
            (x_min / 1.5..x_max * 1.5).log_scale(),
            (y_min / 2.0..y_max * 2.0).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc("N")
        .y_desc("Runtime [s]")
        .y_label_formatter(&|y| format!("{:.0e}", y))
        .draw()?;

    for (algorithm, points) in measured {
        let color = series_color(algorithm);
        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))?
            .label(format!("Results: {}", algorithm.label()))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart.draw_series(PointSeries::of_element(
            points,
            4,
            &color,
            &|coord, size, style| Circle::new(coord, size, style.filled()),
        ))?;
    }

    for (index, (fit, points)) in predicted.into_iter().enumerate() {
        let style = model_color(index).stroke_width(2);
        chart
            .draw_series(LineSeries::new(points, style))?
            .label(fit.model.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("failed to write chart to {}", path.display()))?;
    info!("Chart written to {}", path.display());
    Ok(())
}
