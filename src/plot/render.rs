/// Plot rendering pipeline: bar/line specs → PNG bytes via plotters.

use crate::error::{Error, Result};
use crate::light::bands::DisplayColor;
use crate::light::normalize::Scale;
use crate::plot::types::*;
use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use plotters::prelude::*;

/// Background color (Catppuccin Mocha base).
const BG_COLOR: RGBColor = RGBColor(30, 30, 46);
/// Axis / grid color.
const AXIS_COLOR: RGBColor = RGBColor(88, 91, 112);
/// Fraction of each category slot left empty on either side of a bar.
const BAR_GAP: f64 = 0.15;

fn rgb(color: DisplayColor) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// Render a bar chart. Logarithmic charts plot `log10(value)`, so each grid
/// unit on the y axis is one decade.
pub fn render_bar_chart(spec: &BarChartSpec) -> Result<RenderedPlot> {
    let width = PLOT_WIDTH;
    let height = PLOT_HEIGHT;
    let mut buf = vec![0u8; (width * height * 3) as usize];

    let heights: Vec<Option<f64>> =
        spec.bars.iter().map(|b| bar_height(b.value, spec.scale)).collect();
    let (y_min, y_max) = bar_y_range(&heights, spec.scale);
    let base = match spec.scale {
        Scale::Linear => 0.0,
        Scale::Logarithmic => y_min,
    };

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&BG_COLOR).map_err(|e| Error::plot(format!("fill: {}", e)))?;

        let slots = spec.bars.len().max(1) as f64;
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_2d(0.0..slots, y_min..y_max)
            .map_err(|e| Error::plot(format!("chart build: {}", e)))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .axis_style(AXIS_COLOR)
            .bold_line_style(AXIS_COLOR.mix(0.3))
            .light_line_style(AXIS_COLOR.mix(0.1))
            .x_labels(0)
            .y_labels(0)
            .draw()
            .map_err(|e| Error::plot(format!("mesh: {}", e)))?;

        let rects = spec.bars.iter().zip(&heights).enumerate().filter_map(|(i, (bar, h))| {
            let top = (*h)?;
            let x = i as f64;
            Some(Rectangle::new(
                [(x + BAR_GAP, base), (x + 1.0 - BAR_GAP, top)],
                rgb(bar.color).filled(),
            ))
        });
        chart
            .draw_series(rects)
            .map_err(|e| Error::plot(format!("draw bars: {}", e)))?;

        root.present().map_err(|e| Error::plot(format!("present: {}", e)))?;
    }

    let png_bytes = encode_rgb_to_png(&buf, width, height)?;

    Ok(RenderedPlot {
        png_bytes,
        width,
        height,
        labels: spec.bars.iter().map(|b| b.label.clone()).collect(),
    })
}

/// Render a line plot to a PNG image.
pub fn render_line_plot(spec: &PlotSpec) -> Result<RenderedPlot> {
    let width = PLOT_WIDTH;
    let height = PLOT_HEIGHT;
    let mut buf = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&BG_COLOR).map_err(|e| Error::plot(format!("fill: {}", e)))?;

        let (y_min, y_max) = spec.y_range.unwrap_or_else(|| compute_y_range(&spec.series));

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_2d(spec.x_min..spec.x_max, y_min..y_max)
            .map_err(|e| Error::plot(format!("chart build: {}", e)))?;

        chart
            .configure_mesh()
            .axis_style(AXIS_COLOR)
            .bold_line_style(AXIS_COLOR.mix(0.3))
            .light_line_style(AXIS_COLOR.mix(0.1))
            .x_labels(0)
            .y_labels(0)
            .draw()
            .map_err(|e| Error::plot(format!("mesh: {}", e)))?;

        for series in &spec.series {
            chart
                .draw_series(LineSeries::new(
                    series.points.iter().copied(),
                    rgb(series.color).stroke_width(2),
                ))
                .map_err(|e| Error::plot(format!("draw series: {}", e)))?;
        }

        root.present().map_err(|e| Error::plot(format!("present: {}", e)))?;
    }

    let png_bytes = encode_rgb_to_png(&buf, width, height)?;

    Ok(RenderedPlot {
        png_bytes,
        width,
        height,
        labels: spec.series.iter().map(|s| s.label.clone()).collect(),
    })
}

/// Bar top in chart coordinates, `None` when the value cannot be drawn.
fn bar_height(value: f64, scale: Scale) -> Option<f64> {
    let h = match scale {
        Scale::Linear => value,
        Scale::Logarithmic if value > 0.0 => value.log10(),
        Scale::Logarithmic => return None,
    };
    h.is_finite().then_some(h)
}

fn bar_y_range(heights: &[Option<f64>], scale: Scale) -> (f64, f64) {
    let finite = heights.iter().flatten().copied();
    match scale {
        Scale::Linear => {
            let top = finite.fold(0.0f64, f64::max);
            if top <= 0.0 {
                (0.0, 1.0)
            } else {
                (0.0, top * 1.1)
            }
        }
        Scale::Logarithmic => {
            let (lo, hi) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), h| {
                (lo.min(h), hi.max(h))
            });
            if !lo.is_finite() || !hi.is_finite() {
                return (0.0, 1.0);
            }
            // Whole decades with one spare on each side.
            (lo.floor() - 1.0, hi.ceil() + 1.0)
        }
    }
}

/// Compute a y-axis range from the data, with padding.
fn compute_y_range(all_series: &[Series]) -> (f64, f64) {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for series in all_series {
        for &(_, y) in &series.points {
            if y.is_finite() {
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
    }

    // Fallback for empty/constant data
    if !y_min.is_finite() || !y_max.is_finite() {
        return (-1.0, 1.0);
    }
    if (y_max - y_min).abs() < 1e-10 {
        return (y_min - 1.0, y_max + 1.0);
    }

    let pad = (y_max - y_min) * 0.1;
    (y_min - pad, y_max + pad)
}

/// Encode a raw RGB pixel buffer to PNG.
fn encode_rgb_to_png(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    let encoder = PngEncoder::new(&mut png);
    encoder
        .write_image(rgb, width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| Error::plot(format!("PNG encode: {}", e)))?;
    Ok(png)
}
