/// Plot specification and rendered output types.

use crate::light::bands::DisplayColor;
use crate::light::normalize::{NormalizedSeries, Scale};
use crate::light::wave::WaveComparison;

/// Output image dimensions (pixels).
pub const PLOT_WIDTH: u32 = 800;
pub const PLOT_HEIGHT: u32 = 400;

/// Frequency bar color (sky blue).
pub const FREQUENCY_COLOR: DisplayColor = DisplayColor::rgb(135, 206, 235);
/// Reference wave color in the comparison plot.
pub const REFERENCE_WAVE_COLOR: DisplayColor = DisplayColor::rgb(137, 180, 250);

/// A single line series.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub color: DisplayColor,
    pub points: Vec<(f64, f64)>,
}

/// Fully specified line plot.
#[derive(Debug, Clone)]
pub struct PlotSpec {
    pub series: Vec<Series>,
    pub x_min: f64,
    pub x_max: f64,
    /// Fixed y range; computed from the data when `None`.
    pub y_range: Option<(f64, f64)>,
    pub title: Option<String>,
}

impl PlotSpec {
    /// Sea wave against light wave, sharing the x domain. The y range is
    /// symmetric and covers the taller trace with 10% headroom, never less
    /// than ±1.1.
    pub fn from_comparison(cmp: &WaveComparison, light_color: DisplayColor) -> Self {
        let x_max = cmp.reference.domain.last().copied().unwrap_or(1.0);
        let peak = cmp
            .reference
            .amplitude
            .iter()
            .chain(&cmp.light.amplitude)
            .map(|a| a.abs())
            .filter(|a| a.is_finite())
            .fold(1.0f64, f64::max);
        Self {
            series: vec![
                Series {
                    label: "Onda de referencia".to_string(),
                    color: REFERENCE_WAVE_COLOR,
                    points: cmp.reference.points().collect(),
                },
                Series {
                    label: "Onda de luz".to_string(),
                    color: light_color,
                    points: cmp.light.points().collect(),
                },
            ],
            x_min: 0.0,
            x_max,
            y_range: Some((-1.1 * peak, 1.1 * peak)),
            title: Some("Onda de mar vs onda de luz".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: DisplayColor,
}

/// Categorical bar chart, one bar per normalized quantity.
#[derive(Debug, Clone)]
pub struct BarChartSpec {
    pub bars: Vec<Bar>,
    pub scale: Scale,
}

impl BarChartSpec {
    /// Wavelength in gray, frequency in sky blue, energy in the band color.
    pub fn from_series(series: &NormalizedSeries, band_color: DisplayColor) -> Self {
        let palette = [DisplayColor::GRAY, FREQUENCY_COLOR, band_color];
        let bars = series
            .iter()
            .enumerate()
            .map(|(i, (label, value))| Bar {
                label: label.to_string(),
                value,
                color: palette[i % palette.len()],
            })
            .collect();
        Self { bars, scale: series.scale }
    }
}

/// A rendered plot image.
#[derive(Debug, Clone)]
pub struct RenderedPlot {
    pub png_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub labels: Vec<String>,
}
