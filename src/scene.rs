//! Everything one interaction needs on screen, computed from scratch from the
//! current selection.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::light::bands::{ColorBandTable, DisplayColor};
use crate::light::classify::BandClassifier;
use crate::light::constants::PhysicalConstants;
use crate::light::normalize::{representative_wavelength, NormalizedSeries, Normalizer, Scale};
use crate::light::properties::{PhysicalSample, PropertyCalculator};
use crate::light::summary::Summary;
use crate::light::wave::{WaveComparison, WaveSampler};
use crate::plot::render::{render_bar_chart, render_line_plot};
use crate::plot::types::{BarChartSpec, PlotSpec, RenderedPlot};

#[derive(Debug, Clone)]
pub struct Scene {
    pub title: String,
    pub sample: PhysicalSample,
    pub summary: Summary,
    pub series: NormalizedSeries,
    pub band_color: DisplayColor,
    pub plot: RenderedPlot,
    /// Set for the wave comparison: oscillation frequency of the light trace.
    pub light_oscillation: Option<f64>,
}

impl Scene {
    /// Headless `--json` payload.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "summary": self.summary,
            "sample": self.sample,
            "series": self.series,
        })
    }
}

struct Derived {
    sample: PhysicalSample,
    summary: Summary,
    series: NormalizedSeries,
    band_color: DisplayColor,
}

/// The physics components wired together once at startup.
#[derive(Debug, Clone)]
pub struct Engine {
    pub calculator: PropertyCalculator,
    pub classifier: BandClassifier,
    pub normalizer: Normalizer,
    pub sampler: WaveSampler,
    pub comparison_amplitude: f64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Engine {
    pub fn from_config(config: &Config) -> Self {
        let constants = if config.codata_constants {
            PhysicalConstants::CODATA
        } else {
            PhysicalConstants::EDUCATIONAL
        };
        Self {
            calculator: PropertyCalculator::new(constants),
            classifier: BandClassifier::new(ColorBandTable::visible()),
            normalizer: Normalizer::default(),
            sampler: WaveSampler::default().with_sample_count(config.wave_samples),
            comparison_amplitude: config.comparison_amplitude,
        }
    }

    pub fn table(&self) -> &ColorBandTable {
        self.classifier.table()
    }

    pub fn constants(&self) -> &PhysicalConstants {
        self.calculator.constants()
    }

    pub fn band_index(&self, name: &str) -> Result<usize> {
        self.table().position(name).ok_or_else(|| Error::UnknownBand(name.to_string()))
    }

    /// An explicit wavelength wins; otherwise the named band's
    /// representative wavelength.
    pub fn resolve_wavelength(&self, wavelength_nm: Option<f64>, band: &str) -> Result<f64> {
        if let Some(w) = wavelength_nm {
            return Ok(w);
        }
        let band = &self.table().bands()[self.band_index(band)?];
        Ok(representative_wavelength(band) as f64)
    }

    fn base(&self, wavelength_nm: f64, scale: Scale) -> Result<Derived> {
        let sample = self.calculator.derive(wavelength_nm)?;
        let band = self.classifier.classify(wavelength_nm);
        let summary = Summary::new(&sample, &band);
        let series = self.normalizer.normalize_for_bar_chart(&sample, scale);
        tracing::debug!(
            wavelength_nm,
            frequency_hz = sample.frequency_hz,
            energy_j = sample.energy_j,
            band = band.name,
            "derived sample"
        );
        Ok(Derived { sample, summary, series, band_color: band.display_color })
    }

    /// Wavelength, frequency and energy side by side.
    pub fn properties_scene(&self, wavelength_nm: f64, scale: Scale) -> Result<Scene> {
        let Derived { sample, summary, series, band_color } = self.base(wavelength_nm, scale)?;
        let title = format!("Propiedades de la luz ({})", summary.wavelength);
        let plot = render_bar_chart(&BarChartSpec::from_series(&series, band_color))?;
        Ok(Scene { title, sample, summary, series, band_color, plot, light_oscillation: None })
    }

    /// Slow reference wave against a wave at the light's scaled frequency.
    pub fn wave_scene(&self, wavelength_nm: f64, scale: Scale) -> Result<Scene> {
        let Derived { sample, summary, series, band_color } = self.base(wavelength_nm, scale)?;
        let cmp =
            WaveComparison::build(&self.sampler, sample.frequency_hz, self.comparison_amplitude)?;
        let spec = PlotSpec::from_comparison(&cmp, band_color);
        let title = spec.title.clone().unwrap_or_default();
        let plot = render_line_plot(&spec)?;
        Ok(Scene {
            title,
            sample,
            summary,
            series,
            band_color,
            plot,
            light_oscillation: Some(cmp.light_oscillation),
        })
    }
}
