//! Display normalization for the properties bar chart.
//!
//! Wavelength, frequency and energy differ by some 30 orders of magnitude in
//! SI units, so on a shared linear axis two of the three bars vanish. Linear
//! mode divides each quantity by a fixed per-quantity constant so all three
//! land in the 1..10 range; logarithmic mode hands the raw SI values to a
//! chart with a log axis.

use serde::Serialize;

use crate::light::bands::ColorBand;
use crate::light::properties::PhysicalSample;

pub const LABEL_WAVELENGTH: &str = "Longitud de onda (λ)";
pub const LABEL_FREQUENCY: &str = "Frecuencia (f)";
pub const LABEL_ENERGY: &str = "Energía (E)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    #[default]
    Linear,
    Logarithmic,
}

impl Scale {
    pub fn toggled(self) -> Self {
        match self {
            Scale::Linear => Scale::Logarithmic,
            Scale::Logarithmic => Scale::Linear,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scale::Linear => "lineal",
            Scale::Logarithmic => "logarítmica",
        }
    }
}

/// Chart-ready values, one per label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub scale: Scale,
}

impl NormalizedSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels.iter().map(String::as_str).zip(self.values.iter().copied())
    }
}

/// Divisors applied in linear mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale {
    /// Applied to the wavelength in nanometers.
    pub wavelength: f64,
    /// Applied to the frequency in hertz.
    pub frequency: f64,
    /// Applied to the energy in joules.
    pub energy: f64,
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self {
            wavelength: 100.0,
            frequency: 1e14,
            energy: 1e-19,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    divisors: DisplayScale,
}

impl Normalizer {
    pub fn new(divisors: DisplayScale) -> Self {
        Self { divisors }
    }

    /// Three slots, always in wavelength, frequency, energy order.
    ///
    /// Logarithmic mode reports the wavelength in meters so all three values
    /// are plain SI.
    pub fn normalize_for_bar_chart(
        &self,
        sample: &PhysicalSample,
        scale: Scale,
    ) -> NormalizedSeries {
        let values = match scale {
            Scale::Linear => vec![
                sample.wavelength_nm / self.divisors.wavelength,
                sample.frequency_hz / self.divisors.frequency,
                sample.energy_j / self.divisors.energy,
            ],
            Scale::Logarithmic => vec![
                sample.wavelength_m(),
                sample.frequency_hz,
                sample.energy_j,
            ],
        };
        NormalizedSeries {
            labels: [LABEL_WAVELENGTH, LABEL_FREQUENCY, LABEL_ENERGY]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            values,
            scale,
        }
    }
}

/// Midpoint of a band, truncated to whole nanometers.
pub fn representative_wavelength(band: &ColorBand) -> u32 {
    band.min_nm + (band.max_nm - band.min_nm) / 2
}
