use std::fmt;

use serde::Serialize;

use crate::light::classify::BandMatch;
use crate::light::properties::PhysicalSample;

/// Text shown next to the chart, also emitted as JSON in headless mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub wavelength: String,
    pub frequency: String,
    pub energy: String,
    pub energy_ev: String,
    pub band: String,
    pub display_color: String,
    #[serde(skip)]
    pub is_fallback: bool,
}

impl Summary {
    pub fn new(sample: &PhysicalSample, band: &BandMatch) -> Self {
        Self {
            wavelength: format!("{} nm", sample.wavelength_nm.trunc() as i64),
            frequency: format!("{} Hz", sci(sample.frequency_hz)),
            energy: format!("{} J", sci(sample.energy_j)),
            energy_ev: format!("{:.2} eV", sample.energy_ev()),
            band: band.name.to_string(),
            display_color: band.display_color.to_hex(),
            is_fallback: band.is_fallback(),
        }
    }

    /// Label/value rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); 5] {
        [
            ("Longitud de onda", self.wavelength.as_str()),
            ("Frecuencia", self.frequency.as_str()),
            ("Energía", self.energy.as_str()),
            ("Energía (eV)", self.energy_ev.as_str()),
            ("Color percibido", self.band.as_str()),
        ]
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.rows() {
            writeln!(f, "{:<18} {}", format!("{}:", label), value)?;
        }
        Ok(())
    }
}

/// Scientific notation with two decimals and a signed exponent: `6.67e+14`.
pub fn sci(value: f64) -> String {
    let raw = format!("{:.2e}", value);
    match raw.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{:0>2}", mantissa, exp),
        Some((mantissa, exp)) => format!("{}e-{:0>2}", mantissa, &exp[1..]),
        None => raw,
    }
}
