use serde::Serialize;

use crate::error::{Error, Result};
use crate::light::constants::{PhysicalConstants, JOULES_PER_EV};

/// Nanometers to meters.
pub const NM_TO_M: f64 = 1e-9;

/// Wavelength, frequency and photon energy of one light sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalSample {
    pub wavelength_nm: f64,
    pub frequency_hz: f64,
    pub energy_j: f64,
}

impl PhysicalSample {
    pub fn wavelength_m(&self) -> f64 {
        self.wavelength_nm * NM_TO_M
    }

    pub fn energy_ev(&self) -> f64 {
        self.energy_j / JOULES_PER_EV
    }
}

/// Derives frequency and photon energy from a wavelength.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyCalculator {
    constants: PhysicalConstants,
}

impl PropertyCalculator {
    pub fn new(constants: PhysicalConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// `f = c / λ`, `E = h·f`. Rejects non-positive and non-finite input.
    pub fn derive(&self, wavelength_nm: f64) -> Result<PhysicalSample> {
        if !wavelength_nm.is_finite() || wavelength_nm <= 0.0 {
            return Err(Error::InvalidWavelength(wavelength_nm));
        }
        let wavelength_m = wavelength_nm * NM_TO_M;
        let frequency_hz = self.constants.speed_of_light / wavelength_m;
        let energy_j = self.constants.planck * frequency_hz;
        Ok(PhysicalSample { wavelength_nm, frequency_hz, energy_j })
    }
}

/// Derive properties with the fixed educational constants.
pub fn derive_properties(wavelength_nm: f64) -> Result<PhysicalSample> {
    PropertyCalculator::default().derive(wavelength_nm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_err(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn test_derive_450() {
        let s = derive_properties(450.0).unwrap();
        assert!(rel_err(s.frequency_hz, 6.6667e14) < 1e-4);
        assert!(rel_err(s.energy_j, 4.4173e-19) < 1e-4);
        assert_eq!(s.wavelength_nm, 450.0);
    }

    #[test]
    fn test_derive_matches_formula_exactly() {
        let s = derive_properties(532.0).unwrap();
        assert_eq!(s.frequency_hz, 3e8 / (532.0 * 1e-9));
        assert_eq!(s.energy_j, 6.626e-34 * s.frequency_hz);
    }

    #[test]
    fn test_rejects_zero_negative_and_non_finite() {
        for w in [0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = derive_properties(w).unwrap_err();
            assert!(matches!(err, Error::InvalidWavelength(_)), "accepted {}", w);
        }
    }

    #[test]
    fn test_codata_constants() {
        let calc = PropertyCalculator::new(PhysicalConstants::CODATA);
        let s = calc.derive(500.0).unwrap();
        assert!(rel_err(s.frequency_hz, 5.99584916e14) < 1e-8);
    }

    #[test]
    fn test_energy_ev() {
        let s = derive_properties(620.0).unwrap();
        assert!((s.energy_ev() - 2.0).abs() < 0.01);
        assert!((s.wavelength_m() - 620e-9).abs() < 1e-18);
    }
}
