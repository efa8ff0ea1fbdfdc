//! Integration tests: the physics engine through the public API.

use luz::light::bands::{ColorBand, ColorBandTable, DisplayColor};
use luz::light::classify::{BandClassifier, FALLBACK_NAME};
use luz::light::normalize::{representative_wavelength, Normalizer, Scale};
use luz::light::properties::{derive_properties, PhysicalSample, PropertyCalculator};
use luz::light::wave::WaveSampler;
use luz::light::PhysicalConstants;
use luz::Error;

const H: f64 = 6.626e-34;
const C: f64 = 3e8;

fn rel_err(a: f64, b: f64) -> f64 {
    ((a - b) / b).abs()
}

#[test]
fn test_frequency_relation_holds_across_range() {
    let mut w = 0.5;
    while w < 1.0e6 {
        let s = derive_properties(w).unwrap();
        assert!(rel_err(s.frequency_hz, C / (w * 1e-9)) < 1e-6, "at {} nm", w);
        assert!(rel_err(s.energy_j, H * C / (w * 1e-9)) < 1e-6, "at {} nm", w);
        w *= 1.7;
    }
}

#[test]
fn test_frequency_and_energy_decrease_with_wavelength() {
    let calc = PropertyCalculator::new(PhysicalConstants::EDUCATIONAL);
    let samples: Vec<PhysicalSample> =
        (380..=750).map(|w| calc.derive(w as f64).unwrap()).collect();
    for pair in samples.windows(2) {
        assert!(pair[0].frequency_hz > pair[1].frequency_hz);
        assert!(pair[0].energy_j > pair[1].energy_j);
        assert!(pair[0].energy_j > 0.0 && pair[0].frequency_hz > 0.0);
    }
}

#[test]
fn test_every_band_owns_its_representative_wavelength() {
    let classifier = BandClassifier::default();
    for band in classifier.table().bands() {
        let mid = representative_wavelength(band);
        assert_eq!(classifier.classify(mid as f64).name, band.name);
    }
}

#[test]
fn test_450_belongs_to_violeta() {
    // Violeta is listed before Azul and both include 450 nm.
    let m = BandClassifier::default().classify(450.0);
    assert_eq!(m.name, "Violeta");
    assert_eq!(m.display_color, DisplayColor::rgb(0x8B, 0x00, 0xFF));
}

#[test]
fn test_out_of_band_is_fallback_not_error() {
    let classifier = BandClassifier::default();
    assert_eq!(classifier.classify(800.0).name, FALLBACK_NAME);
    assert_eq!(classifier.classify(-5.0).name, "Infrarrojo-equivalente");
    assert_eq!(classifier.classify(-5.0).display_color.to_hex(), "#808080");
}

#[test]
fn test_representative_wavelength_truncates() {
    let band = ColorBand::new("Verde", 495, 570, DisplayColor::rgb(0, 255, 0));
    assert_eq!(representative_wavelength(&band), 532);
}

#[test]
fn test_450_nm_reference_values() {
    let s = derive_properties(450.0).unwrap();
    assert!(rel_err(s.frequency_hz, 6.67e14) < 0.01);
    assert!(rel_err(s.energy_j, 4.42e-19) < 0.01);
}

#[test]
fn test_470_nm_linear_normalization() {
    let sample = PhysicalSample { wavelength_nm: 470.0, frequency_hz: 6.38e14, energy_j: 4.23e-19 };
    let series = Normalizer::default().normalize_for_bar_chart(&sample, Scale::Linear);
    for (got, want) in series.values.iter().zip([4.70, 6.38, 4.23]) {
        assert!((got - want).abs() < 1e-6);
    }
}

#[test]
fn test_derived_sample_normalizes_into_single_digits() {
    let sample = derive_properties(470.0).unwrap();
    let series = Normalizer::default().normalize_for_bar_chart(&sample, Scale::Linear);
    assert!(series.values.iter().all(|v| (1.0..10.0).contains(v)));
}

#[test]
fn test_invalid_wavelength_is_rejected() {
    assert!(matches!(derive_properties(0.0), Err(Error::InvalidWavelength(_))));
    assert!(matches!(derive_properties(-450.0), Err(Error::InvalidWavelength(_))));
    assert!(matches!(derive_properties(f64::NAN), Err(Error::InvalidWavelength(_))));
}

#[test]
fn test_wave_sampler_is_bit_identical() {
    let sampler = WaveSampler::default()
        .with_domain_length(4.0 * std::f64::consts::PI)
        .with_sample_count(500);
    let a = sampler.sample(6.38).unwrap();
    let b = sampler.sample(6.38).unwrap();
    assert!(a.amplitude.iter().zip(&b.amplitude).all(|(x, y)| x.to_bits() == y.to_bits()));
    assert!(a.domain.iter().zip(&b.domain).all(|(x, y)| x.to_bits() == y.to_bits()));
}

#[test]
fn test_custom_table_keeps_first_match_order() {
    let table = ColorBandTable::new(vec![
        ColorBand::new("A", 400, 500, DisplayColor::GRAY),
        ColorBand::new("B", 500, 600, DisplayColor::GRAY),
    ])
    .unwrap();
    let classifier = BandClassifier::new(table);
    assert_eq!(classifier.classify(500.0).name, "A");
    assert_eq!(classifier.classify(500.5).name, "B");
}
