//! Physical-property engine: wavelength to frequency, energy, band and
//! chart-ready values. Everything here is pure.

pub mod bands;
pub mod classify;
pub mod constants;
pub mod normalize;
pub mod properties;
pub mod summary;
pub mod wave;

pub use bands::{ColorBand, ColorBandTable, DisplayColor};
pub use classify::{BandClassifier, BandMatch};
pub use constants::PhysicalConstants;
pub use normalize::{representative_wavelength, NormalizedSeries, Normalizer, Scale};
pub use properties::{derive_properties, PhysicalSample, PropertyCalculator};
pub use summary::Summary;
pub use wave::{WaveComparison, WaveSampler, WaveTrace};
