//! Visible light explorer.
//!
//! [`light`] holds the pure physics: wavelength to frequency and photon
//! energy, band classification, display normalization and wave sampling.
//! [`plot`] turns its outputs into PNG charts and [`tui`] is the terminal
//! front end.

pub mod config;
pub mod error;
pub mod light;
pub mod logging;
pub mod plot;
pub mod scene;
pub mod tui;

pub use error::{Error, Result};
