use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// An sRGB display color token, written `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct DisplayColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DisplayColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Neutral gray used for the out-of-band fallback and the wavelength bar.
    pub const GRAY: Self = Self::rgb(0x80, 0x80, 0x80);

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<DisplayColor> for String {
    fn from(color: DisplayColor) -> Self {
        color.to_hex()
    }
}

/// A named wavelength range. Both ends are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBand {
    pub name: &'static str,
    pub min_nm: u32,
    pub max_nm: u32,
    pub display_color: DisplayColor,
}

impl ColorBand {
    pub const fn new(
        name: &'static str,
        min_nm: u32,
        max_nm: u32,
        display_color: DisplayColor,
    ) -> Self {
        Self { name, min_nm, max_nm, display_color }
    }

    pub fn contains(&self, wavelength_nm: f64) -> bool {
        self.min_nm as f64 <= wavelength_nm && wavelength_nm <= self.max_nm as f64
    }
}

const VISIBLE: [ColorBand; 6] = [
    ColorBand::new("Violeta", 380, 450, DisplayColor::rgb(0x8B, 0x00, 0xFF)),
    ColorBand::new("Azul", 450, 495, DisplayColor::rgb(0x00, 0x00, 0xFF)),
    ColorBand::new("Verde", 495, 570, DisplayColor::rgb(0x00, 0xFF, 0x00)),
    ColorBand::new("Amarillo", 570, 590, DisplayColor::rgb(0xFF, 0xFF, 0x00)),
    ColorBand::new("Naranja", 590, 620, DisplayColor::rgb(0xFF, 0xA5, 0x00)),
    ColorBand::new("Rojo", 620, 750, DisplayColor::rgb(0xFF, 0x00, 0x00)),
];

/// Lower edge of the visible table, nm.
pub const VISIBLE_MIN_NM: u32 = 380;
/// Upper edge of the visible table, nm.
pub const VISIBLE_MAX_NM: u32 = 750;

/// Ordered, immutable table of color bands.
///
/// Order matters: adjacent bands share their boundary wavelength and the
/// classifier gives it to whichever band comes first.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBandTable {
    bands: Vec<ColorBand>,
}

impl ColorBandTable {
    /// Build a table, checking that each band is non-empty and that bands are
    /// listed by increasing lower edge.
    pub fn new(bands: Vec<ColorBand>) -> Result<Self> {
        for (i, band) in bands.iter().enumerate() {
            if band.min_nm >= band.max_nm {
                return Err(Error::InvalidBand {
                    name: band.name.to_string(),
                    reason: format!("min_nm {} is not below max_nm {}", band.min_nm, band.max_nm),
                });
            }
            if let Some(prev) = i.checked_sub(1).map(|j| &bands[j]) {
                if band.min_nm <= prev.min_nm {
                    return Err(Error::InvalidBand {
                        name: band.name.to_string(),
                        reason: format!(
                            "listed after '{}' but starts at {} nm",
                            prev.name, band.min_nm
                        ),
                    });
                }
            }
        }
        Ok(Self { bands })
    }

    /// The six visible-light bands, violet to red.
    pub fn visible() -> Self {
        Self { bands: VISIBLE.to_vec() }
    }

    pub fn bands(&self) -> &[ColorBand] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColorBand> {
        self.bands.get(index)
    }

    /// Find a band by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&ColorBand> {
        let name = name.trim();
        self.bands.iter().find(|b| b.name.eq_ignore_ascii_case(name))
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.bands.iter().position(|b| b.name.eq_ignore_ascii_case(name.trim()))
    }

}

impl Default for ColorBandTable {
    fn default() -> Self {
        Self::visible()
    }
}
