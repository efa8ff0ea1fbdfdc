use serde::Serialize;

use crate::light::bands::{ColorBandTable, DisplayColor};

/// Name reported for wavelengths outside every band.
pub const FALLBACK_NAME: &str = "Infrarrojo-equivalente";
/// Color reported for wavelengths outside every band.
pub const FALLBACK_COLOR: DisplayColor = DisplayColor::GRAY;

/// Result of classifying a wavelength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandMatch {
    pub name: &'static str,
    pub display_color: DisplayColor,
}

impl BandMatch {
    pub const FALLBACK: BandMatch = BandMatch {
        name: FALLBACK_NAME,
        display_color: FALLBACK_COLOR,
    };

    pub fn is_fallback(&self) -> bool {
        *self == Self::FALLBACK
    }
}

/// Maps a wavelength to the first band whose inclusive range contains it.
///
/// Shared edges go to the earlier band: with the visible table 450 nm is
/// Violeta, not Azul. That is an artifact of table order, not physics.
#[derive(Debug, Clone, Default)]
pub struct BandClassifier {
    table: ColorBandTable,
}

impl BandClassifier {
    pub fn new(table: ColorBandTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ColorBandTable {
        &self.table
    }

    /// Never fails: anything outside the table (including NaN and negative
    /// values) resolves to the fallback band.
    pub fn classify(&self, wavelength_nm: f64) -> BandMatch {
        self.table
            .bands()
            .iter()
            .find(|band| band.contains(wavelength_nm))
            .map(|band| BandMatch { name: band.name, display_color: band.display_color })
            .unwrap_or(BandMatch::FALLBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::bands::ColorBand;

    #[test]
    fn test_classify_interior() {
        let c = BandClassifier::default();
        assert_eq!(c.classify(530.0).name, "Verde");
        assert_eq!(c.classify(700.0).display_color.to_hex(), "#FF0000");
    }

    #[test]
    fn test_shared_edges_go_to_earlier_band() {
        let c = BandClassifier::default();
        assert_eq!(c.classify(450.0).name, "Violeta");
        assert_eq!(c.classify(495.0).name, "Azul");
        assert_eq!(c.classify(570.0).name, "Verde");
        assert_eq!(c.classify(590.0).name, "Amarillo");
        assert_eq!(c.classify(620.0).name, "Naranja");
    }

    #[test]
    fn test_outer_edges_are_inclusive() {
        let c = BandClassifier::default();
        assert_eq!(c.classify(380.0).name, "Violeta");
        assert_eq!(c.classify(750.0).name, "Rojo");
        assert!(c.classify(379.9).is_fallback());
        assert!(c.classify(750.1).is_fallback());
    }

    #[test]
    fn test_fallback_for_garbage() {
        let c = BandClassifier::default();
        for w in [800.0, -5.0, 0.0, f64::NAN, f64::INFINITY] {
            let m = c.classify(w);
            assert_eq!(m.name, FALLBACK_NAME);
            assert_eq!(m.display_color, DisplayColor::GRAY);
        }
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let table = ColorBandTable::new(vec![
            ColorBand::new("Ancho", 400, 600, DisplayColor::rgb(1, 1, 1)),
            ColorBand::new("Estrecho", 500, 550, DisplayColor::rgb(2, 2, 2)),
        ])
        .unwrap();
        let c = BandClassifier::new(table);
        assert_eq!(c.classify(525.0).name, "Ancho");
    }

    #[test]
    fn test_match_outlives_classifier() {
        let m = BandClassifier::default().classify(600.0);
        assert_eq!(m.name, "Naranja");
        assert!(!m.is_fallback());
    }

    #[test]
    fn test_empty_table_is_all_fallback() {
        let c = BandClassifier::new(ColorBandTable::new(Vec::new()).unwrap());
        assert!(c.classify(500.0).is_fallback());
    }
}
