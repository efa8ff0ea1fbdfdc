/// Physical constants used by the property calculator.
///
/// The educational values (`h = 6.626e-34`, `c = 3e8`) are fixed so every
/// screen of the tool prints the same numbers. CODATA values can be selected
/// with `codata_constants` in the config or `--codata`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Planck constant, J*s.
    pub planck: f64,
    /// Speed of light in vacuum, m/s.
    pub speed_of_light: f64,
}

impl PhysicalConstants {
    pub const EDUCATIONAL: Self = Self {
        planck: 6.626e-34,
        speed_of_light: 3e8,
    };

    pub const CODATA: Self = Self {
        planck: 6.626_070_15e-34,
        speed_of_light: 299_792_458.0,
    };

    /// Sidebar rows for this set.
    pub fn entries(&self) -> [PhysConst; 3] {
        [
            PhysConst { name: "h", value: self.planck, unit_display: "J*s" },
            PhysConst { name: "c", value: self.speed_of_light, unit_display: "m/s" },
            PhysConst { name: "eV", value: JOULES_PER_EV, unit_display: "J" },
        ]
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::EDUCATIONAL
    }
}

/// Joules per electron-volt (exact in 2019 SI).
pub const JOULES_PER_EV: f64 = 1.602_176_634e-19;

/// A named constant shown in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysConst {
    pub name: &'static str,
    pub value: f64,
    pub unit_display: &'static str,
}
