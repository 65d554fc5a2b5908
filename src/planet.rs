//! Planet entity and naming

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Broad planet classification
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlanetType {
    #[default]
    Rocky,
    GasGiant,
    IceGiant,
    Desert,
    Ocean,
    Frozen,
    Volcanic,
    Toxic,
}

impl PlanetType {
    /// Every planet type, in declaration order
    pub const ALL: [PlanetType; 8] = [
        PlanetType::Rocky,
        PlanetType::GasGiant,
        PlanetType::IceGiant,
        PlanetType::Desert,
        PlanetType::Ocean,
        PlanetType::Frozen,
        PlanetType::Volcanic,
        PlanetType::Toxic,
    ];

    /// Get a human-readable name for this planet type
    pub fn name(self) -> &'static str {
        match self {
            PlanetType::Rocky => "Rocky",
            PlanetType::GasGiant => "Gas Giant",
            PlanetType::IceGiant => "Ice Giant",
            PlanetType::Desert => "Desert",
            PlanetType::Ocean => "Ocean",
            PlanetType::Frozen => "Frozen",
            PlanetType::Volcanic => "Volcanic",
            PlanetType::Toxic => "Toxic",
        }
    }

    /// Check if this is a gas or ice giant
    pub fn is_giant(self) -> bool {
        matches!(self, PlanetType::GasGiant | PlanetType::IceGiant)
    }
}

/// A planet orbiting a star system
///
/// Planets are owned by exactly one [`StarSystem`](crate::StarSystem) and kept
/// in ascending orbital order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    /// Display name, e.g. `System_4 III`
    pub name: String,

    /// Classification
    pub planet_type: PlanetType,

    /// Radius in Earth radii
    pub size: f64,

    /// Mass in Earth masses
    pub mass: f64,

    /// Number of moons
    pub moons: u32,

    /// Orbital radius in AU (> 0)
    pub orbital_radius: f64,

    /// Surface temperature upper bound (always >= `min_temperature`)
    pub max_temperature: f64,

    /// Surface temperature lower bound
    pub min_temperature: f64,
}

impl Planet {
    /// Check if this planet is a gas or ice giant
    #[inline]
    pub fn is_giant(&self) -> bool {
        self.planet_type.is_giant()
    }

    /// Midpoint of the temperature range
    #[inline]
    pub fn mean_temperature(&self) -> f64 {
        (self.max_temperature + self.min_temperature) / 2.0
    }
}

const ROMAN_NUMERALS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Name of the planet at 1-based orbital `position` around `system_name`
///
/// Positions 1 to 10 use Roman numerals, later ones the decimal position.
///
/// ```
/// use galaxy_builder::planet::planet_name;
///
/// assert_eq!(planet_name("System_3", 4), "System_3 IV");
/// assert_eq!(planet_name("System_3", 11), "System_3 11");
/// ```
pub fn planet_name(system_name: &str, position: usize) -> String {
    match position.checked_sub(1).and_then(|i| ROMAN_NUMERALS.get(i)) {
        Some(numeral) => format!("{} {}", system_name, numeral),
        None => format!("{} {}", system_name, position),
    }
}
