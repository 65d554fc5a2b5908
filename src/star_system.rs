//! Star System Structure
//!
//! Represents a single star system on the galaxy map with its star, size class and planets.

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::galaxy::SystemId;
use crate::planet::Planet;

/// Stellar classification of a system's primary
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StarType {
    /// Most common: 50% of systems
    #[default]
    RedDwarf,
    YellowStar,
    BlueStar,
    WhiteDwarf,
    RedGiant,
    Neutron,
    /// Rarest: 1% of systems
    BlackHole,
}

impl StarType {
    /// Every star type, in declaration order
    pub const ALL: [StarType; 7] = [
        StarType::RedDwarf,
        StarType::YellowStar,
        StarType::BlueStar,
        StarType::WhiteDwarf,
        StarType::RedGiant,
        StarType::Neutron,
        StarType::BlackHole,
    ];

    /// Get a human-readable name for this star type
    pub fn name(self) -> &'static str {
        match self {
            StarType::RedDwarf => "Red Dwarf",
            StarType::YellowStar => "Yellow Star",
            StarType::BlueStar => "Blue Star",
            StarType::WhiteDwarf => "White Dwarf",
            StarType::RedGiant => "Red Giant",
            StarType::Neutron => "Neutron Star",
            StarType::BlackHole => "Black Hole",
        }
    }
}

/// Size class of a star system, which drives its planet count
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SystemSize {
    /// 1-3 planets
    Small,
    /// 3-6 planets
    #[default]
    Medium,
    /// 5-9 planets
    Large,
    /// 7-12 planets
    Huge,
}

impl SystemSize {
    /// Every size class, smallest first
    pub const ALL: [SystemSize; 4] = [
        SystemSize::Small,
        SystemSize::Medium,
        SystemSize::Large,
        SystemSize::Huge,
    ];

    /// `(base, max_variation)` for the planet count of this size class
    ///
    /// A system receives `base + uniform(0..=max_variation)` planets.
    pub fn planet_count_range(self) -> (u32, u32) {
        match self {
            SystemSize::Small => (1, 2),
            SystemSize::Medium => (3, 3),
            SystemSize::Large => (5, 4),
            SystemSize::Huge => (7, 5),
        }
    }

    /// Get a human-readable name for this size class
    pub fn name(self) -> &'static str {
        match self {
            SystemSize::Small => "Small",
            SystemSize::Medium => "Medium",
            SystemSize::Large => "Large",
            SystemSize::Huge => "Huge",
        }
    }
}

/// A single star system on the galaxy map
///
/// Systems are owned by the [`Galaxy`](crate::Galaxy) registry and referenced
/// everywhere else by their `id`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct StarSystem {
    /// Unique identifier, assigned sequentially from 1 during generation
    pub id: SystemId,

    /// Display name (`System_<id>` for generated systems)
    pub name: String,

    /// Position on the map, inside `[0, width) x [0, height)`
    pub position: DVec2,

    /// Stellar classification
    pub star_type: StarType,

    /// Size class
    pub size: SystemSize,

    /// Planets ordered by ascending orbital radius
    pub planets: Vec<Planet>,
}

impl StarSystem {
    /// Create a system with the default name, star type and size class and no planets
    pub fn new(id: SystemId, position: DVec2) -> Self {
        Self {
            id,
            name: default_system_name(id),
            position,
            star_type: StarType::default(),
            size: SystemSize::default(),
            planets: Vec::new(),
        }
    }

    /// Get the number of planets
    #[inline]
    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    /// Add a planet, keeping the list ordered by orbital radius
    ///
    /// A planet sharing its orbital radius with existing ones goes after them.
    pub fn add_planet(&mut self, planet: Planet) {
        let index = self
            .planets
            .partition_point(|p| p.orbital_radius <= planet.orbital_radius);
        self.planets.insert(index, planet);
    }

    /// Remove the planet at `index`, returning it if it existed
    pub fn remove_planet(&mut self, index: usize) -> Option<Planet> {
        if index < self.planets.len() {
            Some(self.planets.remove(index))
        } else {
            None
        }
    }

    /// Euclidean distance between the two systems' positions
    #[inline]
    pub fn distance_to(&self, other: &StarSystem) -> f64 {
        self.position.distance(other.position)
    }
}

/// Name given to generated systems
pub fn default_system_name(id: SystemId) -> String {
    format!("System_{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::PlanetType;

    fn planet_at(orbital_radius: f64, name: &str) -> Planet {
        Planet {
            name: name.to_string(),
            planet_type: PlanetType::Rocky,
            size: 1.0,
            mass: 1.0,
            moons: 0,
            orbital_radius,
            max_temperature: 300.0,
            min_temperature: 250.0,
        }
    }

    #[test]
    fn test_system_creation() {
        let system = StarSystem::new(4, DVec2::new(10.0, 20.0));
        assert_eq!(system.id, 4);
        assert_eq!(system.name, "System_4");
        assert_eq!(system.planet_count(), 0);
        assert_eq!(system.star_type, StarType::RedDwarf);
        assert_eq!(system.size, SystemSize::Medium);
    }

    #[test]
    fn test_add_planet_keeps_orbital_order() {
        let mut system = StarSystem::new(1, DVec2::ZERO);
        system.add_planet(planet_at(2.0, "b"));
        system.add_planet(planet_at(0.5, "a"));
        system.add_planet(planet_at(3.5, "d"));
        system.add_planet(planet_at(2.0, "c"));

        let names: Vec<&str> = system.planets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_remove_planet() {
        let mut system = StarSystem::new(1, DVec2::ZERO);
        system.add_planet(planet_at(1.0, "a"));

        assert!(system.remove_planet(3).is_none());
        let removed = system.remove_planet(0).unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(system.planet_count(), 0);
    }

    #[test]
    fn test_distance_to() {
        let a = StarSystem::new(1, DVec2::new(0.0, 0.0));
        let b = StarSystem::new(2, DVec2::new(30.0, 40.0));
        assert_eq!(a.distance_to(&b), 50.0);
        assert_eq!(b.distance_to(&a), 50.0);
    }

    #[test]
    fn test_planet_count_ranges_grow_with_size() {
        let maxima: Vec<u32> = SystemSize::ALL
            .iter()
            .map(|s| {
                let (base, variation) = s.planet_count_range();
                base + variation
            })
            .collect();
        assert_eq!(maxima, vec![3, 6, 9, 12]);
        assert_eq!(SystemSize::Huge.planet_count_range().0, 7);
    }
}
