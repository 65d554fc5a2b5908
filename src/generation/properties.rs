//! Star, system and planet property sampling
//!
//! Every categorical draw is a single roll against a fixed percentage table.
//! Planet properties are stratified by type: giants are scaled up in size and
//! mass, and temperature bands shift with the planet type.

use rand::Rng;

use crate::planet::{planet_name, Planet, PlanetType};
use crate::star_system::{StarType, SystemSize};

/// Star type frequencies, in percent
pub const STAR_TYPE_WEIGHTS: [(StarType, u32); 7] = [
    (StarType::RedDwarf, 50),
    (StarType::YellowStar, 25),
    (StarType::BlueStar, 10),
    (StarType::WhiteDwarf, 7),
    (StarType::RedGiant, 5),
    (StarType::Neutron, 2),
    (StarType::BlackHole, 1),
];

/// System size frequencies, in percent
pub const SYSTEM_SIZE_WEIGHTS: [(SystemSize, u32); 4] = [
    (SystemSize::Small, 40),
    (SystemSize::Medium, 35),
    (SystemSize::Large, 20),
    (SystemSize::Huge, 5),
];

/// Planet type frequencies, in percent
pub const PLANET_TYPE_WEIGHTS: [(PlanetType, u32); 8] = [
    (PlanetType::Rocky, 35),
    (PlanetType::Desert, 15),
    (PlanetType::Ocean, 15),
    (PlanetType::Frozen, 10),
    (PlanetType::GasGiant, 10),
    (PlanetType::IceGiant, 7),
    (PlanetType::Volcanic, 5),
    (PlanetType::Toxic, 3),
];

/// Innermost orbit, in AU
const FIRST_ORBIT: f64 = 0.3;
/// Spacing between consecutive orbits, in AU
const ORBIT_SPACING: f64 = 0.7;
/// Random outward offset added to each orbit, in AU
const ORBIT_JITTER: f64 = 0.5;

/// Reference temperature at 1 AU
const BASE_TEMPERATURE: f64 = 300.0;

/// Roll once against a percentage table
///
/// Tables are non-empty constants with positive weights.
fn pick_weighted<T: Copy, R: Rng>(rng: &mut R, table: &[(T, u32)]) -> T {
    let total: u32 = table.iter().map(|&(_, weight)| weight).sum();
    let mut roll = rng.gen_range(0..total);
    for &(item, weight) in table {
        if roll < weight {
            return item;
        }
        roll -= weight;
    }
    table[table.len() - 1].0
}

/// Draw a star type: RedDwarf 50%, YellowStar 25%, BlueStar 10%, WhiteDwarf 7%,
/// RedGiant 5%, Neutron 2%, BlackHole 1%
pub fn sample_star_type<R: Rng>(rng: &mut R) -> StarType {
    pick_weighted(rng, &STAR_TYPE_WEIGHTS)
}

/// Draw a system size class: Small 40%, Medium 35%, Large 20%, Huge 5%
pub fn sample_system_size<R: Rng>(rng: &mut R) -> SystemSize {
    pick_weighted(rng, &SYSTEM_SIZE_WEIGHTS)
}

/// Draw a planet type from [`PLANET_TYPE_WEIGHTS`]
pub fn sample_planet_type<R: Rng>(rng: &mut R) -> PlanetType {
    pick_weighted(rng, &PLANET_TYPE_WEIGHTS)
}

/// Generate the planet list for a system of the given size class
///
/// The count is `base + uniform(0..=max_variation)` from
/// [`SystemSize::planet_count_range`]. Planets come out in ascending orbital
/// order and are named after `system_name`.
///
/// # Example
///
/// ```
/// use galaxy_builder::generation::properties::generate_planets;
/// use galaxy_builder::SystemSize;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let planets = generate_planets(&mut rng, "System_1", SystemSize::Huge);
/// assert!((7..=12).contains(&planets.len()));
/// assert_eq!(planets[0].name, "System_1 I");
/// ```
pub fn generate_planets<R: Rng>(rng: &mut R, system_name: &str, size: SystemSize) -> Vec<Planet> {
    let (base, variation) = size.planet_count_range();
    let count = base + rng.gen_range(0..=variation);

    (0..count as usize)
        .map(|index| sample_planet(rng, system_name, index))
        .collect()
}

/// Generate the planet at 0-based orbital `index`
///
/// Draw order: type, orbit, size, mass, moons, temperature.
pub fn sample_planet<R: Rng>(rng: &mut R, system_name: &str, index: usize) -> Planet {
    let planet_type = sample_planet_type(rng);

    // Orbits never overlap: index i lies in [0.3 + 0.7i, 0.8 + 0.7i)
    let orbital_radius =
        FIRST_ORBIT + index as f64 * ORBIT_SPACING + rng.gen_range(0.0..ORBIT_JITTER);

    let mut size = 0.3 + rng.gen_range(0.0..2.0);
    match planet_type {
        PlanetType::GasGiant => size *= 3.0 + rng.gen_range(0.0..2.0),
        PlanetType::IceGiant => size *= 2.0 + rng.gen_range(0.0..1.5),
        _ => {}
    }

    // Giants get a second multiplier on top of the already scaled size
    let mut mass = size * size * (0.8 + rng.gen_range(0.0..0.4));
    match planet_type {
        PlanetType::GasGiant => mass *= 10.0 + rng.gen_range(0.0..50.0),
        PlanetType::IceGiant => mass *= 5.0 + rng.gen_range(0.0..10.0),
        _ => {}
    }

    let moons = if size > 1.5 {
        (size * (1.0 + rng.gen::<f64>())) as u32
    } else if size > 0.8 {
        rng.gen_range(0..=2)
    } else {
        0
    };

    let (max_temperature, min_temperature) = sample_temperature(rng, planet_type, orbital_radius);

    Planet {
        name: planet_name(system_name, index + 1),
        planet_type,
        size,
        mass,
        moons,
        orbital_radius,
        max_temperature,
        min_temperature,
    }
}

/// Draw the `(max, min)` temperature band for a planet
///
/// Both bounds derive from `300 / sqrt(orbital_radius) ± variation` with a
/// non-negative variation, and no adjustment can push max below min.
pub fn sample_temperature<R: Rng>(
    rng: &mut R,
    planet_type: PlanetType,
    orbital_radius: f64,
) -> (f64, f64) {
    let base = BASE_TEMPERATURE / orbital_radius.sqrt();
    let variation = 20.0 + rng.gen_range(0.0..40.0);
    let mut max = base + variation;
    let mut min = base - variation;

    match planet_type {
        PlanetType::Volcanic => {
            max += 100.0;
            min += 50.0;
        }
        PlanetType::Frozen => {
            max = max.min(200.0);
            min = min.min(150.0);
        }
        PlanetType::Desert => {
            max += 50.0;
            min -= 30.0;
        }
        PlanetType::Ocean => {
            max = base + variation * 0.5;
            min = base - variation * 0.5;
        }
        _ => {}
    }

    (max, min)
}
