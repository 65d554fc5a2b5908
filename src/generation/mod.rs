//! Procedural galaxy generation
//!
//! Pipeline for one galaxy:
//!
//! 1. Place systems with the selected shape algorithm ([`shapes`])
//! 2. Draw star type, size class and planets per system, in ID order ([`properties`])
//! 3. Connect nearby systems with travel lanes ([`lanes`])
//!
//! All randomness comes from the generator's own engine, so a fixed nonzero
//! seed reproduces the same galaxy draw for draw.

pub mod lanes;
pub mod properties;
pub mod shapes;

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::GenerationParameters;
use crate::galaxy::{Galaxy, SystemId};
use crate::star_system::{StarSystem, StarType, SystemSize};

/// Resolve a user seed into an engine seed
///
/// Zero means "not reproducible" and is replaced with the current time in
/// nanoseconds since the Unix epoch.
pub fn resolve_seed(seed: u32) -> u64 {
    if seed != 0 {
        return seed as u64;
    }

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_else(|_| rand::random())
}

/// Galaxy generator owning its parameters and random engine
///
/// Generic over the engine type `R`; the default is `ChaCha8Rng`. Each
/// generator owns its own engine, there is no shared random state.
///
/// # Examples
///
/// ```
/// use galaxy_builder::*;
///
/// let params = GenerationParameters {
///     system_count: 10,
///     shape: GalaxyShape::Spiral,
///     seed: 42,
///     ..Default::default()
/// };
///
/// let mut generator = GalaxyGenerator::new(params.clone());
/// let galaxy = generator.generate();
/// assert_eq!(galaxy.system_count(), 10);
///
/// // A fresh generator with the same seed reproduces the galaxy
/// assert_eq!(galaxy, GalaxyGenerator::new(params).generate());
/// ```
#[derive(Debug, Clone)]
pub struct GalaxyGenerator<R = ChaCha8Rng> {
    rng: R,
    params: GenerationParameters,
}

impl GalaxyGenerator<ChaCha8Rng> {
    /// Create a generator seeded from `params.seed`
    pub fn new(params: GenerationParameters) -> Self {
        Self::with_rng(params)
    }
}

impl Default for GalaxyGenerator<ChaCha8Rng> {
    fn default() -> Self {
        Self::new(GenerationParameters::default())
    }
}

impl<R: Rng + SeedableRng> GalaxyGenerator<R> {
    /// Create a generator with engine type `R`, seeded from `params.seed`
    pub fn with_rng(params: GenerationParameters) -> Self {
        Self {
            rng: R::seed_from_u64(resolve_seed(params.seed)),
            params,
        }
    }

    /// Replace the parameters and reseed from `params.seed`
    pub fn set_parameters(&mut self, params: GenerationParameters) {
        self.rng = R::seed_from_u64(resolve_seed(params.seed));
        self.params = params;
    }

    /// Current parameters
    #[inline]
    pub fn parameters(&self) -> &GenerationParameters {
        &self.params
    }

    /// Reseed the engine without touching the parameters
    pub fn set_seed(&mut self, seed: u32) {
        self.rng = R::seed_from_u64(resolve_seed(seed));
    }

    /// Generate a galaxy from the stored parameters
    ///
    /// Continues the current random stream: two calls in a row produce
    /// different galaxies. Reseed with [`set_seed`](Self::set_seed) or
    /// [`set_parameters`](Self::set_parameters) to reproduce one.
    pub fn generate(&mut self) -> Galaxy {
        let params = self.params.clone();
        self.generate_with(&params)
    }

    /// Generate a galaxy from explicit parameters, continuing the current random stream
    ///
    /// Never fails: degenerate parameters (zero count, zero dimensions, zero
    /// arms) yield an empty galaxy, and a dense layout may yield fewer systems
    /// than requested.
    pub fn generate_with(&mut self, params: &GenerationParameters) -> Galaxy {
        let total_start = Instant::now();
        let mut galaxy = Galaxy::new(params.width, params.height);

        let start = Instant::now();
        let positions = shapes::generate_positions(params, &mut self.rng);
        log::debug!(
            "{} layout: {} positions in {:?}",
            params.shape.name(),
            positions.len(),
            start.elapsed()
        );

        let start = Instant::now();
        for (index, position) in positions.into_iter().enumerate() {
            let mut system = StarSystem::new(index as SystemId + 1, position);
            system.star_type = properties::sample_star_type(&mut self.rng);
            system.size = properties::sample_system_size(&mut self.rng);
            system.planets =
                properties::generate_planets(&mut self.rng, &system.name, system.size);

            if let Err(e) = galaxy.add_system(system) {
                log::warn!("Dropping generated system: {}", e);
            }
        }
        log::debug!(
            "Populated {} systems in {:?}",
            galaxy.system_count(),
            start.elapsed()
        );

        let start = Instant::now();
        let connected = lanes::connect_nearest_systems(&mut galaxy, &mut self.rng);
        log::debug!("Connected {} travel lanes in {:?}", connected, start.elapsed());

        log::info!(
            "Generated {} galaxy (seed {}): {}/{} systems, {} lanes in {:?}",
            params.shape.name(),
            params.seed,
            galaxy.system_count(),
            params.system_count,
            galaxy.lane_count(),
            total_start.elapsed()
        );

        galaxy
    }

    /// Replace the planets of `system` with a fresh draw for its size class
    pub fn generate_planets_for_system(&mut self, system: &mut StarSystem) {
        system.planets = properties::generate_planets(&mut self.rng, &system.name, system.size);
    }

    /// Draw a star type from the weighted distribution
    pub fn random_star_type(&mut self) -> StarType {
        properties::sample_star_type(&mut self.rng)
    }

    /// Draw a system size class from the weighted distribution
    pub fn random_system_size(&mut self) -> SystemSize {
        properties::sample_system_size(&mut self.rng)
    }
}

/// Generate one galaxy with a fresh generator seeded from `params.seed`
///
/// # Example
///
/// ```
/// use galaxy_builder::*;
///
/// let params = GenerationParametersBuilder::new()
///     .system_count(30)
///     .unwrap()
///     .shape(GalaxyShape::Ring)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// let galaxy = generate_galaxy(&params);
/// assert_eq!(galaxy.system_count(), 30);
/// ```
pub fn generate_galaxy(params: &GenerationParameters) -> Galaxy {
    GalaxyGenerator::new(params.clone()).generate()
}
