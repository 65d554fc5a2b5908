//! Galaxy sources
//!
//! Anything that can hand out a complete [`Galaxy`] for a set of parameters
//! implements [`GalaxyFactory`]. The procedural [`GalaxyGenerator`] is the
//! built-in implementation; loaders for saved maps plug in at the same seam.

use rand::{Rng, SeedableRng};

use crate::config::GenerationParameters;
use crate::galaxy::Galaxy;
use crate::generation::GalaxyGenerator;

/// Trait for producing galaxies
///
/// # Example
///
/// ```
/// use galaxy_builder::*;
///
/// fn build_map(factory: &mut dyn GalaxyFactory, systems: u32) -> Galaxy {
///     let mut params = factory.parameters().clone();
///     params.system_count = systems;
///     factory.set_parameters(params);
///     factory.produce_galaxy()
/// }
///
/// let mut generator = GalaxyGenerator::default();
/// let galaxy = build_map(&mut generator, 15);
/// assert!(galaxy.system_count() <= 15);
/// ```
pub trait GalaxyFactory {
    /// Produce a galaxy from the current parameters
    fn produce_galaxy(&mut self) -> Galaxy;

    /// Replace the parameters used by the next `produce_galaxy` call
    fn set_parameters(&mut self, params: GenerationParameters);

    /// Current parameters
    fn parameters(&self) -> &GenerationParameters;
}

impl<R: Rng + SeedableRng> GalaxyFactory for GalaxyGenerator<R> {
    fn produce_galaxy(&mut self) -> Galaxy {
        self.generate()
    }

    fn set_parameters(&mut self, params: GenerationParameters) {
        GalaxyGenerator::set_parameters(self, params);
    }

    fn parameters(&self) -> &GenerationParameters {
        GalaxyGenerator::parameters(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GalaxyShape;
    use crate::generation::generate_galaxy;

    #[test]
    fn test_generator_as_factory() {
        let params = GenerationParameters {
            system_count: 25,
            shape: GalaxyShape::Elliptical,
            seed: 321,
            ..Default::default()
        };

        let mut generator = GalaxyGenerator::default();
        let factory: &mut dyn GalaxyFactory = &mut generator;
        factory.set_parameters(params.clone());
        assert_eq!(factory.parameters(), &params);

        let galaxy = factory.produce_galaxy();
        assert_eq!(galaxy, generate_galaxy(&params));
    }

    #[test]
    fn test_boxed_factories() {
        let mut factories: Vec<Box<dyn GalaxyFactory>> = GalaxyShape::ALL
            .iter()
            .map(|&shape| {
                Box::new(GalaxyGenerator::new(GenerationParameters {
                    system_count: 20,
                    shape,
                    seed: 11,
                    ..Default::default()
                })) as Box<dyn GalaxyFactory>
            })
            .collect();

        for factory in &mut factories {
            let shape = factory.parameters().shape;
            let galaxy = factory.produce_galaxy();
            assert!(galaxy.system_count() > 0, "{} produced nothing", shape.name());
        }
    }
}
