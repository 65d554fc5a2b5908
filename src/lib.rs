//! Procedural galaxy map generation
//!
//! A standalone library for generating 2D galaxy maps: star systems laid out
//! in one of four shapes, each with a star, a size class and a planet list,
//! connected by travel lanes. Suitable for strategy games and map editors.
//!
//! # Quick Start
//!
//! ```rust
//! use galaxy_builder::*;
//!
//! // Configure a galaxy
//! let params = GenerationParametersBuilder::new()
//!     .system_count(50).unwrap()
//!     .shape(GalaxyShape::Spiral)
//!     .spiral_arms(3.0).unwrap()
//!     .seed(42)
//!     .build().unwrap();
//!
//! // Generate it
//! let galaxy = generate_galaxy(&params);
//! println!("{} systems, {} lanes", galaxy.system_count(), galaxy.lane_count());
//!
//! // Walk the lane graph
//! for neighbor in galaxy.get_neighbors(1) {
//!     println!("System 1 -> System {}", neighbor);
//! }
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): KD-tree backed placement checks, lane candidate
//!   search and map picking; without it the same queries use a linear scan
//! - `serde`: Enables serialization support for parameters and whole galaxies

// Modules
pub mod error;
pub mod config;
pub mod star_system;
pub mod planet;
pub mod lane;
pub mod galaxy;
pub mod spatial;
pub mod generation;
pub mod factory;

// Re-export core types for convenience
pub use error::{GalaxyError, Result};
pub use config::{
    GalaxyShape, GenerationParameters, GenerationParametersBuilder, DEFAULT_GALAXY_HEIGHT,
    DEFAULT_GALAXY_WIDTH, MAX_TRAVEL_LANE_DISTANCE, MIN_SYSTEM_DISTANCE,
};
pub use star_system::{default_system_name, StarSystem, StarType, SystemSize};
pub use planet::{Planet, PlanetType};
pub use lane::TravelLane;
pub use galaxy::{Galaxy, LaneId, SystemId};
pub use spatial::SpatialIndex;
pub use generation::{generate_galaxy, GalaxyGenerator};
pub use factory::GalaxyFactory;

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
