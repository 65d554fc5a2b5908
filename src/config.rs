//! Galaxy generation parameters and builder
//!
//! This module provides the configuration types for deterministic galaxy generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GalaxyError, Result};

/// Minimum separation between two star systems, in map units
pub const MIN_SYSTEM_DISTANCE: f64 = 50.0;

/// Systems farther apart than this are never joined by a travel lane
pub const MAX_TRAVEL_LANE_DISTANCE: f64 = 150.0;

/// Default map width
pub const DEFAULT_GALAXY_WIDTH: u32 = 1000;

/// Default map height
pub const DEFAULT_GALAXY_HEIGHT: u32 = 1000;

/// Layout algorithm used to distribute star systems across the map
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GalaxyShape {
    /// Systems follow logarithmic-like arms winding out from the core
    #[default]
    Spiral,
    /// Uniform areal density inside a flattened ellipse
    Elliptical,
    /// Uniform band between an inner and an outer radius
    Ring,
    /// 3 to 6 tight groups scattered over the map
    Cluster,
}

impl GalaxyShape {
    /// Every shape, in declaration order
    pub const ALL: [GalaxyShape; 4] = [
        GalaxyShape::Spiral,
        GalaxyShape::Elliptical,
        GalaxyShape::Ring,
        GalaxyShape::Cluster,
    ];

    /// Get a human-readable name for this shape
    pub fn name(self) -> &'static str {
        match self {
            GalaxyShape::Spiral => "Spiral",
            GalaxyShape::Elliptical => "Elliptical",
            GalaxyShape::Ring => "Ring",
            GalaxyShape::Cluster => "Cluster",
        }
    }
}

/// Parameters for a single galaxy generation run
///
/// The same parameters with the same non-zero seed always produce the
/// identical galaxy. A seed of 0 asks the generator to derive one from the
/// system clock, so the result is not reproducible.
///
/// The generator does not validate these values: zero counts or zero
/// dimensions simply yield an empty galaxy. Use [`GenerationParametersBuilder`]
/// to reject them up front.
///
/// # Example
///
/// ```rust
/// use galaxy_builder::*;
///
/// let params = GenerationParameters {
///     system_count: 30,
///     shape: GalaxyShape::Ring,
///     seed: 7,
///     ..Default::default()
/// };
/// assert_eq!(params.width, DEFAULT_GALAXY_WIDTH);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParameters {
    /// Target number of star systems
    ///
    /// Soft target: dense layouts may place slightly fewer once the
    /// placement budget runs out.
    pub system_count: u32,

    /// Map width; every position satisfies `0 <= x < width`
    pub width: u32,

    /// Map height; every position satisfies `0 <= y < height`
    pub height: u32,

    /// Layout algorithm
    pub shape: GalaxyShape,

    /// Number of spiral arms (Spiral only, truncated to an integer)
    pub spiral_arms: f64,

    /// Full turns of wind-up from core to arm tip (Spiral only)
    pub spiral_tightness: f64,

    /// Inner radius as a fraction of half the shorter map side
    pub core_radius: f64,

    /// Outer radius as a fraction of half the shorter map side
    pub edge_radius: f64,

    /// Random seed (0 = derive from the system clock)
    pub seed: u32,
}

impl GenerationParameters {
    /// Half of the shorter map side, the reference length for radii
    #[inline]
    pub fn half_min_dimension(&self) -> f64 {
        self.width.min(self.height) as f64 / 2.0
    }

    /// Center of the map
    #[inline]
    pub fn center(&self) -> glam::DVec2 {
        glam::DVec2::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Check whether a position lies inside `[0, width) x [0, height)`
    #[inline]
    pub fn contains(&self, position: glam::DVec2) -> bool {
        position.x >= 0.0
            && position.x < self.width as f64
            && position.y >= 0.0
            && position.y < self.height as f64
    }
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            system_count: 50,
            width: DEFAULT_GALAXY_WIDTH,
            height: DEFAULT_GALAXY_HEIGHT,
            shape: GalaxyShape::default(),
            spiral_arms: 2.0,
            spiral_tightness: 0.5,
            core_radius: 0.2,
            edge_radius: 0.8,
            seed: 0,
        }
    }
}

/// Builder for creating validated `GenerationParameters`
///
/// # Example
///
/// ```rust
/// use galaxy_builder::*;
///
/// let params = GenerationParametersBuilder::new()
///     .system_count(120)
///     .unwrap()
///     .shape(GalaxyShape::Spiral)
///     .spiral_arms(4.0)
///     .unwrap()
///     .seed(12345)
///     .build()
///     .unwrap();
///
/// assert_eq!(params.system_count, 120);
/// ```
#[derive(Debug, Clone)]
pub struct GenerationParametersBuilder {
    params: GenerationParameters,
}

impl GenerationParametersBuilder {
    /// Create a new builder starting from the default parameters
    pub fn new() -> Self {
        Self {
            params: GenerationParameters::default(),
        }
    }

    /// Set the target number of star systems
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if count is 0
    pub fn system_count(mut self, count: u32) -> Result<Self> {
        if count == 0 {
            return Err(GalaxyError::InvalidParameters(
                "system count must be > 0".to_string(),
            ));
        }
        self.params.system_count = count;
        Ok(self)
    }

    /// Set the map dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if either dimension is 0
    pub fn dimensions(mut self, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GalaxyError::InvalidParameters(format!(
                "dimensions must be positive (got {}x{})",
                width, height
            )));
        }
        self.params.width = width;
        self.params.height = height;
        Ok(self)
    }

    /// Set the layout algorithm
    pub fn shape(mut self, shape: GalaxyShape) -> Self {
        self.params.shape = shape;
        self
    }

    /// Set the number of spiral arms
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if arms < 1
    pub fn spiral_arms(mut self, arms: f64) -> Result<Self> {
        if !(arms >= 1.0) {
            return Err(GalaxyError::InvalidParameters(format!(
                "spiral arms must be >= 1 (got {})",
                arms
            )));
        }
        self.params.spiral_arms = arms;
        Ok(self)
    }

    /// Set the spiral wind-up rate
    pub fn spiral_tightness(mut self, tightness: f64) -> Self {
        self.params.spiral_tightness = tightness;
        self
    }

    /// Set the inner and outer radius fractions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` unless `0 <= core < edge <= 1`
    pub fn radii(mut self, core_radius: f64, edge_radius: f64) -> Result<Self> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !in_unit(core_radius) || !in_unit(edge_radius) {
            return Err(GalaxyError::InvalidParameters(format!(
                "radii must lie in [0, 1] (got core {}, edge {})",
                core_radius, edge_radius
            )));
        }
        if core_radius >= edge_radius {
            return Err(GalaxyError::InvalidParameters(format!(
                "core radius must be smaller than edge radius (got core {}, edge {})",
                core_radius, edge_radius
            )));
        }
        self.params.core_radius = core_radius;
        self.params.edge_radius = edge_radius;
        Ok(self)
    }

    /// Set the random seed (0 = derive from the system clock)
    pub fn seed(mut self, seed: u32) -> Self {
        self.params.seed = seed;
        self
    }

    /// Build the parameters
    pub fn build(self) -> Result<GenerationParameters> {
        Ok(self.params)
    }
}

impl Default for GenerationParametersBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_defaults() {
        let params = GenerationParameters::default();
        assert_eq!(params.system_count, 50);
        assert_eq!(params.width, 1000);
        assert_eq!(params.height, 1000);
        assert_eq!(params.shape, GalaxyShape::Spiral);
        assert_eq!(params.spiral_arms, 2.0);
        assert_eq!(params.spiral_tightness, 0.5);
        assert_eq!(params.core_radius, 0.2);
        assert_eq!(params.edge_radius, 0.8);
        assert_eq!(params.seed, 0);
    }

    #[test]
    fn test_builder_custom() {
        let params = GenerationParametersBuilder::new()
            .system_count(50)
            .unwrap()
            .dimensions(1200, 800)
            .unwrap()
            .shape(GalaxyShape::Spiral)
            .spiral_arms(3.0)
            .unwrap()
            .spiral_tightness(0.7)
            .radii(0.3, 0.9)
            .unwrap()
            .seed(12345)
            .build()
            .unwrap();

        assert_eq!(params.system_count, 50);
        assert_eq!(params.width, 1200);
        assert_eq!(params.height, 800);
        assert_eq!(params.spiral_arms, 3.0);
        assert_eq!(params.spiral_tightness, 0.7);
        assert_eq!(params.core_radius, 0.3);
        assert_eq!(params.edge_radius, 0.9);
        assert_eq!(params.seed, 12345);
    }

    #[test]
    fn test_builder_rejects_zero_count() {
        assert!(GenerationParametersBuilder::new().system_count(0).is_err());
    }

    #[test]
    fn test_builder_rejects_zero_dimensions() {
        assert!(GenerationParametersBuilder::new().dimensions(0, 100).is_err());
        assert!(GenerationParametersBuilder::new().dimensions(100, 0).is_err());
    }

    #[test]
    fn test_builder_rejects_bad_arms() {
        assert!(GenerationParametersBuilder::new().spiral_arms(0.5).is_err());
        assert!(GenerationParametersBuilder::new().spiral_arms(f64::NAN).is_err());
    }

    #[test]
    fn test_builder_rejects_bad_radii() {
        assert!(GenerationParametersBuilder::new().radii(-0.1, 0.8).is_err());
        assert!(GenerationParametersBuilder::new().radii(0.2, 1.5).is_err());
        assert!(GenerationParametersBuilder::new().radii(0.8, 0.2).is_err());
        assert!(GenerationParametersBuilder::new().radii(0.5, 0.5).is_err());
    }

    #[test]
    fn test_contains_is_half_open() {
        let params = GenerationParameters {
            width: 100,
            height: 50,
            ..Default::default()
        };
        assert!(params.contains(DVec2::new(0.0, 0.0)));
        assert!(params.contains(DVec2::new(99.9, 49.9)));
        assert!(!params.contains(DVec2::new(100.0, 10.0)));
        assert!(!params.contains(DVec2::new(10.0, 50.0)));
        assert!(!params.contains(DVec2::new(-0.1, 10.0)));
    }

    #[test]
    fn test_half_min_dimension_and_center() {
        let params = GenerationParameters {
            width: 1200,
            height: 800,
            ..Default::default()
        };
        assert_eq!(params.half_min_dimension(), 400.0);
        assert_eq!(params.center(), DVec2::new(600.0, 400.0));
    }

    #[test]
    fn test_shape_names() {
        let names: Vec<&str> = GalaxyShape::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Spiral", "Elliptical", "Ring", "Cluster"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parameters_serialization() {
        let params = GenerationParametersBuilder::new()
            .shape(GalaxyShape::Cluster)
            .seed(99)
            .build()
            .unwrap();

        let json = serde_json::to_string(&params).unwrap();
        let restored: GenerationParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, restored);
    }
}
