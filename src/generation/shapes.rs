//! Star system layout algorithms
//!
//! Each shape proposes candidate positions and hands them to a shared
//! placement pass, which enforces the map bounds, the minimum separation and
//! the per-shape attempt budget.
//!
//! # Placement rules
//!
//! - Out-of-bounds candidates are discarded and retried (one attempt spent).
//! - In-bounds candidates are accepted if no placed system lies closer than
//!   [`MIN_SYSTEM_DISTANCE`], or unconditionally once the pass has spent more
//!   than `accept_anyway_after × target` attempts.
//! - After `max_attempts × target` attempts the pass stops, possibly with
//!   fewer systems than requested.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;

use crate::config::{GalaxyShape, GenerationParameters, MIN_SYSTEM_DISTANCE};
use crate::galaxy::SystemId;
use crate::spatial::SpatialIndex;

/// Maximum angular jitter applied to spiral slots, in radians
const SPIRAL_ANGLE_JITTER: f64 = 0.1;
/// Maximum radial jitter applied to spiral slots, as a fraction of the outer radius
const SPIRAL_RADIUS_JITTER: f64 = 0.025;
/// Radius exponent; values below 1 push systems away from the exact center
const SPIRAL_RADIUS_EXPONENT: f64 = 0.8;

/// Elliptical minor axis as a fraction of the major axis
const ELLIPSE_FLATTENING: f64 = 0.6;

/// Ring inner radius as a fraction of half the shorter map side
const RING_INNER_RADIUS: f64 = 0.3;

const MIN_CLUSTERS: usize = 3;
const MAX_CLUSTERS: usize = 6;
const MIN_CLUSTER_RADIUS: f64 = 50.0;
const CLUSTER_RADIUS_SPREAD: f64 = 100.0;

/// Attempt limits for one shape pass, as multiples of the target count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementBudget {
    /// Past this many attempts per target system, separation is no longer enforced
    pub accept_anyway_after: usize,
    /// Hard stop, in attempts per target system
    pub max_attempts: usize,
}

impl PlacementBudget {
    /// Budget used by each layout algorithm
    pub fn for_shape(shape: GalaxyShape) -> Self {
        match shape {
            GalaxyShape::Spiral | GalaxyShape::Cluster => Self {
                accept_anyway_after: 3,
                max_attempts: 10,
            },
            GalaxyShape::Elliptical | GalaxyShape::Ring => Self {
                accept_anyway_after: 3,
                max_attempts: 5,
            },
        }
    }
}

/// Shared state of one placement pass
struct Placer<'a> {
    params: &'a GenerationParameters,
    index: SpatialIndex,
    positions: Vec<DVec2>,
    attempts: usize,
    accept_anyway_after: usize,
    max_attempts: usize,
    target: usize,
}

impl<'a> Placer<'a> {
    fn new(params: &'a GenerationParameters, target: usize) -> Self {
        let budget = PlacementBudget::for_shape(params.shape);
        Self {
            params,
            index: SpatialIndex::new(),
            positions: Vec::with_capacity(target),
            attempts: 0,
            accept_anyway_after: target * budget.accept_anyway_after,
            max_attempts: target * budget.max_attempts,
            target,
        }
    }

    #[inline]
    fn placed(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    fn exhausted(&self) -> bool {
        self.attempts >= self.max_attempts
    }

    #[inline]
    fn wants_more(&self) -> bool {
        self.placed() < self.target && !self.exhausted()
    }

    /// Spend one attempt on `candidate`; returns true if it was placed
    fn try_place(&mut self, candidate: DVec2) -> bool {
        self.attempts += 1;

        if !self.params.contains(candidate) {
            return false;
        }

        let accept = self.index.is_clear(candidate, MIN_SYSTEM_DISTANCE)
            || self.attempts > self.accept_anyway_after;
        if accept {
            let id = self.positions.len() as SystemId + 1;
            self.index.insert(id, candidate);
            self.positions.push(candidate);
        }
        accept
    }

    /// Retry `sample` until a candidate is placed or the budget runs out
    fn place_one<R, F>(&mut self, rng: &mut R, mut sample: F) -> bool
    where
        R: Rng,
        F: FnMut(&mut R) -> DVec2,
    {
        while !self.exhausted() {
            let candidate = sample(rng);
            if self.try_place(candidate) {
                return true;
            }
        }
        false
    }

    fn finish(self) -> Vec<DVec2> {
        if self.placed() < self.target {
            log::debug!(
                "{} placement stopped after {} attempts: placed {}/{} systems",
                self.params.shape.name(),
                self.attempts,
                self.placed(),
                self.target
            );
        }
        self.positions
    }
}

/// Generate star system positions for `params.shape`
///
/// The i-th returned position belongs to system ID `i + 1`.
pub fn generate_positions<R: Rng>(params: &GenerationParameters, rng: &mut R) -> Vec<DVec2> {
    match params.shape {
        GalaxyShape::Spiral => spiral_positions(params, rng),
        GalaxyShape::Elliptical => elliptical_positions(params, rng),
        GalaxyShape::Ring => ring_positions(params, rng),
        GalaxyShape::Cluster => cluster_positions(params, rng),
    }
}

/// Distribute systems along `spiral_arms` arms winding out from the core
///
/// Arm `a` of `n` starts at angle `2π·a/n`. A system at arm progress `p`
/// sits at radius `min + (max - min)·p^0.8` and angle
/// `offset + p·tightness·2π`, with small random jitter on both.
pub fn spiral_positions<R: Rng>(params: &GenerationParameters, rng: &mut R) -> Vec<DVec2> {
    let target = params.system_count as usize;
    // Truncation also maps NaN and negative arm counts to zero
    let arms = params.spiral_arms as usize;
    let mut placer = Placer::new(params, target);
    if arms == 0 || target == 0 {
        return placer.finish();
    }

    let center = params.center();
    let max_radius = params.half_min_dimension() * params.edge_radius;
    let min_radius = max_radius * params.core_radius;
    let per_arm = target / arms;
    let remainder = target % arms;

    'arms: for arm in 0..arms {
        let in_arm = per_arm + usize::from(arm < remainder);
        if in_arm == 0 {
            break;
        }
        let arm_offset = TAU * arm as f64 / arms as f64;

        for slot in 0..in_arm {
            let progress = if in_arm == 1 {
                0.5
            } else {
                slot as f64 / in_arm as f64
            };
            let radius =
                min_radius + (max_radius - min_radius) * progress.powf(SPIRAL_RADIUS_EXPONENT);
            let angle = arm_offset + progress * params.spiral_tightness * TAU;

            let placed = placer.place_one(rng, |rng| {
                let angle = angle + rng.gen_range(-SPIRAL_ANGLE_JITTER..SPIRAL_ANGLE_JITTER);
                let radius =
                    radius + rng.gen_range(-1.0..1.0) * SPIRAL_RADIUS_JITTER * max_radius;
                center + DVec2::from_angle(angle) * radius
            });
            if !placed {
                break 'arms;
            }
        }
    }

    placer.finish()
}

/// Uniform areal density inside an ellipse flattened along Y
///
/// The X radius is `width / 2 · edge_radius` and the Y radius 60% of it.
pub fn elliptical_positions<R: Rng>(params: &GenerationParameters, rng: &mut R) -> Vec<DVec2> {
    let target = params.system_count as usize;
    let center = params.center();
    let radius_x = params.width as f64 / 2.0 * params.edge_radius;
    let radius_y = radius_x * ELLIPSE_FLATTENING;
    let mut placer = Placer::new(params, target);

    while placer.wants_more() {
        let angle = rng.gen::<f64>() * TAU;
        // sqrt keeps the density uniform per unit area
        let r = rng.gen::<f64>().sqrt();
        placer.try_place(center + DVec2::new(r * radius_x * angle.cos(), r * radius_y * angle.sin()));
    }

    placer.finish()
}

/// Uniform radius between 30% and `edge_radius` of half the shorter map side
pub fn ring_positions<R: Rng>(params: &GenerationParameters, rng: &mut R) -> Vec<DVec2> {
    let target = params.system_count as usize;
    let center = params.center();
    let inner = params.half_min_dimension() * RING_INNER_RADIUS;
    let outer = params.half_min_dimension() * params.edge_radius;
    let mut placer = Placer::new(params, target);

    while placer.wants_more() {
        let angle = rng.gen::<f64>() * TAU;
        let r = inner + (outer - inner) * rng.gen::<f64>();
        placer.try_place(center + DVec2::from_angle(angle) * r);
    }

    placer.finish()
}

/// 3 to 6 clusters at random map positions, each with a radius of 50 to 150
///
/// The target count is split evenly across clusters, the remainder going to
/// the first ones.
pub fn cluster_positions<R: Rng>(params: &GenerationParameters, rng: &mut R) -> Vec<DVec2> {
    let target = params.system_count as usize;
    let mut placer = Placer::new(params, target);
    if target == 0 {
        return placer.finish();
    }

    let clusters = rng.gen_range(MIN_CLUSTERS..=MAX_CLUSTERS);
    let per_cluster = target / clusters;
    let remainder = target % clusters;

    'clusters: for cluster in 0..clusters {
        let quota = per_cluster + usize::from(cluster < remainder);
        let cluster_center = DVec2::new(
            rng.gen::<f64>() * params.width as f64,
            rng.gen::<f64>() * params.height as f64,
        );
        let cluster_radius = MIN_CLUSTER_RADIUS + rng.gen::<f64>() * CLUSTER_RADIUS_SPREAD;

        for _ in 0..quota {
            let placed = placer.place_one(rng, |rng| {
                let angle = rng.gen::<f64>() * TAU;
                let r = rng.gen::<f64>() * cluster_radius;
                cluster_center + DVec2::from_angle(angle) * r
            });
            if !placed {
                break 'clusters;
            }
        }
    }

    placer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn params(shape: GalaxyShape, count: u32) -> GenerationParameters {
        GenerationParameters {
            system_count: count,
            shape,
            seed: 42,
            ..Default::default()
        }
    }

    fn distances_from_center(params: &GenerationParameters, positions: &[DVec2]) -> Vec<f64> {
        positions
            .iter()
            .map(|p| p.distance(params.center()))
            .collect()
    }

    #[test]
    fn test_budgets() {
        for shape in GalaxyShape::ALL {
            let budget = PlacementBudget::for_shape(shape);
            assert!(budget.accept_anyway_after < budget.max_attempts);
            assert!((5..=10).contains(&budget.max_attempts));
        }
    }

    #[test]
    fn test_zero_target_places_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for shape in GalaxyShape::ALL {
            assert!(generate_positions(&params(shape, 0), &mut rng).is_empty());
        }
    }

    #[test]
    fn test_zero_arms_places_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut p = params(GalaxyShape::Spiral, 20);
        p.spiral_arms = 0.0;
        assert!(spiral_positions(&p, &mut rng).is_empty());
        p.spiral_arms = f64::NAN;
        assert!(spiral_positions(&p, &mut rng).is_empty());
    }

    #[test]
    fn test_zero_dimensions_place_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for shape in GalaxyShape::ALL {
            let mut p = params(shape, 10);
            p.width = 0;
            assert!(generate_positions(&p, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_spiral_radius_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let p = params(GalaxyShape::Spiral, 100);
        let positions = spiral_positions(&p, &mut rng);
        assert_eq!(positions.len(), 100);

        // min radius 80, max radius 400, jitter at most 2.5% of 400
        for d in distances_from_center(&p, &positions) {
            assert!(d >= 70.0 - 1e-9 && d <= 410.0 + 1e-9, "distance {}", d);
        }
    }

    #[test]
    fn test_single_system_arm_sits_at_midpoint() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let p = GenerationParameters {
            system_count: 1,
            spiral_arms: 1.0,
            core_radius: 0.0,
            edge_radius: 1.0,
            ..params(GalaxyShape::Spiral, 1)
        };
        let positions = spiral_positions(&p, &mut rng);
        assert_eq!(positions.len(), 1);

        let expected = 500.0 * 0.5f64.powf(0.8);
        let d = positions[0].distance(p.center());
        assert!((d - expected).abs() <= 500.0 * 0.025 + 1e-9);
    }

    #[test]
    fn test_elliptical_is_flattened() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let p = params(GalaxyShape::Elliptical, 100);
        let positions = elliptical_positions(&p, &mut rng);
        assert_eq!(positions.len(), 100);

        let center = p.center();
        for pos in &positions {
            let offset = *pos - center;
            assert!(offset.x.abs() <= 400.0 + 1e-9);
            assert!(offset.y.abs() <= 240.0 + 1e-9);
        }
    }

    #[test]
    fn test_ring_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let p = params(GalaxyShape::Ring, 100);
        let positions = ring_positions(&p, &mut rng);
        assert_eq!(positions.len(), 100);

        for d in distances_from_center(&p, &positions) {
            assert!(d >= 150.0 - 1e-9 && d <= 400.0 + 1e-9, "distance {}", d);
        }
    }

    #[test]
    fn test_cluster_positions_in_bounds() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let p = params(GalaxyShape::Cluster, 60);
            let positions = cluster_positions(&p, &mut rng);
            assert!(!positions.is_empty());
            assert!(positions.len() <= 60);
            assert!(positions.iter().all(|&pos| p.contains(pos)));
        }
    }

    #[test]
    fn test_separation_holds_in_sparse_layouts() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let p = params(GalaxyShape::Ring, 20);
        let positions = ring_positions(&p, &mut rng);

        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert!(a.distance(*b) >= MIN_SYSTEM_DISTANCE);
            }
        }
    }

    #[test]
    fn test_dense_layouts_fall_back_to_accepting() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        // 300 systems cannot all be 50 apart inside this ring
        let p = params(GalaxyShape::Ring, 300);
        let positions = ring_positions(&p, &mut rng);
        assert_eq!(positions.len(), 300);
    }
}
