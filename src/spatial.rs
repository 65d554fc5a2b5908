//! Spatial indexing for star system placement and lookups
//!
//! With the `spatial-index` feature (default) queries go through a KD-tree.
//! Without it they fall back to a linear scan. Both backends return identical
//! results: distances are always recomputed exactly from the stored positions
//! and ties are broken by system ID.

#[cfg(feature = "spatial-index")]
use std::collections::HashMap;

use glam::DVec2;
#[cfg(feature = "spatial-index")]
use kiddo::{KdTree, SquaredEuclidean};

use crate::galaxy::SystemId;
use crate::star_system::StarSystem;

/// Relative slack on KD-tree radius queries; exact filtering happens afterwards
#[cfg(feature = "spatial-index")]
const RADIUS_SLACK: f64 = 1e-9;

/// Most tree entries allowed to share one coordinate value on either axis
///
/// kiddo cannot split a bucket whose items all share the split value, so this
/// stays below its 32-item bucket. Further positions go to a linear overflow list.
#[cfg(feature = "spatial-index")]
const MAX_SHARED_AXIS_VALUE: usize = 31;

/// Hashable key for one coordinate, with `-0.0` folded into `0.0`
#[cfg(feature = "spatial-index")]
#[inline]
fn axis_key(value: f64) -> u64 {
    (value + 0.0).to_bits()
}

/// Incrementally built index of system positions
///
/// Supports nearest-neighbor lookups (minimum-separation checks, map picking)
/// and radius queries (travel lane candidates).
///
/// # Performance
///
/// - Insert: O(log n) with the KD-tree, O(1) without
/// - Nearest / radius query: O(log n + k) with the KD-tree, O(n) without
///
/// Positions that would crowd the tree (many systems stacked on one
/// coordinate) are scanned linearly instead, so coincident systems are safe.
#[derive(Clone)]
pub struct SpatialIndex {
    entries: Vec<(SystemId, DVec2)>,
    #[cfg(feature = "spatial-index")]
    tree: KdTree<f64, 2>,
    #[cfg(feature = "spatial-index")]
    axis_counts: [HashMap<u64, usize>; 2],
    /// Entry indices kept out of the tree
    #[cfg(feature = "spatial-index")]
    overflow: Vec<usize>,
}

impl SpatialIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            #[cfg(feature = "spatial-index")]
            tree: KdTree::new(),
            #[cfg(feature = "spatial-index")]
            axis_counts: [HashMap::new(), HashMap::new()],
            #[cfg(feature = "spatial-index")]
            overflow: Vec::new(),
        }
    }

    /// Build an index over existing systems
    ///
    /// # Example
    ///
    /// ```
    /// use galaxy_builder::*;
    /// use glam::DVec2;
    ///
    /// let systems = vec![
    ///     StarSystem::new(1, DVec2::new(100.0, 100.0)),
    ///     StarSystem::new(2, DVec2::new(400.0, 250.0)),
    /// ];
    ///
    /// let index = SpatialIndex::from_systems(&systems);
    /// let (id, _distance) = index.nearest(DVec2::new(390.0, 240.0)).unwrap();
    /// assert_eq!(id, 2);
    /// ```
    pub fn from_systems<'a, I>(systems: I) -> Self
    where
        I: IntoIterator<Item = &'a StarSystem>,
    {
        let mut index = Self::new();
        for system in systems {
            index.insert(system.id, system.position);
        }
        index
    }

    /// Add a system position to the index
    pub fn insert(&mut self, id: SystemId, position: DVec2) {
        #[cfg(feature = "spatial-index")]
        {
            let entry = self.entries.len();
            let keys = [axis_key(position.x), axis_key(position.y)];
            let crowded = keys
                .iter()
                .zip(&self.axis_counts)
                .any(|(key, counts)| counts.get(key).copied().unwrap_or(0) >= MAX_SHARED_AXIS_VALUE);

            if crowded {
                self.overflow.push(entry);
            } else {
                for (key, counts) in keys.into_iter().zip(self.axis_counts.iter_mut()) {
                    *counts.entry(key).or_insert(0) += 1;
                }
                self.tree.add(&[position.x, position.y], entry as u64);
            }
        }
        self.entries.push((id, position));
    }

    /// Number of indexed positions
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index holds no positions
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the indexed system closest to `position`
    ///
    /// Returns the system ID and its Euclidean distance, or `None` if the
    /// index is empty.
    pub fn nearest(&self, position: DVec2) -> Option<(SystemId, f64)> {
        if self.entries.is_empty() {
            return None;
        }

        #[cfg(feature = "spatial-index")]
        {
            let mut best = None;
            if self.overflow.len() < self.entries.len() {
                let found = self
                    .tree
                    .nearest_one::<SquaredEuclidean>(&[position.x, position.y]);
                let (id, at) = self.entries[found.item as usize];
                best = Some((id, at.distance(position)));
            }

            for &entry in &self.overflow {
                let (id, at) = self.entries[entry];
                let candidate = (id, at.distance(position));
                best = match best {
                    Some(current) if !closer(candidate, current) => Some(current),
                    _ => Some(candidate),
                };
            }
            best
        }

        #[cfg(not(feature = "spatial-index"))]
        {
            self.entries
                .iter()
                .map(|&(id, at)| (id, at.distance(position)))
                .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
        }
    }

    /// Check that no indexed system lies closer than `min_distance` to `position`
    pub fn is_clear(&self, position: DVec2, min_distance: f64) -> bool {
        match self.nearest(position) {
            Some((_, distance)) => distance >= min_distance,
            None => true,
        }
    }

    /// All indexed systems within `radius` of `position` (inclusive)
    ///
    /// Results are sorted by ascending distance, then by system ID.
    pub fn within(&self, position: DVec2, radius: f64) -> Vec<(SystemId, f64)> {
        if !(radius >= 0.0) || self.entries.is_empty() {
            return Vec::new();
        }

        #[cfg(feature = "spatial-index")]
        let candidates: Vec<(SystemId, DVec2)> = {
            let query_radius = radius * radius * (1.0 + RADIUS_SLACK);
            self.tree
                .within_unsorted::<SquaredEuclidean>(&[position.x, position.y], query_radius)
                .into_iter()
                .map(|found| self.entries[found.item as usize])
                .chain(self.overflow.iter().map(|&entry| self.entries[entry]))
                .collect()
        };

        #[cfg(not(feature = "spatial-index"))]
        let candidates: Vec<(SystemId, DVec2)> = self.entries.clone();

        let mut found: Vec<(SystemId, f64)> = candidates
            .into_iter()
            .map(|(id, at)| (id, at.distance(position)))
            .filter(|&(_, distance)| distance <= radius)
            .collect();
        found.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        found
    }
}

/// Order by distance, then by system ID
#[cfg(feature = "spatial-index")]
#[inline]
fn closer(a: (SystemId, f64), b: (SystemId, f64)) -> bool {
    a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)).is_lt()
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> SpatialIndex {
        let mut index = SpatialIndex::new();
        index.insert(1, DVec2::new(0.0, 0.0));
        index.insert(2, DVec2::new(100.0, 0.0));
        index.insert(3, DVec2::new(0.0, 100.0));
        index.insert(4, DVec2::new(300.0, 300.0));
        index
    }

    #[test]
    fn test_empty_index() {
        let index = SpatialIndex::new();
        assert!(index.is_empty());
        assert!(index.nearest(DVec2::new(1.0, 1.0)).is_none());
        assert!(index.is_clear(DVec2::new(1.0, 1.0), 50.0));
        assert!(index.within(DVec2::ZERO, 1000.0).is_empty());
    }

    #[test]
    fn test_nearest() {
        let index = sample_index();
        assert_eq!(index.len(), 4);

        let (id, distance) = index.nearest(DVec2::new(90.0, 0.0)).unwrap();
        assert_eq!(id, 2);
        assert!((distance - 10.0).abs() < 1e-12);

        let (id, _) = index.nearest(DVec2::new(280.0, 290.0)).unwrap();
        assert_eq!(id, 4);
    }

    #[test]
    fn test_is_clear() {
        let index = sample_index();
        assert!(!index.is_clear(DVec2::new(20.0, 20.0), 50.0));
        assert!(index.is_clear(DVec2::new(200.0, 150.0), 50.0));
        // Exactly at the minimum separation counts as clear
        assert!(index.is_clear(DVec2::new(150.0, 0.0), 50.0));
    }

    #[test]
    fn test_within_sorted_and_inclusive() {
        let index = sample_index();
        let found = index.within(DVec2::new(0.0, 0.0), 100.0);
        let ids: Vec<SystemId> = found.iter().map(|&(id, _)| id).collect();
        // 2 and 3 are both exactly 100 away: tie broken by ID
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(found[1].1, 100.0);
    }

    #[test]
    fn test_within_negative_radius() {
        let index = sample_index();
        assert!(index.within(DVec2::ZERO, -1.0).is_empty());
    }

    #[test]
    fn test_coincident_positions() {
        let mut index = SpatialIndex::new();
        for id in 1..=200 {
            index.insert(id, DVec2::new(500.0, 500.0));
        }
        index.insert(201, DVec2::new(700.0, 500.0));
        assert_eq!(index.len(), 201);

        let (id, distance) = index.nearest(DVec2::new(501.0, 500.0)).unwrap();
        assert!(id <= 200);
        assert!((distance - 1.0).abs() < 1e-12);
        assert_eq!(index.nearest(DVec2::new(690.0, 500.0)).unwrap().0, 201);

        let found = index.within(DVec2::new(500.0, 500.0), 10.0);
        let ids: Vec<SystemId> = found.iter().map(|&(id, _)| id).collect();
        assert_eq!(ids, (1..=200).collect::<Vec<_>>());
        assert!(!index.is_clear(DVec2::new(520.0, 500.0), 50.0));
    }

    #[test]
    fn test_shared_axis_value() {
        let mut index = SpatialIndex::new();
        for id in 1..=100 {
            index.insert(id, DVec2::new(250.0, id as f64 * 3.0));
        }
        assert_eq!(index.nearest(DVec2::new(251.0, 151.0)).unwrap().0, 50);
        assert_eq!(index.within(DVec2::new(250.0, 150.0), 3.0).len(), 3);
    }

    #[test]
    fn test_from_systems() {
        let systems = vec![
            StarSystem::new(10, DVec2::new(5.0, 5.0)),
            StarSystem::new(20, DVec2::new(50.0, 50.0)),
        ];
        let index = SpatialIndex::from_systems(&systems);
        assert_eq!(index.len(), 2);
        assert_eq!(index.nearest(DVec2::new(45.0, 45.0)).unwrap().0, 20);
    }
}
