//! Galaxy aggregate: the registry of star systems and travel lanes

use std::collections::{BTreeMap, BTreeSet, HashSet};

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GalaxyError, Result};
use crate::lane::TravelLane;
use crate::spatial::SpatialIndex;
use crate::star_system::StarSystem;

/// Identifier of a star system within a galaxy
pub type SystemId = u32;

/// Identifier of a travel lane within a galaxy
pub type LaneId = u32;

/// A complete galaxy map
///
/// Owns every star system (keyed by ID) and every travel lane (keyed by ID).
/// Lanes store system IDs, never references, so the galaxy can be cloned,
/// compared and serialized as a plain value.
///
/// # Examples
///
/// ```
/// use galaxy_builder::*;
///
/// let params = GenerationParameters {
///     system_count: 20,
///     seed: 42,
///     ..Default::default()
/// };
///
/// let galaxy = generate_galaxy(&params);
/// println!("Generated {} systems", galaxy.system_count());
///
/// if let Some(system) = galaxy.get_system(1) {
///     println!("{} has {} planets", system.name, system.planet_count());
/// }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Galaxy {
    width: u32,
    height: u32,
    systems: BTreeMap<SystemId, StarSystem>,
    lanes: BTreeMap<LaneId, TravelLane>,
}

impl Galaxy {
    /// Create an empty galaxy with the given map dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            systems: BTreeMap::new(),
            lanes: BTreeMap::new(),
        }
    }

    /// Map width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Map height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Register a star system
    ///
    /// # Errors
    ///
    /// Returns `DuplicateSystem` if a system with the same ID exists
    pub fn add_system(&mut self, system: StarSystem) -> Result<()> {
        if self.systems.contains_key(&system.id) {
            return Err(GalaxyError::DuplicateSystem(system.id));
        }
        self.systems.insert(system.id, system);
        Ok(())
    }

    /// Get a system by ID
    #[inline]
    pub fn get_system(&self, id: SystemId) -> Option<&StarSystem> {
        self.systems.get(&id)
    }

    /// Get a mutable system by ID
    #[inline]
    pub fn get_system_mut(&mut self, id: SystemId) -> Option<&mut StarSystem> {
        self.systems.get_mut(&id)
    }

    /// Remove a system together with every lane touching it
    pub fn remove_system(&mut self, id: SystemId) -> Option<StarSystem> {
        let removed = self.systems.remove(&id)?;
        self.lanes.retain(|_, lane| !lane.touches(id));
        Some(removed)
    }

    /// All systems in ascending ID order
    pub fn systems(&self) -> impl Iterator<Item = &StarSystem> {
        self.systems.values()
    }

    /// Number of systems
    #[inline]
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Smallest ID greater than every registered system ID
    pub fn next_system_id(&self) -> SystemId {
        self.systems
            .keys()
            .next_back()
            .map_or(1, |id| id.saturating_add(1))
    }

    /// Connect two registered systems
    ///
    /// The lane length is the Euclidean distance between the systems at the
    /// time of the call.
    ///
    /// # Errors
    ///
    /// - `DuplicateLane` if a lane with the same ID exists
    /// - `SelfLoop` if `from == to`
    /// - `SystemNotFound` if either endpoint is not registered
    pub fn add_travel_lane(
        &mut self,
        id: LaneId,
        from: SystemId,
        to: SystemId,
    ) -> Result<&TravelLane> {
        if self.lanes.contains_key(&id) {
            return Err(GalaxyError::DuplicateLane(id));
        }
        if from == to {
            return Err(GalaxyError::SelfLoop(from));
        }
        let start = self
            .systems
            .get(&from)
            .ok_or(GalaxyError::SystemNotFound(from))?;
        let end = self
            .systems
            .get(&to)
            .ok_or(GalaxyError::SystemNotFound(to))?;

        let lane = TravelLane {
            id,
            from,
            to,
            length: start.distance_to(end),
        };
        Ok(self.lanes.entry(id).or_insert(lane))
    }

    /// Get a lane by ID
    #[inline]
    pub fn get_travel_lane(&self, id: LaneId) -> Option<&TravelLane> {
        self.lanes.get(&id)
    }

    /// Remove a lane
    ///
    /// # Errors
    ///
    /// Returns `LaneNotFound` if no lane has this ID
    pub fn remove_travel_lane(&mut self, id: LaneId) -> Result<TravelLane> {
        self.lanes.remove(&id).ok_or(GalaxyError::LaneNotFound(id))
    }

    /// All lanes in ascending ID order
    pub fn travel_lanes(&self) -> impl Iterator<Item = &TravelLane> {
        self.lanes.values()
    }

    /// Number of lanes
    #[inline]
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Smallest ID greater than every registered lane ID
    pub fn next_lane_id(&self) -> LaneId {
        self.lanes
            .keys()
            .next_back()
            .map_or(1, |id| id.saturating_add(1))
    }

    /// Lanes with `system` at either end
    pub fn lanes_for_system(&self, system: SystemId) -> impl Iterator<Item = &TravelLane> {
        self.lanes.values().filter(move |lane| lane.touches(system))
    }

    /// Distinct systems one lane away from `system`, in ascending ID order
    ///
    /// Duplicate lanes between the same pair count once.
    pub fn get_neighbors(&self, system: SystemId) -> Vec<SystemId> {
        self.lanes_for_system(system)
            .filter_map(|lane| lane.other_end(system))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Find systems within a given hop count over travel lanes (BFS)
    ///
    /// The result includes `center` itself. Returns an empty vec if `center`
    /// is not registered.
    ///
    /// # Example
    ///
    /// ```
    /// # use galaxy_builder::*;
    /// # let galaxy = generate_galaxy(&GenerationParameters { seed: 3, ..Default::default() });
    /// let nearby = galaxy.find_systems_within_hops(1, 2);
    /// println!("{} systems within 2 jumps of System_1", nearby.len());
    /// ```
    pub fn find_systems_within_hops(&self, center: SystemId, hops: usize) -> Vec<SystemId> {
        if !self.systems.contains_key(&center) {
            return vec![];
        }

        let mut visited = HashSet::new();
        let mut current = vec![center];
        visited.insert(center);

        for _ in 0..hops {
            let mut next = Vec::new();
            for &system in &current {
                for neighbor in self.get_neighbors(system) {
                    if visited.insert(neighbor) {
                        next.push(neighbor);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            current = next;
        }

        let mut reached: Vec<SystemId> = visited.into_iter().collect();
        reached.sort_unstable();
        reached
    }

    /// Find the system closest to a map position
    ///
    /// Returns `None` if the galaxy has no systems.
    pub fn find_system_at(&self, position: DVec2) -> Option<SystemId> {
        SpatialIndex::from_systems(self.systems.values())
            .nearest(position)
            .map(|(id, _)| id)
    }
}
