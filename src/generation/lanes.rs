//! Nearest-neighbor travel lane connector

use rand::Rng;

use crate::config::MAX_TRAVEL_LANE_DISTANCE;
use crate::galaxy::{Galaxy, SystemId};
use crate::spatial::SpatialIndex;

const MIN_CONNECTIONS: usize = 2;
const MAX_EXTRA_CONNECTIONS: usize = 2;

/// Connect every system to its nearest neighbors within [`MAX_TRAVEL_LANE_DISTANCE`]
///
/// Systems are visited in ascending ID order. Each draws a connection count
/// of 2 to 4 (always, even when it has no neighbors in range) and links to
/// that many of the closest other systems, ties broken by ID. Lanes are not
/// deduplicated: if A picks B and B picks A, both lanes exist.
///
/// Returns the number of lanes added.
pub fn connect_nearest_systems<R: Rng>(galaxy: &mut Galaxy, rng: &mut R) -> usize {
    let index = SpatialIndex::from_systems(galaxy.systems());
    let origins: Vec<(SystemId, glam::DVec2)> =
        galaxy.systems().map(|s| (s.id, s.position)).collect();

    let mut next_id = galaxy.next_lane_id();
    let mut added = 0;

    for (origin, position) in origins {
        let connections = MIN_CONNECTIONS + rng.gen_range(0..=MAX_EXTRA_CONNECTIONS);

        let targets: Vec<SystemId> = index
            .within(position, MAX_TRAVEL_LANE_DISTANCE)
            .into_iter()
            .map(|(id, _)| id)
            .filter(|&id| id != origin)
            .take(connections)
            .collect();

        for target in targets {
            match galaxy.add_travel_lane(next_id, origin, target) {
                Ok(_) => {
                    next_id += 1;
                    added += 1;
                }
                Err(e) => log::warn!("Skipping lane {} -> {}: {}", origin, target, e),
            }
        }
    }

    added
}
