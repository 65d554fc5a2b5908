//! Travel lanes between star systems

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::galaxy::{LaneId, SystemId};

/// A connection between two star systems
///
/// Lanes reference systems by ID and never own them. They are directionless
/// for display purposes, but `from`/`to` keep the order in which the
/// connector created them, so A->B and B->A may both exist as separate lanes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TravelLane {
    /// Unique identifier, assigned sequentially from 1 during generation
    pub id: LaneId,

    /// System the lane was created from
    pub from: SystemId,

    /// System the lane was created towards
    pub to: SystemId,

    /// Euclidean distance between the two systems at creation time
    pub length: f64,
}

impl TravelLane {
    /// Check if this lane joins `a` and `b`, in either direction
    #[inline]
    pub fn connects(&self, a: SystemId, b: SystemId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// Check if this lane touches `system`
    #[inline]
    pub fn touches(&self, system: SystemId) -> bool {
        self.from == system || self.to == system
    }

    /// Get the system on the opposite end from `system`
    ///
    /// Returns `None` if `system` is not an endpoint of this lane.
    pub fn other_end(&self, system: SystemId) -> Option<SystemId> {
        if self.from == system {
            Some(self.to)
        } else if self.to == system {
            Some(self.from)
        } else {
            None
        }
    }
}
