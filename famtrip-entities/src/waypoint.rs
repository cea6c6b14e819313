use crate::{category::*, geo::*, id::*, rating::*, transport::*};

/// A stop of a route.
///
/// The order indices of all waypoints of a route are expected
/// to be contiguous, starting at 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub route_id: Id,
    pub place_id: Id,
    pub order_index: u32,
    /// Transport mode for the segment towards the next waypoint.
    pub transport_to_next: Option<TransportMode>,
    pub notes: Option<String>,
    /// Minutes
    pub estimated_time: Option<u32>,
}

/// A waypoint joined with the place it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteWaypoint {
    pub waypoint_id: Id,
    pub place_id: Id,
    pub place_name: String,
    pub place_description: Option<String>,
    pub place_category: Option<PlaceCategory>,
    pub place_rating: Option<Rating>,
    pub place_location_name: Option<String>,
    pub pos: Option<MapPoint>,
    pub order_index: u32,
    pub transport_to_next: Option<TransportMode>,
    pub notes: Option<String>,
    pub estimated_time: Option<u32>,
}

/// Changeable attributes of a waypoint.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WaypointUpdate {
    pub transport_to_next: Option<Option<TransportMode>>,
    pub notes: Option<Option<String>>,
    pub estimated_time: Option<Option<u32>>,
}

impl WaypointUpdate {
    pub fn is_empty(&self) -> bool {
        self.transport_to_next.is_none() && self.notes.is_none() && self.estimated_time.is_none()
    }

    pub fn apply_to(&self, wp: &mut RouteWaypoint) {
        if let Some(mode) = self.transport_to_next {
            wp.transport_to_next = mode;
        }
        if let Some(notes) = &self.notes {
            wp.notes = notes.clone();
        }
        if let Some(time) = self.estimated_time {
            wp.estimated_time = time;
        }
    }
}

/// Sorts waypoints by their order index.
pub fn sort_by_order(waypoints: &mut [RouteWaypoint]) {
    waypoints.sort_by_key(|wp| wp.order_index);
}
