use super::prelude::*;

/// Moves an element to a new position by removing it at `from`
/// and inserting it again at `to`.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<()> {
    if from >= items.len() {
        return Err(Error::WaypointIndex { index: from });
    }
    if to >= items.len() {
        return Err(Error::WaypointIndex { index: to });
    }
    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}

/// The new position of a waypoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaypointOrder {
    pub place_id: Id,
    pub order_index: u32,
}

/// Moves a waypoint of a route and calculates all order
/// indices that need to be rewritten.
///
/// The resulting indices are contiguous starting at 0, gaps
/// left behind by removed waypoints are closed. Waypoints that
/// keep their index are omitted.
pub fn reorder_waypoints(
    waypoints: &[RouteWaypoint],
    from: usize,
    to: usize,
) -> Result<Vec<WaypointOrder>> {
    let mut sorted: Vec<_> = waypoints.iter().collect();
    sorted.sort_by_key(|wp| wp.order_index);
    move_item(&mut sorted, from, to)?;
    Ok(changed_order(sorted))
}

/// Order indices needed to close gaps without moving anything.
pub fn compact_waypoints(waypoints: &[RouteWaypoint]) -> Vec<WaypointOrder> {
    let mut sorted: Vec<_> = waypoints.iter().collect();
    sorted.sort_by_key(|wp| wp.order_index);
    changed_order(sorted)
}

fn changed_order(sorted: Vec<&RouteWaypoint>) -> Vec<WaypointOrder> {
    sorted
        .into_iter()
        .zip(0u32..)
        .filter(|(wp, idx)| wp.order_index != *idx)
        .map(|(wp, order_index)| WaypointOrder {
            place_id: wp.place_id.clone(),
            order_index,
        })
        .collect()
}
