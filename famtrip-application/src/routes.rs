use super::*;

use usecases::{RouteDraft, RouteUpdate, WaypointOrder};

pub async fn fetch_routes(store: &Store, routes: &dyn RouteRepo) -> Result<Vec<Route>> {
    store.dispatch(store::routes::Action::FetchPending);
    match routes.load_routes().await {
        Ok(loaded) => {
            store.dispatch(store::routes::Action::FetchFulfilled(loaded.clone()));
            Ok(loaded)
        }
        Err(err) => {
            store.dispatch(store::routes::Action::FetchRejected(err.to_string()));
            Err(err.into())
        }
    }
}

/// Selects a route and loads its waypoints.
pub async fn open_route(
    store: &Store,
    routes: &dyn RouteRepo,
    route_id: &Id,
) -> Result<Vec<RouteWaypoint>> {
    let route = store.select(|s| s.routes.route(route_id).cloned());
    if route.is_none() {
        debug!("Opening route {route_id} that has not been fetched");
    }
    store.dispatch(store::routes::Action::Select(route));
    fetch_route_waypoints(store, routes, route_id).await
}

pub async fn fetch_route_waypoints(
    store: &Store,
    routes: &dyn RouteRepo,
    route_id: &Id,
) -> Result<Vec<RouteWaypoint>> {
    store.dispatch(store::routes::Action::WaypointsPending);
    match routes.load_route_waypoints(route_id).await {
        Ok(waypoints) => {
            store.dispatch(store::routes::Action::WaypointsFulfilled(waypoints.clone()));
            Ok(waypoints)
        }
        Err(err) => {
            store.dispatch(store::routes::Action::WaypointsRejected(err.to_string()));
            Err(err.into())
        }
    }
}

/// Stores a new route followed by its waypoints.
///
/// The waypoints are stored one after another. If one of them
/// fails the route is kept and the remaining waypoints are skipped.
pub async fn create_route(store: &Store, routes: &dyn RouteRepo, draft: RouteDraft) -> Result<Route> {
    let user = store.select(|s| s.auth.user.clone());
    let (new_route, place_ids) = draft.into_new_route(user.as_ref())?;
    store.dispatch(store::routes::Action::CreatePending);
    let route = match routes.create_route(&new_route).await {
        Ok(route) => route,
        Err(err) => {
            store.dispatch(store::routes::Action::CreateRejected(err.to_string()));
            return Err(err.into());
        }
    };
    store.dispatch(store::routes::Action::Created(route.clone()));

    let waypoints = usecases::new_waypoints(&route.id, new_route.transport_mode, &place_ids);
    let total = waypoints.len();
    for (stored, waypoint) in waypoints.iter().enumerate() {
        if let Err(err) = routes.add_waypoint(waypoint).await {
            warn!(
                "Failed to store waypoint {} of route {}: {err}",
                waypoint.order_index, route.id
            );
            let err = error::AppError::IncompleteRoute {
                route_id: route.id.clone(),
                stored,
                total,
            };
            store.dispatch(store::routes::Action::Rejected(err.to_string()));
            return Err(err);
        }
    }
    debug!("Created route {} with {total} waypoints", route.id);
    Ok(route)
}

pub async fn update_route(
    store: &Store,
    routes: &dyn RouteRepo,
    id: &Id,
    update: RouteUpdate,
) -> Result<Route> {
    match routes.update_route(id, &update).await {
        Ok(route) => {
            store.dispatch(store::routes::Action::Updated(route.clone()));
            Ok(route)
        }
        Err(err) => {
            store.dispatch(store::routes::Action::Rejected(err.to_string()));
            Err(err.into())
        }
    }
}

pub async fn delete_route(store: &Store, routes: &dyn RouteRepo, id: &Id) -> Result<()> {
    match routes.delete_route(id).await {
        Ok(()) => {
            store.dispatch(store::routes::Action::Deleted(id.clone()));
            Ok(())
        }
        Err(err) => {
            store.dispatch(store::routes::Action::Rejected(err.to_string()));
            Err(err.into())
        }
    }
}

async fn ensure_waypoints(store: &Store, routes: &dyn RouteRepo, route_id: &Id) -> Result<()> {
    let is_selected = store.select(|s| {
        s.routes
            .selected
            .as_ref()
            .is_some_and(|r| &r.id == route_id)
    });
    if !is_selected {
        open_route(store, routes, route_id).await?;
    }
    Ok(())
}

/// Appends a place to the waypoints of a route.
pub async fn add_waypoint(
    store: &Store,
    routes: &dyn RouteRepo,
    route_id: &Id,
    place_id: &Id,
) -> Result<Waypoint> {
    ensure_waypoints(store, routes, route_id).await?;
    let (is_duplicate, order_index) = store.select(|s| {
        let waypoints = &s.routes.waypoints;
        let next = waypoints
            .iter()
            .map(|wp| wp.order_index + 1)
            .max()
            .unwrap_or_default();
        (waypoints.iter().any(|wp| &wp.place_id == place_id), next)
    });
    if is_duplicate {
        return Err(usecases::Error::DuplicateWaypoint.into());
    }
    let new_waypoint = usecases::NewWaypoint {
        route_id: route_id.clone(),
        place_id: place_id.clone(),
        order_index,
        transport_to_next: None,
    };
    let waypoint = match routes.add_waypoint(&new_waypoint).await {
        Ok(waypoint) => waypoint,
        Err(err) => {
            store.dispatch(store::routes::Action::Rejected(err.to_string()));
            return Err(err.into());
        }
    };
    // Reload to get the joined place data
    fetch_route_waypoints(store, routes, route_id).await?;
    Ok(waypoint)
}

pub async fn update_waypoint(
    store: &Store,
    routes: &dyn RouteRepo,
    route_id: &Id,
    place_id: &Id,
    update: WaypointUpdate,
) -> Result<Waypoint> {
    if update.is_empty() {
        debug!("Nothing to update");
    }
    match routes.update_waypoint(route_id, place_id, &update).await {
        Ok(waypoint) => {
            store.dispatch(store::routes::Action::WaypointUpdated {
                place_id: place_id.clone(),
                update,
            });
            Ok(waypoint)
        }
        Err(err) => {
            store.dispatch(store::routes::Action::Rejected(err.to_string()));
            Err(err.into())
        }
    }
}

/// Removes a waypoint without renumbering the remaining ones.
pub async fn remove_waypoint(
    store: &Store,
    routes: &dyn RouteRepo,
    route_id: &Id,
    place_id: &Id,
) -> Result<()> {
    match routes.remove_waypoint(route_id, place_id).await {
        Ok(()) => {
            store.dispatch(store::routes::Action::WaypointRemoved {
                place_id: place_id.clone(),
            });
            Ok(())
        }
        Err(err) => {
            store.dispatch(store::routes::Action::Rejected(err.to_string()));
            Err(err.into())
        }
    }
}

/// Moves the waypoint at position `from` to position `to`.
///
/// Only the changed indices are written, one after another.
/// The store reflects exactly the indices that have been written
/// if one of the requests fails.
pub async fn reorder_waypoints(
    store: &Store,
    routes: &dyn RouteRepo,
    route_id: &Id,
    from: usize,
    to: usize,
) -> Result<Vec<WaypointOrder>> {
    ensure_waypoints(store, routes, route_id).await?;
    let orders = store.select(|s| usecases::reorder_waypoints(&s.routes.waypoints, from, to))?;
    persist_order(store, routes, route_id, orders).await
}

/// Closes the gaps left behind by removed waypoints.
pub async fn compact_waypoints(
    store: &Store,
    routes: &dyn RouteRepo,
    route_id: &Id,
) -> Result<Vec<WaypointOrder>> {
    ensure_waypoints(store, routes, route_id).await?;
    let orders = store.select(|s| usecases::compact_waypoints(&s.routes.waypoints));
    persist_order(store, routes, route_id, orders).await
}

async fn persist_order(
    store: &Store,
    routes: &dyn RouteRepo,
    route_id: &Id,
    orders: Vec<WaypointOrder>,
) -> Result<Vec<WaypointOrder>> {
    for (written, order) in orders.iter().enumerate() {
        if let Err(err) = routes
            .set_waypoint_order(route_id, &order.place_id, order.order_index)
            .await
        {
            warn!("Reordering route {route_id} stopped after {written} waypoints: {err}");
            store.dispatch(store::routes::Action::Reordered(orders[..written].to_vec()));
            store.dispatch(store::routes::Action::Rejected(err.to_string()));
            return Err(err.into());
        }
    }
    store.dispatch(store::routes::Action::Reordered(orders.clone()));
    Ok(orders)
}
