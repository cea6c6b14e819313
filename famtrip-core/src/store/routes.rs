use crate::{entities::*, usecases::WaypointOrder};

#[derive(Debug, Default, Clone)]
pub struct RoutesState {
    pub routes: Vec<Route>,
    pub selected: Option<Route>,
    /// Waypoints of the selected route, sorted by index.
    pub waypoints: Vec<RouteWaypoint>,
    pub loading: bool,
    pub error: Option<String>,
    pub creating: bool,
}

#[derive(Debug, Clone)]
pub enum Action {
    FetchPending,
    FetchFulfilled(Vec<Route>),
    FetchRejected(String),
    WaypointsPending,
    WaypointsFulfilled(Vec<RouteWaypoint>),
    WaypointsRejected(String),
    CreatePending,
    Created(Route),
    CreateRejected(String),
    Updated(Route),
    WaypointUpdated {
        place_id: Id,
        update: WaypointUpdate,
    },
    WaypointMoved {
        place_id: Id,
        pos: MapPoint,
    },
    WaypointRemoved {
        place_id: Id,
    },
    Reordered(Vec<WaypointOrder>),
    Deleted(Id),
    /// An update, reorder or delete request failed.
    Rejected(String),
    Select(Option<Route>),
    SetCreating(bool),
    ClearError,
}

impl RoutesState {
    pub fn route(&self, id: &Id) -> Option<&Route> {
        self.routes.iter().find(|r| &r.id == id)
    }

    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::FetchPending | Action::WaypointsPending => {
                self.loading = true;
                self.error = None;
            }
            Action::FetchFulfilled(routes) => {
                self.loading = false;
                self.routes = routes;
            }
            Action::WaypointsFulfilled(mut waypoints) => {
                self.loading = false;
                sort_by_order(&mut waypoints);
                self.waypoints = waypoints;
            }
            Action::FetchRejected(err) | Action::WaypointsRejected(err) => {
                self.loading = false;
                self.error = Some(err);
            }
            Action::CreatePending => {
                self.creating = true;
                self.error = None;
            }
            Action::Created(mut route) => {
                self.creating = false;
                route.waypoint_count = 0;
                self.routes.insert(0, route);
            }
            Action::CreateRejected(err) => {
                self.creating = false;
                self.error = Some(err);
            }
            Action::Updated(route) => {
                if let Some(r) = self.routes.iter_mut().find(|r| r.id == route.id) {
                    merge_route(r, route.clone());
                }
                if let Some(selected) = self.selected.as_mut().filter(|s| s.id == route.id) {
                    merge_route(selected, route);
                }
            }
            Action::WaypointUpdated { place_id, update } => {
                if let Some(wp) = self.waypoints.iter_mut().find(|wp| wp.place_id == place_id) {
                    update.apply_to(wp);
                }
            }
            Action::WaypointMoved { place_id, pos } => {
                for wp in self.waypoints.iter_mut().filter(|wp| wp.place_id == place_id) {
                    wp.pos = Some(pos);
                }
            }
            Action::WaypointRemoved { place_id } => {
                self.waypoints.retain(|wp| wp.place_id != place_id);
            }
            Action::Reordered(orders) => {
                for WaypointOrder {
                    place_id,
                    order_index,
                } in orders
                {
                    if let Some(wp) = self.waypoints.iter_mut().find(|wp| wp.place_id == place_id)
                    {
                        wp.order_index = order_index;
                    }
                }
                sort_by_order(&mut self.waypoints);
            }
            Action::Deleted(id) => {
                self.routes.retain(|r| r.id != id);
                if self.selected.as_ref().is_some_and(|s| s.id == id) {
                    self.selected = None;
                    self.waypoints.clear();
                }
            }
            Action::Rejected(err) => {
                self.error = Some(err);
            }
            Action::Select(route) => {
                if route.as_ref().map(|r| &r.id) != self.selected.as_ref().map(|r| &r.id) {
                    self.waypoints.clear();
                }
                self.selected = route;
            }
            Action::SetCreating(creating) => {
                self.creating = creating;
            }
            Action::ClearError => {
                self.error = None;
            }
        }
    }
}

// Records returned by updates don't carry the derived count.
fn merge_route(target: &mut Route, update: Route) {
    let waypoint_count = target.waypoint_count;
    *target = Route {
        waypoint_count,
        ..update
    };
}
