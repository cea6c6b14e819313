use reqwest::Method;

use famtrip_boundary::{
    NewRoute, NewRoutePlace, RoutePlaceRow, RoutePlaceUpdate, RouteRow, RouteUpdate,
    RouteWaypointRow, RouteWaypointsParams,
};

use crate::{into_empty, into_json, BackendApi, Query, Result, ACCEPT_OBJECT, RETURN_REPRESENTATION};

const ROUTES: &str = "routes";
const ROUTE_PLACES: &str = "route_places";

impl BackendApi {
    /// All visible routes including their number of waypoints.
    pub async fn routes_with_details(&self) -> Result<Vec<RouteRow>> {
        let response = self
            .rpc("get_routes_with_details")
            .json(&serde_json::json!({}))
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn create_route(&self, route: &NewRoute) -> Result<RouteRow> {
        let response = self
            .table(Method::POST, ROUTES, &Query::new().select("*"))
            .header("Accept", ACCEPT_OBJECT)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(route)
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn update_route(&self, id: &str, update: &RouteUpdate) -> Result<RouteRow> {
        let query = Query::new().eq("id", id).select("*");
        let response = self
            .table(Method::PATCH, ROUTES, &query)
            .header("Accept", ACCEPT_OBJECT)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(update)
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn delete_route(&self, id: &str) -> Result<()> {
        let query = Query::new().eq("id", id);
        let response = self.table(Method::DELETE, ROUTES, &query).send().await?;
        into_empty(response).await
    }

    /// Waypoints of a route joined with their places, ordered by index.
    pub async fn route_waypoints(&self, route_id: &str) -> Result<Vec<RouteWaypointRow>> {
        let params = RouteWaypointsParams {
            route_id: route_id.to_owned(),
        };
        let response = self
            .rpc("get_route_waypoints")
            .json(&params)
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn add_route_place(&self, waypoint: &NewRoutePlace) -> Result<RoutePlaceRow> {
        let response = self
            .table(Method::POST, ROUTE_PLACES, &Query::new().select("*"))
            .header("Accept", ACCEPT_OBJECT)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(waypoint)
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn update_route_place(
        &self,
        route_id: &str,
        place_id: &str,
        update: &RoutePlaceUpdate,
    ) -> Result<RoutePlaceRow> {
        let query = Query::new()
            .eq("route_id", route_id)
            .eq("place_id", place_id)
            .select("*");
        let response = self
            .table(Method::PATCH, ROUTE_PLACES, &query)
            .header("Accept", ACCEPT_OBJECT)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(update)
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn remove_route_place(&self, route_id: &str, place_id: &str) -> Result<()> {
        let query = Query::new()
            .eq("route_id", route_id)
            .eq("place_id", place_id);
        let response = self.table(Method::DELETE, ROUTE_PLACES, &query).send().await?;
        into_empty(response).await
    }
}
