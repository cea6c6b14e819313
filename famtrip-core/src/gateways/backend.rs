// Access to the hosted backend.
// Each repository is responsible for a single entity and
// its relationships. Every write returns the stored record,
// the backend is the source of truth.

use async_trait::async_trait;

use super::Result;
use crate::{
    entities::*,
    usecases::{NewPlace, NewRoute, NewWaypoint, PlaceUpdate, ProfileUpdate, RouteUpdate},
};

/// Result of a sign up.
///
/// No session is issued while the e-mail address
/// is waiting for confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub user: User,
    pub session: Option<Session>,
}

#[async_trait(?Send)]
pub trait AuthGateway {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;
    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<SignUpOutcome>;
    async fn sign_out(&self) -> Result<()>;
    /// Act on behalf of a previously established session.
    fn restore_session(&self, session: &Session);
}

#[async_trait(?Send)]
pub trait UserRepo {
    async fn load_profile(&self, user_id: &Id) -> Result<Profile>;
    async fn update_profile(&self, user_id: &Id, update: &ProfileUpdate) -> Result<Profile>;
}

#[async_trait(?Send)]
pub trait PlaceRepo {
    async fn load_places(&self) -> Result<Vec<Place>>;
    async fn create_place(&self, place: &NewPlace) -> Result<Place>;
    async fn update_place(&self, id: &Id, update: &PlaceUpdate) -> Result<Place>;
    async fn delete_place(&self, id: &Id) -> Result<()>;
}

#[async_trait(?Send)]
pub trait FamilyRepo {
    /// Newest first
    async fn load_family_groups(&self) -> Result<Vec<FamilyGroup>>;
    async fn create_family_group(&self, name: &str, admin_id: &Id) -> Result<FamilyGroup>;
    async fn update_family_group(&self, id: &Id, name: &str) -> Result<FamilyGroup>;
    async fn load_family_members(&self, group_id: &Id) -> Result<Vec<FamilyMember>>;
    async fn add_family_member(
        &self,
        group_id: &Id,
        user_id: &Id,
        role: MemberRole,
    ) -> Result<FamilyMember>;
    async fn remove_family_member(&self, group_id: &Id, user_id: &Id) -> Result<()>;
}

#[async_trait(?Send)]
pub trait RouteRepo {
    async fn load_routes(&self) -> Result<Vec<Route>>;
    async fn create_route(&self, route: &NewRoute) -> Result<Route>;
    async fn update_route(&self, id: &Id, update: &RouteUpdate) -> Result<Route>;
    async fn delete_route(&self, id: &Id) -> Result<()>;
    /// Ordered by index
    async fn load_route_waypoints(&self, route_id: &Id) -> Result<Vec<RouteWaypoint>>;
    async fn add_waypoint(&self, waypoint: &NewWaypoint) -> Result<Waypoint>;
    async fn update_waypoint(
        &self,
        route_id: &Id,
        place_id: &Id,
        update: &WaypointUpdate,
    ) -> Result<Waypoint>;
    async fn set_waypoint_order(&self, route_id: &Id, place_id: &Id, order_index: u32)
        -> Result<()>;
    async fn remove_waypoint(&self, route_id: &Id, place_id: &Id) -> Result<()>;
}
