//! The hosted backend as seen by the use cases.

use std::cell::RefCell;

use async_trait::async_trait;

use famtrip_backend_api::{BackendApi, Error as ApiError};
use famtrip_boundary::{self as json, ConversionError, ErrorCode};
use famtrip_core::{
    entities::*,
    gateways::{backend::*, Error, Result},
    usecases::{NewPlace, NewRoute, NewWaypoint, PlaceUpdate, ProfileUpdate, RouteUpdate},
};

mod conv;

/// No rows or more than one row for a single object request.
const NO_SINGLE_ROW: &str = "PGRST116";
const JWT_EXPIRED: &str = "PGRST301";
const INSUFFICIENT_PRIVILEGE: &str = "42501";

fn from_api_error(err: ApiError) -> Error {
    match err {
        ApiError::Api(err) => match &err.code {
            Some(ErrorCode::Text(code)) if code == NO_SINGLE_ROW => Error::NotFound,
            Some(ErrorCode::Text(code)) if code == JWT_EXPIRED || code == INSUFFICIENT_PRIVILEGE => {
                Error::Unauthorized
            }
            Some(ErrorCode::Status(401 | 403)) => Error::Unauthorized,
            Some(ErrorCode::Status(404)) => Error::NotFound,
            _ => Error::Remote(err.message),
        },
        ApiError::Fetch(msg) => Error::Remote(msg),
        ApiError::Json(msg) => Error::Other(anyhow::anyhow!(msg)),
    }
}

fn from_conversion_error(err: ConversionError) -> Error {
    Error::Other(anyhow::Error::new(err).context("Unexpected data from the backend"))
}

fn convert<T, U>(rows: Vec<T>) -> Result<Vec<U>>
where
    U: TryFrom<T, Error = ConversionError>,
{
    rows.into_iter()
        .map(U::try_from)
        .collect::<std::result::Result<_, _>>()
        .map_err(from_conversion_error)
}

/// All repositories backed by a single [`BackendApi`].
///
/// Requests are sent with the access token of the most recent
/// session that has been established or restored.
#[derive(Debug)]
pub struct Backend {
    anonymous: BackendApi,
    current: RefCell<BackendApi>,
}

impl Backend {
    pub fn new(api: BackendApi) -> Self {
        Self {
            current: RefCell::new(api.clone()),
            anonymous: api,
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.current.borrow().token().is_some()
    }

    // Never hold the borrow across an await point
    fn api(&self) -> BackendApi {
        self.current.borrow().clone()
    }

    fn authorize(&self, session: &Session) {
        log::debug!("Acting on behalf of user {}", session.user.id);
        *self.current.borrow_mut() = self.anonymous.authorized(&session.access_token);
    }
}

#[async_trait(?Send)]
impl AuthGateway for Backend {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let credentials = json::Credentials {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let session: Session = self
            .anonymous
            .sign_in(&credentials)
            .await
            .map_err(from_api_error)?
            .into();
        self.authorize(&session);
        Ok(session)
    }

    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<SignUpOutcome> {
        let sign_up = json::SignUp {
            email: email.to_owned(),
            password: password.to_owned(),
            data: json::SignUpData {
                name: name.to_owned(),
            },
        };
        let response = self
            .anonymous
            .sign_up(&sign_up)
            .await
            .map_err(from_api_error)?;
        let outcome = match response {
            json::SignUpResponse::Session(session) => {
                let session = Session::from(session);
                self.authorize(&session);
                SignUpOutcome {
                    user: session.user.clone(),
                    session: Some(session),
                }
            }
            json::SignUpResponse::User(user) => {
                log::info!("Sign up of {email} awaits confirmation");
                SignUpOutcome {
                    user: user.into(),
                    session: None,
                }
            }
        };
        Ok(outcome)
    }

    async fn sign_out(&self) -> Result<()> {
        let api = self.api();
        *self.current.borrow_mut() = self.anonymous.clone();
        if api.token().is_none() {
            return Ok(());
        }
        api.sign_out().await.map_err(from_api_error)
    }

    fn restore_session(&self, session: &Session) {
        self.authorize(session);
    }
}

#[async_trait(?Send)]
impl UserRepo for Backend {
    async fn load_profile(&self, user_id: &Id) -> Result<Profile> {
        let row = self
            .api()
            .user_profile(user_id.as_str())
            .await
            .map_err(from_api_error)?;
        Ok(row.into())
    }

    async fn update_profile(&self, user_id: &Id, update: &ProfileUpdate) -> Result<Profile> {
        let row = self
            .api()
            .update_user_profile(user_id.as_str(), &conv::user_update(update))
            .await
            .map_err(from_api_error)?;
        Ok(row.into())
    }
}

#[async_trait(?Send)]
impl PlaceRepo for Backend {
    async fn load_places(&self) -> Result<Vec<Place>> {
        let rows = self
            .api()
            .places_with_coordinates()
            .await
            .map_err(from_api_error)?;
        convert(rows)
    }

    async fn create_place(&self, place: &NewPlace) -> Result<Place> {
        let row = self
            .api()
            .create_place(&conv::new_place(place))
            .await
            .map_err(from_api_error)?;
        let mut created = Place::try_from(row).map_err(from_conversion_error)?;
        // Table rows don't contain the decoded coordinates
        if created.pos.is_none() {
            created.pos = place.pos;
        }
        Ok(created)
    }

    async fn update_place(&self, id: &Id, update: &PlaceUpdate) -> Result<Place> {
        let row = self
            .api()
            .update_place(id.as_str(), &conv::place_update(update))
            .await
            .map_err(from_api_error)?;
        let mut updated = Place::try_from(row).map_err(from_conversion_error)?;
        if updated.pos.is_none() {
            updated.pos = update.pos;
        }
        Ok(updated)
    }

    async fn delete_place(&self, id: &Id) -> Result<()> {
        self.api()
            .delete_place(id.as_str())
            .await
            .map_err(from_api_error)
    }
}

#[async_trait(?Send)]
impl FamilyRepo for Backend {
    async fn load_family_groups(&self) -> Result<Vec<FamilyGroup>> {
        let rows = self.api().family_groups().await.map_err(from_api_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_family_group(&self, name: &str, admin_id: &Id) -> Result<FamilyGroup> {
        let group = json::NewFamilyGroup {
            name: name.to_owned(),
            admin_id: admin_id.to_string(),
        };
        let row = self
            .api()
            .create_family_group(&group)
            .await
            .map_err(from_api_error)?;
        Ok(row.into())
    }

    async fn update_family_group(&self, id: &Id, name: &str) -> Result<FamilyGroup> {
        let update = json::FamilyGroupUpdate {
            name: name.to_owned(),
        };
        let row = self
            .api()
            .update_family_group(id.as_str(), &update)
            .await
            .map_err(from_api_error)?;
        Ok(row.into())
    }

    async fn load_family_members(&self, group_id: &Id) -> Result<Vec<FamilyMember>> {
        let rows = self
            .api()
            .family_members(group_id.as_str())
            .await
            .map_err(from_api_error)?;
        convert(rows)
    }

    async fn add_family_member(
        &self,
        group_id: &Id,
        user_id: &Id,
        role: MemberRole,
    ) -> Result<FamilyMember> {
        let member = json::NewFamilyMember {
            group_id: group_id.to_string(),
            user_id: user_id.to_string(),
            role: role.as_ref().to_owned(),
        };
        let row = self
            .api()
            .add_family_member(&member)
            .await
            .map_err(from_api_error)?;
        FamilyMember::try_from(row).map_err(from_conversion_error)
    }

    async fn remove_family_member(&self, group_id: &Id, user_id: &Id) -> Result<()> {
        self.api()
            .remove_family_member(group_id.as_str(), user_id.as_str())
            .await
            .map_err(from_api_error)
    }
}

#[async_trait(?Send)]
impl RouteRepo for Backend {
    async fn load_routes(&self) -> Result<Vec<Route>> {
        let rows = self
            .api()
            .routes_with_details()
            .await
            .map_err(from_api_error)?;
        convert(rows)
    }

    async fn create_route(&self, route: &NewRoute) -> Result<Route> {
        let row = self
            .api()
            .create_route(&conv::new_route(route))
            .await
            .map_err(from_api_error)?;
        Route::try_from(row).map_err(from_conversion_error)
    }

    async fn update_route(&self, id: &Id, update: &RouteUpdate) -> Result<Route> {
        let row = self
            .api()
            .update_route(id.as_str(), &conv::route_update(update))
            .await
            .map_err(from_api_error)?;
        Route::try_from(row).map_err(from_conversion_error)
    }

    async fn delete_route(&self, id: &Id) -> Result<()> {
        self.api()
            .delete_route(id.as_str())
            .await
            .map_err(from_api_error)
    }

    async fn load_route_waypoints(&self, route_id: &Id) -> Result<Vec<RouteWaypoint>> {
        let rows = self
            .api()
            .route_waypoints(route_id.as_str())
            .await
            .map_err(from_api_error)?;
        let mut waypoints = convert(rows)?;
        sort_by_order(&mut waypoints);
        Ok(waypoints)
    }

    async fn add_waypoint(&self, waypoint: &NewWaypoint) -> Result<Waypoint> {
        let row = self
            .api()
            .add_route_place(&conv::new_route_place(waypoint))
            .await
            .map_err(from_api_error)?;
        Waypoint::try_from(row).map_err(from_conversion_error)
    }

    async fn update_waypoint(
        &self,
        route_id: &Id,
        place_id: &Id,
        update: &WaypointUpdate,
    ) -> Result<Waypoint> {
        let row = self
            .api()
            .update_route_place(
                route_id.as_str(),
                place_id.as_str(),
                &conv::route_place_update(update),
            )
            .await
            .map_err(from_api_error)?;
        Waypoint::try_from(row).map_err(from_conversion_error)
    }

    async fn set_waypoint_order(
        &self,
        route_id: &Id,
        place_id: &Id,
        order_index: u32,
    ) -> Result<()> {
        self.api()
            .update_route_place(
                route_id.as_str(),
                place_id.as_str(),
                &conv::route_place_order(order_index),
            )
            .await
            .map_err(from_api_error)?;
        Ok(())
    }

    async fn remove_waypoint(&self, route_id: &Id, place_id: &Id) -> Result<()> {
        self.api()
            .remove_route_place(route_id.as_str(), place_id.as_str())
            .await
            .map_err(from_api_error)
    }
}
