//! In-memory gateways for testing the flows.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use async_trait::async_trait;
use time::OffsetDateTime;

use famtrip_core::{
    entities::*,
    gateways::{
        backend::*,
        geocode::{GeoCodingGateway, GeoSuggestion},
        routing::{RoutedPath, RoutingGateway},
        storage::KeyValueStorage,
        Error, Result,
    },
    store::{self, Store},
    usecases::{NewPlace, NewRoute, NewWaypoint, PlaceUpdate, ProfileUpdate, RouteUpdate},
};

pub fn session(user_id: &str) -> Session {
    Session {
        access_token: format!("jwt-{user_id}"),
        refresh_token: None,
        user: User {
            id: user_id.into(),
            email: format!("{user_id}@example.com"),
        },
    }
}

pub fn signed_in_store() -> Store {
    let _ = env_logger::builder().is_test(true).try_init();
    let store = Store::default();
    store.dispatch(store::auth::Action::SignedIn(session("u1")));
    store
}

#[derive(Debug, Default)]
pub struct MockBackend {
    pub token: RefCell<Option<String>>,
    pub places: RefCell<Vec<Place>>,
    pub groups: RefCell<Vec<FamilyGroup>>,
    pub members: RefCell<Vec<FamilyMember>>,
    pub routes: RefCell<Vec<Route>>,
    pub waypoints: RefCell<Vec<Waypoint>>,
    pub error: RefCell<Option<String>>,
    /// Number of waypoints that can be added before failing.
    pub fail_waypoint_after: Cell<Option<usize>>,
    pub waypoint_writes: Cell<usize>,
    /// Number of order indices that can be written before failing.
    pub fail_order_after: Cell<Option<usize>>,
    pub order_writes: Cell<usize>,
}

impl MockBackend {
    pub fn fail_with(&self, msg: &str) {
        *self.error.borrow_mut() = Some(msg.to_owned());
    }

    fn check(&self) -> Result<()> {
        match &*self.error.borrow() {
            Some(msg) => Err(Error::Remote(msg.clone())),
            None => Ok(()),
        }
    }

    pub fn sorted_waypoints(&self, route_id: &Id) -> Vec<Waypoint> {
        let mut waypoints: Vec<_> = self
            .waypoints
            .borrow()
            .iter()
            .filter(|wp| &wp.route_id == route_id)
            .cloned()
            .collect();
        waypoints.sort_by_key(|wp| wp.order_index);
        waypoints
    }
}

#[async_trait(?Send)]
impl AuthGateway for MockBackend {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        self.check()?;
        if password != "secret" {
            return Err(Error::Remote("Invalid login credentials".into()));
        }
        let mut session = session("u1");
        session.user.email = email.to_owned();
        self.restore_session(&session);
        Ok(session)
    }

    async fn sign_up(&self, email: &str, _: &str, _: &str) -> Result<SignUpOutcome> {
        self.check()?;
        Ok(SignUpOutcome {
            user: User {
                id: Id::new(),
                email: email.to_owned(),
            },
            session: None,
        })
    }

    async fn sign_out(&self) -> Result<()> {
        self.token.borrow_mut().take();
        self.check()
    }

    fn restore_session(&self, session: &Session) {
        *self.token.borrow_mut() = Some(session.access_token.clone());
    }
}

#[async_trait(?Send)]
impl UserRepo for MockBackend {
    async fn load_profile(&self, user_id: &Id) -> Result<Profile> {
        self.check()?;
        Ok(Profile {
            id: user_id.clone(),
            name: None,
            email: format!("{user_id}@example.com"),
            avatar_url: None,
        })
    }

    async fn update_profile(&self, user_id: &Id, update: &ProfileUpdate) -> Result<Profile> {
        let mut profile = self.load_profile(user_id).await?;
        if let Some(name) = &update.name {
            profile.name = Some(name.clone());
        }
        if let Some(url) = &update.avatar_url {
            profile.avatar_url = url.clone();
        }
        Ok(profile)
    }
}

#[async_trait(?Send)]
impl PlaceRepo for MockBackend {
    async fn load_places(&self) -> Result<Vec<Place>> {
        self.check()?;
        Ok(self.places.borrow().clone())
    }

    async fn create_place(&self, place: &NewPlace) -> Result<Place> {
        self.check()?;
        let now = OffsetDateTime::now_utc();
        let NewPlace {
            name,
            description,
            category,
            rating,
            pos,
            location_name,
            visibility,
            family_id,
            created_by,
            practical_info,
        } = place.clone();
        let place = Place {
            id: Id::new(),
            name,
            description,
            category,
            rating,
            pos,
            location_name,
            visibility,
            family_id,
            created_by,
            practical_info,
            created_at: now,
            updated_at: now,
        };
        self.places.borrow_mut().push(place.clone());
        Ok(place)
    }

    async fn update_place(&self, id: &Id, update: &PlaceUpdate) -> Result<Place> {
        self.check()?;
        let mut places = self.places.borrow_mut();
        let place = places
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(Error::NotFound)?;
        let update = update.clone();
        if let Some(name) = update.name {
            place.name = name;
        }
        if let Some(description) = update.description {
            place.description = description;
        }
        if let Some(category) = update.category {
            place.category = category;
        }
        if let Some(rating) = update.rating {
            place.rating = rating;
        }
        if let Some(pos) = update.pos {
            place.pos = Some(pos);
        }
        if let Some(location_name) = update.location_name {
            place.location_name = location_name;
        }
        if let Some(visibility) = update.visibility {
            place.visibility = visibility;
        }
        if let Some(info) = update.practical_info {
            place.practical_info = Some(info);
        }
        // Stored rows don't contain decoded coordinates
        Ok(Place {
            pos: update.pos,
            ..place.clone()
        })
    }

    async fn delete_place(&self, id: &Id) -> Result<()> {
        self.check()?;
        self.places.borrow_mut().retain(|p| &p.id != id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl FamilyRepo for MockBackend {
    async fn load_family_groups(&self) -> Result<Vec<FamilyGroup>> {
        self.check()?;
        Ok(self.groups.borrow().clone())
    }

    async fn create_family_group(&self, name: &str, admin_id: &Id) -> Result<FamilyGroup> {
        self.check()?;
        let group = FamilyGroup {
            id: Id::new(),
            name: name.to_owned(),
            admin_id: admin_id.clone(),
            created_at: OffsetDateTime::now_utc(),
        };
        self.groups.borrow_mut().push(group.clone());
        Ok(group)
    }

    async fn update_family_group(&self, id: &Id, name: &str) -> Result<FamilyGroup> {
        self.check()?;
        let mut groups = self.groups.borrow_mut();
        let group = groups
            .iter_mut()
            .find(|g| &g.id == id)
            .ok_or(Error::NotFound)?;
        group.name = name.to_owned();
        Ok(group.clone())
    }

    async fn load_family_members(&self, group_id: &Id) -> Result<Vec<FamilyMember>> {
        self.check()?;
        Ok(self
            .members
            .borrow()
            .iter()
            .filter(|m| &m.group_id == group_id)
            .cloned()
            .collect())
    }

    async fn add_family_member(
        &self,
        group_id: &Id,
        user_id: &Id,
        role: MemberRole,
    ) -> Result<FamilyMember> {
        self.check()?;
        let member = FamilyMember {
            group_id: group_id.clone(),
            user_id: user_id.clone(),
            role,
            user: None,
        };
        self.members.borrow_mut().push(member.clone());
        Ok(member)
    }

    async fn remove_family_member(&self, group_id: &Id, user_id: &Id) -> Result<()> {
        self.check()?;
        self.members
            .borrow_mut()
            .retain(|m| !(&m.group_id == group_id && &m.user_id == user_id));
        Ok(())
    }
}

#[async_trait(?Send)]
impl RouteRepo for MockBackend {
    async fn load_routes(&self) -> Result<Vec<Route>> {
        self.check()?;
        Ok(self.routes.borrow().clone())
    }

    async fn create_route(&self, route: &NewRoute) -> Result<Route> {
        self.check()?;
        let now = OffsetDateTime::now_utc();
        let route = Route {
            id: Id::new(),
            name: route.name.clone(),
            description: route.description.clone(),
            difficulty: Some(route.difficulty),
            transport_mode: Some(route.transport_mode),
            total_distance: route.total_distance,
            estimated_duration: route.estimated_duration,
            visibility: route.visibility,
            family_id: route.family_id.clone(),
            created_by: route.created_by.clone(),
            created_at: now,
            updated_at: now,
            waypoint_count: 0,
        };
        self.routes.borrow_mut().push(route.clone());
        Ok(route)
    }

    async fn update_route(&self, id: &Id, update: &RouteUpdate) -> Result<Route> {
        self.check()?;
        let mut routes = self.routes.borrow_mut();
        let route = routes
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or(Error::NotFound)?;
        if let Some(name) = &update.name {
            route.name = name.clone();
        }
        if let Some(description) = &update.description {
            route.description = description.clone();
        }
        if let Some(visibility) = update.visibility {
            route.visibility = visibility;
        }
        if let Some(difficulty) = update.difficulty {
            route.difficulty = Some(difficulty);
        }
        if let Some(mode) = update.transport_mode {
            route.transport_mode = Some(mode);
        }
        if let Some(duration) = update.estimated_duration {
            route.estimated_duration = duration;
        }
        if let Some(distance) = update.total_distance {
            route.total_distance = distance;
        }
        Ok(route.clone())
    }

    async fn delete_route(&self, id: &Id) -> Result<()> {
        self.check()?;
        self.routes.borrow_mut().retain(|r| &r.id != id);
        self.waypoints.borrow_mut().retain(|wp| &wp.route_id != id);
        Ok(())
    }

    async fn load_route_waypoints(&self, route_id: &Id) -> Result<Vec<RouteWaypoint>> {
        self.check()?;
        let places = self.places.borrow();
        let by_id: HashMap<_, _> = places.iter().map(|p| (&p.id, p)).collect();
        Ok(self
            .sorted_waypoints(route_id)
            .into_iter()
            .map(|wp| {
                let place = by_id.get(&wp.place_id);
                RouteWaypoint {
                    waypoint_id: Id::new(),
                    place_name: place
                        .map(|p| p.name.clone())
                        .unwrap_or_else(|| wp.place_id.to_string()),
                    place_description: None,
                    place_category: place.and_then(|p| p.category),
                    place_rating: place.and_then(|p| p.rating),
                    place_location_name: None,
                    pos: place.and_then(|p| p.pos),
                    place_id: wp.place_id,
                    order_index: wp.order_index,
                    transport_to_next: wp.transport_to_next,
                    notes: wp.notes,
                    estimated_time: wp.estimated_time,
                }
            })
            .collect())
    }

    async fn add_waypoint(&self, waypoint: &NewWaypoint) -> Result<Waypoint> {
        self.check()?;
        let writes = self.waypoint_writes.get();
        if self.fail_waypoint_after.get() == Some(writes) {
            return Err(Error::Remote("insert failed".into()));
        }
        self.waypoint_writes.set(writes + 1);
        let waypoint = Waypoint {
            route_id: waypoint.route_id.clone(),
            place_id: waypoint.place_id.clone(),
            order_index: waypoint.order_index,
            transport_to_next: waypoint.transport_to_next,
            notes: None,
            estimated_time: None,
        };
        self.waypoints.borrow_mut().push(waypoint.clone());
        Ok(waypoint)
    }

    async fn update_waypoint(
        &self,
        route_id: &Id,
        place_id: &Id,
        update: &WaypointUpdate,
    ) -> Result<Waypoint> {
        self.check()?;
        let mut waypoints = self.waypoints.borrow_mut();
        let wp = waypoints
            .iter_mut()
            .find(|wp| &wp.route_id == route_id && &wp.place_id == place_id)
            .ok_or(Error::NotFound)?;
        if let Some(mode) = update.transport_to_next {
            wp.transport_to_next = mode;
        }
        if let Some(notes) = &update.notes {
            wp.notes = notes.clone();
        }
        if let Some(time) = update.estimated_time {
            wp.estimated_time = time;
        }
        Ok(wp.clone())
    }

    async fn set_waypoint_order(
        &self,
        route_id: &Id,
        place_id: &Id,
        order_index: u32,
    ) -> Result<()> {
        self.check()?;
        let writes = self.order_writes.get();
        if self.fail_order_after.get() == Some(writes) {
            return Err(Error::Remote("update failed".into()));
        }
        let mut waypoints = self.waypoints.borrow_mut();
        let wp = waypoints
            .iter_mut()
            .find(|wp| &wp.route_id == route_id && &wp.place_id == place_id)
            .ok_or(Error::NotFound)?;
        wp.order_index = order_index;
        self.order_writes.set(writes + 1);
        Ok(())
    }

    async fn remove_waypoint(&self, route_id: &Id, place_id: &Id) -> Result<()> {
        self.check()?;
        self.waypoints
            .borrow_mut()
            .retain(|wp| !(&wp.route_id == route_id && &wp.place_id == place_id));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub values: RefCell<HashMap<String, String>>,
    pub fail: Cell<bool>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail.get() {
            return Err(anyhow::anyhow!("storage unavailable").into());
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail.get() {
            return Err(anyhow::anyhow!("storage unavailable").into());
        }
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MockGeoCoder {
    pub queries: RefCell<Vec<String>>,
    pub fail: Cell<bool>,
}

#[async_trait(?Send)]
impl GeoCodingGateway for MockGeoCoder {
    async fn search(&self, query: &str, _limit: usize) -> Result<Vec<GeoSuggestion>> {
        self.queries.borrow_mut().push(query.to_owned());
        if self.fail.get() {
            return Err(Error::Remote("service unavailable".into()));
        }
        Ok(vec![GeoSuggestion {
            place_id: "1".into(),
            display_name: format!("{query}, Czechia"),
            pos: MapPoint::from_lat_lng_deg(49.2, 16.6),
        }])
    }
}

#[derive(Debug, Default)]
pub struct MockRouter {
    pub requests: Cell<usize>,
    pub fail_for: RefCell<Vec<RoutingProfile>>,
}

#[async_trait(?Send)]
impl RoutingGateway for MockRouter {
    async fn route(
        &self,
        profile: RoutingProfile,
        from: MapPoint,
        to: MapPoint,
    ) -> Result<RoutedPath> {
        self.requests.set(self.requests.get() + 1);
        if self.fail_for.borrow().contains(&profile) {
            return Err(Error::Remote("NoRoute".into()));
        }
        Ok(RoutedPath {
            coordinates: vec![from, MapPoint::midpoint(from, to), to],
            distance: MapPoint::distance(from, to),
            duration: 60.0,
        })
    }
}
