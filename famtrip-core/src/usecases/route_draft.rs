use super::prelude::*;
use super::reorder_waypoints::move_item;

pub const MIN_WAYPOINTS: usize = 2;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoute {
    pub name               : String,
    pub description        : Option<String>,
    pub family_id          : Id,
    pub created_by         : Id,
    pub visibility         : Visibility,
    pub difficulty         : Difficulty,
    pub transport_mode     : TransportMode,
    /// Minutes
    pub estimated_duration : Option<u32>,
    /// Kilometers
    pub total_distance     : Option<f64>,
}

/// Changes of a route, `None` leaves a field untouched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RouteUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub visibility: Option<Visibility>,
    pub difficulty: Option<Difficulty>,
    pub transport_mode: Option<TransportMode>,
    pub estimated_duration: Option<Option<u32>>,
    pub total_distance: Option<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewWaypoint {
    pub route_id: Id,
    pub place_id: Id,
    pub order_index: u32,
    pub transport_to_next: Option<TransportMode>,
}

/// A route under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDraft {
    pub name: String,
    pub description: String,
    pub family_id: Option<Id>,
    pub visibility: Visibility,
    pub difficulty: Difficulty,
    pub transport_mode: TransportMode,
    pub estimated_duration: Option<u32>,
    pub total_distance: Option<f64>,
    waypoints: Vec<Id>,
}

impl RouteDraft {
    /// Starts a new public route for the first of the given groups.
    pub fn new(family_groups: &[FamilyGroup]) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            family_id: family_groups.first().map(|g| g.id.clone()),
            visibility: Visibility::Public,
            difficulty: Difficulty::default(),
            transport_mode: TransportMode::default(),
            estimated_duration: None,
            total_distance: None,
            waypoints: vec![],
        }
    }

    pub fn waypoints(&self) -> &[Id] {
        &self.waypoints
    }

    /// Appends a place, returns `false` if it is already a waypoint.
    pub fn add_waypoint(&mut self, place_id: Id) -> bool {
        if self.waypoints.contains(&place_id) {
            return false;
        }
        self.waypoints.push(place_id);
        true
    }

    pub fn remove_waypoint(&mut self, place_id: &Id) -> bool {
        let len = self.waypoints.len();
        self.waypoints.retain(|id| id != place_id);
        self.waypoints.len() != len
    }

    pub fn move_waypoint(&mut self, from: usize, to: usize) -> Result<()> {
        move_item(&mut self.waypoints, from, to)
    }

    pub fn validate(&self, user: Option<&User>) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Name);
        }
        if !self.family_id.as_ref().is_some_and(Id::is_valid) {
            return Err(Error::FamilyGroup);
        }
        if self.waypoints.len() < MIN_WAYPOINTS {
            return Err(Error::TooFewWaypoints { min: MIN_WAYPOINTS });
        }
        if user.is_none() {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    pub fn is_valid(&self, user: Option<&User>) -> bool {
        self.validate(user).is_ok()
    }

    /// Splits the draft into the route record and its waypoints
    /// that are stored after the route has been created.
    pub fn into_new_route(self, user: Option<&User>) -> Result<(NewRoute, Vec<Id>)> {
        self.validate(user)?;
        let created_by = user.map(|u| u.id.clone()).ok_or(Error::Unauthorized)?;
        let Self {
            name,
            description,
            family_id,
            visibility,
            difficulty,
            transport_mode,
            estimated_duration,
            total_distance,
            waypoints,
        } = self;
        let description = Some(description.trim().to_owned()).filter(|d| !d.is_empty());
        let route = NewRoute {
            name: name.trim().to_owned(),
            description,
            family_id: family_id.ok_or(Error::FamilyGroup)?,
            created_by,
            visibility,
            difficulty,
            transport_mode,
            estimated_duration,
            total_distance,
        };
        Ok((route, waypoints))
    }
}

/// Waypoint records of a newly created route.
///
/// Every waypoint except the last one uses the transport
/// mode of the route for the segment to the next waypoint.
pub fn new_waypoints(route_id: &Id, mode: TransportMode, place_ids: &[Id]) -> Vec<NewWaypoint> {
    let last = place_ids.len().saturating_sub(1);
    place_ids
        .iter()
        .zip(0u32..)
        .enumerate()
        .map(|(i, (place_id, order_index))| NewWaypoint {
            route_id: route_id.clone(),
            place_id: place_id.clone(),
            order_index,
            transport_to_next: (i < last).then_some(mode),
        })
        .collect()
}

/// Parses optional numeric form input.
pub fn parse_optional<T: std::str::FromStr>(input: &str) -> Result<Option<T>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse()
        .map(Some)
        .map_err(|_| Error::InvalidNumber(input.to_owned()))
}
