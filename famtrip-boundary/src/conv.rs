use super::*;
use famtrip_entities as e;
use std::convert::TryFrom;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
    #[error(transparent)]
    Rating(#[from] e::rating::RatingOutOfRange),
    #[error("invalid coordinates")]
    Coordinates,
    #[error("negative number: {0}")]
    Negative(i64),
}

fn parse_variant<T: std::str::FromStr>(
    kind: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ConversionError> {
    value
        .map(|v| {
            v.parse()
                .map_err(|_| ConversionError::UnknownVariant { kind, value: v })
        })
        .transpose()
}

fn unsigned(value: Option<i64>) -> Result<Option<u32>, ConversionError> {
    value
        .map(|v| u32::try_from(v).map_err(|_| ConversionError::Negative(v)))
        .transpose()
}

fn map_point(lat: Option<f64>, lng: Option<f64>) -> Result<Option<e::geo::MapPoint>, ConversionError> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => e::geo::MapPoint::try_from_lat_lng_deg(lat, lng)
            .map(Some)
            .ok_or(ConversionError::Coordinates),
        _ => Ok(None),
    }
}

/// Well-known text of a point, longitude first.
pub fn wkt_point(pos: e::geo::MapPoint) -> String {
    format!("POINT({} {})", pos.lng(), pos.lat())
}

impl From<AuthUser> for e::user::User {
    fn from(from: AuthUser) -> Self {
        let AuthUser { id, email } = from;
        Self {
            id: id.into(),
            email: email.unwrap_or_default(),
        }
    }
}

impl From<AuthSession> for e::user::Session {
    fn from(from: AuthSession) -> Self {
        let AuthSession {
            access_token,
            refresh_token,
            user,
        } = from;
        Self {
            access_token,
            refresh_token,
            user: user.into(),
        }
    }
}

impl From<e::user::User> for AuthUser {
    fn from(from: e::user::User) -> Self {
        let e::user::User { id, email } = from;
        Self {
            id: id.into(),
            email: Some(email),
        }
    }
}

impl From<e::user::Session> for AuthSession {
    fn from(from: e::user::Session) -> Self {
        let e::user::Session {
            access_token,
            refresh_token,
            user,
        } = from;
        Self {
            access_token,
            refresh_token,
            user: user.into(),
        }
    }
}

impl From<UserRow> for e::user::Profile {
    fn from(from: UserRow) -> Self {
        let UserRow {
            id,
            name,
            email,
            avatar_url,
        } = from;
        Self {
            id: id.into(),
            name,
            email,
            avatar_url,
        }
    }
}

impl From<PracticalInfo> for e::place::PracticalInfo {
    fn from(from: PracticalInfo) -> Self {
        let PracticalInfo {
            entrance_fee,
            currency,
            parking,
            description,
        } = from;
        Self {
            entrance_fee,
            currency,
            parking,
            description,
        }
    }
}

impl From<e::place::PracticalInfo> for PracticalInfo {
    fn from(from: e::place::PracticalInfo) -> Self {
        let e::place::PracticalInfo {
            entrance_fee,
            currency,
            parking,
            description,
        } = from;
        Self {
            entrance_fee,
            currency,
            parking,
            description,
        }
    }
}

impl TryFrom<PlaceRow> for e::place::Place {
    type Error = ConversionError;

    fn try_from(from: PlaceRow) -> Result<Self, Self::Error> {
        let PlaceRow {
            id,
            name,
            description,
            category,
            rating,
            location_name,
            is_public,
            created_by,
            family_id,
            created_at,
            updated_at,
            practical_info,
            latitude,
            longitude,
        } = from;
        Ok(Self {
            id: id.into(),
            name,
            description,
            category: parse_variant("category", category)?,
            rating: rating.map(e::rating::Rating::try_from).transpose()?,
            pos: map_point(latitude, longitude)?,
            location_name,
            visibility: is_public.into(),
            family_id: family_id.into(),
            created_by: created_by.into(),
            practical_info: practical_info.map(Into::into),
            created_at,
            updated_at,
        })
    }
}

impl From<FamilyGroupRow> for e::family::FamilyGroup {
    fn from(from: FamilyGroupRow) -> Self {
        let FamilyGroupRow {
            id,
            name,
            admin_id,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            admin_id: admin_id.into(),
            created_at,
        }
    }
}

impl TryFrom<FamilyMemberRow> for e::family::FamilyMember {
    type Error = ConversionError;

    fn try_from(from: FamilyMemberRow) -> Result<Self, Self::Error> {
        let FamilyMemberRow {
            group_id,
            user_id,
            role,
            users,
        } = from;
        let role = parse_variant("role", Some(role))?.unwrap_or_default();
        Ok(Self {
            group_id: group_id.into(),
            user_id: user_id.into(),
            role,
            user: users.map(Into::into),
        })
    }
}

impl TryFrom<RouteRow> for e::route::Route {
    type Error = ConversionError;

    fn try_from(from: RouteRow) -> Result<Self, Self::Error> {
        let RouteRow {
            id,
            name,
            description,
            created_by,
            family_id,
            is_public,
            estimated_duration,
            difficulty_level,
            transport_mode,
            total_distance,
            created_at,
            updated_at,
            waypoint_count,
        } = from;
        Ok(Self {
            id: id.into(),
            name,
            description,
            difficulty: parse_variant("difficulty", difficulty_level)?,
            transport_mode: parse_variant("transport mode", transport_mode)?,
            total_distance,
            estimated_duration: unsigned(estimated_duration)?,
            visibility: is_public.into(),
            family_id: family_id.into(),
            created_by: created_by.into(),
            created_at,
            updated_at,
            waypoint_count: usize::try_from(waypoint_count)
                .map_err(|_| ConversionError::Negative(waypoint_count))?,
        })
    }
}

impl TryFrom<RouteWaypointRow> for e::waypoint::RouteWaypoint {
    type Error = ConversionError;

    fn try_from(from: RouteWaypointRow) -> Result<Self, Self::Error> {
        let RouteWaypointRow {
            waypoint_id,
            place_id,
            place_name,
            place_description,
            place_category,
            place_rating,
            place_location_name,
            latitude,
            longitude,
            order_index,
            transport_to_next,
            notes,
            estimated_time,
        } = from;
        Ok(Self {
            waypoint_id: waypoint_id.into(),
            place_id: place_id.into(),
            place_name,
            place_description,
            place_category: parse_variant("category", place_category)?,
            place_rating: place_rating.map(e::rating::Rating::try_from).transpose()?,
            place_location_name,
            pos: map_point(latitude, longitude)?,
            order_index: unsigned(Some(order_index))?.unwrap_or_default(),
            transport_to_next: parse_variant("transport mode", transport_to_next)?,
            notes,
            estimated_time: unsigned(estimated_time)?,
        })
    }
}

impl TryFrom<RoutePlaceRow> for e::waypoint::Waypoint {
    type Error = ConversionError;

    fn try_from(from: RoutePlaceRow) -> Result<Self, Self::Error> {
        let RoutePlaceRow {
            id: _,
            route_id,
            place_id,
            order_index,
            transport_to_next,
            notes,
            estimated_time,
        } = from;
        Ok(Self {
            route_id: route_id.into(),
            place_id: place_id.into(),
            order_index: unsigned(Some(order_index))?.unwrap_or_default(),
            transport_to_next: parse_variant("transport mode", transport_to_next)?,
            notes,
            estimated_time: unsigned(estimated_time)?,
        })
    }
}
