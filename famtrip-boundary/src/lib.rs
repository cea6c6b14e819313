//! Rows and payloads as exchanged with the backend.
//!
//! Field names follow the database columns and RPC result
//! columns exactly.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::*;

// ---- auth ---- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SignUp {
    pub email: String,
    pub password: String,
    pub data: SignUpData,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SignUpData {
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

/// A sign up yields a session if no e-mail confirmation is required.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(AuthSession),
    User(AuthUser),
}

// ---- errors ---- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(untagged)]
pub enum ErrorCode {
    Status(u16),
    Text(String),
}

/// Error body of the auth service or of the REST interface.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    #[serde(default, alias = "msg", alias = "error_description")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

// ---- users ---- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct UserRow {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<Option<String>>,
}

// ---- places ---- //

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PracticalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance_fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Result row of `get_places_with_coordinates`.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PlaceRow {
    pub id             : String,
    pub name           : String,
    #[serde(default)]
    pub description    : Option<String>,
    #[serde(default)]
    pub category       : Option<String>,
    #[serde(default)]
    pub rating         : Option<i64>,
    #[serde(default)]
    pub location_name  : Option<String>,
    pub is_public      : bool,
    pub created_by     : String,
    pub family_id      : String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at     : OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at     : OffsetDateTime,
    #[serde(default)]
    pub practical_info : Option<PracticalInfo>,
    #[serde(default)]
    pub latitude       : Option<f64>,
    #[serde(default)]
    pub longitude      : Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewPlace {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub rating: Option<i64>,
    /// WKT, e.g. `POINT(14.4378 50.0755)`
    pub location: Option<String>,
    pub location_name: Option<String>,
    pub is_public: bool,
    pub family_id: String,
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practical_info: Option<PracticalInfo>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PlaceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practical_info: Option<PracticalInfo>,
}

// ---- families ---- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct FamilyGroupRow {
    pub id: String,
    pub name: String,
    pub admin_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewFamilyGroup {
    pub name: String,
    pub admin_id: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct FamilyGroupUpdate {
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct FamilyMemberRow {
    pub group_id: String,
    pub user_id: String,
    pub role: String,
    /// Embedded resource, only present if selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<UserRow>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewFamilyMember {
    pub group_id: String,
    pub user_id: String,
    pub role: String,
}

// ---- routes ---- //

/// Result row of `get_routes_with_details` or a plain `routes` row.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RouteRow {
    pub id                 : String,
    pub name               : String,
    #[serde(default)]
    pub description        : Option<String>,
    pub created_by         : String,
    pub family_id          : String,
    pub is_public          : bool,
    #[serde(default)]
    pub estimated_duration : Option<i64>,
    #[serde(default)]
    pub difficulty_level   : Option<String>,
    #[serde(default)]
    pub transport_mode     : Option<String>,
    #[serde(default)]
    pub total_distance     : Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at         : OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at         : OffsetDateTime,
    #[serde(default)]
    pub waypoint_count     : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewRoute {
    pub name: String,
    pub description: Option<String>,
    pub family_id: String,
    pub created_by: String,
    pub is_public: bool,
    pub estimated_duration: Option<i64>,
    pub difficulty_level: Option<String>,
    pub transport_mode: Option<String>,
    pub total_distance: Option<f64>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RouteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_mode: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<Option<f64>>,
}

/// Result row of `get_route_waypoints`.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RouteWaypointRow {
    pub waypoint_id         : String,
    pub place_id            : String,
    pub place_name          : String,
    #[serde(default)]
    pub place_description   : Option<String>,
    #[serde(default)]
    pub place_category      : Option<String>,
    #[serde(default)]
    pub place_rating        : Option<i64>,
    #[serde(default)]
    pub place_location_name : Option<String>,
    #[serde(default)]
    pub latitude            : Option<f64>,
    #[serde(default)]
    pub longitude           : Option<f64>,
    pub order_index         : i64,
    #[serde(default)]
    pub transport_to_next   : Option<String>,
    #[serde(default)]
    pub notes               : Option<String>,
    #[serde(default)]
    pub estimated_time      : Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct RouteWaypointsParams {
    pub route_id: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewRoutePlace {
    pub route_id: String,
    pub place_id: String,
    pub order_index: i64,
    pub transport_to_next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct RoutePlaceRow {
    pub id: String,
    pub route_id: String,
    pub place_id: String,
    pub order_index: i64,
    #[serde(default)]
    pub transport_to_next: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub estimated_time: Option<i64>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct RoutePlaceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_to_next: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<Option<i64>>,
}
