use strum::{AsRefStr, Display, EnumIter, EnumString};
use time::OffsetDateTime;

use crate::{id::*, place::Visibility, transport::*};

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Moderate,
    Hard,
}

/// An ordered trip between places.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub transport_mode: Option<TransportMode>,
    /// Kilometers
    pub total_distance: Option<f64>,
    /// Minutes
    pub estimated_duration: Option<u32>,
    pub visibility: Visibility,
    pub family_id: Id,
    pub created_by: Id,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    /// Derived by the backend, not stored.
    pub waypoint_count: usize,
}
