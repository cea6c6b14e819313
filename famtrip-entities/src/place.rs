use time::OffsetDateTime;

use crate::{category::*, geo::*, id::*, rating::*};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl Visibility {
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

impl From<bool> for Visibility {
    fn from(is_public: bool) -> Self {
        if is_public {
            Self::Public
        } else {
            Self::Private
        }
    }
}

/// Practical hints for visiting a place.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PracticalInfo {
    pub entrance_fee: Option<f64>,
    pub currency: Option<String>,
    pub parking: Option<bool>,
    pub description: Option<String>,
}

impl PracticalInfo {
    pub fn is_empty(&self) -> bool {
        self.entrance_fee.is_none()
            && self.currency.is_none()
            && self.parking.is_none()
            && self.description.as_deref().map_or(true, str::is_empty)
    }
}

/// A place of interest.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<PlaceCategory>,
    pub rating: Option<Rating>,
    /// Unknown for places that have not been geocoded yet.
    pub pos: Option<MapPoint>,
    pub location_name: Option<String>,
    pub visibility: Visibility,
    pub family_id: Id,
    pub created_by: Id,
    pub practical_info: Option<PracticalInfo>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Place {
    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }
}
