//! Renderer agnostic description of what a map shows.

use crate::entities::{MapBbox, MapPoint};

mod geojson;
mod scene;
mod style;

pub use self::{scene::*, style::*};

pub const DEFAULT_CENTER_LAT: f64 = 50.0755;
pub const DEFAULT_CENTER_LNG: f64 = 14.4378;
pub const DEFAULT_ZOOM: u8 = 13;
pub const SELECTED_PLACE_ZOOM: u8 = 15;
pub const FIT_BOUNDS_PADDING: u32 = 20;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Initial view of a map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapDefaults {
    pub center: MapPoint,
    pub zoom: u8,
}

impl Default for MapDefaults {
    fn default() -> Self {
        Self {
            center: MapPoint::from_lat_lng_deg(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG),
            zoom: DEFAULT_ZOOM,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viewport {
    Center { center: MapPoint, zoom: u8 },
    FitBounds { bbox: MapBbox, padding: u32 },
}

impl From<MapDefaults> for Viewport {
    fn from(from: MapDefaults) -> Self {
        let MapDefaults { center, zoom } = from;
        Self::Center { center, zoom }
    }
}
