use async_trait::async_trait;

use super::Result;
use crate::entities::MapPoint;

/// A candidate location for a free text query.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoSuggestion {
    /// Identifier assigned by the geocoding service.
    pub place_id: String,
    pub display_name: String,
    pub pos: MapPoint,
}

#[async_trait(?Send)]
pub trait GeoCodingGateway {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<GeoSuggestion>>;
}
