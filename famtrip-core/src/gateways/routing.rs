use async_trait::async_trait;

use super::Result;
use crate::entities::{Distance, MapPoint, RoutingProfile};

/// Path geometry between two positions along the road network.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedPath {
    pub coordinates: Vec<MapPoint>,
    pub distance: Distance,
    /// Seconds
    pub duration: f64,
}

#[async_trait(?Send)]
pub trait RoutingGateway {
    async fn route(&self, profile: RoutingProfile, from: MapPoint, to: MapPoint)
        -> Result<RoutedPath>;
}
