//! Road routing with an [OSRM](https://project-osrm.org) server.

use async_trait::async_trait;
use serde::Deserialize;

use famtrip_core::{
    entities::{Distance, MapPoint, RoutingProfile},
    gateways::{
        routing::{RoutedPath, RoutingGateway},
        Error, Result,
    },
};

pub const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

#[derive(Debug, Clone)]
pub struct Osrm {
    base_url: String,
    client: reqwest::Client,
}

impl Osrm {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }

    fn route_url(&self, profile: RoutingProfile, from: MapPoint, to: MapPoint) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}?overview=full&geometries=geojson",
            self.base_url,
            profile.as_ref(),
            from.lng(),
            from.lat(),
            to.lng(),
            to.lat()
        )
    }
}

impl Default for Osrm {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<RouteJson>,
}

#[derive(Debug, Deserialize)]
struct RouteJson {
    geometry: LineString,
    /// Meters
    distance: f64,
    /// Seconds
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct LineString {
    coordinates: Vec<(f64, f64)>,
}

fn into_path(response: RouteResponse) -> Result<RoutedPath> {
    let RouteResponse {
        code,
        message,
        routes,
    } = response;
    if code != "Ok" {
        return Err(Error::Remote(message.unwrap_or(code)));
    }
    let route = routes
        .into_iter()
        .next()
        .ok_or_else(|| Error::Remote("No route found".into()))?;
    let coordinates = route
        .geometry
        .coordinates
        .into_iter()
        .map(|(lng, lat)| MapPoint::try_from_lat_lng_deg(lat, lng))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| Error::Remote("Invalid route geometry".into()))?;
    Ok(RoutedPath {
        coordinates,
        distance: Distance::from_meters(route.distance),
        duration: route.duration,
    })
}

#[async_trait(?Send)]
impl RoutingGateway for Osrm {
    async fn route(
        &self,
        profile: RoutingProfile,
        from: MapPoint,
        to: MapPoint,
    ) -> Result<RoutedPath> {
        let url = self.route_url(profile, from, to);
        log::debug!("Requesting route: {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| Error::Remote(err.to_string()))?;
        // OSRM reports errors with a JSON body, e.g. `NoRoute`
        let response = response
            .json::<RouteResponse>()
            .await
            .map_err(anyhow::Error::from)?;
        into_path(response)
    }
}
