//! Free text location search with [Photon](https://photon.komoot.io).

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use famtrip_core::{
    entities::MapPoint,
    gateways::{
        geocode::{GeoCodingGateway, GeoSuggestion},
        Error, Result,
    },
};

pub const DEFAULT_BASE_URL: &str = "https://photon.komoot.io";

#[derive(Debug, Clone)]
pub struct Photon {
    base_url: String,
    client: reqwest::Client,
}

impl Photon {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }

    fn search_url(&self, query: &str, limit: usize) -> String {
        let query = utf8_percent_encode(query, NON_ALPHANUMERIC);
        format!("{}/api/?q={query}&limit={limit}", self.base_url)
    }
}

impl Default for Photon {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// Longitude, latitude
    coordinates: (f64, f64),
}

#[derive(Debug, Deserialize)]
struct Properties {
    osm_id: Option<i64>,
    name: Option<String>,
    city: Option<String>,
    country: Option<String>,
}

impl Properties {
    fn display_name(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        let parts: Vec<_> = std::iter::once(name)
            .chain(self.city.as_deref())
            .chain(self.country.as_deref())
            .collect();
        Some(parts.join(", "))
    }
}

fn into_suggestions(collection: FeatureCollection, limit: usize) -> Vec<GeoSuggestion> {
    collection
        .features
        .into_iter()
        .filter_map(|Feature { geometry, properties }| {
            let (lng, lat) = geometry.coordinates;
            let Some(pos) = MapPoint::try_from_lat_lng_deg(lat, lng) else {
                log::debug!("Skipping result with invalid coordinates {lat},{lng}");
                return None;
            };
            let display_name = properties.display_name()?;
            let place_id = properties
                .osm_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| format!("{lat},{lng}"));
            Some(GeoSuggestion {
                place_id,
                display_name,
                pos,
            })
        })
        .take(limit)
        .collect()
}

#[async_trait(?Send)]
impl GeoCodingGateway for Photon {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<GeoSuggestion>> {
        let url = self.search_url(query, limit);
        log::debug!("Searching locations: {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| Error::Remote(err.to_string()))?;
        if !response.status().is_success() {
            return Err(Error::Remote(format!(
                "Location search failed with status {}",
                response.status()
            )));
        }
        let collection = response
            .json::<FeatureCollection>()
            .await
            .map_err(anyhow::Error::from)?;
        Ok(into_suggestions(collection, limit))
    }
}
