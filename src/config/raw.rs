use std::{path::PathBuf, time::Duration};

use duration_str::deserialize_option_duration;
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_FILE: &str = include_str!("famtrip.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub backend: Option<Backend>,
    pub geocoding: Option<Geocoding>,
    pub routing: Option<Routing>,
    pub map: Option<Map>,
    pub debounce: Option<Debounce>,
    pub settings: Option<Settings>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Backend {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

impl Default for Backend {
    fn default() -> Self {
        Config::default().backend.expect("Backend configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub base_url: Option<String>,
    pub limit: Option<usize>,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default().geocoding.expect("Geocoding configuration")
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Photon,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Routing {
    pub gateway: Option<RoutingGateway>,
    pub base_url: Option<String>,
    pub enabled: Option<bool>,
}

impl Default for Routing {
    fn default() -> Self {
        Config::default().routing.expect("Routing configuration")
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutingGateway {
    Osrm,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Debounce {
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub search: Option<Duration>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub reroute: Option<Duration>,
}

impl Default for Debounce {
    fn default() -> Self {
        Config::default().debounce.expect("Debounce configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub storage_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Config::default().settings.expect("Settings configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.backend.is_some());
        assert!(cfg.geocoding.is_some());
        assert!(cfg.routing.is_some());
        assert!(cfg.map.is_some());
        assert!(cfg.settings.is_some());
    }

    #[test]
    fn default_debounce_delays() {
        let cfg = Debounce::default();
        assert_eq!(Some(Duration::from_millis(300)), cfg.search);
        assert_eq!(Some(Duration::from_millis(300)), cfg.reroute);
    }

    #[test]
    fn sections_are_optional() {
        let cfg: Config = toml::from_str("[routing]\nenabled = false\n").unwrap();
        assert!(cfg.backend.is_none());
        let routing = cfg.routing.unwrap();
        assert_eq!(Some(false), routing.enabled);
        assert!(routing.gateway.is_none());
    }
}
