use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{anyhow, Result};
use famtrip_core::{entities::MapPoint, map::MapDefaults, usecases::MAX_SUGGESTIONS};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "famtrip.toml";

const ENV_NAME_BACKEND_URL: &str = "FAMTRIP_BACKEND_URL";
const ENV_NAME_BACKEND_KEY: &str = "FAMTRIP_BACKEND_KEY";

const MAX_ZOOM: u8 = 19;

pub struct Config {
    pub backend: Backend,
    pub geocoding: Geocoding,
    pub routing: Routing,
    pub map: MapDefaults,
    pub debounce: Debounce,
    pub settings: Settings,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.backend
            .override_with(env::var(ENV_NAME_BACKEND_URL).ok(), env::var(ENV_NAME_BACKEND_KEY).ok());
        cfg.backend.validate()?;
        Ok(cfg)
    }
}

pub struct Backend {
    pub url: String,
    /// Public key of anonymous requests
    pub anon_key: String,
}

impl Backend {
    fn override_with(&mut self, url: Option<String>, anon_key: Option<String>) {
        if let Some(url) = url {
            self.url = url;
        }
        if let Some(key) = anon_key {
            self.anon_key = key;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!(
                "Missing backend URL (set it in {DEFAULT_CONFIG_FILE_NAME} or {ENV_NAME_BACKEND_URL})"
            ));
        }
        if self.anon_key.trim().is_empty() {
            log::warn!("No backend API key configured, requests will probably be rejected");
        }
        Ok(())
    }
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub limit: usize,
}

pub enum GeocodingGateway {
    Photon { base_url: String },
}

pub struct Routing {
    /// `None` if paths are drawn as straight lines
    pub gateway: Option<RoutingGateway>,
}

pub enum RoutingGateway {
    Osrm { base_url: String },
}

pub struct Debounce {
    pub search: Duration,
    pub reroute: Duration,
}

pub struct Settings {
    /// File system directory of the local settings and session.
    pub storage_dir: PathBuf,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            backend,
            geocoding,
            routing,
            map,
            debounce,
            settings,
        } = from;

        let raw::Backend { url, anon_key } = backend.unwrap_or_default();
        let backend = Backend {
            url: url.unwrap_or_default(),
            anon_key: anon_key.unwrap_or_default(),
        };

        let raw::Geocoding {
            gateway,
            base_url,
            limit,
        } = geocoding.unwrap_or_default();
        let limit = limit.unwrap_or(MAX_SUGGESTIONS);
        if limit == 0 {
            return Err(anyhow!("The geocoding limit must be positive"));
        }
        let gateway = gateway.map(|gw| match gw {
            raw::GeocodingGateway::Photon => {
                let base_url = base_url
                    .unwrap_or_else(|| famtrip_gateways::photon::DEFAULT_BASE_URL.to_owned());
                log::debug!("Use Photon geocoding gateway ({base_url})");
                GeocodingGateway::Photon { base_url }
            }
        });
        let geocoding = Geocoding { gateway, limit };

        let raw::Routing {
            gateway,
            base_url,
            enabled,
        } = routing.unwrap_or_default();
        let gateway = match gateway {
            Some(_) if enabled == Some(false) => {
                log::debug!("Routing is disabled");
                None
            }
            Some(raw::RoutingGateway::Osrm) => {
                let base_url = base_url
                    .unwrap_or_else(|| famtrip_gateways::osrm::DEFAULT_BASE_URL.to_owned());
                log::debug!("Use OSRM routing gateway ({base_url})");
                Some(RoutingGateway::Osrm { base_url })
            }
            None => None,
        };
        let routing = Routing { gateway };

        let raw::Map {
            center_lat,
            center_lng,
            zoom,
        } = map.unwrap_or_default();
        let center = MapPoint::try_from_lat_lng_deg(center_lat, center_lng)
            .ok_or_else(|| anyhow!("Invalid map center {center_lat},{center_lng}"))?;
        if zoom > MAX_ZOOM {
            return Err(anyhow!("Map zoom {zoom} exceeds the maximum of {MAX_ZOOM}"));
        }
        let map = MapDefaults { center, zoom };

        let raw_debounce = debounce.unwrap_or_default();
        let defaults = raw::Debounce::default();
        let debounce = Debounce {
            search: raw_debounce
                .search
                .or(defaults.search)
                .ok_or_else(|| anyhow!("Missing search debounce delay"))?,
            reroute: raw_debounce
                .reroute
                .or(defaults.reroute)
                .ok_or_else(|| anyhow!("Missing re-routing debounce delay"))?,
        };

        let raw::Settings { storage_dir } = settings.unwrap_or_default();
        let settings = Settings { storage_dir };

        Ok(Self {
            backend,
            geocoding,
            routing,
            map,
            debounce,
            settings,
        })
    }
}
