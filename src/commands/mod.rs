//! Execution of the CLI commands.

use anyhow::{anyhow, Context as _, Result};

use famtrip_application::error::AppError;
use famtrip_backend_api::BackendApi;
use famtrip_core::{
    entities::{FamilyGroup, Id, User},
    store::Store,
    usecases::SettingsService,
    util::debounce::Debouncer,
};
use famtrip_gateways::{backend::Backend, osrm::Osrm, photon::Photon, storage::JsonFileStorage};

use crate::{
    cli::Command,
    config::{Config, GeocodingGateway, RoutingGateway},
};

mod auth;
mod family;
mod geocode;
mod places;
mod routes;
mod settings;

/// Everything a command needs: the store and the gateways.
pub struct Context {
    config: Config,
    store: Store,
    backend: Backend,
    geocoder: Option<Photon>,
    router: Option<Osrm>,
    settings: SettingsService<JsonFileStorage>,
}

impl Context {
    pub fn try_new(config: Config) -> Result<Self> {
        let storage = JsonFileStorage::try_new(&config.settings.storage_dir).with_context(|| {
            format!(
                "Unable to open the local storage in {}",
                config.settings.storage_dir.display()
            )
        })?;
        let api = BackendApi::new(config.backend.url.clone(), config.backend.anon_key.clone());
        let geocoder = config
            .geocoding
            .gateway
            .as_ref()
            .map(|GeocodingGateway::Photon { base_url }| Photon::new(base_url.clone()));
        let router = config
            .routing
            .gateway
            .as_ref()
            .map(|RoutingGateway::Osrm { base_url }| Osrm::new(base_url.clone()));
        let ctx = Self {
            store: Store::default(),
            backend: Backend::new(api),
            settings: SettingsService::new(storage),
            geocoder,
            router,
            config,
        };
        famtrip_application::prelude::load_settings(&ctx.store, &ctx.settings);
        if let Some(session) = famtrip_application::prelude::restore_session(
            &ctx.store,
            &ctx.backend,
            ctx.settings.storage(),
        ) {
            log::debug!("Signed in as {}", session.user.email);
        }
        Ok(ctx)
    }

    fn storage(&self) -> &JsonFileStorage {
        self.settings.storage()
    }

    fn user(&self) -> Option<User> {
        self.store.select(|s| s.auth.user.clone())
    }

    fn signed_in_user(&self) -> Result<User> {
        self.user()
            .ok_or_else(|| anyhow!("You are not signed in, run `famtrip login <email>` first"))
    }

    /// The given group or the first one of the user.
    async fn family_group(&self, id: Option<String>) -> Result<FamilyGroup> {
        let groups = famtrip_application::prelude::fetch_family_groups(&self.store, &self.backend)
            .await
            .map_err(app_error)?;
        match id {
            Some(id) => {
                let id = Id::from(id);
                groups
                    .into_iter()
                    .find(|g| g.id == id)
                    .ok_or_else(|| anyhow!("Unknown family group {id}"))
            }
            None => groups.into_iter().next().ok_or_else(|| {
                anyhow!("You are not a member of any family group, create one first")
            }),
        }
    }

    fn debouncer_for_search(&self) -> Debouncer {
        Debouncer::new(self.config.debounce.search)
    }

    fn debouncer_for_routing(&self) -> Debouncer {
        Debouncer::new(self.config.debounce.reroute)
    }
}

/// Adds a hint to errors caused by a missing or expired session.
fn app_error(err: AppError) -> anyhow::Error {
    if err.is_unauthorized() {
        anyhow::Error::new(err).context("Please sign in again with `famtrip login <email>`")
    } else {
        err.into()
    }
}

pub async fn run(ctx: &Context, command: Command) -> Result<()> {
    match command {
        Command::Login { email, password } => auth::login(ctx, &email, &password).await,
        Command::Signup {
            email,
            name,
            password,
        } => auth::signup(ctx, &email, &name, &password).await,
        Command::Logout => auth::logout(ctx).await,
        Command::Profile { name, avatar_url } => auth::profile(ctx, name, avatar_url).await,
        Command::Places(cmd) => places::run(ctx, cmd).await,
        Command::Family(cmd) => family::run(ctx, cmd).await,
        Command::Routes(cmd) => routes::run(ctx, cmd).await,
        Command::Geocode { query, limit } => geocode::run(ctx, &query.join(" "), limit).await,
        Command::Settings(cmd) => settings::run(ctx, cmd),
    }
}
