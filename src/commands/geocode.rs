use std::cell::RefCell;

use anyhow::{anyhow, Result};

use famtrip_application::prelude::search_locations;
use famtrip_core::{
    gateways::geocode::{GeoCodingGateway, GeoSuggestion},
    usecases::{LocationSearch, MIN_QUERY_LEN},
};
use famtrip_gateways::photon::Photon;

use super::Context;
use crate::output;

fn geocoder(ctx: &Context) -> Result<&Photon> {
    ctx.geocoder
        .as_ref()
        .ok_or_else(|| anyhow!("No geocoding gateway configured"))
}

fn check_query(query: &str) -> Result<()> {
    if query.trim().chars().count() < MIN_QUERY_LEN {
        return Err(anyhow!(
            "The query needs at least {MIN_QUERY_LEN} characters"
        ));
    }
    Ok(())
}

/// Resolves a location name the way the location input does.
pub async fn lookup(ctx: &Context, query: &str) -> Result<Vec<GeoSuggestion>> {
    check_query(query)?;
    let search = RefCell::new(LocationSearch::new());
    let debouncer = ctx.debouncer_for_search();
    search_locations(&search, geocoder(ctx)?, &debouncer, query).await;
    let suggestions = search.borrow().suggestions().to_vec();
    Ok(suggestions)
}

pub async fn run(ctx: &Context, query: &str, limit: Option<usize>) -> Result<()> {
    check_query(query)?;
    let limit = limit.unwrap_or(ctx.config.geocoding.limit);
    let suggestions = geocoder(ctx)?.search(query.trim(), limit).await?;
    for suggestion in &suggestions {
        println!("{}", output::suggestion_line(suggestion));
    }
    if suggestions.is_empty() {
        println!("No locations found");
    }
    Ok(())
}
