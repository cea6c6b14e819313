use anyhow::{anyhow, Result};

use famtrip_application::prelude::*;
use famtrip_core::{
    entities::*,
    map::places_scene,
    store,
    usecases::{filter_places, search_places, PlaceFilters, PlaceForm},
};

use super::{app_error, Context};
use crate::{
    cli::{NewPlaceArgs, PlacesCommand},
    output,
};

pub async fn run(ctx: &Context, cmd: PlacesCommand) -> Result<()> {
    match cmd {
        PlacesCommand::List {
            category,
            min_rating,
            public,
            private,
            family,
            search,
            select,
            output,
        } => {
            let min_rating = min_rating
                .map(|r| Rating::try_from(i64::from(r)))
                .transpose()?;
            let visibility = match (public, private) {
                (true, _) => Some(Visibility::Public),
                (_, true) => Some(Visibility::Private),
                _ => None,
            };
            let filters = PlaceFilters {
                category,
                min_rating,
                visibility,
                family_id: family.map(Id::from),
            };
            list(ctx, filters, search, select.map(Id::from), output.geojson).await
        }
        PlacesCommand::Add(args) => add(ctx, args).await,
        PlacesCommand::Move { id, pos } => {
            ctx.signed_in_user()?;
            fetch_places(&ctx.store, &ctx.backend)
                .await
                .map_err(app_error)?;
            let place = move_place(&ctx.store, &ctx.backend, &id.into(), pos)
                .await
                .map_err(app_error)?;
            println!("Moved {} to {pos}", place.name);
            Ok(())
        }
        PlacesCommand::Delete { id } => {
            ctx.signed_in_user()?;
            delete_place(&ctx.store, &ctx.backend, &id.clone().into())
                .await
                .map_err(app_error)?;
            println!("Deleted place {id}");
            Ok(())
        }
    }
}

async fn list(
    ctx: &Context,
    filters: PlaceFilters,
    search: Option<String>,
    select: Option<Id>,
    geojson: bool,
) -> Result<()> {
    fetch_places(&ctx.store, &ctx.backend)
        .await
        .map_err(app_error)?;
    ctx.store
        .dispatch(store::places::Action::SetFilters(filters.clone()));
    if let Some(id) = &select {
        let place = ctx.store.select(|s| s.places.place(id).cloned());
        if place.is_none() {
            return Err(anyhow!("Unknown place {id}"));
        }
        ctx.store.dispatch(store::places::Action::Select(place));
    }
    let state = ctx.store.state();
    let places = filter_places(state.places.places.clone(), &state.places.filters);
    let places: Vec<Place> = match search.as_deref() {
        Some(text) => search_places(&places, text).into_iter().cloned().collect(),
        None => places,
    };
    if geojson {
        let selected = state.places.selected.as_ref().map(|p| &p.id);
        let scene = places_scene(&places, selected, ctx.config.map);
        println!("{}", serde_json::to_string_pretty(&scene.to_geojson())?);
        return Ok(());
    }
    let currency = state.settings.settings.currency;
    for place in &places {
        println!("{}", output::place_line(place, currency));
    }
    if places.is_empty() {
        println!("No places found");
    }
    Ok(())
}

async fn add(ctx: &Context, args: NewPlaceArgs) -> Result<()> {
    ctx.signed_in_user()?;
    let NewPlaceArgs {
        name,
        category,
        rating,
        description,
        at,
        location,
        family,
        public,
        entrance_fee,
        parking,
    } = args;
    let group = ctx.family_group(family).await?;
    let currency = ctx.store.select(|s| s.settings.settings.currency);
    let mut form = PlaceForm::new(currency);
    form.name = name;
    form.category = category;
    form.rating = rating;
    form.description = description.unwrap_or_default();
    form.is_public = public;
    form.family_id = Some(group.id);
    form.pos = at;
    form.practical_info.entrance_fee = entrance_fee.unwrap_or_default();
    form.practical_info.parking = parking;
    if let Some(location) = location {
        let suggestion = super::geocode::lookup(ctx, &location)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No location found for '{location}'"))?;
        form.set_location(&suggestion);
    }
    let place = create_place(&ctx.store, &ctx.backend, form)
        .await
        .map_err(app_error)?;
    println!("{}", output::place_line(&place, currency));
    Ok(())
}
