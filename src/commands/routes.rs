use anyhow::{anyhow, Result};

use famtrip_application::prelude::*;
use famtrip_core::{
    entities::*,
    map::{self, RouteSceneOptions, Scene},
    usecases::{
        distinct_categories, selectable_places, RouteDraft, RouteUpdate, RoutesView,
        RoutesViewEvent,
    },
};

use super::{app_error, Context};
use crate::{
    cli::{NewRouteArgs, RoutesCommand},
    output,
};

pub async fn run(ctx: &Context, cmd: RoutesCommand) -> Result<()> {
    let mut view = RoutesView::default();
    match cmd {
        RoutesCommand::List => {
            let routes = fetch_routes(&ctx.store, &ctx.backend)
                .await
                .map_err(app_error)?;
            for route in &routes {
                println!("{}", output::route_line(route));
            }
            if routes.is_empty() {
                println!("No routes");
            }
        }
        RoutesCommand::Show {
            id,
            straight,
            edit,
            output,
        } => {
            view.handle(RoutesViewEvent::Open(id.into()))?;
            if edit {
                view.handle(RoutesViewEvent::ToggleEditing)?;
            }
            if straight {
                view.handle(RoutesViewEvent::ToggleRouting)?;
            }
            show(ctx, &view, output.geojson).await?;
        }
        RoutesCommand::Create(args) => {
            view.handle(RoutesViewEvent::StartCreating)?;
            match create(ctx, args).await {
                Ok(route) => {
                    view.handle(RoutesViewEvent::Created(route.id.clone()))?;
                    println!("{}", output::route_line(&route));
                }
                Err(err) => {
                    view.handle(RoutesViewEvent::Cancel)?;
                    return Err(err);
                }
            }
        }
        RoutesCommand::Edit {
            id,
            name,
            description,
            mode,
            difficulty,
            duration,
        } => {
            ctx.signed_in_user()?;
            let update = RouteUpdate {
                name,
                description: description.map(|d| Some(d).filter(|d| !d.trim().is_empty())),
                transport_mode: mode,
                difficulty,
                estimated_duration: duration.map(Some),
                ..Default::default()
            };
            let route = update_route(&ctx.store, &ctx.backend, &id.into(), update)
                .await
                .map_err(app_error)?;
            println!("{}", output::route_line(&route));
        }
        RoutesCommand::Reorder { id, from, to } => {
            ctx.signed_in_user()?;
            let (from, to) = (position(from)?, position(to)?);
            let route_id = Id::from(id);
            let result = reorder_waypoints(&ctx.store, &ctx.backend, &route_id, from, to).await;
            print_waypoints(ctx);
            let orders = result.map_err(app_error)?;
            println!("Changed the position of {} waypoints", orders.len());
        }
        RoutesCommand::Compact { id } => {
            ctx.signed_in_user()?;
            let orders = compact_waypoints(&ctx.store, &ctx.backend, &id.into())
                .await
                .map_err(app_error)?;
            print_waypoints(ctx);
            println!("Changed the position of {} waypoints", orders.len());
        }
        RoutesCommand::Candidates {
            id,
            search,
            category,
        } => {
            fetch_places(&ctx.store, &ctx.backend)
                .await
                .map_err(app_error)?;
            let waypoints = open_route(&ctx.store, &ctx.backend, &id.into())
                .await
                .map_err(app_error)?;
            let selected: Vec<_> = waypoints.into_iter().map(|wp| wp.place_id).collect();
            let state = ctx.store.state();
            let places = &state.places.places;
            let categories = distinct_categories(places)
                .into_iter()
                .map(|c| c.label())
                .collect::<Vec<_>>()
                .join(", ");
            println!("Categories: {categories}");
            let currency = state.settings.settings.currency;
            for place in selectable_places(places, &selected, &search, category) {
                println!("{}", output::place_line(place, currency));
            }
        }
        RoutesCommand::AddStop { id, place_id } => {
            ctx.signed_in_user()?;
            add_waypoint(&ctx.store, &ctx.backend, &id.into(), &place_id.into())
                .await
                .map_err(app_error)?;
            print_waypoints(ctx);
        }
        RoutesCommand::RemoveStop { id, place_id } => {
            ctx.signed_in_user()?;
            remove_waypoint(&ctx.store, &ctx.backend, &id.into(), &place_id.into())
                .await
                .map_err(app_error)?;
            print_waypoints(ctx);
        }
        RoutesCommand::Transport {
            id,
            place_id,
            mode,
            notes,
        } => {
            ctx.signed_in_user()?;
            let update = WaypointUpdate {
                transport_to_next: Some(mode),
                notes: notes.map(|n| Some(n).filter(|n| !n.trim().is_empty())),
                estimated_time: None,
            };
            update_waypoint(&ctx.store, &ctx.backend, &id.into(), &place_id.into(), update)
                .await
                .map_err(app_error)?;
            print_waypoints(ctx);
        }
        RoutesCommand::Delete { id } => {
            ctx.signed_in_user()?;
            delete_route(&ctx.store, &ctx.backend, &id.clone().into())
                .await
                .map_err(app_error)?;
            println!("Deleted route {id}");
        }
    }
    Ok(())
}

/// Converts a listed position into an index.
fn position(listed: usize) -> Result<usize> {
    listed
        .checked_sub(1)
        .ok_or_else(|| anyhow!("Positions start at 1"))
}

async fn create(ctx: &Context, args: NewRouteArgs) -> Result<Route> {
    ctx.signed_in_user()?;
    let NewRouteArgs {
        name,
        places,
        description,
        mode,
        difficulty,
        family,
        private,
        duration,
    } = args;
    let group = ctx.family_group(family).await?;
    let mut draft = RouteDraft::new(&[group]);
    draft.name = name;
    draft.description = description.unwrap_or_default();
    draft.transport_mode = mode;
    draft.difficulty = difficulty;
    draft.visibility = Visibility::from(!private);
    draft.estimated_duration = duration;
    for place_id in places {
        if !draft.add_waypoint(place_id.clone().into()) {
            return Err(anyhow!("The place {place_id} is listed twice"));
        }
    }
    create_route(&ctx.store, &ctx.backend, draft)
        .await
        .map_err(app_error)
}

async fn show(ctx: &Context, view: &RoutesView, geojson: bool) -> Result<()> {
    let RoutesView::View {
        route_id,
        editable,
        use_routing,
    } = view
    else {
        return Err(anyhow!("No route has been opened"));
    };
    fetch_routes(&ctx.store, &ctx.backend)
        .await
        .map_err(app_error)?;
    if ctx.store.select(|s| s.routes.route(route_id).is_none()) {
        return Err(anyhow!("Unknown route {route_id}"));
    }
    open_route(&ctx.store, &ctx.backend, route_id)
        .await
        .map_err(app_error)?;
    if geojson {
        let scene = route_scene(ctx, *editable, *use_routing).await?;
        println!("{}", serde_json::to_string_pretty(&scene.to_geojson())?);
        return Ok(());
    }
    if let Some(route) = ctx.store.select(|s| s.routes.selected.clone()) {
        println!("{}", output::route_line(&route));
        if let Some(description) = &route.description {
            println!("{description}");
        }
    }
    print_waypoints(ctx);
    Ok(())
}

async fn route_scene(ctx: &Context, editable: bool, use_routing: bool) -> Result<Scene> {
    let defaults = ctx.config.map;
    if let (true, Some(router)) = (use_routing, ctx.router.as_ref()) {
        let options = RouteMapOptions {
            use_routing,
            editable,
            defaults,
        };
        let debouncer = ctx.debouncer_for_routing();
        return selected_route_scene(&ctx.store, router, &debouncer, options)
            .await
            .ok_or_else(|| anyhow!("The route map has been superseded"));
    }
    let (route, waypoints) = ctx
        .store
        .select(|s| (s.routes.selected.clone(), s.routes.waypoints.clone()));
    Ok(map::route_scene(
        route.as_ref(),
        &waypoints,
        RouteSceneOptions {
            editable,
            paths: None,
            defaults,
        },
    ))
}

fn print_waypoints(ctx: &Context) {
    let state = ctx.store.state();
    let lines = output::waypoint_lines(state.routes.selected.as_ref(), &state.routes.waypoints);
    for line in lines {
        println!("{line}");
    }
    if let Some(err) = &state.routes.error {
        log::warn!("{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_positions_start_at_one() {
        assert_eq!(0, position(1).unwrap());
        assert_eq!(2, position(3).unwrap());
        assert!(position(0).is_err());
    }
}
