use super::*;

use famtrip_core::{
    gateways::routing::RoutingGateway,
    map::{self, MapDefaults, RouteSceneOptions, Scene, Segment, SegmentPath},
    util::debounce::Debouncer,
};

/// Looks up the road path of every segment.
///
/// Segments that cannot be routed are drawn as straight lines,
/// all others keep their routed path.
pub async fn resolve_segment_paths(
    router: &dyn RoutingGateway,
    segments: &[Segment],
) -> Vec<SegmentPath> {
    let mut paths = Vec::with_capacity(segments.len());
    for segment in segments {
        let profile = segment.mode.routing_profile();
        let path = match router.route(profile, segment.from, segment.to).await {
            Ok(routed) if routed.coordinates.len() >= 2 => SegmentPath {
                segment: *segment,
                coordinates: routed.coordinates,
                routed: true,
            },
            Ok(_) => {
                warn!("Empty path from {} to {}", segment.from, segment.to);
                SegmentPath::straight(*segment)
            }
            Err(err) => {
                warn!(
                    "Routing from {} to {} failed, using a straight line: {err}",
                    segment.from, segment.to
                );
                SegmentPath::straight(*segment)
            }
        };
        paths.push(path);
    }
    paths
}

/// Options of a route map.
#[derive(Debug, Clone, Copy)]
pub struct RouteMapOptions {
    pub use_routing: bool,
    pub editable: bool,
    pub defaults: MapDefaults,
}

/// Scene of the selected route.
///
/// Routing requests are debounced: if another scene is requested
/// before the delay has elapsed this one resolves to `None`.
pub async fn selected_route_scene(
    store: &Store,
    router: &dyn RoutingGateway,
    debouncer: &Debouncer,
    options: RouteMapOptions,
) -> Option<Scene> {
    let RouteMapOptions {
        use_routing,
        editable,
        defaults,
    } = options;
    let (route, waypoints) =
        store.select(|s| (s.routes.selected.clone(), s.routes.waypoints.clone()));
    let paths = if use_routing {
        if !debouncer.settle().await {
            debug!("Route scene has been superseded");
            return None;
        }
        let segments = map::route_segments(route.as_ref(), &waypoints);
        Some(resolve_segment_paths(router, &segments).await)
    } else {
        debouncer.cancel();
        None
    };
    Some(map::route_scene(
        route.as_ref(),
        &waypoints,
        RouteSceneOptions {
            editable,
            paths: paths.as_deref(),
            defaults,
        },
    ))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::tests::*;
    use famtrip_core::map::{segment_style, STRAIGHT_LINE};
    use famtrip_entities::builders::*;

    fn pos(lat: f64, lng: f64) -> MapPoint {
        MapPoint::from_lat_lng_deg(lat, lng)
    }

    fn store_with_route() -> Store {
        let store = Store::default();
        store.dispatch(store::routes::Action::Select(Some(
            Route::build()
                .id("r1")
                .transport_mode(TransportMode::Driving)
                .finish(),
        )));
        store.dispatch(store::routes::Action::WaypointsFulfilled(vec![
            RouteWaypoint::build()
                .place_id("a")
                .order_index(0)
                .pos(pos(50.0, 14.0))
                .transport_to_next(TransportMode::Cycling)
                .finish(),
            RouteWaypoint::build()
                .place_id("b")
                .order_index(1)
                .pos(pos(50.1, 14.1))
                .finish(),
            RouteWaypoint::build()
                .place_id("c")
                .order_index(2)
                .pos(pos(50.2, 14.2))
                .finish(),
        ]));
        store
    }

    fn options() -> RouteMapOptions {
        RouteMapOptions {
            use_routing: true,
            editable: false,
            defaults: MapDefaults::default(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fall_back_to_straight_line_per_segment() {
        let store = store_with_route();
        let router = MockRouter::default();
        router.fail_for.borrow_mut().push(RoutingProfile::Car);
        let debouncer = Debouncer::new(Duration::from_millis(500));

        let scene = selected_route_scene(&store, &router, &debouncer, options())
            .await
            .unwrap();
        assert_eq!(2, scene.polylines.len());
        let (cycling, driving) = (&scene.polylines[0], &scene.polylines[1]);
        assert!(cycling.routed);
        assert_eq!(3, cycling.coordinates.len());
        assert_eq!(segment_style(TransportMode::Cycling), cycling.style);
        assert!(!driving.routed);
        assert_eq!(vec![pos(50.1, 14.1), pos(50.2, 14.2)], driving.coordinates);
        assert_eq!(segment_style(TransportMode::Driving), driving.style);
    }

    #[tokio::test(start_paused = true)]
    async fn only_latest_request_is_routed() {
        let store = store_with_route();
        let router = MockRouter::default();
        let debouncer = Debouncer::new(Duration::from_millis(500));

        let first = selected_route_scene(&store, &router, &debouncer, options());
        let second = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            selected_route_scene(&store, &router, &debouncer, options()).await
        };
        let (first, second) = tokio::join!(first, second);
        assert!(first.is_none());
        assert!(second.is_some());
        assert_eq!(2, router.requests.get());
    }

    #[tokio::test]
    async fn straight_polyline_without_routing() {
        let store = store_with_route();
        let router = MockRouter::default();
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let options = RouteMapOptions {
            use_routing: false,
            ..options()
        };
        let scene = selected_route_scene(&store, &router, &debouncer, options)
            .await
            .unwrap();
        assert_eq!(1, scene.polylines.len());
        assert_eq!(STRAIGHT_LINE, scene.polylines[0].style);
        assert_eq!(3, scene.polylines[0].coordinates.len());
        assert_eq!(0, router.requests.get());
    }

    #[tokio::test(start_paused = true)]
    async fn disabling_routing_supersedes_pending_routed_scene() {
        let store = store_with_route();
        let router = MockRouter::default();
        let debouncer = Debouncer::new(Duration::from_millis(500));

        let routed = selected_route_scene(&store, &router, &debouncer, options());
        let straight = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let options = RouteMapOptions {
                use_routing: false,
                ..options()
            };
            selected_route_scene(&store, &router, &debouncer, options).await
        };
        let (routed, straight) = tokio::join!(routed, straight);
        assert!(routed.is_none());
        let straight = straight.unwrap();
        assert_eq!(1, straight.polylines.len());
        assert_eq!(STRAIGHT_LINE, straight.polylines[0].style);
        assert_eq!(0, router.requests.get());
    }
}
