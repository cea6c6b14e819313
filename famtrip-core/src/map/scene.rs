use super::*;
use crate::entities::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub place_id: Id,
    pub pos: MapPoint,
    pub title: String,
    pub icon: MarkerIcon,
    pub draggable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub coordinates: Vec<MapPoint>,
    pub style: LineStyle,
    pub mode: Option<TransportMode>,
    /// `false` if the line just connects the waypoints directly.
    pub routed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportIndicator {
    pub pos: MapPoint,
    pub mode: TransportMode,
}

impl TransportIndicator {
    pub const fn symbol(&self) -> &'static str {
        transport_symbol(self.mode)
    }
}

/// Everything a map shows at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub markers: Vec<Marker>,
    pub polylines: Vec<Polyline>,
    pub indicators: Vec<TransportIndicator>,
}

/// The connection between two consecutive waypoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: MapPoint,
    pub to: MapPoint,
    pub mode: TransportMode,
    /// The mode has been chosen for this segment explicitly.
    pub explicit: bool,
}

/// The geometry of a segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPath {
    pub segment: Segment,
    pub coordinates: Vec<MapPoint>,
    pub routed: bool,
}

impl SegmentPath {
    pub fn straight(segment: Segment) -> Self {
        Self {
            segment,
            coordinates: vec![segment.from, segment.to],
            routed: false,
        }
    }
}

/// Transport mode towards the next waypoint, falling back
/// to the mode of the route and finally to walking.
pub fn segment_mode(waypoint: &RouteWaypoint, route: Option<&Route>) -> TransportMode {
    waypoint
        .transport_to_next
        .or_else(|| route.and_then(|r| r.transport_mode))
        .unwrap_or_default()
}

fn sorted(waypoints: &[RouteWaypoint]) -> Vec<&RouteWaypoint> {
    let mut sorted: Vec<_> = waypoints.iter().collect();
    sorted.sort_by_key(|wp| wp.order_index);
    sorted
}

/// Segments between consecutive waypoints in order.
///
/// Pairs with a waypoint of unknown position are skipped.
pub fn route_segments(route: Option<&Route>, waypoints: &[RouteWaypoint]) -> Vec<Segment> {
    sorted(waypoints)
        .windows(2)
        .filter_map(|pair| {
            let (current, next) = (pair[0], pair[1]);
            Some(Segment {
                from: current.pos?,
                to: next.pos?,
                mode: segment_mode(current, route),
                explicit: current.transport_to_next.is_some(),
            })
        })
        .collect()
}

pub fn places_scene(places: &[Place], selected: Option<&Id>, defaults: MapDefaults) -> Scene {
    let markers = places
        .iter()
        .filter_map(|place| {
            let pos = place.pos?;
            let is_selected = selected == Some(&place.id);
            Some(Marker {
                place_id: place.id.clone(),
                pos,
                title: place.name.clone(),
                icon: MarkerIcon::place(is_selected),
                draggable: false,
            })
        })
        .collect();
    let viewport = selected
        .and_then(|id| places.iter().find(|p| &p.id == id))
        .and_then(|p| p.pos)
        .map(|center| Viewport::Center {
            center,
            zoom: SELECTED_PLACE_ZOOM,
        })
        .unwrap_or_else(|| defaults.into());
    Scene {
        viewport,
        markers,
        polylines: vec![],
        indicators: vec![],
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RouteSceneOptions<'a> {
    pub editable: bool,
    /// Routed paths of all segments, straight lines are drawn if missing.
    pub paths: Option<&'a [SegmentPath]>,
    pub defaults: MapDefaults,
}

pub fn route_scene(
    route: Option<&Route>,
    waypoints: &[RouteWaypoint],
    options: RouteSceneOptions<'_>,
) -> Scene {
    // Waypoints without a position are neither drawn nor numbered.
    let positioned: Vec<_> = sorted(waypoints)
        .into_iter()
        .filter_map(|wp| wp.pos.map(|pos| (wp, pos)))
        .collect();
    let count = positioned.len();
    let markers = positioned
        .iter()
        .enumerate()
        .map(|(index, (wp, pos))| Marker {
            place_id: wp.place_id.clone(),
            pos: *pos,
            title: wp.place_name.clone(),
            icon: MarkerIcon::waypoint(index, count),
            draggable: options.editable,
        })
        .collect();

    let segments = route_segments(route, waypoints);
    let polylines = match options.paths {
        Some(paths) => paths
            .iter()
            .map(|path| Polyline {
                coordinates: path.coordinates.clone(),
                style: segment_style(path.segment.mode),
                mode: Some(path.segment.mode),
                routed: path.routed,
            })
            .collect(),
        None => {
            let coordinates: Vec<_> = positioned.iter().map(|(_, pos)| *pos).collect();
            if coordinates.len() < 2 {
                vec![]
            } else {
                vec![Polyline {
                    coordinates,
                    style: STRAIGHT_LINE,
                    mode: None,
                    routed: false,
                }]
            }
        }
    };
    let indicators = segments
        .iter()
        .filter(|s| s.explicit)
        .map(|s| TransportIndicator {
            pos: MapPoint::midpoint(s.from, s.to),
            mode: s.mode,
        })
        .collect();

    let bbox = if count >= 2 {
        MapBbox::enclosing(positioned.iter().map(|(_, pos)| *pos))
    } else {
        None
    };
    let viewport = bbox
        .map(|bbox| Viewport::FitBounds {
            bbox,
            padding: FIT_BOUNDS_PADDING,
        })
        .unwrap_or_else(|| options.defaults.into());

    Scene {
        viewport,
        markers,
        polylines,
        indicators,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use famtrip_entities::builders::*;

    fn pos(lat: f64, lng: f64) -> MapPoint {
        MapPoint::from_lat_lng_deg(lat, lng)
    }

    fn waypoints() -> Vec<RouteWaypoint> {
        vec![
            RouteWaypoint::build()
                .place_id("b")
                .order_index(1)
                .pos(pos(50.09, 14.40))
                .finish(),
            RouteWaypoint::build()
                .place_id("a")
                .order_index(0)
                .pos(pos(50.08, 14.42))
                .transport_to_next(TransportMode::Cycling)
                .finish(),
            RouteWaypoint::build()
                .place_id("c")
                .order_index(2)
                .pos(pos(50.07, 14.44))
                .finish(),
        ]
    }

    fn options(paths: Option<&[SegmentPath]>) -> RouteSceneOptions<'_> {
        RouteSceneOptions {
            editable: false,
            paths,
            defaults: MapDefaults::default(),
        }
    }

    #[test]
    fn segment_mode_fallbacks() {
        let route = Route::build().transport_mode(TransportMode::Driving).finish();
        let explicit = RouteWaypoint::build().transport_to_next(TransportMode::Mixed).finish();
        let implicit = RouteWaypoint::build().finish();
        assert_eq!(TransportMode::Mixed, segment_mode(&explicit, Some(&route)));
        assert_eq!(TransportMode::Driving, segment_mode(&implicit, Some(&route)));
        assert_eq!(TransportMode::Walking, segment_mode(&implicit, None));
        let no_mode = Route::build().finish();
        assert_eq!(TransportMode::Walking, segment_mode(&implicit, Some(&no_mode)));
    }

    #[test]
    fn segments_in_order() {
        let route = Route::build().transport_mode(TransportMode::Driving).finish();
        let segments = route_segments(Some(&route), &waypoints());
        assert_eq!(2, segments.len());
        assert_eq!(pos(50.08, 14.42), segments[0].from);
        assert_eq!(TransportMode::Cycling, segments[0].mode);
        assert!(segments[0].explicit);
        assert_eq!(TransportMode::Driving, segments[1].mode);
        assert!(!segments[1].explicit);
    }

    #[test]
    fn skip_segments_without_position() {
        let mut waypoints = waypoints();
        waypoints[0].pos = None;
        assert!(route_segments(None, &waypoints).is_empty());
    }

    #[test]
    fn numbered_markers_and_straight_line() {
        let scene = route_scene(None, &waypoints(), options(None));
        let numbers: Vec<_> = scene
            .markers
            .iter()
            .map(|m| match m.icon {
                MarkerIcon::Numbered { number, color, .. } => (m.place_id.as_str(), number, color),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(
            vec![
                ("a", 1, START_COLOR),
                ("b", 2, WAYPOINT_COLOR),
                ("c", 3, END_COLOR)
            ],
            numbers
        );
        assert_eq!(1, scene.polylines.len());
        assert_eq!(STRAIGHT_LINE, scene.polylines[0].style);
        assert_eq!(3, scene.polylines[0].coordinates.len());
        assert!(matches!(
            scene.viewport,
            Viewport::FitBounds { padding: 20, .. }
        ));
    }

    #[test]
    fn routed_segments_use_mode_styles() {
        let segments = route_segments(None, &waypoints());
        let paths = vec![
            SegmentPath {
                segment: segments[0],
                coordinates: vec![segments[0].from, pos(50.085, 14.41), segments[0].to],
                routed: true,
            },
            SegmentPath::straight(segments[1]),
        ];
        let scene = route_scene(None, &waypoints(), options(Some(&paths)));
        assert_eq!(2, scene.polylines.len());
        assert_eq!(segment_style(TransportMode::Cycling), scene.polylines[0].style);
        assert!(scene.polylines[0].routed);
        assert_eq!(segment_style(TransportMode::Walking), scene.polylines[1].style);
        assert!(!scene.polylines[1].routed);
    }

    #[test]
    fn indicators_at_midpoints_of_explicit_segments() {
        let scene = route_scene(None, &waypoints(), options(None));
        assert_eq!(1, scene.indicators.len());
        let indicator = &scene.indicators[0];
        assert_eq!(TransportMode::Cycling, indicator.mode);
        assert_eq!("🚴", indicator.symbol());
        assert!((indicator.pos.lat() - 50.085).abs() < 1e-9);
        assert!((indicator.pos.lng() - 14.41).abs() < 1e-9);
    }

    #[test]
    fn single_waypoint_keeps_default_view() {
        let waypoints = &waypoints()[..1];
        let scene = route_scene(None, waypoints, options(None));
        assert_eq!(Viewport::from(MapDefaults::default()), scene.viewport);
        assert!(scene.polylines.is_empty());
    }

    #[test]
    fn selected_place_is_centered() {
        let places = vec![
            Place::build().id("a").pos(pos(50.1, 14.5)).finish(),
            Place::build().id("b").finish(),
            Place::build().id("c").pos(pos(50.2, 14.6)).finish(),
        ];
        let scene = places_scene(&places, Some(&"c".into()), MapDefaults::default());
        assert_eq!(2, scene.markers.len());
        assert_eq!(MarkerIcon::place(true), scene.markers[1].icon);
        assert_eq!(MarkerIcon::place(false), scene.markers[0].icon);
        assert_eq!(
            Viewport::Center {
                center: pos(50.2, 14.6),
                zoom: 15
            },
            scene.viewport
        );
        let scene = places_scene(&places, None, MapDefaults::default());
        assert_eq!(Viewport::from(MapDefaults::default()), scene.viewport);
    }

    #[test]
    fn last_positioned_waypoint_is_the_end() {
        let mut waypoints = waypoints();
        waypoints.push(
            RouteWaypoint::build()
                .place_id("d")
                .order_index(3)
                .finish(),
        );
        let scene = route_scene(None, &waypoints, options(None));
        assert_eq!(3, scene.markers.len());
        let end = &scene.markers[2];
        assert_eq!("c", end.place_id.as_str());
        assert_eq!(
            MarkerIcon::Numbered {
                number: 3,
                color: END_COLOR,
                size: 35
            },
            end.icon
        );
    }
}
