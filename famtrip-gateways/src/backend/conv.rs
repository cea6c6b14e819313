//! Mapping between use case payloads and backend rows.

use famtrip_boundary as json;
use famtrip_core::{
    entities::*,
    usecases::{NewPlace, NewRoute, NewWaypoint, PlaceUpdate, ProfileUpdate, RouteUpdate},
};

fn rating(rating: Rating) -> i64 {
    i64::from(rating.value())
}

fn variant<T: AsRef<str>>(value: T) -> String {
    value.as_ref().to_owned()
}

pub fn new_place(place: &NewPlace) -> json::NewPlace {
    let NewPlace {
        name,
        description,
        category,
        rating: r,
        pos,
        location_name,
        visibility,
        family_id,
        created_by,
        practical_info,
    } = place.clone();
    json::NewPlace {
        name,
        description,
        category: category.map(variant),
        rating: r.map(rating),
        location: pos.map(json::wkt_point),
        location_name,
        is_public: visibility.is_public(),
        family_id: family_id.into(),
        created_by: created_by.into(),
        practical_info: practical_info.map(Into::into),
    }
}

pub fn place_update(update: &PlaceUpdate) -> json::PlaceUpdate {
    let PlaceUpdate {
        name,
        description,
        category,
        rating: r,
        pos,
        location_name,
        visibility,
        practical_info,
    } = update.clone();
    json::PlaceUpdate {
        name,
        description,
        category: category.map(|c| c.map(variant)),
        rating: r.map(|r| r.map(rating)),
        location: pos.map(json::wkt_point),
        location_name,
        is_public: visibility.map(Visibility::is_public),
        practical_info: practical_info.map(Into::into),
    }
}

pub fn user_update(update: &ProfileUpdate) -> json::UserUpdate {
    let ProfileUpdate { name, avatar_url } = update.clone();
    json::UserUpdate { name, avatar_url }
}

pub fn new_route(route: &NewRoute) -> json::NewRoute {
    let NewRoute {
        name,
        description,
        family_id,
        created_by,
        visibility,
        difficulty,
        transport_mode,
        estimated_duration,
        total_distance,
    } = route.clone();
    json::NewRoute {
        name,
        description,
        family_id: family_id.into(),
        created_by: created_by.into(),
        is_public: visibility.is_public(),
        estimated_duration: estimated_duration.map(i64::from),
        difficulty_level: Some(variant(difficulty)),
        transport_mode: Some(variant(transport_mode)),
        total_distance,
    }
}

pub fn route_update(update: &RouteUpdate) -> json::RouteUpdate {
    let RouteUpdate {
        name,
        description,
        visibility,
        difficulty,
        transport_mode,
        estimated_duration,
        total_distance,
    } = update.clone();
    json::RouteUpdate {
        name,
        description,
        is_public: visibility.map(Visibility::is_public),
        estimated_duration: estimated_duration.map(|d| d.map(i64::from)),
        difficulty_level: difficulty.map(|d| Some(variant(d))),
        transport_mode: transport_mode.map(|m| Some(variant(m))),
        total_distance,
    }
}

pub fn new_route_place(waypoint: &NewWaypoint) -> json::NewRoutePlace {
    let NewWaypoint {
        route_id,
        place_id,
        order_index,
        transport_to_next,
    } = waypoint.clone();
    json::NewRoutePlace {
        route_id: route_id.into(),
        place_id: place_id.into(),
        order_index: i64::from(order_index),
        transport_to_next: transport_to_next.map(variant),
        notes: None,
        estimated_time: None,
    }
}

pub fn route_place_update(update: &WaypointUpdate) -> json::RoutePlaceUpdate {
    let WaypointUpdate {
        transport_to_next,
        notes,
        estimated_time,
    } = update.clone();
    json::RoutePlaceUpdate {
        order_index: None,
        transport_to_next: transport_to_next.map(|m| m.map(variant)),
        notes,
        estimated_time: estimated_time.map(|t| t.map(i64::from)),
    }
}

pub fn route_place_order(order_index: u32) -> json::RoutePlaceUpdate {
    json::RoutePlaceUpdate {
        order_index: Some(i64::from(order_index)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_place_fixture() -> NewPlace {
        NewPlace {
            name: "Vyšehrad".into(),
            description: None,
            category: Some(PlaceCategory::Monuments),
            rating: Some(Rating::new(4)),
            pos: Some(MapPoint::from_lat_lng_deg(50.0645, 14.4181)),
            location_name: Some("Prague".into()),
            visibility: Visibility::Public,
            family_id: "fam".into(),
            created_by: "usr".into(),
            practical_info: None,
        }
    }

    #[test]
    fn place_location_as_wkt() {
        let row = new_place(&new_place_fixture());
        assert_eq!(Some("POINT(14.4181 50.0645)".to_owned()), row.location);
        assert_eq!(Some("monuments".to_owned()), row.category);
        assert_eq!(Some(4), row.rating);
        assert!(row.is_public);
    }

    #[test]
    fn serialize_only_changed_place_fields() {
        let update = PlaceUpdate {
            rating: Some(None),
            ..PlaceUpdate::position(MapPoint::from_lat_lng_deg(1.0, 2.0))
        };
        let json = serde_json::to_value(place_update(&update)).unwrap();
        assert_eq!(
            serde_json::json!({ "rating": null, "location": "POINT(2 1)" }),
            json
        );
    }

    #[test]
    fn route_defaults() {
        let route = NewRoute {
            name: "Old town".into(),
            description: None,
            family_id: "fam".into(),
            created_by: "usr".into(),
            visibility: Visibility::Public,
            difficulty: Difficulty::Easy,
            transport_mode: TransportMode::PublicTransport,
            estimated_duration: Some(90),
            total_distance: None,
        };
        let row = new_route(&route);
        assert_eq!(Some("easy".to_owned()), row.difficulty_level);
        assert_eq!(Some("public_transport".to_owned()), row.transport_mode);
        assert_eq!(Some(90), row.estimated_duration);
    }

    #[test]
    fn clear_transport_of_waypoint() {
        let update = WaypointUpdate {
            transport_to_next: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_value(route_place_update(&update)).unwrap();
        assert_eq!(serde_json::json!({ "transport_to_next": null }), json);
        let json = serde_json::to_value(route_place_order(3)).unwrap();
        assert_eq!(serde_json::json!({ "order_index": 3 }), json);
    }
}
