//! Plain text rendering of the entities.

use std::fmt::Write as _;

use famtrip_core::{
    entities::*,
    gateways::geocode::GeoSuggestion,
    map::{segment_mode, transport_symbol},
    util::country,
};

pub fn place_line(place: &Place, currency: Currency) -> String {
    let mut line = format!("{}  {}", place.id, place.name);
    if let Some(category) = place.category {
        let _ = write!(line, "  [{}]", category.label());
    }
    if let Some(rating) = place.rating.filter(|r| r.value() > 0) {
        let _ = write!(line, "  {}", rating.stars());
    }
    if let Some(location) = &place.location_name {
        let _ = write!(line, "  {} {location}", country::location_flag(location));
    }
    if let Some(fee) = place.practical_info.as_ref().and_then(|i| i.entrance_fee) {
        let _ = write!(line, "  {}", currency.format_amount(fee));
    }
    if place.pos.is_none() {
        line.push_str("  (no position)");
    }
    if place.is_public() {
        line.push_str("  public");
    }
    line
}

pub fn route_line(route: &Route) -> String {
    let mut line = format!(
        "{}  {}  {} stops",
        route.id, route.name, route.waypoint_count
    );
    if let Some(mode) = route.transport_mode {
        let _ = write!(line, "  {}", mode.label());
    }
    if let Some(difficulty) = route.difficulty {
        let _ = write!(line, "  {difficulty}");
    }
    if let Some(km) = route.total_distance {
        let _ = write!(line, "  {km:.1} km");
    }
    if let Some(minutes) = route.estimated_duration {
        let _ = write!(line, "  {}", duration(minutes));
    }
    line
}

fn duration(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}

/// One line per waypoint followed by the transport towards
/// the next one.
pub fn waypoint_lines(route: Option<&Route>, waypoints: &[RouteWaypoint]) -> Vec<String> {
    let mut lines = Vec::with_capacity(waypoints.len() * 2);
    for (i, wp) in waypoints.iter().enumerate() {
        let mut line = format!("{:>2}. {}  ({})", i + 1, wp.place_name, wp.place_id);
        if wp.pos.is_none() {
            line.push_str("  (no position)");
        }
        if let Some(minutes) = wp.estimated_time {
            let _ = write!(line, "  {}", duration(minutes));
        }
        lines.push(line);
        if i + 1 < waypoints.len() {
            let mode = segment_mode(wp, route);
            let mut line = format!("    {} {}", transport_symbol(mode), mode.label());
            if let Some(notes) = &wp.notes {
                let _ = write!(line, ": {notes}");
            }
            lines.push(line);
        }
    }
    lines
}

pub fn group_line(group: &FamilyGroup, user: Option<&User>) -> String {
    let is_admin = user.is_some_and(|u| u.id == group.admin_id);
    format!(
        "{}  {}{}",
        group.id,
        group.name,
        if is_admin { "  (admin)" } else { "" }
    )
}

pub fn member_line(member: &FamilyMember) -> String {
    let name = member
        .user
        .as_ref()
        .map(|p| p.display_name().to_owned())
        .unwrap_or_else(|| member.user_id.to_string());
    format!("{}  {name}  {}", member.user_id, member.role)
}

pub fn suggestion_line(suggestion: &GeoSuggestion) -> String {
    format!("{}  {}", suggestion.pos, suggestion.display_name)
}

pub fn settings_lines(settings: &Settings) -> Vec<String> {
    vec![
        format!("language  {}", settings.language),
        format!(
            "currency  {} ({})",
            settings.currency,
            settings.currency.symbol()
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use famtrip_entities::builders::*;

    #[test]
    fn format_place() {
        let place = Place::build()
            .id("p1")
            .name("Lokál")
            .category(PlaceCategory::Restaurants)
            .rating(4)
            .location_name("Prague")
            .finish();
        assert_eq!(
            "p1  Lokál  [Restaurants]  ★★★★☆  🇨🇿 Prague  (no position)",
            place_line(&place, Currency::Czk)
        );
    }

    #[test]
    fn format_durations() {
        assert_eq!("45 min", duration(45));
        assert_eq!("2 h", duration(120));
        assert_eq!("1 h 30 min", duration(90));
    }

    #[test]
    fn transport_between_waypoints() {
        let route = Route::build()
            .transport_mode(TransportMode::Cycling)
            .finish();
        let waypoints = vec![
            RouteWaypoint::build()
                .place_id("a")
                .place_name("Castle")
                .pos(MapPoint::from_lat_lng_deg(50.09, 14.40))
                .transport_to_next(TransportMode::Walking)
                .finish(),
            RouteWaypoint::build()
                .place_id("b")
                .place_name("Bridge")
                .pos(MapPoint::from_lat_lng_deg(50.086, 14.411))
                .finish(),
            RouteWaypoint::build()
                .place_id("c")
                .place_name("Square")
                .finish(),
        ];
        let lines = waypoint_lines(Some(&route), &waypoints);
        assert_eq!(5, lines.len());
        assert_eq!(" 1. Castle  (a)", lines[0]);
        assert!(lines[1].ends_with("Walking"));
        assert!(lines[3].ends_with("Cycling"));
        assert_eq!(" 3. Square  (c)  (no position)", lines[4]);
    }

    #[test]
    fn mark_admin_groups() {
        let group = FamilyGroup::build().id("g1").name("Smiths").admin_id("u1").finish();
        let admin = User {
            id: "u1".into(),
            email: "eva@example.com".into(),
        };
        assert_eq!("g1  Smiths  (admin)", group_line(&group, Some(&admin)));
        assert_eq!("g1  Smiths", group_line(&group, None));
    }
}
