use super::prelude::*;

/// Places that can still be added as waypoints.
///
/// Already selected places are excluded. The text is matched
/// case insensitively against the name and location name.
pub fn selectable_places<'a>(
    places: &'a [Place],
    selected: &[Id],
    text: &str,
    category: Option<PlaceCategory>,
) -> Vec<&'a Place> {
    let needle = text.trim().to_lowercase();
    places
        .iter()
        .filter(|p| !selected.contains(&p.id))
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.location_name
                    .as_deref()
                    .is_some_and(|l| l.to_lowercase().contains(&needle))
        })
        .filter(|p| category.is_none() || p.category == category)
        .collect()
}

/// Sorted set of all categories in use.
pub fn distinct_categories(places: &[Place]) -> Vec<PlaceCategory> {
    let mut categories: Vec<_> = places.iter().filter_map(|p| p.category).collect();
    categories.sort_unstable_by_key(|c| c.as_ref().to_owned());
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use famtrip_entities::builders::*;

    fn places() -> Vec<Place> {
        vec![
            Place::build()
                .id("a")
                .name("Charles Bridge")
                .location_name("Karlův most, Prague")
                .category(PlaceCategory::Monuments)
                .finish(),
            Place::build()
                .id("b")
                .name("Hotel Paříž")
                .location_name("Prague")
                .category(PlaceCategory::Accommodation)
                .finish(),
            Place::build().id("c").name("Šárka valley").finish(),
            Place::build()
                .id("d")
                .name("Old Town Hall")
                .category(PlaceCategory::Monuments)
                .finish(),
        ]
    }

    #[test]
    fn exclude_selected_places() {
        let places = places();
        let found = selectable_places(&places, &["a".into(), "c".into()], "", None);
        let ids: Vec<_> = found.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(vec!["b", "d"], ids);
    }

    #[test]
    fn match_name_or_location_name() {
        let places = places();
        let found = selectable_places(&places, &[], "prague", None);
        assert_eq!(2, found.len());
        let found = selectable_places(&places, &[], "VALLEY", None);
        assert_eq!("c", found[0].id.as_str());
    }

    #[test]
    fn filter_by_category() {
        let places = places();
        let found = selectable_places(&places, &["d".into()], "", Some(PlaceCategory::Monuments));
        assert_eq!(1, found.len());
        assert_eq!("a", found[0].id.as_str());
    }

    #[test]
    fn sorted_distinct_categories() {
        assert_eq!(
            vec![PlaceCategory::Accommodation, PlaceCategory::Monuments],
            distinct_categories(&places())
        );
    }
}
