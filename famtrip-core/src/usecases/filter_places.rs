use super::prelude::*;

/// Client side filters of the place list.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlaceFilters {
    pub category: Option<PlaceCategory>,
    pub min_rating: Option<Rating>,
    pub visibility: Option<Visibility>,
    pub family_id: Option<Id>,
}

impl PlaceFilters {
    pub fn is_empty(&self) -> bool {
        let Self {
            category,
            min_rating,
            visibility,
            family_id,
        } = self;
        category.is_none() && min_rating.is_none() && visibility.is_none() && family_id.is_none()
    }

    pub fn matches(&self, place: &Place) -> bool {
        if let Some(category) = self.category {
            if place.category != Some(category) {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            // Unrated places never pass a rating filter
            if !place.rating.is_some_and(|r| r >= min_rating) {
                return false;
            }
        }
        if let Some(visibility) = self.visibility {
            if place.visibility != visibility {
                return false;
            }
        }
        if let Some(family_id) = &self.family_id {
            if &place.family_id != family_id {
                return false;
            }
        }
        true
    }
}

pub fn filter_places(places: Vec<Place>, filters: &PlaceFilters) -> Vec<Place> {
    if filters.is_empty() {
        return places;
    }
    places.into_iter().filter(|p| filters.matches(p)).collect()
}

/// Case insensitive search in name, description and category.
pub fn search_places<'a>(places: &'a [Place], text: &str) -> Vec<&'a Place> {
    let needle = text.trim().to_lowercase();
    places
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
                || p.category.is_some_and(|c| c.as_ref().contains(&needle))
        })
        .collect()
}
