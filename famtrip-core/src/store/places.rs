use crate::{entities::*, usecases::PlaceFilters};

#[derive(Debug, Default, Clone)]
pub struct PlacesState {
    pub places: Vec<Place>,
    pub selected: Option<Place>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: PlaceFilters,
}

#[derive(Debug, Clone)]
pub enum Action {
    FetchPending,
    FetchFulfilled(Vec<Place>),
    FetchRejected(String),
    Created(Place),
    Updated(Place),
    Deleted(Id),
    /// A create, update or delete request failed.
    Rejected(String),
    Select(Option<Place>),
    SetFilters(PlaceFilters),
    ClearFilters,
    ClearError,
}

impl PlacesState {
    pub fn place(&self, id: &Id) -> Option<&Place> {
        self.places.iter().find(|p| &p.id == id)
    }

    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::FetchPending => {
                self.loading = true;
                self.error = None;
            }
            Action::FetchFulfilled(places) => {
                self.loading = false;
                self.places = places;
            }
            Action::FetchRejected(err) => {
                self.loading = false;
                self.error = Some(err);
            }
            Action::Created(place) => {
                self.places.insert(0, place);
            }
            Action::Updated(place) => {
                if let Some(p) = self.places.iter_mut().find(|p| p.id == place.id) {
                    *p = place.clone();
                }
                if self.selected.as_ref().is_some_and(|s| s.id == place.id) {
                    self.selected = Some(place);
                }
            }
            Action::Deleted(id) => {
                self.places.retain(|p| p.id != id);
                if self.selected.as_ref().is_some_and(|s| s.id == id) {
                    self.selected = None;
                }
            }
            Action::Rejected(err) => {
                self.error = Some(err);
            }
            Action::Select(place) => {
                self.selected = place;
            }
            Action::SetFilters(filters) => {
                self.filters = filters;
            }
            Action::ClearFilters => {
                self.filters = PlaceFilters::default();
            }
            Action::ClearError => {
                self.error = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use famtrip_entities::builders::*;

    fn state() -> PlacesState {
        let mut state = PlacesState::default();
        state.reduce(Action::FetchPending);
        state.reduce(Action::FetchFulfilled(vec![
            Place::build().id("a").name("A").finish(),
            Place::build().id("b").name("B").finish(),
        ]));
        state
    }

    #[test]
    fn fetch_places() {
        let mut state = PlacesState::default();
        state.reduce(Action::FetchPending);
        assert!(state.loading);
        state.reduce(Action::FetchRejected("offline".into()));
        assert!(!state.loading);
        assert_eq!(Some("offline"), state.error.as_deref());
        state.reduce(Action::FetchPending);
        assert!(state.error.is_none());
        state.reduce(Action::FetchFulfilled(vec![Place::build().finish()]));
        assert_eq!(1, state.places.len());
    }

    #[test]
    fn prepend_created_place() {
        let mut state = state();
        state.reduce(Action::Created(Place::build().id("c").finish()));
        let ids: Vec<_> = state.places.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(vec!["c", "a", "b"], ids);
    }

    #[test]
    fn replace_updated_place_in_list_and_selection() {
        let mut state = state();
        let b = state.place(&"b".into()).cloned();
        state.reduce(Action::Select(b));
        state.reduce(Action::Updated(Place::build().id("b").name("B2").finish()));
        assert_eq!("B2", state.places[1].name);
        assert_eq!("B2", state.selected.as_ref().unwrap().name);
    }

    #[test]
    fn delete_selected_place() {
        let mut state = state();
        let a = state.place(&"a".into()).cloned();
        state.reduce(Action::Select(a));
        state.reduce(Action::Deleted("a".into()));
        assert!(state.place(&"a".into()).is_none());
        assert!(state.selected.is_none());
    }

    #[test]
    fn delete_keeps_other_selection() {
        let mut state = state();
        let a = state.place(&"a".into()).cloned();
        state.reduce(Action::Select(a));
        state.reduce(Action::Deleted("b".into()));
        assert_eq!(1, state.places.len());
        assert!(state.selected.is_some());
    }
}
