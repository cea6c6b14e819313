//! Client side cache of the backend data.
//!
//! The state is divided into slices. Each slice is only changed by
//! dispatching one of its actions, the reducers are plain functions
//! without any side effects.

use std::cell::{Ref, RefCell};

pub mod auth;
pub mod family;
pub mod places;
pub mod routes;
pub mod settings;

#[derive(Debug, Default, Clone)]
pub struct AppState {
    pub auth: auth::AuthState,
    pub places: places::PlacesState,
    pub family: family::FamilyState,
    pub routes: routes::RoutesState,
    pub settings: settings::SettingsState,
}

#[derive(Debug, Clone)]
pub enum Action {
    Auth(auth::Action),
    Places(places::Action),
    Family(family::Action),
    Routes(routes::Action),
    Settings(settings::Action),
}

impl AppState {
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::Auth(a) => self.auth.reduce(a),
            Action::Places(a) => self.places.reduce(a),
            Action::Family(a) => self.family.reduce(a),
            Action::Routes(a) => self.routes.reduce(a),
            Action::Settings(a) => self.settings.reduce(a),
        }
    }
}

#[derive(Debug, Default)]
pub struct Store {
    state: RefCell<AppState>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state: RefCell::new(state),
        }
    }

    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        log::trace!("Dispatching {action:?}");
        self.state.borrow_mut().reduce(action);
    }

    /// Read access to the current state.
    ///
    /// Don't hold the returned reference across a dispatch.
    pub fn state(&self) -> Ref<'_, AppState> {
        self.state.borrow()
    }

    pub fn select<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        f(&self.state.borrow())
    }
}

macro_rules! impl_from_slice_action {
    ($($slice:ident => $variant:ident),*) => {
        $(
            impl From<$slice::Action> for Action {
                fn from(from: $slice::Action) -> Self {
                    Self::$variant(from)
                }
            }
        )*
    };
}

impl_from_slice_action!(
    auth => Auth,
    places => Places,
    family => Family,
    routes => Routes,
    settings => Settings
);
