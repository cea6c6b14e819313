mod create_place;
mod error;
mod family_group;
mod filter_places;
mod location_search;
mod profile;
mod reorder_waypoints;
mod route_draft;
mod routes_view;
mod select_places;
mod settings;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_place::*, error::Error, family_group::*, filter_places::*, location_search::*,
    profile::*, reorder_waypoints::*, route_draft::*, routes_view::*, select_places::*,
    settings::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::entities::*;
}
