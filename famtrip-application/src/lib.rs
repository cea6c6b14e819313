//! Flows that combine the store with the gateways.
//!
//! Every flow dispatches its pending action first, then awaits
//! the gateways and finally dispatches the outcome. Failures are
//! recorded in the affected slice and returned to the caller.

#[macro_use]
extern crate log;

mod auth;
mod family;
mod location_search;
mod places;
mod routes;
mod routing;
mod settings;

pub mod prelude {
    pub use super::{
        auth::*, family::*, location_search::*, places::*, routes::*, routing::*, settings::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use famtrip_core::{
    entities::*,
    gateways::{self, backend::*},
    store::{self, Store},
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;
