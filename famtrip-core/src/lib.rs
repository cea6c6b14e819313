//! # famtrip-core
//!
//! Client side business logic: gateway abstractions, the
//! application state store, route editing, map scenes and
//! location search.

pub mod entities {
    pub use famtrip_entities::{
        category::*, family::*, geo::*, id::*, place::*, rating::*, route::*, settings::*,
        transport::*, user::*, waypoint::*,
    };
}

pub mod gateways;
pub mod map;
pub mod store;
pub mod usecases;
pub mod util;
