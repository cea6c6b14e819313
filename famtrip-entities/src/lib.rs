#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # famtrip-entities
//!
//! Reusable, agnostic domain entities for famtrip.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod category;
pub mod family;
pub mod geo;
pub mod id;
pub mod place;
pub mod rating;
pub mod route;
pub mod settings;
pub mod transport;
pub mod user;
pub mod waypoint;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
