//! Implementations of the gateways of `famtrip-core`.

pub mod backend;
pub mod osrm;
pub mod photon;
pub mod storage;
