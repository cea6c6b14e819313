use crate::gateways;
use famtrip_entities::rating::RatingOutOfRange;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is missing")]
    Name,
    #[error("The name is too long (max. {max} characters)")]
    NameTooLong { max: usize },
    #[error("No family group selected")]
    FamilyGroup,
    #[error("A route needs at least {min} waypoints")]
    TooFewWaypoints { min: usize },
    #[error("The place is already a waypoint of this route")]
    DuplicateWaypoint,
    #[error("Waypoint position {index} is out of range")]
    WaypointIndex { index: usize },
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Cannot {event} while {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },
    #[error(transparent)]
    Gateway(#[from] gateways::Error),
}

impl From<RatingOutOfRange> for Error {
    fn from(_: RatingOutOfRange) -> Self {
        Self::RatingValue
    }
}
