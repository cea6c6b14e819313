use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// How a family travels along a route or a single segment of it.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum TransportMode {
    #[default]
    Walking,
    Driving,
    Cycling,
    PublicTransport,
    Mixed,
}

/// Vehicle profile of a road routing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RoutingProfile {
    Foot,
    Bike,
    Car,
}

impl TransportMode {
    pub const fn routing_profile(self) -> RoutingProfile {
        match self {
            Self::Walking => RoutingProfile::Foot,
            Self::Cycling => RoutingProfile::Bike,
            Self::Driving | Self::PublicTransport | Self::Mixed => RoutingProfile::Car,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Walking => "Walking",
            Self::Driving => "Driving",
            Self::Cycling => "Cycling",
            Self::PublicTransport => "Public transport",
            Self::Mixed => "Mixed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routing_profiles() {
        assert_eq!(RoutingProfile::Foot, TransportMode::Walking.routing_profile());
        assert_eq!(RoutingProfile::Bike, TransportMode::Cycling.routing_profile());
        assert_eq!(RoutingProfile::Car, TransportMode::Driving.routing_profile());
        assert_eq!(RoutingProfile::Car, TransportMode::PublicTransport.routing_profile());
        assert_eq!(RoutingProfile::Car, TransportMode::Mixed.routing_profile());
        assert_eq!("foot", RoutingProfile::Foot.as_ref());
    }

    #[test]
    fn parse_transport_mode() {
        assert_eq!(
            Ok(TransportMode::PublicTransport),
            "public_transport".parse::<TransportMode>()
        );
        assert_eq!("public_transport", TransportMode::PublicTransport.to_string());
    }
}
