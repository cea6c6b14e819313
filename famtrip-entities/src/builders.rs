pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{family_builder::*, place_builder::*, route_builder::*, waypoint_builder::*};

pub mod place_builder {

    use super::*;
    use crate::{category::*, geo::*, id::*, place::*, rating::*};
    use time::OffsetDateTime;

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.place.description = Some(desc.into());
            self
        }
        pub fn category(mut self, category: PlaceCategory) -> Self {
            self.place.category = Some(category);
            self
        }
        pub fn rating(mut self, rating: u8) -> Self {
            self.place.rating = Some(Rating::new(rating));
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.pos = Some(pos);
            self
        }
        pub fn location_name(mut self, name: &str) -> Self {
            self.place.location_name = Some(name.into());
            self
        }
        pub fn public(mut self, is_public: bool) -> Self {
            self.place.visibility = is_public.into();
            self
        }
        pub fn family_id(mut self, id: &str) -> Self {
            self.place.family_id = id.into();
            self
        }
        pub fn created_by(mut self, id: &str) -> Self {
            self.place.created_by = id.into();
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            PlaceBuild {
                place: Place {
                    id: Id::new(),
                    name: "".into(),
                    description: None,
                    category: None,
                    rating: None,
                    pos: None,
                    location_name: None,
                    visibility: Visibility::Private,
                    family_id: Id::new(),
                    created_by: Id::new(),
                    practical_info: None,
                    created_at: OffsetDateTime::UNIX_EPOCH,
                    updated_at: OffsetDateTime::UNIX_EPOCH,
                },
            }
        }
    }
}

pub mod route_builder {

    use super::*;
    use crate::{id::*, place::*, route::*, transport::*};
    use time::OffsetDateTime;

    #[derive(Debug)]
    pub struct RouteBuild {
        route: Route,
    }

    impl RouteBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.route.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.route.name = name.into();
            self
        }
        pub fn transport_mode(mut self, mode: TransportMode) -> Self {
            self.route.transport_mode = Some(mode);
            self
        }
        pub fn family_id(mut self, id: &str) -> Self {
            self.route.family_id = id.into();
            self
        }
        pub fn waypoint_count(mut self, count: usize) -> Self {
            self.route.waypoint_count = count;
            self
        }
        pub fn finish(self) -> Route {
            self.route
        }
    }

    impl Builder for Route {
        type Build = RouteBuild;
        fn build() -> RouteBuild {
            RouteBuild {
                route: Route {
                    id: Id::new(),
                    name: "".into(),
                    description: None,
                    difficulty: Some(Difficulty::default()),
                    transport_mode: None,
                    total_distance: None,
                    estimated_duration: None,
                    visibility: Visibility::Private,
                    family_id: Id::new(),
                    created_by: Id::new(),
                    created_at: OffsetDateTime::UNIX_EPOCH,
                    updated_at: OffsetDateTime::UNIX_EPOCH,
                    waypoint_count: 0,
                },
            }
        }
    }
}

pub mod waypoint_builder {

    use super::*;
    use crate::{geo::*, id::*, transport::*, waypoint::*};

    #[derive(Debug)]
    pub struct RouteWaypointBuild {
        wp: RouteWaypoint,
    }

    impl RouteWaypointBuild {
        pub fn place_id(mut self, id: &str) -> Self {
            self.wp.place_id = id.into();
            self
        }
        pub fn place_name(mut self, name: &str) -> Self {
            self.wp.place_name = name.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.wp.pos = Some(pos);
            self
        }
        pub fn order_index(mut self, idx: u32) -> Self {
            self.wp.order_index = idx;
            self
        }
        pub fn transport_to_next(mut self, mode: TransportMode) -> Self {
            self.wp.transport_to_next = Some(mode);
            self
        }
        pub fn finish(self) -> RouteWaypoint {
            self.wp
        }
    }

    impl Builder for RouteWaypoint {
        type Build = RouteWaypointBuild;
        fn build() -> RouteWaypointBuild {
            RouteWaypointBuild {
                wp: RouteWaypoint {
                    waypoint_id: Id::new(),
                    place_id: Id::new(),
                    place_name: "".into(),
                    place_description: None,
                    place_category: None,
                    place_rating: None,
                    place_location_name: None,
                    pos: None,
                    order_index: 0,
                    transport_to_next: None,
                    notes: None,
                    estimated_time: None,
                },
            }
        }
    }
}

pub mod family_builder {

    use super::*;
    use crate::{family::*, id::*};
    use time::OffsetDateTime;

    #[derive(Debug)]
    pub struct FamilyGroupBuild {
        group: FamilyGroup,
    }

    impl FamilyGroupBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.group.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.group.name = name.into();
            self
        }
        pub fn admin_id(mut self, id: &str) -> Self {
            self.group.admin_id = id.into();
            self
        }
        pub fn created_at(mut self, at: OffsetDateTime) -> Self {
            self.group.created_at = at;
            self
        }
        pub fn finish(self) -> FamilyGroup {
            self.group
        }
    }

    impl Builder for FamilyGroup {
        type Build = FamilyGroupBuild;
        fn build() -> FamilyGroupBuild {
            FamilyGroupBuild {
                group: FamilyGroup {
                    id: Id::new(),
                    name: "".into(),
                    admin_id: Id::new(),
                    created_at: OffsetDateTime::UNIX_EPOCH,
                },
            }
        }
    }
}
