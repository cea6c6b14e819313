use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

pub type Degrees = f64;

const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn to_km(self) -> f64 {
        self.0 / 1000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

/// A geographical position in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: Degrees,
    lng: Degrees,
}

impl MapPoint {
    pub const fn lat_range() -> (Degrees, Degrees) {
        (-90.0, 90.0)
    }

    pub const fn lng_range() -> (Degrees, Degrees) {
        (-180.0, 180.0)
    }

    pub fn from_lat_lng_deg(lat: Degrees, lng: Degrees) -> Self {
        let pos = Self { lat, lng };
        debug_assert!(pos.is_valid());
        pos
    }

    pub fn try_from_lat_lng_deg(lat: Degrees, lng: Degrees) -> Option<Self> {
        let pos = Self { lat, lng };
        if pos.is_valid() {
            Some(pos)
        } else {
            None
        }
    }

    pub const fn lat(self) -> Degrees {
        self.lat
    }

    pub const fn lng(self) -> Degrees {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (Degrees, Degrees) {
        (self.lat, self.lng)
    }

    pub fn is_valid(self) -> bool {
        let (min_lat, max_lat) = Self::lat_range();
        let (min_lng, max_lng) = Self::lng_range();
        self.lat.is_finite()
            && self.lng.is_finite()
            && (min_lat..=max_lat).contains(&self.lat)
            && (min_lng..=max_lng).contains(&self.lng)
    }

    /// Great-circle distance (haversine formula).
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1, lng1) = (p1.lat.to_radians(), p1.lng.to_radians());
        let (lat2, lng2) = (p2.lat.to_radians(), p2.lng.to_radians());
        let d_lat = lat2 - lat1;
        let d_lng = lng2 - lng1;
        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        Distance::from_meters(EARTH_RADIUS_METERS * c)
    }

    /// Planar midpoint, good enough for placing labels between two
    /// nearby positions.
    pub fn midpoint(p1: MapPoint, p2: MapPoint) -> MapPoint {
        Self {
            lat: (p1.lat + p2.lat) / 2.0,
            lng: (p1.lng + p2.lng) / 2.0,
        }
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapPointParseError {
    #[error("expected two comma separated coordinates")]
    Format,
    #[error("invalid number: {0}")]
    Number(String),
    #[error("coordinates out of range")]
    Range,
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split(',')
            .map(str::trim)
            .collect_tuple()
            .ok_or(MapPointParseError::Format)?;
        let lat = lat
            .parse::<Degrees>()
            .map_err(|_| MapPointParseError::Number(lat.to_owned()))?;
        let lng = lng
            .parse::<Degrees>()
            .map_err(|_| MapPointParseError::Number(lng.to_owned()))?;
        MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(MapPointParseError::Range)
    }
}

/// An axis aligned bounding box, e.g. the visible part of a map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    /// The smallest box enclosing all given points.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = MapPoint>,
    {
        points.into_iter().fold(None, |bbox, p| {
            Some(match bbox {
                None => Self::new(p, p),
                Some(Self { sw, ne }) => Self::new(
                    MapPoint::from_lat_lng_deg(sw.lat.min(p.lat), sw.lng.min(p.lng)),
                    MapPoint::from_lat_lng_deg(ne.lat.max(p.lat), ne.lng.max(p.lng)),
                ),
            })
        })
    }

    pub const fn south_west(&self) -> MapPoint {
        self.sw
    }

    pub const fn north_east(&self) -> MapPoint {
        self.ne
    }

    pub fn center(&self) -> MapPoint {
        MapPoint::midpoint(self.sw, self.ne)
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat <= self.ne.lat
    }

    pub fn is_empty(&self) -> bool {
        debug_assert!(self.is_valid());
        self.sw.lat == self.ne.lat || self.sw.lng == self.ne.lng
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.is_valid());
        if pt.lat < self.sw.lat || pt.lat > self.ne.lat {
            return false;
        }
        if self.sw.lng <= self.ne.lng {
            // regular (inclusive)
            pt.lng >= self.sw.lng && pt.lng <= self.ne.lng
        } else {
            // inverse (exclusive)
            !(pt.lng > self.ne.lng && pt.lng < self.sw.lng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_out_of_range_points() {
        assert!(MapPoint::try_from_lat_lng_deg(90.1, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -180.1).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, 180.0).is_some());
    }

    #[test]
    fn parse_map_point() {
        let pos: MapPoint = "50.0755, 14.4378".parse().unwrap();
        assert_eq!(50.0755, pos.lat());
        assert_eq!(14.4378, pos.lng());
        assert_eq!(Err(MapPointParseError::Format), "50.0".parse::<MapPoint>());
        assert_eq!(Err(MapPointParseError::Range), "91,0".parse::<MapPoint>());
    }

    #[test]
    fn real_distance() {
        let stuttgart = MapPoint::from_lat_lng_deg(48.7755, 9.1827);
        let mannheim = MapPoint::from_lat_lng_deg(49.4836, 8.4630);
        let d = MapPoint::distance(stuttgart, mannheim);
        assert!(d.to_km() > 94.0);
        assert!(d.to_km() < 96.0);
        assert_eq!(0.0, MapPoint::distance(stuttgart, stuttgart).to_meters());
    }

    #[test]
    fn enclosing_bbox() {
        assert!(MapBbox::enclosing(vec![]).is_none());
        let bbox = MapBbox::enclosing(vec![
            MapPoint::from_lat_lng_deg(50.08, 14.42),
            MapPoint::from_lat_lng_deg(50.09, 14.40),
            MapPoint::from_lat_lng_deg(50.07, 14.44),
        ])
        .unwrap();
        assert_eq!(MapPoint::from_lat_lng_deg(50.07, 14.40), bbox.south_west());
        assert_eq!(MapPoint::from_lat_lng_deg(50.09, 14.44), bbox.north_east());
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(50.08, 14.42)));
        assert!(!bbox.contains_point(MapPoint::from_lat_lng_deg(50.1, 14.42)));
    }

    #[test]
    fn bbox_across_antimeridian() {
        let bbox = MapBbox::new(
            MapPoint::from_lat_lng_deg(-10.0, 170.0),
            MapPoint::from_lat_lng_deg(10.0, -170.0),
        );
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(0.0, 180.0)));
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(0.0, -175.0)));
        assert!(!bbox.contains_point(MapPoint::from_lat_lng_deg(0.0, 0.0)));
    }
}
