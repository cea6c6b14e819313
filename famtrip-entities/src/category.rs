use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The kind of a place of interest.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum PlaceCategory {
    Monuments,
    Restaurants,
    Accommodation,
    NaturalAttractions,
    #[default]
    OtherAttractions,
}

impl PlaceCategory {
    /// Human readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monuments => "Monuments",
            Self::Restaurants => "Restaurants",
            Self::Accommodation => "Accommodation",
            Self::NaturalAttractions => "Natural attractions",
            Self::OtherAttractions => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn category_names() {
        assert_eq!("natural_attractions", PlaceCategory::NaturalAttractions.as_ref());
        assert_eq!(
            Ok(PlaceCategory::OtherAttractions),
            "other_attractions".parse::<PlaceCategory>()
        );
        assert!("museums".parse::<PlaceCategory>().is_err());
        assert_eq!(5, PlaceCategory::iter().count());
    }
}
