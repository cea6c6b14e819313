use super::prelude::*;
use crate::gateways::geocode::GeoSuggestion;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlace {
    pub name           : String,
    pub description    : Option<String>,
    pub category       : Option<PlaceCategory>,
    pub rating         : Option<Rating>,
    pub pos            : Option<MapPoint>,
    pub location_name  : Option<String>,
    pub visibility     : Visibility,
    pub family_id      : Id,
    pub created_by     : Id,
    pub practical_info : Option<PracticalInfo>,
}

/// Changes of a place, `None` leaves a field untouched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlaceUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<Option<PlaceCategory>>,
    pub rating: Option<Option<Rating>>,
    pub pos: Option<MapPoint>,
    pub location_name: Option<Option<String>>,
    pub visibility: Option<Visibility>,
    pub practical_info: Option<PracticalInfo>,
}

impl PlaceUpdate {
    /// Moves a place to a new position.
    pub fn position(pos: MapPoint) -> Self {
        Self {
            pos: Some(pos),
            ..Default::default()
        }
    }
}

/// Raw input of the practical info section.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PracticalInfoForm {
    pub entrance_fee: String,
    pub currency: String,
    pub parking: bool,
    pub description: String,
}

impl PracticalInfoForm {
    fn into_practical_info(self) -> PracticalInfo {
        let Self {
            entrance_fee,
            currency,
            parking,
            description,
        } = self;
        let entrance_fee = match entrance_fee.trim().parse::<f64>() {
            Ok(fee) if fee.is_finite() => Some(fee),
            _ => {
                if !entrance_fee.trim().is_empty() {
                    log::debug!("Ignoring invalid entrance fee '{entrance_fee}'");
                }
                None
            }
        };
        PracticalInfo {
            entrance_fee,
            currency: non_blank(currency),
            parking: Some(parking),
            description: non_blank(description),
        }
    }
}

/// Input of the place form, used for creating and editing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceForm {
    pub name: String,
    pub description: String,
    pub category: PlaceCategory,
    pub rating: u8,
    pub pos: Option<MapPoint>,
    pub location_name: String,
    pub is_public: bool,
    pub family_id: Option<Id>,
    pub practical_info: PracticalInfoForm,
}

impl PlaceForm {
    pub fn new(currency: Currency) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: PlaceCategory::default(),
            rating: 0,
            pos: None,
            location_name: String::new(),
            is_public: false,
            family_id: None,
            practical_info: PracticalInfoForm {
                currency: currency.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn from_place(place: &Place, currency: Currency) -> Self {
        let info = place.practical_info.clone().unwrap_or_default();
        Self {
            name: place.name.clone(),
            description: place.description.clone().unwrap_or_default(),
            category: place.category.unwrap_or_default(),
            rating: place.rating.map(u8::from).unwrap_or_default(),
            pos: place.pos,
            location_name: place.location_name.clone().unwrap_or_default(),
            is_public: place.is_public(),
            family_id: Some(place.family_id.clone()),
            practical_info: PracticalInfoForm {
                entrance_fee: info.entrance_fee.map(|f| f.to_string()).unwrap_or_default(),
                currency: info.currency.unwrap_or_else(|| currency.to_string()),
                parking: info.parking.unwrap_or_default(),
                description: info.description.unwrap_or_default(),
            },
        }
    }

    /// Takes over the position and name of a location search result.
    pub fn set_location(&mut self, suggestion: &GeoSuggestion) {
        self.pos = Some(suggestion.pos);
        self.location_name = suggestion.display_name.clone();
    }

    fn validate(&self) -> Result<Rating> {
        if self.name.trim().is_empty() {
            return Err(Error::Name);
        }
        if !self.family_id.as_ref().is_some_and(Id::is_valid) {
            return Err(Error::FamilyGroup);
        }
        if self.pos.is_some_and(|pos| !pos.is_valid()) {
            return Err(Error::InvalidPosition);
        }
        Ok(Rating::try_from(i64::from(self.rating))?)
    }
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

pub fn prepare_new_place(form: PlaceForm, user: Option<&User>) -> Result<NewPlace> {
    let user = user.ok_or(Error::Unauthorized)?;
    let rating = form.validate()?;
    let PlaceForm {
        name,
        description,
        category,
        rating: _,
        pos,
        location_name,
        is_public,
        family_id,
        practical_info,
    } = form;
    Ok(NewPlace {
        name,
        description: non_blank(description),
        category: Some(category),
        rating: Some(rating),
        pos,
        location_name: non_blank(location_name),
        visibility: is_public.into(),
        family_id: family_id.ok_or(Error::FamilyGroup)?,
        created_by: user.id.clone(),
        practical_info: Some(practical_info.into_practical_info()),
    })
}

pub fn prepare_place_update(form: PlaceForm) -> Result<PlaceUpdate> {
    let rating = form.validate()?;
    let PlaceForm {
        name,
        description,
        category,
        rating: _,
        pos,
        location_name,
        is_public,
        family_id: _,
        practical_info,
    } = form;
    Ok(PlaceUpdate {
        name: Some(name),
        description: Some(non_blank(description)),
        category: Some(Some(category)),
        rating: Some(Some(rating)),
        pos,
        location_name: Some(non_blank(location_name)),
        visibility: Some(is_public.into()),
        practical_info: Some(practical_info.into_practical_info()),
    })
}
