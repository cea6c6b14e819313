use super::*;

use usecases::{PlaceForm, PlaceUpdate};

pub async fn fetch_places(store: &Store, places: &dyn PlaceRepo) -> Result<Vec<Place>> {
    store.dispatch(store::places::Action::FetchPending);
    match places.load_places().await {
        Ok(loaded) => {
            debug!("Loaded {} places", loaded.len());
            store.dispatch(store::places::Action::FetchFulfilled(loaded.clone()));
            Ok(loaded)
        }
        Err(err) => {
            store.dispatch(store::places::Action::FetchRejected(err.to_string()));
            Err(err.into())
        }
    }
}

pub async fn create_place(store: &Store, places: &dyn PlaceRepo, form: PlaceForm) -> Result<Place> {
    let user = store.select(|s| s.auth.user.clone());
    let new_place = usecases::prepare_new_place(form, user.as_ref())?;
    match places.create_place(&new_place).await {
        Ok(place) => {
            store.dispatch(store::places::Action::Created(place.clone()));
            Ok(place)
        }
        Err(err) => {
            store.dispatch(store::places::Action::Rejected(err.to_string()));
            Err(err.into())
        }
    }
}

pub async fn update_place(
    store: &Store,
    places: &dyn PlaceRepo,
    id: &Id,
    form: PlaceForm,
) -> Result<Place> {
    let update = usecases::prepare_place_update(form)?;
    apply_place_update(store, places, id, update).await
}

/// Moves a place that has been dragged on the map.
///
/// Waypoints of the selected route that refer to the
/// place are moved as well.
pub async fn move_place(
    store: &Store,
    places: &dyn PlaceRepo,
    id: &Id,
    pos: MapPoint,
) -> Result<Place> {
    if !pos.is_valid() {
        return Err(usecases::Error::InvalidPosition.into());
    }
    let place = apply_place_update(store, places, id, PlaceUpdate::position(pos)).await?;
    store.dispatch(store::routes::Action::WaypointMoved {
        place_id: id.clone(),
        pos,
    });
    Ok(place)
}

async fn apply_place_update(
    store: &Store,
    places: &dyn PlaceRepo,
    id: &Id,
    update: PlaceUpdate,
) -> Result<Place> {
    let previous_pos = store.select(|s| s.places.place(id).and_then(|p| p.pos));
    match places.update_place(id, &update).await {
        Ok(mut place) => {
            // The stored record doesn't contain the decoded coordinates
            if place.pos.is_none() {
                place.pos = update.pos.or(previous_pos);
            }
            store.dispatch(store::places::Action::Updated(place.clone()));
            Ok(place)
        }
        Err(err) => {
            store.dispatch(store::places::Action::Rejected(err.to_string()));
            Err(err.into())
        }
    }
}

pub async fn delete_place(store: &Store, places: &dyn PlaceRepo, id: &Id) -> Result<()> {
    match places.delete_place(id).await {
        Ok(()) => {
            store.dispatch(store::places::Action::Deleted(id.clone()));
            Ok(())
        }
        Err(err) => {
            store.dispatch(store::places::Action::Rejected(err.to_string()));
            Err(err.into())
        }
    }
}
