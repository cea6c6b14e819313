use std::cell::RefCell;

use super::*;

use famtrip_core::{
    gateways::geocode::GeoCodingGateway,
    usecases::{LocationSearch, QueryAction, MAX_SUGGESTIONS},
    util::debounce::Debouncer,
};

/// Handles a changed query of a location input.
///
/// Lookups are debounced and failures end up in an empty list
/// of suggestions. Returns `true` if the suggestions have been
/// replaced.
pub async fn search_locations(
    search: &RefCell<LocationSearch>,
    geocoder: &dyn GeoCodingGateway,
    debouncer: &Debouncer,
    query: &str,
) -> bool {
    let query = match search.borrow_mut().set_query(query) {
        QueryAction::Lookup(query) => query,
        QueryAction::Clear | QueryAction::Skip => {
            debouncer.cancel();
            return false;
        }
    };
    if !debouncer.settle().await {
        return false;
    }
    let suggestions = match geocoder.search(&query, MAX_SUGGESTIONS).await {
        Ok(suggestions) => suggestions,
        Err(err) => {
            warn!("Location search for '{query}' failed: {err}");
            vec![]
        }
    };
    search.borrow_mut().set_suggestions(&query, suggestions)
}
