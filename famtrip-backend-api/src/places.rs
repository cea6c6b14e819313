use reqwest::Method;

use famtrip_boundary::{NewPlace, PlaceRow, PlaceUpdate};

use crate::{into_empty, into_json, BackendApi, Query, Result, ACCEPT_OBJECT, RETURN_REPRESENTATION};

const TABLE: &str = "places";

impl BackendApi {
    /// All visible places with decoded coordinates.
    pub async fn places_with_coordinates(&self) -> Result<Vec<PlaceRow>> {
        let response = self
            .rpc("get_places_with_coordinates")
            .json(&serde_json::json!({}))
            .send()
            .await?;
        into_json(response).await
    }

    /// Inserts a place.
    ///
    /// The returned row does not contain decoded coordinates.
    pub async fn create_place(&self, place: &NewPlace) -> Result<PlaceRow> {
        let response = self
            .table(Method::POST, TABLE, &Query::new().select("*"))
            .header("Accept", ACCEPT_OBJECT)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(place)
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn update_place(&self, id: &str, update: &PlaceUpdate) -> Result<PlaceRow> {
        let query = Query::new().eq("id", id).select("*");
        let response = self
            .table(Method::PATCH, TABLE, &query)
            .header("Accept", ACCEPT_OBJECT)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(update)
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn delete_place(&self, id: &str) -> Result<()> {
        let query = Query::new().eq("id", id);
        let response = self.table(Method::DELETE, TABLE, &query).send().await?;
        into_empty(response).await
    }
}
