use reqwest::Method;

use famtrip_boundary::{UserRow, UserUpdate};

use crate::{into_json, BackendApi, Query, Result, ACCEPT_OBJECT, RETURN_REPRESENTATION};

impl BackendApi {
    pub async fn user_profile(&self, user_id: &str) -> Result<UserRow> {
        let query = Query::new().select("*").eq("id", user_id);
        let response = self
            .table(Method::GET, "users", &query)
            .header("Accept", ACCEPT_OBJECT)
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn update_user_profile(&self, user_id: &str, update: &UserUpdate) -> Result<UserRow> {
        let query = Query::new().eq("id", user_id);
        let response = self
            .table(Method::PATCH, "users", &query)
            .header("Accept", ACCEPT_OBJECT)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(update)
            .send()
            .await?;
        into_json(response).await
    }
}
