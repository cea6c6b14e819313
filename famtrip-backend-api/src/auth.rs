use reqwest::Method;

use famtrip_boundary::{AuthSession, AuthUser, Credentials, SignUp, SignUpResponse};

use crate::{into_empty, into_json, BackendApi, Result};

impl BackendApi {
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession> {
        let response = self
            .request(Method::POST, "/auth/v1/token?grant_type=password")
            .json(credentials)
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn sign_up(&self, sign_up: &SignUp) -> Result<SignUpResponse> {
        let response = self
            .request(Method::POST, "/auth/v1/signup")
            .json(sign_up)
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn sign_out(&self) -> Result<()> {
        let response = self.request(Method::POST, "/auth/v1/logout").send().await?;
        into_empty(response).await
    }

    /// The user the current access token belongs to.
    pub async fn current_user(&self) -> Result<AuthUser> {
        let response = self.request(Method::GET, "/auth/v1/user").send().await?;
        into_json(response).await
    }
}
