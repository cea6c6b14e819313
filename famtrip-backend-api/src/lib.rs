//! Thin async client of the hosted backend.
//!
//! The backend offers an auth service (`/auth/v1`) and a REST
//! interface to the database (`/rest/v1`) including remote
//! procedure calls.

use thiserror::Error;

mod auth;
mod family;
mod places;
mod routes;
mod users;
mod util;

pub use self::util::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] famtrip_boundary::Error),

    #[error("unexpected response: {0}")]
    Json(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Json(format!("{err}"))
        } else {
            Self::Fetch(format!("{err}"))
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(format!("{err}"))
    }
}

/// Backend API
///
/// Requests are authorized with the access token of a session
/// if available, or with the anonymous key otherwise.
#[derive(Clone)]
pub struct BackendApi {
    url: String,
    key: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl std::fmt::Debug for BackendApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendApi")
            .field("url", &self.url)
            .field("authorized", &self.token.is_some())
            .finish()
    }
}

impl BackendApi {
    #[must_use]
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        let url = url.into().trim_end_matches('/').to_owned();
        Self {
            url,
            key: key.into(),
            token: None,
            client: reqwest::Client::new(),
        }
    }

    /// A copy of this API that acts on behalf of a signed in user.
    #[must_use]
    pub fn authorized(&self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.url);
        log::trace!("{method} {url}");
        let bearer = self.token.as_deref().unwrap_or(&self.key);
        self.client
            .request(method, url)
            .header("apikey", &self.key)
            .header(reqwest::header::AUTHORIZATION, auth_header_value(bearer))
    }

    fn table(&self, method: reqwest::Method, table: &str, query: &Query) -> reqwest::RequestBuilder {
        self.request(method, &format!("/rest/v1/{table}{query}"))
    }

    fn rpc(&self, function: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::POST, &format!("/rest/v1/rpc/{function}"))
    }
}
