//! REST client for the auth and greetings endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call resolves to
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! A response counts as success only with a 2xx status. Callers in the UI do
//! not inspect the error variant: any `Err` means "rejected" and the owning
//! dialog reveals its generic error text. The variants exist for logging.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{AuthUser, CreateGreetingRequest, Greeting, LoginRequest, RegisterRequest};
use crate::config::ClientConfig;

/// Failure of a single request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("response body did not decode: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for `Status` failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(status) => Some(*status),
            _ => None,
        }
    }
}

/// Map an HTTP status to success (2xx) or [`ApiError::Status`].
///
/// # Errors
///
/// Returns [`ApiError::Status`] for any status outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

/// Decode the body of `GET /auth`.
///
/// The backend answers `200` with an empty body or `null` when there is no
/// session, so both map to `None`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when a non-empty body is not an auth user.
pub fn parse_current_user(body: &str) -> Result<Option<AuthUser>, ApiError> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<AuthUser>>(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// A collection endpoint at `{base}{path}` with list/create/remove verbs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    base: String,
    path: String,
}

impl Resource {
    /// Resource at `path` under `base`, e.g. `("/users", "/auth")`.
    pub fn new(path: &str, base: &str) -> Self {
        Self { base: base.to_owned(), path: path.to_owned() }
    }

    /// Collection URL used by `list` and `create`.
    pub fn url(&self) -> String {
        format!("{}{}", self.base, self.path)
    }

    /// URL used by `remove`; the id is appended as a path segment when given.
    pub fn item_url(&self, id: Option<&str>) -> String {
        match id {
            Some(id) if !id.is_empty() => format!("{}/{id}", self.url()),
            _ => self.url(),
        }
    }

    /// `GET` the collection and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body that
    /// does not decode as `T`.
    pub async fn list<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url())
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            check_status(resp.status())?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `POST` `body` as JSON and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body that
    /// does not decode as `T`.
    pub async fn create<B, T>(&self, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url())
                .json(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            check_status(resp.status())?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE` the collection, or a single item when `id` is given.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-2xx status.
    pub async fn remove(&self, id: Option<&str>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&self.item_url(id))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            check_status(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    /// `GET` the collection and return the raw body text.
    async fn fetch_text(&self) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url())
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            check_status(resp.status())?;
            resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

/// The three resources the greetings app talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    /// Session: `GET` current user, `POST` login, `DELETE` logout.
    pub auth: Resource,
    /// User registration.
    pub auth_users: Resource,
    /// Greeting collection.
    pub greetings: Resource,
}

impl Endpoints {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            auth: Resource::new("", &config.auth_base),
            auth_users: Resource::new("/users", &config.auth_base),
            greetings: Resource::new("/v1/greetings", &config.api_base),
        }
    }

    /// Fetch the signed-in user; `Ok(None)` when there is no session.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the body is not a user.
    pub async fn current_user(&self) -> Result<Option<AuthUser>, ApiError> {
        let body = self.auth.fetch_text().await?;
        parse_current_user(&body)
    }

    /// Start a session.
    ///
    /// # Errors
    ///
    /// Returns an error when the credentials are rejected or the request fails.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthUser, ApiError> {
        self.auth.create(request).await
    }

    /// Create a user; returns the new user id.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the user or the request fails.
    pub async fn register(&self, request: &RegisterRequest) -> Result<i64, ApiError> {
        self.auth_users.create(request).await
    }

    /// End the session.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.auth.remove(None).await
    }

    /// # Errors
    ///
    /// Returns an error when the request fails or the body is not a list.
    pub async fn list_greetings(&self) -> Result<Vec<Greeting>, ApiError> {
        self.greetings.list().await
    }

    /// Post a greeting; returns the new greeting id.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the caller is not signed in.
    pub async fn create_greeting(&self, request: &CreateGreetingRequest) -> Result<i64, ApiError> {
        self.greetings.create(request).await
    }

    /// # Errors
    ///
    /// Returns an error when the request fails or the caller may not delete it.
    pub async fn delete_greeting(&self, id: i64) -> Result<(), ApiError> {
        self.greetings.remove(Some(&id.to_string())).await
    }
}
