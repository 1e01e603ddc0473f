//! # HTTP client for the dashboard REST API
//!
//! [`ApiClient`] is the only way the dashboard talks to the backend. Every
//! request is built by [`ApiClient::request`], which reads the credential from
//! the injected [`SessionStore`] at build time and, when one is present, adds
//! `Authorization: Bearer <credential>`. Nothing is cached, so a logout is
//! honoured by the very next request.
//!
//! Each endpoint has a `*_request` builder (pure, used by tests to inspect the
//! URL and headers) and an async method that sends it and decodes the reply
//! through [`ApiClient::send_json`]:
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`login`](ApiClient::login) | `POST /login` |
//! | [`dashboard_summary`](ApiClient::dashboard_summary) | `GET /dashboard/summary?filter=` |
//! | [`dashboard_stat`](ApiClient::dashboard_stat) | `GET /dashboard/stat?filter=` |
//! | [`list_offers`](ApiClient::list_offers) | `GET /offers?page=&per_page=&search=&type=` |
//! | [`create_offer`](ApiClient::create_offer) | `POST /offers` |
//! | [`list_users`](ApiClient::list_users) | `GET /users?page=1&per_page=1000` |
//!
//! There are no retries and no timeouts; callers decide what a failure means.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use store::SessionStore;

use crate::error::ApiError;
use crate::list::ListQuery;
use crate::models::{
    DashboardStat, DashboardSummary, LoginRequest, LoginResponse, NewOffer, OfferRow, Page,
    StatFilter, SummaryFilter, User,
};

/// Users are fetched in one page large enough for the recipient select.
const USERS_PER_PAGE: u32 = 1000;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Start a request to `path`, authorised with the current credential if any.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let builder = self
            .http
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");
        match self.session.current_credential() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send `builder` and decode a JSON reply, mapping failures to [`ApiError`].
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            ApiError::from(e)
        })?;
        let status = response.status();
        let url = response.url().path().to_string();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status.as_u16(), &body);
            tracing::warn!("{} returned {}: {}", url, status, err);
            return Err(err);
        }
        let body = response.text().await?;
        tracing::debug!("{} returned {} bytes", url, body.len());
        decode_body(&body)
    }

    pub fn login_request(&self, email: &str, password: &str) -> RequestBuilder {
        self.request(Method::POST, "/login").json(&LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        })
    }

    /// Exchange credentials for a bearer token. The session is not touched.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.send_json(self.login_request(email, password)).await
    }

    pub fn dashboard_summary_request(&self, filter: SummaryFilter) -> RequestBuilder {
        self.request(Method::GET, "/dashboard/summary")
            .query(&[("filter", filter.as_str())])
    }

    pub async fn dashboard_summary(&self, filter: SummaryFilter) -> Result<DashboardSummary, ApiError> {
        self.send_json(self.dashboard_summary_request(filter)).await
    }

    pub fn dashboard_stat_request(&self, filter: StatFilter) -> RequestBuilder {
        self.request(Method::GET, "/dashboard/stat")
            .query(&[("filter", filter.as_str())])
    }

    pub async fn dashboard_stat(&self, filter: StatFilter) -> Result<DashboardStat, ApiError> {
        self.send_json(self.dashboard_stat_request(filter)).await
    }

    pub fn list_offers_request(&self, query: &ListQuery) -> RequestBuilder {
        self.request(Method::GET, "/offers").query(&[
            ("page", query.wire_page().to_string()),
            ("per_page", query.page_size.to_string()),
            ("search", query.search_text.clone()),
            ("type", query.filter_value.clone()),
        ])
    }

    pub async fn list_offers(&self, query: &ListQuery) -> Result<Page<OfferRow>, ApiError> {
        self.send_json(self.list_offers_request(query)).await
    }

    pub fn create_offer_request(&self, offer: &NewOffer) -> RequestBuilder {
        self.request(Method::POST, "/offers").json(offer)
    }

    /// Create an offer and return the server's representation of it.
    pub async fn create_offer(&self, offer: &NewOffer) -> Result<serde_json::Value, ApiError> {
        self.send_json(self.create_offer_request(offer)).await
    }

    pub fn list_users_request(&self) -> RequestBuilder {
        self.request(Method::GET, "/users").query(&[
            ("page", "1".to_string()),
            ("per_page", USERS_PER_PAGE.to_string()),
        ])
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let page: Page<User> = self.send_json(self.list_users_request()).await?;
        Ok(page.data)
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.session == other.session
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Decode a successful reply body, logging what could not be read.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to decode response body: {}", e);
        ApiError::Decode(e.to_string())
    })
}
