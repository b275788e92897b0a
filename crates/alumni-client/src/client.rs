//! HTTP client for the portal REST API.

use alumni_model::{
    AlumniProfile, ApplicationRequest, Campaign, CampaignFilter, CampaignRequest, DirectoryFilter,
    DonationRequest, Event, EventFilter, EventRequest, JobFilter, JobPosting, JobRequest,
    LoginRequest, RecordId, RegisterRequest, RegistrationRequest, User,
};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Backend origin used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("alumni-portal/", env!("CARGO_PKG_VERSION"));

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for the alumni portal backend.
///
/// Cheap to clone; clones share the underlying connection pool. Every call is
/// independent: there is no retry, no request sequencing and no cancellation.
#[derive(Debug, Clone)]
pub struct PortalClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PortalClient {
    /// Creates a client for the backend at `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Attach (or drop) the session token sent as `Authorization: Bearer`.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// `POST /api/auth/login`
    pub async fn login(&self, credentials: &LoginRequest) -> Result<User> {
        let url = self.endpoint("/api/auth/login", &[])?;
        self.send_json(Method::POST, url, Some(credentials)).await
    }

    /// `POST /api/auth/register`
    pub async fn register(&self, details: &RegisterRequest) -> Result<User> {
        let url = self.endpoint("/api/auth/register", &[])?;
        self.send_json(Method::POST, url, Some(details)).await
    }

    // =========================================================================
    // DIRECTORY
    // =========================================================================

    /// `GET /api/alumni`
    pub async fn list_alumni(&self, filter: &DirectoryFilter) -> Result<Vec<AlumniProfile>> {
        let url = self.endpoint("/api/alumni", &filter.query_params())?;
        self.send_json(Method::GET, url, None::<&()>).await
    }

    // =========================================================================
    // JOBS
    // =========================================================================

    /// `GET /api/jobs?search=&location=&type=&field=`
    pub async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<JobPosting>> {
        let url = self.endpoint("/api/jobs", &filter.query_params())?;
        self.send_json(Method::GET, url, None::<&()>).await
    }

    /// `POST /api/jobs`
    pub async fn create_job(&self, job: &JobRequest) -> Result<()> {
        let url = self.endpoint("/api/jobs", &[])?;
        self.send_unit(Method::POST, url, job).await
    }

    /// `POST /api/jobs/{id}/apply`
    pub async fn apply_to_job(
        &self,
        job_id: &RecordId,
        application: &ApplicationRequest,
    ) -> Result<()> {
        let url = self.endpoint(&format!("/api/jobs/{job_id}/apply"), &[])?;
        self.send_unit(Method::POST, url, application).await
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// `GET /api/events?search=&type=`
    pub async fn list_events(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        let url = self.endpoint("/api/events", &filter.query_params())?;
        self.send_json(Method::GET, url, None::<&()>).await
    }

    /// `POST /api/events`
    pub async fn create_event(&self, event: &EventRequest) -> Result<()> {
        let url = self.endpoint("/api/events", &[])?;
        self.send_unit(Method::POST, url, event).await
    }

    /// `POST /api/events/{id}/register`
    pub async fn register_for_event(
        &self,
        event_id: &RecordId,
        registration: &RegistrationRequest,
    ) -> Result<()> {
        let url = self.endpoint(&format!("/api/events/{event_id}/register"), &[])?;
        self.send_unit(Method::POST, url, registration).await
    }

    // =========================================================================
    // CAMPAIGNS
    // =========================================================================

    /// `GET /api/campaigns?search=&category=`
    pub async fn list_campaigns(&self, filter: &CampaignFilter) -> Result<Vec<Campaign>> {
        let url = self.endpoint("/api/campaigns", &filter.query_params())?;
        self.send_json(Method::GET, url, None::<&()>).await
    }

    /// `POST /api/campaigns`
    pub async fn create_campaign(&self, campaign: &CampaignRequest) -> Result<()> {
        let url = self.endpoint("/api/campaigns", &[])?;
        self.send_unit(Method::POST, url, campaign).await
    }

    /// `POST /api/campaigns/{id}/donate`
    pub async fn donate(&self, campaign_id: &RecordId, donation: &DonationRequest) -> Result<()> {
        let url = self.endpoint(&format!("/api/campaigns/{campaign_id}/donate"), &[])?;
        self.send_unit(Method::POST, url, donation).await
    }

    // =========================================================================
    // PLUMBING
    // =========================================================================

    /// Build `{base}{path}?{params}`, omitting the `?` when there are no params.
    fn endpoint(&self, path: &str, params: &[(&'static str, String)]) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        tracing::debug!("{} {}", method, url);
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send_json<B, T>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut builder = self.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = Self::check_status(builder.send().await?).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send a mutation whose response body is not needed.
    async fn send_unit<B>(&self, method: Method, url: Url, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self.request(method, url).json(body).send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Map non-2xx responses to [`ApiError::Server`], reading `message` from
    /// the JSON error body when there is one.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);

        tracing::debug!("Request failed with {}: {}", status, body);

        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alumni_model::QueryParams;

    #[test]
    fn test_endpoint_without_params() {
        let client = PortalClient::new("http://localhost:5000/").unwrap();
        let url = client.endpoint("/api/jobs", &QueryParams::new()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/jobs");
    }

    #[test]
    fn test_endpoint_encodes_params_in_order() {
        let client = PortalClient::new(DEFAULT_BASE_URL).unwrap();
        let filter = JobFilter {
            search: "data science".into(),
            location: "NYC".into(),
            job_type: String::new(),
            field: "AI & ML".into(),
        };
        let url = client.endpoint("/api/jobs", &filter.query_params()).unwrap();
        assert_eq!(
            url.query(),
            Some("search=data+science&location=NYC&field=AI+%26+ML")
        );
    }

    #[test]
    fn test_id_in_path() {
        let client = PortalClient::new(DEFAULT_BASE_URL).unwrap();
        let id = RecordId::from("65a1f0");
        let url = client
            .endpoint(&format!("/api/events/{id}/register"), &QueryParams::new())
            .unwrap();
        assert_eq!(url.path(), "/api/events/65a1f0/register");
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(matches!(
            PortalClient::new("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_empty_token_is_dropped() {
        let client = PortalClient::new(DEFAULT_BASE_URL)
            .unwrap()
            .with_token(Some(String::new()));
        assert_eq!(client.token(), None);
    }
}
