use crate::error::{ApiError, Result};
use reqwest::{Client, Method, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::api::{
    ErrorBody, TokenRequest, TokenResponse, TopTracksResponse, WaitlistOutcome, WaitlistRequest,
};
use tracing::{debug, info};
use url::Url;

/// Thin client for the SoundFrame backend: OAuth login entry point, token
/// exchange, top-artist aggregation and the early-access waitlist.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: Url,
    client: Client,
}

#[derive(Default)]
pub struct BackendClientBuilder {
    base_url: Option<String>,
}

impl BackendClientBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn build(self) -> Result<BackendClient> {
        let base_url_str = self.base_url.ok_or(ApiError::NotConfigured)?;
        // Normalize to a trailing slash so join() appends instead of replacing
        // the last path segment.
        let base_url = Url::parse(&format!("{}/", base_url_str.trim_end_matches('/')))?;

        Ok(BackendClient {
            base_url,
            client: Client::new(),
        })
    }
}

impl BackendClient {
    pub fn builder() -> BackendClientBuilder {
        BackendClientBuilder::new()
    }

    /// The OAuth entry point. Navigated to with a full page load, never XHR;
    /// the backend redirects on to Spotify from there.
    pub fn login_url(&self) -> Result<Url> {
        Ok(self.base_url.join("login")?)
    }

    /// Exchanges the `user_id` handed back by the OAuth callback for an
    /// access token.
    pub async fn get_access_token(&self, user_id: &str) -> Result<String> {
        let token: TokenResponse = self
            .make_request(
                Method::POST,
                "get_access_token",
                Some(&TokenRequest {
                    user_id: user_id.to_string(),
                }),
            )
            .await?;
        Ok(token.access_token)
    }

    /// Fetches the user's top artists together with the prompt the backend
    /// built from them.
    pub async fn get_user_top_tracks(&self, user_id: &str) -> Result<TopTracksResponse> {
        let mut url = self.base_url.join("get_user_top_tracks")?;
        url.query_pairs_mut().append_pair("user_id", user_id);
        debug!("Request: GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::handle_response(response).await
    }

    /// Submits an email to the early-access list. 403 (list full) and 409
    /// (duplicate) are outcomes, not errors; anything else non-2xx is an
    /// [`ApiError::Api`] carrying the backend's message when parseable.
    pub async fn join_waitlist(&self, email: &str) -> Result<WaitlistOutcome> {
        let url = self.base_url.join("earlyaccess")?;
        info!("Submitting waitlist signup");
        let response = self
            .client
            .post(url)
            .json(&WaitlistRequest {
                email: email.to_string(),
            })
            .send()
            .await?;

        let status = response.status().as_u16();
        if let Some(outcome) = waitlist_outcome(status) {
            return Ok(outcome);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error body".to_string());
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);
        Err(ApiError::Api { status, message })
    }

    async fn make_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<B>,
    ) -> Result<T> {
        let url = self.base_url.join(endpoint)?;
        debug!("Request: {} {}", method, url);
        let mut request = self.client.request(method, url);
        if let Some(b) = body {
            request = request.json(&b);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let text = response.text().await?;
            serde_json::from_str(&text).map_err(|e| ApiError::Api {
                status: status.as_u16(),
                message: format!("JSON parse error: {e}"),
            })
        } else {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            Err(ApiError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

/// Maps a waitlist response status to its outcome, or `None` when the status
/// means a real failure.
fn waitlist_outcome(status: u16) -> Option<WaitlistOutcome> {
    match status {
        200 | 201 => Some(WaitlistOutcome::Joined),
        403 => Some(WaitlistOutcome::ListFull),
        409 => Some(WaitlistOutcome::AlreadyJoined),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_base_url() {
        assert!(matches!(
            BackendClientBuilder::new().build(),
            Err(ApiError::NotConfigured)
        ));
    }

    #[test]
    fn builder_normalizes_trailing_slash() {
        let client = BackendClient::builder()
            .base_url("https://api.soundframe.app///")
            .build()
            .unwrap();
        assert_eq!(
            client.login_url().unwrap().as_str(),
            "https://api.soundframe.app/login"
        );
    }

    #[test]
    fn login_url_appends_to_base_path() {
        let client = BackendClient::builder()
            .base_url("https://example.com/api")
            .build()
            .unwrap();
        assert_eq!(
            client.login_url().unwrap().as_str(),
            "https://example.com/api/login"
        );
    }

    #[test]
    fn waitlist_success_statuses() {
        assert_eq!(waitlist_outcome(200), Some(WaitlistOutcome::Joined));
        assert_eq!(waitlist_outcome(201), Some(WaitlistOutcome::Joined));
    }

    #[test]
    fn waitlist_full_and_duplicate_are_outcomes() {
        assert_eq!(waitlist_outcome(403), Some(WaitlistOutcome::ListFull));
        assert_eq!(waitlist_outcome(409), Some(WaitlistOutcome::AlreadyJoined));
    }

    #[test]
    fn other_statuses_are_failures() {
        assert_eq!(waitlist_outcome(400), None);
        assert_eq!(waitlist_outcome(500), None);
    }
}
