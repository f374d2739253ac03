//! REST client for the facility backend

use serde::{de::DeserializeOwned, Serialize};

/// Error type for backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("service responded with status {code}")]
    Status { code: u16 },
}

/// Thin typed wrapper over the backend's REST API.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// GET a JSON resource.
    pub async fn get<R>(&self, path: &str, query: &[(&str, String)]) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        let mut req = self.client.get(self.url(path)).query(query);
        if let Some(token) = &self.auth_token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(path, code = status.as_u16(), "backend returned error status");
            return Err(ClientError::Status {
                code: status.as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    /// GET an opaque text payload (CSV export).
    pub async fn get_text(&self, path: &str, query: &[(&str, String)]) -> Result<String, ClientError> {
        let mut req = self.client.get(self.url(path)).query(query);
        if let Some(token) = &self.auth_token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(path, code = status.as_u16(), "backend returned error status");
            return Err(ClientError::Status {
                code: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }

    /// POST a JSON body, expecting no response payload. The backend
    /// answers these with 204; any success status is accepted.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<(), ClientError>
    where
        B: Serialize,
    {
        let mut req = self.client.post(self.url(path)).json(body);
        if let Some(token) = &self.auth_token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(path, code = status.as_u16(), "backend returned error status");
            return Err(ClientError::Status {
                code: status.as_u16(),
            });
        }
        Ok(())
    }

    /// POST a JSON body and decode a JSON response.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let mut req = self.client.post(self.url(path)).json(body);
        if let Some(token) = &self.auth_token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                code: status.as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Client for server-side requests, pointed at the backend by `API_URL`.
#[cfg(feature = "server")]
pub fn server_client() -> ApiClient {
    let url = std::env::var("API_URL")
        .unwrap_or_else(|_| "http://localhost:9000/api/v1".to_string());
    ApiClient::new(url)
}

/// Server client carrying the current session's bearer token, when one
/// exists.
#[cfg(feature = "server")]
pub async fn session_client() -> ApiClient {
    match crate::auth::session_token().await {
        Some(token) => server_client().with_token(token),
        None => server_client(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reports_the_code() {
        let err = ClientError::Status { code: 404 };
        assert_eq!(err.to_string(), "service responded with status 404");
    }
}
