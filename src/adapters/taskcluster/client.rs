//! Deployment handle and per-service REST client
//!
//! A [`Deployment`] names one Taskcluster deployment (root URL plus optional
//! credentials) and hands out [`ServiceClient`]s for individual services.
//! Service URLs follow the deployment scheme
//! `{root_url}/api/{service}/v1/{path}`.
//!
//! Credentials, when present, are sent as HTTP Basic auth with the client id
//! as username and the access token as password. The source deployment is
//! accessed anonymously.

use crate::config::Credentials;
use crate::domain::{ApiError, MigrateError, Result};
use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, ClientBuilder, RequestBuilder};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// One Taskcluster deployment endpoint
///
/// Cheap to clone; the underlying HTTP connection pool is shared between
/// clones and between the service clients created from them.
#[derive(Debug, Clone)]
pub struct Deployment {
    http: Client,
    root_url: Url,
    credentials: Option<Credentials>,
}

impl Deployment {
    /// Create a deployment handle
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the HTTP client cannot be built.
    pub fn new(root_url: Url, credentials: Option<Credentials>) -> Result<Self> {
        let http = ClientBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| {
                MigrateError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            root_url,
            credentials,
        })
    }

    /// Client for one service of this deployment, e.g. `secrets`
    pub fn service(&self, name: &str) -> ServiceClient {
        ServiceClient {
            http: self.http.clone(),
            root_url: self.root_url.clone(),
            service: name.to_string(),
            credentials: self.credentials.clone(),
        }
    }

    /// Root URL of this deployment
    pub fn root_url(&self) -> &Url {
        &self.root_url
    }
}

/// REST client for a single service of a deployment
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: Client,
    root_url: Url,
    service: String,
    credentials: Option<Credentials>,
}

impl ServiceClient {
    /// Build the request URL for the given path segments
    ///
    /// Segments are percent-encoded individually, so identifiers containing
    /// `/` (hook names, scoped client ids) stay single segments on the wire.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.root_url.clone();
        url.path_segments_mut()
            .expect("root URL validated at startup")
            .pop_if_empty()
            .extend(["api", self.service.as_str(), "v1"])
            .extend(segments);
        url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some(credentials) => {
                let raw = format!(
                    "{}:{}",
                    credentials.client_id,
                    credentials.access_token.expose_secret().as_ref()
                );
                let encoded = general_purpose::STANDARD.encode(raw.as_bytes());
                request.header(reqwest::header::AUTHORIZATION, format!("Basic {encoded}"))
            }
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed(format!("{}: {e}", self.service)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        tracing::debug!(
            service = %self.service,
            status = status.as_u16(),
            "request failed"
        );
        Err(ApiError::from_status(status.as_u16(), message).into())
    }

    /// GET a JSON resource
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.get_paged(segments, None).await
    }

    /// GET a JSON resource, passing a continuation token when present
    pub async fn get_paged<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        continuation: Option<&str>,
    ) -> Result<T> {
        let mut url = self.endpoint(segments);
        if let Some(token) = continuation {
            url.query_pairs_mut().append_pair("continuationToken", token);
        }

        let response = self.execute(self.http.get(url)).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("{}: {e}", self.service)).into())
    }

    /// PUT a JSON body, discarding the response body
    pub async fn put<B: Serialize + ?Sized>(&self, segments: &[&str], body: &B) -> Result<()> {
        let url = self.endpoint(segments);
        self.execute(self.http.put(url).json(body)).await?;
        Ok(())
    }

    /// POST a JSON body, discarding the response body
    pub async fn post<B: Serialize + ?Sized>(&self, segments: &[&str], body: &B) -> Result<()> {
        let url = self.endpoint(segments);
        self.execute(self.http.post(url).json(body)).await?;
        Ok(())
    }
}
