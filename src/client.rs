use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

use crate::backend::Backend;
use crate::client_logger::ClientLogger;
use crate::error::{Error, Result};
use crate::observability::{CLIENT_REQUEST_DURATION, CLIENT_REQUEST_ERRORS, CLIENT_REQUESTS};
use crate::types::{
    ChatRequest, ChatResponse, ErrorBody, HealthStatus, SummarizeRequest, SummarizeResponse,
};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Environment variable consulted for the base URL.
pub const BASE_URL_ENV: &str = "VIDRECAP_BASE_URL";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Message shown when summarization fails without a usable `detail`.
pub const SUMMARIZE_FALLBACK: &str = "Failed to summarize video";

/// Message shown when a chat message fails without a usable `detail`.
pub const CHAT_FALLBACK: &str = "Failed to get response";

const SUMMARIZE_PATH: &str = "api/summarize";
const CHAT_PATH: &str = "api/chat";
const HEALTH_PATH: &str = "api/health";

/// HTTP client for the video summarization service.
#[derive(Clone)]
pub struct Vidrecap {
    client: ReqwestClient,
    base_url: Url,
    timeout: Duration,
    logger: Option<Arc<dyn ClientLogger>>,
}

impl Vidrecap {
    /// Create a new client.
    ///
    /// The base URL can be provided directly or read from the
    /// VIDRECAP_BASE_URL environment variable; otherwise the service is
    /// assumed to run on localhost port 8000.
    pub fn new(base_url: Option<String>) -> Result<Self> {
        Self::with_options(base_url, None)
    }

    /// Create a new client with custom settings.
    pub fn with_options(base_url: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url
            .or_else(|| env::var(BASE_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(&base_url)?;

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(Error::config("timeout must be greater than zero"));
        }
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .default_headers(default_headers())
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        Ok(Self {
            client,
            base_url,
            timeout,
            logger: None,
        })
    }

    /// Attach a logger that observes every round trip.
    pub fn with_logger(mut self, logger: Arc<dyn ClientLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// The base URL endpoints are resolved against.  Always ends in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Summarize a video and open a chat session for it.
    pub async fn summarize(&self, request: SummarizeRequest) -> Result<SummarizeResponse> {
        let result = self
            .post::<_, SummarizeResponse>(SUMMARIZE_PATH, &request, SUMMARIZE_FALLBACK)
            .await;
        match (&result, &self.logger) {
            (Ok(response), Some(logger)) => logger.log_summarize(&request, response),
            (Err(err), Some(logger)) => logger.log_error(SUMMARIZE_PATH, err),
            (_, None) => {}
        }
        result
    }

    /// Send one chat message within an existing session.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let result = self
            .post::<_, ChatResponse>(CHAT_PATH, &request, CHAT_FALLBACK)
            .await;
        match (&result, &self.logger) {
            (Ok(response), Some(logger)) => logger.log_chat(&request, response),
            (Err(err), Some(logger)) => logger.log_error(CHAT_PATH, err),
            (_, None) => {}
        }
        result
    }

    /// Ask the service whether it is up.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint(HEALTH_PATH)?;
        let start = Instant::now();
        CLIENT_REQUESTS.click();
        tracing::debug!(%url, "checking service health");
        let outcome = async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| self.transport_error(e))?;
            if !response.status().is_success() {
                return Err(
                    Self::process_error_response(response, "Health check failed").await,
                );
            }
            response
                .json::<HealthStatus>()
                .await
                .map_err(|e| self.transport_error(e))
        }
        .await;
        self.finish(HEALTH_PATH, start, outcome)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn post<Req, Resp>(&self, path: &str, body: &Req, fallback: &str) -> Result<Resp>
    where
        Req: Serialize + Sync + ?Sized,
        Resp: DeserializeOwned + Send,
    {
        let url = self.endpoint(path)?;
        let start = Instant::now();
        CLIENT_REQUESTS.click();
        tracing::debug!(%url, "sending request");
        let outcome = async {
            let response = self
                .client
                .post(url)
                .json(body)
                .send()
                .await
                .map_err(|e| self.transport_error(e))?;

            if !response.status().is_success() {
                return Err(Self::process_error_response(response, fallback).await);
            }

            response
                .json::<Resp>()
                .await
                .map_err(|e| self.transport_error(e))
        }
        .await;
        self.finish(path, start, outcome)
    }

    fn finish<T>(&self, path: &str, start: Instant, outcome: Result<T>) -> Result<T> {
        CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());
        if let Err(err) = &outcome {
            CLIENT_REQUEST_ERRORS.click();
            tracing::warn!(endpoint = path, error = %err, "request failed");
        }
        outcome
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::timeout(
                format!("Request timed out: {}", e),
                Some(self.timeout.as_secs_f64()),
            )
        } else if e.is_connect() {
            Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
        } else if e.is_decode() {
            Error::serialization(
                format!("Failed to parse response: {}", e),
                Some(Box::new(e)),
            )
        } else {
            Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
        }
    }

    /// Turn a non-success response into a remote error.
    ///
    /// The message is the body's `detail` when it is a non-empty string, and
    /// `fallback` otherwise.
    async fn process_error_response(response: Response, fallback: &str) -> Error {
        let status_code = response.status().as_u16();
        let message = match response.text().await {
            Ok(body) => ErrorBody::parse(&body)
                .message()
                .map(String::from)
                .unwrap_or_else(|| fallback.to_string()),
            Err(_) => fallback.to_string(),
        };
        Error::remote(status_code, message)
    }
}

impl fmt::Debug for Vidrecap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vidrecap")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

#[async_trait::async_trait]
impl Backend for Vidrecap {
    async fn summarize(&self, request: SummarizeRequest) -> Result<SummarizeResponse> {
        Vidrecap::summarize(self, request).await
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        Vidrecap::chat(self, request).await
    }
}

/// Create and return default headers for API requests.
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Parse a base URL, making sure relative endpoints resolve beneath it.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let mut url = Url::parse(raw)?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::url(
            format!("base URL must be an http or https URL: {raw}"),
            None,
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
