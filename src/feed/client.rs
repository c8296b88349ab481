use crate::feed::parser::{self, Article, ParseError};
use crate::feed::url::{default_base, endpoint_with_base};
use crate::filter::Filter;
use futures::StreamExt;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use url::Url;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Room for Loading plus the terminal value, so the producing task never
/// blocks on a slow receiver.
const OUTCOME_CAPACITY: usize = 2;

/// Errors that can occur during one fetch-then-parse cycle.
///
/// None of these are retried; each becomes the message of a terminal
/// [`FetchOutcome::Error`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, reset).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Request exceeded the 30-second timeout.
    #[error("request timed out")]
    Timeout,
    /// HTTP response with a non-2xx status code.
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Response body exceeded the 10MB size limit.
    #[error("response too large")]
    ResponseTooLarge,
    /// Feed XML could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// The tri-state result of one retrieval cycle.
///
/// Each fetch delivers `Loading` first, exactly once, followed by exactly
/// one terminal value. A superseded or canceled fetch instead closes its
/// channel with no terminal value at all.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The fetch has started; emitted before any I/O.
    Loading,
    /// Terminal: the feed was retrieved and parsed. An empty feed (or empty
    /// response body) is a successful empty list.
    Loaded(Vec<Article>),
    /// Terminal: the fetch or parse failed, with a human-readable message.
    Error(String),
}

/// Orchestrates fetch-then-parse cycles against the feed endpoints.
///
/// One network operation is in flight per client at a time: a new
/// [`request_feed`](FeedClient::request_feed) call aborts the previous
/// operation, and dropping the client aborts whatever is still pending.
/// Callers wanting parallel fetches for different filters use one client
/// per fetch.
pub struct FeedClient {
    http: reqwest::Client,
    base: Url,
    in_flight: Option<JoinHandle<()>>,
}

impl FeedClient {
    /// Creates a client against the production feed origin.
    pub fn new() -> Self {
        Self::with_base(reqwest::Client::new(), default_base())
    }

    /// Creates a client with a caller-supplied HTTP client and origin.
    ///
    /// Tests point `base` at a local mock server; callers can also inject a
    /// preconfigured `reqwest::Client` (proxy, UA, connect timeout).
    pub fn with_base(http: reqwest::Client, base: Url) -> Self {
        Self {
            http,
            base,
            in_flight: None,
        }
    }

    /// Starts one retrieval cycle for `filter` and returns the outcome
    /// stream for that cycle.
    ///
    /// `Loading` is delivered synchronously, before any I/O; the terminal
    /// `Loaded`/`Error` arrives from a background task. Any still-pending
    /// cycle on this client is canceled first, closing its channel without
    /// a terminal value. Each call gets its own receiver, so outcomes from
    /// different cycles can never be confused.
    pub fn request_feed(&mut self, filter: Filter) -> mpsc::Receiver<FetchOutcome> {
        self.cancel();

        let (tx, rx) = mpsc::channel(OUTCOME_CAPACITY);
        // Fresh channel with capacity 2: this cannot fail.
        let _ = tx.try_send(FetchOutcome::Loading);

        let url = endpoint_with_base(&self.base, filter);
        let http = self.http.clone();
        let handle = tokio::spawn(async move {
            let outcome = match fetch_articles(&http, url.clone()).await {
                Ok(articles) => {
                    tracing::debug!(url = %url, count = articles.len(), "feed fetched");
                    FetchOutcome::Loaded(articles)
                }
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "feed fetch failed");
                    FetchOutcome::Error(e.to_string())
                }
            };
            if tx.send(outcome).await.is_err() {
                tracing::debug!(url = %url, "outcome receiver dropped before delivery");
            }
        });
        self.in_flight = Some(handle);

        rx
    }

    /// Aborts the pending fetch, if any. The superseded cycle's channel
    /// closes without a terminal outcome.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FeedClient {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// One GET, one parse. No retries.
async fn fetch_articles(http: &reqwest::Client, url: Url) -> Result<Vec<Article>, FetchError> {
    let response = tokio::time::timeout(FETCH_TIMEOUT, http.get(url).send())
        .await
        .map_err(|_| FetchError::Timeout)??;

    if !response.status().is_success() {
        return Err(FetchError::HttpStatus(response.status().as_u16()));
    }

    let bytes = read_limited_bytes(response, MAX_BODY_SIZE).await?;

    // An empty body is an empty result, not an error.
    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    Ok(parser::parse(&bytes)?)
}

/// Reads the response body with a size cap using stream-based reading.
async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Transport)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
