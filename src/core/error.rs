// SPDX-License-Identifier: GPL-3.0-only

use thiserror::Error;

/// Errors returned by every call style of [`PokeApi`](super::api::PokeApi)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request failed: {0}")]
    Request(#[from] TransportError),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Awaiting a request needs a tokio runtime to drive the transport.
    #[error("no async runtime available to await the request")]
    UnsupportedRuntime,
}

/// Anything that went wrong below the HTTP layer
#[derive(Debug, Error)]
#[error(transparent)]
pub struct TransportError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            inner: source.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err)
    }
}
