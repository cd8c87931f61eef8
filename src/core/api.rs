// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};
use serde::de::DeserializeOwned;
use tokio::runtime::{Builder, Handle};
use url::Url;

use super::endpoint::Endpoint;
use super::error::{ApiError, TransportError};
use super::http::{HttpClient, RawResponse, ReqwestClient, ResponseMeta};
use super::platform::require_runtime;

pub const BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Read-only settings shared by every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix every endpoint path is appended to, expected to end with `/`
    pub base_url: String,
    /// Log every response and its JSON body at debug level
    pub dump_responses: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            dump_responses: false,
        }
    }
}

/// A decoded body together with the metadata of the response it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub data: T,
    pub response: ResponseMeta,
}

/// PokéApi request pipeline.
///
/// The same fetch can be issued three ways: awaited with [`PokeApi::request`],
/// subscribed to with [`PokeApi::publisher`], or handed a completion closure
/// with [`PokeApi::request_with`]. All of them build the URL, perform a single
/// `GET` and decode the body the same way.
#[derive(Debug)]
pub struct PokeApi<C = ReqwestClient> {
    config: Arc<ApiConfig>,
    client: C,
}

impl<C: Clone> Clone for PokeApi<C> {
    fn clone(&self) -> Self {
        PokeApi {
            config: Arc::clone(&self.config),
            client: self.client.clone(),
        }
    }
}

impl<C: HttpClient> PokeApi<C> {
    pub fn new(config: ApiConfig, client: C) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }

    /// Absolute URL of `endpoint`
    pub fn url(&self, endpoint: &Endpoint) -> Result<Url, ApiError> {
        let url = format!("{}{}", self.config.base_url, endpoint.path());
        Url::parse(&url).map_err(|source| ApiError::InvalidUrl { url, source })
    }

    /// Fetches `endpoint` and decodes it as `T`.
    ///
    /// Fails with [`ApiError::UnsupportedRuntime`] before touching the network
    /// when it is not awaited from within a tokio runtime.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> Result<Fetched<T>, ApiError> {
        require_runtime()?;
        let url = self.url(&endpoint)?;

        tracing::debug!(schema = std::any::type_name::<T>(), %url, "awaiting request");
        execute(&self.client, &self.config, url).await
    }

    /// Stream that performs the fetch when first polled, yields its single
    /// outcome and completes.
    ///
    /// An invalid URL is reported right away instead of through the stream.
    /// Polled outside of a tokio runtime, the stream yields
    /// [`ApiError::UnsupportedRuntime`] without touching the network.
    pub fn publisher<T>(
        &self,
        endpoint: Endpoint,
    ) -> Result<BoxStream<'static, Result<Fetched<T>, ApiError>>, ApiError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.url(&endpoint)?;
        let client = self.client.clone();
        let config = Arc::clone(&self.config);

        Ok(stream::once(async move {
            require_runtime()?;
            execute(&client, &config, url).await
        })
        .boxed())
    }

    /// Performs the fetch in the background and calls `completion` once with its outcome.
    ///
    /// The request is spawned on the current tokio runtime when there is one,
    /// otherwise on a dedicated thread running its own runtime. `completion`
    /// runs on that same context. An invalid URL is reported right away and
    /// `completion` is never called.
    pub fn request_with<T, F>(&self, endpoint: Endpoint, completion: F) -> Result<(), ApiError>
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(Result<Fetched<T>, ApiError>) + Send + 'static,
    {
        let url = self.url(&endpoint)?;
        let client = self.client.clone();
        let config = Arc::clone(&self.config);

        if let Ok(handle) = Handle::try_current() {
            handle.spawn(async move { completion(execute(&client, &config, url).await) });
            return Ok(());
        }

        std::thread::Builder::new()
            .name("dexlist-request".to_string())
            .spawn(move || {
                let runtime = match Builder::new_current_thread().enable_all().build() {
                    Ok(runtime) => runtime,
                    Err(err) => return completion(Err(TransportError::new(err).into())),
                };
                completion(runtime.block_on(execute(&client, &config, url)));
            })
            .map_err(TransportError::new)?;

        Ok(())
    }
}

async fn execute<C, T>(client: &C, config: &ApiConfig, url: Url) -> Result<Fetched<T>, ApiError>
where
    C: HttpClient,
    T: DeserializeOwned,
{
    tracing::debug!(%url, "GET");
    let RawResponse { meta, body } = client.get(url).await?;
    tracing::debug!(status = meta.status, bytes = body.len(), "response received");

    if config.dump_responses {
        debug_dump(&meta, &body);
    }

    let data = decode(&body)?;
    Ok(Fetched {
        data,
        response: meta,
    })
}

pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

/// Logs the response and its JSON body, never fails
fn debug_dump(meta: &ResponseMeta, body: &[u8]) {
    if !tracing::enabled!(target: "dexlist::dump", tracing::Level::DEBUG) {
        return;
    }

    match render_dump(meta, body) {
        Ok(dump) => tracing::debug!(target: "dexlist::dump", "{dump}"),
        Err(err) => tracing::trace!(target: "dexlist::dump", %err, "response body is not JSON"),
    }
}

fn render_dump(meta: &ResponseMeta, body: &[u8]) -> Result<String, serde_json::Error> {
    let json: serde_json::Value = serde_json::from_slice(body)?;
    let json = serde_json::to_string_pretty(&json)?;

    Ok(format!(
        "---------HTTP RESPONSE-------\n{meta}--------DATA--------\n{json}\n-------------"
    ))
}
