// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;
use std::future::Future;

use url::Url;

use super::error::TransportError;

/// Metadata of a received HTTP response, kept as plain data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    pub url: Url,
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

impl fmt::Display for ResponseMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.status, self.url)?;
        for (name, value) in &self.headers {
            writeln!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}

/// A received response whose body has been read to completion
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub meta: ResponseMeta,
    pub body: Vec<u8>,
}

/// The transport capability the request pipeline runs on.
///
/// Only plain `GET` requests without headers or body are needed. Status codes
/// are not interpreted here: any response that arrives is handed back as is.
pub trait HttpClient: Clone + Send + Sync + 'static {
    fn get(&self, url: Url) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// [`HttpClient`] backed by a pooled [`reqwest::Client`]
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: Url) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
        let client = self.client.clone();

        async move {
            let response = client.get(url).send().await?;

            let meta = ResponseMeta {
                url: response.url().clone(),
                status: response.status().as_u16(),
                headers: response
                    .headers()
                    .iter()
                    .map(|(name, value)| {
                        (
                            name.to_string(),
                            String::from_utf8_lossy(value.as_bytes()).into_owned(),
                        )
                    })
                    .collect(),
            };
            let body = response.bytes().await?;

            Ok::<_, TransportError>(RawResponse {
                meta,
                body: body.to_vec(),
            })
        }
    }
}
