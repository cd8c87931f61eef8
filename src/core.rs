// SPDX-License-Identifier: GPL-3.0-only

pub mod api;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod platform;
pub mod scheduler;

pub use api::{ApiConfig, Fetched, PokeApi};
pub use endpoint::Endpoint;
pub use error::{ApiError, TransportError};
pub use http::{HttpClient, RawResponse, ReqwestClient, ResponseMeta};
pub use platform::{CallStyle, Capabilities};
pub use scheduler::{Scheduler, Subscription};
