// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};
use tokio::runtime::{Handle, RuntimeFlavor};

use super::error::ApiError;

/// The ways a fetch can be issued, from the most to the least capable platform
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CallStyle {
    /// `async`/`.await` on a spawned task
    Suspend,
    /// A single-value stream delivered through the scheduler
    Stream,
    /// A completion closure called once
    Callback,
}

/// What kind of async runtime the process is running under
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Runtime {
    MultiThread,
    CurrentThread,
    Unavailable,
}

/// Platform capabilities, probed once at startup
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Capabilities {
    runtime: Runtime,
}

impl Capabilities {
    pub fn new(runtime: Runtime) -> Self {
        Self { runtime }
    }

    /// Probes the runtime of the calling thread
    pub fn detect() -> Self {
        let runtime = match Handle::try_current() {
            Ok(handle) => match handle.runtime_flavor() {
                RuntimeFlavor::MultiThread => Runtime::MultiThread,
                _ => Runtime::CurrentThread,
            },
            Err(_) => Runtime::Unavailable,
        };

        Self { runtime }
    }

    pub fn runtime(&self) -> Runtime {
        self.runtime
    }

    pub fn supports(&self, style: CallStyle) -> bool {
        match style {
            CallStyle::Suspend | CallStyle::Stream => self.runtime != Runtime::Unavailable,
            CallStyle::Callback => true,
        }
    }

    pub fn preferred_style(&self) -> CallStyle {
        match self.runtime {
            Runtime::MultiThread => CallStyle::Suspend,
            Runtime::CurrentThread => CallStyle::Stream,
            Runtime::Unavailable => CallStyle::Callback,
        }
    }

    /// Picks the requested style when this platform can run it, the preferred one otherwise
    pub fn select(&self, requested: Option<CallStyle>) -> CallStyle {
        match requested {
            Some(style) if self.supports(style) => style,
            Some(style) => {
                let fallback = self.preferred_style();
                tracing::warn!(
                    requested = ?style,
                    fallback = ?fallback,
                    "call style not supported on this platform"
                );
                fallback
            }
            None => self.preferred_style(),
        }
    }
}

/// Fails with [`ApiError::UnsupportedRuntime`] outside of a tokio runtime
pub fn require_runtime() -> Result<Handle, ApiError> {
    Handle::try_current().map_err(|_| ApiError::UnsupportedRuntime)
}
