// SPDX-License-Identifier: GPL-3.0-only

use futures::{Stream, StreamExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use super::error::ApiError;
use super::platform::require_runtime;

/// The delivery context of the app.
///
/// Messages scheduled here are handled by whoever drains the receiver returned
/// from [`Scheduler::channel`], one at a time and in order. State owned by the
/// view is only ever touched from that loop.
#[derive(Debug)]
pub struct Scheduler<M> {
    sender: UnboundedSender<M>,
}

impl<M> Clone for Scheduler<M> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<M: Send + 'static> Scheduler<M> {
    pub fn channel() -> (Self, UnboundedReceiver<M>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Queues a message for the delivery loop, returns `false` once the loop is gone
    pub fn schedule(&self, message: M) -> bool {
        self.sender.send(message).is_ok()
    }

    /// Subscribes to `stream`, delivering every item onto this scheduler.
    ///
    /// The stream is polled on a tokio task; dropping the returned
    /// [`Subscription`] cancels it.
    pub fn receive_on<S, F>(&self, stream: S, mut map: F) -> Result<Subscription, ApiError>
    where
        S: Stream + Send + 'static,
        F: FnMut(S::Item) -> M + Send + 'static,
    {
        let handle = require_runtime()?;
        let sender = self.sender.clone();

        let task = handle.spawn(async move {
            let mut stream = Box::pin(stream);
            while let Some(item) = stream.next().await {
                if sender.send(map(item)).is_err() {
                    break;
                }
            }
        });

        Ok(Subscription { task })
    }
}

/// Handle to a running stream subscription, cancelled on drop
#[derive(Debug)]
pub struct Subscription {
    task: JoinHandle<()>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}
