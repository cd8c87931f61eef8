// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::core::{
    ApiError, CallStyle, Endpoint, Fetched, HttpClient, PokeApi, ReqwestClient, Scheduler,
    Subscription, platform::require_runtime,
};
use crate::entities::Pokedex;

pub mod list;

pub use list::ListRow;

/// Messages delivered to the view through its [`Scheduler`]
#[derive(Debug)]
pub enum Message {
    LoadedPokedex(Result<Pokedex, ApiError>),
}

/// The Pokédex list view.
///
/// Owns the currently shown Pokédex and issues one fetch every time it
/// appears. Whichever fetch completes last is the one that stays on screen.
pub struct DexList<C = ReqwestClient> {
    /// Request pipeline
    api: PokeApi<C>,
    /// Call style picked once at startup
    call_style: CallStyle,
    /// Pokédex fetched on activation
    endpoint: Endpoint,
    /// Delivery context every fetch reports back to
    scheduler: Scheduler<Message>,
    /// Currently shown Pokédex
    pokedex: Option<Pokedex>,
    /// Keeps the stream based fetch alive
    cancellable: Option<Subscription>,
}

impl<C: HttpClient> DexList<C> {
    pub fn new(
        api: PokeApi<C>,
        call_style: CallStyle,
        endpoint: Endpoint,
        scheduler: Scheduler<Message>,
    ) -> Self {
        DexList {
            api,
            call_style,
            endpoint,
            scheduler,
            pokedex: None,
            cancellable: None,
        }
    }

    pub fn call_style(&self) -> CallStyle {
        self.call_style
    }

    pub fn pokedex(&self) -> Option<&Pokedex> {
        self.pokedex.as_ref()
    }

    /// Called every time the view becomes visible
    pub fn on_appear(&mut self) {
        match self.call_style {
            CallStyle::Suspend => {
                tracing::info!("Loading Pokédex with async/await");
                self.load_by_await();
            }
            CallStyle::Stream => {
                tracing::info!("Loading Pokédex with a stream");
                self.load_by_publisher();
            }
            CallStyle::Callback => {
                tracing::info!("Loading Pokédex with a callback");
                self.load_by_callback();
            }
        }
    }

    /// Called when the view is torn down
    pub fn on_disappear(&mut self) {
        self.cancellable = None;
        self.pokedex = None;
    }

    /// Appears once and applies the first message delivered within `wait`.
    ///
    /// Returns `false` when nothing arrived in time or every sender is gone.
    pub async fn appear_and_settle(
        &mut self,
        receiver: &mut UnboundedReceiver<Message>,
        wait: Duration,
    ) -> bool {
        self.on_appear();

        match tokio::time::timeout(wait, receiver.recv()).await {
            Ok(Some(message)) => {
                self.update(message);
                true
            }
            Ok(None) => false,
            Err(_) => {
                tracing::warn!(?wait, "No Pokédex delivered in time");
                false
            }
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::LoadedPokedex(Ok(pokedex)) => {
                tracing::info!(
                    name = %pokedex.name,
                    entries = pokedex.pokemon_entries.len(),
                    "Pokédex loaded"
                );
                self.pokedex = Some(pokedex);
            }
            Message::LoadedPokedex(Err(err)) => {
                tracing::error!("Failed to load Pokédex: {err}");
            }
        }
    }

    pub fn view(&self) -> Vec<ListRow> {
        list::rows(self.pokedex.as_ref())
    }

    fn load_by_await(&self) {
        let handle = match require_runtime() {
            Ok(handle) => handle,
            Err(err) => return self.fail(err),
        };

        let api = self.api.clone();
        let endpoint = self.endpoint.clone();
        let scheduler = self.scheduler.clone();

        handle.spawn(async move {
            let result = api.request::<Pokedex>(endpoint).await;
            scheduler.schedule(Message::LoadedPokedex(result.map(|fetched| fetched.data)));
        });
    }

    fn load_by_publisher(&mut self) {
        let subscription = self
            .api
            .publisher::<Pokedex>(self.endpoint.clone())
            .and_then(|publisher| {
                self.scheduler.receive_on(publisher, |result| {
                    Message::LoadedPokedex(result.map(|fetched| fetched.data))
                })
            });

        match subscription {
            Ok(subscription) => self.cancellable = Some(subscription),
            Err(err) => self.fail(err),
        }
    }

    fn load_by_callback(&self) {
        // the completion runs on the transport's context, hop back onto the scheduler
        let scheduler = self.scheduler.clone();
        let result = self.api.request_with(
            self.endpoint.clone(),
            move |result: Result<Fetched<Pokedex>, ApiError>| {
                scheduler.schedule(Message::LoadedPokedex(result.map(|fetched| fetched.data)));
            },
        );

        if let Err(err) = result {
            self.fail(err);
        }
    }

    /// Reports a fetch that could not even be started
    fn fail(&self, err: ApiError) {
        self.scheduler.schedule(Message::LoadedPokedex(Err(err)));
    }
}
