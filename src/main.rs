// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

use anywho::Error;
use dexlist::{
    app::{DexList, list},
    config::DexConfig,
    core::{Capabilities, PokeApi, ReqwestClient, Scheduler},
    logging,
};

/// How long the list waits for its first Pokédex before rendering anyway
const SETTLE_TIMEOUT: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = DexConfig::load();

    // The log level lives in the config, so errors loading it are reported after init
    match &config {
        Ok(config) => logging::init(&config.log_level),
        Err(_) => logging::init(&DexConfig::default().log_level),
    }
    let config = config.unwrap_or_else(|err| {
        tracing::warn!("Failed to load config, using defaults: {err}");
        DexConfig::default()
    });

    let call_style = Capabilities::detect().select(config.call_style);
    let api = PokeApi::new(config.api_config(), ReqwestClient::new()?);
    let (scheduler, mut receiver) = Scheduler::channel();
    let mut app = DexList::new(api, call_style, config.endpoint(), scheduler);
    tracing::debug!(call_style = ?app.call_style(), base_url = %config.base_url, "starting");

    app.appear_and_settle(&mut receiver, SETTLE_TIMEOUT).await;

    print!("{}", list::render(&app.view()));
    app.on_disappear();

    Ok(())
}
