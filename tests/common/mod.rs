//! A tiny stand-in for PokéApi serving the `pokedex/{name}` route.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::{Router, extract::Path, http::StatusCode, routing::get};
use tokio::net::TcpListener;

pub const KANTO: &str = r#"{
    "descriptions": [{ "description": "Kanto region Pokédex", "language": { "name": "en", "url": "" } }],
    "id": 2,
    "is_main_series": true,
    "name": "kanto",
    "pokemon_entries": [
        { "entry_number": 1, "pokemon_species": { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/" } },
        { "entry_number": 2, "pokemon_species": { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon-species/2/" } },
        { "entry_number": 3, "pokemon_species": { "name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon-species/3/" } }
    ]
}"#;

pub const BROKEN: &str =
    r#"{"name":"broken","id":99,"pokemon_entries":[{"pokemon_species":{"name":"missingno"}}]}"#;

pub fn app() -> Router {
    Router::new().route("/api/v2/pokedex/{name}", get(pokedex))
}

async fn pokedex(Path(name): Path<String>) -> (StatusCode, &'static str) {
    match name.as_str() {
        "2" | "kanto" => (StatusCode::OK, KANTO),
        "broken" => (StatusCode::OK, BROKEN),
        _ => (StatusCode::NOT_FOUND, "Not Found"),
    }
}

/// Serves the mock on a random port of the current runtime, returns its base URL
pub async fn spawn() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app()).await });
    base_url(addr)
}

/// Serves the mock from its own thread, for tests that run without a runtime
pub fn spawn_detached() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = TcpListener::from_std(std_listener).unwrap();
            axum::serve(listener, app()).await
        })
    });

    base_url(addr)
}

/// Base URL of a port nothing listens on
pub fn unreachable() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    base_url(addr)
}

fn base_url(addr: SocketAddr) -> String {
    format!("http://{addr}/api/v2/")
}
