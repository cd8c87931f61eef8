// SPDX-License-Identifier: GPL-3.0-only

/// Resources of PokéApi this app knows how to reach
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Pokedex(String),
}

impl Endpoint {
    /// Path relative to the API base URL. The identifier is used as is.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Pokedex(name) => format!("pokedex/{name}"),
        }
    }
}
