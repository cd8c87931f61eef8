// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// A regional Pokédex as returned by the `pokedex/{name}` route of PokéApi
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Pokedex {
    pub name: String,
    pub id: i64,
    pub pokemon_entries: Vec<PokemonEntry>,
}

/// One numbered entry of a Pokédex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PokemonEntry {
    pub entry_number: i64,
    pub pokemon_species: Species,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
}
