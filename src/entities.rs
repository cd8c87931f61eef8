// SPDX-License-Identifier: GPL-3.0-only

mod pokedex;

pub use pokedex::Pokedex;
pub use pokedex::PokemonEntry;
pub use pokedex::Species;
