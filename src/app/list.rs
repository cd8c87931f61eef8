// SPDX-License-Identifier: GPL-3.0-only

use crate::entities::{Pokedex, PokemonEntry};

/// A row of the Pokédex list, keyed by entry number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: i64,
    pub label: String,
}

impl From<&PokemonEntry> for ListRow {
    fn from(entry: &PokemonEntry) -> Self {
        ListRow {
            id: entry.entry_number,
            label: entry.pokemon_species.name.clone(),
        }
    }
}

/// One row per entry, in the order the API returned them
pub fn rows(pokedex: Option<&Pokedex>) -> Vec<ListRow> {
    pokedex
        .map(|pokedex| pokedex.pokemon_entries.iter().map(ListRow::from).collect())
        .unwrap_or_default()
}

/// Formats rows as text lines with right aligned entry numbers
pub fn render(rows: &[ListRow]) -> String {
    let width = rows
        .iter()
        .map(|row| row.id.to_string().len())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|row| format!("{:>width$}  {}\n", row.id, row.label))
        .collect()
}
