use crate::{Category, Color, Gender, PokemonType};
use serde::{Deserialize, Serialize};

/// Static, per-generation description of a species.
///
/// Species are identified by display name; the same name can resolve to
/// different records per generation (type charts and ability tables moved
/// between generations), which is why lookups always carry a generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub pokedex_number: u16,
    pub name: String,
    /// Generation this species first appeared in.
    pub generation: u8,
    pub types: Vec<PokemonType>,
    pub supported_genders: Vec<Gender>,
    /// Abilities the species can carry. Empty for generations before 3.
    pub abilities: Vec<String>,
    pub colors: Vec<Color>,
    pub categories: Vec<Category>,
    pub num_legs: u8,
    /// Names of the species this one can evolve into (direct targets only).
    pub evolves_to: Vec<String>,
}

impl SpeciesData {
    /// Whether the species can only ever be genderless.
    pub fn is_genderless(&self) -> bool {
        self.supported_genders == [Gender::Genderless]
    }

    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.types.contains(&pokemon_type)
    }

    /// True when the two species share at least one type.
    pub fn shares_type_with(&self, other: &SpeciesData) -> bool {
        self.types.iter().any(|t| other.types.contains(t))
    }

    pub fn can_evolve(&self) -> bool {
        !self.evolves_to.is_empty()
    }
}
