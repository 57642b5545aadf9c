use crate::errors::EngineResult;
use schema::SpeciesData;

/// Species data source. Implementations decide where per-generation species
/// records come from; the engine only asks questions through this trait.
pub trait Pokedex: Sync {
    /// Look up a species by its display name within a generation. Species
    /// not present in the generation yield `NotFoundError::Species`.
    fn species(&self, name: &str, gen: u8) -> EngineResult<SpeciesData>;

    /// Every species available in the given generation.
    fn species_in_generation(&self, gen: u8) -> Vec<SpeciesData>;
}
