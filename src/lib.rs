// Locke Manager - a rules engine for challenge runs
//
// The crate is organized around three seams: `Action` (one operation on
// one creature), `Variant` (a ruleset governing a run) and `Pokedex` (the
// species data source). `Engine` ties them together over a `Run` value;
// `init` builds new runs through a staged wizard and `store` persists
// them.

pub mod actions;
pub mod containers;
pub mod creature;
pub mod dex;
pub mod engine;
pub mod errors;
pub mod games;
pub mod init;
pub mod run;
pub mod store;
pub mod variants;

pub use actions::{Action, ActionCtx, ActionName, ActionOptions, ExecutionOutcome};
pub use containers::{Squad, Storage, MAX_SQUAD_SIZE};
pub use creature::{generate_id, ChessRole, Creature, CreatureStatus};
pub use dex::Pokedex;
pub use engine::Engine;
pub use errors::{EngineError, EngineResult, NotFoundError};
pub use init::{finalize, progress, set_starter, set_value, CreationProgress, RunCreation};
pub use run::{Battle, CatalogEntry, Encounter, EncounterStatus, ExtraInfo, Run};
pub use store::{finish_run, load_run, save_run, MemoryStore, RunSlot, RunStore};
pub use variants::{get_variant, variant_names, StepInfo, Variant};

#[cfg(test)]
mod tests;
